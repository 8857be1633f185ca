use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "refpages")]
#[command(
  author,
  version,
  about = "mkdocstrings reference page generator",
  styles = Colors::clap_styles()
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate reference stubs and the navigation summary
  Generate(GenerateCommand),
  /// List configured projects and the pages they would produce
  List(ListCommand),
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
  /// Project table (.json, .yaml, .yml or .toml). Uses the built-in table when omitted
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Directory that project source paths are resolved against
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub root: PathBuf,
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  #[command(flatten)]
  pub project: ProjectArgs,

  /// Directory the generated pages are written into (the mkdocs docs_dir)
  #[arg(short, long, value_name = "DIR", default_value = "docs")]
  pub docs_dir: PathBuf,

  /// Write the "edit this page" mapping as a JSON manifest
  #[arg(long, value_name = "FILE")]
  pub edit_paths: Option<PathBuf>,

  /// Report what would be written without touching the filesystem
  #[arg(long, default_value_t = false)]
  pub dry_run: bool,

  /// Enable verbose output with every staged file and warning
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct ListCommand {
  #[command(flatten)]
  pub project: ProjectArgs,
}
