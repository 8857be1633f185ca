use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use refpages::{
  config::{ConfigLoader, ProjectsConfig},
  generator::{GeneratedOutput, GenerationStats, GenerationWarning, ReferenceGenerator, StagedFiles},
};

use crate::ui::{Colors, cli::GenerateCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub config: Option<PathBuf>,
  pub root: PathBuf,
  pub docs_dir: PathBuf,
  pub edit_paths: Option<PathBuf>,
  pub dry_run: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      project,
      docs_dir,
      edit_paths,
      dry_run,
      verbose,
      quiet,
    } = command;

    Self {
      config: project.config,
      root: project.root,
      docs_dir,
      edit_paths,
      dry_run,
      verbose,
      quiet,
    }
  }

  /// Writes every staged file below the docs directory, replacing existing
  /// files. Returns the number of files written.
  async fn write_files(&self, files: &StagedFiles) -> anyhow::Result<usize> {
    for (path, content) in files.files() {
      let target = self.docs_dir.join(path);
      if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
          .await
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      tokio::fs::write(&target, content)
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;
    }
    Ok(files.len())
  }

  async fn write_edit_paths(&self, path: &Path, files: &StagedFiles) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    let manifest = files.edit_paths_manifest()?;
    tokio::fs::write(path, manifest)
      .await
      .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self, loader: Option<&ConfigLoader>) {
    let source = match loader {
      Some(loader) => format!("Loading {} projects from: {}", loader.format(), loader.path().display()),
      None => "Using built-in project table".to_string(),
    };
    self.info(&source.with(self.colors.primary()).to_string());
  }

  fn log_generating(&self, projects: &ProjectsConfig) {
    self.info(
      &format!(
        "Generating reference pages for {} modules (sources under {})...",
        projects.module_count(),
        self.config.root.display()
      )
      .with(self.colors.primary())
      .to_string(),
    );
  }

  fn print_statistics(&self, output: &GeneratedOutput) {
    if self.config.quiet {
      return;
    }

    let stats = &output.stats;
    self.stat("Projects processed:", stats.projects_processed.to_string());
    if stats.projects_skipped > 0 {
      self.stat("Projects skipped:", stats.projects_skipped.to_string());
    }
    self.stat("Stubs generated:", stats.stubs_generated.to_string());
    self.stat("Navigation entries:", stats.nav_entries.to_string());
    self.stat("Summary:", output.summary_path.clone());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_staged(&output.files);
  }

  fn print_staged(&self, files: &StagedFiles) {
    if !self.config.verbose {
      return;
    }

    for path in files.paths() {
      match files.edit_path(path) {
        Some(edit_path) => println!(
          "              {} {}",
          path.with(self.colors.primary()),
          format!("(edit: {edit_path})").with(self.colors.muted())
        ),
        None => println!("              {}", path.with(self.colors.primary())),
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let reported = reported_warnings(&stats.warnings, self.config.verbose);
    if reported.is_empty() {
      return;
    }

    if !self.config.quiet {
      println!();
    }
    for warning in reported {
      eprintln!(
        "{} {}",
        warning_tag(warning).with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.docs_dir.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_dry_run(&self, files: &StagedFiles) {
    self.info(
      &format!(
        "Dry run: {} files would be written to {}",
        files.len(),
        self.config.docs_dir.display()
      )
      .with(self.colors.primary())
      .to_string(),
    );
  }

  fn log_success(&self, written: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully wrote {written} reference files").with(self.colors.success())
      );
    }
  }
}

/// Skips are always reported, even under `--quiet`; other warnings only when verbose.
fn reported_warnings(warnings: &[GenerationWarning], verbose: bool) -> Vec<&GenerationWarning> {
  warnings
    .iter()
    .filter(|warning| verbose || warning.is_skipped_item())
    .collect()
}

fn warning_tag(warning: &GenerationWarning) -> &'static str {
  if warning.is_skipped_item() {
    "Skipped:"
  } else {
    "Warning:"
  }
}

pub async fn generate_pages(config: GenerateConfig, colors: &Colors) -> anyhow::Result<GeneratedOutput> {
  let logger = GenerateLogger::new(&config, colors);

  let projects = match &config.config {
    Some(path) => {
      let loader = super::open_config(path).await?;
      logger.log_loading(Some(&loader));
      super::parse_config(&loader)?
    }
    None => {
      logger.log_loading(None);
      ProjectsConfig::builtin()?
    }
  };

  logger.log_generating(&projects);
  let output = ReferenceGenerator::new(&projects, &config.root).generate();
  logger.print_statistics(&output);
  logger.print_warnings(&output.stats);

  if config.dry_run {
    logger.log_dry_run(&output.files);
    return Ok(output);
  }

  logger.log_writing();
  let written = config.write_files(&output.files).await?;
  if let Some(path) = &config.edit_paths {
    config.write_edit_paths(path, &output.files).await?;
  }

  logger.log_success(written);
  Ok(output)
}
