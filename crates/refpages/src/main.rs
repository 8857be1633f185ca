#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

use clap::Parser;

use crate::ui::{Cli, Colors, Commands, colors};

mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command);
      ui::commands::generate_pages(config, &colors).await?;
    }
    Commands::List(command) => ui::commands::list_projects(command, &colors).await?,
  }

  Ok(())
}
