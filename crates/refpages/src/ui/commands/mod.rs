pub mod generate;
pub mod list;

use std::path::Path;

use anyhow::Context;
use refpages::config::{ConfigLoader, ProjectsConfig};

pub use generate::{GenerateConfig, generate_pages};
pub use list::list_projects;

/// Loads the project table from `path`, or falls back to the built-in table.
async fn load_projects(path: Option<&Path>) -> anyhow::Result<ProjectsConfig> {
  match path {
    Some(path) => parse_config(&open_config(path).await?),
    None => Ok(ProjectsConfig::builtin()?),
  }
}

async fn open_config(path: &Path) -> anyhow::Result<ConfigLoader> {
  ConfigLoader::open(path)
    .await
    .with_context(|| format!("failed to open config {}", path.display()))
}

fn parse_config(loader: &ConfigLoader) -> anyhow::Result<ProjectsConfig> {
  loader
    .parse()
    .with_context(|| format!("failed to load config {}", loader.path().display()))
}
