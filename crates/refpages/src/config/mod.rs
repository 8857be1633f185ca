//! Project table consumed by the reference generator.
//!
//! A [`ProjectsConfig`] is built once, either from the built-in table or from a
//! config file, and is never mutated afterwards. Project order and module order
//! are preserved exactly as written, since they drive output order.

mod builtin;
mod error;
mod loader;
mod module_id;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

pub use error::ConfigError;
pub use loader::{ConfigFormat, ConfigLoader};
pub use module_id::ModuleId;

pub const DEFAULT_NAMESPACE: &str = "src";
pub const DEFAULT_SUMMARY_PATH: &str = "reference/SUMMARY.md";

/// One documented project: where its sources live, where its stubs go, and
/// which modules get a page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
  #[serde(rename = "source_path", alias = "source_root", alias = "src_path")]
  #[builder(into)]
  source_root: PathBuf,
  #[serde(rename = "doc_path", alias = "doc_root")]
  #[builder(into)]
  doc_root: PathBuf,
  #[serde(default)]
  #[builder(default)]
  modules: Vec<ModuleId>,
}

impl ProjectConfig {
  pub fn source_root(&self) -> &Path {
    &self.source_root
  }

  pub fn doc_root(&self) -> &Path {
    &self.doc_root
  }

  pub fn modules(&self) -> &[ModuleId] {
    &self.modules
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ProjectsFile")]
pub struct ProjectsConfig {
  namespace: String,
  summary_path: PathBuf,
  projects: IndexMap<String, ProjectConfig>,
}

impl ProjectsConfig {
  pub fn new(projects: IndexMap<String, ProjectConfig>) -> Result<Self, ConfigError> {
    if projects.is_empty() {
      return Err(ConfigError::NoProjects);
    }
    Ok(Self {
      namespace: DEFAULT_NAMESPACE.to_string(),
      summary_path: PathBuf::from(DEFAULT_SUMMARY_PATH),
      projects,
    })
  }

  #[must_use]
  pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
    self.namespace = namespace.into();
    self
  }

  #[must_use]
  pub fn with_summary_path(mut self, summary_path: impl Into<PathBuf>) -> Self {
    self.summary_path = summary_path.into();
    self
  }

  /// Package prefix used in the `:::` directive of every stub.
  pub fn namespace(&self) -> &str {
    &self.namespace
  }

  pub fn summary_path(&self) -> &Path {
    &self.summary_path
  }

  pub fn projects(&self) -> impl Iterator<Item = (&str, &ProjectConfig)> {
    self.projects.iter().map(|(name, project)| (name.as_str(), project))
  }

  pub fn project(&self, name: &str) -> Option<&ProjectConfig> {
    self.projects.get(name)
  }

  pub fn module_count(&self) -> usize {
    self.projects.values().map(|project| project.modules.len()).sum()
  }
}

/// On-disk shape of a config file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectsFile {
  namespace: Option<String>,
  summary_path: Option<PathBuf>,
  projects: IndexMap<String, ProjectConfig>,
}

impl TryFrom<ProjectsFile> for ProjectsConfig {
  type Error = ConfigError;

  fn try_from(file: ProjectsFile) -> Result<Self, Self::Error> {
    let mut config = Self::new(file.projects)?;
    if let Some(namespace) = file.namespace {
      config = config.with_namespace(namespace);
    }
    if let Some(summary_path) = file.summary_path {
      config = config.with_summary_path(summary_path);
    }
    Ok(config)
  }
}
