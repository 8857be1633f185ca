//! Single pass over the project table producing the staged reference tree.
//!
//! ## Usage
//!
//! ```no_run
//! use refpages::{config::ProjectsConfig, generator::ReferenceGenerator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ProjectsConfig::builtin()?;
//! let output = ReferenceGenerator::new(&config, ".").generate();
//!
//! for (path, content) in output.files.files() {
//!   println!("{path}: {} bytes", content.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use super::{
  metrics::{GenerationStats, GenerationWarning},
  nav::NavigationTree,
  staged::StagedFiles,
  stub::{StubDocument, posix},
};
use crate::config::{ProjectConfig, ProjectsConfig};

/// Everything one generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
  pub files: StagedFiles,
  pub navigation: NavigationTree,
  /// Staged path of the literate-nav summary.
  pub summary_path: String,
  pub stats: GenerationStats,
}

pub struct ReferenceGenerator<'a> {
  config: &'a ProjectsConfig,
  root: PathBuf,
}

impl<'a> ReferenceGenerator<'a> {
  /// `root` is the directory that project source paths are resolved against.
  pub fn new(config: &'a ProjectsConfig, root: impl Into<PathBuf>) -> Self {
    Self {
      config,
      root: root.into(),
    }
  }

  /// Stages one stub per module of every project whose source root exists,
  /// then the navigation summary. Projects and modules are visited in
  /// configuration order. The summary is always staged, even when every
  /// project was skipped.
  pub fn generate(&self) -> GeneratedOutput {
    let mut files = StagedFiles::default();
    let mut navigation = NavigationTree::default();
    let mut stats = GenerationStats::default();

    for (name, project) in self.config.projects() {
      if !self.root.join(project.source_root()).exists() {
        stats.record_skipped_project(GenerationWarning::MissingSourceRoot {
          project: name.to_string(),
          source_root: project.source_root().display().to_string(),
        });
        continue;
      }

      stats.record_project();
      self.stage_project(name, project, &mut files, &mut navigation, &mut stats);
    }

    stats.record_nav_entries(navigation.len());
    let summary_path = posix(self.config.summary_path());
    files.write(summary_path.clone(), navigation.build_literate_nav());

    GeneratedOutput {
      files,
      navigation,
      summary_path,
      stats,
    }
  }

  fn stage_project(
    &self,
    name: &str,
    project: &ProjectConfig,
    files: &mut StagedFiles,
    navigation: &mut NavigationTree,
    stats: &mut GenerationStats,
  ) {
    for module in project.modules() {
      let stub = StubDocument::render(module, project, self.config.namespace());

      files.write(stub.target_path.clone(), stub.body);
      if let Some(previous) = navigation.insert(module.segments(), stub.target_path.clone()) {
        stats.record_warning(GenerationWarning::DuplicateNavigationEntry {
          project: name.to_string(),
          module: module.to_string(),
          previous,
          replacement: stub.target_path.clone(),
        });
      }
      files.set_edit_path(stub.target_path, stub.edit_path);
      stats.record_stub();
    }
  }
}
