use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub projects_processed: usize,
  pub projects_skipped: usize,
  pub stubs_generated: usize,
  pub nav_entries: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_project(&mut self) {
    self.projects_processed += 1;
  }

  pub fn record_skipped_project(&mut self, warning: GenerationWarning) {
    self.projects_skipped += 1;
    self.record_warning(warning);
  }

  pub fn record_stub(&mut self) {
    self.stubs_generated += 1;
  }

  pub fn record_nav_entries(&mut self, count: usize) {
    self.nav_entries = count;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Source path {source_root} does not exist, skipping {project}")]
  MissingSourceRoot { project: String, source_root: String },
  #[strum(to_string = "[{project}] navigation entry '{module}' replaces link '{previous}' with '{replacement}'")]
  DuplicateNavigationEntry {
    project: String,
    module: String,
    previous: String,
    replacement: String,
  },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::MissingSourceRoot { .. })
  }
}
