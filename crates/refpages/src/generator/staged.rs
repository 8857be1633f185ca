use indexmap::IndexMap;

/// In-memory output tree handed to the site build.
///
/// Paths are relative to the docs directory and `/` separated. Writing to a
/// path that already holds content replaces it while keeping its original
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedFiles {
  files: IndexMap<String, String>,
  edit_paths: IndexMap<String, String>,
}

impl StagedFiles {
  pub fn write(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
    self.files.insert(path.into(), content.into())
  }

  pub fn set_edit_path(&mut self, doc_path: impl Into<String>, edit_path: impl Into<String>) {
    self.edit_paths.insert(doc_path.into(), edit_path.into());
  }

  pub fn get(&self, path: &str) -> Option<&str> {
    self.files.get(path).map(String::as_str)
  }

  pub fn edit_path(&self, doc_path: &str) -> Option<&str> {
    self.edit_paths.get(doc_path).map(String::as_str)
  }

  pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
    self.files.iter().map(|(path, content)| (path.as_str(), content.as_str()))
  }

  pub fn paths(&self) -> impl Iterator<Item = &str> {
    self.files.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.files.len()
  }

  pub fn is_empty(&self) -> bool {
    self.files.is_empty()
  }

  /// Edit paths as a JSON object, doc path to source path, in staging order.
  pub fn edit_paths_manifest(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&self.edit_paths)
  }
}
