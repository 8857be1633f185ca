use std::path::Path;

use indexmap::IndexMap;

use crate::config::{ModuleId, ProjectConfig, ProjectsConfig};

pub(crate) fn project(source_root: &str, doc_root: &str, modules: &[&str]) -> ProjectConfig {
  ProjectConfig::builder()
    .source_root(source_root)
    .doc_root(doc_root)
    .modules(modules.iter().map(|module| ModuleId::parse(module).unwrap()).collect())
    .build()
}

pub(crate) fn projects(entries: Vec<(&str, ProjectConfig)>) -> ProjectsConfig {
  let table: IndexMap<String, ProjectConfig> = entries
    .into_iter()
    .map(|(name, project)| (name.to_string(), project))
    .collect();
  ProjectsConfig::new(table).unwrap()
}

pub(crate) fn create_source_root(root: &Path, source_root: &str) {
  std::fs::create_dir_all(root.join(source_root)).unwrap();
}
