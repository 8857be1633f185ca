use indexmap::IndexMap;

use super::{ConfigError, ModuleId, ProjectConfig, ProjectsConfig};

const OSA_MODULES: &[&str] = &[
  "api.main",
  "api.config",
  "cli.main",
  "cli.config",
  "cli.client",
  "agents.base",
  "agents.state",
  "tools.base",
  "tools.hed",
  "tools.hed_validation",
  "tools.fetcher",
  "tools.markdown_cleaner",
  "core.services.llm",
];

impl ProjectsConfig {
  /// The project table used when no config file is given.
  pub fn builtin() -> Result<Self, ConfigError> {
    let modules = OSA_MODULES
      .iter()
      .map(|module| ModuleId::parse(module))
      .collect::<Result<Vec<_>, _>>()?;

    let osa = ProjectConfig::builder()
      .source_root("osa/src")
      .doc_root("osa/reference")
      .modules(modules)
      .build();

    Self::new(IndexMap::from([("osa".to_string(), osa)]))
  }
}
