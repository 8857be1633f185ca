use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("malformed module identifier '{module}': expected non-empty segments separated by '.', without path separators or whitespace")]
  MalformedModule { module: String },

  #[error("no projects configured")]
  NoProjects,

  #[error("unsupported config format for '{}': expected .json, .yaml, .yml or .toml", path.display())]
  UnsupportedFormat { path: PathBuf },

  #[error("config file is not valid UTF-8: {0}")]
  Utf8(#[from] std::str::Utf8Error),

  #[error("invalid JSON config: {0}")]
  Json(#[from] serde_json::Error),

  #[error("invalid YAML config: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("invalid TOML config: {0}")]
  Toml(#[from] toml::de::Error),
}
