use std::{fmt, str::FromStr};

use serde::Deserialize;

use super::ConfigError;

/// A dotted Python module identifier such as `core.services.llm`.
///
/// Construction always validates the identifier: it must contain at least one
/// segment, and every segment is non-empty and free of path separators and
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct ModuleId(String);

impl ModuleId {
  pub const DELIMITER: char = '.';

  pub fn parse(raw: &str) -> Result<Self, ConfigError> {
    if raw.split(Self::DELIMITER).any(|segment| !is_valid_segment(segment)) {
      return Err(ConfigError::MalformedModule { module: raw.to_string() });
    }
    Ok(Self(raw.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn segments(&self) -> impl Iterator<Item = &str> {
    self.0.split(Self::DELIMITER)
  }

  /// The identifier with every delimiter replaced by `/`, e.g. `core/services/llm`.
  pub fn as_path(&self) -> String {
    self.0.replace(Self::DELIMITER, "/")
  }

  /// The import path inside the documented package namespace.
  pub fn qualified(&self, namespace: &str) -> String {
    if namespace.is_empty() {
      self.0.clone()
    } else {
      format!("{namespace}{}{}", Self::DELIMITER, self.0)
    }
  }
}

fn is_valid_segment(segment: &str) -> bool {
  !segment.is_empty() && !segment.contains(|c: char| c == '/' || c == '\\' || c.is_whitespace())
}

impl fmt::Display for ModuleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for ModuleId {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl TryFrom<String> for ModuleId {
  type Error = ConfigError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::parse(&value)
  }
}
