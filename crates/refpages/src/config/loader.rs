use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use super::{ConfigError, ProjectsConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ConfigFormat {
  Json,
  Yaml,
  Toml,
}

impl ConfigFormat {
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    match path.extension().and_then(OsStr::to_str) {
      Some("json") => Ok(Self::Json),
      Some("yaml" | "yml") => Ok(Self::Yaml),
      Some("toml") => Ok(Self::Toml),
      _ => Err(ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
      }),
    }
  }
}

pub struct ConfigLoader {
  path: PathBuf,
  file: AsyncMmapFile,
  format: ConfigFormat,
}

impl ConfigLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = ConfigFormat::from_path(path)?;
    let file = AsyncMmapFile::open(path).await?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
      format,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn format(&self) -> ConfigFormat {
    self.format
  }

  pub fn parse(&self) -> Result<ProjectsConfig, ConfigError> {
    match self.format {
      ConfigFormat::Json => Ok(serde_json::from_slice(self.file.as_slice())?),
      ConfigFormat::Yaml => Ok(serde_yaml::from_slice(self.file.as_slice())?),
      ConfigFormat::Toml => {
        let content = std::str::from_utf8(self.file.as_slice())?;
        Ok(toml::from_str(content)?)
      }
    }
  }
}
