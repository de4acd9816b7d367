use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::loader::LoadError;

/// Terrain description shipped next to `map.bin`.
///
/// Keys are camelCase (`cellSize`, `maxHeight`); snake_case aliases are
/// accepted so TOML files read naturally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainConfig {
    #[serde(default, alias = "cell_size")]
    pub cell_size: Option<usize>,
    #[serde(default, alias = "max_height", skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.json` selects JSON; anything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

impl TerrainConfig {
    pub fn with_cell_size(cell_size: usize) -> Self {
        Self {
            cell_size: Some(cell_size),
            max_height: None,
        }
    }

    pub fn parse(s: &str, format: ConfigFormat) -> Result<Self, LoadError> {
        Ok(match format {
            ConfigFormat::Json => serde_json::from_str(s)?,
            ConfigFormat::Toml => toml::from_str(s)?,
        })
    }

    pub fn encode(&self, format: ConfigFormat) -> Result<String, LoadError> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string(self)?,
            ConfigFormat::Toml => toml::to_string(self).map_err(LoadError::TomlWrite)?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let s = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Self::parse(&s, ConfigFormat::from_path(path))
    }

    /// Returns the declared cell size or `MissingCellSize`.
    pub fn require_cell_size(&self) -> Result<usize, LoadError> {
        match self.cell_size {
            Some(n) if n > 0 => Ok(n),
            _ => Err(LoadError::MissingCellSize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_original_json_keys() {
        let cfg = TerrainConfig::parse(r#"{"cellSize":64}"#, ConfigFormat::Json).unwrap();
        assert_eq!(cfg.cell_size, Some(64));
        assert_eq!(cfg.max_height, None);
    }

    #[test]
    fn parses_toml_snake_case() {
        let cfg =
            TerrainConfig::parse("cell_size = 8\nmax_height = 20\n", ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.cell_size, Some(8));
        assert_eq!(cfg.max_height, Some(20));
    }

    #[test]
    fn missing_cell_size_is_reported() {
        let cfg = TerrainConfig::parse("{}", ConfigFormat::Json).unwrap();
        assert!(matches!(
            cfg.require_cell_size(),
            Err(LoadError::MissingCellSize)
        ));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("dist/config.JSON")),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("terrain.toml")),
            ConfigFormat::Toml
        );
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), ConfigFormat::Toml);
    }

    #[test]
    fn json_written_matches_original_shape() {
        let s = TerrainConfig::with_cell_size(64)
            .encode(ConfigFormat::Json)
            .unwrap();
        assert_eq!(s, r#"{"cellSize":64}"#);
    }
}
