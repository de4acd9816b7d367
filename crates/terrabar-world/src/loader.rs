use std::fs;
use std::path::{Path, PathBuf};

use crate::config::TerrainConfig;
use crate::heightfield::{HeightField, HeightFieldError};

/// Everything that can stop a terrain from being loaded. All of these abort
/// before any mesh is built.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    Toml(toml::de::Error),
    TomlWrite(toml::ser::Error),
    MissingCellSize,
    SizeMismatch { cell_size: usize, map_len: usize },
    Field(HeightFieldError),
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads a raw height grid: one byte per cell, row-major.
pub fn read_map_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|e| LoadError::io(path, e))
}

/// Validates a byte grid against its config and builds the height field.
pub fn field_from_parts(cfg: &TerrainConfig, map: Vec<u8>) -> Result<HeightField, LoadError> {
    let cell_size = cfg.require_cell_size()?;
    if cell_size.checked_mul(cell_size) != Some(map.len()) {
        return Err(LoadError::SizeMismatch {
            cell_size,
            map_len: map.len(),
        });
    }
    HeightField::from_heights(cell_size, map, cfg.max_height).map_err(LoadError::Field)
}

/// Loads `map.bin` plus its config file into a validated [`HeightField`].
pub fn load_terrain(map_path: &Path, config_path: &Path) -> Result<HeightField, LoadError> {
    let map = read_map_bytes(map_path)?;
    let cfg = TerrainConfig::load(config_path)?;
    let field = field_from_parts(&cfg, map)?;
    log::info!(
        "loaded {}x{} terrain from {} (max height {})",
        field.size(),
        field.size(),
        map_path.display(),
        field.max_height()
    );
    Ok(field)
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(e: toml::de::Error) -> Self {
        LoadError::Toml(e)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            LoadError::Json(e) => write!(f, "invalid json config: {}", e),
            LoadError::Toml(e) => write!(f, "invalid toml config: {}", e),
            LoadError::TomlWrite(e) => write!(f, "cannot encode toml config: {}", e),
            LoadError::MissingCellSize => write!(f, "config does not declare a cellSize"),
            LoadError::SizeMismatch { cell_size, map_len } => write!(
                f,
                "cellSize {} does not match map length {} (expected {})",
                cell_size,
                map_len,
                cell_size.saturating_mul(*cell_size)
            ),
            LoadError::Field(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json(e) => Some(e),
            LoadError::Toml(e) => Some(e),
            LoadError::TomlWrite(e) => Some(e),
            LoadError::Field(e) => Some(e),
            _ => None,
        }
    }
}
