use std::fs;
use std::path::{Path, PathBuf};

use terrabar_geom::Vec3;

/// Optional route drawn over the terrain: a list of grid cells `[x, y, z]`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathOverlay {
    cells: Vec<[f32; 3]>,
}

#[derive(Debug)]
pub enum PathError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    Empty,
}

impl PathOverlay {
    pub fn from_cells(cells: Vec<[f32; 3]>) -> Result<Self, PathError> {
        if cells.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self { cells })
    }

    pub fn parse_json(s: &str) -> Result<Self, PathError> {
        let cells: Vec<[f32; 3]> = serde_json::from_str(s).map_err(PathError::Json)?;
        Self::from_cells(cells)
    }

    pub fn load(path: &Path) -> Result<Self, PathError> {
        let s = fs::read_to_string(path).map_err(|source| PathError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_json(&s)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn center_of(c: [f32; 3]) -> Vec3 {
        Vec3::new(c[0] + 0.5, c[1] + 0.5, c[2] + 0.5)
    }

    /// Cell centers: each coordinate shifted by half a unit.
    pub fn centers(&self) -> Vec<Vec3> {
        self.cells.iter().copied().map(Self::center_of).collect()
    }

    pub fn start(&self) -> Vec3 {
        Self::center_of(self.cells[0])
    }

    pub fn end(&self) -> Vec3 {
        Self::center_of(self.cells[self.cells.len() - 1])
    }
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            PathError::Json(e) => write!(f, "invalid path json: {}", e),
            PathError::Empty => write!(f, "path has no points"),
        }
    }
}

impl std::error::Error for PathError {}
