/// Height returned for lookups outside the grid. Strictly below any stored
/// height, so a boundary column always compares taller than its missing neighbor.
pub const VOID_HEIGHT: i32 = -10_000;

/// Square grid of column heights, row-major (`index = y * size + x`).
///
/// Immutable for the duration of a meshing pass; callers must not mutate it
/// while `generate` runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightField {
    size: usize,
    max_height: u32,
    heights: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeightFieldError {
    ZeroSize,
    LengthMismatch { size: usize, len: usize },
}

impl HeightField {
    /// Allocates a zero-filled `size x size` grid.
    ///
    /// `max_height` is the normalization ceiling for color banding only; columns
    /// may exceed it.
    pub fn new(size: usize, max_height: u32) -> Self {
        debug_assert!(size > 0, "height field size must be positive");
        Self {
            size,
            max_height,
            heights: vec![0; size * size],
        }
    }

    /// Builds a field from an existing row-major grid, validating its length.
    /// `max_height = None` takes the maximum value present in `heights`.
    pub fn from_heights(
        size: usize,
        heights: Vec<u8>,
        max_height: Option<u32>,
    ) -> Result<Self, HeightFieldError> {
        if size == 0 {
            return Err(HeightFieldError::ZeroSize);
        }
        if size.checked_mul(size) != Some(heights.len()) {
            return Err(HeightFieldError::LengthMismatch {
                size,
                len: heights.len(),
            });
        }
        let max_height = max_height
            .unwrap_or_else(|| heights.iter().copied().max().map_or(0, u32::from));
        Ok(Self {
            size,
            max_height,
            heights,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.heights.len()
    }

    #[inline]
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    #[inline]
    pub fn heights(&self) -> &[u8] {
        &self.heights
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Writes the height of cell `(x, y)`.
    ///
    /// Panics when `(x, y)` lies outside the grid; an out-of-range write is a
    /// caller bug, not a recoverable condition.
    #[inline]
    pub fn set_height(&mut self, x: usize, y: usize, value: u8) {
        assert!(
            x < self.size && y < self.size,
            "set_height({x}, {y}) outside {0}x{0} grid",
            self.size
        );
        let i = self.idx(x, y);
        self.heights[i] = value;
    }

    /// Returns the stored height, or [`VOID_HEIGHT`] outside `[0,size) x [0,size)`.
    #[inline]
    pub fn get_height(&self, x: i32, y: i32) -> i32 {
        let n = self.size as i32;
        if x < 0 || y < 0 || x >= n || y >= n {
            return VOID_HEIGHT;
        }
        i32::from(self.heights[self.idx(x as usize, y as usize)])
    }
}

impl std::fmt::Display for HeightFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeightFieldError::ZeroSize => write!(f, "height field size must be positive"),
            HeightFieldError::LengthMismatch { size, len } => write!(
                f,
                "height grid has {} cells but size {} needs {}",
                len,
                size,
                size.saturating_mul(*size)
            ),
        }
    }
}

impl std::error::Error for HeightFieldError {}
