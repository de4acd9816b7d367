//! Elevation color bands.

/// Named terrain colors, lowest band first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum TerrainColor {
    DeepWater,
    ShallowWater,
    Beach,
    Forest,
    Jungle,
    Savannah,
    Desert,
    Snow,
}

impl TerrainColor {
    /// Linear RGB in `[0, 1]`.
    #[inline]
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            TerrainColor::DeepWater => [0.25, 0.38, 0.75],
            TerrainColor::ShallowWater => [0.38, 0.5, 1.0],
            TerrainColor::Beach => [0.82, 0.71, 0.56],
            TerrainColor::Forest => [0.45, 0.66, 0.39],
            TerrainColor::Jungle => [0.25, 0.49, 0.38],
            TerrainColor::Savannah => [0.64, 0.74, 0.49],
            TerrainColor::Desert => [0.75, 0.82, 0.69],
            TerrainColor::Snow => [0.82, 0.82, 0.84],
        }
    }
}

/// `(exclusive upper bound, color)` evaluated in order; anything not below a
/// bound falls through to [`TOP_BAND`].
pub const COLOR_BANDS: [(f32, TerrainColor); 7] = [
    (0.025, TerrainColor::DeepWater),
    (0.05, TerrainColor::ShallowWater),
    (0.1, TerrainColor::Beach),
    (0.2, TerrainColor::Forest),
    (0.3, TerrainColor::Jungle),
    (0.6, TerrainColor::Savannah),
    (0.9, TerrainColor::Desert),
];

pub const TOP_BAND: TerrainColor = TerrainColor::Snow;

/// Band for a normalized elevation. Input is not clamped: negatives land in the
/// lowest band and anything `>= 0.9` (including NaN) in the top one.
#[inline]
pub fn band_for(normalized: f32) -> TerrainColor {
    COLOR_BANDS
        .iter()
        .find(|(upper, _)| normalized < *upper)
        .map_or(TOP_BAND, |&(_, c)| c)
}

#[inline]
pub fn color_for(normalized: f32) -> [f32; 3] {
    band_for(normalized).rgb()
}
