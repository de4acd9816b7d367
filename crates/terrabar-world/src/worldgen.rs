use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ConfigFormat, TerrainConfig};
use crate::heightfield::HeightField;
use crate::loader::LoadError;

/// Parameters for synthesizing a sample height grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenParams {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_seed")]
    pub seed: i32,
    /// Height of a column where the rescaled noise reaches 1.0.
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    /// Shaping exponent; values above 1 flatten lowlands.
    #[serde(default = "default_exponent")]
    pub exponent: f32,
    /// Noise-space extent of the whole grid along one axis.
    #[serde(default = "default_extent")]
    pub extent: f32,
}

fn default_size() -> usize {
    64
}
fn default_seed() -> i32 {
    1337
}
fn default_amplitude() -> f32 {
    20.0
}
fn default_exponent() -> f32 {
    1.5
}
fn default_extent() -> f32 {
    2.0
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: default_seed(),
            amplitude: default_amplitude(),
            exponent: default_exponent(),
            extent: default_extent(),
        }
    }
}

impl GenParams {
    /// Reads generator parameters from a TOML file; missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let s = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Ok(toml::from_str(&s)?)
    }
}

fn make_noise(seed: i32) -> FastNoiseLite {
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    // Coordinates are pre-scaled by `extent / size`.
    noise.set_frequency(Some(1.0));
    noise
}

/// Row-major height grid of `size * size` bytes.
pub fn generate_heights(params: &GenParams) -> Vec<u8> {
    let size = params.size;
    let noise = make_noise(params.seed);
    let coef = if size > 0 {
        params.extent / size as f32
    } else {
        0.0
    };
    let mut out = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let n = noise.get_noise_2d(x as f32 * coef, y as f32 * coef);
            // [-1, 1] -> [0, 1]
            let n01 = (n * 0.5 + 0.5).clamp(0.0, 1.0);
            let h = (n01.powf(params.exponent) * params.amplitude).floor();
            out.push(h.clamp(0.0, u8::MAX as f32) as u8);
        }
    }
    out
}

pub fn generate_field(params: &GenParams) -> Result<HeightField, LoadError> {
    HeightField::from_heights(params.size, generate_heights(params), None).map_err(LoadError::Field)
}

/// Writes `map.bin` and `config.<json|toml>` into `out_dir`; returns both paths.
pub fn write_map_files(
    out_dir: &Path,
    params: &GenParams,
    format: ConfigFormat,
) -> Result<(PathBuf, PathBuf), LoadError> {
    fs::create_dir_all(out_dir).map_err(|e| LoadError::io(out_dir, e))?;
    let heights = generate_heights(params);
    let map_path = out_dir.join("map.bin");
    fs::write(&map_path, &heights).map_err(|e| LoadError::io(&map_path, e))?;

    let cfg_name = match format {
        ConfigFormat::Json => "config.json",
        ConfigFormat::Toml => "config.toml",
    };
    let cfg_path = out_dir.join(cfg_name);
    let cfg = TerrainConfig::with_cell_size(params.size).encode(format)?;
    fs::write(&cfg_path, cfg).map_err(|e| LoadError::io(&cfg_path, e))?;
    log::info!(
        "wrote {}x{} map to {} (seed {})",
        params.size,
        params.size,
        map_path.display(),
        params.seed
    );
    Ok((map_path, cfg_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default_from_empty_toml() {
        let p: GenParams = toml::from_str("").unwrap();
        assert_eq!(p, GenParams::default());
        let p: GenParams = toml::from_str("size = 16\nseed = 7").unwrap();
        assert_eq!(p.size, 16);
        assert_eq!(p.seed, 7);
        assert_eq!(p.exponent, 1.5);
    }

    #[test]
    fn zero_size_yields_empty_grid() {
        let p = GenParams {
            size: 0,
            ..GenParams::default()
        };
        assert!(generate_heights(&p).is_empty());
        assert!(generate_field(&p).is_err());
    }
}
