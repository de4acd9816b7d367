mod app;
mod camera;
mod overlay;
mod watchers;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use terrabar_mesh_cpu::{DEFAULT_TOP_OFFSET, MeshOptions, generate_with};
use terrabar_world::{ConfigFormat, GenParams, load_terrain, write_map_files};

use crate::app::{App, ViewerConfig};

#[derive(Parser)]
#[command(name = "terrabar")]
#[command(about = "Column terrain mesher and viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive 3D viewer
    View {
        /// Raw height grid, one byte per cell
        #[arg(long, default_value = "dist/map.bin")]
        map: PathBuf,
        /// Terrain config (.json or .toml) declaring cellSize
        #[arg(long, default_value = "dist/config.json")]
        config: PathBuf,
        /// Path overlay json; defaults to path.json next to the map
        #[arg(long)]
        path: Option<PathBuf>,
        /// Reload and re-mesh when the map or config changes
        #[arg(long)]
        watch: bool,
        /// Units added to every column top (0 keeps tops at the stored height)
        #[arg(long, default_value_t = DEFAULT_TOP_OFFSET)]
        top_offset: u8,
        #[arg(long, default_value_t = 1280)]
        width: i32,
        #[arg(long, default_value_t = 720)]
        height: i32,
    },
    /// Synthesize a sample height grid and its config
    Gen {
        #[arg(long, default_value = "dist")]
        out_dir: PathBuf,
        /// TOML file with generator parameters; flags below override it
        #[arg(long)]
        params: Option<PathBuf>,
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        seed: Option<i32>,
        #[arg(long)]
        amplitude: Option<f32>,
        #[arg(long)]
        exponent: Option<f32>,
        #[arg(long, value_enum, default_value_t = ConfigKind::Json)]
        format: ConfigKind,
    },
    /// Mesh a terrain and print buffer statistics
    Mesh {
        #[arg(long, default_value = "dist/map.bin")]
        map: PathBuf,
        #[arg(long, default_value = "dist/config.json")]
        config: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TOP_OFFSET)]
        top_offset: u8,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConfigKind {
    Json,
    Toml,
}

impl From<ConfigKind> for ConfigFormat {
    fn from(k: ConfigKind) -> Self {
        match k {
            ConfigKind::Json => ConfigFormat::Json,
            ConfigKind::Toml => ConfigFormat::Toml,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cmd: Commands) -> Result<(), Box<dyn Error>> {
    match cmd {
        Commands::View {
            map,
            config,
            path,
            watch,
            top_offset,
            width,
            height,
        } => App::run(ViewerConfig {
            map,
            config,
            path,
            watch,
            mesh: MeshOptions { top_offset },
            width,
            height,
        }),
        Commands::Gen {
            out_dir,
            params,
            size,
            seed,
            amplitude,
            exponent,
            format,
        } => {
            let mut p = match params {
                Some(file) => GenParams::load(&file)?,
                None => GenParams::default(),
            };
            if let Some(v) = size {
                p.size = v;
            }
            if let Some(v) = seed {
                p.seed = v;
            }
            if let Some(v) = amplitude {
                p.amplitude = v;
            }
            if let Some(v) = exponent {
                p.exponent = v;
            }
            if p.size == 0 {
                return Err("size must be positive".into());
            }
            let (map, cfg) = write_map_files(&out_dir, &p, format.into())?;
            println!("{}\n{}", map.display(), cfg.display());
            Ok(())
        }
        Commands::Mesh {
            map,
            config,
            top_offset,
        } => print_mesh_stats(&map, &config, MeshOptions { top_offset }),
    }
}

fn print_mesh_stats(map: &Path, config: &Path, opts: MeshOptions) -> Result<(), Box<dyn Error>> {
    let field = load_terrain(map, config)?;
    let mesh = generate_with(&field, &opts);
    println!("cells:     {}", field.cell_count());
    println!("faces:     {}", mesh.face_count());
    println!("vertices:  {}", mesh.vertex_count());
    println!("triangles: {}", mesh.triangle_count());
    if let Some(bb) = mesh.bbox() {
        println!(
            "bounds:    ({}, {}, {}) .. ({}, {}, {})",
            bb.min.x, bb.min.y, bb.min.z, bb.max.x, bb.max.y, bb.max.z
        );
    }
    Ok(())
}
