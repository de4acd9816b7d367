use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use raylib::prelude::*;
use terrabar_mesh_cpu::{MeshOptions, TerrainMesh, generate_with};
use terrabar_render_raylib::{TerrainRender, upload_terrain_mesh};
use terrabar_world::{LoadError, PathOverlay, load_terrain};

use crate::camera::OrbitCamera;
use crate::overlay::{draw_axes, draw_path};
use crate::watchers::spawn_terrain_watcher;

const AXIS_LENGTH: f32 = 100.0;

pub struct ViewerConfig {
    pub map: PathBuf,
    pub config: PathBuf,
    pub path: Option<PathBuf>,
    pub watch: bool,
    pub mesh: MeshOptions,
    pub width: i32,
    pub height: i32,
}

pub struct App {
    cfg: ViewerConfig,
    cam: OrbitCamera,
    terrain: TerrainRender,
    cells: usize,
    path: Option<PathOverlay>,
    reload_rx: Option<Receiver<()>>,
    show_axes: bool,
    show_hud: bool,
    wireframe: bool,
}

fn sky_color() -> Color {
    Color::new(173, 216, 230, 255)
}

fn initial_camera() -> OrbitCamera {
    let coef = 20.0;
    OrbitCamera::looking_at(
        Vector3::new(-coef * 1.5, -coef * 1.5, coef * 2.5),
        Vector3::new(coef / 2.0, coef / 3.0, coef / 2.0),
        75.0,
    )
}

/// Loads and meshes the terrain. Any failure here aborts before rendering.
fn build_mesh(cfg: &ViewerConfig) -> Result<(TerrainMesh, usize), LoadError> {
    let field = load_terrain(&cfg.map, &cfg.config)?;
    let mesh = generate_with(&field, &cfg.mesh);
    Ok((mesh, field.cell_count()))
}

/// Explicit `--path`, else `path.json` beside the map if present. Never fatal.
fn load_path_overlay(cfg: &ViewerConfig) -> Option<PathOverlay> {
    let candidate = match &cfg.path {
        Some(p) => p.clone(),
        None => {
            let p = cfg.map.with_file_name("path.json");
            if !p.exists() {
                log::info!("no path overlay");
                return None;
            }
            p
        }
    };
    match PathOverlay::load(&candidate) {
        Ok(p) => {
            log::info!("path overlay: {} points from {}", p.len(), candidate.display());
            Some(p)
        }
        Err(e) => {
            log::warn!("path overlay disabled: {}", e);
            None
        }
    }
}

impl App {
    pub fn run(cfg: ViewerConfig) -> Result<(), Box<dyn Error>> {
        let (mesh, cells) = build_mesh(&cfg)?;
        let path = load_path_overlay(&cfg);
        let reload_rx = cfg
            .watch
            .then(|| spawn_terrain_watcher(vec![cfg.map.clone(), cfg.config.clone()]));

        let (mut rl, thread) = raylib::init()
            .size(cfg.width, cfg.height)
            .title("terrabar")
            .resizable()
            .msaa_4x()
            .build();
        rl.set_target_fps(60);

        let terrain =
            upload_terrain_mesh(&mut rl, &thread, &mesh).ok_or("terrain mesh is empty")?;
        let mut app = App {
            cells,
            cfg,
            cam: initial_camera(),
            terrain,
            path,
            reload_rx,
            show_axes: true,
            show_hud: true,
            wireframe: false,
        };
        drop(mesh);

        while !rl.window_should_close() {
            app.handle_input(&rl);
            app.poll_reload(&mut rl, &thread);
            app.draw(&mut rl, &thread);
        }
        Ok(())
    }

    fn handle_input(&mut self, rl: &RaylibHandle) {
        self.cam.update(rl);
        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            self.wireframe = !self.wireframe;
            log::debug!("wireframe {}", self.wireframe);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_X) {
            self.show_axes = !self.show_axes;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_H) {
            self.show_hud = !self.show_hud;
        }
    }

    fn poll_reload(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let Some(rx) = self.reload_rx.as_ref() else {
            return;
        };
        // Editors emit bursts of events per save; coalesce them.
        if rx.try_iter().count() == 0 {
            return;
        }
        match build_mesh(&self.cfg) {
            Ok((mesh, cells)) => match upload_terrain_mesh(rl, thread, &mesh) {
                Some(terrain) => {
                    self.terrain = terrain;
                    self.cells = cells;
                    log::info!("terrain reloaded from {}", self.cfg.map.display());
                }
                None => log::warn!("terrain reload produced no geometry; keeping previous mesh"),
            },
            Err(e) => log::warn!("terrain reload failed: {}", e),
        }
    }

    fn draw(&self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let camera = self.cam.to_camera3d();
        let mut d = rl.begin_drawing(thread);
        d.clear_background(sky_color());
        {
            let mut d3 = d.begin_mode3D(camera);
            for part in &self.terrain.parts {
                if self.wireframe {
                    d3.draw_model_wires(&part.model, Vector3::zero(), 1.0, Color::WHITE);
                } else {
                    d3.draw_model(&part.model, Vector3::zero(), 1.0, Color::WHITE);
                }
            }
            if self.show_axes {
                draw_axes(&mut d3, AXIS_LENGTH);
            }
            if let Some(path) = &self.path {
                draw_path(&mut d3, path);
            }
        }
        if self.show_hud {
            let hud = format!(
                "{} cells  {} faces  {} verts  ({} part(s))",
                self.cells,
                self.terrain.face_count,
                self.terrain.vertex_count,
                self.terrain.parts.len()
            );
            d.draw_text(&hud, 12, 12, 18, Color::DARKGRAY);
            d.draw_text(
                "LMB orbit  RMB pan  wheel zoom  R reset  F wireframe  X axes  H hud",
                12,
                36,
                16,
                Color::DARKGRAY,
            );
            d.draw_fps(12, 60);
        }
    }
}
