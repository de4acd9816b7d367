use raylib::prelude::*;
use terrabar_render_raylib::conv::vec3_to_rl;
use terrabar_world::PathOverlay;

const PATH_RADIUS: f32 = 0.08;
const MARKER_RADIUS: f32 = 0.5;

/// Axis arrows from the origin: X red, Y green, Z blue (one third length).
pub fn draw_axes(d3: &mut impl RaylibDraw3D, length: f32) {
    let origin = Vector3::zero();
    let axes = [
        (Vector3::new(1.0, 0.0, 0.0), length, Color::RED),
        (Vector3::new(0.0, 1.0, 0.0), length, Color::GREEN),
        (Vector3::new(0.0, 0.0, 1.0), length / 3.0, Color::BLUE),
    ];
    for (dir, len, color) in axes {
        let head_len = len * 0.05;
        let head_width = head_len * 0.5;
        let shaft_end = origin + dir * (len + head_len);
        let tip = shaft_end + dir * head_len;
        d3.draw_line_3D(origin, shaft_end, color);
        d3.draw_cylinder_ex(shaft_end, tip, head_width, 0.0, 8, color);
    }
}

/// Route through cell centers plus start (yellow) and end (black) markers.
pub fn draw_path(d3: &mut impl RaylibDraw3D, path: &PathOverlay) {
    let centers = path.centers();
    for w in centers.windows(2) {
        d3.draw_cylinder_ex(
            vec3_to_rl(w[0]),
            vec3_to_rl(w[1]),
            PATH_RADIUS,
            PATH_RADIUS,
            6,
            Color::RED,
        );
    }
    d3.draw_sphere(vec3_to_rl(path.start()), MARKER_RADIUS, Color::YELLOW);
    d3.draw_sphere(vec3_to_rl(path.end()), MARKER_RADIUS, Color::BLACK);
}
