use raylib::prelude::*;

/// Z-up orbit camera: rotates around `target` at `distance`.
pub struct OrbitCamera {
    pub target: Vector3,
    pub yaw: f32,   // degrees, around +Z
    pub pitch: f32, // degrees above the XY plane
    pub distance: f32,
    pub fovy: f32,
    pub rotate_sensitivity: f32,
    pub pan_sensitivity: f32,
    pub zoom_step: f32,
    home: (Vector3, f32, f32, f32),
}

const MIN_DISTANCE: f32 = 2.0;
const MAX_PITCH: f32 = 89.0;

impl OrbitCamera {
    /// Builds a camera at `position` looking at `target`.
    pub fn looking_at(position: Vector3, target: Vector3, fovy: f32) -> Self {
        let off = position - target;
        let distance = off.length().max(MIN_DISTANCE);
        let yaw = off.y.atan2(off.x).to_degrees();
        let pitch = (off.z / distance).clamp(-1.0, 1.0).asin().to_degrees();
        Self {
            target,
            yaw,
            pitch,
            distance,
            fovy,
            rotate_sensitivity: 0.3,
            pan_sensitivity: 0.0015,
            zoom_step: 0.1,
            home: (target, yaw, pitch, distance),
        }
    }

    pub fn position(&self) -> Vector3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let dir = Vector3::new(
            yaw.cos() * pitch.cos(),
            yaw.sin() * pitch.cos(),
            pitch.sin(),
        );
        self.target + dir * self.distance
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D::perspective(
            self.position(),
            self.target,
            Vector3::new(0.0, 0.0, 1.0),
            self.fovy,
        )
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.rotate_sensitivity;
        self.pitch = (self.pitch + dy * self.rotate_sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Moves the target in the view plane, scaled by distance so panning feels constant.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.position()).normalized();
        let right = forward.cross(Vector3::new(0.0, 0.0, 1.0)).normalized();
        let up = right.cross(forward).normalized();
        let k = self.distance * self.pan_sensitivity;
        self.target += right * (-dx * k) + up * (dy * k);
    }

    pub fn zoom(&mut self, wheel: f32) {
        self.distance = (self.distance * (1.0 - wheel * self.zoom_step)).max(MIN_DISTANCE);
    }

    pub fn reset(&mut self) {
        let (target, yaw, pitch, distance) = self.home;
        self.target = target;
        self.yaw = yaw;
        self.pitch = pitch;
        self.distance = distance;
    }

    /// Returns true when the view changed this frame.
    pub fn update(&mut self, rl: &RaylibHandle) -> bool {
        let md = rl.get_mouse_delta();
        let mut changed = false;
        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) && (md.x != 0.0 || md.y != 0.0)
        {
            self.rotate(md.x, md.y);
            changed = true;
        }
        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT) && (md.x != 0.0 || md.y != 0.0)
        {
            self.pan(md.x, md.y);
            changed = true;
        }
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.zoom(wheel);
            changed = true;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            self.reset();
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector3, b: Vector3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn looking_at_reproduces_position() {
        let pos = Vector3::new(-30.0, -30.0, 50.0);
        let target = Vector3::new(10.0, 20.0 / 3.0, 10.0);
        let cam = OrbitCamera::looking_at(pos, target, 75.0);
        assert!(close(cam.position(), pos));
    }

    #[test]
    fn zoom_is_bounded_and_reset_restores() {
        let mut cam = OrbitCamera::looking_at(
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            60.0,
        );
        for _ in 0..200 {
            cam.zoom(1.0);
        }
        assert!(cam.distance >= MIN_DISTANCE);
        cam.rotate(500.0, 10_000.0);
        assert!(cam.pitch <= MAX_PITCH);
        cam.pan(10.0, 10.0);
        cam.reset();
        assert!(close(cam.position(), Vector3::new(10.0, 0.0, 0.0)));
    }
}
