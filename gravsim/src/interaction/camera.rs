//! Free-flying camera driven by yaw/pitch mouse look
//!
//! Keeps its own pose in `f32` like the renderer does. `view_matrix` and
//! `projection_matrix` give the transforms a draw call needs.

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

use super::input::{Action, InputFrame};

pub type CVec3 = Vector3<f32>;

/// Pitch limit in degrees, keeps the view from flipping over the pole
pub const PITCH_LIMIT: f32 = 89.0;

#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: CVec3,
    pub front: CVec3, // unit view direction
    pub up: CVec3,
    pub yaw: f32, // degrees, -90 looks down -z
    pub pitch: f32, // degrees
    pub sensitivity: f32, // degrees per pointer pixel
    pub move_speed: f32, // world units per second
    pub scroll_speed: f32, // world units per second per wheel event

    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        let mut cam = Self {
            position: CVec3::new(0.0, 1000.0, 5000.0),
            front: CVec3::new(0.0, 0.0, -1.0),
            up: CVec3::y(),
            yaw: -90.0,
            pitch: 0.0,
            sensitivity: 0.1,
            move_speed: 1000.0,
            scroll_speed: 50000.0,
            fov_y: 45.0,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 750_000.0,
        };
        cam.update_front();
        cam
    }
}

impl FlyCamera {
    /// Front vector from yaw and pitch
    fn update_front(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = CVec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        self.front = front.normalize();
    }

    /// Set yaw and pitch in degrees, pitch clamped
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_front();
    }

    /// Apply a pointer delta (screen pixels, y down)
    pub fn look(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_front();
    }

    pub fn right(&self) -> CVec3 {
        self.front.cross(&self.up).normalize()
    }

    /// Translate along front/right/up for the held movement actions
    pub fn fly(&mut self, frame: &InputFrame, dt: f32) {
        let speed = self.move_speed * dt;
        let right = self.right();

        if frame.is_held(Action::Forward) {
            self.position += self.front * speed;
        }
        if frame.is_held(Action::Back) {
            self.position -= self.front * speed;
        }
        if frame.is_held(Action::StrafeLeft) {
            self.position -= right * speed;
        }
        if frame.is_held(Action::StrafeRight) {
            self.position += right * speed;
        }
        if frame.is_held(Action::Up) {
            self.position += self.up * speed;
        }
        if frame.is_held(Action::Down) {
            self.position -= self.up * speed;
        }
    }

    /// Dolly along front by the sign of the scroll amount
    pub fn dolly(&mut self, scroll: f32, dt: f32) {
        let speed = self.scroll_speed * dt;
        if scroll > 0.0 {
            self.position += self.front * speed;
        } else if scroll < 0.0 {
            self.position -= self.front * speed;
        }
    }

    /// Look, fly and dolly for one frame
    pub fn update(&mut self, frame: &InputFrame, dt: f32) {
        self.look(frame.pointer_delta.0, frame.pointer_delta.1);
        self.fly(frame, dt);
        self.dolly(frame.scroll, dt);
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from(self.position);
        let target = Point3::from(self.position + self.front);
        Matrix4::look_at_rh(&eye, &target, &self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect, self.fov_y.to_radians(), self.near, self.far).to_homogeneous()
    }
}
