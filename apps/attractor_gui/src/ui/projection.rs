//! Orbit projection of the trajectory onto the 2-D canvas: yaw/pitch
//! rotation followed by an orthographic scale-to-fit.

use egui::{Pos2, Rect, Vec2};
use lorenz_core::domain::Trajectory;

const ORBIT_SENSITIVITY: f32 = 0.01;
const MAX_PITCH: f32 = 1.5;
const FIT_MARGIN: f32 = 0.92;

#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // A three-quarter view so both attractor lobes read at startup.
        Self {
            yaw: 0.6,
            pitch: 0.35,
        }
    }
}

impl OrbitCamera {
    pub fn orbit(&mut self, drag: Vec2) {
        self.yaw += drag.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + drag.y * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Rotates a data-space point into view space: `u` horizontal, `v`
    /// vertical, larger `v` meaning visually up.
    fn view(&self, x: f64, y: f64, z: f64) -> (f32, f32) {
        let (x, y, z) = (x as f32, y as f32, z as f32);
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let u = cos_yaw * x - sin_yaw * y;
        let depth = sin_yaw * x + cos_yaw * y;
        let v = cos_pitch * z - sin_pitch * depth;
        (u, v)
    }

    /// Projects the whole polyline into `rect`, centered and uniformly
    /// scaled so the rotated bounding box fits.
    pub fn project_polyline(&self, trajectory: &Trajectory, rect: Rect) -> Vec<Pos2> {
        let n = trajectory.len();
        if n == 0 {
            return Vec::new();
        }

        let mut view = Vec::with_capacity(n);
        let (mut min_u, mut max_u) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut min_v, mut max_v) = (f32::INFINITY, f32::NEG_INFINITY);
        for i in 0..n {
            let (u, v) = self.view(trajectory.x[i], trajectory.y[i], trajectory.z[i]);
            min_u = min_u.min(u);
            max_u = max_u.max(u);
            min_v = min_v.min(v);
            max_v = max_v.max(v);
            view.push((u, v));
        }

        let extent_u = (max_u - min_u).max(f32::EPSILON);
        let extent_v = (max_v - min_v).max(f32::EPSILON);
        let scale = FIT_MARGIN * (rect.width() / extent_u).min(rect.height() / extent_v);
        let center_u = (min_u + max_u) * 0.5;
        let center_v = (min_v + max_v) * 0.5;
        let center = rect.center();

        view.into_iter()
            .map(|(u, v)| {
                // Screen y grows downward, view v grows upward.
                Pos2::new(
                    center.x + (u - center_u) * scale,
                    center.y - (v - center_v) * scale,
                )
            })
            .collect()
    }

    /// Screen direction of a unit data axis, for the corner triad glyph.
    pub fn axis_direction(&self, axis: [f64; 3]) -> Vec2 {
        let (u, v) = self.view(axis[0], axis[1], axis[2]);
        let dir = Vec2::new(u, -v);
        if dir.length() < 1e-3 {
            Vec2::ZERO
        } else {
            dir.normalized()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(200.0, 200.0))
    }

    #[test]
    fn projection_keeps_every_point_inside_the_canvas() {
        let trajectory = Trajectory {
            x: vec![-20.0, 0.0, 20.0, 5.0],
            y: vec![-25.0, 10.0, 25.0, -3.0],
            z: vec![0.0, 25.0, 50.0, 12.0],
        };
        let camera = OrbitCamera::default();

        let points = camera.project_polyline(&trajectory, square());

        assert_eq!(points.len(), 4);
        for p in points {
            assert!(square().contains(p), "{p:?} escaped the canvas");
        }
    }

    #[test]
    fn degenerate_single_point_trajectory_projects_to_the_center() {
        let trajectory = Trajectory {
            x: vec![3.0],
            y: vec![-1.0],
            z: vec![7.0],
        };
        let camera = OrbitCamera::default();

        let points = camera.project_polyline(&trajectory, square());

        assert_eq!(points.len(), 1);
        assert!((points[0].x - 100.0).abs() < 1.0);
        assert!((points[0].y - 100.0).abs() < 1.0);
    }

    #[test]
    fn pitch_is_clamped_while_orbiting() {
        let mut camera = OrbitCamera::default();
        camera.orbit(Vec2::new(0.0, 10_000.0));
        assert!(camera.pitch <= MAX_PITCH);
        camera.orbit(Vec2::new(0.0, -100_000.0));
        assert!(camera.pitch >= -MAX_PITCH);
    }
}
