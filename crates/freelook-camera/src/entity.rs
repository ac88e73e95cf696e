//! The object an actor drives.
//!
//! Orientation is kept as Euler angles in degrees, `(pitch, yaw, roll)`,
//! applied yaw first, then pitch, then roll. The frame is Y-up with +Z
//! forward and +X right, so positive pitch looks down and positive yaw turns
//! right.

use glam::{EulerRot, Quat, Vec3};

/// Orientation and position access for an actor's target.
pub trait Entity {
    /// Current orientation in degrees `(pitch, yaw, roll)`.
    fn rotation(&self) -> Vec3;
    /// Overwrite the orientation.
    fn set_rotation(&mut self, rotation: Vec3);
    /// Move in world space.
    fn translate(&mut self, offset: Vec3);
    /// Move along the entity's own right/up/forward axes.
    fn move_local(&mut self, offset: Vec3);

    /// Add to the orientation.
    fn turn(&mut self, delta: Vec3) {
        let rotation = self.rotation() + delta;
        self.set_rotation(rotation);
    }
}

/// Plain position-plus-Euler transform.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Orientation in degrees `(pitch, yaw, roll)`.
    pub rotation: Vec3,
}

impl Transform {
    /// Creates a transform at `position` with no rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Orientation as a quaternion.
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y.to_radians(),
            self.rotation.x.to_radians(),
            self.rotation.z.to_radians(),
        )
    }

    /// Local +Z in world space.
    pub fn forward(&self) -> Vec3 {
        self.quat() * Vec3::Z
    }

    /// Local +X in world space.
    pub fn right(&self) -> Vec3 {
        self.quat() * Vec3::X
    }
}

impl Entity for Transform {
    fn rotation(&self) -> Vec3 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    fn move_local(&mut self, offset: Vec3) {
        self.position += self.quat() * offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_identity_faces_positive_z() {
        let t = Transform::default();
        assert!(approx(t.forward(), Vec3::Z));
        assert!(approx(t.right(), Vec3::X));
    }

    #[test]
    fn test_positive_yaw_turns_right() {
        let t = Transform {
            rotation: Vec3::new(0.0, 90.0, 0.0),
            ..Default::default()
        };
        assert!(approx(t.forward(), Vec3::X));
        assert!(approx(t.right(), Vec3::NEG_Z));
    }

    #[test]
    fn test_positive_pitch_looks_down() {
        let t = Transform {
            rotation: Vec3::new(30.0, 0.0, 0.0),
            ..Default::default()
        };
        assert!(t.forward().y < 0.0);
    }

    #[test]
    fn test_move_local_follows_facing() {
        let mut t = Transform {
            rotation: Vec3::new(0.0, 90.0, 0.0),
            ..Default::default()
        };
        t.move_local(Vec3::new(0.0, 0.0, 2.0));
        assert!(approx(t.position, Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_translate_ignores_facing() {
        let mut t = Transform {
            rotation: Vec3::new(45.0, 45.0, 0.0),
            ..Default::default()
        };
        t.translate(Vec3::Y);
        assert_eq!(t.position, Vec3::Y);
    }

    #[test]
    fn test_turn_adds_to_rotation() {
        let mut t = Transform::from_position(Vec3::new(0.0, 0.0, -3.0));
        t.turn(Vec3::new(0.0, 0.45, 0.0));
        t.turn(Vec3::new(0.0, 0.45, 0.0));
        assert_eq!(t.rotation, Vec3::new(0.0, 0.9, 0.0));
        assert_eq!(t.position, Vec3::new(0.0, 0.0, -3.0));
    }
}
