//! Constant-rate yaw spinner.

use glam::Vec3;

use crate::actor::{Actor, Frame};
use crate::entity::Entity;

/// Turns its entity about the vertical axis at `rate` degrees per
/// reference frame, scaled by the frame's time scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spinner {
    pub rate: f32,
}

impl Default for Spinner {
    fn default() -> Self {
        Self { rate: 0.45 }
    }
}

impl Actor for Spinner {
    fn update_world(&mut self, entity: &mut dyn Entity, frame: &mut Frame<'_>) {
        entity.turn(Vec3::new(0.0, self.rate * frame.time_scale, 0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Transform;

    #[test]
    fn test_turns_at_reference_rate() {
        let mut spinner = Spinner::default();
        let mut target = Transform::default();
        spinner.update_world(&mut target, &mut Frame::headless(1.0));
        assert_eq!(target.rotation, Vec3::new(0.0, 0.45, 0.0));
    }

    #[test]
    fn test_time_scale_scales_turn() {
        let mut spinner = Spinner::default();
        let mut target = Transform::default();
        spinner.update_world(&mut target, &mut Frame::headless(2.0));
        assert_eq!(target.rotation.y, 0.45 * 2.0);
        spinner.update_world(&mut target, &mut Frame::headless(0.0));
        assert_eq!(target.rotation.y, 0.45 * 2.0);
    }

    #[test]
    fn test_only_yaw_changes() {
        let mut spinner = Spinner { rate: 3.0 };
        let mut target = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::new(10.0, 0.0, 5.0),
        };
        for _ in 0..10 {
            spinner.update_world(&mut target, &mut Frame::headless(1.0));
        }
        assert_eq!(target.rotation.x, 10.0);
        assert_eq!(target.rotation.z, 5.0);
        assert!((target.rotation.y - 30.0).abs() < 1e-4);
        assert_eq!(target.position, Vec3::new(1.0, 2.0, 3.0));
    }
}
