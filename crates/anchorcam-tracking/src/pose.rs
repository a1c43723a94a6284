//! Rigid pose of the tracked anchor.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Below this half-angle sine, slerp is ill-conditioned and the orientation
/// snaps to the target (about 2e-7 rad).
const SLERP_SNAP_EPSILON: f64 = 1.0e-7;

/// Position and orientation of the anchored content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PoseRepr", into = "PoseRepr")]
pub struct Pose {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), UnitQuaternion::identity())
    }

    /// Build from a position and an `[x, y, z, w]` quaternion.
    ///
    /// The quaternion is normalized.
    pub fn from_parts(position: [f64; 3], orientation: [f64; 4]) -> Self {
        let [x, y, z, w] = orientation;
        Self::new(
            Vector3::from(position),
            UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z)),
        )
    }

    /// Euclidean distance between positions.
    pub fn distance_to(&self, other: &Pose) -> f64 {
        (other.position - self.position).norm()
    }

    /// Rotation angle between orientations, in radians.
    pub fn angle_to(&self, other: &Pose) -> f64 {
        self.orientation.angle_to(&other.orientation)
    }

    /// Move a fraction `alpha` of the way toward `target`.
    ///
    /// Position is linearly interpolated as `s + (r - s) * alpha`, which is
    /// exact when `s == r`. Orientation is spherically interpolated; when the
    /// two orientations are too close for slerp to be defined the result
    /// snaps to the target.
    pub fn blend(&self, target: &Pose, alpha: f64) -> Pose {
        let position = self.position + (target.position - self.position) * alpha;
        let orientation = if self.orientation == target.orientation {
            target.orientation
        } else {
            self.orientation
                .try_slerp(&target.orientation, alpha, SLERP_SNAP_EPSILON)
                .unwrap_or(target.orientation)
        };
        Pose::new(position, orientation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

#[derive(Serialize, Deserialize)]
struct PoseRepr {
    position: [f64; 3],
    /// `[x, y, z, w]`
    orientation: [f64; 4],
}

impl From<PoseRepr> for Pose {
    fn from(repr: PoseRepr) -> Self {
        Pose::from_parts(repr.position, repr.orientation)
    }
}

impl From<Pose> for PoseRepr {
    fn from(pose: Pose) -> Self {
        let q = pose.orientation.quaternion();
        PoseRepr {
            position: [pose.position.x, pose.position.y, pose.position.z],
            orientation: [q.i, q.j, q.k, q.w],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_blend_moves_fraction_of_the_way() {
        let from = Pose::identity();
        let to = Pose::new(
            Vector3::new(10.0, 0.0, -4.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
        );

        let mid = from.blend(&to, 0.25);
        assert!((mid.position - Vector3::new(2.5, 0.0, -1.0)).norm() < 1e-12);
        assert!((mid.angle_to(&from) - FRAC_PI_2 * 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_blend_toward_self_is_exact() {
        let pose = Pose::from_parts([0.1, -0.3, 2.7], [0.2, 0.1, -0.4, 0.9]);
        let blended = pose.blend(&pose, 0.1);
        assert_eq!(blended, pose);
    }

    #[test]
    fn test_blend_full_alpha_reaches_target() {
        let from = Pose::identity();
        let to = Pose::from_parts([1.0, 2.0, 3.0], [0.0, 0.7071, 0.0, 0.7071]);
        let blended = from.blend(&to, 1.0);
        assert!(blended.distance_to(&to) < 1e-12);
        assert!(blended.angle_to(&to) < 1e-6);
    }

    #[test]
    fn test_from_parts_normalizes() {
        let pose = Pose::from_parts([0.0; 3], [0.0, 0.0, 0.0, 2.0]);
        assert!((pose.orientation.quaternion().norm() - 1.0).abs() < 1e-12);
        assert!(pose.angle_to(&Pose::identity()) < 1e-12);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"position":[1.0,2.0,3.0],"orientation":[0.0,0.0,0.0,1.0]}"#;
        let pose: Pose = serde_json::from_str(json).unwrap();
        assert_eq!(pose.position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.orientation, UnitQuaternion::identity());

        let back = serde_json::to_value(pose).unwrap();
        assert_eq!(back["orientation"][3], 1.0);
    }
}
