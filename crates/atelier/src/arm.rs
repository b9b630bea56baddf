//! The articulated-arm demo: three compound shapes compiled once, replayed
//! every frame under joint transforms.

use anyhow::Result;
use glam::{Affine2, Vec2};

use crate::{
    color,
    display::{DisplayList, ListBuilder},
    render::Raster,
    scene::PrimitiveKind,
    shapes,
};

/// Joint rotations in degrees: shoulder, elbow, wrist.
#[derive(Debug, Clone, Copy, Default)]
pub struct JointAngles {
    pub shoulder: f32,
    pub elbow: f32,
    pub wrist: f32,
}

/// The three arm segments, sized for a ±100 world. Built once; drawing only
/// reads them.
pub struct Arm {
    shoulder: DisplayList,
    forearm: DisplayList,
    beater: DisplayList,
}

impl Arm {
    pub fn new() -> Self {
        Self {
            shoulder: shoulder_list(),
            forearm: forearm_list(),
            beater: beater_list(),
        }
    }

    /// The frame's draws in paint order: each entry is a compiled list and
    /// the accumulated joint transform to replay it under. The beater is
    /// drawn three times, the copies offset a further 10° and 20° around the
    /// wrist.
    pub fn pose(&self, angles: JointAngles) -> [(Affine2, &DisplayList); 5] {
        let shoulder = Affine2::from_angle(angles.shoulder.to_radians());
        let forearm = shoulder
            * Affine2::from_translation(Vec2::new(60.0, 0.0))
            * Affine2::from_angle(angles.elbow.to_radians());
        let beater = forearm
            * Affine2::from_translation(Vec2::new(40.0, 0.0))
            * Affine2::from_angle(angles.wrist.to_radians());
        let beater2 = beater * Affine2::from_angle((angles.wrist + 10.0).to_radians());
        let beater3 = beater2 * Affine2::from_angle((angles.wrist + 20.0).to_radians());

        [
            (shoulder, &self.shoulder),
            (forearm, &self.forearm),
            (beater, &self.beater),
            (beater2, &self.beater),
            (beater3, &self.beater),
        ]
    }

    pub fn draw<R: Raster + ?Sized>(&self, r: &mut R, angles: JointAngles) -> Result<()> {
        for (transform, list) in self.pose(angles) {
            list.draw(r, transform)?;
        }
        Ok(())
    }
}

impl Default for Arm {
    fn default() -> Self {
        Self::new()
    }
}

/// Shoulder segment: a radius-20 disc at the joint, a radius-10 disc at the
/// elbow end, two lines joining them.
fn shoulder_list() -> DisplayList {
    let mut b = ListBuilder::new();
    b.scoped(|b| {
        b.translate(Vec2::new(60.0, 0.0));
        b.scale(Vec2::splat(20.0));
        shapes::circle(b, color::CYAN, true);
    });
    b.scoped(|b| {
        b.scale(Vec2::splat(40.0));
        shapes::circle(b, color::CYAN, true);
    });
    b.emit(
        PrimitiveKind::Lines,
        color::CYAN,
        [
            Vec2::new(0.0, 20.0),
            Vec2::new(60.0, 10.0),
            Vec2::new(0.0, -20.0),
            Vec2::new(60.0, -10.0),
        ],
    );
    b.build()
}

/// Forearm: two rounded squares 40 apart joined by a 46×6 bar.
fn forearm_list() -> DisplayList {
    let mut b = ListBuilder::new();
    b.scoped(|b| {
        b.scale(Vec2::splat(10.0));
        shapes::rounded_square(b, color::CYAN);
    });
    b.scoped(|b| {
        b.translate(Vec2::new(40.0, 0.0));
        b.scale(Vec2::splat(10.0));
        shapes::rounded_square(b, color::CYAN);
    });
    b.scoped(|b| {
        b.translate(Vec2::new(20.0, 0.0));
        b.scale(Vec2::new(46.0, 6.0));
        shapes::square(b, color::CYAN, true);
    });
    b.build()
}

/// Beater: a rounded square at the wrist, a radius-4 disc at the tip, a
/// 40×4 bar between them.
fn beater_list() -> DisplayList {
    let mut b = ListBuilder::new();
    b.scoped(|b| {
        b.scale(Vec2::splat(6.0));
        shapes::rounded_square(b, color::CYAN);
    });
    b.scoped(|b| {
        b.translate(Vec2::new(38.0, 0.0));
        b.scale(Vec2::splat(8.0));
        shapes::circle(b, color::CYAN, true);
    });
    b.scoped(|b| {
        b.translate(Vec2::new(20.0, 0.0));
        b.scale(Vec2::new(40.0, 4.0));
        shapes::square(b, color::CYAN, true);
    });
    b.build()
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{Arm, JointAngles};

    #[test]
    fn rest_pose_lays_segments_along_x() {
        let arm = Arm::new();
        let pose = arm.pose(JointAngles::default());

        assert_eq!(pose[0].0.translation, Vec2::ZERO);
        assert_eq!(pose[1].0.translation, Vec2::new(60.0, 0.0));
        assert_eq!(pose[2].0.translation, Vec2::new(100.0, 0.0));
        // The extra beater copies rotate in place around the wrist.
        assert_eq!(pose[3].0.translation, Vec2::new(100.0, 0.0));
        assert_eq!(pose[4].0.translation, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn shoulder_rotation_carries_the_whole_chain() {
        let arm = Arm::new();
        let pose = arm.pose(JointAngles {
            shoulder: 90.0,
            elbow: 0.0,
            wrist: 0.0,
        });

        assert!(pose[1].0.translation.distance(Vec2::new(0.0, 60.0)) < 1e-4);
        assert!(pose[2].0.translation.distance(Vec2::new(0.0, 100.0)) < 1e-4);
    }

    #[test]
    fn lists_are_compiled_once_and_shared() {
        let arm = Arm::new();
        let pose = arm.pose(JointAngles::default());

        assert!(std::ptr::eq(pose[2].1, pose[3].1));
        assert!(std::ptr::eq(pose[3].1, pose[4].1));
    }
}
