use std::f64::consts::PI;

use crate::{
    action::{ActionKind, MotionFamily},
    archetype::PostureMods,
};

const WALK_BOB: f64 = 15.0;
const WALK_STRIDE: f64 = 60.0;
const RUN_BOB: f64 = 30.0;
const RUN_STRIDE: f64 = 100.0;
const RUN_LEAN: f64 = 0.3;
const RUN_START_LEAN: f64 = 0.5;
const RUN_STOP_LEAN: f64 = -0.2;
const KNEE_LIFT: f64 = 40.0;
const IDLE_SWAY: f64 = 5.0;
const STRAFE_STEP: f64 = 40.0;
const ARM_SWING_RATIO: f64 = 0.5;

/// Per-frame displacement of the skeleton, before joints are placed.
///
/// All horizontal fields are in canvas pixels relative to the figure's
/// neutral stance; `y_offset` is added to the whole figure (y grows
/// downward). Every field is periodic in `phase` with period 2π, so a
/// hypothetical seventh column lands exactly on the first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionSample {
    pub y_offset: f64,
    pub lean: f64,
    pub left_leg_dx: f64,
    pub right_leg_dx: f64,
    pub left_leg_lift: f64,
    pub right_leg_lift: f64,
    pub hip_shift: f64,
    pub left_arm_dx: f64,
    pub right_arm_dx: f64,
}

/// Evaluate the action's motion family at a phase.
///
/// `column` only matters for the run start/stop lean overrides; every other
/// family ignores it. Unrecognized actions keep all offsets at their
/// archetype-only defaults.
pub fn sample(
    action: ActionKind,
    column: usize,
    phase: f64,
    x_mod: f64,
    posture: PostureMods,
    side_facing: bool,
) -> MotionSample {
    let crouch = posture.crouch_offset;

    match action.family {
        MotionFamily::Walk => {
            let stride = WALK_STRIDE * x_mod * posture.leg_spread;
            let swing = ARM_SWING_RATIO * stride;
            MotionSample {
                // Double-frequency bob: the body drops twice per cycle, once
                // per heel contact.
                y_offset: -WALK_BOB * (2.0 * phase).cos().abs() + crouch,
                left_leg_dx: stride * phase.sin(),
                right_leg_dx: stride * (phase + PI).sin(),
                left_leg_lift: knee_lift(phase, side_facing),
                right_leg_lift: knee_lift(phase + PI, side_facing),
                left_arm_dx: swing * (phase + PI).sin(),
                right_arm_dx: swing * phase.sin(),
                ..MotionSample::default()
            }
        }
        MotionFamily::Run { start_stop } => {
            let stride = RUN_STRIDE * x_mod * posture.leg_spread;
            let swing = ARM_SWING_RATIO * stride;
            let base_lean = if side_facing { RUN_LEAN } else { 0.0 };
            let lean = if start_stop {
                match column {
                    0 | 1 => RUN_START_LEAN,
                    5 => RUN_STOP_LEAN,
                    _ => base_lean,
                }
            } else {
                base_lean
            };
            MotionSample {
                y_offset: RUN_BOB * phase.sin().abs() + crouch,
                lean,
                left_leg_dx: stride * phase.sin(),
                right_leg_dx: stride * (phase + PI).sin(),
                left_leg_lift: knee_lift(phase, side_facing),
                right_leg_lift: knee_lift(phase + PI, side_facing),
                left_arm_dx: swing * (phase + PI).sin(),
                right_arm_dx: swing * phase.sin(),
                ..MotionSample::default()
            }
        }
        MotionFamily::Idle => {
            // Contrapposto, not a scissor: both legs shift together.
            let sway = IDLE_SWAY * phase.sin();
            MotionSample {
                y_offset: IDLE_SWAY * phase.sin() + crouch,
                left_leg_dx: sway,
                right_leg_dx: sway,
                hip_shift: sway,
                ..MotionSample::default()
            }
        }
        MotionFamily::Strafe => MotionSample {
            y_offset: crouch,
            left_leg_dx: STRAFE_STEP * phase.cos(),
            right_leg_dx: STRAFE_STEP * phase.sin(),
            ..MotionSample::default()
        },
        MotionFamily::Neutral => MotionSample {
            y_offset: crouch,
            ..MotionSample::default()
        },
    }
}

// Knee raise is only visible from non-profile angles; in profile the
// scissor already reads as a stride.
fn knee_lift(phase: f64, side_facing: bool) -> f64 {
    if side_facing {
        0.0
    } else {
        KNEE_LIFT * phase.sin().max(0.0)
    }
}
