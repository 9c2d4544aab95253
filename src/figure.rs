use std::f64::consts::TAU;

use crate::{
    action::ActionKind,
    archetype::PostureMods,
    core::{Affine, Point, SheetLayout, Vec2},
    direction::Direction,
    motion,
};

/// Horizontal reach of the near hand on the attack impact frame (column 2),
/// simulating a motion smear.
pub const ATTACK_SMEAR_PX: f64 = 48.0;

/// The column index that carries the attack smear.
pub const SMEAR_COLUMN: usize = 2;

const BASE_LEG_STANCE: f64 = 20.0;
const BASE_ARM_STANCE: f64 = 26.0;
const KNEE_BEND: f64 = 12.0;
const ELBOW_BOW: f64 = 10.0;
const HAND_DROP: f64 = 30.0;
const NOSE_LEN: f64 = 30.0;

/// Clearance kept between any joint and its column boundary, covering the
/// limb stroke radius plus antialiasing.
pub const INK_MARGIN: f64 = 16.0;

/// A two-segment limb: hip→knee→foot or shoulder→elbow→hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limb {
    pub mid: Point,
    pub end: Point,
}

/// One posed figure, in canvas coordinates local to its column, before the
/// whole-figure lean/bob transform is applied.
///
/// Near/far limbs are already resolved from the camera direction; the
/// renderer draws far limbs first so near ones occlude them at the joints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureFrame {
    pub phase: f64,
    pub y_offset: f64,
    pub lean_angle: f64,
    pub hip: Point,
    pub shoulder: Point,
    pub head: Point,
    pub nose_tip: Option<Point>,
    pub near_leg: Limb,
    pub far_leg: Limb,
    pub near_arm: Limb,
    pub far_arm: Limb,
}

impl FigureFrame {
    /// Pose for column `column` of a sheet: phase = column/columns · 2π.
    pub fn compute(
        layout: SheetLayout,
        column: usize,
        action: ActionKind,
        direction: Direction,
        posture: PostureMods,
    ) -> Self {
        let phase = column as f64 / f64::from(layout.columns) * TAU;
        Self::at_phase(layout, column, phase, action, direction, posture)
    }

    /// Pose at an explicit phase. Used by `compute` and by loop checks that
    /// want to evaluate the hypothetical column-count'th frame at 2π.
    pub fn at_phase(
        layout: SheetLayout,
        column: usize,
        phase: f64,
        action: ActionKind,
        direction: Direction,
        posture: PostureMods,
    ) -> Self {
        let x_mod = direction.x_mod();
        let facing = direction.facing_sign();
        let side_facing = direction.is_side_facing();
        let m = motion::sample(action, column, phase, x_mod, posture, side_facing);

        let cx = layout.column_center_x(column);
        let floor = layout.floor_y();
        let half_body = 0.5 * layout.body_height();
        let reach_budget = layout.column_width() / 2.0 - INK_MARGIN;

        // Leaning rotates the whole figure about the hip, so the head sweeps
        // half a body height times sin(lean) sideways. Cap the lean so the
        // head disk stays inside the column band.
        let lean_angle = {
            let bias = if side_facing { posture.lean_bias } else { 0.0 };
            let raw = (m.lean + bias) * facing;
            let max_sin = ((reach_budget - crate::core::HEAD_RADIUS - posture.spine_curve.abs())
                / half_body)
                .clamp(0.0, 1.0);
            let limit = max_sin.asin();
            raw.clamp(-limit, limit)
        };

        let spine_dx = facing * posture.spine_curve;
        let stance = BASE_LEG_STANCE * x_mod * posture.leg_spread;
        let arm_span = BASE_ARM_STANCE * x_mod;

        let smear_dx = if action.smear && column == SMEAR_COLUMN {
            facing * ATTACK_SMEAR_PX
        } else {
            0.0
        };
        // The right-hand side is nearer the camera everywhere except the
        // mirrored profile; the smear lands on the near hand.
        let near_is_right = !matches!(direction, Direction::SideLeft);
        let (left_smear, right_smear) = if near_is_right {
            (0.0, smear_dx)
        } else {
            (smear_dx, 0.0)
        };

        // Horizontal joint offsets from the column centre, pre-lean.
        let foot_left_dx = m.hip_shift - stance + m.left_leg_dx;
        let foot_right_dx = m.hip_shift + stance + m.right_leg_dx;
        let hand_left_dx = spine_dx - arm_span + m.left_arm_dx + left_smear;
        let hand_right_dx = spine_dx + arm_span + m.right_arm_dx + right_smear;

        // The lean rotation swings the feet a further half_body·sin(lean)
        // outward, so the reach the offsets may spend shrinks with the lean.
        // Squeeze every offset uniformly when the pose would overrun its
        // band; the motion pattern is preserved, only its amplitude is cut.
        let squeeze = {
            let reach = foot_left_dx
                .abs()
                .max(foot_right_dx.abs())
                .max(hand_left_dx.abs())
                .max(hand_right_dx.abs());
            let allowed =
                (reach_budget - half_body * lean_angle.abs().sin()) / lean_angle.cos();
            if reach > allowed {
                (allowed / reach).max(0.0)
            } else {
                1.0
            }
        };

        let hip = Point::new(cx + squeeze * m.hip_shift, layout.hip_y());
        // The hunch shifts the whole upper body toward the facing direction.
        let upper_x = cx + spine_dx;
        let shoulder = Point::new(upper_x, layout.shoulder_y());
        let head = Point::new(upper_x, layout.head_y());

        let foot_left = Point::new(cx + squeeze * foot_left_dx, floor - m.left_leg_lift);
        let foot_right = Point::new(cx + squeeze * foot_right_dx, floor - m.right_leg_lift);
        let left_leg = Limb {
            mid: knee(hip, foot_left, facing, x_mod, m.left_leg_lift),
            end: foot_left,
        };
        let right_leg = Limb {
            mid: knee(hip, foot_right, facing, x_mod, m.right_leg_lift),
            end: foot_right,
        };

        let hand_y = layout.hip_y() + HAND_DROP + posture.arm_lift;
        let hand_left = Point::new(cx + squeeze * hand_left_dx, hand_y);
        let hand_right = Point::new(cx + squeeze * hand_right_dx, hand_y);
        let left_arm = Limb {
            mid: elbow(shoulder, hand_left, -1.0, x_mod),
            end: hand_left,
        };
        let right_arm = Limb {
            mid: elbow(shoulder, hand_right, 1.0, x_mod),
            end: hand_right,
        };

        let (near_leg, far_leg, near_arm, far_arm) = if near_is_right {
            (right_leg, left_leg, right_arm, left_arm)
        } else {
            (left_leg, right_leg, left_arm, right_arm)
        };

        let nose_dx = direction.nose_dx();
        let nose_tip = if nose_dx == 0.0 {
            None
        } else {
            Some(head + Vec2::new(nose_dx * NOSE_LEN, 0.0))
        };

        Self {
            phase,
            y_offset: m.y_offset,
            lean_angle,
            hip,
            shoulder,
            head,
            nose_tip,
            near_leg,
            far_leg,
            near_arm,
            far_arm,
        }
    }

    /// Whole-figure transform: vertical bob, then lean about the hip.
    pub fn figure_affine(&self) -> Affine {
        Affine::translate((0.0, self.y_offset)) * Affine::rotate_about(self.lean_angle, self.hip)
    }
}

fn knee(hip: Point, foot: Point, facing: f64, x_mod: f64, lift: f64) -> Point {
    let mid = hip.midpoint(foot);
    mid + Vec2::new(facing * (KNEE_BEND * x_mod + 0.3 * lift), 0.0)
}

fn elbow(shoulder: Point, hand: Point, side: f64, x_mod: f64) -> Point {
    let mid = shoulder.midpoint(hand);
    mid + Vec2::new(side * ELBOW_BOW * x_mod, 0.0)
}
