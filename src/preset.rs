/// One entry in the action library: the id fed to the synthesizer plus the
/// frame-by-frame animation logic handed to the generative model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActionPreset {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub prompt_logic: &'static str,
    /// Whether a procedural pose guide accompanies the request for this
    /// action. Actions without one rely on the text logic alone.
    pub has_pose_guide: bool,
}

pub const ACTION_PRESETS: [ActionPreset; 12] = [
    ActionPreset {
        id: "IDLE_BREATHE",
        label: "Idle",
        description: "Breathing Loop",
        prompt_logic: "Action: BREATHING LOOP (Sine Wave). Frame 1: Neutral. Frame 2: Inhale Start. Frame 3: Inhale Mid. Frame 4: MAX INHALE. Frame 5: Exhale Start. Frame 6: Exhale End.",
        has_pose_guide: true,
    },
    ActionPreset {
        id: "WALK_CYCLE",
        label: "Walk",
        description: "Side Scroll",
        prompt_logic: "Action: WALK CYCLE (Side View). Frame 1: Contact. Frame 2: Recoil. Frame 3: Passing. Frame 4: High Point. Frame 5: Contact. Frame 6: Recovery.",
        has_pose_guide: true,
    },
    ActionPreset {
        id: "RUN_CYCLE",
        label: "Run",
        description: "Fast Sprint",
        prompt_logic: "Action: RUN CYCLE. Forward lean 45\u{b0}. Arms pumping. Legs full extension. Dynamic motion lines.",
        has_pose_guide: true,
    },
    ActionPreset {
        id: "JUMP_FULL",
        label: "Jump",
        description: "Launch/Land",
        prompt_logic: "Action: JUMP ARC. Frame 1: Squash. Frame 2: Launch. Frame 3: Rise. Frame 4: Apex. Frame 5: Fall. Frame 6: Land.",
        has_pose_guide: true,
    },
    ActionPreset {
        id: "ATTACK_MELEE",
        label: "Attack",
        description: "Combo Hit",
        prompt_logic: "Action: MELEE ATTACK. Frame 1: Windup. Frame 2: Step. Frame 3: IMPACT. Frame 4: Follow-thru. Frame 5: Retract. Frame 6: Idle.",
        has_pose_guide: true,
    },
    ActionPreset {
        id: "GUARD_BLOCK",
        label: "Guard",
        description: "Defense",
        prompt_logic: "Action: GUARD. Frame 1-6: Steady defensive stance. Knees bent. Arms shielding face. Minimal movement.",
        has_pose_guide: false,
    },
    ActionPreset {
        id: "HIT_REACTION",
        label: "Hit",
        description: "Damage",
        prompt_logic: "Action: TAKE DAMAGE. Frame 1: Impact. Frame 2: Crunch. Frame 3: Stumble. Frame 4: Slide. Frame 5: Recover. Frame 6: Idle.",
        has_pose_guide: false,
    },
    ActionPreset {
        id: "DASH_SLIDE",
        label: "Dash",
        description: "Evasion",
        prompt_logic: "Action: DASH. Low profile slide. Speed lines. Horizontal stretch. One leg lead.",
        has_pose_guide: false,
    },
    ActionPreset {
        id: "CLIMB_LADDER",
        label: "Climb",
        description: "Vertical",
        prompt_logic: "Action: LADDER CLIMB. Back view. Frame 1: R-Hand Up. Frame 2: R-Leg Up. Frame 3: Pull. Frame 4: L-Hand Up. Frame 5: L-Leg Up. Frame 6: Pull.",
        has_pose_guide: false,
    },
    ActionPreset {
        id: "CAST_SPELL",
        label: "Magic",
        description: "Channeling",
        prompt_logic: "Action: MAGIC CAST. Frame 1: Gather. Frame 2: Charge. Frame 3: RELEASE. Frame 4: Projectile. Frame 5: Recoil. Frame 6: Cool.",
        has_pose_guide: false,
    },
    ActionPreset {
        id: "VICTORY_POSE",
        label: "Win",
        description: "Celebration",
        prompt_logic: "Action: VICTORY. Frame 1: Shock. Frame 2: Fist Pump. Frame 3: Jump. Frame 4: Pose High. Frame 5: Hold. Frame 6: Land.",
        has_pose_guide: false,
    },
    ActionPreset {
        id: "DEATH",
        label: "Die",
        description: "Game Over",
        prompt_logic: "Action: DEATH. Frame 1: Shock. Frame 2: Buckle. Frame 3: Fall Back. Frame 4: Impact. Frame 5: Bounce. Frame 6: Flat.",
        has_pose_guide: false,
    },
];

pub fn preset_by_id(id: &str) -> Option<&'static ActionPreset> {
    ACTION_PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionKind, MotionFamily};

    #[test]
    fn library_has_twelve_unique_clips() {
        let mut ids: Vec<&str> = ACTION_PRESETS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(preset_by_id("WALK_CYCLE").map(|p| p.label), Some("Walk"));
        assert!(preset_by_id("MOONWALK").is_none());
    }

    #[test]
    fn every_preset_id_parses_to_an_action() {
        // The parser's exact table must cover the whole library; none of the
        // known ids should reach the keyword fallback with a surprise.
        for preset in &ACTION_PRESETS {
            let kind = ActionKind::parse(preset.id);
            if preset.id == "ATTACK_MELEE" {
                assert!(kind.smear);
            } else {
                assert!(!kind.smear);
            }
            if preset.id == "WALK_CYCLE" {
                assert_eq!(kind.family, MotionFamily::Walk);
            }
        }
    }
}
