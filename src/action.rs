/// Motion family an action id resolves to. Each family is a closed-form,
/// periodic displacement function of phase; anything without a family holds
/// the static archetype pose across all columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MotionFamily {
    Walk,
    Run { start_stop: bool },
    Idle,
    Strafe,
    Neutral,
}

/// A parsed action: the gait family plus the orthogonal attack-smear flag.
///
/// Dispatch is enum-keyed, not substring-matched: the known preset ids map
/// through an exact table, and only unknown ids fall back to keyword
/// classification with a fixed precedence (start/stop-qualified run, then
/// run/dash, walk, idle, strafe). The smear flag is independent of the
/// family, so an id carrying both a gait keyword and an attack marker gets
/// both, deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActionKind {
    pub family: MotionFamily,
    pub smear: bool,
}

impl ActionKind {
    pub const fn new(family: MotionFamily) -> Self {
        Self {
            family,
            smear: false,
        }
    }

    pub fn parse(id: &str) -> Self {
        let id = id.trim().to_ascii_uppercase();

        // Known preset ids first; the keyword fallback only serves ids the
        // action library has never heard of.
        let exact = match id.as_str() {
            "IDLE_BREATHE" => Some(Self::new(MotionFamily::Idle)),
            "WALK_CYCLE" => Some(Self::new(MotionFamily::Walk)),
            "RUN_CYCLE" => Some(Self::new(MotionFamily::Run { start_stop: false })),
            "RUN_START_STOP" => Some(Self::new(MotionFamily::Run { start_stop: true })),
            "DASH_SLIDE" => Some(Self::new(MotionFamily::Run { start_stop: false })),
            "STRAFE_CYCLE" => Some(Self::new(MotionFamily::Strafe)),
            "ATTACK_MELEE" => Some(Self {
                family: MotionFamily::Neutral,
                smear: true,
            }),
            "JUMP_FULL" | "GUARD_BLOCK" | "HIT_REACTION" | "CLIMB_LADDER" | "CAST_SPELL"
            | "VICTORY_POSE" | "DEATH" => Some(Self::new(MotionFamily::Neutral)),
            _ => None,
        };
        if let Some(kind) = exact {
            return kind;
        }

        let smear = id.contains("ATTACK") || id.contains("MELEE");
        let family = if id.contains("RUN") && (id.contains("START") || id.contains("STOP")) {
            MotionFamily::Run { start_stop: true }
        } else if id.contains("RUN") || id.contains("DASH") {
            MotionFamily::Run { start_stop: false }
        } else if id.contains("WALK") {
            MotionFamily::Walk
        } else if id.contains("IDLE") || id.contains("BREATHE") {
            MotionFamily::Idle
        } else if id.contains("STRAFE") {
            MotionFamily::Strafe
        } else {
            MotionFamily::Neutral
        };

        Self { family, smear }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_table_is_exact() {
        assert_eq!(
            ActionKind::parse("WALK_CYCLE"),
            ActionKind::new(MotionFamily::Walk)
        );
        assert_eq!(
            ActionKind::parse("RUN_START_STOP"),
            ActionKind::new(MotionFamily::Run { start_stop: true })
        );
        assert_eq!(
            ActionKind::parse("DASH_SLIDE"),
            ActionKind::new(MotionFamily::Run { start_stop: false })
        );
        assert_eq!(
            ActionKind::parse("IDLE_BREATHE"),
            ActionKind::new(MotionFamily::Idle)
        );
        let attack = ActionKind::parse("ATTACK_MELEE");
        assert_eq!(attack.family, MotionFamily::Neutral);
        assert!(attack.smear);
    }

    #[test]
    fn neutral_presets_hold_still() {
        for id in [
            "JUMP_FULL",
            "GUARD_BLOCK",
            "HIT_REACTION",
            "CLIMB_LADDER",
            "CAST_SPELL",
            "VICTORY_POSE",
            "DEATH",
        ] {
            assert_eq!(ActionKind::parse(id), ActionKind::new(MotionFamily::Neutral));
        }
    }

    #[test]
    fn fallback_precedence_is_deterministic() {
        // An id carrying several gait keywords resolves by fixed precedence.
        assert_eq!(
            ActionKind::parse("WALK_THEN_RUN").family,
            MotionFamily::Run { start_stop: false }
        );
        assert_eq!(
            ActionKind::parse("RUN_TO_STOP").family,
            MotionFamily::Run { start_stop: true }
        );
        assert_eq!(ActionKind::parse("WALK_WEARY").family, MotionFamily::Walk);
        assert_eq!(ActionKind::parse("STRAFE_LOW").family, MotionFamily::Strafe);
    }

    #[test]
    fn smear_is_orthogonal_to_gait() {
        let k = ActionKind::parse("ATTACK_RUN");
        assert_eq!(k.family, MotionFamily::Run { start_stop: false });
        assert!(k.smear);

        let k = ActionKind::parse("MELEE_WALK");
        assert_eq!(k.family, MotionFamily::Walk);
        assert!(k.smear);
    }

    #[test]
    fn unknown_ids_are_neutral_not_errors() {
        let k = ActionKind::parse("SOMERSAULT_TWIST");
        assert_eq!(k.family, MotionFamily::Neutral);
        assert!(!k.smear);
    }
}
