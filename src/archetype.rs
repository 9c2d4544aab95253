/// Character archetype: a named bundle of posture modifiers. Archetypes bias
/// the neutral stance; they never replace the phase-driven motion pattern of
/// an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Archetype {
    Vanguard,
    Rogue,
    Mystic,
    Beast,
}

/// Scalar posture modifiers supplied by an archetype.
///
/// `crouch_offset` and `arm_lift` are in canvas pixels (y grows downward, so
/// positive crouch lowers the figure and negative arm lift raises the hands).
/// `lean_bias` is an extra forward lean in radians, applied only on
/// side-facing directions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PostureMods {
    pub leg_spread: f64,
    pub crouch_offset: f64,
    pub arm_lift: f64,
    pub spine_curve: f64,
    pub lean_bias: f64,
}

impl Default for PostureMods {
    fn default() -> Self {
        Self {
            leg_spread: 1.0,
            crouch_offset: 0.0,
            arm_lift: 0.0,
            spine_curve: 0.0,
            lean_bias: 0.0,
        }
    }
}

impl Archetype {
    pub fn posture(self) -> PostureMods {
        match self {
            Self::Vanguard => PostureMods {
                leg_spread: 1.5,
                ..PostureMods::default()
            },
            Self::Rogue => PostureMods {
                crouch_offset: 20.0,
                lean_bias: 0.1,
                ..PostureMods::default()
            },
            Self::Mystic => PostureMods {
                arm_lift: -30.0,
                ..PostureMods::default()
            },
            Self::Beast => PostureMods {
                spine_curve: 15.0,
                arm_lift: 40.0,
                ..PostureMods::default()
            },
        }
    }

    /// Parse the wire-format name. Unknown archetypes are not an error; the
    /// caller falls back to `PostureMods::default()` (no modifiers applied).
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_ascii_uppercase().as_str() {
            "VANGUARD" => Some(Self::Vanguard),
            "ROGUE" => Some(Self::Rogue),
            "MYSTIC" => Some(Self::Mystic),
            "BEAST" => Some(Self::Beast),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vanguard => "VANGUARD",
            Self::Rogue => "ROGUE",
            Self::Mystic => "MYSTIC",
            Self::Beast => "BEAST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posture_constants() {
        let v = Archetype::Vanguard.posture();
        assert_eq!(v.leg_spread, 1.5);
        assert_eq!(v.crouch_offset, 0.0);

        let r = Archetype::Rogue.posture();
        assert_eq!(r.crouch_offset, 20.0);
        assert!(r.lean_bias > 0.0);

        let m = Archetype::Mystic.posture();
        assert_eq!(m.arm_lift, -30.0);

        let b = Archetype::Beast.posture();
        assert_eq!(b.spine_curve, 15.0);
        assert_eq!(b.arm_lift, 40.0);
        assert_eq!(b.crouch_offset, 0.0);
    }

    #[test]
    fn unknown_archetype_is_neutral() {
        assert_eq!(Archetype::parse("SLIME"), None);
        let neutral = PostureMods::default();
        assert_eq!(neutral.leg_spread, 1.0);
        assert_eq!(neutral.crouch_offset, 0.0);
        assert_eq!(neutral.arm_lift, 0.0);
        assert_eq!(neutral.spine_curve, 0.0);
    }

    #[test]
    fn parse_round_trips() {
        for a in [
            Archetype::Vanguard,
            Archetype::Rogue,
            Archetype::Mystic,
            Archetype::Beast,
        ] {
            assert_eq!(Archetype::parse(a.as_str()), Some(a));
        }
    }
}
