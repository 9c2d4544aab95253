/// Camera direction the figure faces. Directions change how wide the limbs
/// spread horizontally and where the nose vector points; they never change
/// figure proportions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Front,
    Back,
    Side,
    SideLeft,
    ThreeQuarter,
    IsoFront,
    IsoBack,
}

impl Direction {
    /// Horizontal limb-spread multiplier: head-on views hide most lateral
    /// extension behind the torso, profile views show all of it.
    pub fn x_mod(self) -> f64 {
        match self {
            Self::Front | Self::Back => 0.4,
            Self::ThreeQuarter | Self::IsoFront | Self::IsoBack => 0.7,
            Self::Side | Self::SideLeft => 1.0,
        }
    }

    /// Signed horizontal direction of the nose vector, in units of the nose
    /// length. Zero means no nose is drawn (the figure faces the camera or
    /// away from it).
    pub fn nose_dx(self) -> f64 {
        match self {
            Self::Side => 1.0,
            Self::SideLeft => -1.0,
            Self::ThreeQuarter | Self::IsoFront => 0.5,
            Self::Front | Self::Back | Self::IsoBack => 0.0,
        }
    }

    /// Full-profile views get the forward lean and lateral gait treatment.
    pub fn is_side_facing(self) -> bool {
        matches!(self, Self::Side | Self::SideLeft)
    }

    /// +1 when the figure faces right (or the camera), -1 when it faces left.
    pub fn facing_sign(self) -> f64 {
        if matches!(self, Self::SideLeft) { -1.0 } else { 1.0 }
    }

    /// Lenient parse of the wire-format name. Unknown values degrade to
    /// `Front` rather than failing; the synthesizer is total over its input
    /// space.
    pub fn parse(id: &str) -> Self {
        match id.trim().to_ascii_uppercase().as_str() {
            "BACK" => Self::Back,
            "SIDE" => Self::Side,
            "SIDE_LEFT" => Self::SideLeft,
            "THREE_QUARTER" => Self::ThreeQuarter,
            "ISO_FRONT" => Self::IsoFront,
            "ISO_BACK" => Self::IsoBack,
            _ => Self::Front,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "FRONT",
            Self::Back => "BACK",
            Self::Side => "SIDE",
            Self::SideLeft => "SIDE_LEFT",
            Self::ThreeQuarter => "THREE_QUARTER",
            Self::IsoFront => "ISO_FRONT",
            Self::IsoBack => "ISO_BACK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_mod_matches_view_width() {
        assert_eq!(Direction::Front.x_mod(), 0.4);
        assert_eq!(Direction::Back.x_mod(), 0.4);
        assert_eq!(Direction::ThreeQuarter.x_mod(), 0.7);
        assert_eq!(Direction::IsoFront.x_mod(), 0.7);
        assert_eq!(Direction::IsoBack.x_mod(), 0.7);
        assert_eq!(Direction::Side.x_mod(), 1.0);
        assert_eq!(Direction::SideLeft.x_mod(), 1.0);
    }

    #[test]
    fn side_variants_mirror_the_nose() {
        assert_eq!(Direction::Side.nose_dx(), -Direction::SideLeft.nose_dx());
        assert_eq!(Direction::Front.nose_dx(), 0.0);
        assert_eq!(Direction::IsoBack.nose_dx(), 0.0);
    }

    #[test]
    fn parse_is_total() {
        assert_eq!(Direction::parse("SIDE_LEFT"), Direction::SideLeft);
        assert_eq!(Direction::parse("side"), Direction::Side);
        assert_eq!(Direction::parse(" ISO_FRONT "), Direction::IsoFront);
        assert_eq!(Direction::parse("UPSIDE_DOWN"), Direction::Front);
        assert_eq!(Direction::parse(""), Direction::Front);
    }

    #[test]
    fn as_str_round_trips() {
        for d in [
            Direction::Front,
            Direction::Back,
            Direction::Side,
            Direction::SideLeft,
            Direction::ThreeQuarter,
            Direction::IsoFront,
            Direction::IsoBack,
        ] {
            assert_eq!(Direction::parse(d.as_str()), d);
        }
    }
}
