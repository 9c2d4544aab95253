//! Prompt assembly for the generative-image request. Pure text formatting;
//! the transport layer that actually sends it is someone else's problem.

use std::fmt::Write as _;

/// Render style requested from the generative model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpriteStyle {
    NeoRetro,
    PixelArt,
    FlatVector,
    Sketch,
}

const COMMON_BACKGROUND: &str = "PURE WHITE BACKGROUND. No shadows, no gradients on background.";

impl SpriteStyle {
    pub fn instruction(self) -> String {
        let body = match self {
            Self::PixelArt => {
                "Pixel art style, precise pixel grid, limited color palette, retro 16-bit aesthetic, sharp hard edges, no anti-aliasing."
            }
            Self::FlatVector => {
                "Modern flat vector art, clean distinct shapes, no gradients, adobe illustrator style, thick bold outlines, cell shading."
            }
            Self::Sketch => {
                "Rough hand-drawn sketch style, pencil lines, loose artistic strokes, concept art aesthetic."
            }
            Self::NeoRetro => {
                "Neo-retro anime style, 90s fighting game aesthetic, cel-shading, hard thick outlines, professional game asset quality."
            }
        };
        format!("{body} {COMMON_BACKGROUND}")
    }

    /// Lenient parse; unknown styles fall back to the default neo-retro look.
    pub fn parse(id: &str) -> Self {
        match id.trim().to_ascii_uppercase().as_str() {
            "PIXEL_ART" => Self::PixelArt,
            "FLAT_VECTOR" => Self::FlatVector,
            "SKETCH" => Self::Sketch,
            _ => Self::NeoRetro,
        }
    }
}

/// Default negative constraints: anatomy failures plus identity
/// hallucinations (the model must not invent features absent from the
/// reference character).
pub const DEFAULT_NEGATIVE: &str = "hair, wig, face, eyes, nose, mouth, lips, eyebrows, facial features, makeup, beard, mustache, different clothes, armor, shoes, boots, OVERLAPPING SPRITES, touching sprites, fused bodies, multiple people, background objects, cropped limbs, bad hands, missing fingers, extra fingers, fused fingers, blurry, messy lines, text, watermark, colored background, noise, artifacts.";

/// Inputs for one sprite-sheet generation prompt.
#[derive(Clone, Debug)]
pub struct GenerationPrompt<'a> {
    pub action_logic: &'a str,
    pub style: SpriteStyle,
    pub custom_positive: &'a str,
    pub custom_negative: &'a str,
    /// When true, the prompt instructs the model to transfer the character
    /// onto the geometry of an attached pose-guide image.
    pub has_pose_guide: bool,
}

impl GenerationPrompt<'_> {
    pub fn compose(&self) -> String {
        let mut out = String::new();

        if self.has_pose_guide {
            out.push_str(
                "ROLE: You are a Senior Technical Artist at a top-tier 2D game studio.\n\
                 TASK: Transfer the Character from IMAGE 1 onto the Geometry of IMAGE 2.\n\
                 \n\
                 [INPUTS PROVIDED]\n\
                 IMAGE 1: THE CHARACTER STYLE SOURCE (The \"Paint\").\n\
                 IMAGE 2: THE STRUCTURAL POSE GUIDE (The \"Canvas\").\n\
                 \n\
                 [CRITICAL - IDENTITY PRESERVATION]\n\
                 1. SOURCE OF TRUTH: Image 1 is the absolute reference.\n\
                 2. NO HALLUCINATIONS: If Image 1 is a bald mannequin, the output MUST be a bald mannequin. DO NOT add hair, eyes, nose, or mouth if they are missing in the source.\n\
                 3. NO BEAUTIFICATION: Do not 'improve' the character design or add clothing details not present in Image 1.\n\
                 4. EXACT MATCH: Keep the exact clothes, colors, and skin texture of Image 1.\n\
                 \n\
                 [CRITICAL - ANIMATION LOOP]\n\
                 1. SEAMLESS LOOP: Frame 6 must visually transition back to Frame 1.\n\
                 2. CYCLICAL FLOW: Ensure the motion is continuous (e.g., for running: Contact -> Recoil -> Passing -> High Point -> Contact).\n\
                 \n\
                 [RULES]\n\
                 1. Match the exact limb positions of Image 2 (The Pose Guide).\n\
                 2. Do not change the composition or grid layout of Image 2.\n\
                 3. STRICT 6-COLUMN GRID: The output must match the 6-column layout of the pose guide exactly.\n",
            );
        } else {
            let _ = write!(
                out,
                "ROLE: You are a Senior Technical Artist.\n\
                 TASK: Create a professional 6-frame sprite sheet.\n\
                 CONTEXT: The character is a FICTIONAL GAME ASSET.\n\
                 \n\
                 [INPUTS]\n\
                 IMAGE 1: REFERENCE CHARACTER.\n\
                 \n\
                 [ANIMATION LOGIC]\n\
                 {}\n\
                 \n\
                 [CRITICAL - LAYOUT]\n\
                 1. STRICT 6-COLUMN GRID: The output image must be composed of exactly 6 equal vertical columns.\n\
                 2. SPACING: Center the character perfectly in each of the 6 columns.\n\
                 3. NO OVERLAP: Characters must NOT touch the edges of their imaginary columns.\n",
                self.action_logic
            );
        }

        let _ = write!(
            out,
            "\n\
             [ART STYLE]\n\
             {}\n\
             \n\
             [ADDITIONAL INSTRUCTIONS]\n\
             {}\n\
             \n\
             [ANATOMY CHECK]\n\
             Hands must have 5 clear fingers. No fused fingers. Correct joint articulation.\n\
             \n\
             [NEGATIVE CONSTRAINTS]\n\
             {}\n",
            self.style.instruction(),
            self.custom_positive,
            self.custom_negative,
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base<'a>() -> GenerationPrompt<'a> {
        GenerationPrompt {
            action_logic: "Action: WALK CYCLE (Side View).",
            style: SpriteStyle::NeoRetro,
            custom_positive: "",
            custom_negative: DEFAULT_NEGATIVE,
            has_pose_guide: true,
        }
    }

    #[test]
    fn pose_guided_prompt_references_both_images() {
        let text = base().compose();
        assert!(text.contains("IMAGE 2: THE STRUCTURAL POSE GUIDE"));
        assert!(text.contains("STRICT 6-COLUMN GRID"));
        assert!(text.contains("SEAMLESS LOOP"));
        // The action logic is baked into the guide image, not restated.
        assert!(!text.contains("WALK CYCLE"));
    }

    #[test]
    fn fallback_prompt_carries_the_action_logic() {
        let mut p = base();
        p.has_pose_guide = false;
        let text = p.compose();
        assert!(text.contains("Action: WALK CYCLE (Side View)."));
        assert!(text.contains("[ANIMATION LOGIC]"));
    }

    #[test]
    fn every_style_demands_a_white_background() {
        for style in [
            SpriteStyle::NeoRetro,
            SpriteStyle::PixelArt,
            SpriteStyle::FlatVector,
            SpriteStyle::Sketch,
        ] {
            assert!(style.instruction().contains("PURE WHITE BACKGROUND"));
        }
    }

    #[test]
    fn style_parse_is_total() {
        assert_eq!(SpriteStyle::parse("PIXEL_ART"), SpriteStyle::PixelArt);
        assert_eq!(SpriteStyle::parse("watercolor"), SpriteStyle::NeoRetro);
    }
}
