//! Sheet-level synthesis: the `synthesize` entry point renders a 6-column
//! pose-guide strip and PNG-encodes it for use as a structural reference
//! image in a generative request.

use crate::{
    action::ActionKind,
    archetype::{Archetype, PostureMods},
    core::SheetLayout,
    direction::Direction,
    error::{PoseGuideError, PoseGuideResult},
    figure::FigureFrame,
    render_cpu::{SheetRgba, SheetSurface},
};

/// Render a pose sheet to raw pixels. Pure function of its inputs; each call
/// owns its drawing surface for the duration and releases it on return.
pub fn render_sheet(
    layout: SheetLayout,
    action: ActionKind,
    direction: Direction,
    posture: PostureMods,
) -> PoseGuideResult<SheetRgba> {
    let mut surface = SheetSurface::new(layout)?;
    for column in 0..layout.columns as usize {
        surface.draw_ground_line(column);
        let fig = FigureFrame::compute(layout, column, action, direction, posture);
        surface.draw_figure(&fig);
    }
    Ok(surface.finish())
}

/// Synthesize a PNG-encoded 1920x1080 pose guide for an action id, camera
/// direction, and archetype.
///
/// Always succeeds for finite inputs: unknown action ids fall back to the
/// default-case geometry rather than failing. The only error paths are an
/// unusable drawing surface or a PNG encoder failure, both environment-level.
#[tracing::instrument]
pub fn synthesize(
    action_id: &str,
    direction: Direction,
    archetype: Archetype,
) -> PoseGuideResult<Vec<u8>> {
    synthesize_with(
        SheetLayout::sprite_sheet(),
        action_id,
        direction,
        archetype.posture(),
    )
}

/// String-typed variant of [`synthesize`], total over its whole input space:
/// unknown direction ids degrade to `FRONT` and unknown archetype ids to
/// neutral posture.
#[tracing::instrument]
pub fn synthesize_ids(
    action_id: &str,
    direction_id: &str,
    archetype_id: &str,
) -> PoseGuideResult<Vec<u8>> {
    let direction = Direction::parse(direction_id);
    let posture = Archetype::parse(archetype_id)
        .map(Archetype::posture)
        .unwrap_or_default();
    synthesize_with(SheetLayout::sprite_sheet(), action_id, direction, posture)
}

fn synthesize_with(
    layout: SheetLayout,
    action_id: &str,
    direction: Direction,
    posture: PostureMods,
) -> PoseGuideResult<Vec<u8>> {
    let action = ActionKind::parse(action_id);
    tracing::debug!(?action, ?direction, "rendering pose sheet");
    let sheet = render_sheet(layout, action, direction, posture)?;
    encode_png(&sheet)
}

/// PNG-encode rendered sheet pixels.
pub fn encode_png(sheet: &SheetRgba) -> PoseGuideResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image::write_buffer_with_format(
        &mut std::io::Cursor::new(&mut bytes),
        &sheet.data,
        sheet.width,
        sheet.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PoseGuideError::encode(format!("png encode: {e}")))?;
    Ok(bytes)
}
