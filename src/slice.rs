use std::io::Cursor;

use crate::{
    core::SHEET_COLUMNS,
    error::{PoseGuideError, PoseGuideResult},
};

/// Partition a returned composite sheet into `frames` equal-width PNG
/// frames.
///
/// Frame width is `floor(sheet_width / frames)` so cuts land on integer
/// pixels; a trailing remainder column, if any, is discarded. No resampling
/// is performed.
pub fn slice_sheet(sheet_bytes: &[u8], frames: u32) -> PoseGuideResult<Vec<Vec<u8>>> {
    if frames == 0 {
        return Err(PoseGuideError::validation("frame count must be > 0"));
    }

    let img = image::load_from_memory(sheet_bytes)
        .map_err(|e| PoseGuideError::encode(format!("decode sheet: {e}")))?;

    let frame_width = img.width() / frames;
    if frame_width == 0 {
        return Err(PoseGuideError::validation(
            "sheet is narrower than the requested frame count",
        ));
    }

    let mut out = Vec::with_capacity(frames as usize);
    for i in 0..frames {
        let frame = img.crop_imm(i * frame_width, 0, frame_width, img.height());
        let mut bytes = Vec::new();
        frame
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| PoseGuideError::encode(format!("encode frame {i}: {e}")))?;
        out.push(bytes);
    }
    Ok(out)
}

/// Slice into the standard 6 sprite-sheet frames.
pub fn slice_sprite_sheet(sheet_bytes: &[u8]) -> PoseGuideResult<Vec<Vec<u8>>> {
    slice_sheet(sheet_bytes, SHEET_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frames_is_a_validation_error() {
        assert!(matches!(
            slice_sheet(&[], 0),
            Err(PoseGuideError::Validation(_))
        ));
    }

    #[test]
    fn garbage_bytes_are_an_encode_error() {
        assert!(matches!(
            slice_sheet(b"not a png", 6),
            Err(PoseGuideError::Encode(_))
        ));
    }
}
