use poseguide::{Archetype, Direction, slice_sheet, slice_sprite_sheet, synthesize};

#[test]
fn sheet_slices_into_six_equal_frames() {
    let sheet = synthesize("WALK_CYCLE", Direction::Side, Archetype::Vanguard).unwrap();
    let frames = slice_sprite_sheet(&sheet).unwrap();
    assert_eq!(frames.len(), 6);

    for frame in &frames {
        let img = image::load_from_memory(frame).unwrap();
        assert_eq!(img.width(), 320);
        assert_eq!(img.height(), 1080);
    }
}

#[test]
fn frame_width_floors_on_uneven_sheets() {
    // 1000 px / 6 frames -> 166 px frames, 4 px remainder discarded.
    let mut png = Vec::new();
    image::DynamicImage::new_rgba8(1000, 10)
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageFormat::Png,
        )
        .unwrap();

    let frames = slice_sheet(&png, 6).unwrap();
    assert_eq!(frames.len(), 6);
    for frame in &frames {
        let img = image::load_from_memory(frame).unwrap();
        assert_eq!(img.width(), 166);
    }
}

#[test]
fn sheet_narrower_than_frame_count_is_rejected() {
    let mut png = Vec::new();
    image::DynamicImage::new_rgba8(4, 4)
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageFormat::Png,
        )
        .unwrap();

    assert!(slice_sheet(&png, 6).is_err());
}

#[test]
fn slices_reassemble_the_original_pixels() {
    let sheet = synthesize("IDLE_BREATHE", Direction::Front, Archetype::Mystic).unwrap();
    let original = image::load_from_memory(&sheet).unwrap().to_rgba8();
    let frames = slice_sprite_sheet(&sheet).unwrap();

    for (i, frame) in frames.iter().enumerate() {
        let frame = image::load_from_memory(frame).unwrap().to_rgba8();
        for y in [0u32, 500, 917, 1079] {
            for x in [0u32, 100, 319] {
                assert_eq!(
                    frame.get_pixel(x, y),
                    original.get_pixel(i as u32 * 320 + x, y),
                    "pixel mismatch in frame {i} at ({x}, {y})"
                );
            }
        }
    }
}
