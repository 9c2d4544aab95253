use crate::error::{PoseGuideError, PoseGuideResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};

/// Number of frames in a generated sprite sheet.
pub const SHEET_COLUMNS: u32 = 6;

/// Head disk radius in canvas pixels, constant across actions and columns.
pub const HEAD_RADIUS: f64 = 55.0;

/// Fixed canvas geometry of a pose sheet: the raster size and how it is
/// partitioned into equal-width figure columns. All skeletal landmarks are
/// fractions of the canvas height, so only the pose varies per column, never
/// the figure scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SheetLayout {
    pub width: u32,
    pub height: u32,
    pub columns: u32,
}

impl SheetLayout {
    pub fn new(width: u32, height: u32, columns: u32) -> PoseGuideResult<Self> {
        if width == 0 || height == 0 {
            return Err(PoseGuideError::validation("sheet dimensions must be > 0"));
        }
        if columns == 0 {
            return Err(PoseGuideError::validation("sheet columns must be > 0"));
        }
        if width % columns != 0 {
            return Err(PoseGuideError::validation(
                "sheet width must divide evenly into columns",
            ));
        }
        Ok(Self {
            width,
            height,
            columns,
        })
    }

    /// The 1920x1080, 6-column layout handed to the generative model.
    pub fn sprite_sheet() -> Self {
        Self {
            width: 1920,
            height: 1080,
            columns: SHEET_COLUMNS,
        }
    }

    pub fn column_width(self) -> f64 {
        f64::from(self.width) / f64::from(self.columns)
    }

    pub fn column_center_x(self, column: usize) -> f64 {
        (column as f64 + 0.5) * self.column_width()
    }

    pub fn floor_y(self) -> f64 {
        0.85 * f64::from(self.height)
    }

    pub fn body_height(self) -> f64 {
        0.55 * f64::from(self.height)
    }

    pub fn hip_y(self) -> f64 {
        self.floor_y() - 0.5 * self.body_height()
    }

    pub fn shoulder_y(self) -> f64 {
        self.floor_y() - 0.85 * self.body_height()
    }

    pub fn head_y(self) -> f64 {
        self.floor_y() - self.body_height()
    }
}

/// Straight (non-premultiplied) RGBA8. Pose sheets only ever draw fully
/// opaque paint over an opaque background, so straight and premultiplied
/// bytes coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}
