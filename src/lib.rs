#![forbid(unsafe_code)]

pub mod action;
pub mod archetype;
pub mod core;
pub mod direction;
pub mod error;
pub mod figure;
pub mod motion;
pub mod preset;
pub mod prompt;
pub mod render_cpu;
pub mod sheet;
pub mod slice;

pub use action::{ActionKind, MotionFamily};
pub use archetype::{Archetype, PostureMods};
pub use core::{HEAD_RADIUS, Rgba8, SHEET_COLUMNS, SheetLayout};
pub use direction::Direction;
pub use error::{PoseGuideError, PoseGuideResult};
pub use figure::{ATTACK_SMEAR_PX, FigureFrame, Limb};
pub use motion::MotionSample;
pub use preset::{ACTION_PRESETS, ActionPreset, preset_by_id};
pub use prompt::{DEFAULT_NEGATIVE, GenerationPrompt, SpriteStyle};
pub use render_cpu::{SheetRgba, SheetSurface};
pub use sheet::{encode_png, render_sheet, synthesize, synthesize_ids};
pub use slice::{slice_sheet, slice_sprite_sheet};
