use kurbo::Shape as _;

use crate::{
    core::{Affine, BezPath, Circle, HEAD_RADIUS, Point, Rect, Rgba8, SheetLayout, Vec2},
    error::{PoseGuideError, PoseGuideResult},
    figure::{FigureFrame, Limb},
};

// Depth coding: one color always marks the limb nearer the camera, the other
// the farther one, so a downstream model can read occlusion order.
pub const NEAR_LIMB: Rgba8 = Rgba8::opaque(38, 38, 48);
pub const FAR_LIMB: Rgba8 = Rgba8::opaque(158, 158, 170);
pub const TORSO: Rgba8 = Rgba8::opaque(70, 70, 82);
pub const NOSE: Rgba8 = Rgba8::opaque(205, 72, 72);
pub const GROUND: Rgba8 = Rgba8::opaque(221, 221, 221);
pub const BACKGROUND: Rgba8 = Rgba8::opaque(255, 255, 255);

const LIMB_RADIUS: f64 = 13.0;
const TORSO_RADIUS: f64 = 17.0;
const NOSE_RADIUS: f64 = 4.0;
const JOINT_RADIUS: f64 = 14.0;
const GROUND_THICKNESS: f64 = 4.0;
const GROUND_MARGIN: f64 = 20.0;
const PATH_TOLERANCE: f64 = 0.1;

/// Rendered sheet pixels: RGBA8, premultiplied (everything drawn is opaque,
/// so the bytes equal straight alpha).
#[derive(Clone, Debug)]
pub struct SheetRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// One drawing surface per synthesis call: acquired at the start, consumed
/// by `finish`. No state survives between calls.
pub struct SheetSurface {
    layout: SheetLayout,
    pixmap: vello_cpu::Pixmap,
    ctx: vello_cpu::RenderContext,
}

impl SheetSurface {
    pub fn new(layout: SheetLayout) -> PoseGuideResult<Self> {
        let width: u16 = layout
            .width
            .try_into()
            .map_err(|_| PoseGuideError::surface("sheet width exceeds u16"))?;
        let height: u16 = layout
            .height
            .try_into()
            .map_err(|_| PoseGuideError::surface("sheet height exceeds u16"))?;

        let mut surface = Self {
            layout,
            pixmap: vello_cpu::Pixmap::new(width, height),
            ctx: vello_cpu::RenderContext::new(width, height),
        };

        // The background is drawn through the context, not poked into the
        // pixmap: render_to_pixmap rewrites every pixel, so a pre-cleared
        // pixmap would not survive an otherwise empty render pass.
        surface.ctx.set_transform(affine_to_cpu(Affine::IDENTITY));
        surface.set_paint(BACKGROUND);
        surface.ctx.fill_rect(&rect_to_cpu(Rect::new(
            0.0,
            0.0,
            f64::from(surface.layout.width),
            f64::from(surface.layout.height),
        )));

        Ok(surface)
    }

    /// Light guide segment at the floor line, spanning the column minus a
    /// margin, independent of the pose above it.
    pub fn draw_ground_line(&mut self, column: usize) {
        let col_w = self.layout.column_width();
        let x0 = column as f64 * col_w + GROUND_MARGIN;
        let x1 = (column as f64 + 1.0) * col_w - GROUND_MARGIN;
        let y = self.layout.floor_y();
        self.ctx.set_transform(affine_to_cpu(Affine::IDENTITY));
        self.set_paint(GROUND);
        self.ctx.fill_rect(&rect_to_cpu(Rect::new(
            x0,
            y - GROUND_THICKNESS / 2.0,
            x1,
            y + GROUND_THICKNESS / 2.0,
        )));
    }

    /// Draw one figure back-to-front: far leg, far arm, torso, head, nose,
    /// near leg, near arm. The figure's lean/bob transform applies to every
    /// primitive.
    pub fn draw_figure(&mut self, fig: &FigureFrame) {
        self.ctx.set_transform(affine_to_cpu(fig.figure_affine()));

        self.draw_limb(fig.hip, fig.far_leg, FAR_LIMB);
        self.draw_limb(fig.shoulder, fig.far_arm, FAR_LIMB);

        // Torso: spine capsule plus joint disks at hip and shoulder.
        self.draw_capsule(fig.hip, fig.shoulder, TORSO_RADIUS, TORSO);
        self.draw_disk(fig.hip, JOINT_RADIUS, TORSO);
        self.draw_disk(fig.shoulder, JOINT_RADIUS, TORSO);

        self.draw_disk(fig.head, HEAD_RADIUS, TORSO);
        if let Some(nose_tip) = fig.nose_tip {
            self.draw_capsule(fig.head, nose_tip, NOSE_RADIUS, NOSE);
        }

        self.draw_limb(fig.hip, fig.near_leg, NEAR_LIMB);
        self.draw_limb(fig.shoulder, fig.near_arm, NEAR_LIMB);
    }

    /// Flush all draw calls and hand back the pixels.
    pub fn finish(mut self) -> SheetRgba {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        SheetRgba {
            width: self.layout.width,
            height: self.layout.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
        }
    }

    fn draw_limb(&mut self, root: Point, limb: Limb, color: Rgba8) {
        self.draw_capsule(root, limb.mid, LIMB_RADIUS, color);
        self.draw_capsule(limb.mid, limb.end, LIMB_RADIUS, color);
        self.draw_disk(limb.mid, JOINT_RADIUS * 0.7, color);
        self.draw_disk(limb.end, JOINT_RADIUS * 0.7, color);
    }

    // A capsule is the union of the two end disks and the connecting quad,
    // filled as three separate paths with one paint so winding never
    // cancels.
    fn draw_capsule(&mut self, p0: Point, p1: Point, radius: f64, color: Rgba8) {
        self.set_paint(color);
        self.ctx.fill_path(&bezpath_to_cpu(
            &Circle::new(p0, radius).to_path(PATH_TOLERANCE),
        ));
        self.ctx.fill_path(&bezpath_to_cpu(
            &Circle::new(p1, radius).to_path(PATH_TOLERANCE),
        ));

        let d = p1 - p0;
        let len = d.hypot();
        if len > 1e-9 {
            let n = Vec2::new(-d.y, d.x) * (radius / len);
            let mut quad = BezPath::new();
            quad.move_to(p0 + n);
            quad.line_to(p1 + n);
            quad.line_to(p1 - n);
            quad.line_to(p0 - n);
            quad.close_path();
            self.ctx.fill_path(&bezpath_to_cpu(&quad));
        }
    }

    fn draw_disk(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.set_paint(color);
        self.ctx.fill_path(&bezpath_to_cpu(
            &Circle::new(center, radius).to_path(PATH_TOLERANCE),
        ));
    }

    fn set_paint(&mut self, color: Rgba8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
