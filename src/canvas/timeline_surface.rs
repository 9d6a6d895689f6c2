use js_sys::Array;
use pagelens_core::chart::{Rgba, Stroke, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn get_canvas_ctx(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()?
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// [`Surface`] over a canvas' 2D context, sized by the canvas' own pixel
/// dimensions (not its CSS box).
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = get_canvas_ctx(canvas)?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], stroke: &Stroke) {
        let Some((&(x0, y0), rest)) = points.split_first() else { return };
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.set_stroke_style_str(&stroke.color.css());
        ctx.set_line_width(stroke.width);
        if let Some((on, off)) = stroke.dash {
            let _ = ctx.set_line_dash(&Array::of2(&JsValue::from_f64(on), &JsValue::from_f64(off)));
        }
        ctx.move_to(x0, y0);
        for &(x, y) in rest {
            ctx.line_to(x, y);
        }
        ctx.stroke();
        if stroke.dash.is_some() {
            let _ = ctx.set_line_dash(&Array::new());
        }
    }
}
