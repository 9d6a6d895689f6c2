use crate::mapper::Axis;

/// Margin (px) kept above a score of 1 and below a score of 0.
const CURVE_MARGIN: f64 = 10.0;
const BAR_ALPHA_FLOOR: f64 = 0.12;

pub const BACKGROUND: Rgba = Rgba::opaque(0x0f, 0x15, 0x21);
pub const CURVE: Rgba = Rgba::opaque(0x7e, 0xc8, 0xff);
pub const MARKER: Rgba = Rgba::opaque(0xff, 0xff, 0xff);

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(255,70,70,0.5)`.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Line style for [`Surface::stroke_path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    /// `(on, off)` dash lengths in pixels; `None` draws a solid line.
    pub dash: Option<(f64, f64)>,
}

/// A fixed-size 2D raster the timeline is painted onto.
pub trait Surface {
    /// `(width, height)` in pixels.
    fn size(&self) -> (f64, f64);
    /// Reset every pixel to transparent.
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);
    /// Stroke an open polyline through `points`.
    fn stroke_path(&mut self, points: &[(f64, f64)], stroke: &Stroke);
}

/// Bar colour for a score. Scores are expected in [0, 1] and are not
/// re-clamped here.
pub fn bar_color(score: f64) -> Rgba {
    Rgba::opaque(255, 70, 70).with_alpha(BAR_ALPHA_FLOOR + score * (1.0 - BAR_ALPHA_FLOOR))
}

/// Vertical position of the curve for `score` on a surface `height` tall.
pub fn curve_y(score: f64, height: f64) -> f64 {
    height - score * (height - 2.0 * CURVE_MARGIN) - CURVE_MARGIN
}

/// Repaint the whole timeline: background, one intensity bar per score, the
/// score polyline and, last, the dashed marker at `marker`.
///
/// An empty `scores` slice leaves the surface cleared.
pub fn render<S: Surface + ?Sized>(surface: &mut S, scores: &[f64], marker: Option<usize>) {
    surface.clear();

    let n = scores.len();
    if n == 0 {
        return;
    }

    let (w, h) = surface.size();
    let axis = Axis::new(n, w);
    surface.fill_rect(0.0, 0.0, w, h, BACKGROUND);

    let bar_w = w / n as f64 + 1.0;
    for (i, &v) in scores.iter().enumerate() {
        surface.fill_rect(axis.position_of(i), 0.0, bar_w, h, bar_color(v));
    }

    let points: Vec<(f64, f64)> = scores
        .iter()
        .enumerate()
        .map(|(i, &v)| (axis.position_of(i), curve_y(v, h)))
        .collect();
    surface.stroke_path(&points, &Stroke { color: CURVE, width: 3.0, dash: None });

    if let Some(m) = marker {
        let x = axis.position_of(m);
        surface.stroke_path(
            &[(x, 0.0), (x, h)],
            &Stroke { color: MARKER, width: 1.0, dash: Some((4.0, 4.0)) },
        );
    }
}

/// Pad or keep `scores` so that it holds exactly `len` values; missing
/// entries read as 0.
pub fn zero_fill(scores: &[f64], len: usize) -> Vec<f64> {
    (0..len).map(|i| scores.get(i).copied().unwrap_or(0.0)).collect()
}

/// Everything the timeline needs for one paint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartFrame {
    /// Primary series (smoothed scores), one per page.
    pub scores: Vec<f64>,
    /// Secondary series only shown by the hover inspector.
    pub raw: Option<Vec<f64>>,
    /// Zero-based index of the current page.
    pub marker: Option<usize>,
}

impl ChartFrame {
    /// All-zero timeline for a freshly selected document.
    pub fn empty(page_count: usize) -> Self {
        Self {
            scores: vec![0.0; page_count],
            raw: None,
            marker: (page_count > 0).then_some(0),
        }
    }

    pub fn samples(&self) -> usize {
        self.scores.len()
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render(surface, &self.scores, self.marker);
    }

    /// Same data with the marker moved; used for drag previews.
    pub fn with_marker(&self, marker: usize) -> Self {
        Self { marker: Some(marker), ..self.clone() }
    }

    /// Hover inspector text for pointer position `x` on a surface `width`
    /// pixels wide, e.g. `Page 3 • score 0.300 • raw 0.250`.
    pub fn inspect(&self, x: f64, width: f64) -> Option<String> {
        let n = self.samples();
        if n == 0 {
            return None;
        }
        let i = Axis::new(n, width).index_at(x);
        let score = self.scores.get(i).copied().unwrap_or(0.0);
        let mut text = format!("Page {} • score {:.3}", i + 1, score);
        if let Some(raw) = &self.raw {
            text.push_str(&format!(" • raw {:.3}", raw.get(i).copied().unwrap_or(0.0)));
        }
        Some(text)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Op {
        Clear,
        Fill { x: f64, y: f64, w: f64, h: f64, color: Rgba },
        Stroke { points: Vec<(f64, f64)>, stroke: Stroke },
    }

    /// Records draw calls so paints can be compared op-for-op.
    pub(crate) struct DrawList {
        pub width: f64,
        pub height: f64,
        pub ops: Vec<Op>,
    }

    impl DrawList {
        pub fn new(width: f64, height: f64) -> Self {
            Self { width, height, ops: Vec::new() }
        }
    }

    impl Surface for DrawList {
        fn size(&self) -> (f64, f64) {
            (self.width, self.height)
        }
        fn clear(&mut self) {
            self.ops.clear();
            self.ops.push(Op::Clear);
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
            self.ops.push(Op::Fill { x, y, w, h, color });
        }
        fn stroke_path(&mut self, points: &[(f64, f64)], stroke: &Stroke) {
            self.ops.push(Op::Stroke { points: points.to_vec(), stroke: *stroke });
        }
    }

    const SCORES: [f64; 5] = [0.1, 0.9, 0.3, 0.6, 0.05];

    #[test]
    fn paints_background_bars_curve_then_marker() {
        let mut s = DrawList::new(500.0, 120.0);
        render(&mut s, &SCORES, Some(2));

        // clear + background + 5 bars + curve + marker
        assert_eq!(s.ops.len(), 1 + 1 + 5 + 1 + 1);
        assert_eq!(s.ops[0], Op::Clear);
        assert_eq!(
            s.ops[1],
            Op::Fill { x: 0.0, y: 0.0, w: 500.0, h: 120.0, color: BACKGROUND }
        );

        let Op::Fill { x, w, color, .. } = &s.ops[3] else { panic!("expected bar") };
        assert_eq!(*x, 125.0);
        assert_eq!(*w, 101.0);
        assert!((color.a - (0.12 + 0.88 * 0.9)).abs() < 1e-12);

        let Op::Stroke { points, stroke } = &s.ops[7] else { panic!("expected curve") };
        assert_eq!(stroke.color, CURVE);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], (0.0, curve_y(0.1, 120.0)));
        assert_eq!(points[4].0, 500.0);

        let Op::Stroke { points, stroke } = s.ops.last().unwrap() else { panic!("expected marker") };
        assert_eq!(stroke.dash, Some((4.0, 4.0)));
        assert_eq!(points, &vec![(250.0, 0.0), (250.0, 120.0)]);
    }

    #[test]
    fn curve_margins_are_symmetric() {
        assert_eq!(curve_y(0.0, 120.0), 110.0);
        assert_eq!(curve_y(1.0, 120.0), 10.0);
    }

    #[test]
    fn out_of_range_scores_are_not_clamped() {
        let c = bar_color(1.5);
        assert!((c.a - (0.12 + 0.88 * 1.5)).abs() < 1e-12);
    }

    #[test]
    fn empty_scores_only_clear() {
        let mut s = DrawList::new(500.0, 120.0);
        render(&mut s, &[], Some(0));
        assert_eq!(s.ops, vec![Op::Clear]);
    }

    #[test]
    fn identical_inputs_paint_identically() {
        let frame = ChartFrame {
            scores: SCORES.to_vec(),
            raw: Some(vec![0.2, 0.8, 0.4, 0.5, 0.0]),
            marker: Some(3),
        };
        let mut a = DrawList::new(640.0, 100.0);
        let mut b = DrawList::new(640.0, 100.0);
        frame.render(&mut a);
        frame.render(&mut b);
        // repainting over an existing paint gives the same ops again
        frame.render(&mut b);
        assert_eq!(a.ops, b.ops);
    }

    #[test]
    fn inspector_text_with_and_without_raw() {
        let mut frame = ChartFrame { scores: SCORES.to_vec(), raw: None, marker: None };
        assert_eq!(frame.inspect(250.0, 500.0).as_deref(), Some("Page 3 • score 0.300"));

        frame.raw = Some(vec![0.2, 0.8]);
        assert_eq!(
            frame.inspect(125.0, 500.0).as_deref(),
            Some("Page 2 • score 0.900 • raw 0.800")
        );
        // raw shorter than scores reads as zero
        assert_eq!(
            frame.inspect(500.0, 500.0).as_deref(),
            Some("Page 5 • score 0.050 • raw 0.000")
        );
        assert_eq!(ChartFrame::default().inspect(10.0, 500.0), None);
    }

    #[test]
    fn zero_fill_pads_and_truncates() {
        assert_eq!(zero_fill(&[0.5, 0.25], 4), vec![0.5, 0.25, 0.0, 0.0]);
        assert_eq!(zero_fill(&[0.5, 0.25, 1.0], 2), vec![0.5, 0.25]);
        assert!(zero_fill(&[], 0).is_empty());
    }

    #[test]
    fn empty_frame_marks_first_page() {
        assert_eq!(ChartFrame::empty(3).marker, Some(0));
        assert_eq!(ChartFrame::empty(0).marker, None);
        assert_eq!(ChartFrame::empty(3).scores, vec![0.0; 3]);
    }
}
