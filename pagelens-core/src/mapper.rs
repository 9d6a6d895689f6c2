/// Horizontal position (pixels) of sample `index` on a surface `width` wide
/// holding `samples` evenly spread samples. The first sample sits at x = 0 and
/// the last at x = width.
pub fn index_to_position(index: usize, samples: usize, width: f64) -> f64 {
    let span = samples.saturating_sub(1).max(1) as f64;
    (index as f64 / span) * width
}

/// Nearest sample index under pixel `x`, clamped to `[0, samples - 1]`.
///
/// Positions left of the surface map to 0 and positions right of it map to
/// the last sample. A single-sample (or empty) axis always yields 0.
pub fn position_to_index(x: f64, samples: usize, width: f64) -> usize {
    if samples <= 1 || width.is_nan() || width <= 0.0 || x.is_nan() {
        return 0;
    }
    let last = (samples - 1) as f64;
    let idx = ((x / width) * last).round();
    idx.clamp(0.0, last) as usize
}

/// A sampled horizontal axis: `samples` points spread over `width` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub samples: usize,
    pub width: f64,
}

impl Axis {
    pub fn new(samples: usize, width: f64) -> Self {
        Self { samples, width }
    }

    pub fn position_of(&self, index: usize) -> f64 {
        index_to_position(index, self.samples, self.width)
    }

    pub fn index_at(&self, x: f64) -> usize {
        position_to_index(x, self.samples, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_at_sample_centers() {
        for &width in &[1.0, 37.5, 500.0, 1000.0, 4096.0] {
            for n in 1..=64usize {
                for i in 0..n {
                    let x = index_to_position(i, n, width);
                    assert_eq!(position_to_index(x, n, width), i, "n={n} width={width} i={i}");
                }
            }
        }
    }

    #[test]
    fn out_of_range_positions_clamp() {
        let n = 12;
        let width = 300.0;
        assert_eq!(position_to_index(-1.0, n, width), 0);
        assert_eq!(position_to_index(-10_000.0, n, width), 0);
        assert_eq!(position_to_index(300.1, n, width), n - 1);
        assert_eq!(position_to_index(1e9, n, width), n - 1);
        assert_eq!(position_to_index(f64::NAN, n, width), 0);
    }

    #[test]
    fn single_sample_never_divides_by_zero() {
        for &width in &[0.0, 1.0, 500.0] {
            assert_eq!(index_to_position(0, 1, width), 0.0);
            assert_eq!(position_to_index(width * 0.7, 1, width), 0);
        }
        assert_eq!(position_to_index(10.0, 0, 100.0), 0);
    }

    #[test]
    fn rounds_to_nearest_sample() {
        // 5 samples over 400px: centers at 0, 100, 200, 300, 400
        assert_eq!(position_to_index(49.0, 5, 400.0), 0);
        assert_eq!(position_to_index(51.0, 5, 400.0), 1);
        assert_eq!(position_to_index(260.0, 5, 400.0), 3);
    }

    #[test]
    fn axis_wraps_both_directions() {
        let axis = Axis::new(5, 500.0);
        assert_eq!(axis.position_of(2), 250.0);
        assert_eq!(axis.index_at(250.0), 2);
        assert_eq!(axis.index_at(-3.0), 0);
        assert_eq!(axis.index_at(800.0), 4);
    }
}
