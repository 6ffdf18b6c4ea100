//! Scales, cumulative offsets, and bar rectangle computation.
//!
//! The x domain is the cumulative width of all bars; each bar's left edge
//! is the prefix sum of the widths before it. The y domain spans the
//! height extent and bars grow up from (or hang down to) the zero
//! baseline, which may sit outside the plot when all heights share a sign.

use super::config::ChartConfig;
use super::dataset::Dataset;

pub const X_TICK_SEGMENTS: usize = 6;
pub const Y_TICK_SEGMENTS: usize = 5;

/// Pixel offset of a bar-number label above a non-negative bar.
const LABEL_RISE: f64 = 5.0;
/// Pixel offset of a bar-number label below a negative bar.
const LABEL_DROP: f64 = 15.0;

/// A linear mapping from a value domain to a pixel range. Values outside
/// the domain extrapolate; a zero-span domain is treated as span 1 so the
/// mapping never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    factor: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let span = domain.1 - domain.0;
        let span = if span.abs() < f64::EPSILON { 1.0 } else { span };
        Self {
            domain,
            range,
            factor: (range.1 - range.0) / span,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        self.range.0 + (value - self.domain.0) * self.factor
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Cumulative offsets from bar widths: a prefix sum starting at zero,
/// one element longer than the input. The last element equals the sum of
/// all widths.
pub fn bar_coordinates(widths: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut coordinates = vec![0.0];
    for (i, width) in widths.enumerate() {
        let next = coordinates[i] + width;
        coordinates.push(next);
    }
    coordinates
}

/// One bar in pixel space, plus the anchor for its row-number label.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// 1-based row number; drawn above or below the bar and mirrored in
    /// the data table.
    pub number: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    /// yScale(0): where bars meet the x axis.
    pub baseline_y: f64,
    pub bars: Vec<Bar>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl ChartGeometry {
    pub fn compute(dataset: &Dataset, config: &ChartConfig) -> Self {
        let coordinates = bar_coordinates(dataset.records.iter().map(|r| r.width));
        let total = coordinates.last().copied().unwrap_or(0.0);

        let x_scale = LinearScale::new((0.0, total), (config.plot_left(), config.plot_right()));
        let y_scale = LinearScale::new(
            y_domain(dataset),
            (config.plot_bottom(), config.plot_top()),
        );
        let baseline_y = y_scale.map(0.0);

        let bars = dataset
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let x = x_scale.map(coordinates[i]);
                let width = x_scale.map(coordinates[i] + record.width) - x;
                let top = y_scale.map(record.height);
                let (y, height) = if record.height < 0.0 {
                    (baseline_y, top - baseline_y)
                } else {
                    (top, baseline_y - top)
                };
                let label_x = x_scale.map((coordinates[i] + coordinates[i + 1]) / 2.0);
                let label_y = if record.height < 0.0 {
                    top + LABEL_DROP
                } else {
                    top - LABEL_RISE
                };
                Bar {
                    number: i + 1,
                    x,
                    y,
                    width,
                    height,
                    label_x,
                    label_y,
                }
            })
            .collect();

        let x_ticks = ticks(&x_scale, X_TICK_SEGMENTS);
        let y_ticks = ticks(&y_scale, Y_TICK_SEGMENTS);

        Self {
            x_scale,
            y_scale,
            baseline_y,
            bars,
            x_ticks,
            y_ticks,
        }
    }
}

/// Height extent, widened so the scale never sees a zero span: an
/// all-equal column pulls in the zero baseline, and an all-zero column
/// falls back to [0, 1].
fn y_domain(dataset: &Dataset) -> (f64, f64) {
    let (mut min, mut max) = dataset.height_extent();
    if (max - min).abs() < f64::EPSILON {
        min = min.min(0.0);
        max = max.max(0.0);
        if (max - min).abs() < f64::EPSILON {
            max = 1.0;
        }
    }
    (min, max)
}

fn ticks(scale: &LinearScale, segments: usize) -> Vec<Tick> {
    let (d0, d1) = scale.domain();
    (0..=segments)
        .map(|i| {
            let value = d0 + (d1 - d0) * (i as f64 / segments as f64);
            Tick {
                value,
                position: scale.map(value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::Dataset;

    fn dataset(csv: &str) -> Dataset {
        Dataset::from_csv(csv).unwrap()
    }

    #[test]
    fn prefix_sum_ends_at_total_width() {
        let coordinates = bar_coordinates([3.0, 4.0, 5.0].into_iter());
        assert_eq!(coordinates, vec![0.0, 3.0, 7.0, 12.0]);

        let data = dataset("l,w,h,c\na,10,1,x\nb,20,2,x\nc,5,3,y\n");
        let coordinates = bar_coordinates(data.records.iter().map(|r| r.width));
        assert_eq!(coordinates.last().copied().unwrap(), data.total_width());
    }

    #[test]
    fn scale_maps_domain_endpoints_to_range_endpoints() {
        let scale = LinearScale::new((0.0, 10.0), (30.0, 620.0));
        assert_eq!(scale.map(0.0), 30.0);
        assert_eq!(scale.map(10.0), 620.0);
        assert_eq!(scale.map(5.0), 325.0);
    }

    #[test]
    fn scale_extrapolates_outside_domain() {
        let scale = LinearScale::new((2.0, 10.0), (370.0, 20.0));
        // The zero baseline lies below the bottom of the range.
        assert!(scale.map(0.0) > 370.0);
    }

    #[test]
    fn zero_span_domain_never_divides_by_zero() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert!(scale.map(5.0).is_finite());
        assert!(scale.map(0.0).is_finite());
    }

    #[test]
    fn bar_pixel_widths_fill_the_plot() {
        let config = ChartConfig::default();
        let geometry =
            ChartGeometry::compute(&dataset("l,w,h,c\na,10,1,x\nb,30,2,x\nc,10,3,y\n"), &config);
        let total: f64 = geometry.bars.iter().map(|b| b.width).sum();
        let plot_width = config.plot_right() - config.plot_left();
        assert!((total - plot_width).abs() < 1e-9);
        // Bars tile the plot left to right without gaps.
        assert_eq!(geometry.bars[0].x, config.plot_left());
        assert!((geometry.bars[1].x - (geometry.bars[0].x + geometry.bars[0].width)).abs() < 1e-9);
    }

    #[test]
    fn negative_heights_hang_from_the_baseline() {
        let config = ChartConfig::default();
        let geometry =
            ChartGeometry::compute(&dataset("l,w,h,c\na,1,-5,x\nb,1,10,x\n"), &config);
        let negative = &geometry.bars[0];
        let positive = &geometry.bars[1];

        assert_eq!(negative.y, geometry.baseline_y);
        assert!(negative.height > 0.0);
        assert!(negative.label_y > geometry.baseline_y);

        assert!(positive.y < geometry.baseline_y);
        assert!((positive.y + positive.height - geometry.baseline_y).abs() < 1e-9);
        assert!(positive.label_y < positive.y);
    }

    #[test]
    fn equal_heights_produce_finite_geometry() {
        let config = ChartConfig::default();
        let geometry = ChartGeometry::compute(&dataset("l,w,h,c\na,1,7,x\nb,2,7,x\n"), &config);
        for bar in &geometry.bars {
            assert!(bar.y.is_finite());
            assert!(bar.height.is_finite());
            assert!(bar.height >= 0.0);
        }
    }

    #[test]
    fn all_zero_heights_fall_back_to_unit_domain() {
        let config = ChartConfig::default();
        let geometry = ChartGeometry::compute(&dataset("l,w,h,c\na,1,0,x\n"), &config);
        assert_eq!(geometry.y_scale.domain(), (0.0, 1.0));
        assert_eq!(geometry.baseline_y, config.plot_bottom());
    }

    #[test]
    fn tick_counts_match_segment_constants() {
        let config = ChartConfig::default();
        let geometry = ChartGeometry::compute(&dataset("l,w,h,c\na,1,1,x\nb,1,2,x\n"), &config);
        assert_eq!(geometry.x_ticks.len(), X_TICK_SEGMENTS + 1);
        assert_eq!(geometry.y_ticks.len(), Y_TICK_SEGMENTS + 1);
        assert_eq!(geometry.x_ticks[0].position, config.plot_left());
    }
}
