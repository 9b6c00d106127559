use crate::model::ValueRange;

/// Number of ticks used once a range is too wide for fixed steps.
const SPREAD_TICKS: u64 = 10;

/// Padding around the data as a fraction of the span.
const LIMIT_MARGIN_FRACTION: f64 = 0.02;

/// Picks y-axis ticks for a value range.
///
/// Spans up to 20 get unit steps, up to 50 steps of 5, up to 100 steps of 10
/// (the last tick may sit one step past `max`). Anything wider gets ten evenly
/// spread ticks from `min` to `max`, floored, deduplicated and ascending.
pub fn axis_ticks(range: ValueRange) -> Vec<u64> {
    let span = range.span();
    if span <= 20 {
        return (range.min..=range.max).collect();
    }
    if span <= 100 {
        let step = if span <= 50 { 5 } else { 10 };
        return (range.min..range.max + step).step_by(step as usize).collect();
    }

    let mut ticks: Vec<u64> = (0..SPREAD_TICKS)
        .map(|i| {
            let offset = (span as u128 * i as u128) / (SPREAD_TICKS - 1) as u128;
            range.min + offset as u64
        })
        .collect();
    ticks.sort_unstable();
    ticks.dedup();
    ticks
}

/// Ticks plus padded drawing limits for one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub range: ValueRange,
    pub ticks: Vec<u64>,
    pub lower: f64,
    pub upper: f64,
}

impl AxisScale {
    /// `min_margin` floors the padding so narrow ranges still get room.
    pub fn new(range: ValueRange, min_margin: f64) -> Self {
        let margin = (range.span() as f64 * LIMIT_MARGIN_FRACTION).max(min_margin);
        Self {
            range,
            ticks: axis_ticks(range),
            lower: range.min as f64 - margin,
            upper: range.max as f64 + margin,
        }
    }

    pub fn visible_span(&self) -> f64 {
        self.upper - self.lower
    }
}
