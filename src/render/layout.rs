// Chart data: curves, axis scales, mr markers and label placement.
use crate::analyzer::BatchSummary;
use crate::analyzer::ticks::AxisScale;
use crate::config::AppConfig;
use crate::model::{RegionMax, RegionStats, RenderError, ValueRange};

/// Ten-colour categorical palette.
pub const TAB10: [(u8, u8, u8); 10] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

/// Offset of the `mr=` label below the top edge, as a fraction of the range.
const MR_LABEL_DEPTH: f64 = 0.05;
/// Offset of the index labels below the top edge.
const INDEX_LABEL_DEPTH: f64 = 0.15;
/// Sideways shift applied to max-value labels that would sit on top of each other.
const LABEL_NUDGE_X: f64 = 0.3;

/// Palette slot for each input position: `2^i mod 10` for the first
/// `min(count, palette_size)` numbers, then the same cycle again.
pub fn palette_slots(count: usize, palette_size: usize) -> Vec<usize> {
    let distinct = count.min(palette_size).max(1);
    let mut cycle = Vec::with_capacity(distinct);
    let mut slot = 1usize;
    for _ in 0..distinct {
        cycle.push(slot);
        slot = slot * 2 % 10;
    }
    (0..count).map(|i| cycle[i % distinct]).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub number: u64,
    pub palette_slot: usize,
    pub points: Vec<(f64, f64)>,
}

/// Per-number mr annotations that are always drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MrMarkers {
    pub first: usize,
    pub second: usize,
    pub before: RegionMax,
    pub between: RegionMax,
}

impl From<RegionStats> for MrMarkers {
    fn from(stats: RegionStats) -> Self {
        Self {
            first: stats.first_reversed,
            second: stats.second_reversed,
            before: stats.before_first,
            between: stats.between,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Text sits above its coordinate.
    Above,
    /// Text hangs below its coordinate.
    Below,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    Plain,
    BeforeFirst,
    Between,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: Anchor,
    pub tone: LabelTone,
}

/// Text labels for the single highlighted number.
#[derive(Debug, Clone, PartialEq)]
pub struct MrLabels {
    pub mr: Label,
    /// Empty when both reversed positions coincide.
    pub indices: Vec<Label>,
    pub before: Label,
    pub between: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub highest_mr: u64,
    pub collatz_curves: Vec<Curve>,
    pub m_curves: Vec<Curve>,
    pub markers: Vec<MrMarkers>,
    pub collatz_axis: AxisScale,
    pub m_axis: AxisScale,
    pub labels: Option<MrLabels>,
}

impl ChartLayout {
    pub fn build(summary: &BatchSummary, config: &AppConfig) -> Result<Self, RenderError> {
        let collatz_range = summary.collatz_range.ok_or(RenderError::NothingToDraw)?;
        // No m values anywhere still leaves the left panel worth drawing.
        let m_range = summary.m_range.unwrap_or(ValueRange { min: 0, max: 0 });
        let collatz_axis = AxisScale::new(collatz_range, 0.0);
        let m_axis = AxisScale::new(m_range, 1.0);

        let input_count = summary.analyzed.len() + summary.skipped.len();
        let slots = palette_slots(input_count, config.palette_size);

        let mut collatz_curves = Vec::new();
        let mut m_curves = Vec::new();
        let mut markers = Vec::new();
        for entry in &summary.analyzed {
            let palette_slot = slots[entry.input_index];
            let number = entry.result.number;

            collatz_curves.push(Curve {
                number,
                palette_slot,
                points: (1..)
                    .zip(entry.result.reversed_collatz())
                    .map(|(x, y)| (x as f64, y as f64))
                    .collect(),
            });

            // An empty m-sequence means the transform was unavailable.
            if entry.result.m_sequence.is_empty() {
                continue;
            }
            m_curves.push(Curve {
                number,
                palette_slot,
                points: entry
                    .result
                    .reversed_m_sequence()
                    .into_iter()
                    .enumerate()
                    .map(|(x, y)| (x as f64, y as f64))
                    .collect(),
            });

            if let Some(stats) = entry.regions {
                markers.push(MrMarkers::from(stats));
            }
        }

        let labels = summary.best().map(|(entry, stats)| {
            let pair_value = entry.result.mr_pair.map(|p| p.value).unwrap_or_default();
            place_labels(pair_value, &MrMarkers::from(*stats), &m_axis, config)
        });

        Ok(Self {
            title: format!("Collatz Sequence Analysis: mr-class {}", summary.highest_mr),
            highest_mr: summary.highest_mr,
            collatz_curves,
            m_curves,
            markers,
            collatz_axis,
            m_axis,
            labels,
        })
    }
}

/// Places the labels of one number inside the m panel.
///
/// Max-value labels go `label_offset_fraction` of the range above their point
/// and flip below it when they would reach into the top clearance band. Two
/// labels on the same index and closer than one offset in value are pushed
/// apart sideways.
pub fn place_labels(mr_value: u64, markers: &MrMarkers, axis: &AxisScale, config: &AppConfig) -> MrLabels {
    let range = axis.visible_span();
    let top = axis.upper;

    let mr = Label {
        text: format!("mr={}", mr_value),
        x: (markers.first + markers.second) as f64 / 2.0,
        y: top - range * MR_LABEL_DEPTH,
        anchor: Anchor::Center,
        tone: LabelTone::Plain,
    };

    let indices = if markers.first != markers.second {
        let y = top - range * INDEX_LABEL_DEPTH;
        [markers.first, markers.second]
            .iter()
            .map(|&pos| Label {
                text: pos.to_string(),
                x: pos as f64,
                y,
                anchor: Anchor::Center,
                tone: LabelTone::Plain,
            })
            .collect()
    } else {
        Vec::new()
    };

    let offset = range * config.label_offset_fraction;
    let ceiling = top - range * config.top_clearance_fraction;
    let value_label = |max: RegionMax, tone: LabelTone| {
        let above = max.value as f64 + offset;
        let (y, anchor) = if above > ceiling {
            (max.value as f64 - offset, Anchor::Below)
        } else {
            (above, Anchor::Above)
        };
        Label {
            text: max.value.to_string(),
            x: max.position as f64,
            y,
            anchor,
            tone,
        }
    };
    let mut before = value_label(markers.before, LabelTone::BeforeFirst);
    let mut between = value_label(markers.between, LabelTone::Between);

    let same_column = markers.before.position.abs_diff(markers.between.position) < 1;
    let close_values = (markers.before.value as f64 - markers.between.value as f64).abs() < offset;
    if same_column && close_values {
        let shift = if markers.before.position < markers.between.position {
            -LABEL_NUDGE_X
        } else {
            LABEL_NUDGE_X
        };
        before.x += shift;
        between.x -= shift;
    }

    MrLabels {
        mr,
        indices,
        before,
        between,
    }
}
