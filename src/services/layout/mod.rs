// Week layout service
// Pure placement pass: segments in, grid placement plan out

pub mod boundary;
pub mod collision;
pub mod grouping;
pub mod overflow;
pub mod rows;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::day::Week;
use crate::models::placement::Placement;
use crate::models::segment::EventSegment;

/// Rows rendered in full before remaining events are squashed into the
/// summary slot.
pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 3;

/// Contract violations surfaced by a layout pass.
///
/// Both indicate a bug in the caller's clipping rather than a transient
/// condition: the pass is pure, so retrying with the same input fails
/// identically.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("continuation segment for event {event_id} does not link to a multi-day original")]
    InvalidSegmentLink { event_id: i64 },
    #[error("date {date} does not match any day of the supplied week")]
    DayNotFound { date: NaiveDate },
}

/// Layout pass configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Number of fully visible rows, at least 1.
    pub max_visible_rows: usize,
}

impl LayoutConfig {
    pub fn new(max_visible_rows: usize) -> Self {
        Self {
            max_visible_rows: max_visible_rows.max(1),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
        }
    }
}

/// Lay out one week's event segments into a grid placement plan.
///
/// Groups the segments per logical event, packs the groups into rows by
/// first fit, resolves each group's column, day-span and week-boundary
/// flags, then squashes every row at or beyond `max_visible_rows` into
/// per-column summary cells. Stateless and deterministic: identical input
/// yields an identical placement list.
pub fn layout_week(
    week: &Week,
    segments: &[EventSegment],
    config: LayoutConfig,
) -> Result<Vec<Placement>, LayoutError> {
    let groups = grouping::group_segments(segments)?;
    let packed = rows::pack_rows(&groups);

    let mut visible: Vec<Placement> = Vec::new();
    let mut hidden: Vec<Placement> = Vec::new();

    for (row, row_groups) in packed.iter().enumerate() {
        for group in row_groups {
            let placement = boundary::resolve(group, week, row as i32)?;
            if row < config.max_visible_rows {
                visible.push(placement);
            } else {
                hidden.push(placement);
            }
        }
    }

    log::debug!(
        "week of {}: {} visible placements, {} hidden",
        week.first_date(),
        visible.len(),
        hidden.len()
    );

    visible.extend(overflow::squash(&hidden));
    Ok(visible)
}
