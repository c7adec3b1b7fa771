// Placement module
// Abstract grid cells produced by one layout pass

use serde::{Deserialize, Serialize};

/// Sentinel row index carried by overflow summaries; the consuming layer
/// maps it to its fixed summary slot below the visible rows.
pub const OVERFLOW_ROW: i32 = -1;

/// One cell of the week grid placement plan.
///
/// Rows and columns are abstract indices; the consuming layer maps them
/// onto a concrete 7-column grid. Ordering among placements is not
/// significant, each carries its own coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// A one-day event cell. Day-span is always 1 and both boundary flags
    /// are true.
    Single {
        row: i32,
        column: usize,
        active: bool,
        event_id: i64,
    },
    /// A multi-day event's slice of the current week, spanning `day_span`
    /// columns starting at `column`.
    Span {
        row: i32,
        column: usize,
        day_span: usize,
        active: bool,
        /// True when the event's real first day falls in this week.
        left_boundary_start: bool,
        /// True when the event's real last day falls in this week.
        right_boundary_end: bool,
        event_id: i64,
    },
    /// Summary cell aggregating every overflowed event touching `column`.
    Overflow { column: usize, event_ids: Vec<i64> },
}

impl Placement {
    pub fn row(&self) -> i32 {
        match self {
            Placement::Single { row, .. } => *row,
            Placement::Span { row, .. } => *row,
            Placement::Overflow { .. } => OVERFLOW_ROW,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            Placement::Single { column, .. } => *column,
            Placement::Span { column, .. } => *column,
            Placement::Overflow { column, .. } => *column,
        }
    }

    pub fn day_span(&self) -> usize {
        match self {
            Placement::Span { day_span, .. } => *day_span,
            Placement::Single { .. } | Placement::Overflow { .. } => 1,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Placement::Overflow { .. })
    }

    /// Ids of the original events this cell stands for.
    pub fn event_ids(&self) -> Vec<i64> {
        match self {
            Placement::Single { event_id, .. } => vec![*event_id],
            Placement::Span { event_id, .. } => vec![*event_id],
            Placement::Overflow { event_ids, .. } => event_ids.clone(),
        }
    }
}
