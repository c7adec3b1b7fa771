// Column, span and week-boundary resolution per event group

use super::grouping::EventGroup;
use super::LayoutError;
use crate::models::day::Week;
use crate::models::placement::Placement;

/// Turn a packed group into its grid placement for the given row.
///
/// For a span, the starting slice is the event's true first day when that
/// day falls in this week, otherwise the earliest slice present; the
/// boundary flags record whether the event's real first and last days fall
/// inside the week, so the consuming layer can round or clip the cell's
/// edges accordingly.
///
/// Fails with [`LayoutError::DayNotFound`] when the starting slice's date
/// is not one of the week's seven days, which means the caller passed a
/// segment clipped to some other week.
pub fn resolve(group: &EventGroup, week: &Week, row: i32) -> Result<Placement, LayoutError> {
    match group {
        EventGroup::Single(event) => {
            let column = week
                .index_of(event.start)
                .ok_or(LayoutError::DayNotFound { date: event.start })?;

            Ok(Placement::Single {
                row,
                column,
                active: event.active,
                event_id: event.id,
            })
        }
        EventGroup::Span { original, slices } => {
            let starts_this_week = slices.contains(&original.start);
            let start_date = if starts_this_week {
                original.start
            } else {
                // Slices are sorted ascending.
                slices[0]
            };
            let column = week
                .index_of(start_date)
                .ok_or(LayoutError::DayNotFound { date: start_date })?;
            let last_slice = *slices.last().unwrap_or(&start_date);

            Ok(Placement::Span {
                row,
                column,
                day_span: slices.len(),
                active: original.active,
                left_boundary_start: starts_this_week,
                right_boundary_end: last_slice == original.end,
                event_id: original.id,
            })
        }
    }
}
