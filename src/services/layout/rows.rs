// Greedy first-fit packing of event groups into grid rows

use super::collision::{collides, DateInterval};
use super::grouping::EventGroup;

/// The date range a group occupies for collision purposes.
///
/// A one-day event is its own date. A multi-day event whose true first day
/// falls in this week reserves its full original range (it may run past the
/// week's end); a span continuing from an earlier week reserves only the
/// day of its earliest slice present this week.
pub fn representative_interval(group: &EventGroup) -> DateInterval {
    match group {
        EventGroup::Single(event) => DateInterval::single(event.start),
        EventGroup::Span { original, slices } => {
            if slices.contains(&original.start) {
                DateInterval::new(original.start, original.end)
            } else {
                // Slices are sorted, so the first is the earliest.
                DateInterval::single(slices[0])
            }
        }
    }
}

/// Assign each group, in input order, to the first existing row where its
/// representative interval collides with no occupant; open a new row when
/// none fits.
///
/// Deterministic and order-sensitive: two groups starting on the same date
/// keep their input order, so callers wanting reproducible layouts must
/// pass a stably ordered segment list.
pub fn pack_rows(groups: &[EventGroup]) -> Vec<Vec<&EventGroup>> {
    let mut rows: Vec<Vec<&EventGroup>> = Vec::new();

    for group in groups {
        let interval = representative_interval(group);
        let free_row = rows.iter_mut().find(|row| {
            row.iter()
                .all(|occupant| !collides(&interval, &representative_interval(occupant)))
        });

        match free_row {
            Some(row) => row.push(group),
            None => rows.push(vec![group]),
        }
    }

    log::trace!("packed {} groups into {} rows", groups.len(), rows.len());

    rows
}
