// Aggregation of hidden rows into per-column summary cells

use std::collections::BTreeMap;

use crate::models::placement::Placement;

/// Collapse the placements of hidden rows into one summary cell per
/// occupied column, carrying the ids of every event touching that column.
///
/// A hidden span contributes the inclusive column range
/// `column ..= column + day_span`, one column more than the days it
/// covers; downstream consumers rely on this range, so it is kept as-is.
/// Columns touched by no hidden event produce no cell.
pub fn squash(hidden: &[Placement]) -> Vec<Placement> {
    let mut ids_by_column: BTreeMap<usize, Vec<i64>> = BTreeMap::new();

    for placement in hidden {
        match placement {
            Placement::Single {
                column, event_id, ..
            } => {
                ids_by_column.entry(*column).or_default().push(*event_id);
            }
            Placement::Span {
                column,
                day_span,
                event_id,
                ..
            } => {
                for col in *column..=(*column + *day_span) {
                    ids_by_column.entry(col).or_default().push(*event_id);
                }
            }
            Placement::Overflow { .. } => {
                unreachable!("summary cells are produced only by squashing")
            }
        }
    }

    if !ids_by_column.is_empty() {
        log::debug!(
            "squashed {} hidden placements into {} summary columns",
            hidden.len(),
            ids_by_column.len()
        );
    }

    ids_by_column
        .into_iter()
        .map(|(column, event_ids)| Placement::Overflow { column, event_ids })
        .collect()
}
