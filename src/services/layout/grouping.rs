// Grouping of week segments into per-event visual items

use std::collections::HashMap;

use chrono::NaiveDate;

use super::LayoutError;
use crate::models::event::OriginalEvent;
use crate::models::segment::EventSegment;

/// One logical event's presence in the current week, the unit the row
/// packer places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventGroup {
    /// A one-day event.
    Single(OriginalEvent),
    /// All same-origin slices of a multi-day event present this week,
    /// ordered by date.
    Span {
        original: OriginalEvent,
        slices: Vec<NaiveDate>,
    },
}

impl EventGroup {
    pub fn original(&self) -> &OriginalEvent {
        match self {
            EventGroup::Single(event) => event,
            EventGroup::Span { original, .. } => original,
        }
    }

    pub fn event_id(&self) -> i64 {
        self.original().id
    }
}

/// Distinguishes one-day groups from multi-day groups sharing an event id,
/// so the two can never be merged by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GroupKey {
    Single(i64),
    Span(i64),
}

/// Collapse the week's segments into one group per distinct logical event,
/// preserving the first-seen order of groups.
///
/// Fails with [`LayoutError::InvalidSegmentLink`] when a continuation
/// segment links to an original that is not itself a multi-day event,
/// which signals a bug in the caller's clipping.
pub fn group_segments(segments: &[EventSegment]) -> Result<Vec<EventGroup>, LayoutError> {
    let mut groups: Vec<EventGroup> = Vec::new();
    let mut index_by_key: HashMap<GroupKey, usize> = HashMap::new();

    for segment in segments {
        match segment {
            EventSegment::Single(event) => {
                let key = GroupKey::Single(event.id);
                if !index_by_key.contains_key(&key) {
                    index_by_key.insert(key, groups.len());
                    groups.push(EventGroup::Single(event.clone()));
                }
            }
            EventSegment::Original(event) => {
                push_slice(&mut groups, &mut index_by_key, event, event.start);
            }
            EventSegment::Continuation { date, original } => {
                if original.is_single_day() {
                    return Err(LayoutError::InvalidSegmentLink {
                        event_id: original.id,
                    });
                }
                push_slice(&mut groups, &mut index_by_key, original, *date);
            }
        }
    }

    for group in &mut groups {
        if let EventGroup::Span { slices, .. } = group {
            slices.sort_unstable();
        }
    }

    log::trace!(
        "grouped {} segments into {} events",
        segments.len(),
        groups.len()
    );

    Ok(groups)
}

fn push_slice(
    groups: &mut Vec<EventGroup>,
    index_by_key: &mut HashMap<GroupKey, usize>,
    original: &OriginalEvent,
    date: NaiveDate,
) {
    let key = GroupKey::Span(original.id);
    match index_by_key.get(&key) {
        Some(&index) => {
            if let EventGroup::Span { slices, .. } = &mut groups[index] {
                slices.push(date);
            }
        }
        None => {
            index_by_key.insert(key, groups.len());
            groups.push(EventGroup::Span {
                original: original.clone(),
                slices: vec![date],
            });
        }
    }
}
