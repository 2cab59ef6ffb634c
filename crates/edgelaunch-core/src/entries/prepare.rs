use edgelaunch_types::{Entry, EntryKind};

/// Fit each level of the hierarchy into `capacity` slots.
///
/// When a level has more entries than slots, everything from the last slot
/// onward moves into a virtual folder named `overflow_name`, which takes
/// the last slot. Folders are processed recursively, including the virtual
/// folder itself. A capacity below two leaves the level untouched.
#[must_use]
pub fn prepare_entries(mut entries: Vec<Entry>, capacity: usize, overflow_name: &str) -> Vec<Entry> {
    if capacity > 1 && entries.len() > capacity {
        let overflow = entries.split_off(capacity - 1);
        entries.push(Entry {
            id: 0,
            name: overflow_name.to_string(),
            icon: None,
            kind: EntryKind::VirtualFolder { entries: overflow },
        });
    }

    for entry in &mut entries {
        if let Some(children) = entry.children_mut() {
            let taken = std::mem::take(children);
            *children = prepare_entries(taken, capacity, overflow_name);
        }
    }

    entries
}
