mod entry;
mod impls;
mod priority;
mod tree;

use entry::Entry;
pub use priority::Priority;
use serde::Serialize;

pub const DEFAULT_CAPACITY: usize = 1;

/// A binary max-heap stored in a single buffer.
///
/// `entries[0..len]` is always heap ordered: every entry's priority is
/// greater than or equal to the priorities of the entries at `2i + 1` and
/// `2i + 2`. Entries with equal priorities come out in no particular order.
///
/// `capacity` is tracked separately from the buffer's own allocation so
/// growth follows [`capacity_policy::grown`] exactly.
#[derive(Debug, Serialize)]
pub struct PriorityHeap<T, P: Priority> {
    capacity: usize,
    entries: Vec<Entry<T, P>>,
}
