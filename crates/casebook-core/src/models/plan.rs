use crate::ordered_map::OrderedMap;

/// Itemized counseling plan: item number as written (`"1"`, `"2"`, ...) to
/// the item text, in the order the items first appeared.
pub type PlanRecord = OrderedMap<String>;
