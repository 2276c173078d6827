// Derivation engine: per-year stats, tendencies, achievements, badge grouping.
//
// Every function here is pure over shared references to the input documents.

pub mod achievement;
pub mod badge;
pub mod index;
pub mod report;
pub mod tendency;
pub mod year;

use std::collections::HashMap;
use std::hash::Hash;

/// Count keys in first-seen order.
///
/// Sorting the result with a stable sort keeps first-seen order among equal
/// counts, which is the tie-break every ranking in this module relies on.
pub(crate) fn count_in_order<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match slots.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slots.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
