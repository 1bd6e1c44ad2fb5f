//! Metric Extractor

use crate::event::Event;

/// Collect every numeric reading recorded under `key`, in event order.
///
/// Events without the key, or with a non-numeric value under it, are skipped.
pub fn extract_numeric<'a, I>(events: I, key: &str) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter_map(|event| event.number(key))
        .collect()
}
