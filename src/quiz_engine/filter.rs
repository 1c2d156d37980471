use crate::quiz_engine::models::{Dataset, Entry};

/// Entries whose type matches one of `types` exactly, in dataset order.
///
/// Falls back to the whole dataset when nothing matches, so a round always
/// has candidates as long as the dataset itself is non-empty.
pub fn filtered_view<'a, S: AsRef<str>>(dataset: &'a Dataset, types: &[S]) -> Vec<&'a Entry> {
    let matching: Vec<&Entry> = dataset
        .entries()
        .iter()
        .filter(|e| types.iter().any(|t| t.as_ref() == e.entry_type))
        .collect();

    if matching.is_empty() {
        tracing::debug!("no entries match the selected types, using the full dataset");
        dataset.entries().iter().collect()
    } else {
        matching
    }
}

/// Distinct entry types in first-seen order.
pub fn available_types(dataset: &Dataset) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for entry in dataset.entries() {
        if !types.contains(&entry.entry_type.as_str()) {
            types.push(&entry.entry_type);
        }
    }
    types
}
