use std::collections::BTreeSet;

/// Canonicalize a single skill label
///
/// Leading/trailing whitespace is stripped and the label is lower-cased.
/// Labels that are empty after trimming carry no information and are
/// discarded.
#[inline]
pub fn normalize_skill(label: &str) -> Option<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Canonicalize a sequence of skill labels into a comparable set
///
/// Duplicates collapse under case-insensitive identity. The ordered set
/// keeps intersection cheap and makes serialized skill lists
/// deterministic.
pub fn normalize_skills<I, S>(labels: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .filter_map(|label| normalize_skill(label.as_ref()))
        .collect()
}
