// src/domain/store/services/tags.rs
//! Tag frequency summary, computed as expand -> group -> sort.
//!
//! Equal counts are ordered by tag ascending (byte order) so results are
//! deterministic.
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

impl TagCount {
    pub fn new(tag: impl Into<String>, count: u64) -> Self {
        Self {
            tag: tag.into(),
            count,
        }
    }
}

/// One row per (store, tag) pair. Repeated tags on a store yield repeated rows.
pub fn expand<'a, I>(tag_lists: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a [String]>,
{
    tag_lists
        .into_iter()
        .flat_map(|tags| tags.iter().map(String::as_str))
}

/// Counts rows per distinct tag. Output order is unspecified.
pub fn group<'a>(rows: impl IntoIterator<Item = &'a str>) -> Vec<TagCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for tag in rows {
        *counts.entry(tag).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(tag, count)| TagCount::new(tag, count))
        .collect()
}

pub fn frequency_order(a: &TagCount, b: &TagCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag))
}

pub fn sort_by_frequency(mut counts: Vec<TagCount>) -> Vec<TagCount> {
    counts.sort_by(frequency_order);
    counts
}

pub fn count_tags<'a, I>(tag_lists: I) -> Vec<TagCount>
where
    I: IntoIterator<Item = &'a [String]>,
{
    sort_by_frequency(group(expand(tag_lists)))
}
