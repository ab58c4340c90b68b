//! Pure, order-preserving filtering of the catalog.
//!
//! Criteria are explicit `Copy` values threaded through navigation states;
//! there is no ambient filter state anywhere in the core.

use heapless::Vec;
use log::warn;

use crate::catalog::{AGE_DOMAIN, AgeRange, Catalog, Category, Duration, EbookRecord};

/// Upper bound on filter output. The built-in catalog is well below this;
/// overflow is reported through [`FilterResult::truncated`].
pub const MAX_FILTER_RESULTS: usize = 32;

const ALL_DURATIONS_BIT: u8 = 1 << Duration::COUNT;

/// Selected categories as a fixed-width bitmask. Empty means "no category
/// filtering", never "match nothing".
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, category: Category) -> bool {
        self.0 & (1 << category.index()) != 0
    }

    pub fn toggle(&mut self, category: Category) {
        self.0 ^= 1 << category.index();
    }
}

/// Selected duration buckets plus the `All` sentinel, as a bitmask.
/// Empty or `All`-bearing selections disable duration filtering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DurationSet(u8);

impl DurationSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, duration: Duration) -> bool {
        self.0 & (1 << duration.index()) != 0
    }

    pub const fn contains_all_sentinel(self) -> bool {
        self.0 & ALL_DURATIONS_BIT != 0
    }

    pub fn toggle(&mut self, duration: Duration) {
        self.0 ^= 1 << duration.index();
    }

    pub fn toggle_all_sentinel(&mut self) {
        self.0 ^= ALL_DURATIONS_BIT;
    }
}

/// One user interaction's worth of filter settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FilterCriteria {
    pub age: AgeRange,
    pub categories: CategorySet,
    pub durations: DurationSet,
}

impl Default for FilterCriteria {
    /// Defaults span the full legal age domain and select nothing, so a
    /// default criteria value never excludes any record.
    fn default() -> Self {
        Self {
            age: AGE_DOMAIN,
            categories: CategorySet::empty(),
            durations: DurationSet::empty(),
        }
    }
}

/// Filter output: surviving catalog indices in catalog order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterResult {
    pub indices: Vec<u16, MAX_FILTER_RESULTS>,
    pub truncated: bool,
}

/// Side-effect-free membership test for a single record.
pub fn matches(record: &EbookRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.categories.is_empty() && !criteria.categories.contains(record.category) {
        return false;
    }

    // Inverted criteria intervals degrade to "matches nothing" here.
    if !record.age.overlaps(criteria.age) {
        return false;
    }

    if !criteria.durations.is_empty()
        && !criteria.durations.contains_all_sentinel()
        && !criteria.durations.contains(record.duration)
    {
        return false;
    }

    true
}

/// Stable subsequence selection over catalog order. Never re-sorts and
/// never errors; idempotent for any fixed criteria value.
pub fn filter_catalog(catalog: Catalog, criteria: &FilterCriteria) -> FilterResult {
    let mut result = FilterResult::default();

    for (index, record) in catalog.records().iter().enumerate() {
        if !matches(record, criteria) {
            continue;
        }
        if result.indices.push(index as u16).is_err() {
            warn!(
                "filter: result capacity {} exceeded, truncating",
                MAX_FILTER_RESULTS
            );
            result.truncated = true;
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn all_indices(catalog: Catalog) -> std::vec::Vec<u16> {
        (0..catalog.len()).collect()
    }

    #[test]
    fn default_criteria_filter_to_identity() {
        let catalog = builtin();
        let result = filter_catalog(catalog, &FilterCriteria::default());
        assert!(!result.truncated);
        assert_eq!(result.indices.as_slice(), all_indices(catalog).as_slice());
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = builtin();
        let mut criteria = FilterCriteria::default();
        criteria.categories.toggle(Category::EthicsReligion);
        criteria.age = AgeRange::new(7, 9);

        let once = filter_catalog(catalog, &criteria);
        // Re-applying the same membership test to the survivors keeps them all.
        let survivors: std::vec::Vec<u16> = once
            .indices
            .iter()
            .copied()
            .filter(|&i| matches(catalog.record_at(i).unwrap(), &criteria))
            .collect();
        assert_eq!(survivors.as_slice(), once.indices.as_slice());
    }

    #[test]
    fn category_selection_keeps_only_that_category() {
        let catalog = builtin();
        let mut criteria = FilterCriteria::default();
        criteria.categories.toggle(Category::Mathematics);

        let result = filter_catalog(catalog, &criteria);
        let manual_tally = catalog.category_count(Category::Mathematics);
        assert_eq!(result.indices.len() as u16, manual_tally);
        for index in result.indices.iter() {
            let record = catalog.record_at(*index).unwrap();
            assert_eq!(record.category, Category::Mathematics);
        }
    }

    #[test]
    fn survivors_preserve_relative_catalog_order() {
        let catalog = builtin();
        let mut criteria = FilterCriteria::default();
        criteria.categories.toggle(Category::ArtsMusic);
        criteria.categories.toggle(Category::ForeignLanguages);

        let result = filter_catalog(catalog, &criteria);
        assert!(result.indices.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn age_overlap_includes_and_excludes() {
        // Record range {6,10} vs criteria {8,12}: overlap.
        let record = EbookRecord {
            age: AgeRange::new(6, 10),
            ..*builtin().by_id(1).unwrap()
        };
        let mut criteria = FilterCriteria::default();
        criteria.age = AgeRange::new(8, 12);
        assert!(matches(&record, &criteria));

        // Criteria {11,14}: no overlap.
        criteria.age = AgeRange::new(11, 14);
        assert!(!matches(&record, &criteria));
    }

    #[test]
    fn inverted_criteria_range_matches_nothing() {
        let catalog = builtin();
        let mut criteria = FilterCriteria::default();
        criteria.age = AgeRange::new(12, 6);

        let result = filter_catalog(catalog, &criteria);
        assert!(result.indices.is_empty());
        assert!(!result.truncated);
    }

    #[test]
    fn duration_all_sentinel_disables_duration_filtering() {
        let catalog = builtin();
        let mut criteria = FilterCriteria::default();
        criteria.durations.toggle(Duration::Hours5);
        // Nothing in the catalog is a five-hour read.
        assert!(filter_catalog(catalog, &criteria).indices.is_empty());

        criteria.durations.toggle_all_sentinel();
        let result = filter_catalog(catalog, &criteria);
        assert_eq!(result.indices.len() as u16, catalog.len());
    }

    #[test]
    fn duration_tag_must_match_exactly() {
        let catalog = builtin();
        let mut criteria = FilterCriteria::default();
        criteria.durations.toggle(Duration::Mins15To25);

        let result = filter_catalog(catalog, &criteria);
        for index in result.indices.iter() {
            let record = catalog.record_at(*index).unwrap();
            assert_eq!(record.duration, Duration::Mins15To25);
        }
    }
}
