//! The catalog of known bus stops.
//!
//! A [`Gazetteer`] is built once from a raw list of names and is
//! read-only afterwards. Pass it to whatever needs stop names instead of
//! reaching for a global; tests build their own from a fixture list.

mod catalog;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::StopName;

/// Deduplicated, read-only set of stop names.
///
/// Keeps two views of the same names: sorted by code point for listings,
/// and in first-seen order for contexts like autocomplete that do not
/// need sorting. Cloning shares the underlying data.
///
/// # Examples
///
/// ```
/// use evidebus::gazetteer::Gazetteer;
///
/// let gazetteer = Gazetteer::new(["THRISSUR", "ALUVA", "THRISSUR", ""]);
/// let sorted: Vec<_> = gazetteer.stops().iter().map(|s| s.as_str()).collect();
/// assert_eq!(sorted, vec!["ALUVA", "THRISSUR"]);
///
/// let unsorted: Vec<_> = gazetteer.unsorted().iter().map(|s| s.as_str()).collect();
/// assert_eq!(unsorted, vec!["THRISSUR", "ALUVA"]);
///
/// assert!(gazetteer.contains("ALUVA"));
/// assert!(!gazetteer.contains("aluva"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    sorted: Arc<[StopName]>,
    unsorted: Arc<[StopName]>,
    members: Arc<HashSet<StopName>>,
}

impl Gazetteer {
    /// Build a gazetteer from raw names.
    ///
    /// Duplicates are removed by exact, case-sensitive comparison; the
    /// first occurrence wins. Empty and whitespace-only names are dropped.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members = HashSet::new();
        let mut unsorted = Vec::new();
        let mut skipped = 0usize;

        for name in raw {
            let Ok(stop) = StopName::parse(name.as_ref()) else {
                skipped += 1;
                continue;
            };
            if members.insert(stop.clone()) {
                unsorted.push(stop);
            }
        }

        if skipped > 0 {
            debug!(skipped, "dropped empty stop names from catalog");
        }

        let mut sorted = unsorted.clone();
        sorted.sort();

        Self {
            sorted: sorted.into(),
            unsorted: unsorted.into(),
            members: Arc::new(members),
        }
    }

    /// The gazetteer built from the compiled-in stop catalog.
    pub fn builtin() -> Self {
        let gazetteer = Self::new(catalog::RAW_STOPS);
        debug!(
            raw = catalog::RAW_STOPS.len(),
            unique = gazetteer.len(),
            "loaded built-in stop catalog"
        );
        gazetteer
    }

    /// All stops, sorted by code point.
    pub fn stops(&self) -> &[StopName] {
        &self.sorted
    }

    /// All stops in first-seen order.
    pub fn unsorted(&self) -> &[StopName] {
        &self.unsorted
    }

    /// Whether `name` is exactly one of the known stops.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Look up the stored stop for `name`, if known.
    pub fn get(&self, name: &str) -> Option<&StopName> {
        self.members.get(name)
    }

    /// Number of unique stops.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Returns true if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rebuilding from a gazetteer's own names changes nothing.
        #[test]
        fn dedup_is_idempotent(raw in prop::collection::vec("[A-C ]{0,3}", 0..40)) {
            let once = Gazetteer::new(&raw);
            let twice = Gazetteer::new(once.unsorted());
            prop_assert_eq!(once.stops(), twice.stops());
            prop_assert_eq!(once.unsorted(), twice.unsorted());
        }

        /// Deduplication never grows the catalog.
        #[test]
        fn never_larger_than_input(raw in prop::collection::vec("[A-Z]{0,4}", 0..40)) {
            let gazetteer = Gazetteer::new(&raw);
            prop_assert!(gazetteer.len() <= raw.len());
        }

        /// Every non-blank input name is a member.
        #[test]
        fn all_names_present(raw in prop::collection::vec("[A-Z]{1,4}", 0..40)) {
            let gazetteer = Gazetteer::new(&raw);
            for name in &raw {
                prop_assert!(gazetteer.contains(name));
            }
        }
    }
}
