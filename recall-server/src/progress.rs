//! Progress tracking.
//!
//! Holds the set of discovered stations out of a fixed total. Stations move
//! from hidden to discovered one at a time and back to hidden only all at
//! once, through [`ProgressTracker::reset`].

use std::collections::BTreeSet;

use tracing::trace;

use crate::domain::{STATION_COUNT, StationId};

/// Result of recording a discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// The station was hidden and is now discovered.
    ///
    /// `completed` is true only on the discovery that fills the set.
    New { completed: bool },

    /// The station was already discovered; nothing changed.
    AlreadyFound,

    /// The id is outside this tracker's range and was ignored.
    Ignored,
}

/// The discovered set and the metrics derived from it.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    discovered: BTreeSet<StationId>,
    total: usize,
}

impl ProgressTracker {
    /// Create a tracker over `total` stations, ids `[0, total)`.
    pub fn new(total: usize) -> Self {
        Self {
            discovered: BTreeSet::new(),
            total,
        }
    }

    /// Add `id` to the discovered set.
    ///
    /// Recording the same id again is a no-op. Ids outside `[0, total)` are
    /// ignored.
    pub fn record_discovery(&mut self, id: StationId) -> Discovery {
        if id.index() >= self.total {
            trace!(%id, total = self.total, "ignoring out-of-range station");
            return Discovery::Ignored;
        }
        if !self.discovered.insert(id) {
            return Discovery::AlreadyFound;
        }
        Discovery::New {
            completed: self.is_complete(),
        }
    }

    /// Whether every station has been discovered.
    pub fn is_complete(&self) -> bool {
        self.discovered.len() == self.total
    }

    /// Completion percentage, rounded to one decimal place.
    ///
    /// # Example
    ///
    /// ```
    /// use recall_server::domain::StationId;
    /// use recall_server::progress::ProgressTracker;
    ///
    /// let mut tracker = ProgressTracker::new(98);
    /// tracker.record_discovery(StationId::parse(4).unwrap());
    /// assert_eq!(tracker.percentage(), 1.0);
    /// ```
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = self.discovered.len() as f64 / self.total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }

    /// Percentage for display, e.g. `"1.0%"`.
    pub fn percentage_text(&self) -> String {
        format!("{:.1}%", self.percentage())
    }

    /// Count for display, e.g. `"1/98 stations found"`.
    pub fn count_text(&self) -> String {
        format!("{}/{} stations found", self.found(), self.total)
    }

    /// Clear the discovered set.
    pub fn reset(&mut self) {
        self.discovered.clear();
    }

    /// Number of discovered stations.
    pub fn found(&self) -> usize {
        self.discovered.len()
    }

    /// Total number of stations.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether `id` has been discovered.
    pub fn is_found(&self, id: StationId) -> bool {
        self.discovered.contains(&id)
    }

    /// Discovered stations in ascending id order.
    pub fn discovered(&self) -> impl Iterator<Item = StationId> + '_ {
        self.discovered.iter().copied()
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(STATION_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: usize) -> StationId {
        StationId::parse(v).unwrap()
    }

    #[test]
    fn starts_empty() {
        let t = ProgressTracker::default();
        assert_eq!(t.found(), 0);
        assert_eq!(t.total(), 98);
        assert_eq!(t.percentage(), 0.0);
        assert!(!t.is_complete());
    }

    #[test]
    fn record_is_idempotent() {
        let mut t = ProgressTracker::default();
        assert_eq!(t.record_discovery(id(4)), Discovery::New { completed: false });
        assert_eq!(t.record_discovery(id(4)), Discovery::AlreadyFound);
        assert_eq!(t.found(), 1);
        assert!(t.is_found(id(4)));
    }

    #[test]
    fn out_of_range_ignored() {
        let mut t = ProgressTracker::new(10);
        assert_eq!(t.record_discovery(id(50)), Discovery::Ignored);
        assert_eq!(t.found(), 0);
    }

    #[test]
    fn one_of_98_rounds_to_one_decimal() {
        let mut t = ProgressTracker::new(98);
        t.record_discovery(id(0));
        assert_eq!(t.percentage(), 1.0);
        assert_eq!(t.percentage_text(), "1.0%");
        assert_eq!(t.count_text(), "1/98 stations found");
    }

    #[test]
    fn percentage_rounding() {
        let mut t = ProgressTracker::new(98);
        for raw in 0..3 {
            t.record_discovery(id(raw));
        }
        // 3 / 98 = 3.0612...
        assert_eq!(t.percentage(), 3.1);

        let mut t = ProgressTracker::new(3);
        t.record_discovery(id(0));
        assert_eq!(t.percentage(), 33.3);
        t.record_discovery(id(1));
        assert_eq!(t.percentage(), 66.7);
    }

    #[test]
    fn completes_once_every_station_found() {
        let mut t = ProgressTracker::default();
        let mut completions = 0;
        for station in StationId::all() {
            if t.record_discovery(station) == (Discovery::New { completed: true }) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(t.is_complete());
        assert_eq!(t.percentage(), 100.0);
        assert_eq!(t.percentage_text(), "100.0%");

        // A repeat after completion is not another completion.
        assert_eq!(t.record_discovery(id(0)), Discovery::AlreadyFound);
    }

    #[test]
    fn reset_clears_everything() {
        let mut t = ProgressTracker::default();
        for raw in [4, 6, 17, 30, 45, 97] {
            t.record_discovery(id(raw));
        }
        t.reset();
        assert_eq!(t.found(), 0);
        assert_eq!(t.percentage(), 0.0);
        assert!(!t.is_found(id(4)));
    }

    #[test]
    fn can_complete_again_after_reset() {
        let mut t = ProgressTracker::new(2);
        t.record_discovery(id(0));
        assert_eq!(t.record_discovery(id(1)), Discovery::New { completed: true });
        t.reset();
        t.record_discovery(id(1));
        assert_eq!(t.record_discovery(id(0)), Discovery::New { completed: true });
    }

    #[test]
    fn discovered_in_ascending_order() {
        let mut t = ProgressTracker::default();
        for raw in [30, 4, 17] {
            t.record_discovery(id(raw));
        }
        let ids: Vec<usize> = t.discovered().map(|s| s.index()).collect();
        assert_eq!(ids, vec![4, 17, 30]);
    }

    #[test]
    fn empty_tracker_has_zero_percentage() {
        let t = ProgressTracker::new(0);
        assert_eq!(t.percentage(), 0.0);
        assert!(t.is_complete());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Size equals the number of distinct in-range ids recorded
        #[test]
        fn size_is_distinct_count(raws in prop::collection::vec(0usize..STATION_COUNT, 0..200)) {
            let mut t = ProgressTracker::default();
            for raw in &raws {
                t.record_discovery(StationId::parse(*raw).unwrap());
            }
            let distinct: BTreeSet<_> = raws.iter().collect();
            prop_assert_eq!(t.found(), distinct.len());
            prop_assert!(t.found() <= t.total());
        }

        /// Percentage stays within [0, 100] and reset always returns to zero
        #[test]
        fn percentage_bounded(raws in prop::collection::vec(0usize..STATION_COUNT, 0..200)) {
            let mut t = ProgressTracker::default();
            for raw in raws {
                t.record_discovery(StationId::parse(raw).unwrap());
                let p = t.percentage();
                prop_assert!((0.0..=100.0).contains(&p));
            }
            t.reset();
            prop_assert_eq!(t.percentage(), 0.0);
        }
    }
}
