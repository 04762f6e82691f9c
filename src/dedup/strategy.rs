//! Strategy selection and the uniform outcome type.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{linear, quicksort, selection, set};

/// The four deduplication strategies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Strategy {
    /// Hash-set membership test
    #[value(name = "hashset")]
    HashSet,
    /// Order-preserving linear containment scan
    Linear,
    /// Nested compare-and-swap sort, then compaction
    Selection,
    /// Middle-pivot quicksort, then compaction
    Quicksort,
}

impl Strategy {
    /// Every strategy, in the order they are run by default.
    pub const ALL: [Strategy; 4] = [
        Strategy::Linear,
        Strategy::Selection,
        Strategy::Quicksort,
        Strategy::HashSet,
    ];

    /// Stable lowercase name used by the CLI, config files and output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HashSet => "hashset",
            Self::Linear => "linear",
            Self::Selection => "selection",
            Self::Quicksort => "quicksort",
        }
    }

    /// One-line description for `intdupe strategies`.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::HashSet => "hash-set scan; also reports values seen more than once",
            Self::Linear => "linear containment scan; keeps first-occurrence order",
            Self::Selection => "O(n^2) compare-and-swap sort, then in-place compaction",
            Self::Quicksort => "middle-pivot quicksort, then in-place compaction",
        }
    }

    /// Whether the strategy reorders its input before producing a result.
    #[must_use]
    pub fn sorts_input(self) -> bool {
        matches!(self, Self::Selection | Self::Quicksort)
    }

    /// Run the strategy over `values`, consuming them.
    ///
    /// # Example
    ///
    /// ```
    /// use intdupe::dedup::Strategy;
    ///
    /// let outcome = Strategy::Linear.apply(vec![1, 2, 34, 34, 25, 1]);
    /// assert_eq!(outcome.unique, vec![1, 2, 34, 25]);
    /// assert!(outcome.sorted.is_none());
    /// ```
    #[must_use]
    pub fn apply<T: Ord + Hash + Copy>(self, values: Vec<T>) -> DedupOutcome<T> {
        match self {
            Self::HashSet => {
                let scan = set::scan(&values);
                DedupOutcome {
                    strategy: self,
                    unique: scan.distinct_sorted(),
                    repeated: Some(scan.repeated_sorted()),
                    sorted: None,
                }
            }
            Self::Linear => DedupOutcome {
                strategy: self,
                unique: linear::first_occurrences(&values),
                repeated: None,
                sorted: None,
            },
            Self::Selection => {
                let (sorted, unique) = selection::dedup_selection(values);
                DedupOutcome {
                    strategy: self,
                    unique,
                    repeated: None,
                    sorted: Some(sorted),
                }
            }
            Self::Quicksort => {
                let (sorted, unique) = quicksort::dedup_quicksort(values);
                DedupOutcome {
                    strategy: self,
                    unique,
                    repeated: None,
                    sorted: Some(sorted),
                }
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strategy '{}'{}", .name, suggestion_suffix(.suggestion))]
pub struct UnknownStrategy {
    /// The name as given
    pub name: String,
    /// Closest known name, if any is reasonably close
    pub suggestion: Option<&'static str>,
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if let Some(strategy) = Self::ALL.into_iter().find(|st| st.name() == wanted) {
            return Ok(strategy);
        }
        let suggestion = Self::ALL
            .into_iter()
            .map(|st| (st.name(), strsim::jaro_winkler(&wanted, st.name())))
            .filter(|(_, score)| *score > 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name);
        Err(UnknownStrategy {
            name: s.to_string(),
            suggestion,
        })
    }
}

impl TryFrom<String> for Strategy {
    type Error = UnknownStrategy;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Result of running one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DedupOutcome<T> {
    /// Strategy that produced this outcome
    pub strategy: Strategy,
    /// Distinct values, in the order the strategy yields them
    pub unique: Vec<T>,
    /// Values seen more than once (set strategy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeated: Option<Vec<T>>,
    /// Fully sorted input before compaction (sort strategies only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<Vec<T>>,
}

impl<T> DedupOutcome<T> {
    /// Number of distinct values found.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.unique.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
            assert_eq!(strategy.to_string(), strategy.name());
        }
    }

    #[test]
    fn test_strategy_parse_case_insensitive() {
        assert_eq!("QuickSort".parse::<Strategy>().unwrap(), Strategy::Quicksort);
        assert_eq!(" hashset ".parse::<Strategy>().unwrap(), Strategy::HashSet);
    }

    #[test]
    fn test_strategy_parse_suggestion() {
        let err = "quicksrot".parse::<Strategy>().unwrap_err();
        assert_eq!(err.suggestion, Some("quicksort"));
        assert!(err.to_string().contains("did you mean 'quicksort'"));
    }

    #[test]
    fn test_strategy_parse_no_suggestion() {
        let err = "zzz".parse::<Strategy>().unwrap_err();
        assert_eq!(err.suggestion, None);
        assert_eq!(err.to_string(), "Unknown strategy 'zzz'");
    }

    #[test]
    fn test_deserialize_goes_through_from_str() {
        let strategy: Strategy = serde_json::from_str("\"QuickSort\"").unwrap();
        assert_eq!(strategy, Strategy::Quicksort);

        let err = serde_json::from_str::<Strategy>("\"hashest\"").unwrap_err();
        assert!(err.to_string().contains("did you mean 'hashset'"));
    }

    #[test]
    fn test_sorts_input() {
        assert!(Strategy::Selection.sorts_input());
        assert!(Strategy::Quicksort.sorts_input());
        assert!(!Strategy::Linear.sorts_input());
        assert!(!Strategy::HashSet.sorts_input());
    }

    #[test]
    fn test_apply_hashset_reports_repeated() {
        let outcome = Strategy::HashSet.apply(vec![1, 2, 34, 34, 25, 1]);
        assert_eq!(outcome.unique, vec![1, 2, 25, 34]);
        assert_eq!(outcome.repeated, Some(vec![1, 34]));
        assert!(outcome.sorted.is_none());
    }

    #[test]
    fn test_apply_sort_strategies_snapshot_sorted() {
        for strategy in [Strategy::Selection, Strategy::Quicksort] {
            let outcome = strategy.apply(vec![1, 2, 34, 34, 25, 1]);
            assert_eq!(outcome.sorted, Some(vec![1, 1, 2, 25, 34, 34]));
            assert_eq!(outcome.distinct_count(), 4);
        }
    }

    #[test]
    fn test_apply_empty_input() {
        for strategy in Strategy::ALL {
            let outcome = strategy.apply(Vec::<i64>::new());
            assert!(outcome.unique.is_empty(), "{strategy} should yield nothing");
        }
    }

    #[test]
    fn test_outcome_json_skips_absent_fields() {
        let outcome = Strategy::Linear.apply(vec![3, 3]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["strategy"], "linear");
        assert_eq!(json["unique"], serde_json::json!([3]));
        assert!(json.get("repeated").is_none());
        assert!(json.get("sorted").is_none());
    }
}
