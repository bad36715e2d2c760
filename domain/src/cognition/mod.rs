//! Cognition mode report
//!
//! Initial mediation produces a four-entry description of how the query was
//! "processed": two analytical modes and two empathic ones. The entries are
//! purely descriptive output and never feed back into the decision.

use crate::core::query::Query;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of query characters echoed into the fast-analytical entry
const PATTERN_EXCERPT_CHARS: usize = 30;

/// One of the four cognition modes reported for a mediated query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CognitionMode {
    /// Pattern recognition over a query excerpt
    FastAnalytical,
    /// Full-query reasoning echo
    SlowAnalytical,
    /// Fixed emotional-tone acknowledgement
    FastEmpathic,
    /// Fixed ethical-alignment acknowledgement
    SlowEmpathic,
}

impl CognitionMode {
    /// All modes in report order
    pub const ALL: [CognitionMode; 4] = [
        CognitionMode::FastAnalytical,
        CognitionMode::SlowAnalytical,
        CognitionMode::FastEmpathic,
        CognitionMode::SlowEmpathic,
    ];

    /// Numeric tag used as the report key (1-4)
    pub fn tag(&self) -> u8 {
        match self {
            CognitionMode::FastAnalytical => 1,
            CognitionMode::SlowAnalytical => 2,
            CognitionMode::FastEmpathic => 3,
            CognitionMode::SlowEmpathic => 4,
        }
    }

    /// Render this mode's report entry for a query
    pub fn describe(&self, query: &Query) -> String {
        match self {
            CognitionMode::FastAnalytical => {
                format!(
                    "Fast-Analytical → Pattern: {}...",
                    query.excerpt(PATTERN_EXCERPT_CHARS)
                )
            }
            CognitionMode::SlowAnalytical => {
                format!("Slow-Analytical → Reasoning about: {}", query)
            }
            CognitionMode::FastEmpathic => "Fast-Empathic → Emotional tone detected".to_string(),
            CognitionMode::SlowEmpathic => {
                "Slow-Empathic → Ethical alignment check passed".to_string()
            }
        }
    }
}

/// Cosmetic mapping from mode tag to report entry
///
/// Produced by each mediation pass and carried into the final report for
/// display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeMap {
    entries: BTreeMap<u8, String>,
}

impl ModeMap {
    /// Build the four-entry report for a query
    pub fn from_query(query: &Query) -> Self {
        let entries = CognitionMode::ALL
            .iter()
            .map(|mode| (mode.tag(), mode.describe(query)))
            .collect();
        Self { entries }
    }

    /// Look up an entry by numeric tag
    pub fn get(&self, tag: u8) -> Option<&str> {
        self.entries.get(&tag).map(String::as_str)
    }

    /// Iterate entries in tag order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.entries.iter().map(|(tag, entry)| (*tag, entry.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_map_has_four_entries() {
        let map = ModeMap::from_query(&Query::new("test"));
        assert_eq!(map.len(), 4);
        for tag in 1..=4 {
            assert!(map.get(tag).is_some());
        }
    }

    #[test]
    fn test_fast_analytical_excerpts_long_query() {
        let query = Query::new("a".repeat(50));
        let map = ModeMap::from_query(&query);
        let entry = map.get(1).unwrap();
        assert_eq!(entry, format!("Fast-Analytical → Pattern: {}...", "a".repeat(30)));
    }

    #[test]
    fn test_slow_analytical_echoes_query() {
        let map = ModeMap::from_query(&Query::new("deploy the agent"));
        assert_eq!(
            map.get(2).unwrap(),
            "Slow-Analytical → Reasoning about: deploy the agent"
        );
    }

    #[test]
    fn test_empathic_entries_are_fixed() {
        let map = ModeMap::from_query(&Query::new("anything"));
        assert_eq!(map.get(3).unwrap(), "Fast-Empathic → Emotional tone detected");
        assert_eq!(
            map.get(4).unwrap(),
            "Slow-Empathic → Ethical alignment check passed"
        );
    }

    #[test]
    fn test_iter_in_tag_order() {
        let map = ModeMap::from_query(&Query::new("test"));
        let tags: Vec<u8> = map.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, vec![1, 2, 3, 4]);
    }
}
