// Stress-count (culminativity) policies and their bucket automaton
//
// GEN keeps partially built words in buckets that summarize how much of the
// stress budget each word has consumed. A policy is a small automaton over
// those buckets: how many there are, where a stressed or unstressed
// extension routes a word, and which buckets survive into the competition.

use serde::{Deserialize, Serialize};

/// Bucket of words that have not yet received a stress.
pub const UNSTRESSED_BUCKET: usize = 0;

/// Bucket of words that already carry their one permitted stress.
pub const STRESSED_BUCKET: usize = 1;

/// How many stress-bearing positions an output may contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StressPolicy {
    /// Any number of stressed positions.
    Unbounded,
    /// At most one stressed position.
    AtMostOne,
    /// Exactly one stressed position: the at-most-one automaton, accepting
    /// only words that did receive their stress.
    #[default]
    Culminative,
}

impl StressPolicy {
    pub const fn bucket_count(self) -> usize {
        match self {
            StressPolicy::Unbounded => 1,
            StressPolicy::AtMostOne | StressPolicy::Culminative => 2,
        }
    }

    /// Bucket that an extension of a word in `bucket` lands in, or `None`
    /// if the extension is not admissible and must not be generated.
    pub const fn route(self, bucket: usize, stressed: bool) -> Option<usize> {
        match self {
            StressPolicy::Unbounded => Some(UNSTRESSED_BUCKET),
            StressPolicy::AtMostOne | StressPolicy::Culminative => {
                match (bucket, stressed) {
                    (UNSTRESSED_BUCKET, false) => Some(UNSTRESSED_BUCKET),
                    (UNSTRESSED_BUCKET, true) => Some(STRESSED_BUCKET),
                    (STRESSED_BUCKET, false) => Some(STRESSED_BUCKET),
                    _ => None,
                }
            }
        }
    }

    /// Whether complete words in `bucket` become candidates.
    pub const fn accepts(self, bucket: usize) -> bool {
        match self {
            StressPolicy::Unbounded | StressPolicy::AtMostOne => bucket < self.bucket_count(),
            StressPolicy::Culminative => bucket == STRESSED_BUCKET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_has_one_bucket_for_everything() {
        let p = StressPolicy::Unbounded;
        assert_eq!(p.bucket_count(), 1);
        assert_eq!(p.route(0, true), Some(0));
        assert_eq!(p.route(0, false), Some(0));
        assert!(p.accepts(0));
    }

    #[test]
    fn at_most_one_prunes_second_stress() {
        let p = StressPolicy::AtMostOne;
        assert_eq!(p.route(UNSTRESSED_BUCKET, false), Some(UNSTRESSED_BUCKET));
        assert_eq!(p.route(UNSTRESSED_BUCKET, true), Some(STRESSED_BUCKET));
        assert_eq!(p.route(STRESSED_BUCKET, false), Some(STRESSED_BUCKET));
        assert_eq!(p.route(STRESSED_BUCKET, true), None);
        assert!(p.accepts(UNSTRESSED_BUCKET));
        assert!(p.accepts(STRESSED_BUCKET));
    }

    #[test]
    fn culminative_accepts_only_stressed_bucket() {
        let p = StressPolicy::Culminative;
        assert_eq!(p.route(STRESSED_BUCKET, true), None);
        assert!(!p.accepts(UNSTRESSED_BUCKET));
        assert!(p.accepts(STRESSED_BUCKET));
    }

    #[test]
    fn policy_names_are_kebab_case() {
        let json = serde_json::to_string(&StressPolicy::AtMostOne).unwrap();
        assert_eq!(json, "\"at-most-one\"");
        let back: StressPolicy = serde_json::from_str("\"culminative\"").unwrap();
        assert_eq!(back, StressPolicy::Culminative);
    }
}
