//! Age filtering and summary statistics over [`Person`] lists.

use crate::user::Person;

/// Age cutoff used by every caller of the filter.
pub const DEFAULT_AGE_THRESHOLD: u32 = 23;

/// Returns the names of everyone strictly older than `threshold`, in input order.
#[must_use]
pub fn users_older_than(threshold: u32, users: &[Person]) -> Vec<String> {
    users
        .iter()
        .filter(|user| user.age > threshold)
        .map(|user| user.name.clone())
        .collect()
}

/// Summary numbers shown next to a filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    /// Number of people in the list.
    pub total: usize,
    /// Number of people older than the threshold.
    pub older_than: usize,
    /// Mean age rounded to the nearest year; 0 for an empty list.
    pub average_age: u32,
    /// Share of people older than the threshold, rounded percent; 0 for an empty list.
    pub percentage: u32,
}

impl RosterStats {
    /// Computes statistics for `users` against `threshold`.
    #[must_use]
    pub fn compute(threshold: u32, users: &[Person]) -> Self {
        let total = users.len();
        if total == 0 {
            return Self::default();
        }

        let older_than = users.iter().filter(|user| user.age > threshold).count();
        let age_sum: u64 = users.iter().map(|user| u64::from(user.age)).sum();

        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let (average_age, percentage) = (
            (age_sum as f64 / total as f64).round() as u32,
            (older_than as f64 / total as f64 * 100.0).round() as u32,
        );

        Self {
            total,
            older_than,
            average_age,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Person> {
        vec![
            Person::new(1, "Ana", 25),
            Person::new(2, "Pedro", 30),
            Person::new(3, "Maria", 22),
        ]
    }

    #[test]
    fn test_filter_empty() {
        assert!(users_older_than(DEFAULT_AGE_THRESHOLD, &[]).is_empty());
    }

    #[test]
    fn test_filter_sample() {
        assert_eq!(
            users_older_than(DEFAULT_AGE_THRESHOLD, &sample()),
            vec!["Ana".to_string(), "Pedro".to_string()]
        );
    }

    #[test]
    fn test_filter_is_strict() {
        let users = vec![Person::new(1, "Edge", 23), Person::new(2, "Over", 24)];
        assert_eq!(users_older_than(23, &users), vec!["Over".to_string()]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let users = vec![
            Person::new(1, "Zed", 50),
            Person::new(2, "Amy", 10),
            Person::new(3, "Bob", 40),
        ];
        assert_eq!(users_older_than(0, &users), vec!["Zed", "Amy", "Bob"]);
        assert_eq!(users_older_than(30, &users), vec!["Zed", "Bob"]);
    }

    #[test]
    fn test_stats_sample() {
        let stats = RosterStats::compute(DEFAULT_AGE_THRESHOLD, &sample());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.older_than, 2);
        // (25 + 30 + 22) / 3 = 25.67
        assert_eq!(stats.average_age, 26);
        // 2 / 3 = 66.67%
        assert_eq!(stats.percentage, 67);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(
            RosterStats::compute(DEFAULT_AGE_THRESHOLD, &[]),
            RosterStats::default()
        );
    }
}
