//! Startup roster generation.

use std::sync::Arc;

use mockable::Clock;
use roster_data::{GeneratorOptions, RosterDataset, generate_roster};
use tracing::info;

/// Generate the roster once, stamped with the clock's current UTC time.
///
/// The result is shared read-only for the lifetime of the process.
///
/// # Examples
/// ```
/// use backend::startup::build_roster;
/// use mockable::DefaultClock;
///
/// let dataset = build_roster(&DefaultClock, Some(5));
/// assert_eq!(dataset.counts().users, 1250);
/// ```
pub fn build_roster(clock: &dyn Clock, seed: Option<u64>) -> Arc<RosterDataset> {
    let dataset = generate_roster(&GeneratorOptions::with_seed(seed), clock.utc());
    let counts = dataset.counts();
    info!(
        orgs = counts.orgs,
        users = counts.users,
        courses = counts.courses,
        classes = counts.classes,
        academic_sessions = counts.academic_sessions,
        categories = counts.categories,
        enrollments = counts.enrollments,
        seeded = seed.is_some(),
        "roster generated"
    );
    Arc::new(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use roster_data::Record;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(
            Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }

    #[test]
    fn every_record_carries_the_clock_instant() {
        let clock = fixed_clock();

        let dataset = build_roster(&clock, Some(1));

        assert!(
            dataset
                .orgs()
                .iter()
                .all(|org| org.base().date_last_modified == clock.0)
        );
        assert!(
            dataset
                .categories()
                .iter()
                .all(|category| category.base().date_last_modified == clock.0)
        );
    }

    #[test]
    fn same_seed_gives_same_identifiers() {
        let clock = fixed_clock();

        let first = build_roster(&clock, Some(99));
        let second = build_roster(&clock, Some(99));

        assert_eq!(first.users(), second.users());
    }
}
