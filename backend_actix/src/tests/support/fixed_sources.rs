//! Deterministic id and time sources for adapter tests.
use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use uuid::Uuid;

use crate::shared::id_generator::IdGenerator;

/// Always hands out the same id, so a test knows the id of a row before it
/// is created.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdGenerator(pub Uuid);

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> Uuid {
        self.0
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_generator_repeats_its_id() {
        let id = Uuid::new_v4();
        let generator = FixedIdGenerator(id);
        assert_eq!(generator.next_id(), id);
        assert_eq!(generator.next_id(), id);
    }

    #[test]
    fn fixed_clock_reports_frozen_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.utc(), instant);
        assert_eq!(clock.local().with_timezone(&Utc), instant);
    }
}
