// src/shared/id_generator.rs
use uuid::Uuid;

/// Source of identifiers for newly persisted rows.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_v4_generator_yields_distinct_ids() {
        let generator = UuidV4Generator;
        assert_ne!(generator.next_id(), generator.next_id());
    }
}
