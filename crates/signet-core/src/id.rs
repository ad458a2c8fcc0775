//! Device identifier generation.

/// Source of fresh device identifiers.
///
/// Only used when a caller asks the service to pick an id; explicit ids
/// never pass through a generator.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier.
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers in canonical hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
