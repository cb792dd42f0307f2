//! Payment identifier generation.

use uuid::Uuid;

pub const PAYMENT_ID_PREFIX: &str = "PAY-";

/// Produces identifiers for new payment records. Every call must return a
/// value never returned before by the same generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `PAY-` followed by a random v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        format!("{}{}", PAYMENT_ID_PREFIX, Uuid::new_v4())
    }
}
