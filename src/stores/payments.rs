//! Payment record storage.
//!
//! Records are kept in insertion order and are never updated or removed.
//! Lookups scan the whole sequence; no index is maintained.

use crate::{Error, PaymentRecord};

#[derive(Debug, Default)]
pub struct PaymentsStore {
    payments: Vec<PaymentRecord>,
}

impl PaymentsStore {
    pub fn new() -> Self {
        Self {
            payments: Vec::new(),
        }
    }

    /// Appends a record and returns a reference to the stored copy.
    /// Identifiers are not checked for duplicates; uniqueness is the
    /// responsibility of the identifier generator.
    pub fn create(&mut self, payment: PaymentRecord) -> &PaymentRecord {
        self.payments.push(payment);
        &self.payments[self.payments.len() - 1]
    }

    /// Returns the first record with the given identifier.
    pub fn find_by_id(&self, id: &str) -> Result<&PaymentRecord, Error> {
        self.payments
            .iter()
            .find(|payment| payment.id == id)
            .ok_or(Error::PaymentNotFound)
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaymentRecord> {
        self.payments.iter()
    }
}
