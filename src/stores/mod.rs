//! Storage layer for the payment API. Provides storage for:
//! - Payment records in creation order ([`PaymentsStore`])
//!
//! Current implementation is process-local and synchronous. Callers that share
//! a store between tasks wrap it in a lock (see [`crate::api::AppState`]).

mod payments;

pub use payments::PaymentsStore;
