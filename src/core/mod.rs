//! Service layer over the ledger queries.

pub mod services;
