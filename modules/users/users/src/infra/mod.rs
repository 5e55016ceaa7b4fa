//! Infrastructure layer - database persistence.

pub mod storage;
