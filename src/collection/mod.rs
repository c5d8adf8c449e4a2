//! Owned collections backing the interactive session.

pub mod dynamic_array;
