//! Property-based tests
//!
//! Invariants of the merged user collection

mod merge_proptest;
