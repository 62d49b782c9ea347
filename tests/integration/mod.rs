//! Integration tests
//!
//! Configuration resolution, and both backend clients and the store
//! against wiremock servers

mod config_test;
mod sources_test;
mod store_test;
