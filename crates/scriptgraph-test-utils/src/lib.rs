//! Testing utilities for the scriptgraph crates.
//!
//! In-memory fakes for the host container and the auxiliary table store,
//! builders for entities and name tables, and a tracing setup for tests.

pub mod builders;
pub mod host;
pub mod store;

pub use builders::{entity_id, entity_of, name_table, proxy_entity};
pub use host::InMemoryHost;
pub use store::InMemoryAuxStore;

/// Install a test-writer subscriber. Safe to call from every test.
pub fn init_test_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_target(false)
        .with_test_writer()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
