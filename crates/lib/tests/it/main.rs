/*! Integration tests for ADH.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - hierarchy: Tests for the Hierarchy node store, structural edits, aliases and search
 * - metadata: Tests for the Metadata record and the Hierarchical trait
 * - serialization: Tests for serde support of hierarchies and records
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("adh=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

mod helpers;
mod serialization;
