//! Population integration tests.
//!
//! These tests drive the public `Mocker` API end to end against real Rust
//! targets: scalars, domain strings, containers, structs and the tag and
//! format dictionaries. Every session uses a fixed seed.

mod aggregates;
mod collections;
mod config;
mod dictionaries;

use structmock::Mocker;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const SEED: u64 = 42;

/// Draws per property check.
const COUNT: usize = 100;

fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn mocker() -> Mocker {
    init_logging();
    Mocker::with_seed(SEED)
}
