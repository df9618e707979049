use crate::types::{Ulid, UlidError};
use std::sync::{LazyLock, Mutex};
use ulid::Generator as WrappedGenerator;

///
/// GENERATOR lives behind a lazily initialised Mutex
/// it keeps state so that id order is maintained within a process
///

static GENERATOR: LazyLock<Mutex<WrappedGenerator>> =
    LazyLock::new(|| Mutex::new(WrappedGenerator::new()));

/// Generate a ULID using the global monotonic generator; within the same
/// millisecond the previous id is incremented instead of re-randomized.
pub fn generate() -> Result<Ulid, UlidError> {
    let mut generator = GENERATOR.lock().expect("ULID generator mutex poisoned");

    generator
        .generate()
        .map(Ulid::from)
        .map_err(|_| UlidError::GeneratorOverflow)
}

///
/// TESTS
///
