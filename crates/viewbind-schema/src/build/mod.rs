use crate::{Error, node::Schema, prelude::*, validate::validate_schema};
use std::sync::{LazyLock, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

// filled by the `#[component]` and `#[host]` constructors before `main`
static SCHEMA: LazyLock<RwLock<Schema>> = LazyLock::new(|| RwLock::new(Schema::new()));

static SCHEMA_VALIDATED: OnceLock<()> = OnceLock::new();

pub fn schema_write() -> RwLockWriteGuard<'static, Schema> {
    SCHEMA
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Unvalidated view of every node registered so far.
pub fn schema_read() -> RwLockReadGuard<'static, Schema> {
    SCHEMA
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// The registered schema, validated on first call. A build script
/// generates from this.
pub fn get_schema() -> Result<RwLockReadGuard<'static, Schema>, Error> {
    let schema = schema_read();
    validate(&schema).map_err(BuildError::Validation)?;

    Ok(schema)
}

fn validate(schema: &Schema) -> Result<(), ErrorTree> {
    if SCHEMA_VALIDATED.get().is_some() {
        return Ok(());
    }

    validate_schema(schema)?;

    SCHEMA_VALIDATED.set(()).ok();

    Ok(())
}

///
/// TESTS
///
