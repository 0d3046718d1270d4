//! Schema validation orchestration.

pub mod hierarchy;
pub mod naming;

use crate::{error::ErrorTree, node::Schema};

/// Run full schema validation in a staged, deterministic order.
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = schema.validate_nodes();

    // Phase 2: enforce schema-wide invariants.
    validate_global(schema, &mut errors);

    errors.result()
}

// Run global validation passes that require a full schema view.
fn validate_global(schema: &Schema, errors: &mut ErrorTree) {
    hierarchy::validate_acyclic(schema, errors);
}
