use crate::{err, prelude::*};

/// Reject supertype edges that loop back on themselves.
pub fn validate_acyclic(schema: &Schema, errs: &mut ErrorTree) {
    let graph = TypeGraph::from_schema(schema);

    if let Some(cycle) = graph.find_cycle() {
        err!(errs, "component hierarchy contains a cycle: {}", cycle.join(" -> "));
    }
}
