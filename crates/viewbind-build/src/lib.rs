//! Build-time generator: reads the registered schema and writes one binder
//! unit per host type into `OUT_DIR`.
//!
//! Hosts must be declared in a crate the build script links against; the
//! generator only sees what the marker attributes registered.

pub mod diagnostics;
pub mod discover;
pub mod emit;
pub mod imports;
pub mod writer;

mod macros;

pub use diagnostics::{Diagnostic, Diagnostics, Level};
pub use emit::GeneratedUnit;

use std::{collections::BTreeSet, env, path::PathBuf};
use thiserror::Error as ThisError;
use viewbind_config_build::{BuildConfig, ConfigError};
use viewbind_paths::{CratePaths, paths};
use viewbind_schema::{build::get_schema, graph::TypeGraph, node::Schema};

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error(transparent)]
    Schema(#[from] viewbind_schema::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("binder generation reported {0} error(s)")]
    Diagnostics(usize),

    #[error("{name} is not set")]
    Env { name: &'static str },
}

///
/// Generation
/// result of one pass: the units to write and what was reported
///

#[derive(Debug, Default)]
pub struct Generation {
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Diagnostics,
}

/// Run one generation pass with crate paths resolved for the current
/// package.
#[must_use]
pub fn generate(schema: &Schema, config: &BuildConfig) -> Generation {
    generate_with(schema, config, &paths())
}

/// Run one generation pass.
///
/// Every host with at least one bound field gets a unit. A field whose type
/// does not descend from `config.base_type` is reported as an error and then
/// handled by `config.invalid_fields`; it never stops the pass.
#[must_use]
pub fn generate_with(schema: &Schema, config: &BuildConfig, paths: &CratePaths) -> Generation {
    let mut generation = Generation::default();
    let declarations = discover::discover(schema);
    if declarations.is_empty() {
        return generation;
    }

    let graph = TypeGraph::from_schema(schema);
    let base = config.base_type.as_str();
    let mut modules = BTreeSet::new();

    for group in discover::group(declarations) {
        for decl in &group.declarations {
            if !graph.conforms(&decl.ty, base) {
                generation.diagnostics.error(format!(
                    "field '{}' on host '{}' has type '{}', which does not extend '{base}'",
                    decl.field,
                    group.path(),
                    decl.ty,
                ));
            }
        }

        let Some(unit) = emit::emit(
            &group,
            |decl| graph.conforms(&decl.ty, base),
            config.invalid_fields,
            paths,
            &mut generation.diagnostics,
        ) else {
            continue;
        };

        if !modules.insert(unit.module.clone()) {
            generation.diagnostics.error(format!(
                "binder module '{}' for '{}' collides with another host",
                unit.module,
                unit.host_path()
            ));
            continue;
        }

        tracing::debug!(
            unit = %unit.unit_name(),
            assignments = unit.assignments.len(),
            "binder generated"
        );
        generation.units.push(unit);
    }

    generation
}

/// Build-script entry point behind `build!`.
///
/// Loads `viewbind.toml` from the manifest directory, generates from the
/// global schema, writes into `OUT_DIR` and prints every diagnostic as a
/// cargo warning. Fails once everything is written if any error was
/// reported.
pub fn run() -> Result<Generation, BuildError> {
    let manifest_dir = env_dir("CARGO_MANIFEST_DIR")?;
    let out_dir = env_dir("OUT_DIR")?;

    println!("cargo:rerun-if-changed=build.rs");
    println!(
        "cargo:rerun-if-changed={}",
        manifest_dir.join(viewbind_config_build::CONFIG_FILE).display()
    );

    let config = BuildConfig::load(&manifest_dir)?;
    let mut generation = {
        let schema = get_schema()?;
        generate(&schema, &config)
    };

    writer::write_units(
        &out_dir,
        &config.output,
        &generation.units,
        &mut generation.diagnostics,
    );

    for diagnostic in &generation.diagnostics {
        println!("cargo:warning={diagnostic}");
    }

    match generation.diagnostics.error_count() {
        0 => Ok(generation),
        n => Err(BuildError::Diagnostics(n)),
    }
}

fn env_dir(name: &'static str) -> Result<PathBuf, BuildError> {
    env::var_os(name)
        .map(PathBuf::from)
        .ok_or(BuildError::Env { name })
}


///
/// TESTS
///
