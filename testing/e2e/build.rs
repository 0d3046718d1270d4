#[path = "schema.rs"]
mod schema;

use std::{env, error::Error, fs, path::PathBuf};
use viewbind_build::{generate, writer::write_units};
use viewbind_config_build::BuildConfig;

// Diagnostics go to a file the tests read instead of cargo warnings; the
// StatusScreen clock binding is expected to fail the type check.
fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=schema.rs");
    println!("cargo:rerun-if-changed=viewbind.toml");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    let config = BuildConfig::load(&manifest_dir)?;
    let mut generation = generate(&schema::fixture(), &config);
    write_units(&out_dir, &config.output, &generation.units, &mut generation.diagnostics);

    let report: Vec<String> = generation.diagnostics.iter().map(ToString::to_string).collect();
    fs::write(out_dir.join("diagnostics.txt"), report.join("\n"))?;

    Ok(())
}
