use crate::{diagnostics::Diagnostics, emit::GeneratedUnit};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Write each unit to its own file under `dir`, then an index file named
/// `index` that includes every unit written.
///
/// A failed unit is reported and left out of the index; the remaining
/// units are still written. Returns the paths of the unit files written.
pub fn write_units(
    dir: &Path,
    index: &str,
    units: &[GeneratedUnit],
    diagnostics: &mut Diagnostics,
) -> Vec<PathBuf> {
    let mut written = Vec::new();

    for unit in units {
        let path = dir.join(unit.file_name());

        match write_file(&path, &unit.render()) {
            Ok(()) => {
                tracing::debug!(unit = %unit.unit_name(), path = %path.display(), "binder written");
                written.push(path);
            }
            Err(err) => diagnostics.error(format!(
                "failed to write binder for '{}' to {}: {err}",
                unit.host_path(),
                path.display()
            )),
        }
    }

    let index_path = dir.join(index);
    if let Err(err) = write_file(&index_path, &render_index(&written)) {
        diagnostics.error(format!(
            "failed to write binder index {}: {err}",
            index_path.display()
        ));
    }

    written
}

/// Index source: one `include!` per unit file.
#[must_use]
pub fn render_index(files: &[PathBuf]) -> String {
    let mut out = String::from("// @generated by viewbind\n");
    for file in files {
        out.push_str(&format!("include!({:?});\n", file.display().to_string()));
    }

    out
}

// the handle is flushed explicitly and closed on drop, on every path
fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(contents.as_bytes())?;
    out.flush()
}

///
/// TESTS
///
