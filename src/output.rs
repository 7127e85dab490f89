// Directory ensurer and file writer. Plain blocking `std::fs` calls in
// a fixed order; the first file stays on disk if the second write fails.

use crate::args::ComponentName;
use crate::error::{Result, ScaffoldError};
use crate::template::Rendered;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of the generated component source.
pub const COMPONENT_EXT: &str = "tsx";
/// Extension of the generated styles module, after the `.styles` infix.
pub const STYLES_EXT: &str = "js";

/// Paths of the two files written for a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub component: PathBuf,
    pub styles: PathBuf,
}

impl WrittenFiles {
    pub fn for_component(dir: &Path, name: &ComponentName) -> Self {
        WrittenFiles {
            component: concat(dir, &format!("{name}.{COMPONENT_EXT}")),
            styles: concat(dir, &format!("{name}.styles.{STYLES_EXT}")),
        }
    }
}

/// `<base>/<name>`. The name is appended as text rather than joined, so
/// a name like `/abs/Card` stays under `base` instead of replacing it.
pub fn component_dir(base: &Path, name: &ComponentName) -> PathBuf {
    concat(base, name.as_str())
}

fn concat(dir: &Path, tail: &str) -> PathBuf {
    let mut path = OsString::from(dir.as_os_str());
    path.push("/");
    path.push(tail);
    PathBuf::from(path)
}

/// Create `dir` unless it already exists. Returns whether it was created.
///
/// Only the last path segment is created, so a name like `a/b` fails
/// when `a` is missing.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.exists() {
        debug!(dir = %dir.display(), "component directory already exists");
        return Ok(false);
    }
    fs::create_dir(dir).map_err(|e| ScaffoldError::io("create directory", dir, e))?;
    debug!(dir = %dir.display(), "created component directory");
    Ok(true)
}

/// Write both rendered files, replacing whatever is there.
pub fn write_component(files: &WrittenFiles, rendered: &Rendered) -> Result<()> {
    write_file(&files.component, &rendered.component)?;
    write_file(&files.styles, &rendered.styles)?;
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ScaffoldError::io("write", path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
