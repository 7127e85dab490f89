// Library root
// ------------
// Everything the `bp` and `bp-classed` binaries do lives here so it can
// be tested without spawning a process. A run is strictly linear:
// read the name, ensure the directory, render, write, report.
//
// Module responsibilities:
// - `args`: clap command line and component-name validation.
// - `config`: the explicit run configuration built from the arguments.
// - `template`: fixed templates per variant and placeholder rendering.
// - `token`: the random CSS class token used by `bp-classed`.
// - `output`: directory creation and file writes.
// - `report`: progress lines on the console.
// - `error`: the library error type.
pub mod args;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod template;
pub mod token;

pub use args::{component_name, Cli, ComponentName};
pub use config::Config;
pub use error::{Result, ScaffoldError};
pub use output::WrittenFiles;
pub use report::Reporter;
pub use template::{Rendered, Substitutions, Variant};
pub use token::ClassToken;

use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// What a run left on disk.
#[derive(Debug, Clone)]
pub struct Generated {
    pub dir: PathBuf,
    /// False when the component directory was already there.
    pub created_dir: bool,
    pub files: WrittenFiles,
    pub class_token: Option<ClassToken>,
}

/// Run the generator for `config`, drawing a class token when the
/// variant needs one.
pub fn generate<W: Write>(config: &Config, reporter: &mut Reporter<W>) -> Result<Generated> {
    generate_with_token(config, None, reporter)
}

/// Like `generate`, but with a caller-supplied class token. The token is
/// ignored by variants that do not use one, and drawn fresh when the
/// variant needs one and none is given.
pub fn generate_with_token<W: Write>(
    config: &Config,
    class_token: Option<ClassToken>,
    reporter: &mut Reporter<W>,
) -> Result<Generated> {
    reporter.start().map_err(ScaffoldError::Report)?;

    let dir = config.component_dir();
    let created_dir = output::ensure_dir(&dir)?;

    let class_token = if config.variant.uses_class_token() {
        let token = class_token.unwrap_or_else(ClassToken::generate);
        debug!(token = %token, "using class token");
        Some(token)
    } else {
        None
    };

    let mut subs = Substitutions::new(config.name.as_str());
    if let Some(token) = &class_token {
        subs = subs.with_class_token(token);
    }
    let rendered = config.variant.render(&subs);

    let files = config.files();
    output::write_component(&files, &rendered)?;

    reporter.file(&files.component).map_err(ScaffoldError::Report)?;
    reporter.file(&files.styles).map_err(ScaffoldError::Report)?;
    reporter.done().map_err(ScaffoldError::Report)?;

    Ok(Generated {
        dir,
        created_dir,
        files,
        class_token,
    })
}

/// Diagnostic logging to stderr, filtered by `RUST_LOG` (default `warn`).
/// Stdout is reserved for the progress report.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
