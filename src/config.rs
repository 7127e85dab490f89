// Run configuration: everything a generator run needs, built once at
// startup and handed to `generate` instead of reading process state.

use crate::args::{component_name, Cli, ComponentName};
use crate::error::Result;
use crate::output::{self, WrittenFiles};
use crate::template::Variant;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub name: ComponentName,
    /// Directory the component directory is created in. The binaries
    /// always use the current working directory.
    pub base_dir: PathBuf,
    pub variant: Variant,
}

impl Config {
    pub fn new(name: ComponentName, variant: Variant) -> Self {
        Config {
            name,
            base_dir: PathBuf::from("."),
            variant,
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Build from process arguments (program path first). Help and
    /// usage errors exit the process like any clap program.
    pub fn from_args<I, T>(args: I, variant: Variant) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_cli(Cli::parse_for(variant.bin_name(), args), variant)
    }

    pub fn from_cli(cli: Cli, variant: Variant) -> Result<Self> {
        Ok(Config::new(component_name(cli.name)?, variant))
    }

    pub fn component_dir(&self) -> PathBuf {
        output::component_dir(&self.base_dir, &self.name)
    }

    /// Where the component and styles files of this run go.
    pub fn files(&self) -> WrittenFiles {
        WrittenFiles::for_component(&self.component_dir(), &self.name)
    }
}
