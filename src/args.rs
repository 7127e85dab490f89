// Argument reader: declares the command line with `clap` and turns the
// first positional value into a `ComponentName`. No flags beyond the
// `--help` / `--version` pair clap adds for us.

use crate::error::{Result, ScaffoldError};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::fmt;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Name of the component to scaffold, e.g. `Card`
    #[arg(value_name = "COMPONENT_NAME", allow_hyphen_values = true)]
    pub name: Option<String>,

    // Values after the name are accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parse `args` under the given binary name, printing help or usage
    /// errors and exiting the way `Parser::parse` does.
    pub fn parse_for<I, T>(bin: &'static str, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_for(bin, args).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_for<I, T>(bin: &'static str, args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Cli::command()
            .name(bin)
            .bin_name(bin)
            .try_get_matches_from(args)?;
        Cli::from_arg_matches(&matches)
    }
}

/// A component name as typed by the user. Used verbatim for the
/// directory, the file names and the identifiers in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate the raw positional value. Missing and empty are the same
/// failure; anything else passes through untouched.
pub fn component_name(raw: Option<String>) -> Result<ComponentName> {
    match raw {
        Some(name) if !name.is_empty() => Ok(ComponentName(name)),
        _ => Err(ScaffoldError::InvalidInput),
    }
}
