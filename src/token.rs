// Random CSS class token shared by the component and styles files of a
// single `bp-classed` run.

use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;
use std::fmt;

/// Number of characters in a generated class token.
pub const TOKEN_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken(String);

impl ClassToken {
    /// Draw a fresh token from the thread-local generator.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        ClassToken(Alphanumeric.sample_string(rng, TOKEN_LEN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
