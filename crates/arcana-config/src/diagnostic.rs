// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration error diagnostics.
//!
//! Wraps Figment parse failures and post-deserialization validation errors
//! into miette diagnostics so startup failures render with codes and help
//! text instead of a bare Debug dump.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The config files or env vars failed to parse/deserialize.
    #[error("invalid configuration: {message}")]
    #[diagnostic(
        code(arcana::config::parse),
        help("check arcana.toml and ARCANA_* environment variables")
    )]
    Parse {
        /// Figment's description of the failure.
        message: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(arcana::config::missing_key),
        help("add `{key} = <value>` to your arcana.toml or set the matching ARCANA_* variable")
    )]
    MissingKey {
        /// The missing key name (dotted path).
        key: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(arcana::config::validation))]
    Validation {
        /// Description of the invalid value.
        message: String,
    },
}

/// Render a list of config errors to stderr using miette's report handler.
///
/// Used by startup code paths; returns the count rendered.
pub fn render_errors(errors: &[ConfigError]) -> usize {
    for error in errors {
        eprintln!("{:?}", miette::Report::msg(error.to_string()));
    }
    errors.len()
}
