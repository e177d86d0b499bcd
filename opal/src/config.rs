// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration: where to find the OPAL library and what to ask of
//! it at initialise time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Prefix, Result};

// Build script generates constants.rs with OPAL_LIBRARY_NAME
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// Environment variable overriding the library location.
pub const OPAL_LIBRARY_PATH_ENV: &str = "OPAL_LIBRARY_PATH";

/// Returns the path to the OPAL shared library.
///
/// Uses `OPAL_LIBRARY_PATH` when set, otherwise the platform file name
/// (`libopal.so`, `libopal.dylib` or `opal.dll`) so the dynamic loader's
/// search path applies.
///
/// # Examples
///
/// ```no_run
/// use opal::config::get_opal_library_path;
/// use opal::load_api;
///
/// # fn main() -> Result<(), opal::Error> {
/// let api = load_api(get_opal_library_path())?;
/// # Ok(())
/// # }
/// ```
pub fn get_opal_library_path() -> PathBuf {
    match std::env::var_os(OPAL_LIBRARY_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(OPAL_LIBRARY_NAME),
    }
}

/// Options passed to `OpalInitialise`.
///
/// Rendered by [`InitOptions::to_options_string`] as space separated tokens:
/// the endpoint prefixes, then `TraceLevel=<n>`, `TraceFile=<path>` and
/// `TraceAppend` when set. An empty prefix list leaves endpoint selection to
/// the engine.
///
/// Can be loaded from any serde format:
///
/// ```
/// # use opal::{config::InitOptions, Prefix};
/// let options: InitOptions =
///     serde_json::from_str(r#"{"prefixes": ["pc", "sip"], "trace_level": 3}"#).unwrap();
/// assert_eq!(options.prefixes, [Prefix::Pcss, Prefix::Sip]);
/// assert_eq!(options.to_options_string().unwrap(), "pc sip TraceLevel=3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitOptions {
    /// Endpoints to create.
    pub prefixes: Vec<Prefix>,
    /// Native trace verbosity.
    pub trace_level: Option<u32>,
    /// Native trace output file.
    pub trace_file: Option<PathBuf>,
    /// Append to `trace_file` instead of truncating it.
    pub trace_append: bool,
}

impl InitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an endpoint prefix; duplicates are ignored.
    pub fn prefix(mut self, prefix: Prefix) -> Self {
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
        self
    }

    pub fn prefixes<I: IntoIterator<Item = Prefix>>(self, prefixes: I) -> Self {
        prefixes.into_iter().fold(self, Self::prefix)
    }

    pub fn trace_level(mut self, level: u32) -> Self {
        self.trace_level = Some(level);
        self
    }

    pub fn trace_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.trace_file = Some(path.into());
        self
    }

    pub fn trace_append(mut self, append: bool) -> Self {
        self.trace_append = append;
        self
    }

    /// Renders the native options string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if `trace_file` is not valid UTF-8 or
    /// contains whitespace, since the engine splits options on whitespace.
    pub fn to_options_string(&self) -> Result<String> {
        let mut tokens: Vec<String> = self
            .prefixes
            .iter()
            .map(|prefix| prefix.as_str().to_string())
            .collect();
        if let Some(level) = self.trace_level {
            tokens.push(format!("TraceLevel={level}"));
        }
        if let Some(file) = &self.trace_file {
            let file = file.to_str().ok_or_else(|| {
                Error::InvalidOption(format!("trace file {:?} is not valid UTF-8", file))
            })?;
            if file.is_empty() || file.contains(char::is_whitespace) {
                return Err(Error::InvalidOption(format!(
                    "trace file {file:?} is empty or contains whitespace"
                )));
            }
            tokens.push(format!("TraceFile={file}"));
        }
        if self.trace_append {
            tokens.push("TraceAppend".to_string());
        }
        Ok(tokens.join(" "))
    }
}
