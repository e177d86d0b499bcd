// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Common utilities shared across examples.

use std::path::PathBuf;

use clap::Args;
use opal::{
    OpalInstance, Prefix,
    config::{InitOptions, get_opal_library_path},
};

/// Initializes tracing subscriber for examples.
///
/// Configures logging to stdout with an INFO level filter, respecting the
/// `RUST_LOG` environment variable for custom log levels.
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

/// Command line options for loading and initialising the engine.
#[derive(Debug, Args)]
pub struct EngineArgs {
    /// Path to the OPAL shared library. Defaults to OPAL_LIBRARY_PATH or the
    /// platform library name.
    #[arg(long)]
    pub library: Option<PathBuf>,

    /// Endpoint prefixes to create (e.g. `pc`, `sip`, `h323`).
    #[arg(long = "prefix")]
    pub prefixes: Vec<Prefix>,

    /// Native trace level.
    #[arg(long)]
    pub trace_level: Option<u32>,

    /// Native trace file.
    #[arg(long)]
    pub trace_file: Option<PathBuf>,
}

impl EngineArgs {
    /// Loads the library and initialises an engine from the arguments.
    pub fn initialise(&self) -> opal::Result<OpalInstance> {
        let mut options = InitOptions::new().prefixes(self.prefixes.iter().copied());
        if let Some(level) = self.trace_level {
            options = options.trace_level(level);
        }
        if let Some(file) = &self.trace_file {
            options = options.trace_file(file.clone());
        }

        let library = self.library.clone().unwrap_or_else(get_opal_library_path);
        let api = opal::load_api(&library)?;
        OpalInstance::with_options(api, &options)
    }
}
