// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Build script for the `opal` crate.
//!
//! This script generates `constants.rs` containing the platform file name of
//! the OPAL shared library. The configuration module uses it as the default
//! when `OPAL_LIBRARY_PATH` is not set.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Target OS, not host OS, decides the library naming convention
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let library_name = match target_os.as_str() {
        "windows" => "opal.dll",
        "macos" | "ios" => "libopal.dylib",
        _ => "libopal.so",
    };

    // Generate constants.rs in the build output directory
    let out_path = PathBuf::from(env::var("OUT_DIR").expect("failed to get output directory"))
        .join("constants.rs");

    let data = format!("pub const OPAL_LIBRARY_NAME: &str = \"{library_name}\";\n");
    std::fs::write(out_path, data).expect("Unable to write file");
}
