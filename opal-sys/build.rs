// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Build script for `opal-sys` FFI crate.
//!
//! By default the checked-in `src/bindings.rs` is used and this script does
//! nothing. With the `bindgen` feature enabled it:
//! 1. Locates `opal.h` through `OPAL_INCLUDE_DIR`
//! 2. Generates Rust FFI bindings using `bindgen`
//! 3. Configures dynamic library loading via `libloading`

#[cfg(feature = "bindgen")]
use bindgen::callbacks::ParseCallbacks;
#[cfg(feature = "bindgen")]
use std::env;
#[cfg(feature = "bindgen")]
use std::path::PathBuf;

/// Main build entry point.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=wrapper.h");

    #[cfg(feature = "bindgen")]
    generate_bindings();
}

/// Generates `bindings.rs` in `OUT_DIR` from the native header.
#[cfg(feature = "bindgen")]
fn generate_bindings() {
    println!("cargo:rerun-if-env-changed=OPAL_INCLUDE_DIR");
    let include_dir = env::var("OPAL_INCLUDE_DIR")
        .expect("the `bindgen` feature needs OPAL_INCLUDE_DIR to point at opal.h");
    println!("cargo:include={include_dir}");

    // Only the five message-passing entry points and the constant table are
    // bound. `OpalMessage` stays opaque: its layout belongs to the engine.
    let bindings = bindgen::builder()
        .clang_arg(format!("-I{include_dir}"))
        .header("wrapper.h")
        .allowlist_function("Opal(Initialise|ShutDown|GetMessage|SendMessage|FreeMessage)")
        .allowlist_var("OPAL_C_API_VERSION")
        .allowlist_var("OPAL_.*_FUNCTION")
        .allowlist_var("OPAL_PREFIX_.*")
        .allowlist_var("OPAL_.*_EVENT_PACKAGE")
        .allowlist_type("OpalCallEndReason")
        .opaque_type("OpalMessage")
        .generate_cstr(true)
        .derive_default(true)
        .derive_debug(true)
        .prepend_enum_name(false)
        .dynamic_library_name("libopal")
        .dynamic_link_require_all(true)
        .parse_callbacks(Box::new(CB))
        .generate()
        .expect("Unable to generate OPAL bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("failed to get output directory"));
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Could not write bindings");
}

/// Custom bindgen callback for name transformations.
#[cfg(feature = "bindgen")]
#[derive(Debug)]
struct CB;

#[cfg(feature = "bindgen")]
impl ParseCallbacks for CB {
    /// Transforms C names to idiomatic Rust names.
    ///
    /// - Functions: `OpalShutDown` → `shut_down`
    /// - Types: `OpalHandleStruct` → `HandleStruct`
    fn item_name(&self, item_info: bindgen::callbacks::ItemInfo) -> Option<String> {
        match item_info.kind {
            bindgen::callbacks::ItemKind::Function => {
                Some(to_snake_case(item_info.name.trim_start_matches("Opal")))
            }

            bindgen::callbacks::ItemKind::Type => {
                Some(item_info.name.trim_start_matches("Opal").to_string())
            }

            _ => None,
        }
    }
}

/// Converts CamelCase to snake_case for function names.
///
/// Example: `GetMessage` → `get_message`
#[cfg(feature = "bindgen")]
fn to_snake_case(s: &str) -> String {
    let mut out = String::new();

    for c in s.chars() {
        if c.is_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
