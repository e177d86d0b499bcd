// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! # opal-sys: Raw FFI bindings to the OPAL C API
//!
//! This crate provides low-level, unsafe Rust bindings to the message-passing
//! C API of the OPAL telephony library. The bindings follow `bindgen`'s
//! dynamic-library output, loaded at runtime through `libloading`.
//!
//! ## Overview
//!
//! `opal-sys` exposes:
//! - Opaque C types (`Handle`, `Message`)
//! - The five entry points (`OpalInitialise`, `OpalShutDown`, `OpalGetMessage`,
//!   `OpalSendMessage`, `OpalFreeMessage`) as the [`libopal`] function table,
//!   renamed to snake_case (`initialise`, `shut_down`, ...)
//! - Constants for the API version, entry point names, protocol prefixes,
//!   event packages and call-end reasons
//!
//! ## Usage
//!
//! **Most users should NOT use this crate directly.** Use the safe [`opal`] wrapper
//! crate instead, which provides:
//! - Exactly-once shutdown and message release via RAII types
//! - Rust-idiomatic error handling with `Result`
//! - Typed protocol prefixes and event packages
//!
//! ## Safety
//!
//! All functions in this crate are `unsafe` and require the caller to uphold
//! OPAL's invariants:
//! - `shut_down` is called exactly once per non-null `initialise` result
//! - Every non-null message from `get_message`/`send_message` reaches
//!   `free_message` exactly once
//! - Handles and messages are never dereferenced on the Rust side
//!
//! ## Build Process
//!
//! Pre-generated bindings are checked in as `src/bindings.rs`. Enable the
//! `bindgen` feature and set `OPAL_INCLUDE_DIR` to regenerate them from a
//! local `opal.h`.
//!
//! [`opal`]: https://docs.rs/opal

// Suppress expected warnings from bindgen-generated code.
// See https://github.com/rust-lang/rust-bindgen/issues/1651.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(missing_docs)]
#![allow(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]

extern crate libloading;

#[cfg(feature = "bindgen")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(not(feature = "bindgen"))]
include!("bindings.rs");
