// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! # OPAL - Open Phone Abstraction Library
//!
//! Safe, idiomatic Rust bindings for the message-passing C API of the OPAL
//! telephony library (SIP, H.323, IAX2 and friends).
//!
//! ## Overview
//!
//! The C API is deliberately small: an engine is initialised, messages are
//! pulled from it and pushed to it, and every message the engine hands out is
//! freed again. This crate wraps the raw FFI ([`opal_sys`]) with RAII types so
//! that the "exactly once" rules are enforced by ownership.
//!
//! ### Key Concepts
//!
//! - **Instance**: one initialised engine ([`OpalInstance`])
//! - **Message**: an opaque unit of request/event/response data ([`Message`])
//! - **Prefix**: an endpoint type such as `sip` or `h323` ([`Prefix`])
//! - **Event package**: a class of asynchronous notification ([`EventPackage`])
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ OpalInstance │  (OpalInitialise / OpalShutDown)
//! └──────┬───────┘
//!        │
//!        ├─► get_message ──► Message   (OpalGetMessage)
//!        │
//!        └─► send_message ─► Message   (OpalSendMessage)
//!                              │
//!                              └─► drop / free (OpalFreeMessage)
//! ```
//!
//! ## Examples
//!
//! ### Polling the engine for events
//!
//! ```no_run
//! use std::time::Duration;
//! use opal::{Error, OpalInstance, Prefix, config::{InitOptions, get_opal_library_path}, load_api};
//!
//! # fn main() -> Result<(), opal::Error> {
//! // Load the OPAL dynamic library
//! let api = load_api(get_opal_library_path())?;
//!
//! // Create the PC sound system and SIP endpoints
//! let options = InitOptions::new().prefix(Prefix::Pcss).prefix(Prefix::Sip);
//! let instance = OpalInstance::with_options(api, &options)?;
//!
//! loop {
//!     match instance.get_message(Duration::from_secs(1)) {
//!         // Freed when `message` goes out of scope
//!         Ok(message) => println!("{:?}", message),
//!         Err(Error::NoMessage) => break,
//!         Err(err) => return Err(err),
//!     }
//! }
//!
//! instance.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! - [`OpalInstance`] is `Send + Sync` and can be shared across threads
//! - [`Message`] is `Send` but not `Sync`
//! - No locking or buffering is added on top of the native calls
//!
//! ## Feature Flags
//!
//! - `bindgen`: regenerate the raw bindings from a local `opal.h`

mod api;
mod constants;
mod error;
mod instance;
mod message;

pub mod config;

pub use api::{OpalApi, OpalApiHandle, load_api};
pub use constants::{API_VERSION, CallEndReason, EventPackage, FunctionName, Prefix};
pub use error::{Error, Result};
pub use instance::OpalInstance;
pub use message::Message;
