// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Loading of the OPAL dynamic library.
//!
//! The five native entry points are reached through the [`OpalApi`] trait.
//! [`load_api`] resolves them from a shared library with `libloading`; any
//! other implementation (an in-process stub in tests, for instance) can be
//! handed to [`crate::OpalInstance::initialise`] the same way.

use std::{
    ffi::OsStr,
    os::raw::{c_char, c_uint},
    sync::Arc,
};

use crate::Result;

/// The native message-passing entry points.
///
/// Each method forwards its arguments unchanged and returns exactly what the
/// engine returned. Implementations must not lock, buffer or reorder calls.
///
/// # Safety
///
/// All methods share the contract of the C functions they stand for: handles
/// and messages must come from the same implementation, a handle is shut down
/// once, and a message is freed once.
pub trait OpalApi: Send + Sync {
    /// `OpalInitialise`: `version` is in/out, null result on failure.
    unsafe fn initialise(&self, version: *mut c_uint, options: *const c_char) -> opal_sys::Handle;

    /// `OpalShutDown`.
    unsafe fn shut_down(&self, handle: opal_sys::Handle);

    /// `OpalGetMessage`: blocks up to `timeout` milliseconds, null on timeout or failure.
    unsafe fn get_message(
        &self,
        handle: opal_sys::Handle,
        timeout: c_uint,
    ) -> *mut opal_sys::Message;

    /// `OpalSendMessage`: returns the response, null on failure.
    unsafe fn send_message(
        &self,
        handle: opal_sys::Handle,
        message: *const opal_sys::Message,
    ) -> *mut opal_sys::Message;

    /// `OpalFreeMessage`.
    unsafe fn free_message(&self, message: *mut opal_sys::Message);
}

impl OpalApi for opal_sys::libopal {
    unsafe fn initialise(&self, version: *mut c_uint, options: *const c_char) -> opal_sys::Handle {
        unsafe { opal_sys::libopal::initialise(self, version, options) }
    }

    unsafe fn shut_down(&self, handle: opal_sys::Handle) {
        unsafe { opal_sys::libopal::shut_down(self, handle) }
    }

    unsafe fn get_message(
        &self,
        handle: opal_sys::Handle,
        timeout: c_uint,
    ) -> *mut opal_sys::Message {
        unsafe { opal_sys::libopal::get_message(self, handle, timeout) }
    }

    unsafe fn send_message(
        &self,
        handle: opal_sys::Handle,
        message: *const opal_sys::Message,
    ) -> *mut opal_sys::Message {
        unsafe { opal_sys::libopal::send_message(self, handle, message) }
    }

    unsafe fn free_message(&self, message: *mut opal_sys::Message) {
        unsafe { opal_sys::libopal::free_message(self, message) }
    }
}

/// Shared handle to a set of native entry points.
pub type OpalApiHandle = Arc<dyn OpalApi>;

/// Loads the OPAL shared library and resolves all five entry points.
///
/// # Errors
///
/// Returns [`crate::Error::LibLoading`] if the library cannot be opened or
/// one of the symbols is missing.
///
/// # Examples
///
/// ```no_run
/// use opal::{config::get_opal_library_path, load_api};
///
/// # fn main() -> Result<(), opal::Error> {
/// let api = load_api(get_opal_library_path())?;
/// # Ok(())
/// # }
/// ```
pub fn load_api<P: AsRef<OsStr>>(path: P) -> Result<OpalApiHandle> {
    let path = path.as_ref();
    // Safety: loading runs the library's initialisers; OPAL has no
    // load-time preconditions beyond being a genuine OPAL build.
    let api = unsafe { opal_sys::libopal::new(path)? };
    tracing::debug!("Loaded OPAL library from {:?}", path);
    Ok(Arc::new(api))
}
