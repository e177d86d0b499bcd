// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! OPAL engine lifecycle and message exchange.
//!
//! This module provides [`OpalInstance`], the main entry point for talking to
//! the native engine. An instance owns one engine handle from `OpalInitialise`
//! and shuts it down exactly once.

use std::{ffi::CString, os::raw::c_uint, sync::Arc, time::Duration};

use crate::{Error, Message, Result, api::OpalApiHandle, config::InitOptions};

/// Internal shared context for an OPAL instance.
///
/// Messages hold a reference to this context, so the engine stays alive until
/// the instance and every message obtained from it are gone.
pub(crate) struct InstanceContext {
    pub(crate) api: OpalApiHandle,
    pub(crate) handle: opal_sys::Handle,
    pub(crate) version: u32,
}

// Safety: the OPAL message functions may be called from any thread for the
// same handle; the binding itself holds no mutable state.
unsafe impl Send for InstanceContext {}
unsafe impl Sync for InstanceContext {}

impl InstanceContext {
    /// Shuts the engine down now instead of on drop.
    fn shut_down(mut self) {
        let handle = std::mem::replace(&mut self.handle, std::ptr::null_mut());
        tracing::debug!("Shutting down OPAL instance (API version {})", self.version);
        unsafe { self.api.shut_down(handle) };
    }
}

impl Drop for InstanceContext {
    /// Shuts the engine down when the last reference is dropped.
    fn drop(&mut self) {
        if !self.handle.is_null() {
            tracing::debug!("Shutting down OPAL instance (API version {})", self.version);
            unsafe { self.api.shut_down(self.handle) };
        }
    }
}

/// Converts a timeout to the native millisecond count.
///
/// Sub-millisecond remainders are dropped and anything beyond `u32::MAX`
/// milliseconds saturates.
pub(crate) fn timeout_to_millis(timeout: Duration) -> c_uint {
    c_uint::try_from(timeout.as_millis()).unwrap_or(c_uint::MAX)
}

/// An initialised OPAL engine.
///
/// Cheap to clone and `Send + Sync`. The engine is shut down when the last
/// clone and the last [`Message`] taken from it are dropped, or explicitly via
/// [`OpalInstance::shutdown`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use opal::{Error, OpalInstance, config::get_opal_library_path, load_api};
///
/// # fn main() -> Result<(), opal::Error> {
/// let api = load_api(get_opal_library_path())?;
/// let instance = OpalInstance::initialise(api, opal::API_VERSION, "pc sip")?;
///
/// match instance.get_message(Duration::from_millis(500)) {
///     Ok(message) => println!("Got {:?}", message),
///     Err(Error::NoMessage) => println!("Nothing yet"),
///     Err(err) => return Err(err),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OpalInstance {
    context: Arc<InstanceContext>,
}

impl OpalInstance {
    /// Initialises the engine, requesting API `version`.
    ///
    /// The engine may lower the version in place when it only supports an
    /// older API; the negotiated value is available from [`Self::version`].
    ///
    /// # Arguments
    ///
    /// * `api` - Native entry points (from [`crate::load_api`])
    /// * `version` - Requested C API version, usually [`crate::API_VERSION`]
    /// * `options` - Native options string (see [`InitOptions`])
    ///
    /// # Errors
    ///
    /// - [`Error::InitialiseFailed`] if the engine returned a null handle
    /// - [`Error::NulString`] if `options` contains a NUL byte
    pub fn initialise(api: OpalApiHandle, version: u32, options: &str) -> Result<Self> {
        let options = CString::new(options)?;
        let mut negotiated: c_uint = version;
        let handle = unsafe { api.initialise(&mut negotiated, options.as_ptr()) };
        if handle.is_null() {
            return Err(Error::InitialiseFailed {
                requested: version,
                negotiated,
            });
        }

        if negotiated != version {
            tracing::info!(
                "OPAL engine downgraded API version from {} to {}",
                version,
                negotiated
            );
        }
        tracing::debug!(
            "Initialised OPAL instance (API version {}, options {:?})",
            negotiated,
            options
        );

        let context = Arc::new(InstanceContext {
            api,
            handle,
            version: negotiated,
        });
        Ok(Self { context })
    }

    /// Initialises the engine at [`crate::API_VERSION`] with structured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] before calling the engine if the
    /// options cannot be rendered, otherwise as [`Self::initialise`].
    pub fn with_options(api: OpalApiHandle, options: &InitOptions) -> Result<Self> {
        Self::initialise(api, crate::API_VERSION, &options.to_options_string()?)
    }

    /// Returns the API version agreed with the engine.
    pub fn version(&self) -> u32 {
        self.context.version
    }

    /// Returns the raw engine handle for calls this crate does not wrap.
    ///
    /// The handle stays owned by this instance and must not be shut down.
    pub fn as_raw(&self) -> opal_sys::Handle {
        self.context.handle
    }

    /// Waits up to `timeout` for the next message from the engine.
    ///
    /// A zero timeout polls without blocking. Any blocking happens inside the
    /// engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMessage`] if the engine returned nothing. This
    /// covers both an expired timeout and an engine failure.
    pub fn get_message(&self, timeout: Duration) -> Result<Message> {
        let message = unsafe {
            self.context
                .api
                .get_message(self.context.handle, timeout_to_millis(timeout))
        };
        if message.is_null() {
            return Err(Error::NoMessage);
        }
        tracing::trace!("Received OPAL message {:p}", message);
        Ok(Message::new(self.context.clone(), message))
    }

    /// Sends a message the binding already owns and returns the response.
    ///
    /// `message` is only borrowed and remains owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SendFailed`] if the engine returned no response.
    pub fn send_message(&self, message: &Message) -> Result<Message> {
        unsafe { self.send_message_raw(message.as_ptr()) }
    }

    /// Sends a caller-built message and returns the response.
    ///
    /// # Safety
    ///
    /// `message` must point to a valid message laid out as the engine's
    /// `OpalMessage` and stay valid for the duration of the call. It is not
    /// freed by this function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SendFailed`] if the engine returned no response.
    pub unsafe fn send_message_raw(&self, message: *const opal_sys::Message) -> Result<Message> {
        let response = unsafe { self.context.api.send_message(self.context.handle, message) };
        if response.is_null() {
            return Err(Error::SendFailed);
        }
        tracing::trace!("Sent OPAL message {:p}, response {:p}", message, response);
        Ok(Message::new(self.context.clone(), response))
    }

    /// Shuts the engine down now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InstanceInUse`] if clones of this instance or messages
    /// obtained from it are still alive. The engine keeps running in that
    /// case and is shut down once the last of them is dropped.
    pub fn shutdown(self) -> Result<()> {
        let context = Arc::into_inner(self.context).ok_or(Error::InstanceInUse)?;
        context.shut_down();
        Ok(())
    }

    pub(crate) fn context(&self) -> &Arc<InstanceContext> {
        &self.context
    }
}

impl std::fmt::Debug for OpalInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpalInstance")
            .field("handle", &self.context.handle)
            .field("version", &self.context.version)
            .finish()
    }
}
