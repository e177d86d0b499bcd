// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Owned engine messages.

use std::sync::Arc;

use crate::{Error, OpalInstance, Result, instance::InstanceContext};

/// A message produced by the engine, from [`OpalInstance::get_message`] or as
/// the response of [`OpalInstance::send_message`].
///
/// The message is opaque: its contents are defined by the engine and never
/// read here. It is released with `OpalFreeMessage` exactly once, when
/// dropped or through [`Message::free`]. A message keeps its engine alive.
///
/// # Thread Safety
///
/// `Message` is `Send` but not `Sync`.
pub struct Message {
    context: Arc<InstanceContext>,
    message: *mut opal_sys::Message,
}

// Safety: a message is exclusively owned and may be freed from any thread.
unsafe impl Send for Message {}

impl Message {
    /// Wraps a non-null message returned by the engine (internal use only).
    pub(crate) fn new(context: Arc<InstanceContext>, message: *mut opal_sys::Message) -> Self {
        Self { context, message }
    }

    /// Takes ownership of a raw message, e.g. one previously released with
    /// [`Message::into_raw`].
    ///
    /// # Safety
    ///
    /// `message` must have been returned by the engine behind `instance` and
    /// must not be freed by anyone else afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if `message` is null.
    pub unsafe fn from_raw(instance: &OpalInstance, message: *mut opal_sys::Message) -> Result<Self> {
        if message.is_null() {
            return Err(Error::Other("Cannot take ownership of a null message.".to_string()));
        }
        Ok(Self::new(instance.context().clone(), message))
    }

    /// Returns the raw pointer without giving up ownership.
    pub fn as_ptr(&self) -> *const opal_sys::Message {
        self.message
    }

    /// Gives up ownership; the caller becomes responsible for freeing the
    /// message with `OpalFreeMessage`.
    pub fn into_raw(mut self) -> *mut opal_sys::Message {
        std::mem::replace(&mut self.message, std::ptr::null_mut())
    }

    /// Frees the message now instead of on drop.
    pub fn free(self) {
        drop(self);
    }

    /// Releases the pointer, leaving null behind so it is freed at most once.
    fn free_inner(&mut self) {
        let message = std::mem::replace(&mut self.message, std::ptr::null_mut());
        if message.is_null() {
            return;
        }
        tracing::trace!("Freeing OPAL message {:p}", message);
        unsafe { self.context.api.free_message(message) };
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Message").field(&self.message).finish()
    }
}

impl Drop for Message {
    fn drop(&mut self) {
        self.free_inner();
    }
}
