// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for OPAL operations.
//!
//! The native API signals failure only by returning a null pointer from an
//! allocating call. Each such call gets its own variant here and nothing more
//! is inferred about the cause.

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when using the OPAL API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `OpalInitialise` returned a null handle.
    ///
    /// `negotiated` is the version value as the engine left it. When it
    /// differs from `requested`, the engine only supports an older API.
    #[error("Initialise failed (requested API version {requested}, engine offered {negotiated})")]
    InitialiseFailed { requested: u32, negotiated: u32 },

    /// `OpalGetMessage` returned null.
    ///
    /// The engine does not distinguish an expired timeout from a failure, so
    /// neither does this variant. Callers polling in a loop usually treat it
    /// as "nothing yet".
    #[error("No message (timeout expired or engine failure)")]
    NoMessage,

    /// `OpalSendMessage` returned null instead of a response.
    #[error("Send failed")]
    SendFailed,

    /// Explicit shutdown was requested while clones of the instance or
    /// messages obtained from it are still alive.
    #[error("Instance is still in use")]
    InstanceInUse,

    /// The string does not name a known protocol prefix.
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// The value does not name a known call-end reason.
    #[error("Unknown call end reason: {0}")]
    UnknownCallEndReason(u32),

    /// An initialise option cannot be expressed in the space separated
    /// native options string.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// A generic error for Rust-level failures not directly mapped to OPAL.
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to convert a Rust string to a C-compatible null-terminated string.
    #[error("Null string: {0}")]
    NulString(#[from] std::ffi::NulError),

    /// Failed to load the OPAL dynamic library or resolve one of its symbols.
    #[error("Loading library: {0}")]
    LibLoading(#[from] libloading::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialise_failure_reports_both_versions() {
        let err = Error::InitialiseFailed {
            requested: 40,
            negotiated: 33,
        };
        let text = err.to_string();
        assert!(text.contains("40"));
        assert!(text.contains("33"));
    }

    #[test]
    fn nul_in_options_converts() {
        let err: Error = std::ffi::CString::new("sip\0h323").unwrap_err().into();
        assert!(matches!(err, Error::NulString(_)));
    }
}
