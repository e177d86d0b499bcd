// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Simple smoke tests for the generated bindings.

/// Verifies that the entry point names match the symbols the loader resolves.
#[test]
fn function_name_constants_match_symbols() {
    assert_eq!(as_str(opal_sys::OPAL_INITIALISE_FUNCTION), "OpalInitialise");
    assert_eq!(as_str(opal_sys::OPAL_SHUTDOWN_FUNCTION), "OpalShutDown");
    assert_eq!(as_str(opal_sys::OPAL_GET_MESSAGE_FUNCTION), "OpalGetMessage");
    assert_eq!(as_str(opal_sys::OPAL_SEND_MESSAGE_FUNCTION), "OpalSendMessage");
    assert_eq!(as_str(opal_sys::OPAL_FREE_MESSAGE_FUNCTION), "OpalFreeMessage");
}

/// Verifies that the "all" prefix list is made of the individual prefixes.
#[test]
fn all_prefixes_are_listed() {
    let all = as_str(opal_sys::OPAL_PREFIX_ALL);
    for prefix in [
        opal_sys::OPAL_PREFIX_SIP,
        opal_sys::OPAL_PREFIX_H323,
        opal_sys::OPAL_PREFIX_IAX2,
        opal_sys::OPAL_PREFIX_PCSS,
    ] {
        assert!(all.split(' ').any(|p| p == as_str(prefix)));
    }
}

/// Loading a library that does not exist is reported, not a crash.
#[test]
fn loading_missing_library_fails() {
    let result = unsafe { opal_sys::libopal::new("/nonexistent/libopal.so") };
    assert!(result.is_err());
}

/// The opaque types carry no data.
#[cfg(not(feature = "bindgen"))]
#[test]
fn opaque_types_are_zero_sized() {
    assert_eq!(std::mem::size_of::<opal_sys::Message>(), 0);
    assert_eq!(std::mem::size_of::<opal_sys::HandleStruct>(), 0);
}

/// The Q.931 marker sits above the cause byte.
#[test]
fn q931_code_marker() {
    assert_eq!(opal_sys::OpalCallEndedWithQ931Code, 0x100);
}

fn as_str(s: &'static std::ffi::CStr) -> &'static str {
    s.to_str().unwrap()
}
