// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Typed views of the constant table in `opal.h`.
//!
//! Every value here comes straight from [`opal_sys`] and is fixed at compile
//! time, so repeated reads always agree.

use std::{ffi::CStr, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The C API version these bindings were generated against.
///
/// Pass it to [`crate::OpalInstance::initialise`]; the engine lowers it when
/// it is older.
pub const API_VERSION: u32 = opal_sys::OPAL_C_API_VERSION;

/// Names of the native entry points, as exported by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    Initialise,
    ShutDown,
    GetMessage,
    SendMessage,
    FreeMessage,
}

impl FunctionName {
    /// All entry points, in lifecycle order.
    pub const VARIANTS: [FunctionName; 5] = [
        FunctionName::Initialise,
        FunctionName::ShutDown,
        FunctionName::GetMessage,
        FunctionName::SendMessage,
        FunctionName::FreeMessage,
    ];

    /// Returns the exported symbol name.
    pub fn symbol(self) -> &'static CStr {
        match self {
            FunctionName::Initialise => opal_sys::OPAL_INITIALISE_FUNCTION,
            FunctionName::ShutDown => opal_sys::OPAL_SHUTDOWN_FUNCTION,
            FunctionName::GetMessage => opal_sys::OPAL_GET_MESSAGE_FUNCTION,
            FunctionName::SendMessage => opal_sys::OPAL_SEND_MESSAGE_FUNCTION,
            FunctionName::FreeMessage => opal_sys::OPAL_FREE_MESSAGE_FUNCTION,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FunctionName::Initialise => "OpalInitialise",
            FunctionName::ShutDown => "OpalShutDown",
            FunctionName::GetMessage => "OpalGetMessage",
            FunctionName::SendMessage => "OpalSendMessage",
            FunctionName::FreeMessage => "OpalFreeMessage",
        }
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint type prefixes recognised by the engine.
///
/// A prefix both selects which endpoints are created at initialise time and
/// starts a party address (`sip:alice@example.com`, `pc:*`).
///
/// Serialised as the native string, e.g. `"pc"` for [`Prefix::Pcss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Prefix {
    /// H.323.
    H323,
    /// SIP.
    Sip,
    /// IAX2.
    Iax2,
    /// PC sound system (local audio devices).
    Pcss,
    /// Local endpoint driven by the application.
    Local,
    /// Analogue line interface, subscriber side.
    Pots,
    /// Analogue line interface, network side.
    Pstn,
    /// ISDN via CAPI.
    Capi,
    /// T.30 fax.
    Fax,
    /// T.38 fax.
    T38,
    /// Interactive voice response.
    Ivr,
    /// Conference mixer.
    Mixer,
    /// Instant messaging.
    Im,
    /// GStreamer media.
    Gst,
    /// Skinny (SCCP).
    Skinny,
}

impl Prefix {
    /// All known prefixes.
    pub const VARIANTS: [Prefix; 15] = [
        Prefix::H323,
        Prefix::Sip,
        Prefix::Iax2,
        Prefix::Pcss,
        Prefix::Local,
        Prefix::Pots,
        Prefix::Pstn,
        Prefix::Capi,
        Prefix::Fax,
        Prefix::T38,
        Prefix::Ivr,
        Prefix::Mixer,
        Prefix::Im,
        Prefix::Gst,
        Prefix::Skinny,
    ];

    /// The native "all endpoints" option string, space separated.
    pub const ALL: &'static CStr = opal_sys::OPAL_PREFIX_ALL;

    pub fn iter() -> impl Iterator<Item = Prefix> {
        Self::VARIANTS.into_iter()
    }

    pub fn as_cstr(self) -> &'static CStr {
        match self {
            Prefix::H323 => opal_sys::OPAL_PREFIX_H323,
            Prefix::Sip => opal_sys::OPAL_PREFIX_SIP,
            Prefix::Iax2 => opal_sys::OPAL_PREFIX_IAX2,
            Prefix::Pcss => opal_sys::OPAL_PREFIX_PCSS,
            Prefix::Local => opal_sys::OPAL_PREFIX_LOCAL,
            Prefix::Pots => opal_sys::OPAL_PREFIX_POTS,
            Prefix::Pstn => opal_sys::OPAL_PREFIX_PSTN,
            Prefix::Capi => opal_sys::OPAL_PREFIX_CAPI,
            Prefix::Fax => opal_sys::OPAL_PREFIX_FAX,
            Prefix::T38 => opal_sys::OPAL_PREFIX_T38,
            Prefix::Ivr => opal_sys::OPAL_PREFIX_IVR,
            Prefix::Mixer => opal_sys::OPAL_PREFIX_MIXER,
            Prefix::Im => opal_sys::OPAL_PREFIX_IM,
            Prefix::Gst => opal_sys::OPAL_PREFIX_GST,
            Prefix::Skinny => opal_sys::OPAL_PREFIX_SKINNY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::H323 => "h323",
            Prefix::Sip => "sip",
            Prefix::Iax2 => "iax2",
            Prefix::Pcss => "pc",
            Prefix::Local => "local",
            Prefix::Pots => "pots",
            Prefix::Pstn => "pstn",
            Prefix::Capi => "isdn",
            Prefix::Fax => "fax",
            Prefix::T38 => "t38",
            Prefix::Ivr => "ivr",
            Prefix::Mixer => "mcu",
            Prefix::Im => "im",
            Prefix::Gst => "gst",
            Prefix::Skinny => "sccp",
        }
    }

    /// Returns the native "all endpoints" string.
    pub fn all_str() -> &'static str {
        "sip h323 iax2 pc local pots pstn isdn fax t38 ivr mcu im gst sccp"
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = Error;

    /// Parses a native prefix string, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::iter()
            .find(|prefix| prefix.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPrefix(s.to_string()))
    }
}

impl TryFrom<String> for Prefix {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Prefix> for String {
    fn from(value: Prefix) -> Self {
        value.as_str().to_string()
    }
}

/// Event packages the engine can subscribe to or emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventPackage {
    /// Message waiting indication.
    MessageWaiting,
    /// Shared line appearance.
    LineAppearance,
}

impl EventPackage {
    pub fn as_cstr(self) -> &'static CStr {
        match self {
            EventPackage::MessageWaiting => opal_sys::OPAL_MWI_EVENT_PACKAGE,
            EventPackage::LineAppearance => opal_sys::OPAL_LINE_APPEARANCE_EVENT_PACKAGE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventPackage::MessageWaiting => "message-summary",
            EventPackage::LineAppearance => "dialog;sla;ma",
        }
    }
}

impl fmt::Display for EventPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a call ended, as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallEndReason {
    LocalUser,
    NoAccept,
    AnswerDenied,
    RemoteUser,
    Refusal,
    NoAnswer,
    CallerAbort,
    TransportFail,
    ConnectFail,
    Gatekeeper,
    NoUser,
    NoBandwidth,
    CapabilityExchange,
    CallForwarded,
    SecurityDenial,
    LocalBusy,
    LocalCongestion,
    RemoteBusy,
    RemoteCongestion,
    Unreachable,
    NoEndPoint,
    HostOffline,
    TemporaryFailure,
    Q931Cause,
    DurationLimit,
    InvalidConferenceId,
    NoDialTone,
    NoRingBackTone,
    OutOfService,
    AcceptingCallWaiting,
    /// Ended with a specific Q.931 cause code.
    WithQ931Code(u8),
}

impl CallEndReason {
    /// Decodes a native `OpalCallEndReason` value.
    ///
    /// Values with [`opal_sys::OpalCallEndedWithQ931Code`] in the upper bits
    /// carry a Q.931 cause code in the low byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCallEndReason`] for values outside the table.
    pub fn from_raw(value: opal_sys::CallEndReason) -> Result<Self> {
        if value & !0xff == opal_sys::OpalCallEndedWithQ931Code {
            return Ok(CallEndReason::WithQ931Code((value & 0xff) as u8));
        }

        Ok(match value {
            opal_sys::OpalCallEndedByLocalUser => CallEndReason::LocalUser,
            opal_sys::OpalCallEndedByNoAccept => CallEndReason::NoAccept,
            opal_sys::OpalCallEndedByAnswerDenied => CallEndReason::AnswerDenied,
            opal_sys::OpalCallEndedByRemoteUser => CallEndReason::RemoteUser,
            opal_sys::OpalCallEndedByRefusal => CallEndReason::Refusal,
            opal_sys::OpalCallEndedByNoAnswer => CallEndReason::NoAnswer,
            opal_sys::OpalCallEndedByCallerAbort => CallEndReason::CallerAbort,
            opal_sys::OpalCallEndedByTransportFail => CallEndReason::TransportFail,
            opal_sys::OpalCallEndedByConnectFail => CallEndReason::ConnectFail,
            opal_sys::OpalCallEndedByGatekeeper => CallEndReason::Gatekeeper,
            opal_sys::OpalCallEndedByNoUser => CallEndReason::NoUser,
            opal_sys::OpalCallEndedByNoBandwidth => CallEndReason::NoBandwidth,
            opal_sys::OpalCallEndedByCapabilityExchange => CallEndReason::CapabilityExchange,
            opal_sys::OpalCallEndedByCallForwarded => CallEndReason::CallForwarded,
            opal_sys::OpalCallEndedBySecurityDenial => CallEndReason::SecurityDenial,
            opal_sys::OpalCallEndedByLocalBusy => CallEndReason::LocalBusy,
            opal_sys::OpalCallEndedByLocalCongestion => CallEndReason::LocalCongestion,
            opal_sys::OpalCallEndedByRemoteBusy => CallEndReason::RemoteBusy,
            opal_sys::OpalCallEndedByRemoteCongestion => CallEndReason::RemoteCongestion,
            opal_sys::OpalCallEndedByUnreachable => CallEndReason::Unreachable,
            opal_sys::OpalCallEndedByNoEndPoint => CallEndReason::NoEndPoint,
            opal_sys::OpalCallEndedByHostOffline => CallEndReason::HostOffline,
            opal_sys::OpalCallEndedByTemporaryFailure => CallEndReason::TemporaryFailure,
            opal_sys::OpalCallEndedByQ931Cause => CallEndReason::Q931Cause,
            opal_sys::OpalCallEndedByDurationLimit => CallEndReason::DurationLimit,
            opal_sys::OpalCallEndedByInvalidConferenceID => CallEndReason::InvalidConferenceId,
            opal_sys::OpalCallEndedByNoDialTone => CallEndReason::NoDialTone,
            opal_sys::OpalCallEndedByNoRingBackTone => CallEndReason::NoRingBackTone,
            opal_sys::OpalCallEndedByOutOfService => CallEndReason::OutOfService,
            opal_sys::OpalCallEndedByAcceptingCallWaiting => CallEndReason::AcceptingCallWaiting,
            other => return Err(Error::UnknownCallEndReason(other)),
        })
    }

    /// Encodes back to the native value.
    pub fn as_raw(self) -> opal_sys::CallEndReason {
        match self {
            CallEndReason::LocalUser => opal_sys::OpalCallEndedByLocalUser,
            CallEndReason::NoAccept => opal_sys::OpalCallEndedByNoAccept,
            CallEndReason::AnswerDenied => opal_sys::OpalCallEndedByAnswerDenied,
            CallEndReason::RemoteUser => opal_sys::OpalCallEndedByRemoteUser,
            CallEndReason::Refusal => opal_sys::OpalCallEndedByRefusal,
            CallEndReason::NoAnswer => opal_sys::OpalCallEndedByNoAnswer,
            CallEndReason::CallerAbort => opal_sys::OpalCallEndedByCallerAbort,
            CallEndReason::TransportFail => opal_sys::OpalCallEndedByTransportFail,
            CallEndReason::ConnectFail => opal_sys::OpalCallEndedByConnectFail,
            CallEndReason::Gatekeeper => opal_sys::OpalCallEndedByGatekeeper,
            CallEndReason::NoUser => opal_sys::OpalCallEndedByNoUser,
            CallEndReason::NoBandwidth => opal_sys::OpalCallEndedByNoBandwidth,
            CallEndReason::CapabilityExchange => opal_sys::OpalCallEndedByCapabilityExchange,
            CallEndReason::CallForwarded => opal_sys::OpalCallEndedByCallForwarded,
            CallEndReason::SecurityDenial => opal_sys::OpalCallEndedBySecurityDenial,
            CallEndReason::LocalBusy => opal_sys::OpalCallEndedByLocalBusy,
            CallEndReason::LocalCongestion => opal_sys::OpalCallEndedByLocalCongestion,
            CallEndReason::RemoteBusy => opal_sys::OpalCallEndedByRemoteBusy,
            CallEndReason::RemoteCongestion => opal_sys::OpalCallEndedByRemoteCongestion,
            CallEndReason::Unreachable => opal_sys::OpalCallEndedByUnreachable,
            CallEndReason::NoEndPoint => opal_sys::OpalCallEndedByNoEndPoint,
            CallEndReason::HostOffline => opal_sys::OpalCallEndedByHostOffline,
            CallEndReason::TemporaryFailure => opal_sys::OpalCallEndedByTemporaryFailure,
            CallEndReason::Q931Cause => opal_sys::OpalCallEndedByQ931Cause,
            CallEndReason::DurationLimit => opal_sys::OpalCallEndedByDurationLimit,
            CallEndReason::InvalidConferenceId => opal_sys::OpalCallEndedByInvalidConferenceID,
            CallEndReason::NoDialTone => opal_sys::OpalCallEndedByNoDialTone,
            CallEndReason::NoRingBackTone => opal_sys::OpalCallEndedByNoRingBackTone,
            CallEndReason::OutOfService => opal_sys::OpalCallEndedByOutOfService,
            CallEndReason::AcceptingCallWaiting => opal_sys::OpalCallEndedByAcceptingCallWaiting,
            CallEndReason::WithQ931Code(cause) => {
                opal_sys::OpalCallEndedWithQ931Code | opal_sys::CallEndReason::from(cause)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_strings_match_header() {
        assert_eq!(Prefix::Sip.as_str(), "sip");
        assert_eq!(Prefix::H323.as_str(), "h323");
        assert_eq!(Prefix::Iax2.as_str(), "iax2");
        assert_eq!(Prefix::Pcss.as_str(), "pc");
        assert_eq!(Prefix::Skinny.to_string(), "sccp");
    }

    #[test]
    fn string_views_agree_with_header_constants() {
        for function in FunctionName::VARIANTS {
            assert_eq!(function.symbol().to_str().unwrap(), function.as_str());
        }
        for prefix in Prefix::iter() {
            assert_eq!(prefix.as_cstr().to_str().unwrap(), prefix.as_str());
        }
        assert_eq!(Prefix::ALL.to_str().unwrap(), Prefix::all_str());
        for package in [EventPackage::MessageWaiting, EventPackage::LineAppearance] {
            assert_eq!(package.as_cstr().to_str().unwrap(), package.as_str());
        }
    }

    #[test]
    fn prefix_parses_case_insensitively() {
        assert_eq!("SIP".parse::<Prefix>().unwrap(), Prefix::Sip);
        assert_eq!("mcu".parse::<Prefix>().unwrap(), Prefix::Mixer);
        assert!(matches!(
            "xmpp".parse::<Prefix>(),
            Err(Error::UnknownPrefix(name)) if name == "xmpp"
        ));
    }

    #[test]
    fn every_prefix_is_in_the_all_list() {
        let all: Vec<&str> = Prefix::all_str().split(' ').collect();
        for prefix in Prefix::iter() {
            assert!(all.contains(&prefix.as_str()), "{prefix} missing from ALL");
        }
    }

    #[test]
    fn constant_reads_are_stable() {
        for prefix in Prefix::iter() {
            assert_eq!(prefix.as_str(), prefix.as_str());
            assert_eq!(prefix.as_cstr().as_ptr(), prefix.as_cstr().as_ptr());
        }
        assert_eq!(API_VERSION, opal_sys::OPAL_C_API_VERSION);
        assert_eq!(
            EventPackage::MessageWaiting.as_str(),
            EventPackage::MessageWaiting.as_str()
        );
    }

    #[test]
    fn function_names_are_exported_symbols() {
        let names: Vec<&str> = FunctionName::VARIANTS.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            [
                "OpalInitialise",
                "OpalShutDown",
                "OpalGetMessage",
                "OpalSendMessage",
                "OpalFreeMessage"
            ]
        );
    }

    #[test]
    fn event_packages() {
        assert_eq!(EventPackage::MessageWaiting.as_str(), "message-summary");
        assert_eq!(EventPackage::LineAppearance.as_str(), "dialog;sla;ma");
    }

    #[test]
    fn call_end_reason_table() {
        assert_eq!(CallEndReason::from_raw(0).unwrap(), CallEndReason::LocalUser);
        assert_eq!(
            CallEndReason::from_raw(17).unwrap(),
            CallEndReason::RemoteBusy
        );
        assert_eq!(CallEndReason::AcceptingCallWaiting.as_raw(), 29);
        for raw in 0..=29 {
            assert_eq!(CallEndReason::from_raw(raw).unwrap().as_raw(), raw);
        }
        assert!(matches!(
            CallEndReason::from_raw(30),
            Err(Error::UnknownCallEndReason(30))
        ));
    }

    #[test]
    fn q931_cause_lives_in_the_low_byte() {
        let raw = opal_sys::OpalCallEndedWithQ931Code | 34;
        assert_eq!(
            CallEndReason::from_raw(raw).unwrap(),
            CallEndReason::WithQ931Code(34)
        );
        assert_eq!(CallEndReason::WithQ931Code(34).as_raw(), raw);
    }

    #[test]
    fn prefix_serde_uses_native_strings() {
        let json = serde_json::to_string(&Prefix::Pcss).unwrap();
        assert_eq!(json, "\"pc\"");
        let prefix: Prefix = serde_json::from_str("\"h323\"").unwrap();
        assert_eq!(prefix, Prefix::H323);
        assert!(serde_json::from_str::<Prefix>("\"nope\"").is_err());
    }
}
