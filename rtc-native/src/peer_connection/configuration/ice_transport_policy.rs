use std::fmt;

use serde::{Deserialize, Serialize};

/// ICE transport policy controlling which candidate types are used for
/// connectivity.
///
/// Discriminants follow the native engine's enum. The engine's value 2
/// ("no host") has no W3C counterpart and is not exposed.
///
/// ## Specifications
///
/// * [W3C RTCIceTransportPolicy](https://w3c.github.io/webrtc-pc/#rtcicetransportpolicy-enum)
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[repr(i32)]
pub enum RTCIceTransportPolicy {
    /// No candidates are gathered or used.
    #[serde(rename = "none")]
    None = 0,

    /// Only use relay candidates from TURN servers; hides local and public
    /// addresses from the remote peer.
    #[serde(rename = "relay")]
    Relay = 1,

    /// Use all types of ICE candidates.
    #[default]
    #[serde(rename = "all")]
    All = 3,
}

const ICE_TRANSPORT_POLICY_NONE_STR: &str = "none";
const ICE_TRANSPORT_POLICY_RELAY_STR: &str = "relay";
const ICE_TRANSPORT_POLICY_ALL_STR: &str = "all";

impl RTCIceTransportPolicy {
    /// Parses a W3C policy name. Unknown names yield `None`.
    pub fn from_name(raw: &str) -> Option<Self> {
        match raw {
            ICE_TRANSPORT_POLICY_NONE_STR => Some(RTCIceTransportPolicy::None),
            ICE_TRANSPORT_POLICY_RELAY_STR => Some(RTCIceTransportPolicy::Relay),
            ICE_TRANSPORT_POLICY_ALL_STR => Some(RTCIceTransportPolicy::All),
            _ => None,
        }
    }
}

impl From<RTCIceTransportPolicy> for i32 {
    fn from(policy: RTCIceTransportPolicy) -> Self {
        policy as i32
    }
}

impl fmt::Display for RTCIceTransportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCIceTransportPolicy::None => ICE_TRANSPORT_POLICY_NONE_STR,
            RTCIceTransportPolicy::Relay => ICE_TRANSPORT_POLICY_RELAY_STR,
            RTCIceTransportPolicy::All => ICE_TRANSPORT_POLICY_ALL_STR,
        };
        write!(f, "{s}")
    }
}
