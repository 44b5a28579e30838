use std::fmt;

use serde::{Deserialize, Serialize};

/// Media bundling policy for ICE candidate gathering and transport usage.
///
/// Bundle policy determines how media tracks are multiplexed onto ICE transports
/// when the remote endpoint may or may not support bundling.
///
/// The discriminants are the native engine's own numeric values and are
/// passed across the boundary unchanged, so they must never be reordered.
///
/// ## Specifications
///
/// * [W3C RTCBundlePolicy](https://w3c.github.io/webrtc-pc/#rtcbundlepolicy-enum)
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[repr(i32)]
pub enum RTCBundlePolicy {
    /// Gather ICE candidates for each media type in use (audio, video, and
    /// data). If the remote endpoint is not bundle-aware, negotiate only one
    /// audio and video track on separate transports.
    #[default]
    #[serde(rename = "balanced")]
    Balanced = 0,

    /// Gather ICE candidates for only one track. If the remote endpoint is
    /// not bundle-aware, negotiate only one media track.
    #[serde(rename = "max-bundle")]
    MaxBundle = 1,

    /// Gather ICE candidates for each track. If the remote endpoint is not
    /// bundle-aware, negotiate all media tracks on separate transports.
    #[serde(rename = "max-compat")]
    MaxCompat = 2,
}

const BUNDLE_POLICY_BALANCED_STR: &str = "balanced";
const BUNDLE_POLICY_MAX_COMPAT_STR: &str = "max-compat";
const BUNDLE_POLICY_MAX_BUNDLE_STR: &str = "max-bundle";

impl RTCBundlePolicy {
    /// Parses a W3C policy name. Unknown names yield `None`.
    pub fn from_name(raw: &str) -> Option<Self> {
        match raw {
            BUNDLE_POLICY_BALANCED_STR => Some(RTCBundlePolicy::Balanced),
            BUNDLE_POLICY_MAX_COMPAT_STR => Some(RTCBundlePolicy::MaxCompat),
            BUNDLE_POLICY_MAX_BUNDLE_STR => Some(RTCBundlePolicy::MaxBundle),
            _ => None,
        }
    }
}

impl From<RTCBundlePolicy> for i32 {
    fn from(policy: RTCBundlePolicy) -> Self {
        policy as i32
    }
}

impl fmt::Display for RTCBundlePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCBundlePolicy::Balanced => BUNDLE_POLICY_BALANCED_STR,
            RTCBundlePolicy::MaxCompat => BUNDLE_POLICY_MAX_COMPAT_STR,
            RTCBundlePolicy::MaxBundle => BUNDLE_POLICY_MAX_BUNDLE_STR,
        };
        write!(f, "{s}")
    }
}
