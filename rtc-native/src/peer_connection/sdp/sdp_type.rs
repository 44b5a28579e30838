use std::fmt;

use serde::{Deserialize, Serialize};

/// Describes the type of a session description in the SDP offer/answer model.
///
/// ```
/// use rtc_native::peer_connection::sdp::RTCSdpType;
///
/// let parsed: RTCSdpType = "pranswer".into();
/// assert_eq!(parsed, RTCSdpType::Pranswer);
/// assert_eq!(RTCSdpType::Offer.to_string(), "offer");
/// ```
///
/// # Specifications
///
/// - [W3C RTCSessionDescription.type](https://w3c.github.io/webrtc-pc/#dom-rtcsessiondescription-type)
/// - [RFC 3264](https://datatracker.ietf.org/doc/html/rfc3264) - Offer/Answer Model
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum RTCSdpType {
    /// Type not specified. Never produced by the native engine and never
    /// accepted by it.
    #[default]
    Unspecified = 0,

    /// Indicates that a description MUST be treated as an SDP offer.
    #[serde(rename = "offer")]
    Offer,

    /// Indicates that a description MUST be treated as a provisional SDP
    /// answer, which may be followed by further pranswers or a final answer.
    #[serde(rename = "pranswer")]
    Pranswer,

    /// Indicates that a description MUST be treated as a final SDP answer.
    #[serde(rename = "answer")]
    Answer,
}

const SDP_TYPE_OFFER_STR: &str = "offer";
const SDP_TYPE_PRANSWER_STR: &str = "pranswer";
const SDP_TYPE_ANSWER_STR: &str = "answer";
const SDP_TYPE_UNSPECIFIED_STR: &str = "Unspecified";

/// creates an SDPType from a string
impl From<&str> for RTCSdpType {
    fn from(raw: &str) -> Self {
        match raw {
            SDP_TYPE_OFFER_STR => RTCSdpType::Offer,
            SDP_TYPE_PRANSWER_STR => RTCSdpType::Pranswer,
            SDP_TYPE_ANSWER_STR => RTCSdpType::Answer,
            _ => RTCSdpType::Unspecified,
        }
    }
}

impl fmt::Display for RTCSdpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCSdpType::Offer => SDP_TYPE_OFFER_STR,
            RTCSdpType::Pranswer => SDP_TYPE_PRANSWER_STR,
            RTCSdpType::Answer => SDP_TYPE_ANSWER_STR,
            RTCSdpType::Unspecified => SDP_TYPE_UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
