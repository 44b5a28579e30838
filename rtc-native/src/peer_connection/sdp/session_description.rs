use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::sdp_type::RTCSdpType;
use crate::native::NativeHandle;
use shared::error::{Error, Result};

/// Represents a session description in the SDP offer/answer model.
///
/// A description pairs the SDP text with the native engine object it was
/// serialized from. Descriptions returned by
/// [`create_offer`](crate::peer_connection::RTCPeerConnection::create_offer)
/// and [`create_answer`](crate::peer_connection::RTCPeerConnection::create_answer)
/// always carry that native handle. Descriptions built from text with
/// [`offer()`](Self::offer), [`answer()`](Self::answer) or
/// [`pranswer()`](Self::pranswer), or deserialized from JSON, carry none
/// until a peer connection asks the engine to parse them.
///
/// The value is immutable once constructed. Deserialization applies the same
/// checks as the constructors: empty text or an unspecified type is refused.
///
/// ## Signaling Exchange via JSON
///
/// ```
/// use rtc_native::peer_connection::sdp::{RTCSdpType, RTCSessionDescription};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let offer = RTCSessionDescription::offer("v=0\r\no=- 1 2 IN IP4 127.0.0.1\r\n".to_string())?;
/// let json = serde_json::to_string(&offer)?;
///
/// let received: RTCSessionDescription = serde_json::from_str(&json)?;
/// assert_eq!(received.sdp_type(), RTCSdpType::Offer);
/// assert_eq!(received.sdp(), offer.sdp());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
///
/// # Specifications
///
/// - [W3C RTCSessionDescription](https://w3c.github.io/webrtc-pc/#rtcsessiondescription-class)
/// - [RFC 8866](https://datatracker.ietf.org/doc/html/rfc8866) - SDP: Session Description Protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionDescriptionJson")]
pub struct RTCSessionDescription {
    #[serde(rename = "type")]
    sdp_type: RTCSdpType,

    sdp: String,

    #[serde(skip)]
    handle: Option<NativeHandle>,
}

/// Wire shape of [`RTCSessionDescription`], checked on conversion.
#[derive(Deserialize)]
struct SessionDescriptionJson {
    #[serde(rename = "type")]
    sdp_type: RTCSdpType,
    sdp: String,
}

impl TryFrom<SessionDescriptionJson> for RTCSessionDescription {
    type Error = Error;

    fn try_from(raw: SessionDescriptionJson) -> Result<Self> {
        RTCSessionDescription::new(raw.sdp_type, None, raw.sdp)
    }
}

impl Display for RTCSessionDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "type: {}, sdp:\n{}",
            self.sdp_type,
            self.sdp.replace("\r\n", "\n")
        )
    }
}

impl RTCSessionDescription {
    /// Creates an answer session description from SDP text.
    pub fn answer(sdp: String) -> Result<RTCSessionDescription> {
        RTCSessionDescription::new(RTCSdpType::Answer, None, sdp)
    }

    /// Creates an offer session description from SDP text.
    pub fn offer(sdp: String) -> Result<RTCSessionDescription> {
        RTCSessionDescription::new(RTCSdpType::Offer, None, sdp)
    }

    /// Creates a provisional answer session description from SDP text.
    pub fn pranswer(sdp: String) -> Result<RTCSessionDescription> {
        RTCSessionDescription::new(RTCSdpType::Pranswer, None, sdp)
    }

    /// from_native wraps a description already owned by the native engine,
    /// e.g. one produced by a signaling component that talks to the engine
    /// directly.
    pub fn from_native(
        sdp_type: RTCSdpType,
        handle: NativeHandle,
        sdp: String,
    ) -> Result<RTCSessionDescription> {
        RTCSessionDescription::new(sdp_type, Some(handle), sdp)
    }

    fn new(
        sdp_type: RTCSdpType,
        handle: Option<NativeHandle>,
        sdp: String,
    ) -> Result<RTCSessionDescription> {
        if sdp.is_empty() {
            return Err(Error::ErrInvalidArgument(
                "session description text is empty".to_owned(),
            ));
        }
        if sdp_type == RTCSdpType::Unspecified {
            return Err(Error::ErrInvalidArgument(
                "session description type is unspecified".to_owned(),
            ));
        }

        Ok(RTCSessionDescription {
            sdp_type,
            sdp,
            handle,
        })
    }

    pub fn sdp_type(&self) -> RTCSdpType {
        self.sdp_type
    }

    /// sdp returns the serialized session description.
    pub fn sdp(&self) -> &str {
        &self.sdp
    }

    /// native_handle is the engine object behind this description, if the
    /// engine has seen it.
    pub fn native_handle(&self) -> Option<NativeHandle> {
        self.handle
    }

    /// advertises_trickle reports whether the session level or any media
    /// section carries `a=ice-options:` with the `trickle` token.
    pub(crate) fn advertises_trickle(&self) -> bool {
        self.sdp
            .lines()
            .filter_map(|line| line.trim_end().strip_prefix("a=ice-options:"))
            .any(|options| options.split_whitespace().any(|opt| opt == "trickle"))
    }
}
