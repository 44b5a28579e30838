use serde::{Deserialize, Serialize};

use super::url::IceUrl;
use shared::error::{Error, Result};

/// ICEServer describes a single STUN and TURN server that can be used by
/// the ICEAgent to establish a connection with a peer.
///
/// ## Specifications
///
/// * [W3C]
///
/// [W3C]: https://w3c.github.io/webrtc-pc/#rtciceserver-dictionary
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCIceServer {
    pub urls: Vec<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub credential: String,
}

impl RTCIceServer {
    /// parse builds a server from a comma separated URL descriptor followed by
    /// the optional username and credential.
    ///
    /// ```
    /// use rtc_native::peer_connection::transport::RTCIceServer;
    ///
    /// let server = RTCIceServer::parse("stun:a, turn:b", &["alice", "secret"]).unwrap();
    /// assert_eq!(server.urls, vec!["stun:a", "turn:b"]);
    /// assert_eq!(server.username, "alice");
    /// ```
    pub fn parse<S: AsRef<str>>(descriptor: &str, extras: &[S]) -> Result<Self> {
        let urls = parse_descriptor(descriptor)?;

        if extras.len() > 2 {
            log::warn!(
                "ICE server {descriptor:?}: too many parameters, ignoring {} trailing value(s)",
                extras.len() - 2
            );
        }
        let mut extras = extras.iter().map(|s| -> &str { s.as_ref() });

        Ok(RTCIceServer {
            urls,
            username: extras.next().unwrap_or_default().to_owned(),
            credential: extras.next().unwrap_or_default().to_owned(),
        })
    }

    /// urls returns the parsed form of every URL, in order.
    pub fn urls(&self) -> Result<Vec<IceUrl>> {
        if self.urls.is_empty() {
            return Err(Error::ErrInvalidArgument(
                "ICE server has no urls".to_owned(),
            ));
        }
        self.urls.iter().map(|raw| IceUrl::parse(raw.trim())).collect()
    }

    /// validate checks a server that was not built through [`RTCIceServer::parse`],
    /// e.g. one deserialized from JSON.
    pub fn validate(&self) -> Result<()> {
        self.urls().map(|_| ())
    }
}

/// parse_ice_server takes the descriptor and its positional extras as one
/// argument list: `params[0]` is the comma separated URL list, `params[1]` the
/// username and `params[2]` the credential. Anything past that is ignored
/// with a warning.
pub fn parse_ice_server<S: AsRef<str>>(params: &[S]) -> Result<RTCIceServer> {
    let (descriptor, extras) = params
        .split_first()
        .ok_or_else(|| Error::ErrInvalidArgument("ICE server needs at least one url".to_owned()))?;
    RTCIceServer::parse(descriptor.as_ref(), extras)
}

fn parse_descriptor(descriptor: &str) -> Result<Vec<String>> {
    if descriptor.trim().is_empty() {
        return Err(Error::ErrInvalidArgument(
            "ICE server descriptor is empty".to_owned(),
        ));
    }

    descriptor
        .split(',')
        .map(str::trim)
        .map(|token| IceUrl::parse(token).map(|_| token.to_owned()))
        .collect()
}
