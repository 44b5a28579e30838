use serde::{Deserialize, Serialize};

use shared::error::{Error, Result};

/// ICECandidateInit is a local ICE candidate as the native engine reports it,
/// ready to be serialized and trickled to the remote peer.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCIceCandidateInit {
    pub candidate: String,
    pub sdp_mid: Option<String>,
    #[serde(rename = "sdpMLineIndex")]
    pub sdp_mline_index: Option<u16>,
    pub username_fragment: Option<String>,
}

impl RTCIceCandidateInit {
    /// to_json renders the candidate the way browsers exchange it over
    /// signaling.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| Error::Other(err.to_string()))
    }
}
