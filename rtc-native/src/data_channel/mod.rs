pub mod init;

use crate::native::NativeHandle;
use init::RTCDataChannelInit;

/// Identifier for a data channel within a particular peer connection
pub type RTCDataChannelId = u16;

/// DataChannel represents a WebRTC DataChannel created through
/// [`RTCPeerConnection::create_data_channel`](crate::peer_connection::RTCPeerConnection::create_data_channel).
///
/// This is a handle only: the channel's transport lives in the native
/// engine.
///
/// ## Specifications
///
/// * [MDN]
/// * [W3C]
///
/// [MDN]: https://developer.mozilla.org/en-US/docs/Web/API/RTCDataChannel
/// [W3C]: https://w3c.github.io/webrtc-pc/#dom-rtcdatachannel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RTCDataChannel {
    label: String,
    init: RTCDataChannelInit,
    handle: NativeHandle,
}

impl RTCDataChannel {
    pub(crate) fn new(label: String, init: RTCDataChannelInit, handle: NativeHandle) -> Self {
        RTCDataChannel {
            label,
            init,
            handle,
        }
    }

    /// label represents a label that can be used to distinguish this
    /// DataChannel object from other DataChannel objects. Scripts are
    /// allowed to create multiple DataChannel objects with the same label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// init is the record the channel was requested with.
    pub fn init(&self) -> &RTCDataChannelInit {
        &self.init
    }

    /// Ordered returns true if the DataChannel is ordered, and false if
    /// out-of-order delivery is allowed.
    pub fn ordered(&self) -> bool {
        self.init.ordered.unwrap_or(true)
    }

    /// negotiated returns the application chosen id of an out-of-band
    /// negotiated channel.
    pub fn negotiated(&self) -> Option<RTCDataChannelId> {
        self.init.negotiated
    }

    pub fn native_handle(&self) -> NativeHandle {
        self.handle
    }
}
