//! The boundary to the native peer engine.
//!
//! The engine (media, ICE, DTLS/SRTP, SCTP) is an external component. This
//! crate talks to it only through the narrow, handle-based [`NativeEngine`]
//! trait; an FFI binding implements the trait by forwarding each method to
//! the corresponding C entry point and turning pointers into
//! [`NativeHandle`] tokens.

pub(crate) mod handle;
pub(crate) mod observer;
pub mod sys;

use std::fmt;
use std::num::NonZeroU64;

use crate::data_channel::init::RTCDataChannelInit;

pub use observer::PeerObserver;

/// Status code returned by fallible native calls. [`sys::STATUS_OK`] means
/// success; every other value is an engine-specific failure.
pub type StatusCode = i32;

/// Opaque, non-null reference to an object owned by the native engine
/// (a peer, a session description or a data channel).
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct NativeHandle(NonZeroU64);

impl NativeHandle {
    /// Wraps a raw engine value. A zero value is the engine's null and
    /// yields `None`.
    pub fn from_raw(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(NativeHandle)
    }

    pub fn as_raw(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// Flat ICE server entry as the engine consumes it.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct NativeIceServer {
    pub urls: Vec<String>,
    pub username: String,
    pub password: String,
}

/// Flat configuration as the engine consumes it. Policies are already
/// translated to the engine's numeric enum values.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct NativeConfiguration {
    pub ice_servers: Vec<NativeIceServer>,
    pub bundle_policy: i32,
    pub ice_transport_policy: i32,
}

/// NativeEngine is the contract a native peer engine binding fulfils.
///
/// All calls except the observer callbacks are synchronous: they return once
/// the engine has completed or failed the request. A null result is `None`.
pub trait NativeEngine: Send + Sync {
    /// Allocates a native peer. The engine keeps `observer` and reports
    /// locally gathered ICE candidates through it until the peer is released.
    fn initialize_peer(&self, observer: PeerObserver) -> Option<NativeHandle>;

    /// Creates the underlying peer connection with `config`.
    fn create_peer_connection(&self, peer: NativeHandle, config: &NativeConfiguration)
        -> StatusCode;

    fn create_offer(&self, peer: NativeHandle) -> Option<NativeHandle>;

    fn create_answer(&self, peer: NativeHandle) -> Option<NativeHandle>;

    fn set_local_description(&self, peer: NativeHandle, sdp: NativeHandle) -> StatusCode;

    fn set_remote_description(&self, peer: NativeHandle, sdp: NativeHandle) -> StatusCode;

    /// Returns the textual SDP of a native session description.
    fn serialize_sdp(&self, sdp: NativeHandle) -> String;

    /// Builds a native session description from SDP text received over
    /// signaling. `sdp_type` is one of `offer`, `pranswer` or `answer`.
    fn deserialize_sdp(&self, sdp_type: &str, sdp: &str) -> Option<NativeHandle>;

    fn create_data_channel(
        &self,
        peer: NativeHandle,
        label: &str,
        init: &RTCDataChannelInit,
    ) -> Option<NativeHandle>;

    /// Releases a peer returned by [`NativeEngine::initialize_peer`]. Called
    /// exactly once per peer; the handle is never used afterwards.
    fn release_peer(&self, peer: NativeHandle);
}
