use std::sync::mpsc::Sender;

use crate::peer_connection::transport::ice::candidate::RTCIceCandidateInit;

/// Messages queued from native threads to the connection's dispatcher.
#[derive(Debug)]
pub(crate) enum ObserverMessage {
    /// A gathered candidate, or `None` once gathering is complete.
    IceCandidate(Option<RTCIceCandidateInit>),
    Shutdown,
}

/// PeerObserver is handed to the native engine when a peer is initialized.
///
/// The engine calls it from its own worker threads. Every call only enqueues
/// a message; user handlers run later on the connection's dispatcher thread,
/// so the engine is never re-entered from inside its own callback.
#[derive(Debug, Clone)]
pub struct PeerObserver {
    tx: Sender<ObserverMessage>,
}

impl PeerObserver {
    pub(crate) fn new(tx: Sender<ObserverMessage>) -> Self {
        PeerObserver { tx }
    }

    /// on_ice_candidate reports a newly gathered local candidate.
    pub fn on_ice_candidate(&self, candidate: RTCIceCandidateInit) {
        if self
            .tx
            .send(ObserverMessage::IceCandidate(Some(candidate)))
            .is_err()
        {
            log::trace!("dropping ice candidate: peer connection is closed");
        }
    }

    /// on_ice_gathering_complete reports that no more local candidates will
    /// be gathered for the current negotiation.
    pub fn on_ice_gathering_complete(&self) {
        if self.tx.send(ObserverMessage::IceCandidate(None)).is_err() {
            log::trace!("dropping end of candidates: peer connection is closed");
        }
    }
}
