pub mod configuration;
pub mod event;
pub mod sdp;
pub mod transport;

use std::sync::Arc;

use crate::data_channel::init::RTCDataChannelInit;
use crate::data_channel::RTCDataChannel;
use crate::native::handle::PeerHandle;
use crate::native::{sys, NativeEngine, NativeHandle};
use configuration::RTCConfiguration;
use event::{IceCandidateDispatcher, OnIceCandidateHdlrFn};
use sdp::{RTCSdpType, RTCSessionDescription};
use shared::error::{DescriptionSide, Error, Result};

/// W3C caps data channel labels at 65535 bytes.
const DATA_CHANNEL_LABEL_MAX_LEN: usize = 65535;

/// PeerConnection represents a WebRTC connection that establishes a
/// peer-to-peer communications with another PeerConnection instance in a
/// browser, or to another endpoint implementing the required protocols.
///
/// Every negotiation step is a blocking call into the native engine and takes
/// `&mut self`, so only one of them can be in flight per connection. Wrap a
/// call in your own timer if you need a bounded wait: the engine keeps owning
/// the in-flight request, so the connection must not be dropped from under it.
///
/// ```no_run
/// use std::sync::Arc;
/// use rtc_native::native::NativeEngine;
/// use rtc_native::peer_connection::configuration::{option::with_ice_server, RTCConfiguration};
/// use rtc_native::peer_connection::transport::RTCIceCandidateInit;
/// use rtc_native::peer_connection::RTCPeerConnection;
///
/// # fn example(engine: Arc<dyn NativeEngine>) -> Result<(), Box<dyn std::error::Error>> {
/// let config = RTCConfiguration::try_new([with_ice_server("stun:stun.l.google.com:19302", &[] as &[&str])])?;
/// let mut pc = RTCPeerConnection::new(engine, config)?;
///
/// pc.on_ice_candidate(Box::new(|candidate: Option<RTCIceCandidateInit>| {
///     // forward candidate to the remote peer over signaling
///     println!("{candidate:?}");
/// }));
///
/// let offer = pc.create_offer()?;
/// pc.set_local_description(offer)?;
/// // send pc.local_description() to the remote peer, then set its answer
/// # Ok(())
/// # }
/// ```
pub struct RTCPeerConnection {
    configuration: RTCConfiguration,

    local_description: Option<RTCSessionDescription>,
    remote_description: Option<RTCSessionDescription>,
    can_trickle_ice_candidates: Option<bool>,

    // Declared before the dispatcher: the peer is released first, so the
    // engine stops reporting candidates before the dispatcher drains.
    peer: PeerHandle,
    dispatcher: IceCandidateDispatcher,
}

impl RTCPeerConnection {
    /// creates a PeerConnection with RTCConfiguration on top of `engine`.
    ///
    /// Exactly one native peer is allocated. If the engine cannot allocate it
    /// this fails with [`Error::ErrInitializationFailed`]; if the engine
    /// refuses the configuration the allocated peer is released again and this
    /// fails with [`Error::ErrConfigurationRejected`].
    pub fn new(engine: Arc<dyn NativeEngine>, configuration: RTCConfiguration) -> Result<Self> {
        configuration.validate()?;

        let dispatcher = IceCandidateDispatcher::start()?;
        let peer = PeerHandle::allocate(engine, dispatcher.observer()).map_err(|err| {
            log::error!("PeerConnection: failed to initialize: {err}");
            err
        })?;

        let native_config = configuration.to_native();
        let status = peer
            .engine()
            .create_peer_connection(peer.raw()?, &native_config);
        if status != sys::STATUS_OK {
            log::error!("PeerConnection: could not create from config, status {status}");
            return Err(Error::ErrConfigurationRejected(status));
        }

        log::info!(
            "created PeerConnection on native peer {} with {} ICE server(s)",
            peer.raw()?,
            configuration.ice_servers().len()
        );

        Ok(RTCPeerConnection {
            configuration,
            local_description: None,
            remote_description: None,
            can_trickle_ice_candidates: None,
            peer,
            dispatcher,
        })
    }

    /// configuration returns the configuration the connection was created
    /// with.
    pub fn configuration(&self) -> &RTCConfiguration {
        &self.configuration
    }

    /// create_offer prepares an SDP "offer" message, which should be sent to
    /// the target peer over a signalling channel.
    /// <https://w3c.github.io/webrtc-pc/#dom-rtcpeerconnection-createoffer>
    pub fn create_offer(&mut self) -> Result<RTCSessionDescription> {
        let peer = self.peer.raw()?;
        let sdp = self
            .peer
            .engine()
            .create_offer(peer)
            .ok_or(Error::ErrOfferCreationFailed)?;
        self.describe(RTCSdpType::Offer, sdp)
    }

    /// create_answer prepares an SDP "answer" message, which should be sent
    /// in response to a peer that has sent an offer, over the signalling
    /// channel. Ordering against the remote offer is enforced by the engine.
    /// <https://w3c.github.io/webrtc-pc/#dom-rtcpeerconnection-createanswer>
    pub fn create_answer(&mut self) -> Result<RTCSessionDescription> {
        let peer = self.peer.raw()?;
        let sdp = self
            .peer
            .engine()
            .create_answer(peer)
            .ok_or(Error::ErrAnswerCreationFailed)?;
        self.describe(RTCSdpType::Answer, sdp)
    }

    /// set_local_description commits `desc` to the engine as the local
    /// description and replaces the previous one.
    pub fn set_local_description(&mut self, desc: RTCSessionDescription) -> Result<()> {
        let desc = self.set_description(DescriptionSide::Local, desc)?;
        self.local_description = Some(desc);
        Ok(())
    }

    /// local_description returns the last local description set successfully.
    pub fn local_description(&self) -> Option<&RTCSessionDescription> {
        self.local_description.as_ref()
    }

    /// set_remote_description commits `desc` to the engine as the remote
    /// description and replaces the previous one.
    pub fn set_remote_description(&mut self, desc: RTCSessionDescription) -> Result<()> {
        let desc = self.set_description(DescriptionSide::Remote, desc)?;
        self.can_trickle_ice_candidates = Some(desc.advertises_trickle());
        self.remote_description = Some(desc);
        Ok(())
    }

    /// remote_description returns the last remote description set
    /// successfully.
    pub fn remote_description(&self) -> Option<&RTCSessionDescription> {
        self.remote_description.as_ref()
    }

    /// can_trickle_ice_candidates is `None` until a remote description is
    /// set, then tells whether the remote peer accepts trickled candidates.
    /// <https://w3c.github.io/webrtc-pc/#dom-rtcpeerconnection-cantrickleicecandidates>
    pub fn can_trickle_ice_candidates(&self) -> Option<bool> {
        self.can_trickle_ice_candidates
    }

    /// parse_session_description turns SDP text received over signaling into
    /// a description backed by the native engine.
    pub fn parse_session_description(
        &self,
        sdp_type: RTCSdpType,
        sdp: &str,
    ) -> Result<RTCSessionDescription> {
        let peer = self.peer.raw()?;
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

        log::trace!("deserializing {sdp_type} for native peer {peer}");
        let handle = self
            .peer
            .engine()
            .deserialize_sdp(&sdp_type.to_string(), sdp)
            .ok_or(Error::ErrSessionDescriptionParseFailed)?;
        RTCSessionDescription::from_native(sdp_type, handle, sdp.to_owned())
    }

    /// create_data_channel creates a new DataChannel object with the given
    /// label and optional DataChannelInit used to configure properties of the
    /// underlying channel such as data reliability.
    pub fn create_data_channel(
        &mut self,
        label: &str,
        options: Option<RTCDataChannelInit>,
    ) -> Result<RTCDataChannel> {
        let peer = self.peer.raw()?;
        if label.is_empty() {
            return Err(Error::ErrInvalidArgument(
                "data channel label is empty".to_owned(),
            ));
        }
        if label.len() > DATA_CHANNEL_LABEL_MAX_LEN {
            return Err(Error::ErrStringSizeLimit);
        }

        let init = options.unwrap_or_default();
        let handle = self
            .peer
            .engine()
            .create_data_channel(peer, label, &init)
            .ok_or_else(|| {
                log::error!("failed to create data channel {label:?}");
                Error::ErrDataChannelCreationFailed
            })?;
        log::debug!("created data channel {label:?} as {handle}");

        Ok(RTCDataChannel::new(label.to_owned(), init, handle))
    }

    /// on_ice_candidate sets an event handler which is invoked when a new ICE
    /// candidate is found, and with `None` once gathering completes.
    /// Replaces any previously set handler. The handler runs on the
    /// connection's dispatcher thread, never on a native engine thread.
    pub fn on_ice_candidate(&self, f: OnIceCandidateHdlrFn) {
        self.dispatcher.set_handler(f);
    }

    /// is_closed reports whether [`RTCPeerConnection::close`] has run.
    pub fn is_closed(&self) -> bool {
        self.peer.is_released()
    }

    /// close releases the native peer and stops candidate delivery. Calling
    /// it again is a no-op. Dropping the connection closes it as well.
    /// <https://w3c.github.io/webrtc-pc/#dom-rtcpeerconnection-close>
    pub fn close(&mut self) -> Result<()> {
        if self.peer.release() {
            log::info!("closed PeerConnection");
        }
        self.dispatcher.stop();
        Ok(())
    }

    fn describe(&self, sdp_type: RTCSdpType, sdp: NativeHandle) -> Result<RTCSessionDescription> {
        let text = self.peer.engine().serialize_sdp(sdp);
        log::trace!("native engine created {sdp_type} {sdp}");
        if text.is_empty() {
            return Err(match sdp_type {
                RTCSdpType::Answer => Error::ErrAnswerCreationFailed,
                _ => Error::ErrOfferCreationFailed,
            });
        }
        RTCSessionDescription::from_native(sdp_type, sdp, text)
    }

    fn set_description(
        &mut self,
        side: DescriptionSide,
        desc: RTCSessionDescription,
    ) -> Result<RTCSessionDescription> {
        let peer = self.peer.raw()?;
        let desc = match desc.native_handle() {
            Some(_) => desc,
            None => self.parse_session_description(desc.sdp_type(), desc.sdp())?,
        };
        let Some(sdp) = desc.native_handle() else {
            return Err(Error::ErrSessionDescriptionParseFailed);
        };

        let engine = self.peer.engine();
        let status = match side {
            DescriptionSide::Local => engine.set_local_description(peer, sdp),
            DescriptionSide::Remote => engine.set_remote_description(peer, sdp),
        };
        if status != sys::STATUS_OK {
            log::error!("set {side} description failed with status {status}");
            return Err(Error::ErrSetDescriptionFailed(side, status));
        }
        log::debug!("set {side} {} description {sdp}", desc.sdp_type());

        Ok(desc)
    }
}

impl Drop for RTCPeerConnection {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            log::warn!("failed to close PeerConnection: {err}");
        }
    }
}

impl std::fmt::Debug for RTCPeerConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RTCPeerConnection")
            .field("configuration", &self.configuration)
            .field("local_description", &self.local_description)
            .field("remote_description", &self.remote_description)
            .field("can_trickle_ice_candidates", &self.can_trickle_ice_candidates)
            .field("closed", &self.is_closed())
            .finish()
    }
}
