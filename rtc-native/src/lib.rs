//! # RTC Native - WebRTC signaling over a native peer engine
//!
//! This crate is the offer/answer layer of a WebRTC stack whose media, ICE,
//! DTLS/SRTP and SCTP machinery lives in an external native engine. It
//! validates configuration, drives the engine through the
//! [W3C](https://www.w3.org/TR/webrtc/) offer/answer steps, and moves the
//! engine's ICE candidate callbacks onto a thread the connection owns.
//!
//! The engine is reached only through the [`native::NativeEngine`] trait, so
//! any binding (a C FFI shim, a test double) can sit underneath.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use rtc_native::native::NativeEngine;
//! use rtc_native::peer_connection::configuration::option::{with_bundle_policy, with_ice_server};
//! use rtc_native::peer_connection::configuration::{RTCBundlePolicy, RTCConfiguration};
//! use rtc_native::peer_connection::sdp::RTCSessionDescription;
//! use rtc_native::peer_connection::transport::RTCIceCandidateInit;
//! use rtc_native::peer_connection::RTCPeerConnection;
//!
//! # fn example(engine: Arc<dyn NativeEngine>) -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Describe the ICE servers and policies
//! let config = RTCConfiguration::try_new([
//!     with_ice_server("stun:stun.l.google.com:19302", &[] as &[&str]),
//!     with_ice_server("turn:turn.example.org:3478", &["user", "secret"]),
//!     with_bundle_policy(RTCBundlePolicy::MaxBundle),
//! ])?;
//!
//! // 2. Create the connection and listen for local candidates
//! let mut pc = RTCPeerConnection::new(engine, config)?;
//! pc.on_ice_candidate(Box::new(|candidate: Option<RTCIceCandidateInit>| match candidate {
//!     Some(candidate) => println!("send to remote: {}", candidate.candidate),
//!     None => println!("gathering complete"),
//! }));
//!
//! // 3. Offer
//! let offer = pc.create_offer()?;
//! pc.set_local_description(offer)?;
//! // signaling.send(pc.local_description())?;
//!
//! // 4. Answer from the remote peer
//! # let answer_sdp = String::new();
//! let answer = RTCSessionDescription::answer(answer_sdp)?;
//! pc.set_remote_description(answer)?;
//!
//! // 5. Data channel
//! let dc = pc.create_data_channel("chat", None)?;
//! println!("created {}", dc.label());
//!
//! pc.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Specification Compliance
//!
//! - [W3C WebRTC 1.0] - RTCConfiguration, RTCSessionDescription, RTCDataChannelInit
//! - [RFC 7064] / [RFC 7065] - STUN and TURN URIs
//! - [RFC 8829] - JSEP: JavaScript Session Establishment Protocol
//! - [RFC 8840] - Trickle ICE for SIP and SDP
//!
//! [W3C WebRTC 1.0]: https://www.w3.org/TR/webrtc/
//! [RFC 7064]: https://datatracker.ietf.org/doc/html/rfc7064
//! [RFC 7065]: https://datatracker.ietf.org/doc/html/rfc7065
//! [RFC 8829]: https://datatracker.ietf.org/doc/html/rfc8829
//! [RFC 8840]: https://datatracker.ietf.org/doc/html/rfc8840

#![warn(rust_2018_idioms)]

pub use shared;

pub mod data_channel;
pub mod native;
pub mod peer_connection;
