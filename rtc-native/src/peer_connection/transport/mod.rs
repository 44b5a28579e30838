//! ICE-facing types: server descriptions handed to the engine and the
//! candidates it gathers.

pub mod ice;

pub use ice::candidate::RTCIceCandidateInit;
pub use ice::server::{parse_ice_server, RTCIceServer};
pub use ice::url::{IceUrl, SchemeType};
