//! Composable configuration options.
//!
//! Each option is a unary transformation over an [`RTCConfigurationBuilder`].
//! [`RTCConfiguration::new`](super::RTCConfiguration::new) applies them in the
//! order given:
//!
//! ```
//! use rtc_native::peer_connection::configuration::option::{with_bundle_policy, with_ice_server};
//! use rtc_native::peer_connection::configuration::{RTCBundlePolicy, RTCConfiguration};
//!
//! let config = RTCConfiguration::new([
//!     with_ice_server("stun:stun.l.google.com:19302", &[] as &[&str]),
//!     with_ice_server("turn:turn.example.org", &["user", "pass"]),
//!     with_bundle_policy(RTCBundlePolicy::MaxBundle),
//! ]);
//! assert_eq!(config.ice_servers().len(), 2);
//! ```

use super::bundle_policy::RTCBundlePolicy;
use super::ice_transport_policy::RTCIceTransportPolicy;
use super::RTCConfigurationBuilder;
use crate::peer_connection::transport::ice::server::RTCIceServer;

/// A single configuration step.
pub type ConfigurationOption = Box<dyn FnOnce(&mut RTCConfigurationBuilder) + Send>;

/// with_ice_server appends the server described by `descriptor` and its
/// optional username/credential. A descriptor that does not parse adds
/// nothing; the error is recorded on the builder.
pub fn with_ice_server<S: AsRef<str>>(descriptor: &str, extras: &[S]) -> ConfigurationOption {
    let parsed = RTCIceServer::parse(descriptor, extras);
    Box::new(move |builder| builder.push_ice_server(parsed))
}

/// with_ice_servers appends already constructed servers, in order. Servers
/// that fail validation are skipped and recorded like in [`with_ice_server`].
pub fn with_ice_servers(ice_servers: Vec<RTCIceServer>) -> ConfigurationOption {
    Box::new(move |builder| {
        for ice_server in ice_servers {
            let checked = ice_server.validate().map(|_| ice_server);
            builder.push_ice_server(checked);
        }
    })
}

pub fn with_bundle_policy(bundle_policy: RTCBundlePolicy) -> ConfigurationOption {
    Box::new(move |builder| builder.bundle_policy = bundle_policy)
}

pub fn with_ice_transport_policy(ice_transport_policy: RTCIceTransportPolicy) -> ConfigurationOption {
    Box::new(move |builder| builder.ice_transport_policy = ice_transport_policy)
}
