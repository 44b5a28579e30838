pub mod bundle_policy;
pub mod ice_transport_policy;
pub mod option;

use serde::{Deserialize, Serialize};

use crate::native::{NativeConfiguration, NativeIceServer};
use crate::peer_connection::transport::ice::server::RTCIceServer;
use crate::peer_connection::transport::ice::url::{IceUrl, SchemeType};
use shared::error::{Error, Result};

pub use bundle_policy::RTCBundlePolicy;
pub use ice_transport_policy::RTCIceTransportPolicy;
pub use option::ConfigurationOption;

/// A Configuration defines how peer-to-peer communication via PeerConnection
/// is established or re-established.
/// Configurations may be set up once and reused across multiple connections.
/// Configurations are treated as readonly. As long as they are unmodified,
/// they are safe for concurrent use.
///
/// ## Specifications
///
/// * [W3C]
///
/// [W3C]: https://w3c.github.io/webrtc-pc/#rtcconfiguration-dictionary
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RTCConfiguration {
    /// ice_servers defines a slice describing servers available to be used by
    /// ICE, such as STUN and TURN servers.
    pub(crate) ice_servers: Vec<RTCIceServer>,

    /// ice_transport_policy indicates which candidates the ICEAgent is allowed
    /// to use.
    pub(crate) ice_transport_policy: RTCIceTransportPolicy,

    /// bundle_policy indicates which media-bundling policy to use when gathering
    /// ICE candidates.
    pub(crate) bundle_policy: RTCBundlePolicy,
}

impl RTCConfiguration {
    /// new applies `options` in order to a default configuration. Options that
    /// fail are dropped with a warning; use [`RTCConfiguration::try_new`] to
    /// surface them instead.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ConfigurationOption>,
    {
        options
            .into_iter()
            .fold(RTCConfigurationBuilder::new(), RTCConfigurationBuilder::apply)
            .build()
    }

    /// try_new is [`RTCConfiguration::new`] but fails with the first option
    /// error.
    pub fn try_new<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ConfigurationOption>,
    {
        options
            .into_iter()
            .fold(RTCConfigurationBuilder::new(), RTCConfigurationBuilder::apply)
            .try_build()
    }

    /// from_json reads a W3C `RTCConfiguration` dictionary and validates
    /// every server in it.
    pub fn from_json(json: &str) -> Result<Self> {
        let configuration: RTCConfiguration = serde_json::from_str(json)
            .map_err(|err| Error::ErrInvalidArgument(format!("configuration json: {err}")))?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn ice_servers(&self) -> &[RTCIceServer] {
        &self.ice_servers
    }

    pub fn ice_transport_policy(&self) -> RTCIceTransportPolicy {
        self.ice_transport_policy
    }

    pub fn bundle_policy(&self) -> RTCBundlePolicy {
        self.bundle_policy
    }

    /// validate re-checks every ICE server.
    pub fn validate(&self) -> Result<()> {
        self.ice_servers.iter().try_for_each(RTCIceServer::validate)
    }

    /// to_native flattens the configuration for the native engine.
    ///
    /// It side-steps the strict parsing mode of native stun url parsers (as
    /// defined in https://tools.ietf.org/html/rfc7064) by stripping any
    /// erroneous queries from stun URLs, whatever the scheme's letter case.
    pub(crate) fn to_native(&self) -> NativeConfiguration {
        let ice_servers = self
            .ice_servers
            .iter()
            .map(|ice_server| NativeIceServer {
                urls: ice_server
                    .urls
                    .iter()
                    .map(|raw_url| {
                        let raw_url = raw_url.trim();
                        match IceUrl::parse(raw_url) {
                            Ok(url) if url.scheme == SchemeType::Stun => {
                                raw_url.split('?').next().unwrap_or(raw_url).to_owned()
                            }
                            _ => raw_url.to_owned(),
                        }
                    })
                    .collect(),
                username: ice_server.username.clone(),
                password: ice_server.credential.clone(),
            })
            .collect();

        NativeConfiguration {
            ice_servers,
            bundle_policy: self.bundle_policy.into(),
            ice_transport_policy: self.ice_transport_policy.into(),
        }
    }
}

/// RTCConfigurationBuilder accumulates configuration steps, either through
/// its `with_*` methods or through [`ConfigurationOption`]s.
#[derive(Default)]
pub struct RTCConfigurationBuilder {
    pub(crate) ice_servers: Vec<RTCIceServer>,
    pub(crate) ice_transport_policy: RTCIceTransportPolicy,
    pub(crate) bundle_policy: RTCBundlePolicy,
    errors: Vec<Error>,
}

impl RTCConfigurationBuilder {
    pub fn new() -> Self {
        RTCConfigurationBuilder::default()
    }

    /// apply runs one option against the builder.
    pub fn apply(mut self, option: ConfigurationOption) -> Self {
        option(&mut self);
        self
    }

    /// with_ice_server appends one server parsed from a descriptor, see
    /// [`RTCIceServer::parse`].
    pub fn with_ice_server<S: AsRef<str>>(mut self, descriptor: &str, extras: &[S]) -> Self {
        self.push_ice_server(RTCIceServer::parse(descriptor, extras));
        self
    }

    /// with_ice_servers appends `ice_servers` after any servers already added.
    pub fn with_ice_servers(self, ice_servers: Vec<RTCIceServer>) -> Self {
        self.apply(option::with_ice_servers(ice_servers))
    }

    pub fn with_ice_transport_policy(
        mut self,
        ice_transport_policy: RTCIceTransportPolicy,
    ) -> Self {
        self.ice_transport_policy = ice_transport_policy;
        self
    }

    pub fn with_bundle_policy(mut self, bundle_policy: RTCBundlePolicy) -> Self {
        self.bundle_policy = bundle_policy;
        self
    }

    /// errors lists what went wrong while applying options so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn build(self) -> RTCConfiguration {
        RTCConfiguration {
            ice_servers: self.ice_servers,
            ice_transport_policy: self.ice_transport_policy,
            bundle_policy: self.bundle_policy,
        }
    }

    /// try_build fails with the first recorded option error.
    pub fn try_build(mut self) -> Result<RTCConfiguration> {
        if self.errors.is_empty() {
            Ok(self.build())
        } else {
            Err(self.errors.swap_remove(0))
        }
    }

    pub(crate) fn push_ice_server(&mut self, ice_server: Result<RTCIceServer>) {
        match ice_server {
            Ok(ice_server) => self.ice_servers.push(ice_server),
            Err(err) => {
                log::warn!("skipping ICE server: {err}");
                self.errors.push(err);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::option::*;
    use super::*;
    use crate::native::sys;

    const NO_EXTRAS: &[&str] = &[];

    #[test]
    fn test_new_configuration() {
        let config = RTCConfiguration::new(Vec::new());
        assert!(config.ice_servers().is_empty());
        assert_eq!(config.bundle_policy(), RTCBundlePolicy::Balanced);
        assert_eq!(config.ice_transport_policy(), RTCIceTransportPolicy::All);
        assert_eq!(config, RTCConfiguration::default());

        let config = RTCConfiguration::new([with_ice_server("stun:a", NO_EXTRAS)]);
        assert_eq!(config.ice_servers().len(), 1);

        let config = RTCConfiguration::new([
            with_ice_server("stun:a", NO_EXTRAS),
            with_ice_server("stun:b, turn:c", NO_EXTRAS),
        ]);
        assert_eq!(config.ice_servers().len(), 2);
        assert_eq!(config.ice_servers()[0].urls, vec!["stun:a"]);
        assert_eq!(config.ice_servers()[1].urls, vec!["stun:b", "turn:c"]);
    }

    #[test]
    fn test_new_configuration_allows_duplicates() {
        let config = RTCConfiguration::new([
            with_ice_server("stun:a", NO_EXTRAS),
            with_ice_server("stun:a", NO_EXTRAS),
        ]);
        assert_eq!(config.ice_servers().len(), 2);
        assert_eq!(config.ice_servers()[0], config.ice_servers()[1]);
    }

    #[test]
    fn test_new_configuration_skips_bad_server() {
        let config = RTCConfiguration::new([
            with_ice_server("stun:a", NO_EXTRAS),
            with_ice_server("stun:12345, badurl", NO_EXTRAS),
            with_ice_server("turn:b", &["alice", "secret"]),
        ]);
        assert_eq!(config.ice_servers().len(), 2);
        assert_eq!(config.ice_servers()[1].username, "alice");

        let result = RTCConfiguration::try_new([
            with_ice_server("stun:a", NO_EXTRAS),
            with_ice_server("", NO_EXTRAS),
        ]);
        assert!(matches!(result, Err(Error::ErrInvalidArgument(_))));
    }

    #[test]
    fn test_options_apply_in_order() {
        let config = RTCConfiguration::new([
            with_bundle_policy(RTCBundlePolicy::MaxBundle),
            with_ice_transport_policy(RTCIceTransportPolicy::Relay),
            with_bundle_policy(RTCBundlePolicy::MaxCompat),
        ]);
        assert_eq!(config.bundle_policy(), RTCBundlePolicy::MaxCompat);
        assert_eq!(config.ice_transport_policy(), RTCIceTransportPolicy::Relay);
    }

    #[test]
    fn test_builder_records_errors() {
        let builder = RTCConfigurationBuilder::new()
            .with_ice_server("stun:a", NO_EXTRAS)
            .with_ice_servers(vec![RTCIceServer {
                urls: vec!["localhost:3478".to_owned()],
                ..Default::default()
            }]);
        assert_eq!(builder.errors().len(), 1);

        let config = builder.build();
        assert_eq!(config.ice_servers().len(), 1);
    }

    #[test]
    fn test_configuration_to_native() {
        let config = RTCConfigurationBuilder::new()
            .with_ice_server("stun:stun.l.google.com:19302", NO_EXTRAS)
            .with_ice_server("turn:turn.example.org:3478?transport=tcp", &["user", "pass"])
            .with_bundle_policy(RTCBundlePolicy::MaxBundle)
            .with_ice_transport_policy(RTCIceTransportPolicy::Relay)
            .build();

        let native = config.to_native();
        assert_eq!(native.bundle_policy, sys::BUNDLE_POLICY_MAX_BUNDLE);
        assert_eq!(native.ice_transport_policy, sys::ICE_TRANSPORT_POLICY_RELAY);
        assert_eq!(
            native.ice_servers,
            vec![
                NativeIceServer {
                    urls: vec!["stun:stun.l.google.com:19302".to_owned()],
                    ..Default::default()
                },
                NativeIceServer {
                    urls: vec!["turn:turn.example.org:3478?transport=tcp".to_owned()],
                    username: "user".to_owned(),
                    password: "pass".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_configuration_to_native_strips_stun_query() {
        // ignore the fact that stun URLs shouldn't have a query
        let tests = vec![
            (
                "stun:global.stun.twilio.com:3478?transport=udp",
                "stun:global.stun.twilio.com:3478",
            ),
            (
                "STUN:host.example.org:3478?transport=udp",
                "STUN:host.example.org:3478",
            ),
            (
                "Stun:host.example.org?transport=tcp",
                "Stun:host.example.org",
            ),
            (
                "turn:host.example.org:3478?transport=udp",
                "turn:host.example.org:3478?transport=udp",
            ),
            (
                "TURNS:host.example.org?transport=tcp",
                "TURNS:host.example.org?transport=tcp",
            ),
        ];

        for (server_str, expected_server_str) in tests {
            let cfg = RTCConfigurationBuilder::new()
                .with_ice_servers(vec![RTCIceServer {
                    urls: vec![server_str.to_owned()],
                    ..Default::default()
                }])
                .build();

            let native = cfg.to_native();
            assert_eq!(native.ice_servers[0].urls[0], expected_server_str, "{server_str}");
            assert_eq!(cfg.ice_servers()[0].urls[0], server_str);
        }
    }

    #[test]
    fn test_configuration_json() {
        let j = r#"
            {
                "iceServers": [{"urls": ["turn:turn.example.org"],
                                "username": "jch",
                                "credential": "topsecret"
                              }],
                "iceTransportPolicy": "relay",
                "bundlePolicy": "balanced"
            }"#;

        let conf = RTCConfigurationBuilder::new()
            .with_ice_servers(vec![RTCIceServer {
                urls: vec!["turn:turn.example.org".to_owned()],
                username: "jch".to_owned(),
                credential: "topsecret".to_owned(),
            }])
            .with_ice_transport_policy(RTCIceTransportPolicy::Relay)
            .with_bundle_policy(RTCBundlePolicy::Balanced)
            .build();

        let conf2 = RTCConfiguration::from_json(j).unwrap();
        assert_eq!(conf, conf2);

        let j2 = serde_json::to_string(&conf2).unwrap();
        let conf3 = RTCConfiguration::from_json(&j2).unwrap();
        assert_eq!(conf2, conf3);

        assert_eq!(RTCConfiguration::from_json("{}").unwrap(), RTCConfiguration::default());
    }

    #[test]
    fn test_configuration_json_invalid() {
        let tests = vec![
            r#"{"iceServers": [{"urls": ["badurl"]}]}"#,
            r#"{"iceServers": [{"urls": []}]}"#,
            r#"{"bundlePolicy": "max-everything"}"#,
            "not json",
        ];

        for j in tests {
            assert!(
                matches!(RTCConfiguration::from_json(j), Err(Error::ErrInvalidArgument(_))),
                "{j}"
            );
        }
    }
}
