use std::fmt;

use shared::error::{Error, Result};

/// The URL schemes an ICE server may be reached through.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum SchemeType {
    #[default]
    Unknown,
    Stun,
    Turn,
    Turns,
}

const SCHEME_TYPE_STUN_STR: &str = "stun";
const SCHEME_TYPE_TURN_STR: &str = "turn";
const SCHEME_TYPE_TURNS_STR: &str = "turns";

impl From<&str> for SchemeType {
    fn from(raw: &str) -> Self {
        match raw {
            SCHEME_TYPE_STUN_STR => SchemeType::Stun,
            SCHEME_TYPE_TURN_STR => SchemeType::Turn,
            SCHEME_TYPE_TURNS_STR => SchemeType::Turns,
            _ => SchemeType::Unknown,
        }
    }
}

impl fmt::Display for SchemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            SchemeType::Stun => SCHEME_TYPE_STUN_STR,
            SchemeType::Turn => SCHEME_TYPE_TURN_STR,
            SchemeType::Turns => SCHEME_TYPE_TURNS_STR,
            SchemeType::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

impl SchemeType {
    /// is_secure reports whether the scheme runs over TLS.
    pub fn is_secure(self) -> bool {
        self == SchemeType::Turns
    }

    /// default_port is the well-known port used when the URL names none.
    pub fn default_port(self) -> u16 {
        if self.is_secure() {
            5349
        } else {
            3478
        }
    }
}

/// A validated `scheme:rest` ICE server URL.
///
/// Only the scheme is interpreted here. Everything after the first `:` is
/// kept verbatim for the native engine, which owns host, port and transport
/// parsing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct IceUrl {
    pub scheme: SchemeType,
    pub rest: String,
}

impl IceUrl {
    /// parse validates a single, already trimmed URL token: a known scheme
    /// (matched case-insensitively), a `:` and a non-empty remainder.
    pub fn parse(raw: &str) -> Result<Self> {
        let (scheme, rest) = raw
            .split_once(':')
            .ok_or_else(|| Error::ErrInvalidArgument(format!("malformed ICE url {raw:?}")))?;
        if rest.is_empty() {
            return Err(Error::ErrInvalidArgument(format!(
                "ICE url {raw:?} has nothing after the scheme"
            )));
        }

        let scheme_type = SchemeType::from(scheme.to_ascii_lowercase().as_str());
        if scheme_type == SchemeType::Unknown {
            return Err(Error::ErrInvalidArgument(format!(
                "unsupported ICE url scheme {scheme:?} in {raw:?}"
            )));
        }

        Ok(IceUrl {
            scheme: scheme_type,
            rest: rest.to_owned(),
        })
    }
}

impl fmt::Display for IceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.rest)
    }
}
