use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which description slot of a peer connection an operation targeted.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DescriptionSide {
    Local,
    Remote,
}

impl fmt::Display for DescriptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DescriptionSide::Local => write!(f, "local"),
            DescriptionSide::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// ErrInvalidArgument indicates malformed or missing input, such as an
    /// empty ICE server descriptor or a URL that is not `scheme:rest`.
    #[error("invalid argument: {0}")]
    ErrInvalidArgument(String),

    /// ErrInitializationFailed indicates the native engine could not allocate
    /// a peer. The connection is unusable and must be discarded.
    #[error("peer connection: failed to initialize native peer")]
    ErrInitializationFailed,

    /// ErrConfigurationRejected indicates the native engine refused the
    /// translated configuration.
    #[error("peer connection: native engine rejected configuration (status {0})")]
    ErrConfigurationRejected(i32),

    #[error("create offer: native engine could not prepare an SDP offer")]
    ErrOfferCreationFailed,

    #[error("create answer: native engine could not prepare an SDP answer")]
    ErrAnswerCreationFailed,

    /// ErrSetDescriptionFailed indicates the native engine rejected a
    /// local or remote description assignment.
    #[error("set {0} description failed (status {1})")]
    ErrSetDescriptionFailed(DescriptionSide, i32),

    #[error("create data channel: native engine returned no channel")]
    ErrDataChannelCreationFailed,

    /// ErrSessionDescriptionParseFailed indicates the native engine could not
    /// deserialize session description text received from signaling.
    #[error("native engine could not parse session description")]
    ErrSessionDescriptionParseFailed,

    /// ErrConnectionClosed indicates an operation executed after connection
    /// has already been closed.
    #[error("connection closed")]
    ErrConnectionClosed,

    /// ErrStringSizeLimit indicates that a data channel label is longer than
    /// the 65535 bytes W3C allows.
    #[error("data channel label exceeds size limit")]
    ErrStringSizeLimit,

    #[error("{0}")]
    Other(String),
}
