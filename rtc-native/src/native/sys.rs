//! Numeric values of the native engine's enums and status codes.
//!
//! These mirror the engine's C++ headers. The public enums in [`crate::peer_connection::configuration`]
//! use the same integers as discriminants, and tests pin each pair.

/// Status returned by native calls that succeed.
pub const STATUS_OK: i32 = 0;

// PeerConnectionInterface::BundlePolicy
pub const BUNDLE_POLICY_BALANCED: i32 = 0;
pub const BUNDLE_POLICY_MAX_BUNDLE: i32 = 1;
pub const BUNDLE_POLICY_MAX_COMPAT: i32 = 2;

// PeerConnectionInterface::IceTransportsType
pub const ICE_TRANSPORT_POLICY_NONE: i32 = 0;
pub const ICE_TRANSPORT_POLICY_RELAY: i32 = 1;
pub const ICE_TRANSPORT_POLICY_NO_HOST: i32 = 2;
pub const ICE_TRANSPORT_POLICY_ALL: i32 = 3;
