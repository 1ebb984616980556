//! Header names the backend expects on every authenticated request.

use std::collections::BTreeMap;

pub const X_RPC_COMBO_TOKEN: &str = "x-rpc-combo_token";
pub const X_RPC_SYS_VERSION: &str = "x-rpc-sys_version";
pub const X_RPC_DEVICE_ID: &str = "x-rpc-device_id";
pub const X_RPC_DEVICE_NAME: &str = "x-rpc-device_name";
pub const X_RPC_DEVICE_MODEL: &str = "x-rpc-device_model";
pub const X_RPC_CLIENT_TYPE: &str = "x-rpc-client_type";
pub const X_RPC_CHANNEL: &str = "x-rpc-channel";

/// Every header a user identity contributes, in no particular order.
pub const USER_HEADER_NAMES: [&str; 7] = [
    X_RPC_COMBO_TOKEN,
    X_RPC_SYS_VERSION,
    X_RPC_DEVICE_ID,
    X_RPC_DEVICE_NAME,
    X_RPC_DEVICE_MODEL,
    X_RPC_CLIENT_TYPE,
    X_RPC_CHANNEL,
];

/// Header name → header value.
///
/// A `BTreeMap` keeps iteration (and serialized) order stable, so two
/// header maps built from the same identity are byte-identical.
pub type UserHeaders = BTreeMap<&'static str, String>;
