//! Stable error codes shared with the host UI layer.

pub const SNAPSHOT_INVALID_JSON: &str = "SNAPSHOT_INVALID_JSON";
pub const SNAPSHOT_SCHEMA: &str = "SNAPSHOT_SCHEMA_VIOLATION";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const STORE_WRITE_REJECTED: &str = "STORE_WRITE_REJECTED";
pub const CONFIG_IO: &str = "CONFIG_IO_ERROR";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const FETCH_NETWORK: &str = "FETCH_NETWORK_ERROR";
pub const FETCH_HTTP_STATUS: &str = "FETCH_HTTP_STATUS";
pub const FETCH_SCHEMA: &str = "FETCH_SCHEMA_VIOLATION";

/// Maps an error to a stable string code.
pub trait VigilErrorCode {
    fn error_code(&self) -> &'static str;
}
