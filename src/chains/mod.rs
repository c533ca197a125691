pub mod bitcoin;
pub mod constants;
pub mod ethereum;
pub mod http;
pub mod serde_utils;
#[cfg(test)]
pub(crate) mod test_server;
pub mod tron;

pub use constants::*;
pub use http::{build_client, get_json};
