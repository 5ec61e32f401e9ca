use anyhow::Result;
use tokio::time::Duration;

pub mod oid;
pub mod v2c;
pub mod value;

pub use oid::{oid_parts, parse_oid, prefix_len};
pub use v2c::SnmpClientV2c;
pub use value::{Diagnostic, QueryResult, SnmpValue};

/// Фабрика SNMPv2c клиента
pub async fn create_v2c_client(
    target: &str,
    community: &[u8],
    timeout: Duration,
) -> Result<SnmpClientV2c> {
    SnmpClientV2c::new(target, community, timeout).await
}
