//! Опрос MikroTik устройств по SNMP: обход таблиц и сборка
//! плоских (OID, значение) ответов в структурированные записи
//! с именованными полями.
//!
//! Ядро (`assemble`, `params`, `normalize`) чистое и работает
//! без сети; транспорт (`snmp`) отдаёт строки обхода, коллектор
//! (`collector`) связывает одно с другим по таблицам.

pub mod assemble;
pub mod collector;
pub mod config;
pub mod formatter;
pub mod normalize;
pub mod params;
pub mod record;
pub mod snmp;

pub use collector::snapshot::{collect_full, DeviceSnapshot};
pub use collector::MtSnmp;
pub use config::AppConfig;
pub use params::FieldCatalog;
pub use record::{EntityRecord, RecordSet};
pub use snmp::{Diagnostic, QueryResult, SnmpClientV2c, SnmpValue};
