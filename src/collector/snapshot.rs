//! Полный снимок устройства: все таблицы за один проход.
//! Отказ одной таблицы не валит снимок — ошибка запоминается,
//! остальные таблицы собираются дальше.

use std::future::Future;

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use super::MtSnmp;
use crate::record::{EntityRecord, RecordSet};

#[derive(Debug, Clone, Serialize)]
pub struct FetchError {
    pub table: &'static str,
    pub message: String,
}

/// Снимок всей телеметрии устройства. None — таблица не
/// собралась (ошибка в errors) либо пуста на этой модели.
#[derive(Debug, Default, Serialize)]
pub struct DeviceSnapshot {
    pub system: Option<EntityRecord>,
    pub os: Option<EntityRecord>,
    pub uptime: Option<EntityRecord>,
    pub license: Option<EntityRecord>,
    pub power: Option<EntityRecord>,
    pub health: Option<RecordSet<String>>,
    pub ports: Option<RecordSet<u64>>,
    pub ethernet: Option<RecordSet<u64>>,
    pub if_stats: Option<RecordSet<u64>>,
    pub optical: Option<RecordSet<u64>>,
    pub storage: Option<RecordSet<u64>>,
    pub partitions: Option<RecordSet<u64>>,
    pub processor: Option<RecordSet<u64>>,
    pub org: Option<RecordSet<u64>>,
    pub neighbors: Option<RecordSet<u64>>,
    pub ips: Option<RecordSet<String>>,
    pub routes: Option<RecordSet<String>>,
    pub media: Option<RecordSet<String>>,
    pub forward: Option<RecordSet<String>>,
    pub arp: Option<RecordSet<String>>,
    pub bridge_fdb: Option<RecordSet<String>>,
    pub lease_count: Option<u64>,
    pub errors: Vec<FetchError>,
}

impl DeviceSnapshot {
    pub fn failed_tables(&self) -> usize {
        self.errors.len()
    }
}

async fn try_fetch<T, F>(table: &'static str, errors: &mut Vec<FetchError>, fut: F) -> Option<T>
where
    F: Future<Output = Result<T>>,
{
    match fut.await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(table, error = %e, "таблица не собралась");
            errors.push(FetchError {
                table,
                message: format!("{e:#}"),
            });
            None
        }
    }
}

/// Собирает все таблицы последовательно через одну сессию.
/// Внутри каждого walk'а I/O уже асинхронный; параллельный
/// опрос разных устройств делается отдельными клиентами.
pub async fn collect_full(mt: &mut MtSnmp) -> DeviceSnapshot {
    let mut snap = DeviceSnapshot::default();
    let mut errors = Vec::new();

    snap.system = try_fetch("system", &mut errors, mt.get_system()).await;
    snap.os = try_fetch("os", &mut errors, mt.get_os()).await;
    snap.uptime = try_fetch("uptime", &mut errors, mt.get_uptime()).await;
    snap.license = try_fetch("license", &mut errors, mt.get_license()).await;
    snap.power = try_fetch("power", &mut errors, mt.get_power()).await;
    snap.health = try_fetch("health", &mut errors, mt.get_health()).await;
    snap.ports = try_fetch("ports", &mut errors, mt.get_ports()).await;
    snap.ethernet = try_fetch("ethernet", &mut errors, mt.get_ethernet()).await;
    snap.if_stats = try_fetch("if_stats", &mut errors, mt.get_if_stats()).await;
    snap.optical = try_fetch("optical", &mut errors, mt.get_optical()).await;
    snap.storage = try_fetch("storage", &mut errors, mt.get_storage()).await;
    snap.partitions = try_fetch("partitions", &mut errors, mt.get_partitions()).await;
    snap.processor = try_fetch("processor", &mut errors, mt.get_processor()).await;
    snap.org = try_fetch("org", &mut errors, mt.get_org()).await;
    snap.neighbors = try_fetch("neighbors", &mut errors, mt.get_neighbors()).await;
    snap.ips = try_fetch("ips", &mut errors, mt.get_ips()).await;
    snap.routes = try_fetch("routes", &mut errors, mt.get_routes()).await;
    snap.media = try_fetch("media", &mut errors, mt.get_media()).await;
    snap.forward = try_fetch("forward", &mut errors, mt.get_forward()).await;
    snap.arp = try_fetch("arp", &mut errors, mt.get_arp()).await;
    snap.bridge_fdb = try_fetch("bridge_fdb", &mut errors, mt.get_bridge_fdb()).await;
    snap.lease_count = try_fetch("lease_count", &mut errors, mt.lease_count())
        .await
        .flatten();

    snap.errors = errors;
    snap
}
