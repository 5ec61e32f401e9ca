//! Опрос таблиц MikroTik устройства. Каждый метод делает один
//! walk (или get) и отдаёт собранные записи. Ошибки транспорта
//! пробрасываются как есть, аномалии данных ошибками не являются.

use anyhow::Result;
use tracing::debug;

pub mod snapshot;

use crate::assemble;
use crate::normalize::unquote_record;
use crate::params::tables;
use crate::record::{EntityRecord, RecordSet};
use crate::snmp::{prefix_len, QueryResult, SnmpClientV2c};

/// Корень энтерпрайз MIB MikroTik
pub const MIKROTIK_MIB: &str = "1.3.6.1.4.1.14988.1.1";

pub struct MtSnmp {
    client: SnmpClientV2c,
}

impl MtSnmp {
    pub fn new(client: SnmpClientV2c) -> Self {
        Self { client }
    }

    async fn walk(&mut self, oid: &str) -> Result<Vec<QueryResult>> {
        let rows = self.client.walk(oid).await?;
        debug!(oid, rows = rows.len(), "walk завершён");
        Ok(rows)
    }

    /// ifXTable — имена, алиасы и 64-битные счётчики портов
    pub async fn get_ports(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk("1.3.6.1.2.1.31.1.1.1").await?;
        Ok(assemble::indexed(&rows, &tables::PORT))
    }

    /// ifTable — базовые данные интерфейсов
    pub async fn get_ethernet(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk("1.3.6.1.2.1.2.2.1").await?;
        Ok(assemble::indexed(&rows, &tables::ETHERNET))
    }

    /// Системная информация — одна запись на устройство
    pub async fn get_system(&mut self) -> Result<EntityRecord> {
        let rows = self.walk("1.3.6.1.2.1.1").await?;
        Ok(assemble::single(&rows, &tables::SYSTEM))
    }

    /// IP адреса устройства, ключ — адрес
    pub async fn get_ips(&mut self) -> Result<RecordSet<String>> {
        let oid = "1.3.6.1.2.1.4.20.1";
        let rows = self.walk(oid).await?;
        Ok(assemble::keyed(&rows, prefix_len(oid), 0, &tables::IP))
    }

    /// Таблица маршрутов. Поддерживается не всеми моделями —
    /// на чистых коммутаторах вернётся пустой набор.
    pub async fn get_routes(&mut self) -> Result<RecordSet<String>> {
        let oid = "1.3.6.1.2.1.4.21.1";
        let rows = self.walk(oid).await?;
        Ok(assemble::keyed(&rows, prefix_len(oid), 0, &tables::ROUTE))
    }

    /// ipNetToMediaTable — привязки IP к MAC
    pub async fn get_media(&mut self) -> Result<RecordSet<String>> {
        let oid = "1.3.6.1.2.1.4.22.1";
        let rows = self.walk(oid).await?;
        Ok(assemble::media(&rows, prefix_len(oid)))
    }

    /// ipCidrRouteTable — форвардинг
    pub async fn get_forward(&mut self) -> Result<RecordSet<String>> {
        let oid = "1.3.6.1.2.1.4.24.4.1";
        let rows = self.walk(oid).await?;
        Ok(assemble::keyed(&rows, prefix_len(oid), 0, &tables::FORWARD))
    }

    /// ARP таблица: ip, mac, port на каждый адрес
    pub async fn get_arp(&mut self) -> Result<RecordSet<String>> {
        let oid = "1.3.6.1.2.1.4.22.1.2";
        let rows = self.walk(oid).await?;
        Ok(assemble::arp(&rows, prefix_len(oid)))
    }

    /// hrSystem — аптайм, дата, процессы
    pub async fn get_uptime(&mut self) -> Result<EntityRecord> {
        let rows = self.walk("1.3.6.1.2.1.25.1").await?;
        Ok(assemble::single(&rows, &tables::UPTIME))
    }

    /// hrStorageTable — диски и память
    pub async fn get_storage(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk("1.3.6.1.2.1.25.2.3.1").await?;
        Ok(assemble::indexed(&rows, &tables::STORAGE))
    }

    /// hrDevice + hrProcessor одним обходом, слитые в записи процессоров
    pub async fn get_processor(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk("1.3.6.1.2.1.25.3").await?;
        Ok(assemble::processor(&rows))
    }

    /// entPhysicalTable — данные о железе
    pub async fn get_org(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk("1.3.6.1.2.1.47.1.1.1.1").await?;
        Ok(assemble::indexed(&rows, &tables::ORG))
    }

    /// dot1dTpFdbTable — таблица коммутации моста, ключ MAC
    pub async fn get_bridge_fdb(&mut self) -> Result<RecordSet<String>> {
        let oid = "1.3.6.1.2.1.17.4.3.1";
        let rows = self.walk(oid).await?;
        Ok(assemble::bridge_fdb(&rows, prefix_len(oid)))
    }

    /// Питание и температуры. Есть только на части моделей.
    pub async fn get_power(&mut self) -> Result<EntityRecord> {
        let rows = self.walk(&format!("{MIKROTIK_MIB}.3")).await?;
        Ok(assemble::single(&rows, &tables::POWER))
    }

    /// Датчики health. Не поддерживается на 1036.
    pub async fn get_health(&mut self) -> Result<RecordSet<String>> {
        let rows = self.walk(&format!("{MIKROTIK_MIB}.3.100.1")).await?;
        Ok(assemble::health(&rows))
    }

    /// Лицензия RouterOS
    pub async fn get_license(&mut self) -> Result<EntityRecord> {
        let rows = self.walk(&format!("{MIKROTIK_MIB}.4")).await?;
        Ok(assemble::single(&rows, &tables::LICENSE))
    }

    /// Версия и серийник RouterOS. Прошивка заворачивает часть
    /// строк в кавычки — снимаем их после сборки.
    pub async fn get_os(&mut self) -> Result<EntityRecord> {
        let rows = self.walk(&format!("{MIKROTIK_MIB}.7")).await?;
        let mut record = assemble::single(&rows, &tables::OS);
        unquote_record(&mut record);
        Ok(record)
    }

    /// Соседи (MNDP/CDP/LLDP)
    pub async fn get_neighbors(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk(&format!("{MIKROTIK_MIB}.11")).await?;
        Ok(assemble::indexed(&rows, &tables::NEIGHBOR))
    }

    /// Счётчики драйвера интерфейсов
    pub async fn get_if_stats(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk(&format!("{MIKROTIK_MIB}.14")).await?;
        Ok(assemble::indexed(&rows, &tables::IF_STAT))
    }

    /// Партиции RouterBOOT
    pub async fn get_partitions(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk(&format!("{MIKROTIK_MIB}.17")).await?;
        Ok(assemble::indexed(&rows, &tables::PARTITION))
    }

    /// SFP модули. Агент может отдать endOfMibView посреди
    /// обхода — такие строки сборка пропускает.
    pub async fn get_optical(&mut self) -> Result<RecordSet<u64>> {
        let rows = self.walk(&format!("{MIKROTIK_MIB}.19")).await?;
        Ok(assemble::indexed(&rows, &tables::OPTICAL))
    }

    /// Алиас порта по индексу интерфейса
    pub async fn get_port_alias(&mut self, index: u64) -> Result<Option<String>> {
        let row = self
            .client
            .get(&format!("1.3.6.1.2.1.31.1.1.1.18.{index}"))
            .await?;
        Ok(scalar_string(row))
    }

    /// Имя порта по индексу интерфейса
    pub async fn get_port_name(&mut self, index: u64) -> Result<Option<String>> {
        let row = self
            .client
            .get(&format!("1.3.6.1.2.1.2.2.1.2.{index}"))
            .await?;
        Ok(scalar_string(row))
    }

    /// Количество выданных DHCP аренд
    pub async fn lease_count(&mut self) -> Result<Option<u64>> {
        let row = self.client.get(&format!("{MIKROTIK_MIB}.6.1.0")).await?;
        if row.diagnostic.is_some() {
            return Ok(None);
        }
        Ok(row.value.as_uint())
    }
}

/// Скалярный ответ как строка; диагностика даёт None
fn scalar_string(row: QueryResult) -> Option<String> {
    if row.diagnostic.is_some() {
        return None;
    }
    match row.value {
        crate::snmp::SnmpValue::Str(s) => Some(s),
        _ => None,
    }
}
