use serde::Serialize;

use crate::collector::snapshot::DeviceSnapshot;

/// Обёртка снимка для отдачи монолиту
#[derive(Debug, Serialize)]
pub struct SnapshotReport {
    pub target: String,
    pub timestamp: String,
    pub summary: ReportSummary,
    pub data: DeviceSnapshot,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub failed_tables: usize,
    pub interfaces: usize,
    pub routes: usize,
    pub arp_entries: usize,
}

/// JSON форматтер для результатов опроса
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn build_report(target: &str, snapshot: DeviceSnapshot) -> SnapshotReport {
        let summary = ReportSummary {
            failed_tables: snapshot.failed_tables(),
            interfaces: snapshot.ethernet.as_ref().map_or(0, |t| t.len()),
            routes: snapshot.routes.as_ref().map_or(0, |t| t.len()),
            arp_entries: snapshot.arp.as_ref().map_or(0, |t| t.len()),
        };

        SnapshotReport {
            target: target.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary,
            data: snapshot,
        }
    }

    /// Сериализует снимок в читаемый JSON
    pub fn to_json_string(target: &str, snapshot: DeviceSnapshot) -> anyhow::Result<String> {
        let report = Self::build_report(target, snapshot);
        serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }

    /// Компактный JSON для машинной обработки
    pub fn to_json_compact(target: &str, snapshot: DeviceSnapshot) -> anyhow::Result<String> {
        let report = Self::build_report(target, snapshot);
        serde_json::to_string(&report)
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }
}
