use anyhow::{Context, Result};
use snmp2::Oid;

/// Парсит строку OID в объект Oid
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts: Result<Vec<u64>, _> = s
        .trim()
        .trim_start_matches('.')
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.context(format!("Невалидный OID: {}", s))?;
    Oid::from(&parts).map_err(|e| anyhow::anyhow!("Не удалось создать Oid из '{}': {:?}", s, e))
}

/// Разбирает OID обратно в числовые компоненты пути
pub fn oid_parts(oid: &Oid<'_>) -> Vec<u64> {
    oid.to_string()
        .split('.')
        .filter(|p| !p.is_empty())
        .filter_map(|p| p.parse::<u64>().ok())
        .collect()
}

/// Длина префикса таблицы в компонентах
pub fn prefix_len(oid_str: &str) -> usize {
    oid_str
        .trim()
        .trim_start_matches('.')
        .split('.')
        .filter(|p| !p.is_empty())
        .count()
}
