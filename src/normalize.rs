//! Пост-обработка значений: MAC адреса, кавычки в строках.
//! Всё чистые функции, применяются после сборки записей.

use crate::record::EntityRecord;
use crate::snmp::SnmpValue;

/// Приводит MAC к каноническому виду: верхний регистр,
/// односимвольные сегменты дополняются нулём слева.
/// MikroTik отдаёт MAC без ведущих нулей ("0:c:42:...").
/// Идемпотентна: нормализованный адрес не меняется.
pub fn format_mac(input: &str) -> String {
    input
        .split(':')
        .map(|part| {
            let part = part.to_ascii_uppercase();
            if part.len() == 1 {
                format!("0{part}")
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join(":")
}

/// Конвертирует десятичные байты из хвоста OID в MAC:
/// "10.11.12.13.14.15" → "0A:0B:0C:0D:0E:0F".
/// Некорректный сегмент оставляет вход как есть.
pub fn decimal_to_mac(input: &str) -> String {
    let parts: Option<Vec<String>> = input
        .split('.')
        .map(|p| p.parse::<u8>().ok().map(|b| format!("{b:02X}")))
        .collect();

    match parts {
        Some(parts) => format_mac(&parts.join(":")),
        None => input.to_string(),
    }
}

/// Сырые байты OctetString в MAC строку
pub fn mac_from_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// MAC из SNMP значения независимо от того, пришла строка или байты
pub fn mac_value(value: &SnmpValue) -> Option<String> {
    match value {
        SnmpValue::Str(s) => Some(format_mac(s)),
        SnmpValue::Bytes(b) => Some(mac_from_bytes(b)),
        _ => None,
    }
}

/// Убирает литеральные кавычки из строки.
/// Прошивки RouterOS заворачивают часть OS полей в кавычки.
pub fn unquote(input: &str) -> String {
    input.replace('"', "")
}

/// Применяет unquote ко всем строковым полям записи
pub fn unquote_record(record: &mut EntityRecord) {
    for value in record.values_mut() {
        if let SnmpValue::Str(s) = value {
            if s.contains('"') {
                *value = SnmpValue::Str(unquote(s));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_mac_pads_and_uppercases() {
        assert_eq!(format_mac("a:b:c:0:11:2"), "0A:0B:0C:00:11:02");
    }

    #[test]
    fn format_mac_is_idempotent() {
        let canonical = "AA:BB:CC:00:11:02";
        assert_eq!(format_mac(canonical), canonical);
        assert_eq!(format_mac(&format_mac("a:b:c:0:11:2")), "0A:0B:0C:00:11:02");
    }

    #[test]
    fn decimal_to_mac_converts_bytes() {
        assert_eq!(decimal_to_mac("10.11.12.13.14.15"), "0A:0B:0C:0D:0E:0F");
        assert_eq!(decimal_to_mac("0.12.66.1.2.3"), "00:0C:42:01:02:03");
    }

    #[test]
    fn decimal_to_mac_leaves_malformed_input() {
        assert_eq!(decimal_to_mac("10.999.12"), "10.999.12");
        assert_eq!(decimal_to_mac("not.an.address"), "not.an.address");
    }

    #[test]
    fn mac_from_bytes_pads() {
        assert_eq!(mac_from_bytes(&[0, 12, 66, 1, 2, 3]), "00:0C:42:01:02:03");
    }

    #[test]
    fn unquote_strips_quotes() {
        assert_eq!(unquote("\"6.48.6\""), "6.48.6");
        assert_eq!(unquote("plain"), "plain");
    }

    #[test]
    fn unquote_record_touches_only_strings() {
        let mut rec = EntityRecord::new();
        rec.set("FirmwareVersion", SnmpValue::Str("\"7.14.2\"".into()));
        rec.set("SystemReboot", SnmpValue::Int(0));
        unquote_record(&mut rec);
        assert_eq!(rec.get_str("FirmwareVersion"), Some("7.14.2"));
        assert_eq!(rec.get_int("SystemReboot"), Some(0));
    }
}
