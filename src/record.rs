use std::collections::BTreeMap;

use serde::Serialize;

use crate::snmp::SnmpValue;

/// Одна строка логической таблицы. Набор полей не фиксирован —
/// какие колонки устройство отдало, те и есть.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntityRecord(BTreeMap<String, SnmpValue>);

impl EntityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Повторная запись того же поля молча перезаписывает
    /// предыдущее значение — так ведут себя реальные прошивки.
    pub fn set(&mut self, field: impl Into<String>, value: SnmpValue) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&SnmpValue> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(SnmpValue::as_str)
    }

    pub fn get_int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(SnmpValue::as_int)
    }

    pub fn get_uint(&self, field: &str) -> Option<u64> {
        self.get(field).and_then(SnmpValue::as_uint)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SnmpValue)> {
        self.0.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut SnmpValue> {
        self.0.values_mut()
    }
}

/// Набор записей таблицы, ключ — идентификатор сущности
/// (номер интерфейса, IP, имя датчика). Порядок итерации
/// детерминирован и не зависит от порядка прихода строк.
pub type RecordSet<K> = BTreeMap<K, EntityRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let mut rec = EntityRecord::new();
        rec.set("Name", SnmpValue::Str("ether1".into()));
        rec.set("Speed", SnmpValue::Uint(1_000_000_000));
        rec.set("Status", SnmpValue::Int(2));

        assert_eq!(rec.get_str("Name"), Some("ether1"));
        assert_eq!(rec.get_uint("Speed"), Some(1_000_000_000));
        assert_eq!(rec.get_int("Status"), Some(2));
        assert_eq!(rec.get_str("Speed"), None);
        assert_eq!(rec.get("Missing"), None);
    }

    #[test]
    fn set_overwrites_silently() {
        let mut rec = EntityRecord::new();
        rec.set("Descr", SnmpValue::Str("old".into()));
        rec.set("Descr", SnmpValue::Str("new".into()));
        assert_eq!(rec.get_str("Descr"), Some("new"));
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut rec = EntityRecord::new();
        rec.set("Mtu", SnmpValue::Int(1500));
        rec.set("Descr", SnmpValue::Str("ether1".into()));
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"Descr":"ether1","Mtu":1500}"#);
    }
}
