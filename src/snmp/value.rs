use serde::Serialize;
use snmp2::Value;

/// Диагностика агента вместо реального значения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

/// Собственное (owned) представление SNMP значения.
/// snmp2::Value заимствует буфер ответа, поэтому для хранения
/// в записях конвертируем сразу после получения.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SnmpValue {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Null,
}

impl SnmpValue {
    /// Конвертирует snmp2::Value в owned значение и отдельно диагностику
    pub fn decode(value: &Value<'_>) -> (Self, Option<Diagnostic>) {
        match value {
            Value::Integer(i) => (SnmpValue::Int(*i), None),
            Value::Counter32(u) => (SnmpValue::Uint(u64::from(*u)), None),
            Value::Unsigned32(u) => (SnmpValue::Uint(u64::from(*u)), None),
            Value::Timeticks(u) => (SnmpValue::Uint(u64::from(*u)), None),
            Value::Counter64(u) => (SnmpValue::Uint(*u), None),
            Value::Boolean(b) => (SnmpValue::Int(i64::from(*b)), None),
            Value::OctetString(bytes) => match std::str::from_utf8(bytes) {
                Ok(s) => (SnmpValue::Str(s.to_string()), None),
                Err(_) => (SnmpValue::Bytes(bytes.to_vec()), None),
            },
            Value::Opaque(bytes) => (SnmpValue::Bytes(bytes.to_vec()), None),
            Value::ObjectIdentifier(oid) => (SnmpValue::Str(oid.to_string()), None),
            Value::IpAddress(octets) => (
                SnmpValue::Str(format!(
                    "{}.{}.{}.{}",
                    octets[0], octets[1], octets[2], octets[3]
                )),
                None,
            ),
            Value::NoSuchObject => (SnmpValue::Null, Some(Diagnostic::NoSuchObject)),
            Value::NoSuchInstance => (SnmpValue::Null, Some(Diagnostic::NoSuchInstance)),
            Value::EndOfMibView => (SnmpValue::Null, Some(Diagnostic::EndOfMibView)),
            _ => (SnmpValue::Null, None),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SnmpValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SnmpValue::Int(i) => Some(*i),
            SnmpValue::Uint(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            SnmpValue::Uint(u) => Some(*u),
            SnmpValue::Int(i) if *i >= 0 => Some(*i as u64),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            SnmpValue::Float(f) => Some(*f),
            SnmpValue::Int(i) => Some(*i as f64),
            SnmpValue::Uint(u) => Some(*u as f64),
            _ => None,
        }
    }
}

/// Одна строка ответа: путь (OID как числа), значение и диагностика
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub path: Vec<u64>,
    pub value: SnmpValue,
    pub diagnostic: Option<Diagnostic>,
}

impl QueryResult {
    pub fn new(path: Vec<u64>, value: SnmpValue) -> Self {
        Self {
            path,
            value,
            diagnostic: None,
        }
    }

    pub fn diagnostic(path: Vec<u64>, diagnostic: Diagnostic) -> Self {
        Self {
            path,
            value: SnmpValue::Null,
            diagnostic: Some(diagnostic),
        }
    }
}
