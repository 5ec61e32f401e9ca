use serde::{Deserialize, Serialize};

/// Базовые настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Настройки подключения
    pub connection: ConnectionSettings,
    /// Настройки аутентификации
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// IPv4 адрес устройства
    pub ip: String,
    /// UDP порт SNMP агента
    pub port: u16,
    /// Таймаут SNMP операций (секунды)
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Community string для SNMPv2c
    pub community: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connection: ConnectionSettings::default(),
            auth: AuthSettings::default(),
        }
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: 161,
            timeout: 10,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            community: "public".to_string(),
        }
    }
}
