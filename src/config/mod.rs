use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::time::Duration;

pub mod settings;

pub use settings::Settings;

/// Конфигурация приложения: YAML файл настроек (опционально)
/// плюс переменные окружения поверх.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: Settings,
}

impl AppConfig {
    /// Загружает настройки. Путь берётся из MT_SETTINGS,
    /// отсутствующий файл — не ошибка, работаем на дефолтах.
    pub fn load() -> Result<Self> {
        let settings = match env::var("MT_SETTINGS") {
            Ok(path) => Self::read_settings(Path::new(&path))?,
            Err(_) => Settings::default(),
        };

        Ok(Self { settings })
    }

    fn read_settings(path: &Path) -> Result<Settings> {
        let content = std::fs::read_to_string(path)
            .context(format!("Не удалось прочитать файл: {}", path.display()))?;

        serde_yml::from_str(&content).context("Не удалось распарсить YAML настроек")
    }

    /// Адрес устройства host:port. MT_IP переопределяет файл.
    pub fn target(&self) -> String {
        let ip = env::var("MT_IP").unwrap_or_else(|_| self.settings.connection.ip.clone());
        format!("{}:{}", ip, self.settings.connection.port)
    }

    /// Community для SNMPv2c
    pub fn community(&self) -> Vec<u8> {
        env::var("MT_COMMUNITY")
            .unwrap_or_else(|_| self.settings.auth.community.clone())
            .into_bytes()
    }

    /// Таймаут SNMP операций
    pub fn timeout(&self) -> Duration {
        let secs = env::var("MT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.settings.connection.timeout);
        Duration::from_secs(secs)
    }
}
