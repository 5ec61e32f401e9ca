pub mod codes;
pub mod tables;

/// Имя поля для неизвестных колонок. Прошивки отдают
/// недокументированные колонки — это не ошибка.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Статическая таблица колонка → имя поля для одной логической таблицы.
/// Только чтение, собирается на этапе компиляции.
#[derive(Debug)]
pub struct FieldCatalog {
    pub name: &'static str,
    fields: &'static [(u64, &'static str)],
}

impl FieldCatalog {
    pub const fn new(name: &'static str, fields: &'static [(u64, &'static str)]) -> Self {
        Self { name, fields }
    }

    /// Разрешает id колонки в имя поля. Никогда не падает:
    /// неизвестный id превращается в "Unknown".
    pub fn resolve(&self, column: u64) -> &'static str {
        self.fields
            .iter()
            .find(|(id, _)| *id == column)
            .map(|(_, name)| *name)
            .unwrap_or(UNKNOWN_FIELD)
    }
}
