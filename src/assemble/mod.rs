//! Сборка плоского результата walk'а в структурированные записи.
//!
//! Все функции чистые: на входе строки одного обхода, на выходе
//! записи с именованными полями. Группировка идёт по индексу
//! сущности из хвоста OID, порядок прихода строк роли не играет.
//! Строки с диагностикой (noSuchObject, endOfMibView) пропускаются,
//! поэтому неподдерживаемая таблица даёт пустой набор, а не ошибку.

use crate::normalize::{decimal_to_mac, mac_value};
use crate::params::{codes, tables, FieldCatalog};
use crate::record::{EntityRecord, RecordSet};
use crate::snmp::{QueryResult, SnmpValue};

/// Строки без диагностики
fn live_rows(rows: &[QueryResult]) -> impl Iterator<Item = &QueryResult> {
    rows.iter().filter(|r| r.diagnostic.is_none())
}

/// Хвост пути после фиксированного префикса таблицы
fn suffix<'a>(row: &'a QueryResult, prefix_len: usize) -> Option<&'a [u64]> {
    row.path.get(prefix_len..)
}

/// Обычная таблица: хвост пути [.., колонка, индекс].
/// Одна запись на индекс, поздние дубли колонок перезаписывают ранние.
pub fn indexed(rows: &[QueryResult], catalog: &FieldCatalog) -> RecordSet<u64> {
    let mut output: RecordSet<u64> = RecordSet::new();

    for row in live_rows(rows) {
        let len = row.path.len();
        if len < 2 {
            continue;
        }
        let column = row.path[len - 2];
        let index = row.path[len - 1];

        let field = catalog.resolve(column);
        output
            .entry(index)
            .or_default()
            .set(field, row.value.clone());
    }

    output
}

/// Скалярная таблица без индексов строк: всё в одну запись.
/// Колонка — предпоследний компонент, последний это инстанс (.0).
pub fn single(rows: &[QueryResult], catalog: &FieldCatalog) -> EntityRecord {
    let mut output = EntityRecord::new();

    for row in live_rows(rows) {
        let len = row.path.len();
        if len < 2 {
            continue;
        }
        let column = row.path[len - 2];

        output.set(catalog.resolve(column), row.value.clone());
    }

    output
}

/// Таблица с составным ключом: после префикса идёт колонка,
/// `skip` служебных компонентов и ключ из оставшихся компонентов
/// (обычно IP адрес). Таблица опциональна по контракту: если
/// обход вернул только диагностику, результат пустой.
pub fn keyed(
    rows: &[QueryResult],
    prefix_len: usize,
    skip: usize,
    catalog: &FieldCatalog,
) -> RecordSet<String> {
    let mut output: RecordSet<String> = RecordSet::new();

    for row in live_rows(rows) {
        let Some(tail) = suffix(row, prefix_len) else {
            continue;
        };
        if tail.len() < 2 + skip {
            continue;
        }
        let column = tail[0];
        let key = join_key(&tail[1 + skip..]);

        let field = catalog.resolve(column);
        output.entry(key).or_default().set(field, row.value.clone());
    }

    output
}

/// ipNetToMediaTable: составной ключ с одним служебным сегментом
/// плюс производное поле TypeName для колонки Type.
pub fn media(rows: &[QueryResult], prefix_len: usize) -> RecordSet<String> {
    let mut output: RecordSet<String> = RecordSet::new();

    for row in live_rows(rows) {
        let Some(tail) = suffix(row, prefix_len) else {
            continue;
        };
        if tail.len() < 3 {
            continue;
        }
        let column = tail[0];
        let key = join_key(&tail[2..]);

        let field = tables::MEDIA.resolve(column);
        let record = output.entry(key).or_default();
        record.set(field, row.value.clone());

        if column == 4 {
            if let Some(name) = row.value.as_uint().and_then(codes::media_type_name) {
                record.set("TypeName", SnmpValue::Str(name.to_string()));
            }
        }
    }

    output
}

/// ARP: обход одной колонки (PhysAddress), хвост [порт, ip...].
/// MAC нормализуется сразу — MikroTik теряет ведущие нули.
pub fn arp(rows: &[QueryResult], prefix_len: usize) -> RecordSet<String> {
    let mut output: RecordSet<String> = RecordSet::new();

    for row in live_rows(rows) {
        let Some(tail) = suffix(row, prefix_len) else {
            continue;
        };
        if tail.len() < 2 {
            continue;
        }
        let port = tail[0];
        let ip = join_key(&tail[1..]);

        let mut record = EntityRecord::new();
        record.set("ip", SnmpValue::Str(ip.clone()));
        if let Some(mac) = mac_value(&row.value) {
            record.set("mac", SnmpValue::Str(mac));
        }
        record.set("port", SnmpValue::Uint(port));
        output.insert(ip, record);
    }

    output
}

/// Датчики health: хвост [роль, датчик]. Роль 2 объявляет датчик,
/// 3 — значение, 4 — единицу измерения с производным UnitName.
/// Подзапись создаётся лениво при первой встрече любой роли,
/// порядок строк не важен.
pub fn health(rows: &[QueryResult]) -> RecordSet<String> {
    let mut output: RecordSet<String> = RecordSet::new();

    for row in live_rows(rows) {
        let len = row.path.len();
        if len < 2 {
            continue;
        }
        let sensor = row.path[len - 1];
        let role = row.path[len - 2];

        let name = tables::HEALTH.resolve(sensor);
        let record = output.entry(name.to_string()).or_default();

        match role {
            2 => {}
            3 => record.set("Value", row.value.clone()),
            4 => {
                record.set("Unit", row.value.clone());
                if let Some(unit) = row.value.as_uint().and_then(codes::unit_name) {
                    record.set("UnitName", SnmpValue::Str(unit.to_string()));
                }
            }
            _ => {}
        }
    }

    output
}

/// Процессор: два физически разных поддерева hrDevice (.2) и
/// hrProcessor (.3) сливаются в одну запись на индекс устройства.
/// Хвост пути [секция, _, колонка, индекс]; секция выбирает каталог.
/// Для hrDeviceStatus добавляется производное StatusName.
pub fn processor(rows: &[QueryResult]) -> RecordSet<u64> {
    let mut output: RecordSet<u64> = RecordSet::new();

    for row in live_rows(rows) {
        let len = row.path.len();
        if len < 4 {
            continue;
        }
        let section = row.path[len - 4];
        let column = row.path[len - 2];
        let index = row.path[len - 1];

        let field = if section == 2 {
            tables::HR_DEVICE.resolve(column)
        } else {
            tables::PROCESSOR.resolve(column)
        };

        let record = output.entry(index).or_default();
        record.set(field, row.value.clone());

        if section == 2 && column == 5 {
            if let Some(status) = row.value.as_uint().and_then(codes::device_status_name) {
                record.set("StatusName", SnmpValue::Str(status.to_string()));
            }
        }
    }

    output
}

/// Таблица коммутации моста: ключ — шесть десятичных байтов MAC
/// в хвосте OID, конвертируется в каноническую запись адреса.
pub fn bridge_fdb(rows: &[QueryResult], prefix_len: usize) -> RecordSet<String> {
    let mut output: RecordSet<String> = RecordSet::new();

    for row in live_rows(rows) {
        let Some(tail) = suffix(row, prefix_len) else {
            continue;
        };
        if tail.len() < 2 {
            continue;
        }
        let column = tail[0];
        let mac = decimal_to_mac(&join_key(&tail[1..]));

        let field = tables::BRIDGE_FDB.resolve(column);
        let record = output.entry(mac).or_default();

        // колонка адреса приходит сырыми байтами
        if column == 1 {
            if let Some(addr) = mac_value(&row.value) {
                record.set(field, SnmpValue::Str(addr));
                continue;
            }
        }
        record.set(field, row.value.clone());

        if column == 3 {
            if let Some(status) = row.value.as_uint().and_then(codes::fdb_status_name) {
                record.set("StatusName", SnmpValue::Str(status.to_string()));
            }
        }
    }

    output
}

fn join_key(parts: &[u64]) -> String {
    parts
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::Diagnostic;

    const IF_TABLE: &[u64] = &[1, 3, 6, 1, 2, 1, 2, 2, 1];
    const ROUTE_TABLE: &[u64] = &[1, 3, 6, 1, 2, 1, 4, 21, 1];
    const MEDIA_TABLE: &[u64] = &[1, 3, 6, 1, 2, 1, 4, 22, 1];
    const ARP_COLUMN: &[u64] = &[1, 3, 6, 1, 2, 1, 4, 22, 1, 2];
    const FDB_TABLE: &[u64] = &[1, 3, 6, 1, 2, 1, 17, 4, 3, 1];

    fn row(prefix: &[u64], tail: &[u64], value: SnmpValue) -> QueryResult {
        let mut path = prefix.to_vec();
        path.extend_from_slice(tail);
        QueryResult::new(path, value)
    }

    fn s(v: &str) -> SnmpValue {
        SnmpValue::Str(v.to_string())
    }

    #[test]
    fn indexed_groups_by_trailing_index() {
        // сценарий ifTable: два интерфейса, у второго нет Type
        let rows = vec![
            row(IF_TABLE, &[2, 1], s("eth0")),
            row(IF_TABLE, &[3, 1], SnmpValue::Int(1000)),
            row(IF_TABLE, &[2, 2], s("eth1")),
        ];

        let set = indexed(&rows, &tables::ETHERNET);
        assert_eq!(set.len(), 2);
        assert_eq!(set[&1].get_str("Descr"), Some("eth0"));
        assert_eq!(set[&1].get_int("Type"), Some(1000));
        assert_eq!(set[&2].get_str("Descr"), Some("eth1"));
        assert!(!set[&2].contains("Type"));
    }

    #[test]
    fn indexed_is_order_independent() {
        let rows = vec![
            row(IF_TABLE, &[2, 1], s("eth0")),
            row(IF_TABLE, &[3, 1], SnmpValue::Int(1000)),
            row(IF_TABLE, &[2, 2], s("eth1")),
            row(IF_TABLE, &[4, 2], SnmpValue::Int(1500)),
        ];
        let mut shuffled = rows.clone();
        shuffled.reverse();
        shuffled.swap(0, 2);

        assert_eq!(
            indexed(&rows, &tables::ETHERNET),
            indexed(&shuffled, &tables::ETHERNET)
        );
    }

    #[test]
    fn indexed_every_index_appears_once() {
        let rows: Vec<QueryResult> = (1..=5)
            .flat_map(|i| {
                vec![
                    row(IF_TABLE, &[2, i], s("x")),
                    row(IF_TABLE, &[4, i], SnmpValue::Int(1500)),
                ]
            })
            .collect();

        let set = indexed(&rows, &tables::ETHERNET);
        assert_eq!(set.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unknown_column_resolves_to_unknown() {
        let rows = vec![row(IF_TABLE, &[777, 1], s("vendor-specific"))];
        let set = indexed(&rows, &tables::ETHERNET);
        assert_eq!(set[&1].get_str("Unknown"), Some("vendor-specific"));
    }

    #[test]
    fn duplicate_column_last_write_wins() {
        let rows = vec![
            row(IF_TABLE, &[2, 1], s("first")),
            row(IF_TABLE, &[2, 1], s("second")),
        ];
        let set = indexed(&rows, &tables::ETHERNET);
        assert_eq!(set[&1].get_str("Descr"), Some("second"));
        assert_eq!(set[&1].len(), 1);
    }

    #[test]
    fn diagnostic_rows_are_skipped() {
        let rows = vec![
            row(IF_TABLE, &[2, 1], s("eth0")),
            QueryResult::diagnostic([IF_TABLE, &[3, 1][..]].concat(), Diagnostic::EndOfMibView),
        ];
        let set = indexed(&rows, &tables::ETHERNET);
        assert_eq!(set.len(), 1);
        assert!(!set[&1].contains("Type"));
    }

    #[test]
    fn single_record_accumulates_all_columns() {
        // sysDescr.0, sysName.0, плюс недокументированная колонка
        let prefix = &[1u64, 3, 6, 1, 2, 1, 1][..];
        let rows = vec![
            row(prefix, &[1, 0], s("RouterOS CCR1036")),
            row(prefix, &[5, 0], s("core-gw")),
            row(prefix, &[200, 0], SnmpValue::Int(7)),
        ];

        let rec = single(&rows, &tables::SYSTEM);
        assert_eq!(rec.get_str("Descr"), Some("RouterOS CCR1036"));
        assert_eq!(rec.get_str("Name"), Some("core-gw"));
        assert_eq!(rec.get_int("Unknown"), Some(7));
    }

    #[test]
    fn keyed_reconstructs_ip_key() {
        let rows = vec![
            row(ROUTE_TABLE, &[1, 10, 1, 99, 0], s("10.1.99.0")),
            row(ROUTE_TABLE, &[7, 10, 1, 99, 0], s("10.1.99.1")),
            row(ROUTE_TABLE, &[1, 0, 0, 0, 0], s("0.0.0.0")),
        ];

        let set = keyed(&rows, ROUTE_TABLE.len(), 0, &tables::ROUTE);
        assert_eq!(set.len(), 2);
        assert_eq!(set["10.1.99.0"].get_str("Dest"), Some("10.1.99.0"));
        assert_eq!(set["10.1.99.0"].get_str("NextHop"), Some("10.1.99.1"));
        assert_eq!(set["0.0.0.0"].get_str("Dest"), Some("0.0.0.0"));
    }

    #[test]
    fn unsupported_table_yields_empty_set() {
        // единственная строка с noSuchObject — таблицы нет на модели
        let rows = vec![QueryResult::diagnostic(
            ROUTE_TABLE.to_vec(),
            Diagnostic::NoSuchObject,
        )];
        let set = keyed(&rows, ROUTE_TABLE.len(), 0, &tables::ROUTE);
        assert!(set.is_empty());
    }

    #[test]
    fn media_skips_metadata_segment_and_decodes_type() {
        let rows = vec![
            row(MEDIA_TABLE, &[2, 1, 192, 168, 0, 5], SnmpValue::Bytes(vec![0, 12, 66, 1, 2, 3])),
            row(MEDIA_TABLE, &[4, 1, 192, 168, 0, 5], SnmpValue::Int(3)),
        ];

        let set = media(&rows, MEDIA_TABLE.len());
        let rec = &set["192.168.0.5"];
        assert_eq!(rec.get_int("Type"), Some(3));
        assert_eq!(rec.get_str("TypeName"), Some("dynamic"));
        assert!(rec.contains("PhysAddress"));
    }

    #[test]
    fn media_unknown_type_code_leaves_typename_absent() {
        let rows = vec![row(MEDIA_TABLE, &[4, 1, 10, 0, 0, 1], SnmpValue::Int(42))];
        let set = media(&rows, MEDIA_TABLE.len());
        assert_eq!(set["10.0.0.1"].get_int("Type"), Some(42));
        assert!(!set["10.0.0.1"].contains("TypeName"));
    }

    #[test]
    fn arp_formats_mac_and_keys_by_ip() {
        let rows = vec![
            row(ARP_COLUMN, &[5, 192, 168, 0, 7], s("0:c:42:1:2:3")),
            row(ARP_COLUMN, &[5, 192, 168, 0, 8], SnmpValue::Bytes(vec![0xAA, 0xBB, 0xCC, 0, 0x11, 0x02])),
        ];

        let set = arp(&rows, ARP_COLUMN.len());
        assert_eq!(set["192.168.0.7"].get_str("mac"), Some("00:0C:42:01:02:03"));
        assert_eq!(set["192.168.0.7"].get_uint("port"), Some(5));
        assert_eq!(set["192.168.0.8"].get_str("mac"), Some("AA:BB:CC:00:11:02"));
        assert_eq!(set["192.168.0.8"].get_str("ip"), Some("192.168.0.8"));
    }

    #[test]
    fn health_builds_sensor_subrecords() {
        // сценарий из жизни: объявление, значение, единица
        let prefix = &[1u64, 3, 6, 1, 4, 1, 14988, 1, 1, 3, 100, 1][..];
        let rows = vec![
            row(prefix, &[2, 14], s("temperature")),
            row(prefix, &[3, 14], SnmpValue::Int(42)),
            row(prefix, &[4, 14], SnmpValue::Int(1)),
        ];

        let set = health(&rows);
        let rec = &set["temperature"];
        assert_eq!(rec.get_int("Value"), Some(42));
        assert_eq!(rec.get_int("Unit"), Some(1));
        assert_eq!(rec.get_str("UnitName"), Some("celsius"));
    }

    #[test]
    fn health_tolerates_out_of_order_roles() {
        // значение до объявления датчика: подзапись создаётся лениво
        let prefix = &[1u64, 3, 6, 1, 4, 1, 14988, 1, 1, 3, 100, 1][..];
        let rows = vec![
            row(prefix, &[4, 7001], SnmpValue::Int(2)),
            row(prefix, &[3, 7001], SnmpValue::Int(5200)),
            row(prefix, &[2, 7001], s("fan1-speed")),
        ];

        let set = health(&rows);
        let rec = &set["fan1-speed"];
        assert_eq!(rec.get_int("Value"), Some(5200));
        assert_eq!(rec.get_str("UnitName"), Some("rpm"));
    }

    #[test]
    fn health_unknown_unit_code_leaves_unitname_absent() {
        let prefix = &[1u64, 3, 6, 1, 4, 1, 14988, 1, 1, 3, 100, 1][..];
        let rows = vec![row(prefix, &[4, 14], SnmpValue::Int(99))];

        let set = health(&rows);
        assert_eq!(set["temperature"].get_int("Unit"), Some(99));
        assert!(!set["temperature"].contains("UnitName"));
    }

    #[test]
    fn processor_merges_both_subtrees_per_index() {
        let hr = &[1u64, 3, 6, 1, 2, 1, 25, 3][..];
        let rows = vec![
            // hrDeviceTable: .2.1.<column>.<index>
            row(hr, &[2, 1, 3, 768], s("cpu0")),
            row(hr, &[2, 1, 5, 768], SnmpValue::Int(2)),
            // hrProcessorTable: .3.1.<column>.<index>
            row(hr, &[3, 1, 2, 768], SnmpValue::Int(17)),
        ];

        let set = processor(&rows);
        let rec = &set[&768];
        assert_eq!(rec.get_str("DeviceDescr"), Some("cpu0"));
        assert_eq!(rec.get_int("DeviceStatus"), Some(2));
        assert_eq!(rec.get_str("StatusName"), Some("running"));
        assert_eq!(rec.get_int("ProcessorLoad"), Some(17));
    }

    #[test]
    fn processor_unknown_status_code_leaves_name_absent() {
        let hr = &[1u64, 3, 6, 1, 2, 1, 25, 3][..];
        let rows = vec![row(hr, &[2, 1, 5, 768], SnmpValue::Int(42))];

        let set = processor(&rows);
        assert_eq!(set[&768].get_int("DeviceStatus"), Some(42));
        assert!(!set[&768].contains("StatusName"));
    }

    #[test]
    fn bridge_fdb_keys_by_converted_mac() {
        let rows = vec![
            row(FDB_TABLE, &[2, 10, 11, 12, 13, 14, 15], SnmpValue::Int(3)),
            row(FDB_TABLE, &[3, 10, 11, 12, 13, 14, 15], SnmpValue::Int(3)),
            row(
                FDB_TABLE,
                &[1, 10, 11, 12, 13, 14, 15],
                SnmpValue::Bytes(vec![10, 11, 12, 13, 14, 15]),
            ),
        ];

        let set = bridge_fdb(&rows, FDB_TABLE.len());
        let rec = &set["0A:0B:0C:0D:0E:0F"];
        assert_eq!(rec.get_int("Port"), Some(3));
        assert_eq!(rec.get_str("StatusName"), Some("learned"));
        assert_eq!(rec.get_str("Address"), Some("0A:0B:0C:0D:0E:0F"));
    }

    #[test]
    fn short_paths_are_ignored_not_fatal() {
        let rows = vec![QueryResult::new(vec![1], SnmpValue::Int(1))];
        assert!(indexed(&rows, &tables::ETHERNET).is_empty());
        assert!(single(&rows, &tables::SYSTEM).is_empty());
        assert!(keyed(&rows, 9, 0, &tables::ROUTE).is_empty());
        assert!(processor(&rows).is_empty());
    }
}
