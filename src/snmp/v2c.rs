use anyhow::{Context, Result};
use snmp2::AsyncSession;
use tokio::time::{timeout, Duration};

use super::oid::{oid_parts, parse_oid};
use super::value::{Diagnostic, QueryResult, SnmpValue};

const DEFAULT_MAX_REPETITIONS: u32 = 10;

/// SNMPv2c клиент поверх snmp2::AsyncSession.
/// Таймаут применяется к каждому запросу (GET / GETBULK итерация).
pub struct SnmpClientV2c {
    session: AsyncSession,
    timeout: Duration,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8], timeout: Duration) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .context("Не удалось создать SNMP сессию")?;

        Ok(Self { session, timeout })
    }

    /// Одиночный GET. Диагностика агента (noSuchObject и т.п.)
    /// возвращается в QueryResult, а не как ошибка.
    pub async fn get(&mut self, oid_str: &str) -> Result<QueryResult> {
        let oid = parse_oid(oid_str)?;

        let resp = timeout(self.timeout, self.session.get(&oid))
            .await
            .context("Таймаут SNMP GET запроса")?
            .context("SNMP GET запрос не удался")?;

        let (resp_oid, value) = resp
            .varbinds
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("SNMP ответ пустой"))?;

        let (value, diagnostic) = SnmpValue::decode(&value);
        Ok(QueryResult {
            path: oid_parts(&resp_oid),
            value,
            diagnostic,
        })
    }

    pub async fn walk(&mut self, root_oid: &str) -> Result<Vec<QueryResult>> {
        self.walk_bulk(root_oid, DEFAULT_MAX_REPETITIONS).await
    }

    /// Обход поддерева через GETBULK, пока OID не выйдет за пределы корня.
    /// Строки с диагностикой попадают в результат — их фильтрует сборка.
    pub async fn walk_bulk(
        &mut self,
        root_oid: &str,
        max_repetitions: u32,
    ) -> Result<Vec<QueryResult>> {
        let root = parse_oid(root_oid)?;
        let mut results: Vec<QueryResult> = Vec::new();
        let mut current_oid = root.to_owned();

        loop {
            let resp = timeout(
                self.timeout,
                self.session.getbulk(&[&current_oid], 0, max_repetitions),
            )
            .await
            .context("Таймаут SNMP GETBULK запроса")?
            .context("SNMP GETBULK запрос не удался")?;

            let mut found_any = false;

            for (oid, value) in resp.varbinds {
                if !oid.starts_with(&root) {
                    return Ok(results);
                }

                let (value, diagnostic) = SnmpValue::decode(&value);
                let row = QueryResult {
                    path: oid_parts(&oid),
                    value,
                    diagnostic,
                };

                // endOfMibView закрывает обход целиком
                let end_of_mib = row.diagnostic == Some(Diagnostic::EndOfMibView);
                results.push(row);
                if end_of_mib {
                    return Ok(results);
                }

                current_oid = oid.to_owned();
                found_any = true;
            }

            if !found_any {
                break;
            }
        }

        Ok(results)
    }
}
