//! Connection bootstrap, database preparation and schemaless submission.

use taos::taos_query::common::{SchemalessPrecision, SchemalessProtocol, SmlDataBuilder};
use taos::{AsyncQueryable, AsyncTBuilder, Taos, TaosBuilder};

use crate::measurement::{json_payload, telnet_lines, Measurement};

/// Open a connection to `dsn`.
///
/// The connection closes when the returned handle is dropped. The example
/// programs treat a failure here as fatal and abort before any statement
/// or insert.
pub async fn connect(dsn: &str) -> anyhow::Result<Taos> {
    log::debug!("connecting to {dsn}");
    let taos = TaosBuilder::from_dsn(dsn)?.build().await?;
    Ok(taos)
}

/// Create `db` if needed and select it as the active database.
///
/// Schemaless submission requires an active database, so both statements
/// must succeed before any insert is attempted.
pub async fn prepare_database(taos: &Taos, db: &str) -> anyhow::Result<()> {
    taos.exec_many([
        format!("CREATE DATABASE IF NOT EXISTS `{db}`"),
        format!("USE `{db}`"),
    ])
    .await?;
    Ok(())
}

/// Submit a batch as one OpenTSDB-style JSON payload.
pub async fn put_json(taos: &Taos, batch: &[Measurement]) -> anyhow::Result<()> {
    let payload = json_payload(batch)?;
    log::debug!("json payload: {payload}");

    let sml_data = SmlDataBuilder::default()
        .protocol(SchemalessProtocol::Json)
        .precision(SchemalessPrecision::Millisecond)
        .data(vec![payload])
        .build()?;
    taos.put(&sml_data).await?;

    log::info!("submitted {} records over the json protocol", batch.len());
    Ok(())
}

/// Submit a batch as telnet lines, one measurement per line.
pub async fn put_telnet(taos: &Taos, batch: &[Measurement]) -> anyhow::Result<()> {
    let lines = telnet_lines(batch);
    log::debug!("telnet lines: {lines:?}");

    let sml_data = SmlDataBuilder::default()
        .protocol(SchemalessProtocol::Telnet)
        .precision(SchemalessPrecision::Millisecond)
        .data(lines)
        .build()?;
    taos.put(&sml_data).await?;

    log::info!("submitted {} records over the telnet protocol", batch.len());
    Ok(())
}
