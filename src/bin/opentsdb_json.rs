use opentsdbexample::{config, ingest, Measurement};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let dsn = config::dsn();
    log::debug!("dsn: {:?}", &dsn);

    let client = match ingest::connect(&dsn).await {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to connect to {}, ErrMessage: {}", dsn, err);
            return Err(err);
        }
    };

    ingest::prepare_database(&client, config::DB_NAME).await?;

    let meters = [
        Measurement::new("meters.current", 1648432611249, 10.3)
            .tag("location", "Beijing.Chaoyang")
            .tag("groupid", 2),
        Measurement::new("meters.voltage", 1648432611249, 219)
            .tag("location", "Beijing.Haidian")
            .tag("groupid", 1),
        Measurement::new("meters.current", 1648432611250, 12.6)
            .tag("location", "Beijing.Chaoyang")
            .tag("groupid", 2),
        Measurement::new("meters.voltage", 1648432611250, 221)
            .tag("location", "Beijing.Haidian")
            .tag("groupid", 1),
    ];

    if let Err(err) = ingest::put_json(&client, &meters).await {
        eprintln!("insert error: {}", err);
    }

    Ok(())
}
