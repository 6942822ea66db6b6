use opentsdbexample::{config, ingest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let dsn = config::dsn();

    match ingest::connect(&dsn).await {
        Ok(_taos) => {
            println!("Connected to {} successfully.", dsn);
            Ok(())
        }
        Err(err) => {
            eprintln!("Failed to connect to {}, ErrMessage: {}", dsn, err);
            Err(err)
        }
    }
}
