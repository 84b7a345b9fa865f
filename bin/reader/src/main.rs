use common::config::{LoadFromEnv, ReaderConfig};
use database::{ChainReader, PagingOptions, QueryOptions, Repo};
use eyre::Result;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cfg = ReaderConfig::load()?;

    let primary =
        database::connect::connect(&cfg.database.url, cfg.database.max_connections).await?;
    info!("Connected to primary DB");

    let replica = match &cfg.database.replica_url {
        Some(url) => {
            let conn = database::connect::connect(url, cfg.database.max_connections).await?;
            info!("Connected to replica DB");
            Some(conn)
        }
        None => {
            warn!("No replica configured, all reads go to the primary");
            None
        }
    };

    let reader = ChainReader::new(primary, replica);
    let options = QueryOptions::default()
        .with_repo(Repo::Replica)
        .with_paging(PagingOptions::first_page(cfg.page_size));

    let status = reader.status(&options).await?;
    info!(
        latest_batch = ?status.latest_batch_number,
        last_final_batch = status.last_final_batch_number,
        page_size = options.paging.page_size,
        "Fetched chain status"
    );
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
