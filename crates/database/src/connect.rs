use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

pub async fn connect(
    database_url: &str,
    max_connections: Option<u32>,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.sqlx_logging(false); // Disable SQLx log
    if let Some(max_connections) = max_connections {
        opt.max_connections(max_connections);
    }

    Database::connect(opt).await
}
