use config::{builder::DefaultState, Config, ConfigBuilder, File};
use dotenv::dotenv;
use eyre::{eyre, Result};
use serde::{de::DeserializeOwned, Deserialize};

fn config_from_env() -> Result<AppConfig> {
    dotenv().ok();

    let builder = Config::builder()
        .add_source(File::with_name("config.yaml").required(false))
        .add_source(
            config::Environment::default()
                .separator("__")
                .list_separator(","),
        );

    config_from_builder(builder)
}

fn config_from_builder(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig> {
    let settings = builder.build()?;
    settings.try_deserialize().map_err(eyre::Error::from)
}

pub trait LoadFromEnv: Sized + DeserializeOwned {
    fn load() -> Result<Self>;
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub reader: Option<ReaderConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Read replica, reads fall back to `url` when unset.
    pub replica_url: Option<String>,
    pub max_connections: Option<u32>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReaderConfig {
    pub database: DatabaseConfig,
    pub page_size: Option<u64>,
}

impl ReaderConfig {
    fn from_app_config(app: AppConfig) -> Result<Self> {
        app.reader
            .ok_or_else(|| eyre!("Configuration for the 'reader' service is missing."))
    }
}

impl LoadFromEnv for ReaderConfig {
    fn load() -> Result<Self> {
        ReaderConfig::from_app_config(config_from_env()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_yaml(yaml: &str) -> Result<ReaderConfig> {
        let builder = Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml));
        ReaderConfig::from_app_config(config_from_builder(builder)?)
    }

    #[test]
    fn reads_full_reader_section() {
        let cfg = from_yaml(
            r#"
reader:
  page_size: 25
  database:
    url: postgres://blockscout@localhost/blockscout
    replica_url: postgres://blockscout@replica/blockscout
    max_connections: 8
"#,
        )
        .unwrap();

        assert_eq!(cfg.page_size, Some(25));
        assert_eq!(cfg.database.url, "postgres://blockscout@localhost/blockscout");
        assert_eq!(
            cfg.database.replica_url.as_deref(),
            Some("postgres://blockscout@replica/blockscout")
        );
        assert_eq!(cfg.database.max_connections, Some(8));
    }

    #[test]
    fn optional_settings_may_be_omitted() {
        let cfg = from_yaml(
            r#"
reader:
  database:
    url: postgres://localhost/blockscout
"#,
        )
        .unwrap();

        assert_eq!(cfg.page_size, None);
        assert!(cfg.database.replica_url.is_none());
        assert!(cfg.database.max_connections.is_none());
    }

    #[test]
    fn missing_reader_section_is_an_error() {
        let err = from_yaml("other: {}").unwrap_err();
        assert!(err.to_string().contains("'reader'"));
    }
}
