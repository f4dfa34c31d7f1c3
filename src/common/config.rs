use std::fmt;

pub const TABLE_NAME_DEFAULT: &str = "CDKDynamoDBTable";

const DRIVER_DEFAULT: &str = "postgres";
const PORT_DEFAULT: &str = "5432";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable `{0}` is not set")]
    Missing(&'static str),
}

/// Name of the filters table, taken from `dynamo_table`.
pub fn table_name() -> String {
    std::env::var("dynamo_table").unwrap_or(TABLE_NAME_DEFAULT.into())
}

/// Connection settings of the relational database.
#[derive(Clone)]
pub struct DbConfig {
    pub driver: String,
    pub user: String,
    pub password: String,
    pub hostname: String,
    pub port: String,
    pub database: String,
    pub schema: String,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            driver: lookup("DRIVER").unwrap_or(DRIVER_DEFAULT.into()),
            user: required("USER")?,
            password: required("PASSWORD")?,
            hostname: required("HOSTNAME")?,
            port: lookup("PORT").unwrap_or(PORT_DEFAULT.into()),
            database: required("DATABASE")?,
            schema: required("SCHEMA")?,
        })
    }

    /// Connection URL; user and password are percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}@{}:{}/{}",
            self.driver,
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.hostname,
            self.port,
            self.database
        )
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("driver", &self.driver)
            .field("user", &self.user)
            .field("password", &"***")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("schema", &self.schema)
            .finish()
    }
}
