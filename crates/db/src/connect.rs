//! Database connection parameters.
//!
//! Deployments supply either a full `DATABASE_URL` or the legacy
//! comma-separated `DB_CONNECT_INFO` string in the order
//! `database,user,host,password,port`.

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConnectInfoError {
    #[error("expected 5 comma-separated fields (database,user,host,password,port), got {0}")]
    FieldCount(usize),

    #[error("invalid port '{0}'")]
    Port(String),

    #[error("invalid database URL: {0}")]
    Url(#[from] sqlx::Error),
}

/// Parsed form of `DB_CONNECT_INFO`.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConnectInfo {
    pub database: String,
    pub user: String,
    pub host: String,
    pub password: String,
    pub port: u16,
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for DbConnectInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConnectInfo")
            .field("database", &self.database)
            .field("user", &self.user)
            .field("host", &self.host)
            .field("password", &"***")
            .field("port", &self.port)
            .finish()
    }
}

impl DbConnectInfo {
    pub fn parse(raw: &str) -> Result<Self, ConnectInfoError> {
        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        let [database, user, host, password, port] = fields.as_slice() else {
            return Err(ConnectInfoError::FieldCount(fields.len()));
        };
        let port = port
            .parse()
            .map_err(|_| ConnectInfoError::Port((*port).to_string()))?;

        Ok(Self {
            database: (*database).to_string(),
            user: (*user).to_string(),
            host: (*host).to_string(),
            password: (*password).to_string(),
            port,
        })
    }

    pub fn to_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Build connect options from a `postgres://` URL.
pub fn options_from_url(url: &str) -> Result<PgConnectOptions, ConnectInfoError> {
    Ok(PgConnectOptions::from_str(url)?)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_five_fields() {
        let info = DbConnectInfo::parse("Resource Manager,postgres,localhost,1223,5432").unwrap();
        assert_eq!(info.database, "Resource Manager");
        assert_eq!(info.user, "postgres");
        assert_eq!(info.host, "localhost");
        assert_eq!(info.password, "1223");
        assert_eq!(info.port, 5432);
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let info = DbConnectInfo::parse(" app , u , db.local , pw , 6543 ").unwrap();
        assert_eq!(info.host, "db.local");
        assert_eq!(info.port, 6543);
    }

    #[test]
    fn wrong_field_count_rejected() {
        assert_matches!(
            DbConnectInfo::parse("app,user,host"),
            Err(ConnectInfoError::FieldCount(3))
        );
    }

    #[test]
    fn non_numeric_port_rejected() {
        assert_matches!(
            DbConnectInfo::parse("app,user,host,pw,postgres"),
            Err(ConnectInfoError::Port(_))
        );
    }

    #[test]
    fn debug_hides_password() {
        let info = DbConnectInfo::parse("app,user,host,s3cret,5432").unwrap();
        assert!(!format!("{info:?}").contains("s3cret"));
    }
}
