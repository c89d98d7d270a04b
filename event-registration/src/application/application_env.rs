use anyhow::anyhow;
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_DIRECTORY: &str = "uploads";
const DEFAULT_MAX_HTTP_CONTENT_LEN: usize = 10 * 1024 * 1024;
const DEFAULT_MAIL_RELAY: &str = "smtp.gmail.com";

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub upload_directory: PathBuf,
    pub max_http_content_len: usize,

    pub mail_relay: String,
    /// Used both to authenticate and as the sender address
    pub mail_user: String,
    pub mail_password: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("EVENT_REGISTRATION_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("EVENT_REGISTRATION_LOG_FILENAME")?;
        let bind_address = Self::bind_address(Self::optional_env_var("EVENT_REGISTRATION_PORT"))?;
        let db_connection_string = Self::env_var("EVENT_REGISTRATION_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("EVENT_REGISTRATION_DB_NAME")?;
        let upload_directory = Self::optional_env_var("EVENT_REGISTRATION_UPLOAD_DIRECTORY")
            .unwrap_or_else(|| DEFAULT_UPLOAD_DIRECTORY.to_string())
            .into();
        let max_http_content_len =
            match Self::optional_env_var("EVENT_REGISTRATION_MAX_HTTP_CONTENT_LEN") {
                Some(value) => value.parse()?,
                None => DEFAULT_MAX_HTTP_CONTENT_LEN,
            };
        let mail_relay = Self::optional_env_var("EVENT_REGISTRATION_MAIL_RELAY")
            .unwrap_or_else(|| DEFAULT_MAIL_RELAY.to_string());
        let mail_user = Self::env_var("EVENT_REGISTRATION_MAIL_USER")?;
        let mail_password = Self::env_var("EVENT_REGISTRATION_MAIL_PASSWORD")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            upload_directory,
            max_http_content_len,
            mail_relay,
            mail_user,
            mail_password,
        })
    }

    fn bind_address(port: Option<String>) -> anyhow::Result<SocketAddr> {
        let port = match port {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow!("EVENT_REGISTRATION_PORT is not a valid port: {port}"))?,
            None => DEFAULT_PORT,
        };

        Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}
