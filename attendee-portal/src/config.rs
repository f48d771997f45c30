use common::{
    env,
    error::{AmError, AmResult},
};

pub const API_URL_KEY: &str = "AM_API_URL";
pub const SECRET_KEY_KEY: &str = "AM_SECRET_KEY";
pub const ADDRESS_KEY: &str = "AM_PORTAL_ADDRESS";
pub const ASSETS_DIR_KEY: &str = "AM_ASSETS_DIR";
pub const LOG_CONFIG_KEY: &str = "AM_LOG_CONFIG";
pub const SESSION_DAYS_KEY: &str = "AM_SESSION_DAYS";

/// Minimum length of the key used to sign and encrypt the session cookie
pub const MIN_SECRET_KEY_LENGTH: usize = 64;

/// Runtime settings of the portal server
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub api_url: String,
    pub secret_key: String,
    pub address: String,
    pub assets_dir: String,
    pub log_config: String,
    pub session_days: i64,
}

impl PortalConfig {
    /// Read the portal settings from the environment.
    /// # Errors
    /// This function will return an error if a required variable is missing, a variable cannot
    /// be parsed or the secret key is too short to sign the session cookie
    pub fn from_env() -> AmResult<Self> {
        let config = Self {
            api_url: env::required(API_URL_KEY)?,
            secret_key: env::required(SECRET_KEY_KEY)?,
            address: env::optional(ADDRESS_KEY, "127.0.0.1:3000")?,
            assets_dir: env::optional(ASSETS_DIR_KEY, "attendee-portal/assets")?,
            log_config: env::optional(LOG_CONFIG_KEY, "attendee-portal/attendee_portal_log.yml")?,
            session_days: env::optional_parsed(SESSION_DAYS_KEY, 7)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AmResult<()> {
        if self.secret_key.len() < MIN_SECRET_KEY_LENGTH {
            return Err(AmError::InvalidConfig {
                key: SECRET_KEY_KEY,
                reason: format!("Must be at least {MIN_SECRET_KEY_LENGTH} bytes long"),
            });
        }
        if self.session_days < 1 {
            return Err(AmError::InvalidConfig {
                key: SESSION_DAYS_KEY,
                reason: "Must be at least 1 day".to_owned(),
            });
        }
        Ok(())
    }
}
