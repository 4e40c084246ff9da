/**
 * Server Configuration
 *
 * Command-line options for the server binary. Each authentication option
 * also reads an environment variable, and `.env` is loaded before parsing.
 *
 * The signing secret, the token lifetime and the validation policy are
 * required: the server refuses to start rather than fall back to an
 * insecure built-in value.
 */

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::auth::tokens::{TokenAlgorithm, DEFAULT_KEY_ID};
use crate::auth::validators::ValidationPolicy;
use crate::shared::config::{AuthConfig, ConfigError};

/// Directory name used under the platform cache directory
pub const DATA_DIR_NAME: &str = "minimal-auth";

#[derive(Debug, Clone, Parser)]
#[command(name = "minimal-auth-server", about = "Authentication server with a protected recipes API")]
pub struct Cli {
    /// Address to bind
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    pub hostname: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Directory holding users.json and recipes.json
    #[arg(long, env = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// HMAC secret used to sign session tokens
    #[arg(long, env = "AUTH_SECRET", hide_env_values = true)]
    pub secret: String,

    /// Key id written into token headers
    #[arg(long, env = "AUTH_KEY_ID", default_value = DEFAULT_KEY_ID)]
    pub key_id: String,

    /// Token digest: HS256, HS384 or HS512
    #[arg(long, env = "AUTH_TOKEN_ALGORITHM", default_value = "HS256")]
    pub token_algorithm: TokenAlgorithm,

    /// Session token lifetime in seconds
    #[arg(long, env = "AUTH_TOKEN_TTL_SECS")]
    pub token_ttl_secs: u64,

    /// Credential validation policy: permissive or standard
    #[arg(long, env = "AUTH_VALIDATION")]
    pub validation: ValidationPolicy,

    /// bcrypt work factor
    #[arg(long, env = "AUTH_BCRYPT_COST", default_value_t = bcrypt::DEFAULT_COST)]
    pub bcrypt_cost: u32,
}

impl Cli {
    pub fn auth_config(&self) -> Result<AuthConfig, ConfigError> {
        AuthConfig::builder()
            .secret(self.secret.clone())
            .key_id(self.key_id.clone())
            .algorithm(self.token_algorithm)
            .token_ttl(Duration::from_secs(self.token_ttl_secs))
            .validation(self.validation)
            .bcrypt_cost(self.bcrypt_cost)
            .build()
    }

    /// Explicit `--data-dir`, else `<cache dir>/minimal-auth`
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(DATA_DIR_NAME)
        })
    }
}
