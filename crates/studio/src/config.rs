//! Studio configuration from environment variables.

use std::env;
use std::time::Duration;

use gateway::GatewayConfig;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8787;

/// Default pause before a locally composed post is shown.
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Port for the HTTP functions.
    pub port: u16,
    /// Pause before local composition completes.
    pub generation_delay: Duration,
    /// Upstream service settings.
    pub gateway: GatewayConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            port: env::var("STUDIO_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            generation_delay: Duration::from_millis(
                env::var("STUDIO_GENERATION_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_GENERATION_DELAY_MS),
            ),
            gateway: GatewayConfig::from_env(),
        }
    }
}

impl StudioConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `STUDIO_PORT`: HTTP port (default: 8787)
    /// - `STUDIO_GENERATION_DELAY_MS`: local generation pause (default: 2000)
    /// - every variable read by [`GatewayConfig::from_env`]
    #[must_use]
    pub fn from_env() -> Self {
        Self::default()
    }
}
