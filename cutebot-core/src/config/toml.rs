//! TOML configuration parsing
//!
//! Every table and key is optional; anything left out keeps its default.
//!
//! ```toml
//! [bus]
//! address = 16
//!
//! [sonar]
//! echo_start_timeout_us = 20000
//!
//! [track]
//! polarity = "white_line_on_black"
//! ```

use super::board::{ConfigError, RobotConfig};

/// Parse and validate a TOML configuration
pub fn parse_config(input: &str) -> Result<RobotConfig, ConfigError> {
    let config: RobotConfig = ::toml::from_str(input).map_err(|_| ConfigError::Parse)?;
    config.validate()?;
    Ok(config)
}

impl RobotConfig {
    /// Parse a TOML configuration, see [`parse_config`]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        parse_config(input)
    }
}
