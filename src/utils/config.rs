use std::env;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    /// Milliseconds between delivery-simulation ticks.
    pub tick_ms: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            log_level: env::var("LOG_LEVEL")
                .unwrap_or("info".to_string())
                .to_lowercase(),
            environment: env::var("APP_ENV")
                .unwrap_or("development".to_string())
                .to_string(),
            tick_ms: env::var("TICK_MS")
                .unwrap_or("800".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("TICK_MS must be a positive integer"))?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of {:?}",
                VALID_LOG_LEVELS
            ));
        }

        if self.tick_ms == 0 {
            return Err(anyhow::anyhow!("TICK_MS must be greater than zero"));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_tick() {
        let config = Config {
            log_level: "info".to_string(),
            environment: "development".to_string(),
            tick_ms: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            environment: "development".to_string(),
            tick_ms: 800,
        };
        assert!(config.validate().is_err());
    }
}
