use crate::constants::{DEFAULT_MIN_RESERVE, WETH};
use crate::graph::liquidity::LiquidityThresholds;
use crate::utils::config_loader::{LoadConfigError, load_from_file, load_from_file_sync};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Configuration for the routing layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// The reference token every route is resolved toward
    pub reference_token: Address,
    /// Minimum reserve0 a pair must hold to be routed through
    pub min_reserve0: u128,
    /// Minimum reserve1 a pair must hold to be routed through
    pub min_reserve1: u128,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { reference_token: WETH, min_reserve0: DEFAULT_MIN_RESERVE, min_reserve1: DEFAULT_MIN_RESERVE }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> eyre::Result<Self> {
        let mut config = Self::default();

        if let Ok(reference_token) = std::env::var("REFERENCE_TOKEN") {
            config.reference_token =
                reference_token.parse().map_err(|e| eyre::eyre!("Invalid REFERENCE_TOKEN: {}", e))?;
        }

        if let Ok(min_reserve0) = std::env::var("MIN_RESERVE0") {
            config.min_reserve0 = min_reserve0.parse().map_err(|e| eyre::eyre!("Invalid MIN_RESERVE0: {}", e))?;
        }

        if let Ok(min_reserve1) = std::env::var("MIN_RESERVE1") {
            config.min_reserve1 = min_reserve1.parse().map_err(|e| eyre::eyre!("Invalid MIN_RESERVE1: {}", e))?;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file, expanding `${VAR}` references
    pub async fn load(file_name: String) -> Result<Self, LoadConfigError> {
        load_from_file(file_name).await
    }

    /// Synchronous variant of [RouterConfig::load]
    pub fn load_sync(file_name: String) -> Result<Self, LoadConfigError> {
        load_from_file_sync(file_name)
    }

    pub fn thresholds(&self) -> LiquidityThresholds {
        LiquidityThresholds::new(U256::from(self.min_reserve0), U256::from(self.min_reserve1))
    }
}
