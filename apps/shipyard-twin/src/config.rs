//! JSON run configuration.
//!
//! ```json
//! {
//!   "sim":    { "time_step": 1, "max_steps": 20, "policy": { "untimed_events": "reject" } },
//!   "pool":   { "cranes": 2, "agvs": 3, "forklifts": 4 },
//!   "agents": ["work_order_coordinator", "resource_allocator"]
//! }
//! ```
//!
//! Every section is optional.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sy_core::SimConfig;
use sy_state::PoolConfig;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub sim:    SimConfig,
    pub pool:   PoolConfig,
    /// Agent names in execution order.
    pub agents: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim:    SimConfig::default(),
            pool:   PoolConfig::default(),
            agents: vec!["work_order_coordinator".into(), "resource_allocator".into()],
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.sim.validate()?;
        Ok(config)
    }
}
