//! High-level runtime engine settings
//!
//! Selects the force accumulation mode used when building and running a
//! `Scenario`

use crate::configuration::config::ForceModeConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub force_mode: ForceModeConfig, // primary-only or full pairwise gravity
}
