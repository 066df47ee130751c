/// Run configuration for the analysis binary.
///
/// The step count is fixed at build time in `WalkConfig::default()`.
/// `HWALK_STEPS`, `HWALK_SHOTS`, `HWALK_SEED` and `HWALK_LOG` override
/// the defaults when set; an unparsable value is an error rather than a
/// silent fallback.
use crate::chart::DEFAULT_WIDTH;
use crate::error::{Result, WalkError};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_STEPS: usize = 100;
pub const DEFAULT_SHOTS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct WalkConfig {
    pub steps: usize,
    /// Shots for the simulated measurement histogram
    pub shots: u64,
    /// None = thread RNG
    pub seed: Option<u64>,
    pub chart_width: usize,
    /// Parsed from names such as "info", "debug" or "off"
    pub log_level: LevelFilter,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            shots: DEFAULT_SHOTS,
            seed: None,
            chart_width: DEFAULT_WIDTH,
            log_level: LevelFilter::INFO,
        }
    }
}

impl WalkConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through `lookup(key)`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(steps) = parse_var(&lookup, "HWALK_STEPS")? {
            cfg.steps = steps;
        }
        if let Some(shots) = parse_var(&lookup, "HWALK_SHOTS")? {
            cfg.shots = shots;
        }
        if let Some(seed) = parse_var(&lookup, "HWALK_SEED")? {
            cfg.seed = Some(seed);
        }
        if let Some(level) = parse_var(&lookup, "HWALK_LOG")? {
            cfg.log_level = level;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(WalkError::NoShots);
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| WalkError::InvalidConfig { key: key.to_string(), value: raw }),
    }
}
