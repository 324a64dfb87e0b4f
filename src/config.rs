use {serde::Deserialize, thiserror::Error};


pub const DEFAULT_DAMAGE_MARGIN: i32 = 4;

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PopupConfig {
    /// Extra pixels damaged around a popup when it is mapped or unmapped.
    ///
    /// Covers shadows and borders drawn outside of the surface.
    pub damage_margin: i32,
    /// Log every damage rectangle emitted by popups and every commit that is
    /// dropped because its window is invisible.
    pub log_damage: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            damage_margin: DEFAULT_DAMAGE_MARGIN,
            log_damage: false,
        }
    }
}

impl PopupConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        if config.damage_margin < 0 {
            return Err(ConfigError::NegativeMargin(config.damage_margin));
        }
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not parse the popup configuration")]
    Parse(#[source] Box<serde_json::Error>),
    #[error("The damage margin must not be negative (got {0})")]
    NegativeMargin(i32),
}
efrom!(ConfigError, Parse, serde_json::Error);
