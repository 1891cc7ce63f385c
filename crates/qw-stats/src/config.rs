// Runtime options for interpreting stats.

use tracing::warn;

use crate::weapon::ActiveWeaponEncoding;

pub const ACTIVE_WEAPON_ENV: &str = "QW_ACTIVE_WEAPON";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsConfig {
    pub active_weapon: ActiveWeaponEncoding,
}

impl StatsConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ACTIVE_WEAPON_ENV).ok().as_deref())
    }

    /// Builds the config from a raw `QW_ACTIVE_WEAPON` value. Unknown values
    /// keep the default.
    pub fn from_value(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(value) = value {
            match parse_encoding(value) {
                Some(encoding) => config.active_weapon = encoding,
                None => warn!(value, "ignoring unknown {ACTIVE_WEAPON_ENV}"),
            }
        }
        config
    }

    /// Applies a command-line choice on top of the environment.
    pub fn with_encoding_override(mut self, encoding: Option<ActiveWeaponEncoding>) -> Self {
        if let Some(encoding) = encoding {
            self.active_weapon = encoding;
        }
        self
    }
}

pub fn parse_encoding(value: &str) -> Option<ActiveWeaponEncoding> {
    match value.trim().to_ascii_lowercase().as_str() {
        "item" | "bit" | "itembit" => Some(ActiveWeaponEncoding::ItemBit),
        "number" | "num" => Some(ActiveWeaponEncoding::Number),
        _ => None,
    }
}
