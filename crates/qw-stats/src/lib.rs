// Stat and item vocabulary shared by QuakeWorld demo and client code.

pub mod config;
pub mod defs;
pub mod error;
pub mod items;
pub mod labels;
pub mod stat;
pub mod table;
pub mod weapon;

pub use config::{StatsConfig, parse_encoding};
pub use defs::*;
pub use error::StatError;
pub use items::{ArmorTier, ItemFlags};
pub use labels::{LabelTable, StatLabels};
pub use stat::{Stat, StatSlot, classify};
pub use table::{PlayerStats, StatUpdate};
pub use weapon::{ActiveWeaponEncoding, Weapon};
