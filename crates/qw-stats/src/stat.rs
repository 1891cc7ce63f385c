// Typed stat indices and classification of raw slots.

use std::fmt;

use crate::defs::{
    MAX_CL_STATS, RESERVED_STAT_INDICES, STAT_ACTIVEWEAPON, STAT_AMMO, STAT_ARMOR, STAT_CELLS,
    STAT_HEALTH, STAT_ITEMS, STAT_MONSTERS, STAT_NAILS, STAT_ROCKETS, STAT_SECRETS, STAT_SHELLS,
    STAT_TIME, STAT_TOTALMONSTERS, STAT_TOTALSECRETS, STAT_VIEWHEIGHT, STAT_WEAPON,
};
use crate::error::StatError;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stat {
    Health = STAT_HEALTH as u8,
    Weapon = STAT_WEAPON as u8,
    Ammo = STAT_AMMO as u8,
    Armor = STAT_ARMOR as u8,
    Shells = STAT_SHELLS as u8,
    Nails = STAT_NAILS as u8,
    Rockets = STAT_ROCKETS as u8,
    Cells = STAT_CELLS as u8,
    ActiveWeapon = STAT_ACTIVEWEAPON as u8,
    TotalSecrets = STAT_TOTALSECRETS as u8,
    TotalMonsters = STAT_TOTALMONSTERS as u8,
    Secrets = STAT_SECRETS as u8,
    Monsters = STAT_MONSTERS as u8,
    Items = STAT_ITEMS as u8,
    ViewHeight = STAT_VIEWHEIGHT as u8,
    Time = STAT_TIME as u8,
}

impl Stat {
    pub const ALL: [Stat; 16] = [
        Stat::Health,
        Stat::Weapon,
        Stat::Ammo,
        Stat::Armor,
        Stat::Shells,
        Stat::Nails,
        Stat::Rockets,
        Stat::Cells,
        Stat::ActiveWeapon,
        Stat::TotalSecrets,
        Stat::TotalMonsters,
        Stat::Secrets,
        Stat::Monsters,
        Stat::Items,
        Stat::ViewHeight,
        Stat::Time,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Stat> {
        Self::ALL.iter().copied().find(|stat| stat.index() == index)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stat::Health => "STAT_HEALTH",
            Stat::Weapon => "STAT_WEAPON",
            Stat::Ammo => "STAT_AMMO",
            Stat::Armor => "STAT_ARMOR",
            Stat::Shells => "STAT_SHELLS",
            Stat::Nails => "STAT_NAILS",
            Stat::Rockets => "STAT_ROCKETS",
            Stat::Cells => "STAT_CELLS",
            Stat::ActiveWeapon => "STAT_ACTIVEWEAPON",
            Stat::TotalSecrets => "STAT_TOTALSECRETS",
            Stat::TotalMonsters => "STAT_TOTALMONSTERS",
            Stat::Secrets => "STAT_SECRETS",
            Stat::Monsters => "STAT_MONSTERS",
            Stat::Items => "STAT_ITEMS",
            Stat::ViewHeight => "STAT_VIEWHEIGHT",
            Stat::Time => "STAT_TIME",
        }
    }

    /// Stats added by the Z_EXT protocol extensions rather than the base
    /// protocol.
    pub const fn is_extension(self) -> bool {
        matches!(self, Stat::ViewHeight | Stat::Time)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatSlot {
    Named(Stat),
    /// A retired index (frags, weapon frame). Stored but never interpreted.
    Reserved(usize),
    Unnamed(usize),
}

impl StatSlot {
    pub fn index(&self) -> usize {
        match self {
            StatSlot::Named(stat) => stat.index(),
            StatSlot::Reserved(index) | StatSlot::Unnamed(index) => *index,
        }
    }
}

pub fn classify(index: usize) -> Result<StatSlot, StatError> {
    if index >= MAX_CL_STATS {
        return Err(StatError::IndexOutOfRange {
            index,
            max: MAX_CL_STATS,
        });
    }
    if let Some(stat) = Stat::from_index(index) {
        return Ok(StatSlot::Named(stat));
    }
    if RESERVED_STAT_INDICES.contains(&index) {
        return Ok(StatSlot::Reserved(index));
    }
    Ok(StatSlot::Unnamed(index))
}
