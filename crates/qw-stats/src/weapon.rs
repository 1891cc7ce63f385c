// Weapon numbers and their relation to item bits and ammo stats.

use std::fmt;

use crate::defs::{AXE_NUM, GL_NUM, LG_NUM, NG_NUM, RL_NUM, SG_NUM, SNG_NUM, SSG_NUM};
use crate::error::StatError;
use crate::items::ItemFlags;
use crate::stat::Stat;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weapon {
    Axe = AXE_NUM as u8,
    Shotgun = SG_NUM as u8,
    SuperShotgun = SSG_NUM as u8,
    Nailgun = NG_NUM as u8,
    SuperNailgun = SNG_NUM as u8,
    GrenadeLauncher = GL_NUM as u8,
    RocketLauncher = RL_NUM as u8,
    Lightning = LG_NUM as u8,
}

/// How a peer fills STAT_ACTIVEWEAPON.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ActiveWeaponEncoding {
    /// The IT_* bit of the held weapon, as stock QuakeWorld servers send.
    #[default]
    ItemBit,
    /// The AXE_NUM..LG_NUM ordinal.
    Number,
}

impl Weapon {
    pub const ALL: [Weapon; 8] = [
        Weapon::Axe,
        Weapon::Shotgun,
        Weapon::SuperShotgun,
        Weapon::Nailgun,
        Weapon::SuperNailgun,
        Weapon::GrenadeLauncher,
        Weapon::RocketLauncher,
        Weapon::Lightning,
    ];

    pub const fn num(self) -> i32 {
        self as i32
    }

    pub const fn item_flag(self) -> ItemFlags {
        match self {
            Weapon::Axe => ItemFlags::AXE,
            Weapon::Shotgun => ItemFlags::SHOTGUN,
            Weapon::SuperShotgun => ItemFlags::SUPER_SHOTGUN,
            Weapon::Nailgun => ItemFlags::NAILGUN,
            Weapon::SuperNailgun => ItemFlags::SUPER_NAILGUN,
            Weapon::GrenadeLauncher => ItemFlags::GRENADE_LAUNCHER,
            Weapon::RocketLauncher => ItemFlags::ROCKET_LAUNCHER,
            Weapon::Lightning => ItemFlags::LIGHTNING,
        }
    }

    pub const fn ammo_stat(self) -> Option<Stat> {
        match self {
            Weapon::Axe => None,
            Weapon::Shotgun | Weapon::SuperShotgun => Some(Stat::Shells),
            Weapon::Nailgun | Weapon::SuperNailgun => Some(Stat::Nails),
            Weapon::GrenadeLauncher | Weapon::RocketLauncher => Some(Stat::Rockets),
            Weapon::Lightning => Some(Stat::Cells),
        }
    }

    pub const fn ammo_flag(self) -> ItemFlags {
        match self.ammo_stat() {
            Some(Stat::Shells) => ItemFlags::SHELLS,
            Some(Stat::Nails) => ItemFlags::NAILS,
            Some(Stat::Rockets) => ItemFlags::ROCKETS,
            Some(Stat::Cells) => ItemFlags::CELLS,
            _ => ItemFlags::empty(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Weapon::Axe => "axe",
            Weapon::Shotgun => "shotgun",
            Weapon::SuperShotgun => "super shotgun",
            Weapon::Nailgun => "nailgun",
            Weapon::SuperNailgun => "super nailgun",
            Weapon::GrenadeLauncher => "grenade launcher",
            Weapon::RocketLauncher => "rocket launcher",
            Weapon::Lightning => "lightning gun",
        }
    }

    /// Maps a mask holding exactly one weapon bit back to its number.
    /// IT_SUPER_LIGHTNING has no number.
    pub fn from_item_flag(flag: ItemFlags) -> Option<Weapon> {
        Self::ALL
            .iter()
            .copied()
            .find(|weapon| weapon.item_flag() == flag)
    }

    /// Unknown values mean "no weapon" rather than an error.
    pub fn resolve_active(value: i32, encoding: ActiveWeaponEncoding) -> Option<Weapon> {
        match encoding {
            ActiveWeaponEncoding::ItemBit => Self::from_item_flag(ItemFlags::from_stat(value)),
            ActiveWeaponEncoding::Number => Weapon::try_from(value).ok(),
        }
    }
}

impl TryFrom<i32> for Weapon {
    type Error = StatError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|weapon| weapon.num() == value)
            .ok_or(StatError::UnknownWeapon(value))
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{IT_ROCKET_LAUNCHER, IT_SUPER_LIGHTNING, NAMED_WEAPON_NUMS};

    #[test]
    fn numbers_match_constant_table() {
        assert_eq!(Weapon::ALL.len(), NAMED_WEAPON_NUMS.len());
        for ((_, num), weapon) in NAMED_WEAPON_NUMS.iter().zip(Weapon::ALL) {
            assert_eq!(weapon.num(), *num);
            assert_eq!(Weapon::try_from(*num), Ok(weapon));
        }
    }

    #[test]
    fn rejects_unknown_numbers() {
        assert_eq!(Weapon::try_from(0), Err(StatError::UnknownWeapon(0)));
        assert_eq!(Weapon::try_from(9), Err(StatError::UnknownWeapon(9)));
        assert!(Weapon::try_from(-1).is_err());
    }

    #[test]
    fn item_flags_are_distinct_weapon_bits() {
        for weapon in Weapon::ALL {
            let flag = weapon.item_flag();
            assert!(ItemFlags::WEAPONS.contains(flag));
            assert_eq!(flag.bits().count_ones(), 1);
            assert_eq!(Weapon::from_item_flag(flag), Some(weapon));
        }
        assert_eq!(Weapon::from_item_flag(ItemFlags::SUPER_LIGHTNING), None);
        assert_eq!(Weapon::from_item_flag(ItemFlags::empty()), None);
    }

    #[test]
    fn ammo_pairs() {
        assert_eq!(Weapon::Axe.ammo_stat(), None);
        assert!(Weapon::Axe.ammo_flag().is_empty());
        assert_eq!(Weapon::SuperShotgun.ammo_stat(), Some(Stat::Shells));
        assert_eq!(Weapon::GrenadeLauncher.ammo_flag(), ItemFlags::ROCKETS);
        assert_eq!(Weapon::Lightning.ammo_flag(), ItemFlags::CELLS);
    }

    #[test]
    fn resolves_active_weapon_by_encoding() {
        assert_eq!(
            Weapon::resolve_active(IT_ROCKET_LAUNCHER as i32, ActiveWeaponEncoding::ItemBit),
            Some(Weapon::RocketLauncher)
        );
        assert_eq!(
            Weapon::resolve_active(7, ActiveWeaponEncoding::Number),
            Some(Weapon::RocketLauncher)
        );
        assert_eq!(
            Weapon::resolve_active(IT_SUPER_LIGHTNING as i32, ActiveWeaponEncoding::ItemBit),
            None
        );
        assert_eq!(Weapon::resolve_active(0, ActiveWeaponEncoding::Number), None);
        assert_eq!(Weapon::resolve_active(3, ActiveWeaponEncoding::ItemBit), None);
    }
}
