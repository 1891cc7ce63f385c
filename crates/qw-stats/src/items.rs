// Item possession mask carried in STAT_ITEMS.

use std::fmt;

use bitflags::bitflags;
use tracing::debug;

use crate::defs::{
    IT_ARMOR1, IT_ARMOR2, IT_ARMOR3, IT_AXE, IT_CELLS, IT_GRENADE_LAUNCHER, IT_INVISIBILITY,
    IT_INVULNERABILITY, IT_KEY1, IT_KEY2, IT_LIGHTNING, IT_NAILGUN, IT_NAILS, IT_QUAD,
    IT_ROCKET_LAUNCHER, IT_ROCKETS, IT_SHELLS, IT_SHOTGUN, IT_SIGIL1, IT_SIGIL2, IT_SIGIL3,
    IT_SIGIL4, IT_SUIT, IT_SUPER_LIGHTNING, IT_SUPER_NAILGUN, IT_SUPER_SHOTGUN, IT_SUPERHEALTH,
};
use crate::weapon::Weapon;

bitflags! {
    /// One bit per owned item or active powerup.
    ///
    /// Bits without a name are kept as-is; a newer peer may set them.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u32 {
        const SHOTGUN           = IT_SHOTGUN;
        const SUPER_SHOTGUN     = IT_SUPER_SHOTGUN;
        const NAILGUN           = IT_NAILGUN;
        const SUPER_NAILGUN     = IT_SUPER_NAILGUN;
        const GRENADE_LAUNCHER  = IT_GRENADE_LAUNCHER;
        const ROCKET_LAUNCHER   = IT_ROCKET_LAUNCHER;
        const LIGHTNING         = IT_LIGHTNING;
        const SUPER_LIGHTNING   = IT_SUPER_LIGHTNING;

        const SHELLS            = IT_SHELLS;
        const NAILS             = IT_NAILS;
        const ROCKETS           = IT_ROCKETS;
        const CELLS             = IT_CELLS;

        const AXE               = IT_AXE;

        // Exclusive by game rules only.
        const ARMOR1            = IT_ARMOR1;
        const ARMOR2            = IT_ARMOR2;
        const ARMOR3            = IT_ARMOR3;

        const SUPERHEALTH       = IT_SUPERHEALTH;

        const KEY1              = IT_KEY1;
        const KEY2              = IT_KEY2;

        const INVISIBILITY      = IT_INVISIBILITY;
        const INVULNERABILITY   = IT_INVULNERABILITY;
        const SUIT              = IT_SUIT;
        const QUAD              = IT_QUAD;

        const SIGIL1            = IT_SIGIL1;
        const SIGIL2            = IT_SIGIL2;
        const SIGIL3            = IT_SIGIL3;
        const SIGIL4            = IT_SIGIL4;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArmorTier {
    Green,
    Yellow,
    Red,
}

impl ArmorTier {
    pub const fn flag(self) -> ItemFlags {
        match self {
            ArmorTier::Green => ItemFlags::ARMOR1,
            ArmorTier::Yellow => ItemFlags::ARMOR2,
            ArmorTier::Red => ItemFlags::ARMOR3,
        }
    }
}

impl fmt::Display for ArmorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArmorTier::Green => "green",
            ArmorTier::Yellow => "yellow",
            ArmorTier::Red => "red",
        })
    }
}

impl ItemFlags {
    pub const WEAPONS: ItemFlags = ItemFlags::from_bits_retain(
        IT_SHOTGUN
            | IT_SUPER_SHOTGUN
            | IT_NAILGUN
            | IT_SUPER_NAILGUN
            | IT_GRENADE_LAUNCHER
            | IT_ROCKET_LAUNCHER
            | IT_LIGHTNING
            | IT_SUPER_LIGHTNING
            | IT_AXE,
    );
    pub const AMMO: ItemFlags =
        ItemFlags::from_bits_retain(IT_SHELLS | IT_NAILS | IT_ROCKETS | IT_CELLS);
    pub const ARMOR: ItemFlags = ItemFlags::from_bits_retain(IT_ARMOR1 | IT_ARMOR2 | IT_ARMOR3);
    pub const POWERUPS: ItemFlags = ItemFlags::from_bits_retain(
        IT_SUPERHEALTH | IT_INVISIBILITY | IT_INVULNERABILITY | IT_SUIT | IT_QUAD,
    );
    pub const KEYS: ItemFlags = ItemFlags::from_bits_retain(IT_KEY1 | IT_KEY2);
    pub const SIGILS: ItemFlags =
        ItemFlags::from_bits_retain(IT_SIGIL1 | IT_SIGIL2 | IT_SIGIL3 | IT_SIGIL4);

    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Reads the mask out of a signed stat slot. Bit 31 (sigil 4) makes the
    /// stored value negative.
    pub const fn from_stat(value: i32) -> Self {
        Self::from_bits_retain(value as u32)
    }

    pub const fn to_stat(self) -> i32 {
        self.bits() as i32
    }

    /// True when every bit of `flag` is set. Use `has_any` for group masks.
    pub fn has(self, flag: ItemFlags) -> bool {
        !flag.is_empty() && self.contains(flag)
    }

    /// True when at least one bit of `group` is set.
    pub fn has_any(self, group: ItemFlags) -> bool {
        self.intersects(group)
    }

    pub fn with(self, flag: ItemFlags) -> Self {
        self | flag
    }

    pub fn unknown_bits(self) -> u32 {
        self.bits() & !Self::all().bits()
    }

    pub fn armor_tier(self) -> Option<ArmorTier> {
        if self.has_conflicting_armor() {
            debug!(bits = self.bits(), "multiple armor tiers set");
        }
        [ArmorTier::Red, ArmorTier::Yellow, ArmorTier::Green]
            .into_iter()
            .find(|tier| self.contains(tier.flag()))
    }

    pub fn has_conflicting_armor(self) -> bool {
        (self & Self::ARMOR).bits().count_ones() > 1
    }

    pub fn owned_weapons(self) -> Vec<Weapon> {
        Weapon::ALL
            .iter()
            .copied()
            .filter(|weapon| self.contains(weapon.item_flag()))
            .collect()
    }

    /// Symbolic names of the set named flags, lowest bit first.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::NAMED_ITEMS;

    #[test]
    fn named_flags_match_constant_table() {
        assert_eq!(ItemFlags::all().iter().count(), NAMED_ITEMS.len());
        for (name, bits) in NAMED_ITEMS {
            let flag = ItemFlags::from_name(name.trim_start_matches("IT_")).unwrap();
            assert_eq!(flag.bits(), *bits);
        }
    }

    #[test]
    fn or_then_and_round_trip() {
        let mask = ItemFlags::AXE.with(ItemFlags::ARMOR1);
        assert!(mask.has(ItemFlags::AXE));
        assert!(mask.has(ItemFlags::ARMOR1));
        assert!(!mask.has(ItemFlags::SHOTGUN));
        for flag in ItemFlags::all().iter() {
            if flag != ItemFlags::AXE && flag != ItemFlags::ARMOR1 {
                assert!(!mask.has(flag), "{flag:?} unexpectedly set");
            }
        }
    }

    #[test]
    fn ammo_presence_mask() {
        let mask = ItemFlags::from_raw(3840);
        assert_eq!(mask, ItemFlags::AMMO);
        assert_eq!(mask.names(), vec!["SHELLS", "NAILS", "ROCKETS", "CELLS"]);
        assert!(mask.owned_weapons().is_empty());
        assert_eq!(mask.armor_tier(), None);
    }

    #[test]
    fn keeps_unknown_bits() {
        let mask = ItemFlags::from_raw(IT_QUAD | (1 << 24) | (1 << 27));
        assert!(mask.has(ItemFlags::QUAD));
        assert_eq!(mask.unknown_bits(), (1 << 24) | (1 << 27));
        assert_eq!(mask.bits(), IT_QUAD | (1 << 24) | (1 << 27));
        assert_eq!(mask.names(), vec!["QUAD"]);
    }

    #[test]
    fn sigil4_survives_signed_stat() {
        let mask = ItemFlags::SIGIL4 | ItemFlags::SIGIL1;
        let stat = mask.to_stat();
        assert!(stat < 0);
        assert_eq!(ItemFlags::from_stat(stat), mask);
    }

    #[test]
    fn highest_armor_tier_wins() {
        assert_eq!(ItemFlags::ARMOR1.armor_tier(), Some(ArmorTier::Green));
        let both = ItemFlags::ARMOR1 | ItemFlags::ARMOR3;
        assert!(both.has_conflicting_armor());
        assert_eq!(both.armor_tier(), Some(ArmorTier::Red));
        assert!(!ItemFlags::ARMOR2.has_conflicting_armor());
    }

    #[test]
    fn group_tests_need_only_one_member() {
        let mask = ItemFlags::ROCKET_LAUNCHER | ItemFlags::KEY2;
        assert!(mask.has_any(ItemFlags::WEAPONS));
        assert!(!mask.has(ItemFlags::WEAPONS));
        assert!(mask.has_any(ItemFlags::KEYS));
        assert!(!mask.has_any(ItemFlags::SIGILS));
        assert!(!mask.has_any(ItemFlags::empty()));
    }

    #[test]
    fn armor_tier_display() {
        assert_eq!(ArmorTier::Green.to_string(), "green");
        assert_eq!(ArmorTier::Yellow.to_string(), "yellow");
        assert_eq!(ArmorTier::Red.to_string(), "red");
    }

    #[test]
    fn groups_partition_named_bits() {
        let groups = [
            ItemFlags::WEAPONS,
            ItemFlags::AMMO,
            ItemFlags::ARMOR,
            ItemFlags::POWERUPS,
            ItemFlags::KEYS,
            ItemFlags::SIGILS,
        ];
        let mut union = ItemFlags::empty();
        for group in groups {
            assert!(!union.intersects(group));
            union |= group;
        }
        assert_eq!(union, ItemFlags::all());
    }

    #[test]
    fn lists_owned_weapons_in_number_order() {
        let mask = ItemFlags::ROCKET_LAUNCHER | ItemFlags::AXE | ItemFlags::SHOTGUN;
        assert_eq!(
            mask.owned_weapons(),
            vec![Weapon::Axe, Weapon::Shotgun, Weapon::RocketLauncher]
        );
    }
}
