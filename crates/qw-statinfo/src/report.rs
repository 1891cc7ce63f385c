// Plain-text rendering of decoded vocabulary.

use qw_stats::{
    ActiveWeaponEncoding, ItemFlags, MAX_CL_STATS, StatError, StatSlot, Weapon, classify,
};

pub fn items(mask: ItemFlags) -> Vec<String> {
    let mut lines = vec![format!("mask {} (0x{:08x})", mask.bits(), mask.bits())];
    for name in mask.names() {
        lines.push(format!("  IT_{name}"));
    }
    let weapons: Vec<&str> = mask.owned_weapons().iter().map(|w| w.name()).collect();
    if !weapons.is_empty() {
        lines.push(format!("weapons: {}", weapons.join(", ")));
    }
    if let Some(tier) = mask.armor_tier() {
        let note = if mask.has_conflicting_armor() {
            " (conflicting tiers)"
        } else {
            ""
        };
        lines.push(format!("armor: {tier}{note}"));
    }
    let unknown = mask.unknown_bits();
    if unknown != 0 {
        lines.push(format!("unknown bits: 0x{unknown:08x}"));
    }
    lines
}

pub fn slot(index: usize) -> Result<String, StatError> {
    Ok(match classify(index)? {
        StatSlot::Named(stat) if stat.is_extension() => {
            format!("{index}: {stat} (extension)")
        }
        StatSlot::Named(stat) => format!("{index}: {stat}"),
        StatSlot::Reserved(_) => format!("{index}: reserved"),
        StatSlot::Unnamed(_) => format!("{index}: unnamed"),
    })
}

pub fn table() -> Vec<String> {
    (0..MAX_CL_STATS).filter_map(|index| slot(index).ok()).collect()
}

pub fn weapon(value: i32, encoding: ActiveWeaponEncoding) -> String {
    match Weapon::resolve_active(value, encoding) {
        Some(weapon) => {
            let ammo = weapon
                .ammo_stat()
                .map(|stat| stat.name())
                .unwrap_or("none");
            format!("{value}: {weapon} (num {}, ammo {ammo})", weapon.num())
        }
        None => format!("{value}: no weapon"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_ammo_mask() {
        let lines = items(ItemFlags::from_raw(3840));
        assert_eq!(
            lines,
            vec![
                "mask 3840 (0x00000f00)",
                "  IT_SHELLS",
                "  IT_NAILS",
                "  IT_ROCKETS",
                "  IT_CELLS",
            ]
        );
    }

    #[test]
    fn reports_unknown_bits_and_armor() {
        let lines = items(ItemFlags::ARMOR2 | ItemFlags::from_raw(1 << 25));
        assert!(lines.contains(&"armor: yellow".to_string()));
        assert!(lines.contains(&"unknown bits: 0x02000000".to_string()));
    }

    #[test]
    fn reports_slots() {
        assert_eq!(slot(0).unwrap(), "0: STAT_HEALTH");
        assert_eq!(slot(1).unwrap(), "1: reserved");
        assert_eq!(slot(17).unwrap(), "17: STAT_TIME (extension)");
        assert!(slot(32).is_err());
        assert_eq!(table().len(), MAX_CL_STATS);
    }

    #[test]
    fn reports_weapon() {
        assert_eq!(
            weapon(1, ActiveWeaponEncoding::Number),
            "1: axe (num 1, ammo none)"
        );
        assert_eq!(
            weapon(32, ActiveWeaponEncoding::ItemBit),
            "32: rocket launcher (num 7, ammo STAT_ROCKETS)"
        );
        assert_eq!(weapon(99, ActiveWeaponEncoding::Number), "99: no weapon");
    }
}
