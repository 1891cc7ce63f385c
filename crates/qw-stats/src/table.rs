// Per-player stat values as delivered by svc_updatestat/svc_updatestatlong.

use tracing::{trace, warn};

use crate::defs::{MAX_CL_STATS, STAT_MONSTERS, STAT_SECRETS};
use crate::error::StatError;
use crate::items::ItemFlags;
use crate::labels::StatLabels;
use crate::stat::Stat;
use crate::weapon::{ActiveWeaponEncoding, Weapon};

/// A single decoded stat write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatUpdate {
    pub index: u8,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    values: [i32; MAX_CL_STATS],
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStats {
    pub fn new() -> Self {
        Self {
            values: [0; MAX_CL_STATS],
        }
    }

    /// Stores `value` at `index`. Slots without a name are stored opaquely;
    /// only indices past the table are rejected.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), StatError> {
        let Some(slot) = self.values.get_mut(index) else {
            warn!(index, value, "rejecting stat update past table");
            return Err(StatError::IndexOutOfRange {
                index,
                max: MAX_CL_STATS,
            });
        };
        trace!(index, value, "stat update");
        *slot = value;
        Ok(())
    }

    pub fn apply(&mut self, update: &StatUpdate) -> Result<(), StatError> {
        self.set(update.index as usize, update.value)
    }

    pub fn raw(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    pub fn get(&self, stat: Stat) -> i32 {
        self.values[stat.index()]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn items(&self) -> ItemFlags {
        ItemFlags::from_stat(self.get(Stat::Items))
    }

    pub fn active_weapon(&self, encoding: ActiveWeaponEncoding) -> Option<Weapon> {
        Weapon::resolve_active(self.get(Stat::ActiveWeapon), encoding)
    }

    pub fn found_secret(&mut self) {
        self.values[STAT_SECRETS] = self.values[STAT_SECRETS].wrapping_add(1);
    }

    pub fn killed_monster(&mut self) {
        self.values[STAT_MONSTERS] = self.values[STAT_MONSTERS].wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.values = [0; MAX_CL_STATS];
    }

    /// Pairs each labelled slot with its current value.
    pub fn describe<'a, L>(&self, labels: &'a L) -> Vec<(usize, &'a str, i32)>
    where
        L: StatLabels + ?Sized,
    {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| labels.label(index).map(|label| (index, label, *value)))
            .collect()
    }
}
