//! Combination engine: cross product of two tables with derived totals.
//!
//! `Total[stat] = character[stat] + machine[stat] + bonus` for every stat in
//! [`StatKey::COMBINED`]. Output order is character-major, machine-minor, so
//! any stable sort downstream breaks ties by load order.

use crate::stats::StatKey;
use crate::table::{AttributeTable, Entity};

/// Flat bonus added to every combined stat.
pub const DEFAULT_BONUS: i32 = 3;

/// Per-stat totals of a combination, over [`StatKey::COMBINED`] only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Totals {
    pub road: i32,
    pub terrain: i32,
    pub water: i32,
    pub accel: i32,
    pub weight: i32,
    pub handling: i32,
}

impl Totals {
    /// Totals for one character/machine pair.
    pub fn combine(character: &Entity, machine: &Entity, bonus: i32) -> Self {
        let total = |key: StatKey| character.stats[key] + machine.stats[key] + bonus;

        Self {
            road: total(StatKey::Road),
            terrain: total(StatKey::Terrain),
            water: total(StatKey::Water),
            accel: total(StatKey::Accel),
            weight: total(StatKey::Weight),
            handling: total(StatKey::Handling),
        }
    }

    /// Returns the total for `key`, or `None` for stats that are not combined.
    pub const fn get(&self, key: StatKey) -> Option<i32> {
        match key {
            StatKey::Road => Some(self.road),
            StatKey::Terrain => Some(self.terrain),
            StatKey::Water => Some(self.water),
            StatKey::Accel => Some(self.accel),
            StatKey::Weight => Some(self.weight),
            StatKey::Handling => Some(self.handling),
            StatKey::Unknown => None,
        }
    }

    /// Iterates `(key, total)` over [`StatKey::COMBINED`].
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, i32)> + '_ {
        StatKey::COMBINED
            .iter()
            .filter_map(move |&key| self.get(key).map(|value| (key, value)))
    }
}

/// A character paired with a machine. Borrows both from their tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Combination<'a> {
    character: &'a Entity,
    machine: &'a Entity,
    totals: Totals,
}

impl<'a> Combination<'a> {
    pub fn new(character: &'a Entity, machine: &'a Entity, bonus: i32) -> Self {
        Self {
            character,
            machine,
            totals: Totals::combine(character, machine, bonus),
        }
    }

    pub fn character(&self) -> &'a Entity {
        self.character
    }

    pub fn machine(&self) -> &'a Entity {
        self.machine
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// True if this combination pairs the two named entities.
    pub fn is_pair(&self, character: &str, machine: &str) -> bool {
        self.character.name == character && self.machine.name == machine
    }
}

/// Full cross product `characters × machines`, character index outer.
///
/// Nothing is skipped or deduplicated here.
pub fn combine<'a>(
    characters: &'a AttributeTable,
    machines: &'a AttributeTable,
    bonus: i32,
) -> Vec<Combination<'a>> {
    let mut combinations = Vec::with_capacity(characters.len() * machines.len());
    for character in characters {
        for machine in machines {
            combinations.push(Combination::new(character, machine, bonus));
        }
    }

    tracing::trace!(
        characters = characters.len(),
        machines = machines.len(),
        combinations = combinations.len(),
        "built cross product"
    );
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatLine;
    use crate::table::TableKind;

    fn line(values: [i32; 7]) -> StatLine {
        StatLine::from_pairs(StatKey::ALL.into_iter().zip(values))
    }

    #[test]
    fn totals_add_bonus_and_skip_unknown() {
        let character = Entity::new("A", line([3, 3, 3, 9, 2, 1, 2]));
        let machine = Entity::new("X", line([2, 1, 0, 0, 3, 2, 1]));
        let totals = Totals::combine(&character, &machine, DEFAULT_BONUS);

        assert_eq!(
            totals,
            Totals {
                road: 8,
                terrain: 7,
                water: 6,
                accel: 8,
                weight: 6,
                handling: 6,
            }
        );
        assert_eq!(totals.get(StatKey::Unknown), None);
        assert_eq!(totals.iter().count(), 6);
    }

    #[test]
    fn cross_product_is_character_major() {
        let characters = AttributeTable::new(
            TableKind::Character,
            vec![Entity::new("A", StatLine::ZERO), Entity::new("B", StatLine::ZERO)],
        )
        .unwrap();
        let machines = AttributeTable::new(
            TableKind::Machine,
            vec![Entity::new("X", StatLine::ZERO), Entity::new("Y", StatLine::ZERO)],
        )
        .unwrap();

        let pairs: Vec<_> = combine(&characters, &machines, 0)
            .iter()
            .map(|c| (c.character().name.as_str(), c.machine().name.as_str()))
            .collect();

        assert_eq!(pairs, vec![("A", "X"), ("A", "Y"), ("B", "X"), ("B", "Y")]);
    }

    #[test]
    fn empty_table_yields_no_combinations() {
        let characters = AttributeTable::new(TableKind::Character, vec![]).unwrap();
        let machines =
            AttributeTable::new(TableKind::Machine, vec![Entity::new("X", StatLine::ZERO)])
                .unwrap();

        assert!(combine(&characters, &machines, DEFAULT_BONUS).is_empty());
    }
}
