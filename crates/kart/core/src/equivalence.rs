//! Exact-equivalence search over the un-deduplicated cross product.

use crate::combine::{Combination, Totals, combine};
use crate::table::AttributeTable;

/// Every combination whose totals equal `target` on all combined stats.
///
/// The pair that produced `target`, if any, is part of the result.
pub fn find_equivalent<'a>(
    characters: &'a AttributeTable,
    machines: &'a AttributeTable,
    target: &Totals,
    bonus: i32,
) -> Vec<Combination<'a>> {
    let equivalents: Vec<_> = combine(characters, machines, bonus)
        .into_iter()
        .filter(|combination| combination.totals() == target)
        .collect();

    tracing::debug!(matches = equivalents.len(), ?target, "equivalence search");
    equivalents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{StatKey, StatLine};
    use crate::table::{Entity, TableKind};

    fn entity(name: &str, road: i32, water: i32, unknown: i32) -> Entity {
        Entity::new(
            name,
            StatLine::from_pairs([
                (StatKey::Road, road),
                (StatKey::Water, water),
                (StatKey::Unknown, unknown),
            ]),
        )
    }

    #[test]
    fn finds_swapped_contributions() {
        let characters = AttributeTable::new(
            TableKind::Character,
            vec![entity("A", 2, 1, 0), entity("B", 1, 2, 0), entity("C", 1, 1, 0)],
        )
        .unwrap();
        let machines = AttributeTable::new(
            TableKind::Machine,
            vec![entity("X", 0, 1, 0), entity("Y", 1, 0, 0)],
        )
        .unwrap();

        let target = Totals::combine(characters.get("A").unwrap(), machines.get("X").unwrap(), 3);
        let pairs: Vec<_> = find_equivalent(&characters, &machines, &target, 3)
            .iter()
            .map(|c| (c.character().name.as_str(), c.machine().name.as_str()))
            .collect();

        // A+X and B+Y both reach road 5, water 5
        assert_eq!(pairs, vec![("A", "X"), ("B", "Y")]);
    }

    #[test]
    fn unknown_does_not_affect_equivalence() {
        let characters = AttributeTable::new(
            TableKind::Character,
            vec![entity("A", 1, 1, 0), entity("B", 1, 1, 7)],
        )
        .unwrap();
        let machines =
            AttributeTable::new(TableKind::Machine, vec![entity("X", 0, 0, 0)]).unwrap();

        let target = Totals::combine(characters.get("B").unwrap(), machines.get("X").unwrap(), 3);

        assert_eq!(find_equivalent(&characters, &machines, &target, 3).len(), 2);
    }
}
