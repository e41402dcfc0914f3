//! Properties of the combination search, exercised through the public API.

use kart_core::{
    AttributeTable, Entity, SearchConfig, Session, StatKey, StatLine, TableKind, Threshold,
    Totals, WeightVector, combine, dedupe, filter_and_rank, find_equivalent,
};

fn line(values: [i32; 7]) -> StatLine {
    StatLine::from_pairs(StatKey::ALL.into_iter().zip(values))
}

/// Road Terrain Water Unknown Accel Weight Handling
fn characters() -> AttributeTable {
    AttributeTable::new(
        TableKind::Character,
        vec![
            Entity::new("Baby Mario", line([0, 1, 2, 0, 5, 0, 5])),
            Entity::new("Mario", line([3, 3, 3, 0, 2, 1, 2])),
            Entity::new("Luigi", line([3, 3, 3, 0, 2, 1, 2])),
            Entity::new("Wario", line([5, 4, 3, 0, 0, 5, 1])),
            Entity::new("Baby Luigi", line([0, 1, 2, 0, 5, 0, 5])),
            Entity::new("Toad", line([3, 3, 3, 1, 2, 1, 2])),
        ],
    )
    .unwrap()
}

fn machines() -> AttributeTable {
    AttributeTable::new(
        TableKind::Machine,
        vec![
            Entity::new("Standard Kart", line([2, 1, 0, 0, 3, 2, 1])),
            Entity::new("Biddybuggy", line([0, 2, 1, 0, 6, 0, 4])),
            Entity::new("Rally Kart", line([1, 3, 1, 0, 3, 2, 2])),
        ],
    )
    .unwrap()
}

#[test]
fn cross_product_is_complete() {
    let characters = characters();
    let machines = machines();
    let combinations = combine(&characters, &machines, 3);

    assert_eq!(combinations.len(), characters.len() * machines.len());

    for (i, character) in characters.iter().enumerate() {
        for (j, machine) in machines.iter().enumerate() {
            let combination = &combinations[i * machines.len() + j];
            assert_eq!(combination.character(), character);
            assert_eq!(combination.machine(), machine);
            for key in StatKey::COMBINED {
                assert_eq!(
                    combination.totals().get(key),
                    Some(character.stats[key] + machine.stats[key] + 3)
                );
            }
        }
    }
}

#[test]
fn filter_partitions_on_threshold() {
    let characters = characters();
    let machines = machines();
    let threshold = Threshold::new(StatKey::Accel, 10).unwrap();

    let all = combine(&characters, &machines, 3);
    let kept = filter_and_rank(all.clone(), threshold, WeightVector::default());

    for ranked in &kept {
        assert!(ranked.totals().accel >= 10);
    }
    for combination in &all {
        let retained = kept.iter().any(|r| r.combination == *combination);
        assert_eq!(retained, combination.totals().accel >= 10);
    }
}

#[test]
fn equal_scores_keep_combination_order() {
    let characters = characters();
    let machines = machines();
    let threshold = Threshold::new(StatKey::Accel, 0).unwrap();

    let ranked = filter_and_rank(
        combine(&characters, &machines, 3),
        threshold,
        WeightVector::default(),
    );

    // Mario and Luigi score the same with every machine; Mario loads first.
    for machine in machines.names() {
        let position = |name: &str| {
            ranked
                .iter()
                .position(|r| r.character().name == name && r.machine().name == machine)
                .unwrap()
        };
        assert!(position("Mario") < position("Luigi"));
    }

    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn zero_weights_preserve_input_order() {
    let characters = characters();
    let machines = machines();
    let threshold = Threshold::new(StatKey::Accel, 0).unwrap();
    let all = combine(&characters, &machines, 3);

    let ranked = filter_and_rank(all.clone(), threshold, WeightVector::new(0, 0, 0));

    assert!(ranked.iter().all(|r| r.score == 0.0));
    let order: Vec<_> = ranked.iter().map(|r| r.combination).collect();
    assert_eq!(order, all);
}

#[test]
fn normalized_weights_sum_to_one() {
    for (road, terrain, water) in [(1, 0, 0), (50, 25, 25), (100, 100, 100), (3, 7, 11)] {
        let weights = WeightVector::new(road, terrain, water).normalized();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn every_pair_is_in_its_own_equivalence_set() {
    let characters = characters();
    let machines = machines();

    for character in &characters {
        for machine in &machines {
            let target = Totals::combine(character, machine, 3);
            let equivalents = find_equivalent(&characters, &machines, &target, 3);
            assert!(
                equivalents
                    .iter()
                    .any(|c| c.is_pair(&character.name, &machine.name))
            );
            assert!(equivalents.iter().all(|c| *c.totals() == target));
        }
    }
}

#[test]
fn dedupe_keeps_first_of_identical_rows() {
    let deduped = dedupe(&characters(), &StatKey::ALL);

    // Luigi matches Mario, Baby Luigi matches Baby Mario; Toad differs by Unknown.
    assert_eq!(
        deduped.names().collect::<Vec<_>>(),
        vec!["Baby Mario", "Mario", "Wario", "Toad"]
    );
}

#[test]
fn worked_example() {
    let characters = AttributeTable::new(
        TableKind::Character,
        vec![Entity::new("A", line([3, 3, 3, 0, 2, 1, 2]))],
    )
    .unwrap();
    let machines = AttributeTable::new(
        TableKind::Machine,
        vec![Entity::new("X", line([2, 1, 0, 0, 3, 2, 1]))],
    )
    .unwrap();
    let session = Session::new(characters, machines, SearchConfig::default()).unwrap();

    let query = session
        .default_query()
        .unwrap()
        .with_threshold_value(5)
        .with_weights(WeightVector::new(50, 25, 25));
    let ranked = session.search(query);

    assert_eq!(ranked.len(), 1);
    assert_eq!(
        *ranked[0].totals(),
        Totals {
            road: 8,
            terrain: 7,
            water: 6,
            accel: 8,
            weight: 6,
            handling: 6,
        }
    );
    assert_eq!(ranked[0].score, 7.25);

    let zeroed = session.search(query.with_weights(WeightVector::new(0, 0, 0)));
    assert_eq!(zeroed[0].score, 0.0);
}

#[test]
fn simulation_spans_duplicate_characters() {
    let session = Session::new(characters(), machines(), SearchConfig::default()).unwrap();
    let simulation = session.simulate("Baby Luigi", "Biddybuggy").unwrap();

    let pairs: Vec<_> = simulation
        .equivalents
        .iter()
        .map(|c| c.character().name.as_str())
        .collect();
    assert_eq!(pairs, vec!["Baby Mario", "Baby Luigi"]);
    assert_eq!(simulation.others().count(), 1);
}
