//! Shared fixture catalogue for the behavioural tests.
//!
//! Small enough to reason about by hand, rich enough to exercise every
//! decision path: conqueror keystones (including a slot with no record),
//! notables that swap or keep their skill, replaceable and
//! non-replaceable small passives, and a jewel socket.

use timeless_calc::{
    AlternateAddition, AlternateSkill, Calculator, Catalog, NodeKind, PassiveNode, Stat,
    Translations, TreeVersion,
};

pub fn fixture_calculator() -> Calculator {
    Calculator::new(fixture_catalog())
}

pub fn fixture_catalog() -> Catalog {
    Catalog::from_records(
        nodes(),
        skills(),
        additions(),
        tree_versions(),
        stats(),
        Translations::default(),
    )
    .expect("fixture catalogue is valid")
}

fn node(index: u32, graph_id: u32, stat_indices: &[u32]) -> PassiveNode {
    PassiveNode {
        index,
        id: format!("node{index}"),
        stat_indices: stat_indices.iter().copied().collect(),
        graph_id,
        name: format!("Node {index}"),
        is_keystone: false,
        is_notable: false,
        is_jewel_socket: false,
    }
}

fn nodes() -> Vec<PassiveNode> {
    let mut keystone = node(100, 12345, &[1]);
    keystone.is_keystone = true;
    let mut notable = node(200, 23456, &[10, 11]);
    notable.is_notable = true;
    let small = node(300, 34567, &[20]);
    let attribute = node(400, 45678, &[573]);
    let mut socket = node(500, 56789, &[]);
    socket.is_jewel_socket = true;
    let two_stat_small = node(600, 40404, &[30, 31]);
    vec![keystone, notable, small, attribute, socket, two_stat_small]
}

fn tree_versions() -> Vec<TreeVersion> {
    let entries = [
        // (index, small attr, small normal, min adds, max adds, keep weight)
        (1, true, true, 1, 2, 0),
        (2, false, false, 1, 1, 100),
        (3, false, false, 1, 2, 100),
        (4, false, false, 1, 1, 100),
        (5, true, true, 1, 1, 0),
    ];
    entries
        .into_iter()
        .map(|(index, rsa, rsn, min, max, keep)| TreeVersion {
            index,
            id: format!("tv{index}"),
            replace_small_attribute: rsa,
            replace_small_normal: rsn,
            min_additions: min,
            max_additions: max,
            notable_replacement_weight: keep,
        })
        .collect()
}

fn skill(
    index: u32,
    tree_version: u32,
    applies_to: &[NodeKind],
    stats_keys: &[u32],
    bounds: &[(u32, u32)],
    spawn_weight: u32,
    conqueror: (u32, u32),
) -> AlternateSkill {
    let bound = |i: usize| bounds.get(i).copied().unwrap_or((0, 0));
    AlternateSkill {
        index,
        id: format!("skill{index}"),
        tree_version,
        name: format!("Skill {index}"),
        applies_to: applies_to.to_vec(),
        stats_keys: stats_keys.iter().copied().collect(),
        stat1_min: bound(0).0,
        stat1_max: bound(0).1,
        stat2_min: bound(1).0,
        stat2_max: bound(1).1,
        stat3_min: bound(2).0,
        stat3_max: bound(2).1,
        stat4_min: bound(3).0,
        stat4_max: bound(3).1,
        spawn_weight,
        conqueror_index: conqueror.0,
        random_min: 0,
        random_max: 0,
        conqueror_version: conqueror.1,
    }
}

fn skills() -> Vec<AlternateSkill> {
    use NodeKind::{Keystone, Notable, SmallAttribute, SmallNormal};
    vec![
        skill(1000, 3, &[Keystone], &[800, 801], &[(10, 20), (5, 5)], 0, (1, 0)),
        skill(1001, 3, &[Keystone], &[802], &[(1, 100)], 0, (2, 0)),
        skill(1002, 2, &[Keystone], &[810], &[(3, 7)], 0, (1, 0)),
        skill(1100, 3, &[Notable], &[900], &[(1, 10)], 50, (0, 0)),
        skill(1101, 3, &[Notable], &[901, 902], &[(5, 10), (1, 2)], 150, (0, 0)),
        skill(1102, 3, &[Notable], &[903], &[(1, 1000)], 100, (0, 0)),
        skill(1200, 1, &[SmallNormal], &[910], &[(1, 5)], 30, (0, 0)),
        skill(1201, 1, &[SmallNormal], &[911], &[(2, 4)], 70, (0, 0)),
        skill(1300, 1, &[SmallAttribute], &[912], &[(6, 6)], 10, (0, 0)),
        skill(1400, 1, &[Notable], &[920], &[(1, 3)], 25, (0, 0)),
        skill(1401, 1, &[Notable], &[921], &[(10, 20)], 75, (0, 0)),
        skill(1500, 5, &[Keystone], &[930], &[(1, 50)], 0, (1, 0)),
        skill(1501, 5, &[Notable], &[931], &[(1, 4)], 40, (0, 0)),
    ]
}

fn addition(
    index: u32,
    tree_version: u32,
    applies_to: &[NodeKind],
    stats_keys: &[u32],
    bounds: &[(u32, u32)],
    spawn_weight: u32,
) -> AlternateAddition {
    let bound = |i: usize| bounds.get(i).copied().unwrap_or((0, 0));
    AlternateAddition {
        index,
        id: format!("addition{index}"),
        tree_version,
        spawn_weight,
        stats_keys: stats_keys.iter().copied().collect(),
        stat1_min: bound(0).0,
        stat1_max: bound(0).1,
        stat2_min: bound(1).0,
        stat2_max: bound(1).1,
        applies_to: applies_to.to_vec(),
    }
}

fn additions() -> Vec<AlternateAddition> {
    use NodeKind::{Notable, SmallAttribute, SmallNormal};
    vec![
        addition(2000, 3, &[Notable, SmallNormal, SmallAttribute], &[950], &[(1, 3)], 100),
        addition(2001, 3, &[Notable, SmallNormal], &[951, 952], &[(2, 5), (1, 2)], 200),
        addition(2002, 3, &[SmallAttribute], &[953], &[(7, 9)], 100),
        addition(2100, 2, &[Notable, SmallNormal, SmallAttribute], &[960], &[(1, 2)], 1),
        addition(2200, 4, &[Notable, SmallNormal], &[961], &[(3, 4)], 5),
        addition(2300, 1, &[Notable], &[970], &[(1, 2)], 10),
        addition(2400, 5, &[SmallNormal, SmallAttribute, Notable], &[980], &[(5, 6)], 3),
    ]
}

fn stats() -> Vec<Stat> {
    [573, 576, 579, 900, 901, 902, 903, 950, 951, 952, 953]
        .into_iter()
        .map(|index| Stat {
            index,
            id: format!("stat{index}"),
            text: String::new(),
            category: None,
        })
        .collect()
}
