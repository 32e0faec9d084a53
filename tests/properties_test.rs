use std::collections::BTreeMap;

use proptest::prelude::*;

use idle_planet_calc_rs::catalog::{Catalog, CatalogData, CatalogRecord};
use idle_planet_calc_rs::models::{Item, Order};
use idle_planet_calc_rs::planner::{BonusConfig, IngredientTally, aggregate, expand, sort_bill};

const ORDERABLE: [&str; 7] = [
    "Copper Bar",
    "Bronze Bar",
    "Copper Wire",
    "Circuit",
    "Battery",
    "Lamp",
    "Iron Bar",
];

fn catalog() -> Catalog {
    Catalog::build(CatalogData {
        ores: vec![
            CatalogRecord::new("Copper", 1),
            CatalogRecord::new("Tin", 3),
            CatalogRecord::new("Iron", 2),
        ],
        alloys: vec![
            CatalogRecord::new("Copper Bar", 1450).with_ingredient("Copper", 7),
            CatalogRecord::new("Bronze Bar", 2900)
                .with_ingredient("Copper Bar", 2)
                .with_ingredient("Tin", 5),
            CatalogRecord::new("Iron Bar", 3000).with_ingredient("Iron", 9),
        ],
        items: vec![
            CatalogRecord::new("Copper Wire", 10000).with_ingredient("Copper Bar", 5),
            CatalogRecord::new("Circuit", 40000)
                .with_ingredient("Copper Wire", 3)
                .with_ingredient("Bronze Bar", 2)
                .with_ingredient("Copper Bar", 1),
            CatalogRecord::new("Battery", 70000)
                .with_ingredient("Circuit", 1)
                .with_ingredient("Iron Bar", 4),
            CatalogRecord::new("Lamp", 90000)
                .with_ingredient("Battery", 2)
                .with_ingredient("Copper Wire", 1)
                .with_ingredient("Copper", 11),
        ],
    })
    .unwrap()
}

fn as_map(tally: &IngredientTally) -> BTreeMap<String, (i64, i64)> {
    tally
        .entries()
        .iter()
        .map(|e| (e.name.clone(), (e.amount, e.value())))
        .collect()
}

/// Unadjusted per-unit requirements, computed independently of the planner.
fn raw_requirements(catalog: &Catalog, item: &Item, factor: i64, out: &mut BTreeMap<String, i64>) {
    for edge in &item.recipe {
        let amount = factor * i64::from(edge.amount);
        *out.entry(edge.ingredient.clone()).or_insert(0) += amount;
        let ingredient = catalog.lookup(&edge.ingredient).unwrap();
        raw_requirements(catalog, ingredient, amount, out);
    }
}

fn arb_order() -> impl Strategy<Value = Order> {
    (0..ORDERABLE.len(), 1u32..50).prop_map(|(idx, qty)| Order::new(ORDERABLE[idx], qty))
}

fn arb_multiplier() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.0), 0.5f64..2.0]
}

fn arb_config() -> impl Strategy<Value = BonusConfig> {
    (
        arb_multiplier(),
        arb_multiplier(),
        arb_multiplier(),
        arb_multiplier(),
        arb_multiplier(),
        arb_multiplier(),
    )
        .prop_map(|(fa, ia, fr, ir, fv, iv)| BonusConfig {
            final_amount_bonus: fa,
            intermediate_amount_bonus: ia,
            final_room_bonus: fr,
            intermediate_room_bonus: ir,
            final_value_bonus: fv,
            intermediate_value_bonus: iv,
        })
}

proptest! {
    #[test]
    fn prop_aggregate_ignores_order_sequence(
        orders in prop::collection::vec(arb_order(), 1..8).prop_shuffle(),
        config in arb_config(),
    ) {
        let catalog = catalog();
        let forward = aggregate(&catalog, &config, &orders).unwrap();

        let mut reversed = orders.clone();
        reversed.reverse();
        let backward = aggregate(&catalog, &config, &reversed).unwrap();

        prop_assert_eq!(as_map(&forward), as_map(&backward));
    }

    #[test]
    fn prop_aggregate_is_idempotent(
        orders in prop::collection::vec(arb_order(), 0..8),
        config in arb_config(),
    ) {
        let catalog = catalog();
        let first = aggregate(&catalog, &config, &orders).unwrap();
        let second = aggregate(&catalog, &config, &orders).unwrap();

        prop_assert_eq!(first.to_entries(), second.to_entries());
    }

    #[test]
    fn prop_quantity_scales_linearly(
        idx in 0..ORDERABLE.len(),
        k in 1u32..500,
        config in arb_config(),
    ) {
        let catalog = catalog();
        let single = aggregate(&catalog, &config, &[Order::new(ORDERABLE[idx], k)]).unwrap();
        let double = aggregate(&catalog, &config, &[Order::new(ORDERABLE[idx], 2 * k)]).unwrap();

        prop_assert_eq!(double.to_entries(), single.scaled(2).unwrap().to_entries());
    }

    #[test]
    fn prop_neutral_expansion_matches_raw_recipes(idx in 0..ORDERABLE.len()) {
        let catalog = catalog();
        let item = catalog.lookup(ORDERABLE[idx]).unwrap();
        let tally = expand(&catalog, &BonusConfig::default(), item).unwrap();

        let mut expected = BTreeMap::new();
        raw_requirements(&catalog, item, 1, &mut expected);

        let actual: BTreeMap<String, i64> = tally
            .entries()
            .iter()
            .map(|e| (e.name.clone(), e.amount))
            .collect();
        prop_assert_eq!(actual, expected);

        for entry in tally.entries() {
            let base = catalog.lookup(&entry.name).unwrap().base_value;
            prop_assert_eq!(entry.value(), entry.amount * base);
        }
    }

    #[test]
    fn prop_sorted_bill_is_ordered_and_stable(
        orders in prop::collection::vec(arb_order(), 1..8),
        config in arb_config(),
    ) {
        let catalog = catalog();
        let tally = aggregate(&catalog, &config, &orders).unwrap();
        let sorted = sort_bill(&tally);

        prop_assert_eq!(sorted.len(), tally.len());

        let first_seen = |name: &str| tally.entries().iter().position(|e| e.name == name).unwrap();

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.kind >= b.kind);
            if a.kind == b.kind {
                prop_assert!(a.total_value >= b.total_value);
                if a.total_value == b.total_value {
                    prop_assert!(first_seen(&a.name) < first_seen(&b.name));
                }
            }
        }
    }
}
