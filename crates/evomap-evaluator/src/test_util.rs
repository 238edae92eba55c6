use evomap_engine::{Classification, EvolutionStage, Item, MapPoint, Relationship, Scenario};

/// Unplaced, unclassified item whose target stage follows its target x.
pub(crate) fn item(id: &str, x: f64, y: f64, target: Option<Classification>) -> Item {
    Item::new(
        id,
        id.to_uppercase(),
        MapPoint::new(x, y),
        EvolutionStage::from_x(x),
        target,
    )
}

pub(crate) fn rel(a: &str, b: &str) -> Relationship {
    Relationship::new(a, b).unwrap()
}

pub(crate) fn tea_shop_items() -> Vec<Item> {
    Scenario::tea_shop()
        .items
        .iter()
        .map(|item| item.to_item())
        .collect()
}

/// The tea shop solved exactly: every item on its target with its target
/// classification, and every reference relationship declared.
pub(crate) fn solved_tea_shop() -> (Vec<Item>, Vec<Relationship>) {
    let scenario = Scenario::tea_shop();
    let items = tea_shop_items()
        .into_iter()
        .map(|mut item| {
            item.set_actual_position(Some(item.target_position()));
            item.set_actual_classification(item.target_classification());
            item
        })
        .collect();
    let relationships = scenario.reference.iter().cloned().collect();
    (items, relationships)
}
