use wayfare_api::services::query_strategy::build_search_strategies;

#[test]
fn category_queries_come_before_generic_fallbacks() {
    let queries = build_search_strategies("Kyoto", &["museums".to_string()]);

    assert_eq!(queries[0], "famous museums Kyoto");
    assert_eq!(queries[1], "top museums Kyoto");
    assert_eq!(queries[2], "best museums to visit Kyoto");

    let tail: Vec<&str> = queries[queries.len() - 4..]
        .iter()
        .map(|q| q.as_str())
        .collect();
    assert_eq!(
        tail,
        vec![
            "attractions in Kyoto",
            "places to visit Kyoto",
            "tourist spots Kyoto",
            "Kyoto"
        ]
    );
}

#[test]
fn no_categories_means_generic_queries_only() {
    let queries = build_search_strategies("Lisbon", &[]);
    assert_eq!(
        queries,
        vec![
            "attractions in Lisbon",
            "places to visit Lisbon",
            "tourist spots Lisbon",
            "Lisbon"
        ]
    );
}

#[test]
fn every_named_category_has_templates() {
    for category in [
        "museums",
        "restaurants",
        "hotels",
        "attractions",
        "parks",
        "entertainment",
        "shopping",
        "cafes",
        "food",
        "history",
        "culture",
    ] {
        let queries = build_search_strategies("Oslo", &[category.to_string()]);
        // At least 3 category-specific queries plus the 4 generic fallbacks.
        assert!(
            queries.len() >= 7,
            "category '{}' produced only {} queries",
            category,
            queries.len()
        );
        assert!(queries[0].contains("Oslo"));
    }
}

#[test]
fn unknown_categories_still_produce_a_query() {
    let queries = build_search_strategies("Kyoto", &["onsen".to_string()]);
    assert_eq!(queries[0], "onsen Kyoto");
}

#[test]
fn multiple_categories_keep_selection_order() {
    let queries = build_search_strategies(
        "Rome",
        &["restaurants".to_string(), "museums".to_string()],
    );

    let first_restaurant = queries.iter().position(|q| q.contains("restaurants")).unwrap();
    let first_museum = queries.iter().position(|q| q.contains("museums")).unwrap();
    assert!(first_restaurant < first_museum);
}

#[test]
fn queries_are_never_blank() {
    let queries = build_search_strategies("  ", &["museums".to_string()]);
    assert!(queries.iter().all(|q| !q.trim().is_empty()));
}
