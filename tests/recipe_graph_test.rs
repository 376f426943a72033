use cooking_helper::{
    Catalog, CooccurrenceGraph, Corpus, IngredientRecord, MostConnected, Recipe, RecipeIndex,
    Resolution,
};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

fn fixture_corpus() -> Corpus {
    let values: Vec<Value> = serde_json::from_str(include_str!("fixtures/recipes.json"))
        .expect("fixture is valid JSON");
    Corpus::from_values(&values)
}

fn recipe(ingredients: &[(i64, &str)]) -> Recipe {
    Recipe::new(
        ingredients
            .iter()
            .map(|&(id, name)| IngredientRecord::new(id, name))
            .collect(),
    )
}

/// Brute-force count of recipes containing both ids
fn shared_recipes(corpus: &Corpus, a: i64, b: i64) -> u32 {
    corpus
        .recipes()
        .iter()
        .filter(|recipe| {
            let ids: HashSet<i64> = recipe.ingredients.iter().map(|i| i.id).collect();
            ids.contains(&a) && ids.contains(&b)
        })
        .count() as u32
}

#[test]
fn test_fixture_skips_malformed_recipes() {
    let corpus = fixture_corpus();
    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.skipped(), 2);
}

#[test]
fn test_edge_weights_match_brute_force_counts() {
    let corpus = fixture_corpus();
    let graph = CooccurrenceGraph::build(&corpus);

    let ids: Vec<i64> = corpus
        .recipes()
        .iter()
        .flat_map(|recipe| recipe.ingredients.iter().map(|i| i.id))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    assert_eq!(graph.node_count(), ids.len());

    for &a in &ids {
        for &b in &ids {
            if a == b {
                continue;
            }
            let expected = shared_recipes(&corpus, a, b);
            let actual = graph.weight(a, b).unwrap_or(0);
            assert_eq!(actual, expected, "weight({a}, {b})");
            assert_eq!(graph.weight(a, b), graph.weight(b, a));
        }
    }
}

#[test]
fn test_single_edge_per_pair_and_no_self_loops() {
    let graph = CooccurrenceGraph::build(&fixture_corpus());

    let mut seen = HashSet::new();
    for (a, b, weight) in graph.edges() {
        assert_ne!(a, b, "self-loop on {a}");
        assert!(weight > 0);
        assert!(seen.insert((a.min(b), a.max(b))), "duplicate edge {a}-{b}");
    }
    assert_eq!(seen.len(), graph.edge_count());
}

#[test]
fn test_catalog_from_fixture() {
    let catalog = Catalog::build(&fixture_corpus());

    let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "2 tbsp Butter",
            "basil",
            "cauliflower",
            "garlic",
            "olive oil",
            "salt",
            "shrimp",
            "tomatoes",
        ]
    );

    // "butter" (1145) cleans to the same key as "2 tbsp Butter" (1001)
    assert!(catalog.get(1145).is_none());
    assert_eq!(catalog.name_of(1001), Some("2 tbsp Butter"));
}

#[test]
fn test_catalog_build_is_repeatable() {
    let corpus = fixture_corpus();
    let first = Catalog::build(&corpus);
    for _ in 0..3 {
        assert_eq!(Catalog::build(&corpus).entries(), first.entries());
    }
}

#[test]
fn test_query_flow_from_name_to_pairings() {
    let index = RecipeIndex::build(fixture_corpus());

    let garlic = match index.catalog.resolve("GARL") {
        Resolution::Unique(entry) => entry,
        other => panic!("expected a unique match, got {other:?}"),
    };
    assert_eq!(garlic.id, 11215);

    let pairings = index.graph.recommend_pairings(garlic.id, 3, &index.catalog);
    let summary: Vec<(&str, u32)> = pairings
        .iter()
        .map(|p| (p.name.as_str(), p.weight))
        .collect();
    assert_eq!(
        summary,
        vec![("olive oil", 2), ("2 tbsp Butter", 1), ("Unknown", 1)]
    );

    assert!(matches!(index.catalog.resolve("s"), Resolution::Ambiguous(_)));
    assert_eq!(index.catalog.resolve("saffron"), Resolution::NotFound);
}

#[test]
fn test_most_connected_on_fixture() {
    let graph = CooccurrenceGraph::build(&fixture_corpus());
    assert_eq!(
        graph.most_connected(),
        Some(MostConnected {
            name: "garlic".to_string(),
            connections: 8
        })
    );
}

#[test]
fn test_name_and_id_identity_can_disagree() {
    let corpus: Corpus = vec![
        recipe(&[(1, "Butter"), (2, "flour")]),
        recipe(&[(3, "butter"), (4, "sugar")]),
        recipe(&[(5, "egg"), (6, "milk"), (7, "cream")]),
    ]
    .into_iter()
    .collect();
    let graph = CooccurrenceGraph::build(&corpus);

    // Two butter ids merge by name, giving "butter" two neighbors first
    assert_eq!(
        graph.most_connected().map(|m| (m.name, m.connections)),
        Some(("butter".to_string(), 2))
    );
    assert_eq!(
        graph.most_connected_by_id().map(|m| (m.name, m.connections)),
        Some(("egg".to_string(), 2))
    );
}

#[test]
fn test_weights_independent_of_recipe_order() {
    let corpus = fixture_corpus();
    let mut reversed: Vec<Recipe> = corpus.recipes().to_vec();
    reversed.reverse();
    for recipe in &mut reversed {
        recipe.ingredients.reverse();
    }
    let reversed: Corpus = reversed.into_iter().collect();

    let weights = |graph: &CooccurrenceGraph| -> HashMap<(i64, i64), u32> {
        graph
            .edges()
            .map(|(a, b, w)| ((a.min(b), a.max(b)), w))
            .collect()
    };

    assert_eq!(
        weights(&CooccurrenceGraph::build(&corpus)),
        weights(&CooccurrenceGraph::build(&reversed))
    );
}

#[test]
fn test_empty_corpus_answers_nothing() {
    let index = RecipeIndex::build(Corpus::default());

    assert!(index.catalog.is_empty());
    assert_eq!(index.graph.node_count(), 0);
    assert_eq!(index.catalog.resolve("garlic"), Resolution::NotFound);
    assert!(index.graph.recommend_pairings(11215, 5, &index.catalog).is_empty());
    assert_eq!(index.graph.most_connected(), None);
}
