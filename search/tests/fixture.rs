//! End-to-end queries through index, context and queryable.

use docquery_core::{BackingStore, Record};
use docquery_search::{
    EnhanceResults, InMemoryIndex, Predicate, Queryable, ResultEnhancer, SearchConfig,
    SecurityOptions, UNIFORM_SCORE,
};

fn animals() -> BackingStore<Record> {
    BackingStore::new(vec![
        Record::new(1, "monkey"),
        Record::new(2, "cat"),
        Record::new(3, "cat"),
    ])
}

#[test]
fn queryable_filters_through_search_context() {
    let index = InMemoryIndex::new("test", animals());

    let ctx = index.create_search_context(SecurityOptions::DisableSecurityCheck);
    let queryable = ctx.queryable();
    let results = queryable.filter(|r| r.title.contains("cat")).to_vec();

    assert_eq!(queryable.count(), 3);
    assert_eq!(results.len(), 2);
    assert_eq!(results, vec![Record::new(2, "cat"), Record::new(3, "cat")]);
}

#[test]
fn enhanced_results_count_matches() {
    let enhancer = ResultEnhancer::new(animals());
    let index = InMemoryIndex::new("test", enhancer.store().clone());

    let ctx = index.create_search_context(SecurityOptions::DisableSecurityCheck);
    let query = ctx
        .queryable()
        .filter_by(&Predicate::title_contains("cat"), &SearchConfig::default());
    let results = enhancer.results(&query);

    assert_eq!(results.total_search_results(), 2);
    assert!(results.hits().iter().all(|hit| hit.score == UNIFORM_SCORE));
    assert!(enhancer.facets(&query).is_empty());
}

#[test]
fn store_loaded_from_json_is_queryable() {
    let store: BackingStore<Record> = BackingStore::from_json(
        r#"[
            {"id": 1, "title": "monkey"},
            {"id": 2, "title": "cat", "template_name": "Animal"},
            {"id": 3, "title": "cat"}
        ]"#,
    )
    .unwrap();

    let query = Queryable::new(store).filter_by(
        &Predicate::template_is("Animal"),
        &SearchConfig::default(),
    );

    assert_eq!(query.count(), 1);
    assert_eq!(query.first().map(|r| r.id.into_inner()), Some(2));
}
