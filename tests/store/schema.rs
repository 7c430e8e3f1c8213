//! Invariants enforced by the SQLite schema

use std::collections::BTreeSet;
use std::sync::Arc;

use grapher_admin::build_id::BuildId;
use grapher_admin::charts::{CacheTagDeriver, resolve_config};
use grapher_admin::models::{ChartSlugRedirect, DataValue, Entity};
use grapher_admin::store::repository::{charts, datasets, entities, redirects, variables};
use grapher_admin::store::{EntityStore, SqliteStore};
use grapher_admin::Error;

use crate::common::{chart, dataset, empty_pool, seed_catalog, seeded_store, ts, variable};

#[tokio::test]
async fn test_slug_may_be_shared_across_publication_states() {
    let pool = empty_pool().await;

    charts::insert(&pool, &chart(1, Some("gdp"), true, "{}")).await.unwrap();
    charts::insert(&pool, &chart(2, Some("gdp"), false, "{}")).await.unwrap();

    let store = SqliteStore::new(pool);
    let published = store.get_chart_by_slug_or_id("gdp", None).await.unwrap().unwrap();
    assert_eq!(published.id, 1);
}

#[tokio::test]
async fn test_two_published_charts_cannot_share_a_slug() {
    let pool = empty_pool().await;
    charts::insert(&pool, &chart(1, Some("gdp"), true, "{}")).await.unwrap();

    let err = charts::insert(&pool, &chart(2, Some("gdp"), true, "{}")).await.unwrap_err();

    assert!(matches!(err, Error::Constraint(_)));
}

#[tokio::test]
async fn test_charts_without_slug_do_not_collide() {
    let pool = empty_pool().await;

    charts::insert(&pool, &chart(1, None, true, "{}")).await.unwrap();
    charts::insert(&pool, &chart(2, None, true, "{}")).await.unwrap();
}

#[tokio::test]
async fn test_unknown_chart_type_is_rejected() {
    let pool = empty_pool().await;

    let err = sqlx::query(
        "INSERT INTO charts (id, name, config, chart_type, last_edited_at, created_at, updated_at) \
         VALUES (1, 'Pie', '{}', 'PieChart', '2017-01-01T00:00:00Z', '2017-01-01T00:00:00Z', '2017-01-01T00:00:00Z')",
    )
    .execute(&pool)
    .await
    .unwrap_err();

    assert!(matches!(Error::from(err), Error::Constraint(_)));
}

#[tokio::test]
async fn test_redirect_slugs_are_unique() {
    let store = seeded_store().await;

    let err = redirects::insert(
        store.pool(),
        &ChartSlugRedirect {
            id: 10,
            slug: "old-slug".to_string(),
            chart_id: 7,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Constraint(_)));
}

#[tokio::test]
async fn test_dataset_name_is_unique_within_namespace() {
    let pool = empty_pool().await;
    datasets::insert(&pool, &dataset(1, "Population")).await.unwrap();

    let err = datasets::insert(&pool, &dataset(2, "Population")).await.unwrap_err();
    assert!(matches!(err, Error::Constraint(_)));

    let mut other_namespace = dataset(3, "Population");
    other_namespace.namespace = "wdi".to_string();
    datasets::insert(&pool, &other_namespace).await.unwrap();
}

#[tokio::test]
async fn test_variable_name_and_code_are_unique_within_dataset() {
    let pool = empty_pool().await;
    seed_catalog(&pool).await;
    variables::insert(&pool, &variable(1, 1, None)).await.unwrap();

    let mut same_name = variable(2, 1, None);
    same_name.name = "Variable 1".to_string();
    assert!(matches!(
        variables::insert(&pool, &same_name).await.unwrap_err(),
        Error::Constraint(_)
    ));

    let mut same_code = variable(3, 1, None);
    same_code.code = Some("V1".to_string());
    assert!(matches!(
        variables::insert(&pool, &same_code).await.unwrap_err(),
        Error::Constraint(_)
    ));
}

#[tokio::test]
async fn test_variable_requires_existing_dataset() {
    let pool = empty_pool().await;
    seed_catalog(&pool).await;

    let err = variables::insert(&pool, &variable(1, 99, None)).await.unwrap_err();

    assert!(matches!(err, Error::Constraint(_)));
}

#[tokio::test]
async fn test_deleting_dataset_cascades_to_variables_and_values() {
    let store = seeded_store().await;
    let pool = store.pool();
    entities::insert(
        pool,
        &Entity {
            id: 1,
            code: Some("FRA".to_string()),
            name: "France".to_string(),
            display_name: "France".to_string(),
            validated: true,
        },
    )
    .await
    .unwrap();
    entities::insert_data_value(
        pool,
        &DataValue {
            id: 1,
            value: "82.3".to_string(),
            entity_id: Some(1),
            variable_id: 101,
            year: 2015,
        },
    )
    .await
    .unwrap();

    datasets::delete(pool, 1).await.unwrap();

    assert_eq!(variables::count_for_dataset(pool, 1).await.unwrap(), 0);
    assert!(entities::data_values_for_variable(pool, 101).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_charts_survive_deleted_variables() {
    let store = seeded_store().await;
    let deriver = CacheTagDeriver::new(Arc::new(store.clone()), BuildId::new("abc123"));
    let chart = store.get_published_chart(42).await.unwrap().unwrap();

    variables::delete(store.pool(), 101).await.unwrap();
    variables::delete(store.pool(), 102).await.unwrap();

    let still_there = store.get_published_chart(42).await.unwrap().unwrap();
    assert_eq!(still_there, chart);
    resolve_config(&store, &still_there).await.unwrap();

    let orphaned = deriver.compute(&still_there).await.unwrap();
    let mut no_dimensions = still_there.clone();
    no_dimensions.config = "{}".to_string();
    assert_eq!(orphaned, deriver.compute(&no_dimensions).await.unwrap());
}

#[tokio::test]
async fn test_data_value_is_unique_per_entity_variable_year() {
    let store = seeded_store().await;
    let pool = store.pool();
    entities::insert(
        pool,
        &Entity {
            id: 1,
            code: None,
            name: "World".to_string(),
            display_name: "World".to_string(),
            validated: false,
        },
    )
    .await
    .unwrap();

    let value = DataValue {
        id: 1,
        value: "71.4".to_string(),
        entity_id: Some(1),
        variable_id: 101,
        year: 2015,
    };
    entities::insert_data_value(pool, &value).await.unwrap();

    let duplicate = DataValue { id: 2, ..value };
    assert!(matches!(
        entities::insert_data_value(pool, &duplicate).await.unwrap_err(),
        Error::Constraint(_)
    ));
}

#[tokio::test]
async fn test_batch_variable_lookup_is_ordered_by_id() {
    let store = seeded_store().await;
    variables::insert(store.pool(), &variable(50, 1, Some(ts(2017, 1, 1, 0)))).await.unwrap();

    let found = store
        .get_variables_by_ids(&BTreeSet::from([102, 50, 101, 9999]))
        .await
        .unwrap();

    let ids: Vec<i64> = found.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![50, 101, 102]);
}
