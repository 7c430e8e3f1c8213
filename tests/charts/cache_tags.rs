//! Cache tag derivation against a real store

use std::sync::Arc;

use grapher_admin::build_id::BuildId;
use grapher_admin::charts::CacheTagDeriver;
use grapher_admin::store::repository::{charts, variables};
use grapher_admin::store::{EntityStore, SqliteStore};
use grapher_admin::Error;

use crate::common::{chart, seeded_store, ts, variable};

fn deriver(store: &SqliteStore, build: &str) -> CacheTagDeriver {
    CacheTagDeriver::new(Arc::new(store.clone()), BuildId::new(build))
}

fn is_md5_hex(tag: &str) -> bool {
    tag.len() == 32 && tag.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[tokio::test]
async fn test_tag_is_32_lowercase_hex_chars() {
    let store = seeded_store().await;
    let chart = store.get_published_chart(42).await.unwrap().unwrap();

    let tag = deriver(&store, "abc123").compute(&chart).await.unwrap();

    assert!(is_md5_hex(tag.as_str()), "unexpected tag {}", tag);
}

#[tokio::test]
async fn test_tag_is_deterministic() {
    let store = seeded_store().await;
    let chart = store.get_published_chart(42).await.unwrap().unwrap();
    let deriver = deriver(&store, "abc123");

    let first = deriver.compute(&chart).await.unwrap();
    let second = deriver.compute(&chart).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_variable_update_changes_tag() {
    let store = seeded_store().await;
    let chart = store.get_published_chart(42).await.unwrap().unwrap();
    let deriver = deriver(&store, "abc123");

    let before = deriver.compute(&chart).await.unwrap();
    variables::set_updated_at(store.pool(), 102, ts(2018, 1, 1, 0)).await.unwrap();
    let after = deriver.compute(&chart).await.unwrap();

    assert_ne!(before, after);
}

#[tokio::test]
async fn test_unreferenced_variable_update_keeps_tag() {
    let store = seeded_store().await;
    variables::insert(store.pool(), &variable(103, 1, Some(ts(2017, 6, 1, 0)))).await.unwrap();
    let chart = store.get_published_chart(42).await.unwrap().unwrap();
    let deriver = deriver(&store, "abc123");

    let before = deriver.compute(&chart).await.unwrap();
    variables::set_updated_at(store.pool(), 103, ts(2018, 1, 1, 0)).await.unwrap();
    let after = deriver.compute(&chart).await.unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_chart_save_changes_tag() {
    let store = seeded_store().await;
    let deriver = deriver(&store, "abc123");
    let before_chart = store.get_published_chart(42).await.unwrap().unwrap();
    let before = deriver.compute(&before_chart).await.unwrap();

    charts::update_config(store.pool(), 42, &before_chart.config, ts(2018, 2, 1, 0))
        .await
        .unwrap();
    let after_chart = store.get_published_chart(42).await.unwrap().unwrap();
    let after = deriver.compute(&after_chart).await.unwrap();

    assert_ne!(before, after);
}

#[tokio::test]
async fn test_build_id_changes_tag() {
    let store = seeded_store().await;
    let chart = store.get_published_chart(42).await.unwrap().unwrap();

    let old_build = deriver(&store, "abc123").compute(&chart).await.unwrap();
    let new_build = deriver(&store, "def456").compute(&chart).await.unwrap();

    assert_ne!(old_build, new_build);
}

#[tokio::test]
async fn test_dimension_order_does_not_matter() {
    let store = seeded_store().await;
    let deriver = deriver(&store, "abc123");
    let forward = chart(60, None, true, r#"{"chart-dimensions": [{"variableId": 101}, {"variableId": 102}]}"#);
    let mut backward = forward.clone();
    backward.config = r#"{"chart-dimensions": [{"variableId": 102}, {"variableId": 101}]}"#.to_string();

    let forward_tag = deriver.compute(&forward).await.unwrap();
    let backward_tag = deriver.compute(&backward).await.unwrap();

    assert_eq!(forward_tag, backward_tag);
}

#[tokio::test]
async fn test_dangling_variable_ids_contribute_nothing() {
    let store = seeded_store().await;
    let deriver = deriver(&store, "abc123");
    let with_dangling = chart(61, None, true, r#"{"chart-dimensions": [{"variableId": 101}, {"variableId": 5000}]}"#);
    let mut without = with_dangling.clone();
    without.config = r#"{"chart-dimensions": [{"variableId": 101}]}"#.to_string();

    let a = deriver.compute(&with_dangling).await.unwrap();
    let b = deriver.compute(&without).await.unwrap();

    assert_eq!(a, b);
}

#[tokio::test]
async fn test_charts_without_variables_still_get_a_tag() {
    let store = seeded_store().await;
    let deriver = deriver(&store, "abc123");
    let no_dimensions = chart(62, None, true, r#"{"title": "Empty"}"#);
    let no_variable_ids = chart(62, None, true, r#"{"chart-dimensions": [{"property": "x"}]}"#);

    let a = deriver.compute(&no_dimensions).await.unwrap();
    let b = deriver.compute(&no_variable_ids).await.unwrap();

    assert!(is_md5_hex(a.as_str()));
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_known_digest() {
    let store = seeded_store().await;
    let deriver = deriver(&store, "abc123");
    let chart = chart(63, None, true, "{}");

    let tag = deriver.compute(&chart).await.unwrap();

    let expected = format!("{:x}", md5_of("2017-05-01T12:00:00.000000Z + abc123"));
    assert_eq!(tag.as_str(), expected);
}

fn md5_of(input: &str) -> md5::Digest {
    let mut context = md5::Context::new();
    context.consume(input.as_bytes());
    context.finalize()
}

#[tokio::test]
async fn test_malformed_config_fails() {
    let store = seeded_store().await;
    let chart = chart(64, None, true, "not json at all");

    let err = deriver(&store, "abc123").compute(&chart).await.unwrap_err();

    assert!(matches!(err, Error::MalformedConfig { chart_id: 64, .. }));
}

#[tokio::test]
async fn test_store_outage_surfaces_as_store_unavailable() {
    let store = seeded_store().await;
    let chart = store.get_published_chart(42).await.unwrap().unwrap();
    let deriver = deriver(&store, "abc123");
    store.pool().close().await;

    let err = deriver.compute(&chart).await.unwrap_err();

    assert!(matches!(err, Error::StoreUnavailable(_)));
}
