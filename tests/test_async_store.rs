//! AsyncProductStore tests: blocking-pool dispatch and the repository impl.

mod common;

use std::sync::Arc;

use product_store::models::Product;
use product_store::{id, AsyncProductStore, ProductRepository};

#[tokio::test]
async fn builder_opens_empty_in_memory_store() {
    let store = AsyncProductStore::builder().in_memory().build().await.unwrap();
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn wraps_existing_store() {
    let store = AsyncProductStore::new(common::setup_sample_store());

    let names = store
        .run(|s| {
            let mut products = s.products().list_all()?;
            products.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(products.into_iter().map(|p| p.name).collect::<Vec<_>>())
        })
        .await
        .unwrap();
    assert_eq!(names, vec!["Widget", "Gadget", "Gizmo"]);
}

#[tokio::test]
async fn repository_round_trip() {
    let store = AsyncProductStore::builder().in_memory().build().await.unwrap();
    let repo: Arc<dyn ProductRepository> = Arc::new(store.clone());

    let product = Product {
        name: "Widget".into(),
        price: 9.99,
        code: "W1".into(),
        category: "tools".into(),
        ..Default::default()
    }
    .with_id(id::generate());

    let created = repo.insert(product.clone()).await.unwrap();
    assert_eq!(created, product);
    assert_eq!(repo.get_by_id(&product.id).await.unwrap(), product);
    assert_eq!(repo.list_all().await.unwrap(), vec![product.clone()]);

    let replaced = repo
        .replace(Product { name: "Widget Pro".into(), ..product.clone() })
        .await
        .unwrap();
    assert_eq!(repo.get_by_id(&product.id).await.unwrap(), replaced);

    repo.delete_by_id(&product.id).await.unwrap();
    assert!(repo.get_by_id(&product.id).await.unwrap_err().is_not_found());
    repo.delete_by_id(&product.id).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn clones_share_one_database() {
    let store = AsyncProductStore::builder().in_memory().build().await.unwrap();
    let other = store.clone();

    store
        .insert(Product::default().with_id("shared"))
        .await
        .unwrap();
    assert_eq!(other.get_by_id("shared").await.unwrap().id, "shared");
}

#[tokio::test]
async fn concurrent_inserts_all_land() {
    let store = AsyncProductStore::builder().in_memory().build().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .insert(Product { name: format!("item {i}"), ..Default::default() }.with_id(id::generate()))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.count().await.unwrap(), 16);
}

#[tokio::test]
async fn raw_sql_runs_on_blocking_pool() {
    let store = AsyncProductStore::new(common::setup_sample_store());

    let rows = store
        .sql("SELECT COUNT(*) AS n FROM products WHERE category = ?", &["tools".to_string()])
        .await
        .unwrap();
    assert_eq!(rows[0]["n"].as_i64().unwrap(), 1);
}
