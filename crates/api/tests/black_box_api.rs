use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use tokio::sync::Notify;

use storefront_api::app::{build_app, AppServices};
use storefront_catalog::{
    BrandWithProductCount, Category, CategoryWithCount, Product, ProductSearchHit, RowShape,
};
use storefront_core::{CategoryId, ProductId, Slug};
use storefront_infra::read_model::{
    demo_catalog, CatalogReadStore, CatalogStoreError, InMemoryCatalogStore,
};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(services: AppServices) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn demo() -> Self {
        Self::spawn(AppServices::in_memory_demo().expect("demo catalog")).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A backend whose every query fails.
struct BrokenStore;

fn broken() -> CatalogStoreError {
    CatalogStoreError::Unavailable("database is down".to_string())
}

#[async_trait]
impl CatalogReadStore for BrokenStore {
    async fn get_brands_by_category(
        &self,
        _category_slug: &str,
    ) -> Result<Vec<BrandWithProductCount>, CatalogStoreError> {
        Err(broken())
    }

    async fn get_categories_with_count(&self) -> Result<Vec<CategoryWithCount>, CatalogStoreError> {
        Err(broken())
    }

    async fn find_category(&self, _slug: &str) -> Result<Option<Category>, CatalogStoreError> {
        Err(broken())
    }

    async fn find_product(&self, _slug: &str) -> Result<Option<Product>, CatalogStoreError> {
        Err(broken())
    }

    async fn search_products(
        &self,
        _term: &str,
        _limit: u32,
    ) -> Result<Vec<ProductSearchHit>, CatalogStoreError> {
        Err(broken())
    }
}

/// A backend whose search blocks until the test releases it.
struct GatedSearchStore {
    gate: Arc<Notify>,
}

#[async_trait]
impl CatalogReadStore for GatedSearchStore {
    async fn get_brands_by_category(
        &self,
        _category_slug: &str,
    ) -> Result<Vec<BrandWithProductCount>, CatalogStoreError> {
        Ok(Vec::new())
    }

    async fn get_categories_with_count(&self) -> Result<Vec<CategoryWithCount>, CatalogStoreError> {
        Ok(Vec::new())
    }

    async fn find_category(&self, _slug: &str) -> Result<Option<Category>, CatalogStoreError> {
        Ok(None)
    }

    async fn find_product(&self, _slug: &str) -> Result<Option<Product>, CatalogStoreError> {
        Ok(None)
    }

    async fn search_products(
        &self,
        _term: &str,
        _limit: u32,
    ) -> Result<Vec<ProductSearchHit>, CatalogStoreError> {
        self.gate.notified().await;
        Ok(vec![ProductSearchHit {
            id: ProductId::new(),
            slug: Slug::from_stored("zenbook-14"),
            name: "Zenbook 14 OLED".to_string(),
            brand_name: Some("ASUS".to_string()),
            category_slug: Slug::from_stored("ultrabooks"),
        }])
    }
}

fn sorted_keys(row: &Value) -> Vec<String> {
    let mut keys: Vec<String> = row.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

fn sorted_columns<R: RowShape>() -> Vec<String> {
    let mut cols: Vec<String> = R::COLUMNS.iter().map(|c| c.to_string()).collect();
    cols.sort();
    cols
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::demo().await;
    let res = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn laptop_page_renders_slug_and_product() {
    let server = TestServer::demo().await;

    let res = reqwest::get(server.url("/laptops/thinkpad-x1")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let body = res.text().await.unwrap();
    assert!(body.contains("thinkpad-x1"));
    assert!(body.contains("ThinkPad X1 Carbon Gen 11"));
}

#[tokio::test]
async fn unknown_laptop_slug_still_renders() {
    let server = TestServer::demo().await;

    let res = reqwest::get(server.url("/laptops/Not_A-Real_Slug")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Not_A-Real_Slug"));
    assert!(!body.contains("product-name"));
}

#[tokio::test]
async fn category_page_lists_brands() {
    let server = TestServer::demo().await;

    let res = reqwest::get(server.url("/categorias/ultrabooks")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("ultrabooks"));
    assert!(body.contains("data-brand=\"lenovo\""));
    assert!(body.contains("Lenovo <span class=\"count\">(2)</span>"));
}

#[tokio::test]
async fn empty_category_page_has_no_brand_rows() {
    let server = TestServer::demo().await;

    let body = reqwest::get(server.url("/categorias/accesorios"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("accesorios"));
    assert!(!body.contains("data-brand"));
}

#[tokio::test]
async fn stored_slugs_outside_the_authoring_grammar_still_render() {
    let mut catalog = demo_catalog().expect("demo catalog");
    let legacy = Category {
        id: CategoryId::new(),
        slug: Slug::from_stored("Gaming_Laptops"),
        name: "Gaming laptops".to_string(),
    };
    let asus = catalog
        .brands
        .iter()
        .find(|b| b.slug.as_str() == "asus")
        .unwrap()
        .id;
    catalog.products.push(Product {
        id: ProductId::new(),
        slug: Slug::from_stored("TUF_A15"),
        name: "TUF A15".to_string(),
        category_id: legacy.id,
        brand_id: Some(asus),
        price_cents: None,
    });
    catalog.categories.push(legacy);
    let store = InMemoryCatalogStore::new(catalog);
    let server = TestServer::spawn(AppServices::new(Arc::new(store))).await;

    let res = reqwest::get(server.url("/categorias/Gaming_Laptops")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Gaming_Laptops"));
    assert!(body.contains("data-brand=\"asus\""));

    let res = reqwest::get(server.url("/laptops/TUF_A15")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("TUF A15"));

    let body: Value = reqwest::get(server.url("/api/categories"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows: Vec<CategoryWithCount> = serde_json::from_value(body["items"].clone()).unwrap();
    assert!(rows
        .iter()
        .any(|r| r.slug.as_str() == "Gaming_Laptops" && r.product_count == 1));
}

#[tokio::test]
async fn categories_api_rows_have_the_canonical_shape() {
    let server = TestServer::demo().await;

    let res = reqwest::get(server.url("/api/categories")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();

    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["slug"], "ultrabooks");
    assert_eq!(items[0]["product_count"], 5);
    assert!(items.iter().all(|r| r["slug"] != "accesorios"));
    for row in items {
        assert_eq!(sorted_keys(row), sorted_columns::<CategoryWithCount>());
    }

    // Rows decode back into the shared struct.
    let rows: Vec<CategoryWithCount> = serde_json::from_value(body["items"].clone()).unwrap();
    assert_eq!(rows.iter().map(|r| r.product_count).sum::<u64>(), 15);
}

#[tokio::test]
async fn brands_api_rows_have_the_canonical_shape() {
    let server = TestServer::demo().await;

    let body: Value = reqwest::get(server.url("/api/categories/gaming/brands"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let items = body["items"].as_array().unwrap();

    let names: Vec<&str> = items.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["ASUS", "Acer", "Lenovo"]);
    for row in items {
        assert_eq!(sorted_keys(row), sorted_columns::<BrandWithProductCount>());
    }

    let unknown: Value = reqwest::get(server.url("/api/categories/no-existe/brands"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(unknown["items"], serde_json::json!([]));
}

#[tokio::test]
async fn repeated_queries_are_identical() {
    let server = TestServer::demo().await;
    let client = reqwest::Client::new();

    for path in ["/api/categories", "/api/categories/ultrabooks/brands"] {
        let first = client.get(server.url(path)).send().await.unwrap().text().await.unwrap();
        let second = client.get(server.url(path)).send().await.unwrap().text().await.unwrap();
        assert_eq!(first, second, "{path}");
    }
}

#[tokio::test]
async fn search_streams_loading_state_before_results() {
    let server = TestServer::demo().await;

    let res = reqwest::get(server.url("/search?q=thinkpad")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();

    let loading = body.find("search-loading").expect("loading fragment");
    let results = body.find("search-results").expect("results fragment");
    assert!(loading < results);
    assert!(body.contains("href=\"/laptops/thinkpad-x1\""));
    assert!(body.contains("href=\"/laptops/thinkpad-t14-reacondicionado\""));
    assert!(body.trim_end().ends_with("</html>"));
}

#[tokio::test]
async fn search_sends_loading_state_while_the_loader_is_pending() {
    let gate = Arc::new(Notify::new());
    let store = GatedSearchStore { gate: gate.clone() };
    let server = TestServer::spawn(AppServices::new(Arc::new(store))).await;

    let mut res = reqwest::get(server.url("/search?q=zen")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // The loader is still blocked, so only the loading state can have arrived.
    let first = res.chunk().await.unwrap().expect("first chunk");
    let first = String::from_utf8_lossy(&first).into_owned();
    assert!(first.contains("search-loading"));
    assert!(!first.contains("search-results"));

    gate.notify_one();

    let mut rest = String::new();
    while let Some(chunk) = res.chunk().await.unwrap() {
        rest.push_str(&String::from_utf8_lossy(&chunk));
    }
    assert!(rest.contains("search-results"));
    assert!(rest.contains("href=\"/laptops/zenbook-14\""));
    assert!(rest.trim_end().ends_with("</html>"));
}

#[tokio::test]
async fn blank_search_has_no_results() {
    let server = TestServer::demo().await;

    let body = reqwest::get(server.url("/search?q=%20%20"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Sin resultados."));

    let json: Value = reqwest::get(server.url("/api/search"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["items"], serde_json::json!([]));
}

#[tokio::test]
async fn search_api_honours_limit_and_shape() {
    let server = TestServer::demo().await;

    let body: Value = reqwest::get(server.url("/api/search?q=a&limit=2"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    for row in items {
        assert_eq!(sorted_keys(row), sorted_columns::<ProductSearchHit>());
    }
}

#[tokio::test]
async fn legal_pages_render_and_serve_json() {
    let server = TestServer::demo().await;

    let res = reqwest::get(server.url("/legal/terms-and-conditions")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Términos y condiciones"));
    assert!(body.contains("data-page=\"termsAndConditions\""));

    let json: Value = reqwest::get(server.url("/api/legal/privacyPolicy"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["lastUpdated"], "2025-01-15");
    assert!(!json["sections"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_legal_page_is_not_found() {
    let server = TestServer::demo().await;

    for path in ["/legal/cookies", "/api/legal/cookies"] {
        let res = reqwest::get(server.url(path)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "not_found");
    }
}

#[tokio::test]
async fn store_failures_surface_as_store_errors() {
    let server = TestServer::spawn(AppServices::new(Arc::new(BrokenStore))).await;

    for path in [
        "/api/categories",
        "/api/categories/gaming/brands",
        "/laptops/thinkpad-x1",
        "/categorias/gaming",
    ] {
        let res = reqwest::get(server.url(path)).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "store_error");
        assert!(body["message"].as_str().unwrap().contains("database is down"));
    }

    // Streaming already started, so the failure is rendered in place.
    let res = reqwest::get(server.url("/search?q=zen")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("search-loading"));
    assert!(body.contains("No se pudo completar la búsqueda."));
}
