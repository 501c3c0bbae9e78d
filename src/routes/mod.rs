pub mod api;
pub mod cors;

use crate::{config::Config, docs::ApiDoc, store::ItemStore};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use api::create_api_routes;

/// Assemble the full application: item routes, API docs and middleware
pub fn create_app(config: &Config, store: Arc<ItemStore>) -> Router {
    Router::new()
        // Mount API routes
        .merge(create_api_routes(store))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors::cors_layer(config))
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Item};
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    struct TestServer {
        base_url: String,
        handle: tokio::task::JoinHandle<()>,
    }

    impl TestServer {
        async fn spawn(store: ItemStore) -> Self {
            let app = create_app(&Config::default(), Arc::new(store));
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

        async fn seeded() -> Self {
            Self::spawn(ItemStore::seeded().unwrap()).await
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

    async fn get_json(client: &reqwest::Client, url: String) -> (StatusCode, Value) {
        let res = client.get(url).send().await.unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    #[tokio::test]
    async fn index_defaults_to_ids_below_two() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let (status, body) = get_json(&client, server.url("/")).await;
        assert_eq!(status, StatusCode::OK);
        let items = body["items"].as_object().unwrap();
        assert_eq!(items.keys().collect::<Vec<_>>(), vec!["0", "1"]);
        assert_eq!(items["0"]["name"], "Hammer");
        assert_eq!(items["1"]["category"], "tools");
    }

    #[tokio::test]
    async fn index_limit_is_an_id_ceiling() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let (_, body) = get_json(&client, server.url("/?limit=1")).await;
        assert_eq!(body["items"].as_object().unwrap().len(), 1);

        let (_, body) = get_json(&client, server.url("/?limit=3")).await;
        assert_eq!(body["items"].as_object().unwrap().len(), 3);

        let (_, body) = get_json(&client, server.url("/?limit=0")).await;
        assert_eq!(body, json!({ "items": {} }));
    }

    #[tokio::test]
    async fn get_item_by_id() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let (status, body) = get_json(&client, server.url("/items/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": 2, "name": "Nails", "price": 1.99, "count": 100, "category": "consumables" })
        );

        let (status, body) = get_json(&client, server.url("/items/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
        assert_eq!(body["error"], "Item with item_id=99 does not exist.");

        let res = client.get(server.url("/items/abc")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_echoes_query_and_selection() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let (status, body) = get_json(&client, server.url("/items?count=20")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["query"],
            json!({ "name": null, "price": null, "count": 20, "category": null })
        );
        let names: Vec<&str> = body["selection"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Hammer", "Pliers"]);

        let (_, body) = get_json(&client, server.url("/items?name=Nails&category=consumables&price=1.99")).await;
        assert_eq!(body["selection"].as_array().unwrap().len(), 1);

        let (_, body) = get_json(&client, server.url("/items")).await;
        assert_eq!(body["selection"].as_array().unwrap().len(), 3);

        let (status, body) = get_json(&client, server.url("/items?name=Drill&price=0.5&count=0&category=tools")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selection"], json!([]));

        let res = client.get(server.url("/items?category=toys")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn add_item_then_fetch_it() {
        let server = TestServer::spawn(ItemStore::new()).await;
        let client = reqwest::Client::new();
        let payload = json!({ "id": 5, "name": "Screwdriver", "price": 3.99, "count": 10, "category": "tools" });

        let res = client.post(server.url("/")).json(&payload).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "added": payload }));

        let (status, body) = get_json(&client, server.url("/items/5")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn add_rejects_taken_id_and_invalid_fields() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let taken = json!({ "id": 0, "name": "Screwdriver", "price": 3.99, "count": 10, "category": "tools" });
        let res = client.post(server.url("/")).json(&taken).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "Item with item_id=0 already exists.");

        let (_, hammer) = get_json(&client, server.url("/items/0")).await;
        assert_eq!(hammer["name"], "Hammer");

        for invalid in [
            json!({ "id": 7, "name": "Ham!mer", "price": 1.0, "count": 1, "category": "tools" }),
            json!({ "id": 7, "name": "Saw", "price": -1.0, "count": 1, "category": "tools" }),
            json!({ "id": 7, "name": "Saw", "price": 1.0, "count": -1, "category": "tools" }),
        ] {
            let res = client.post(server.url("/")).json(&invalid).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{invalid} accepted");
        }

        let (status, _) = get_json(&client, server.url("/items/7")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let res = client.put(server.url("/items/0?count=9001")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["updated"]["count"], 9001);

        let (_, hammer) = get_json(&client, server.url("/items/0")).await;
        assert_eq!(
            hammer,
            json!({ "id": 0, "name": "Hammer", "price": 9.99, "count": 9001, "category": "tools" })
        );
    }

    #[tokio::test]
    async fn update_failures() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let res = client.put(server.url("/items/0")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "No parameters provided for update.");

        let res = client.put(server.url("/items/42?count=1")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        for query in ["name=Sledgehammer", "price=0", "count=-1"] {
            let res = client.put(server.url(&format!("/items/1?{query}"))).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{query} accepted");
        }

        let res = client.put(server.url("/items/-1?count=1")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let (_, pliers) = get_json(&client, server.url("/items/1")).await;
        assert_eq!(pliers["name"], "Pliers");
        assert_eq!(pliers["count"], 20);
    }

    #[tokio::test]
    async fn update_rejects_infinite_price() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        for query in ["price=inf", "price=-inf", "price=NaN"] {
            let res = client.put(server.url(&format!("/items/0?{query}"))).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{query} accepted");
        }

        let (_, hammer) = get_json(&client, server.url("/items/0")).await;
        assert_eq!(hammer["price"], 9.99);
    }

    #[tokio::test]
    async fn update_bounds_are_checked_before_lookup() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let res = client.put(server.url("/items/99?price=0")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = client.put(server.url("/items/99?name=Sledgehammer")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = client.put(server.url("/items/99?price=2.5")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let res = client.delete(server.url("/items/1")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["deleted"]["name"], "Pliers");

        let res = client.delete(server.url("/items/1")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let (_, body) = get_json(&client, server.url("/")).await;
        assert_eq!(body["items"].as_object().unwrap().keys().collect::<Vec<_>>(), vec!["0"]);
    }

    #[tokio::test]
    async fn failed_request_does_not_disturb_later_ones() {
        let store = ItemStore::with_items([Item::new(0, "Hammer", 9.99, 20, Category::Tools).unwrap()]);
        let server = TestServer::spawn(store).await;
        let client = reqwest::Client::new();

        let res = client.delete(server.url("/items/3")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let (status, body) = get_json(&client, server.url("/?limit=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"]["0"]["name"], "Hammer");
    }

    #[tokio::test]
    async fn health_ready_and_openapi() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let (status, body) = get_json(&client, server.url("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = get_json(&client, server.url("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], false);

        let (status, body) = get_json(&client, server.url("/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/items/{item_id}"].is_object());
        assert!(body["components"]["schemas"]["Item"].is_object());
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let server = TestServer::seeded().await;
        let client = reqwest::Client::new();

        let res = client
            .get(server.url("/"))
            .header("Origin", "http://example.test")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get("access-control-allow-origin").unwrap(),
            "http://example.test"
        );
    }
}
