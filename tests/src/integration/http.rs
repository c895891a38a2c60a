//! # HTTP Flows
//!
//! Drives the node's axum router in-process with `tower::ServiceExt::oneshot`.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use node_runtime::NodeRuntime;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::fixtures::{memory_node, Wallet};

    fn router() -> Router {
        let (container, _, _) = memory_node();
        NodeRuntime::new(container).router()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
        send(router, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(router, request).await
    }

    async fn register(router: &Router, wallet: &Wallet, story: &str) -> (StatusCode, Value) {
        let (_, view) = post(router, "/requestValidation", json!({ "address": wallet.address })).await;
        let signature = wallet.sign(view["message"].as_str().unwrap());
        let (status, _) = post(
            router,
            "/message-signature/validate",
            json!({ "address": wallet.address, "signature": signature }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        post(
            router,
            "/block",
            json!({
                "address": wallet.address,
                "star": {
                    "dec": "68° 52' 56.9",
                    "ra": "16h 29m 1.0s",
                    "magnitude": "4.2",
                    "story": story
                }
            }),
        )
        .await
    }

    #[tokio::test]
    async fn test_genesis_served_at_height_zero() {
        let router = router();

        let (status, block) = get(&router, "/block/0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(block["height"], 0);
        assert_eq!(block["previousBlockHash"], "");
        assert_eq!(block["body"], "First block in the chain - Genesis block");

        let (status, _) = get(&router, "/block/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, error) = get(&router, "/block/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"], "index value: abc is not a valid number");
    }

    #[tokio::test]
    async fn test_star_lookup_by_hash_and_address() {
        let router = router();
        let wallet = Wallet::random();

        let (status, block) = register(&router, &wallet, "Orion's belt").await;
        assert_eq!(status, StatusCode::OK);
        let hash = block["hash"].as_str().unwrap().to_string();

        let (status, found) = get(&router, &format!("/stars/hash:{}", hash)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["body"]["star"]["storyDecoded"], "Orion's belt");
        assert_eq!(found["body"]["star"]["magnitude"], "4.2");

        let (status, _) = get(&router, "/stars/hash:deadbeef").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, list) = get(&router, &format!("/stars/address:{}", wallet.address)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["hash"], hash.as_str());
    }

    #[tokio::test]
    async fn test_block_without_grant_is_unauthorized() {
        let router = router();
        let wallet = Wallet::random();

        let (status, error) = post(
            &router,
            "/block",
            json!({
                "address": wallet.address,
                "star": { "dec": "1", "ra": "2", "story": "no grant" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error["error"], "user has not been granted access to create a star");
    }

    #[tokio::test]
    async fn test_bad_signature_is_bad_request() {
        let router = router();
        let wallet = Wallet::random();
        let impostor = Wallet::random();

        let (_, view) = post(&router, "/requestValidation", json!({ "address": wallet.address })).await;
        let forged = impostor.sign(view["message"].as_str().unwrap());

        let (status, _) = post(
            &router,
            "/message-signature/validate",
            json!({ "address": wallet.address, "signature": forged }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, access) = get(&router, "/debug/access-list").await;
        assert_eq!(access, json!([]));
        let (_, pending) = get(&router, "/debug/mempool").await;
        assert_eq!(pending[0]["walletAddress"], wallet.address.as_str());
    }

    #[tokio::test]
    async fn test_chain_validate_after_registrations() {
        let router = router();
        for story in ["one", "two", "three"] {
            let (status, _) = register(&router, &Wallet::random(), story).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, report) = get(&router, "/chain/validate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["valid"], true);
        assert_eq!(report["blocksChecked"], 4);
        assert_eq!(report["failedHeights"], json!([]));
    }
}
