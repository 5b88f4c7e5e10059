//! End-to-end tests for the search flow.

use serde_json::json;

mod common;

#[tokio::test]
async fn test_search_shapes_first_result() {
    let (upstream_addr, _targets) = common::start_mock_upstream(|_: String| async {
        (
            200,
            common::envelope_with(json!([{
                "title": "T",
                "prompt": "P",
                "user": { "displayName": "U" },
                "url": "http://x"
            }])),
        )
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;

    let res = common::client()
        .get(format!("http://{proxy_addr}/search?q=foo"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let content_type = res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "title": "T", "prompt": "P", "user": "U", "imageUrl": "http://x" })
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_search_accepts_any_method() {
    let (upstream_addr, _targets) = common::start_mock_upstream(|_: String| async {
        (
            200,
            common::envelope_with(json!([{
                "title": "T",
                "user": { "displayName": "U" },
                "url": "http://x"
            }])),
        )
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;

    let res = common::client()
        .post(format!("http://{proxy_addr}/search?q=foo"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200, "POST should reach the handler, not 405");

    shutdown.trigger();
}

#[tokio::test]
async fn test_missing_or_empty_title_shapes_to_na() {
    let (upstream_addr, _targets) = common::start_mock_upstream(|target: String| async move {
        let results = if target.contains("q=empty") {
            json!([{ "title": "", "user": { "displayName": "U" }, "url": "http://x" }])
        } else {
            json!([{ "user": { "displayName": "U" }, "url": "http://x" }])
        };
        (200, common::envelope_with(results))
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;
    let client = common::client();

    for query in ["missing", "empty"] {
        let body: serde_json::Value = client
            .get(format!("http://{proxy_addr}/search?q={query}"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["title"], "N/A");
        // No prompt upstream means no prompt key downstream.
        assert!(body.as_object().unwrap().get("prompt").is_none());
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_only_first_result_is_shaped() {
    let (upstream_addr, _targets) = common::start_mock_upstream(|_: String| async {
        (
            200,
            common::envelope_with(json!([
                {
                    "title": "First",
                    "user": { "displayName": "ada" },
                    "url": "http://first"
                },
                {
                    "title": "Second",
                    "user": { "displayName": "bob" },
                    "url": "http://second"
                }
            ])),
        )
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;

    let body: serde_json::Value = common::client()
        .get(format!("http://{proxy_addr}/search?q=foo"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["title"], "First");
    assert_eq!(body["imageUrl"], "http://first");

    shutdown.trigger();
}

#[tokio::test]
async fn test_no_results_echoes_raw_query_and_encodes_outbound() {
    let (upstream_addr, targets) = common::start_mock_upstream(|_: String| async {
        (200, common::envelope_with(json!([])))
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;

    let res = common::client()
        .get(format!("http://{proxy_addr}/search?q=cyber%20punk"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "No results found for \"cyber punk\"." })
    );

    // The outbound URL re-encodes the query the provider-facing way.
    let targets = targets.lock().unwrap();
    assert_eq!(targets.as_slice(), &["/search.json?q=cyber%20punk"]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_envelope_without_data_is_no_results() {
    let (upstream_addr, _targets) = common::start_mock_upstream(|target: String| async move {
        let body = if target.contains("q=bare") {
            "{}".to_string()
        } else {
            json!({ "pageProps": {} }).to_string()
        };
        (200, body)
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;
    let client = common::client();

    for query in ["shell", "bare"] {
        let res = client
            .get(format!("http://{proxy_addr}/search?q={query}"))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 404);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(
            body["error"],
            format!("No results found for \"{query}\".")
        );
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_missing_query_makes_no_upstream_call() {
    let (upstream_addr, targets) = common::start_mock_upstream(|_: String| async {
        (200, common::envelope_with(json!([])))
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;
    let client = common::client();

    for url in [
        format!("http://{proxy_addr}/search"),
        format!("http://{proxy_addr}/search?q="),
    ] {
        let res = client.get(url).send().await.unwrap();
        assert_eq!(res.status(), 400);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Please provide a search query." }));
    }

    assert!(
        targets.lock().unwrap().is_empty(),
        "Rejected queries must not reach the upstream"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_is_plain_not_found() {
    let (upstream_addr, targets) = common::start_mock_upstream(|_: String| async {
        (200, common::envelope_with(json!([])))
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;

    let res = common::client()
        .get(format!("http://{proxy_addr}/api/other?q=foo"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    let content_type = res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(res.text().await.unwrap(), "Not Found");
    assert!(targets.lock().unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_minted_and_echoed() {
    let (upstream_addr, _targets) = common::start_mock_upstream(|_: String| async {
        (200, common::envelope_with(json!([])))
    })
    .await;

    let (proxy_addr, shutdown) =
        common::spawn_proxy(&format!("http://{upstream_addr}/search.json?q={{query}}")).await;
    let client = common::client();

    let res = client
        .get(format!("http://{proxy_addr}/search?q=foo"))
        .send()
        .await
        .unwrap();
    let minted = res.headers().get("x-request-id").unwrap();
    assert!(!minted.to_str().unwrap().is_empty());

    let res = client
        .get(format!("http://{proxy_addr}/search?q=foo"))
        .header("x-request-id", "it-flows")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers().get("x-request-id").unwrap().to_str().unwrap(),
        "it-flows"
    );

    shutdown.trigger();
}
