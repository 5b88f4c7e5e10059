use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;

#[derive(Deserialize)]
struct Params {
    q: Option<String>,
}

async fn search(Query(params): Query<Params>) -> Json<Value> {
    let query = params.q.unwrap_or_default();

    // "nothing" simulates a query the provider has no results for.
    let data = if query == "nothing" {
        json!([])
    } else {
        json!([
            {
                "title": format!("{query} at dusk"),
                "prompt": format!("a cinematic shot of {query} at dusk, 35mm"),
                "user": { "displayName": "demo-artist" },
                "url": format!("https://images.example/{query}.png")
            },
            {
                "title": "Second result, never shaped",
                "user": { "displayName": "someone-else" },
                "url": "https://images.example/second.png"
            }
        ])
    };

    Json(json!({ "pageProps": { "data": data } }))
}

#[tokio::main]
async fn main() {
    let app = Router::new().route("/search.json", get(search));

    let addr = SocketAddr::from(([127, 0, 0, 1], 9801));
    println!("Mock search provider listening on http://{}", addr);
    println!();
    println!("Point the proxy at it with:");
    println!(
        "  SEARCH_PROXY_UPSTREAM_URL='http://{}/search.json?q={{query}}' cargo run",
        addr
    );
    println!();
    println!("Then try:");
    println!("  curl 'http://127.0.0.1:8080/search?q=lighthouse'");
    println!("  curl 'http://127.0.0.1:8080/search?q=nothing'");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
