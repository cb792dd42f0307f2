use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use http_body_util::BodyExt;
use rusty_payments::{create_routes, AppState, GatewayClient};
use serde_json::Value;
use tokio::runtime::Runtime;
use tower::ServiceExt;

const BODY: &str =
    r#"{"customer_name":"John Doe","customer_email":"john.doe@example.com","amount":50.0}"#;

fn create_and_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(1));

    let app = create_routes(AppState::new(GatewayClient::new(None).unwrap()));

    group.bench_function("create_then_get_payment", |b| {
        let rt = Runtime::new().unwrap();
        b.to_async(rt).iter(|| {
            let app = app.clone();
            async move {
                let request = Request::post("/api/v1/payments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(BODY))
                    .unwrap();
                let response = app.clone().oneshot(request).await.unwrap();
                assert_eq!(response.status(), StatusCode::CREATED);
                let bytes = response.into_body().collect().await.unwrap().to_bytes();
                let created: Value = serde_json::from_slice(&bytes).unwrap();

                let uri = format!("/api/v1/payments/{}", created["payment"]["id"].as_str().unwrap());
                let request = Request::get(uri).body(Body::empty()).unwrap();
                let response = app.oneshot(request).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, create_and_get);
criterion_main!(benches);
