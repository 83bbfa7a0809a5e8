//! End-to-end ingestion-pipeline tests against local HTTP stand-ins for the
//! inference and processing services.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use signalsim::lookup::CoinLookupTable;
use signalsim::pipeline::IngestionPipeline;
use signalsim::platform::demo_rows;
use signalsim::shell::{NotificationKind, ShellState};
use signalsim::Error;

const ZIG_RESULT: &str =
    "{\"tokenSymbol\":\"ZIG\",\"signal\":\"Buy\",\"tp1\":0.1,\"tp2\":0.15,\"sl\":0.0708}";

async fn serve(router: Router) -> SocketAddr {
    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
        .serve(router.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

fn pipeline(infer: SocketAddr, process: SocketAddr) -> IngestionPipeline {
    IngestionPipeline::new(
        &format!("http://{}/infer", infer),
        &format!("http://{}/api/process-telegram-signals", process),
        CoinLookupTable::bundled().clone(),
    )
    .expect("valid endpoint urls")
}

fn infer_router_with(result: &'static str) -> Router {
    Router::new().route(
        "/infer",
        post(move |Json(body): Json<Value>| async move {
            assert!(body["message"].is_string(), "message field missing");
            Json(json!({ "result": result }))
        }),
    )
}

#[tokio::test]
async fn happy_path_returns_the_processed_display_row() {
    let process = Router::new().route(
        "/api/process-telegram-signals",
        post(|Json(body): Json<Value>| async move {
            // The pipeline must send the fully resolved canonical signal.
            assert_eq!(body["signal_data"]["tokenSymbol"], "ZIG");
            assert_eq!(body["signal_data"]["tokenId"], "zignaly");
            assert_eq!(body["signal_data"]["sl"], 0.0708);
            Json(json!({
                "data": {
                    "signal": "Buy",
                    "tokenSymbol": "ZIG",
                    "tokenId": "zignaly",
                    "currentPrice": 0.08332613939091653,
                    "tp1": 0.1,
                    "tp2": 0.15,
                    "sl": 0.0708,
                    "exit_price": "N/A",
                    "p_and_l": "N/A"
                }
            }))
        }),
    );

    let infer_addr = serve(infer_router_with(ZIG_RESULT)).await;
    let process_addr = serve(process).await;

    let rows = pipeline(infer_addr, process_addr)
        .submit("ZIG looking strong, buy. TP 0.1 / 0.15, SL 0.0708")
        .await
        .expect("pipeline succeeds");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].token_symbol.as_deref(), Some("ZIG"));
    assert_eq!(rows[0].token_id.as_deref(), Some("zignaly"));
    assert_eq!(rows[0].exit_price, Some(Value::from("N/A")));
}

#[tokio::test]
async fn inference_error_status_short_circuits_processing() {
    let infer = Router::new().route(
        "/infer",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_handler = hits.clone();
    let process = Router::new().route(
        "/api/process-telegram-signals",
        post(move || {
            let hits = hits_handler.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "data": {} }))
            }
        }),
    );

    let infer_addr = serve(infer).await;
    let process_addr = serve(process).await;

    let err = pipeline(infer_addr, process_addr)
        .submit("anything")
        .await
        .unwrap_err();

    assert_matches!(err, Error::InferenceUnreachable(_));
    assert_eq!(hits.load(Ordering::SeqCst), 0, "processing must not be called");
}

#[tokio::test]
async fn unreachable_inference_endpoint_maps_to_inference_unreachable() {
    // Nothing listens on the processing side either; the call never gets there.
    let pipeline = IngestionPipeline::new(
        "http://127.0.0.1:9/infer",
        "http://127.0.0.1:9/api/process-telegram-signals",
        CoinLookupTable::bundled().clone(),
    )
    .unwrap();

    let err = pipeline.submit("anything").await.unwrap_err();
    assert_matches!(err, Error::InferenceUnreachable(_));
}

#[tokio::test]
async fn non_json_inference_body_is_a_malformed_envelope() {
    let infer = Router::new().route("/infer", post(|| async { "oops, not json" }));
    let process = Router::new().route(
        "/api/process-telegram-signals",
        post(|| async { Json(json!({ "data": {} })) }),
    );

    let infer_addr = serve(infer).await;
    let process_addr = serve(process).await;

    let err = pipeline(infer_addr, process_addr)
        .submit("anything")
        .await
        .unwrap_err();

    assert_matches!(err, Error::MalformedEnvelope(_));
}

#[tokio::test]
async fn incomplete_signal_propagates_unchanged() {
    let infer = infer_router_with("{\"tokenSymbol\":\"BTC\"}");
    let process = Router::new().route(
        "/api/process-telegram-signals",
        post(|| async { Json(json!({ "data": {} })) }),
    );

    let infer_addr = serve(infer).await;
    let process_addr = serve(process).await;

    let err = pipeline(infer_addr, process_addr)
        .submit("BTC to the moon")
        .await
        .unwrap_err();

    assert_matches!(err, Error::IncompleteSignal(_));
}

#[tokio::test]
async fn processing_error_status_maps_to_processing_failed() {
    let process = Router::new().route(
        "/api/process-telegram-signals",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    let infer_addr = serve(infer_router_with(ZIG_RESULT)).await;
    let process_addr = serve(process).await;

    let err = pipeline(infer_addr, process_addr)
        .submit("ZIG buy signal")
        .await
        .unwrap_err();

    assert_matches!(err, Error::ProcessingFailed(_));
}

#[tokio::test]
async fn failed_submission_leaves_shell_rows_unchanged() {
    let process = Router::new().route(
        "/api/process-telegram-signals",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    let infer_addr = serve(infer_router_with(ZIG_RESULT)).await;
    let process_addr = serve(process).await;
    let pipeline = pipeline(infer_addr, process_addr);

    let mut shell = ShellState::new();
    shell.on_simulate_success(demo_rows());
    shell.set_telegram_message("ZIG buy signal");

    shell.simulate(&pipeline).await;

    // Prior result set survives; only the generic notification is raised.
    assert_eq!(shell.rows().len(), 3);
    assert!(shell.table_visible());
    let note = shell.take_notification().expect("failure notification");
    assert_eq!(note.kind, NotificationKind::Error);
}
