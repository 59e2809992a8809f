#![cfg(feature = "cli")]

use axum::{Json, Router, routing::post};
use clap::Parser;
use run_agent_client::cli::{Cli, Commands};
use serde_json::json;

#[tokio::test]
async fn run_writes_response_to_output_file() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route(
        "/run-agent",
        post(|| async { Json(json!({ "response": "merged 2 rows" })) }),
    );
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    let dir = tempfile::tempdir().unwrap();
    let params = dir.path().join("params.csv");
    let pdf = dir.path().join("report.pdf");
    let output = dir.path().join("out.json");
    std::fs::write(&params, "asset;squad\n").unwrap();
    std::fs::write(&pdf, "%PDF-1.7").unwrap();

    let server = format!("http://{addr}");
    let cli = Cli::try_parse_from([
        "run-agent",
        "run",
        "--params",
        params.to_str().unwrap(),
        "--pdf",
        pdf.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--server",
        &server,
    ])
    .unwrap();

    let Commands::Run(run) = cli.action else {
        panic!("expected run");
    };
    let status = run.run().await.unwrap();

    assert!(!status.is_failure());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "{\n  \"response\": \"merged 2 rows\"\n}\n"
    );
}

#[tokio::test]
async fn unreadable_input_file_is_an_error() {
    let cli = Cli::try_parse_from([
        "run-agent",
        "run",
        "--params",
        "/no/such/params.csv",
        "--pdf",
        "/no/such/report.pdf",
        "--server",
        "http://127.0.0.1:9",
    ])
    .unwrap();

    let Commands::Run(run) = cli.action else {
        panic!("expected run");
    };
    assert!(run.run().await.is_err());
}
