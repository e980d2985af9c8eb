// system-tests/tests/suites/orders.rs
// ============================================================================
// Module: Order Contract Tests
// Description: Order creation and listing contract scenarios.
// Purpose: Assert track issuance across color variants and list shape.
// Dependencies: system-tests helpers, scooter-client
// ============================================================================

//! Contract scenarios for the order endpoints. The color matrix is a
//! data-driven table run through one assertion body; orders are never
//! cleaned up because the service exposes no delete endpoint for them.

use std::time::Duration;

use helpers::artifacts::TestReporter;
use helpers::service::acquire_service;
use scooter_client::Color;
use scooter_client::StatusCode;
use scooter_client::expect;
use scooter_client::sample_order;
use serde_json::json;

use crate::helpers;

/// Default per-request timeout for order scenarios.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Color variants the creation endpoint must accept: none, each single
/// color, and both colors together.
fn color_variants() -> [Vec<Color>; 4] {
    [
        Vec::new(),
        vec![Color::Black],
        vec![Color::Grey],
        vec![Color::Black, Color::Grey],
    ]
}

#[tokio::test(flavor = "multi_thread")]
async fn order_creation_accepts_every_color_variant() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("order_creation_accepts_every_color_variant")?;
    let service = acquire_service()?;
    let client = service.client(REQUEST_TIMEOUT)?;

    for colors in color_variants() {
        let label = json!(&colors).to_string();
        let response = client.create_order(&sample_order(colors)).await?;
        expect(&response)
            .status(StatusCode::CREATED)
            .and_then(|chain| chain.field_present("track"))
            .map_err(|err| format!("color variant {label}: {err}"))?;
    }

    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    reporter.finish("pass", Vec::new(), vec!["transcript.json".to_string()])?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn order_list_always_carries_an_orders_field() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("order_list_always_carries_an_orders_field")?;
    let service = acquire_service()?;
    let client = service.client(REQUEST_TIMEOUT)?;

    let listed = client.get_orders().await?;
    expect(&listed).status(StatusCode::OK)?.field_present("orders")?;
    if listed.body().is_null() {
        return Err("order list body must not be empty".into());
    }

    reporter.finish("pass", Vec::new(), Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn created_orders_appear_in_the_listing() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("created_orders_appear_in_the_listing")?;
    let service = acquire_service()?;
    let client = service.client(REQUEST_TIMEOUT)?;

    let created = client.create_order(&sample_order(vec![Color::Black])).await?;
    expect(&created).status(StatusCode::CREATED)?.field_present("track")?;

    let listed = client.get_orders().await?;
    expect(&listed).status(StatusCode::OK)?.field_present("orders")?;
    let orders =
        listed.path("orders").and_then(|value| value.as_array()).ok_or("orders is not an array")?;
    if orders.is_empty() {
        return Err("order list is empty after a successful creation".into());
    }

    reporter.artifacts().write_json("transcript.json", &client.transcript())?;
    reporter.finish("pass", Vec::new(), vec!["transcript.json".to_string()])?;
    Ok(())
}
