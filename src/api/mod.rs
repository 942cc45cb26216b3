use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    AmortizationResult, BatchSummary, ConfigError, NonAmortizingReason, PeriodTrace,
    SamplingRanges, SimulatedLoan, SimulationConfig, ValueRange, amortization_trace,
    run_simulation,
};

const DEFAULT_MAX_PERIODS: u32 = 30;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    payment_min: Option<f64>,
    payment_max: Option<f64>,
    rate_min: Option<f64>,
    rate_max: Option<f64>,
    down_payment_min: Option<f64>,
    down_payment_max: Option<f64>,
    house_price_min: Option<f64>,
    house_price_max: Option<f64>,

    scenarios: Option<u32>,
    seed: Option<u64>,
    period_cap: Option<u32>,

    max_periods: Option<u32>,
    trace_index: Option<usize>,
}

#[derive(Parser, Debug)]
#[command(
    name = "payoff",
    about = "Monte Carlo loan payoff simulator (sampled payment, rate, down payment and house price)"
)]
struct Cli {
    #[arg(long, default_value_t = 1_000.0, help = "Lowest sampled monthly payment")]
    payment_min: f64,
    #[arg(long, default_value_t = 5_000.0, help = "Highest sampled monthly payment")]
    payment_max: f64,
    #[arg(long, default_value_t = 1.0, help = "Lowest sampled annual rate in percent")]
    rate_min: f64,
    #[arg(long, default_value_t = 10.0, help = "Highest sampled annual rate in percent")]
    rate_max: f64,
    #[arg(long, default_value_t = 10_000.0)]
    down_payment_min: f64,
    #[arg(long, default_value_t = 100_000.0)]
    down_payment_max: f64,
    #[arg(long, default_value_t = 200_000.0)]
    house_price_min: f64,
    #[arg(long, default_value_t = 1_000_000.0)]
    house_price_max: f64,
    #[arg(long, default_value_t = 1_000)]
    scenarios: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(
        long,
        default_value_t = 1_000,
        help = "Periods after which an unpaid loan is reported as non-amortizing"
    )]
    period_cap: u32,
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_PERIODS,
        help = "Keep scenarios paying off within this many periods"
    )]
    max_periods: u32,
    #[arg(long, help = "Include the period-by-period schedule for this scenario")]
    trace_index: Option<usize>,
}

#[derive(Copy, Clone, Debug)]
struct ApiOptions {
    max_periods: u32,
    trace_index: Option<usize>,
}

#[derive(Debug)]
struct ApiRequest {
    config: SimulationConfig,
    options: ApiOptions,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ScenarioStatus {
    PaidOff,
    PaymentBelowInterest,
    PeriodCapExceeded,
}

impl From<AmortizationResult> for ScenarioStatus {
    fn from(value: AmortizationResult) -> Self {
        match value {
            AmortizationResult::Finite(_) => ScenarioStatus::PaidOff,
            AmortizationResult::NonAmortizing(NonAmortizingReason::PaymentBelowInterest) => {
                ScenarioStatus::PaymentBelowInterest
            }
            AmortizationResult::NonAmortizing(NonAmortizingReason::PeriodCapExceeded) => {
                ScenarioStatus::PeriodCapExceeded
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioRecord {
    index: usize,
    monthly_payment: f64,
    annual_interest_rate_percent: f64,
    down_payment: f64,
    house_price: f64,
    principal: f64,
    periods_to_payoff: Option<u32>,
    status: ScenarioStatus,
}

impl From<&SimulatedLoan> for ScenarioRecord {
    fn from(loan: &SimulatedLoan) -> Self {
        Self {
            index: loan.index,
            monthly_payment: loan.scenario.monthly_payment,
            annual_interest_rate_percent: loan.scenario.annual_interest_rate_percent,
            down_payment: loan.scenario.down_payment,
            house_price: loan.scenario.house_price,
            principal: loan.principal,
            periods_to_payoff: loan.result.periods(),
            status: loan.result.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceResponse {
    index: usize,
    periods_to_payoff: Option<u32>,
    status: ScenarioStatus,
    periods: Vec<PeriodTrace>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    config: SimulationConfig,
    max_periods: u32,
    summary: BatchSummary,
    scenarios: Vec<ScenarioRecord>,
    filtered: Vec<ScenarioRecord>,
    trace: Option<TraceResponse>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

fn build_request(cli: Cli) -> Result<ApiRequest, ConfigError> {
    let config = SimulationConfig {
        ranges: SamplingRanges {
            monthly_payment: ValueRange::new(cli.payment_min, cli.payment_max),
            annual_interest_rate_percent: ValueRange::new(cli.rate_min, cli.rate_max),
            down_payment: ValueRange::new(cli.down_payment_min, cli.down_payment_max),
            house_price: ValueRange::new(cli.house_price_min, cli.house_price_max),
        },
        scenarios: cli.scenarios,
        seed: cli.seed,
        period_cap: cli.period_cap,
    };
    config.validate()?;

    if let Some(index) = cli.trace_index {
        if index >= config.scenarios as usize {
            return Err(ConfigError::TraceIndexOutOfRange {
                index,
                scenarios: config.scenarios,
            });
        }
    }

    Ok(ApiRequest {
        config,
        options: ApiOptions {
            max_periods: cli.max_periods,
            trace_index: cli.trace_index,
        },
    })
}

fn build_simulate_response(request: &ApiRequest) -> Result<SimulateResponse, ConfigError> {
    let run = run_simulation(&request.config)?;

    let trace = request
        .options
        .trace_index
        .and_then(|index| run.loans.get(index))
        .map(|loan| {
            let schedule = amortization_trace(&loan.scenario, request.config.period_cap);
            TraceResponse {
                index: loan.index,
                periods_to_payoff: schedule.result.periods(),
                status: schedule.result.into(),
                periods: schedule.periods,
            }
        });

    Ok(SimulateResponse {
        config: run.config,
        max_periods: request.options.max_periods,
        summary: run.summary(),
        scenarios: run.loans.iter().map(ScenarioRecord::from).collect(),
        filtered: run
            .within_periods(request.options.max_periods)
            .into_iter()
            .map(ScenarioRecord::from)
            .collect(),
        trace,
    })
}

/// Parses command-line flags, runs one batch and returns the response as
/// pretty JSON. Flag errors and `--help` exit through clap.
pub fn run_cli<I, T>(args: I) -> Result<String, ApiError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let request = build_request(cli).inspect_err(|e| warn!("rejected configuration: {e}"))?;
    let response = build_simulate_response(&request)?;
    Ok(serde_json::to_string_pretty(&response)?)
}

fn router() -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router();

    let listener = TcpListener::bind(addr).await?;
    info!("payoff HTTP API listening on http://{addr}");

    axum::serve(listener, app).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(
    payload: Result<Query<SimulatePayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => simulate_handler_impl(payload).await,
        Err(rejection) => invalid_payload_response("query", &rejection.body_text()),
    }
}

async fn simulate_post_handler(
    payload: Result<Json<SimulatePayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => simulate_handler_impl(payload).await,
        Err(rejection) => invalid_payload_response("JSON", &rejection.body_text()),
    }
}

fn invalid_payload_response(kind: &str, detail: &str) -> Response {
    let msg = invalid_payload_message(kind, detail);
    warn!("{msg}");
    error_response(StatusCode::BAD_REQUEST, &msg)
}

fn invalid_payload_message(kind: &str, detail: &str) -> String {
    format!("Invalid API {kind} payload: {detail}")
}

async fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    debug!(?payload, "simulate request");

    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(e) => {
            warn!("rejected configuration: {e}");
            return error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    match build_simulate_response(&request) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| invalid_payload_message("JSON", &e.to_string()))?;
    api_request_from_payload(payload).map_err(|e| e.to_string())
}

fn api_request_from_payload(payload: SimulatePayload) -> Result<ApiRequest, ConfigError> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.payment_min {
        cli.payment_min = v;
    }
    if let Some(v) = payload.payment_max {
        cli.payment_max = v;
    }
    if let Some(v) = payload.rate_min {
        cli.rate_min = v;
    }
    if let Some(v) = payload.rate_max {
        cli.rate_max = v;
    }
    if let Some(v) = payload.down_payment_min {
        cli.down_payment_min = v;
    }
    if let Some(v) = payload.down_payment_max {
        cli.down_payment_max = v;
    }
    if let Some(v) = payload.house_price_min {
        cli.house_price_min = v;
    }
    if let Some(v) = payload.house_price_max {
        cli.house_price_max = v;
    }

    if let Some(v) = payload.scenarios {
        cli.scenarios = v;
    }
    if let Some(v) = payload.seed {
        cli.seed = v;
    }
    if let Some(v) = payload.period_cap {
        cli.period_cap = v;
    }
    if let Some(v) = payload.max_periods {
        cli.max_periods = v;
    }
    if payload.trace_index.is_some() {
        cli.trace_index = payload.trace_index;
    }

    build_request(cli)
}

fn default_cli_for_api() -> Cli {
    let defaults = SimulationConfig::default();
    let ranges = defaults.ranges;
    Cli {
        payment_min: ranges.monthly_payment.min,
        payment_max: ranges.monthly_payment.max,
        rate_min: ranges.annual_interest_rate_percent.min,
        rate_max: ranges.annual_interest_rate_percent.max,
        down_payment_min: ranges.down_payment.min,
        down_payment_max: ranges.down_payment.max,
        house_price_min: ranges.house_price.min,
        house_price_max: ranges.house_price.max,
        scenarios: defaults.scenarios,
        seed: defaults.seed,
        period_cap: defaults.period_cap,
        max_periods: DEFAULT_MAX_PERIODS,
        trace_index: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn cli_defaults_match_api_defaults() {
        let parsed = Cli::try_parse_from(["payoff"]).expect("defaults parse");
        let request = build_request(parsed).expect("valid defaults");
        let api = build_request(sample_cli()).expect("valid defaults");

        assert_eq!(request.config, api.config);
        assert_eq!(request.config, SimulationConfig::default());
        assert_eq!(request.options.max_periods, DEFAULT_MAX_PERIODS);
        assert_eq!(request.options.trace_index, None);
    }

    #[test]
    fn cli_flags_override_defaults() {
        let parsed = Cli::try_parse_from([
            "payoff",
            "--payment-min",
            "1500",
            "--rate-max",
            "7.5",
            "--scenarios",
            "25",
            "--seed",
            "9",
            "--max-periods",
            "12",
            "--trace-index",
            "3",
        ])
        .expect("flags parse");
        let request = build_request(parsed).expect("valid flags");

        assert_eq!(request.config.ranges.monthly_payment.min, 1_500.0);
        assert_eq!(request.config.ranges.annual_interest_rate_percent.max, 7.5);
        assert_eq!(request.config.scenarios, 25);
        assert_eq!(request.config.seed, 9);
        assert_eq!(request.options.max_periods, 12);
        assert_eq!(request.options.trace_index, Some(3));
    }

    #[test]
    fn build_request_rejects_inverted_range() {
        let mut cli = sample_cli();
        cli.house_price_min = 900_000.0;
        cli.house_price_max = 100_000.0;

        let err = build_request(cli).expect_err("must reject inverted range");
        assert!(err.to_string().contains("house price"));
    }

    #[test]
    fn build_request_rejects_trace_index_outside_batch() {
        let mut cli = sample_cli();
        cli.scenarios = 10;
        cli.trace_index = Some(10);

        let err = build_request(cli).expect_err("must reject trace index");
        assert_eq!(
            err,
            ConfigError::TraceIndexOutOfRange {
                index: 10,
                scenarios: 10
            }
        );
    }

    #[test]
    fn api_request_from_json_parses_web_keys() {
        let json = r#"{
          "paymentMin": 1200,
          "paymentMax": 2400,
          "rateMin": 2,
          "rateMax": 6,
          "downPaymentMin": 5000,
          "downPaymentMax": 50000,
          "housePriceMin": 150000,
          "housePriceMax": 450000,
          "scenarios": 300,
          "seed": 7,
          "periodCap": 250,
          "maxPeriods": 20,
          "traceIndex": 4
        }"#;
        let request = api_request_from_json(json).expect("json should parse");
        let ranges = request.config.ranges;

        assert_eq!(ranges.monthly_payment, ValueRange::new(1_200.0, 2_400.0));
        assert_eq!(ranges.annual_interest_rate_percent, ValueRange::new(2.0, 6.0));
        assert_eq!(ranges.down_payment, ValueRange::new(5_000.0, 50_000.0));
        assert_eq!(ranges.house_price, ValueRange::new(150_000.0, 450_000.0));
        assert_eq!(request.config.scenarios, 300);
        assert_eq!(request.config.seed, 7);
        assert_eq!(request.config.period_cap, 250);
        assert_eq!(request.options.max_periods, 20);
        assert_eq!(request.options.trace_index, Some(4));
    }

    #[test]
    fn api_request_from_json_falls_back_to_defaults() {
        let request = api_request_from_json("{}").expect("empty payload is valid");
        assert_eq!(request.config, SimulationConfig::default());
        assert_eq!(request.options.max_periods, DEFAULT_MAX_PERIODS);
    }

    #[test]
    fn api_request_from_json_reports_config_errors() {
        let err = api_request_from_json(r#"{ "scenarios": 0 }"#).expect_err("must reject");
        assert!(err.contains("scenario count"));

        let err = api_request_from_json(r#"{ "paymentMin": 0 }"#).expect_err("must reject");
        assert!(err.contains("monthly payment"));

        let err = api_request_from_json(r#"{ "seed": "abc" }"#).expect_err("must reject");
        assert!(err.starts_with("Invalid API JSON payload"));
    }

    #[test]
    fn simulate_response_serialization_contains_expected_fields() {
        let mut cli = sample_cli();
        cli.scenarios = 12;
        cli.trace_index = Some(0);
        let request = build_request(cli).expect("valid inputs");
        let response = build_simulate_response(&request).expect("simulation runs");
        let json = serde_json::to_value(&response).expect("serializes");

        assert_eq!(json["maxPeriods"], 30);
        assert_eq!(json["config"]["scenarios"], 12);
        assert_eq!(json["config"]["periodCap"], 1000);
        assert_eq!(json["config"]["ranges"]["housePrice"]["max"], 1_000_000.0);
        assert_eq!(json["summary"]["scenarios"], 12);
        assert_eq!(json["scenarios"].as_array().map(Vec::len), Some(12));

        let first = &json["scenarios"][0];
        for key in [
            "index",
            "monthlyPayment",
            "annualInterestRatePercent",
            "downPayment",
            "housePrice",
            "principal",
            "periodsToPayoff",
            "status",
        ] {
            assert!(first.get(key).is_some(), "missing {key}");
        }

        let trace = &json["trace"];
        assert_eq!(trace["index"], 0);
        assert_eq!(trace["periodsToPayoff"], first["periodsToPayoff"]);
        if let Some(periods) = first["periodsToPayoff"].as_u64() {
            assert_eq!(trace["periods"].as_array().map(Vec::len), Some(periods as usize));
        }
    }

    #[test]
    fn filtered_records_respect_max_periods() {
        let mut cli = sample_cli();
        cli.scenarios = 200;
        cli.max_periods = 15;
        let request = build_request(cli).expect("valid inputs");
        let response = build_simulate_response(&request).expect("simulation runs");

        let expected = response
            .scenarios
            .iter()
            .filter(|r| r.periods_to_payoff.is_some_and(|n| n <= 15))
            .count();
        assert_eq!(response.filtered.len(), expected);
        assert!(
            response
                .filtered
                .iter()
                .all(|r| r.status == ScenarioStatus::PaidOff)
        );
    }

    #[test]
    fn non_amortizing_record_serializes_null_duration() {
        let mut cli = sample_cli();
        cli.payment_min = 100.0;
        cli.payment_max = 100.0;
        cli.rate_min = 10.0;
        cli.rate_max = 10.0;
        cli.down_payment_min = 0.0;
        cli.down_payment_max = 0.0;
        cli.scenarios = 3;
        let request = build_request(cli).expect("valid inputs");
        let response = build_simulate_response(&request).expect("simulation runs");
        let json = serde_json::to_value(&response).expect("serializes");

        let record = &json["scenarios"][0];
        assert_eq!(record["periodsToPayoff"], Value::Null);
        assert_eq!(record["status"], "payment-below-interest");
        assert_eq!(json["summary"]["nonAmortizing"], 3);
        assert_eq!(json["summary"]["maxPeriods"], Value::Null);
        assert_eq!(json["filtered"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn run_cli_prints_pretty_json() {
        let out = run_cli(["payoff", "--scenarios", "4", "--seed", "1"]).expect("cli runs");
        let json: Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(json["config"]["seed"], 1);
        assert!(out.contains('\n'));
    }

    #[test]
    fn run_cli_surfaces_config_errors() {
        let err = run_cli(["payoff", "--period-cap", "0"]).expect_err("must reject");
        assert!(matches!(err, ApiError::Config(ConfigError::ZeroPeriodCap)));
    }

    async fn send(request: Request<Body>) -> (StatusCode, Option<String>, Value) {
        let response = router().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let cache_control = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body = serde_json::from_slice(&bytes).expect("body is JSON");
        (status, cache_control, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    fn post_json(uri: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid request")
    }

    #[tokio::test]
    async fn health_route_reports_ok() {
        let (status, cache_control, body) = send(get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache_control.as_deref(), Some("no-store"));
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn unknown_route_returns_json_not_found() {
        let (status, cache_control, body) = send(get_request("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(cache_control.as_deref(), Some("no-store"));
        assert_eq!(body, serde_json::json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn simulate_route_accepts_get_query_and_post_json() {
        let (status, _, body) =
            send(get_request("/api/simulate?scenarios=6&seed=3&maxPeriods=20")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["config"]["scenarios"], 6);
        assert_eq!(body["config"]["seed"], 3);
        assert_eq!(body["maxPeriods"], 20);

        let payload = r#"{ "scenarios": 6, "seed": 3, "maxPeriods": 20 }"#;
        let (status, cache_control, posted) = send(post_json("/api/simulate", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache_control.as_deref(), Some("no-store"));
        assert_eq!(posted, body);
    }

    #[tokio::test]
    async fn simulate_route_rejects_undecodable_query_as_json_bad_request() {
        let (status, cache_control, body) = send(get_request("/api/simulate?seed=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(cache_control.as_deref(), Some("no-store"));
        let msg = body["error"].as_str().expect("error message");
        assert!(msg.starts_with("Invalid API query payload"), "{msg}");
    }

    #[tokio::test]
    async fn simulate_route_rejects_undecodable_json_as_json_bad_request() {
        let (status, cache_control, body) =
            send(post_json("/api/simulate", r#"{ "seed": "abc" }"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(cache_control.as_deref(), Some("no-store"));
        let msg = body["error"].as_str().expect("error message");
        assert!(msg.starts_with("Invalid API JSON payload"), "{msg}");

        let (status, _, body) = send(post_json("/api/simulate", "not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn simulate_route_rejects_range_too_wide_to_sample() {
        let (status, _, body) = send(post_json(
            "/api/simulate",
            r#"{ "paymentMax": 1.7976931348623157e308, "scenarios": 2 }"#,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "monthly payment range is too wide to sample");
    }

    #[tokio::test]
    async fn simulate_handler_maps_config_errors_to_bad_request() {
        let payload = SimulatePayload {
            rate_min: Some(9.0),
            rate_max: Some(1.0),
            ..SimulatePayload::default()
        };
        let response = simulate_handler_impl(payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );
    }

    #[tokio::test]
    async fn simulate_handler_accepts_defaults() {
        let payload = SimulatePayload {
            scenarios: Some(5),
            ..SimulatePayload::default()
        };
        let response = simulate_handler_impl(payload).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
