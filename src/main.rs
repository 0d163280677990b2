use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use icsps_maturity::assessment::{
    assessment_router, AssessmentRecord, AssessmentService, AssessmentSubmission, Catalog,
    CsvResultStore,
};
use icsps_maturity::config::AppConfig;
use icsps_maturity::error::AppError;
use icsps_maturity::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "ICSPS Maturity Assessment",
    about = "Score country maturity in vaccine forecasting and supply planning",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the questionnaire sections, questions, and options
    Catalog(CatalogArgs),
    /// Score a JSON submission file and append it to the results table
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Serve the extended questionnaire with the GESI section
    #[arg(long)]
    with_gesi: bool,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Include the GESI section
    #[arg(long)]
    with_gesi: bool,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Path to a JSON assessment submission
    input: PathBuf,
    /// Score against the extended questionnaire with the GESI section
    #[arg(long)]
    with_gesi: bool,
    /// Override the configured results table path
    #[arg(long)]
    results: Option<PathBuf>,
    /// Score and print the summary without persisting anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Catalog(args) => run_catalog(args),
        Command::Score(args) => run_score(args),
    }
}

fn select_catalog(with_gesi: bool) -> Catalog {
    if with_gesi {
        Catalog::with_gesi()
    } else {
        Catalog::standard()
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(select_catalog(args.with_gesi));
    let store = Arc::new(CsvResultStore::new(config.store.results_path.clone()));
    let service = Arc::new(AssessmentService::new(catalog, store));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(assessment_router(service.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        questions = service.catalog().question_count(),
        max_score = service.catalog().max_score(),
        "maturity assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = select_catalog(args.with_gesi);

    println!("ICSPS Maturity Assessment questionnaire");
    println!(
        "{} sections, {} questions, max score {}",
        catalog.sections().len(),
        catalog.question_count(),
        catalog.max_score()
    );

    for section in catalog.sections() {
        println!("\n## {}", section.name);
        for question in &section.questions {
            println!("\n[{}] {}", question.key, question.prompt);
            for (index, option) in question.options.iter().enumerate() {
                println!("  {}. {}", index + 1, option);
            }
        }
        println!("\n[comment] {}", section.comment_prompt());
    }

    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        with_gesi,
        results,
        dry_run,
    } = args;

    let config = AppConfig::load()?;
    let results_path = results.unwrap_or(config.store.results_path);

    let raw = fs::read_to_string(&input)?;
    let submission: AssessmentSubmission = serde_json::from_str(&raw)
        .map_err(|err| AppError::Input(format!("{}: {err}", input.display())))?;

    let catalog = Arc::new(select_catalog(with_gesi));
    let store = Arc::new(CsvResultStore::new(results_path.clone()));
    let service = AssessmentService::new(catalog, store);

    let record = if dry_run {
        service.preview(submission)?
    } else {
        service.submit(submission)?
    };

    render_result(&service, &record, dry_run, &results_path);
    Ok(())
}

fn render_result(
    service: &AssessmentService<CsvResultStore>,
    record: &AssessmentRecord,
    dry_run: bool,
    results_path: &std::path::Path,
) {
    println!(
        "Assessment for {} ({})",
        record.metadata.country, record.metadata.review_period
    );
    println!("Assessed on: {}", record.metadata.assessed_on);

    println!("\nSection subtotals");
    for section in &record.sections {
        println!("- {}: {}", section.section, section.subtotal);
    }

    println!(
        "\nTotal score: {} / {}",
        record.total_score,
        service.catalog().max_score()
    );
    println!("Maturity level: {}", record.maturity.label());

    if dry_run {
        println!("\nDry run: nothing persisted");
    } else {
        println!(
            "\nAppended {} rows to {}",
            record.rows().len(),
            results_path.display()
        );
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
