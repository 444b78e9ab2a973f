mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use viral_audit::config::AuditConfig;
use viral_audit::{
    audit_competitor, format_number, format_percent, telemetry, AuditError, AuditReport,
    AuditRequest, Category,
};

#[derive(Parser)]
#[command(name = "viral-audit", about = "Competitor viral content audit")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rank trends, hashtags and content formats for a handle
    Audit(AuditArgs),
    /// Serve the audit JSON API
    Serve(ServeArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct AuditArgs {
    #[arg(long)]
    handle: Option<String>,
    #[arg(long, default_value = "twitter")]
    platform: String,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    delay_ms: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    write: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    if let Err(err) = telemetry::init() {
        eprintln!("Warning: {}", err);
    }
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AuditError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Audit(AuditArgs {
        platform: "twitter".to_string(),
        ..AuditArgs::default()
    }));

    match command {
        Command::Audit(args) => run_audit(args).await,
        Command::Serve(args) => {
            let config = load_config(args.config.clone())?;
            server::serve(args, config).await
        }
        Command::Config(args) => run_config(args),
    }
}

async fn run_audit(args: AuditArgs) -> Result<(), AuditError> {
    let mut config = load_config(args.config)?;
    if let Some(delay_ms) = args.delay_ms {
        config.latency.simulated_ms = delay_ms;
    }

    let categories = match args.category.as_deref() {
        Some(value) => vec![Category::parse(value)?],
        None => Category::ALL.to_vec(),
    };

    let handle = read_handle(args.handle)?;
    let request = AuditRequest::new(&handle, &args.platform)?;
    let report = audit_competitor(&request, &categories, &config).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), AuditError> {
    let config = load_config(args.config)?;
    if let Some(path) = args.write {
        config.write(&path)?;
        info!(path = %path.display(), "wrote configuration");
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<AuditConfig, AuditError> {
    let (config, used) = AuditConfig::load(path)?;
    if let Some(path) = used.filter(|path| path.exists()) {
        info!(path = %path.display(), "loaded configuration");
    }
    Ok(config)
}

fn print_report(report: &AuditReport) {
    println!(
        "Competitor analysis for @{} on {}",
        report.handle, report.platform_name
    );

    for category in &report.categories {
        let hashtags = category.category == Category::Hashtags;
        let width = category
            .rows
            .iter()
            .map(|row| row.item.name.chars().count() + usize::from(hashtags))
            .chain(std::iter::once(category.column_title.len()))
            .max()
            .unwrap_or(0);

        println!("\n{}", category.title);
        println!(
            "{:<5} {:<width$}  {:>10}  {:>11}",
            "Rank",
            category.column_title,
            "Engagement",
            "Performance",
            width = width
        );
        for row in &category.rows {
            let name = if hashtags {
                format!("#{}", row.item.name)
            } else {
                row.item.name.clone()
            };
            println!(
                "{:<5} {:<width$}  {:>10}  {:>11}",
                row.rank,
                name,
                format_number(row.item.engagement),
                format_percent(row.performance),
                width = width
            );
            if let Some(example) = &row.item.example {
                println!("{:<5} Example: \"{}\"", "", example);
            }
        }
    }
}

fn read_handle(arg: Option<String>) -> Result<String, AuditError> {
    if let Some(handle) = arg {
        if !handle.trim().is_empty() {
            return Ok(handle);
        }
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err(AuditError::MissingHandle);
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
