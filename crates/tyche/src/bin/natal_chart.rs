use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use tyche::chart::ChartMetadata;
use tyche::houses::HouseSystem;
use tyche::{get_chart_ruler_report, get_house_rulers_report, load_config};

/// Calculate a natal chart and print it as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Birth instant, RFC 3339 (e.g. 1990-04-12T08:30:00-05:00)
    #[arg(long, value_parser = parse_instant)]
    datetime: DateTime<Utc>,

    /// Latitude in decimal degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in decimal degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// whole_sign or placidus; overrides the config file
    #[arg(long)]
    house_system: Option<HouseSystem>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    city: Option<String>,

    /// Birth time is not known
    #[arg(long)]
    unknown_time: bool,

    /// Path to a tyche.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 datetime '{s}': {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if !(-90.0..=90.0).contains(&args.lat) {
        anyhow::bail!("--lat must be within [-90, 90], got {}", args.lat);
    }
    if !(-180.0..=180.0).contains(&args.lon) {
        anyhow::bail!("--lon must be within [-180, 180], got {}", args.lon);
    }

    let config = load_config(args.config.as_deref())?;
    let house_system = args.house_system.unwrap_or(config.house_system);
    let assembler = config.build_assembler();

    let chart = assembler
        .calculate_chart(args.datetime, args.lat, args.lon, house_system)
        .await
        .context("Failed to calculate chart")?
        .with_metadata(ChartMetadata {
            name: args.name,
            city: args.city,
            unknown_time: args.unknown_time.then_some(true),
        });

    let report = serde_json::json!({
        "chart": chart,
        "houseRulers": get_house_rulers_report(&chart),
        "chartRuler": get_chart_ruler_report(&chart),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
