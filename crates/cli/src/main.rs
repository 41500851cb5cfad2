use anyhow::Context;
use clap::{Parser, ValueEnum};
use hotspot::{
    ClusteringEngine, Config, JsonFileSink, JsonFileSource, OutputFormat, PointSource, run_pass,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Cluster a point snapshot into hotspots and publish them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Point snapshot: JSON object keyed by user, or JSON array
    #[arg(short, long)]
    input: PathBuf,

    /// Hotspot file; replaced on every run
    #[arg(short, long, required_unless_present = "dry_run")]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Clustering configuration (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Compute and log hotspots without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Geojson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Geojson => OutputFormat::GeoJson,
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;

    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Config::from_toml(&text)?,
        _ => Config::from_json(&text)?,
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotspot=info,hotspot_cli=info,info".into()),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let source = JsonFileSource::new(&args.input);

    if args.dry_run {
        let mut engine = ClusteringEngine::new(config)?;
        engine.ingest_all(source.snapshot()?);
        let hotspots = engine.identify_clusters();
        for (id, h) in &hotspots {
            info!(
                "Hotspot {}: [{}, {}] radius {} population {}",
                id, h.latitude, h.longitude, h.radius, h.population
            );
        }
        info!("Dry run complete: {} hotspots, nothing written", hotspots.len());
        return Ok(());
    }

    let output = args
        .output
        .context("--output is required unless --dry-run is given")?;
    let mut sink = JsonFileSink::new(&output, args.format.into());

    let report = run_pass(&config, &source, &mut sink)
        .with_context(|| format!("Clustering pass over {} failed", args.input.display()))?;

    info!(
        "Wrote {} hotspots to {} ({} points received, {} discarded, {} clusters found)",
        report.hotspots.len(),
        output.display(),
        report.received,
        report.discarded,
        report.clusters_found
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "hotspot", "--input", "users.json", "--output", "out.json", "--format", "geojson",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Geojson);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_output_required_without_dry_run() {
        assert!(Args::try_parse_from(["hotspot", "--input", "users.json"]).is_err());
        let args = Args::try_parse_from(["hotspot", "-i", "users.json", "--dry-run"]).unwrap();
        assert!(args.output.is_none());
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn test_load_config_formats() {
        let dir = tempdir().unwrap();

        assert_eq!(load_config(None).unwrap(), Config::default());

        let toml_path = dir.path().join("hotspot.toml");
        std::fs::write(&toml_path, "minimum_cluster_population = 6\n").unwrap();
        assert_eq!(
            load_config(Some(&toml_path)).unwrap().minimum_cluster_population,
            6
        );

        let json_path = dir.path().join("hotspot.json");
        std::fs::write(&json_path, r#"{"tiles_per_dim": 64}"#).unwrap();
        assert_eq!(load_config(Some(&json_path)).unwrap().tiles_per_dim, 64);

        std::fs::write(&json_path, r#"{"tiles_per_dim": 0}"#).unwrap();
        assert!(load_config(Some(&json_path)).is_err());
    }

    #[test]
    fn test_format_maps_to_output_format() {
        assert_eq!(OutputFormat::from(Format::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(Format::Geojson), OutputFormat::GeoJson);
    }
}
