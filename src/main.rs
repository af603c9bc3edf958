// Formation Schedule - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/formation-schedule --input formations.json
// ```
//
// Or with a fixed reference date for deterministic output:
//
// ```console
// $ ./target/release/formation-schedule --input formations.json --today 2024-06-15 --output-format text
// ```

use anyhow::Context;
use clap::Parser;
use formation_schedule::catalog::{sort_by_name, CatalogDocument, Formation, Structure};
use formation_schedule::schedule::{LoggingConfig, ScheduleBuckets, ScheduleError, SchedulePipeline};
use formation_schedule::types::{CliArgs, OutputFormat, ScheduleConfig};
use std::io::Read;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        let default_config = ScheduleConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting formation schedule pipeline");

    let config = match ScheduleConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no records will be processed.");
        eprintln!("  Time zone:     {}", config.timezone);
        eprintln!(
            "  Reference day: {}",
            config.today.map_or_else(|| "from clock".to_string(), |d| d.to_string())
        );
        eprintln!("  Output format: {}", config.output_format);
        return;
    }

    if let Err(e) = run_pipeline(&config) {
        error!("Pipeline failed: {:#}", e);
        process::exit(1);
    }

    info!("Formation schedule pipeline completed successfully");
}

/// Read the input document, run the pipeline, and render the result
fn run_pipeline(config: &ScheduleConfig) -> anyhow::Result<()> {
    let document = read_document(config).context("failed to load input document")?;
    let (mut structures, formations) = document.into_parts();
    info!(
        structures = structures.len(),
        formations = formations.len(),
        "input document loaded"
    );

    let pipeline = SchedulePipeline::from_config(config)?;
    let buckets = pipeline.run(formations);

    match config.output_format {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&buckets)
                .context("failed to serialize the partitioned schedule")?;
            println!("{}", rendered);
        }
        OutputFormat::Text => {
            sort_by_name(&mut structures);
            render_text(&buckets, &structures);
        }
    }
    Ok(())
}

/// Read and parse the input document from the configured path or stdin
fn read_document(config: &ScheduleConfig) -> Result<CatalogDocument, ScheduleError> {
    let contents = match &config.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    serde_json::from_str(&contents)
        .map_err(|e| ScheduleError::input_error(format!("invalid input document: {}", e)))
}

/// Render the partitioned schedule as a human-readable listing
///
/// With structures present the output is grouped per organization, name
/// ascending; sessions not linked to any listed structure follow at the end.
fn render_text(buckets: &ScheduleBuckets, structures: &[Structure]) {
    if structures.is_empty() {
        render_buckets(buckets.upcoming.iter().collect(), buckets.past.iter().collect());
        return;
    }

    for structure in structures {
        println!("## {}", structure.name);
        let upcoming: Vec<&Formation> = buckets
            .upcoming
            .iter()
            .filter(|f| f.structure_id == Some(structure.id))
            .collect();
        let past: Vec<&Formation> = buckets
            .past
            .iter()
            .filter(|f| f.structure_id == Some(structure.id))
            .collect();
        if upcoming.is_empty() && past.is_empty() {
            println!("  (no sessions)");
        } else {
            render_buckets(upcoming, past);
        }
        println!();
    }

    let orphan_upcoming: Vec<&Formation> = buckets
        .upcoming
        .iter()
        .filter(|f| !is_linked(f, structures))
        .collect();
    let orphan_past: Vec<&Formation> =
        buckets.past.iter().filter(|f| !is_linked(f, structures)).collect();
    if !orphan_upcoming.is_empty() || !orphan_past.is_empty() {
        println!("## Unlinked sessions");
        render_buckets(orphan_upcoming, orphan_past);
    }
}

fn is_linked(formation: &Formation, structures: &[Structure]) -> bool {
    formation
        .structure_id
        .map(|id| structures.iter().any(|s| s.id == id))
        .unwrap_or(false)
}

fn render_buckets(upcoming: Vec<&Formation>, past: Vec<&Formation>) {
    if !upcoming.is_empty() {
        println!("Upcoming sessions ({})", upcoming.len());
        for formation in upcoming {
            render_formation(formation);
        }
    }
    if !past.is_empty() {
        println!("Past sessions ({})", past.len());
        for formation in past {
            render_formation(formation);
        }
    }
}

fn render_formation(formation: &Formation) {
    let date = formation
        .schedule_date()
        .map_or_else(|| "no date".to_string(), |d| d.to_string());
    match &formation.location {
        Some(location) => println!("  {} - {} ({})", date, formation.title, location),
        None => println!("  {} - {}", date, formation.title),
    }
}
