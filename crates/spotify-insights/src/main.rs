mod bootstrap;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use insights_core::criteria::FilterCriteria;
use insights_core::error::InsightsError;
use insights_core::settings::Settings;
use insights_core::time_utils;
use insights_data::{analysis, filter, reader};
use insights_report::ReportEmitter;

/// Outcome of one independently-emitted artifact.
struct ArtifactOutcome {
    name: String,
    result: std::result::Result<PathBuf, InsightsError>,
}

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("Spotify Insights v{} starting", env!("CARGO_PKG_VERSION"));

    // Configuration errors are fatal before any processing starts.
    let tz = time_utils::resolve_timezone(&settings.timezone)?;
    let criteria = FilterCriteria::from_settings(&settings, tz)?;
    let range_label = criteria.range_label(tz);
    tracing::info!("Analyzing: {} (timezone {})", range_label, tz.name());

    let results_dir = bootstrap::ensure_results_directory(&settings.results_dir)?;
    tracing::info!("Results directory ready: {}", results_dir.display());

    // No data means nothing to report on; bail with the expected path.
    let events = reader::load_playback_events(&settings.data_dir)?;

    let emitter = ReportEmitter::new(results_dir);
    let mut outcomes: Vec<ArtifactOutcome> = Vec::new();

    outcomes.push(ArtifactOutcome {
        name: "combined_streaming_data.csv".to_string(),
        result: emitter.write_events_csv("combined_streaming_data", &events),
    });

    let filtered = filter::apply(events, &criteria);
    if let (Some(first), Some(last)) = (
        filtered.iter().map(|e| e.timestamp).min(),
        filtered.iter().map(|e| e.timestamp).max(),
    ) {
        tracing::info!("Date range in data: {} to {}", first, last);
    }

    outcomes.push(ArtifactOutcome {
        name: "filtered_streaming_data.csv".to_string(),
        result: emitter.write_events_csv("filtered_streaming_data", &filtered),
    });

    tracing::info!("Generating visualizations...");
    for (table, kind) in analysis::build_summaries(&filtered, tz, &range_label) {
        let name = format!("{}.html", table.name);
        let result = emitter.emit(&table, kind);
        outcomes.push(ArtifactOutcome { name, result });
    }

    report_outcomes(&outcomes);
    tracing::info!("Analysis complete ({} events after filtering)", filtered.len());

    Ok(())
}

/// Final per-artifact success/failure summary. Partial results are a valid
/// terminal state; failures are surfaced here rather than aborting the run.
fn report_outcomes(outcomes: &[ArtifactOutcome]) {
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    for outcome in outcomes {
        match &outcome.result {
            Ok(path) => tracing::info!("  ok      {} -> {}", outcome.name, path.display()),
            Err(e) => tracing::error!("  failed  {}: {}", outcome.name, e),
        }
    }
    tracing::info!(
        "{} of {} artifacts written",
        outcomes.len() - failed,
        outcomes.len()
    );
}
