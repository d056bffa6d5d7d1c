mod bootstrap;

use std::path::Path;

use activity_core::error::Result;
use activity_core::settings::Settings;
use activity_data::analysis::analyze_corpus;
use activity_data::reader::read_corpus;
use activity_render::{charts, table};
use clap::Parser;
use tracing::{error, info};

/// How many of the most prolific senders get charted.
const TOP_SENDERS: usize = 5;

/// Output artifacts, written to the working directory.
const SUMMARY_PATH: &str = "result.csv";
const SENT_CHART_PATH: &str = "number_email_sent.png";
const UNIQUE_CHART_PATH: &str = "number_unique_people.png";

fn main() {
    let settings = Settings::parse();

    if let Err(err) = bootstrap::setup_logging("info", None) {
        eprintln!("Failed to initialise logging: {err:#}");
        std::process::exit(1);
    }

    info!("mail-activity v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&settings) {
        error!("{err}");
        std::process::exit(1);
    }
}

/// Run the whole batch pipeline: ingest, aggregate, write all three
/// artifacts. Any failure aborts the run; there is no partial-output mode.
fn run(settings: &Settings) -> Result<()> {
    let corpus = read_corpus(&settings.input)?;
    let report = analyze_corpus(&corpus, TOP_SENDERS);

    table::write_summary(Path::new(SUMMARY_PATH), &report.summaries)?;
    charts::render_monthly_chart(
        Path::new(SENT_CHART_PATH),
        "Number of emails sent every month",
        "Number of emails",
        &report.sent_series,
    )?;
    charts::render_monthly_chart(
        Path::new(UNIQUE_CHART_PATH),
        "Number of unique senders every month",
        "Number of unique senders",
        &report.unique_sender_series,
    )?;

    info!(
        "Report complete: {} persons ranked; wrote {}, {} and {}",
        report.summaries.len(),
        SUMMARY_PATH,
        SENT_CHART_PATH,
        UNIQUE_CHART_PATH
    );
    Ok(())
}
