use super::enter_value;
use crate::reports::{self, BatchRow, BatchStatus};
use crate::terminal::TerminalView;
use clap::Args;
use gradeform::client::PredictionClient;
use gradeform::config::Config;
use gradeform::error::GfResult;
use gradeform::form::Form;
use gradeform::orchestrator::{Orchestrator, SubmitOutcome};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV file whose header names the grade fields, one student per row
    #[arg(short, long)]
    pub input: PathBuf,

    /// Apply each cell as one paste instead of key-by-key typing
    #[arg(long, default_value_t = false)]
    pub paste: bool,
}

pub async fn run(args: BatchArgs, config: &Config) -> GfResult<()> {
    let mut reader = csv::Reader::from_path(&args.input)?;
    let headers = reader.headers()?.clone();

    let form = Form::from_config(&config.engine);
    let client = PredictionClient::new(&config.client);
    let mut app = Orchestrator::new(form, client, TerminalView::quiet());

    let registry = app.form().registry().clone();
    let label_col = headers.iter().position(|h| !registry.contains(h));
    let missing: Vec<&str> = registry
        .ids()
        .iter()
        .map(String::as_str)
        .filter(|id| !headers.iter().any(|h| h == *id))
        .collect();
    if !missing.is_empty() {
        warn!("⚠️  Columns missing from CSV (sent as 0): {}", missing.join(", "));
    }

    info!("📂 Reading {}", args.input.display());
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("⚠️  Skipping row {}: {}", idx + 1, e);
                rows.push(BatchRow {
                    label: format!("#{}", idx + 1),
                    status: BatchStatus::Failed(e.to_string()),
                });
                continue;
            }
        };
        let label = label_col
            .and_then(|col| record.get(col))
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", idx + 1));

        app.form_mut().clear_all();
        for (header, cell) in headers.iter().zip(record.iter()) {
            if registry.contains(header) {
                enter_value(app.form_mut(), header, cell.trim(), args.paste)?;
            }
        }

        let status = match app.submit().await {
            SubmitOutcome::Predicted(p) => BatchStatus::Predicted(p),
            SubmitOutcome::Invalid(ids) => BatchStatus::Invalid(ids),
            SubmitOutcome::Failed(e) => BatchStatus::Failed(e.to_string()),
        };
        rows.push(BatchRow { label, status });
    }

    reports::print_batch_report(&rows);
    Ok(())
}
