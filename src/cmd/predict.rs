use super::{enter_value, parse_assignment};
use crate::reports;
use crate::terminal::TerminalView;
use clap::Args;
use gradeform::client::PredictionClient;
use gradeform::config::Config;
use gradeform::error::{GfResult, GradeFormError};
use gradeform::form::Form;
use gradeform::orchestrator::{Orchestrator, SubmitOutcome};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub config: Config,

    /// FIELD=VALUE pair (repeatable); unset fields are sent as 0
    #[arg(short = 'v', long = "value", value_parser = parse_assignment)]
    pub values: Vec<(String, String)>,

    /// Start from the built-in sample grades
    #[arg(long, default_value_t = false)]
    pub sample: bool,

    /// Apply each VALUE as one paste instead of key-by-key typing
    #[arg(long, default_value_t = false)]
    pub paste: bool,
}

pub async fn run(args: PredictArgs, config: &Config) -> GfResult<()> {
    let form = Form::from_config(&config.engine);
    let client = PredictionClient::new(&config.client);
    let mut app = Orchestrator::new(form, client, TerminalView::new());

    if args.sample {
        let filled = app.fill_sample()?;
        info!("🧪 Filled {} fields with sample data", filled);
    }

    for (id, text) in &args.values {
        enter_value(app.form_mut(), id, text, args.paste)?;
    }

    info!("🔮 Predicting via {}", app.backend().predict_url());
    match app.submit().await {
        SubmitOutcome::Predicted(prediction) => {
            reports::print_prediction(&prediction);
            Ok(())
        }
        SubmitOutcome::Invalid(ids) => Err(GradeFormError::Validation(format!(
            "invalid fields: {}",
            ids.join(", ")
        ))),
        SubmitOutcome::Failed(e) => Err(e),
    }
}
