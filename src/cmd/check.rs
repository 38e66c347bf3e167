use super::{enter_value, parse_assignment};
use crate::reports::{self, CheckRow};
use clap::Args;
use gradeform::config::Config;
use gradeform::error::GfResult;
use gradeform::form::Form;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: Config,

    /// FIELD=VALUE pair to run through the input mask (repeatable)
    #[arg(short = 'v', long = "value", value_parser = parse_assignment)]
    pub values: Vec<(String, String)>,

    /// Apply each VALUE as one paste instead of key-by-key typing
    #[arg(long, default_value_t = false)]
    pub paste: bool,
}

pub fn run(args: CheckArgs, config: &Config) -> GfResult<()> {
    let mut form = Form::from_config(&config.engine);

    println!(
        "\n🔎 Mask: grammar={} overflow={} fields={}",
        config.engine.grammar, config.engine.overflow, config.engine.field_set
    );

    let mut rows = Vec::with_capacity(args.values.len());
    for (id, typed) in &args.values {
        enter_value(&mut form, id, typed, args.paste)?;
        let field = form.field(id)?;
        rows.push(CheckRow {
            id: id.clone(),
            typed: typed.clone(),
            text: field.text().to_string(),
            value: field.numeric_value(),
            valid: !field.is_marked_invalid(),
        });
    }

    reports::print_check_table(&rows);
    Ok(())
}
