use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gradeform::protocol::{HealthStatus, ModelInfo, Prediction};

pub struct CheckRow {
    pub id: String,
    pub typed: String,
    pub text: String,
    pub value: f64,
    pub valid: bool,
}

pub struct BatchRow {
    pub label: String,
    pub status: BatchStatus,
}

pub enum BatchStatus {
    Predicted(Prediction),
    Invalid(Vec<String>),
    Failed(String),
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn validity_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("invalid").fg(Color::Red)
    }
}

pub fn print_check_table(rows: &[CheckRow]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Typed"),
        Cell::new("Field Text").fg(Color::Cyan),
        Cell::new("Value"),
        Cell::new("Valid"),
    ]);
    if let Some(col) = table.column_mut(3) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.id).add_attribute(Attribute::Bold),
            Cell::new(&row.typed),
            Cell::new(&row.text).fg(Color::Cyan),
            Cell::new(format!("{:.2}", row.value)),
            validity_cell(row.valid),
        ]);
    }
    println!("{}", table);
}

pub fn print_prediction(prediction: &Prediction) {
    if prediction.confidence.is_empty() && prediction.raw_prediction.is_none() {
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Class").add_attribute(Attribute::Bold),
        Cell::new("Probability"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (label, p) in &prediction.confidence {
        table.add_row(vec![Cell::new(label), Cell::new(format!("{:.1}%", p * 100.0))]);
    }

    println!("\n{}", table);
    if let Some(raw) = prediction.raw_prediction {
        println!("raw prediction: {}", raw);
    }
    if let Some(ts) = &prediction.timestamp {
        println!("at: {}", ts);
    }
}

pub fn print_batch_report(rows: &[BatchRow]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Row").add_attribute(Attribute::Bold),
        Cell::new("Result"),
        Cell::new("Detail"),
    ]);

    let mut ok = 0;
    for row in rows {
        let (result, detail) = match &row.status {
            BatchStatus::Predicted(p) => {
                ok += 1;
                let best = p
                    .confidence
                    .iter()
                    .max_by(|a, b| a.1.total_cmp(b.1))
                    .map(|(label, prob)| format!("{} {:.1}%", label, prob * 100.0))
                    .unwrap_or_default();
                (Cell::new(&p.label).fg(Color::Green), best)
            }
            BatchStatus::Invalid(ids) => (
                Cell::new("invalid").fg(Color::Yellow),
                ids.join(", "),
            ),
            BatchStatus::Failed(msg) => (Cell::new("error").fg(Color::Red), msg.clone()),
        };
        table.add_row(vec![
            Cell::new(&row.label).add_attribute(Attribute::Bold),
            result,
            Cell::new(detail),
        ]);
    }

    println!("\n{}", table);
    println!("{}/{} rows predicted", ok, rows.len());
}

pub fn print_health(server: &str, health: &HealthStatus) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Server").add_attribute(Attribute::Bold),
        Cell::new("Status"),
        Cell::new("Model"),
        Cell::new("Timestamp"),
    ]);

    let model_color = if health.model_status == "loaded" {
        Color::Green
    } else {
        Color::Red
    };
    table.add_row(vec![
        Cell::new(server),
        Cell::new(&health.status),
        Cell::new(&health.model_status).fg(model_color),
        Cell::new(health.timestamp.as_deref().unwrap_or("-")),
    ]);
    println!("\n{}", table);
}

pub fn print_model_info(model: &ModelInfo) {
    println!(
        "\nModel: {} ({} features{})",
        model.model_type,
        model.n_features,
        model
            .n_estimators
            .map(|n| format!(", {} estimators", n))
            .unwrap_or_default()
    );
    if !model.classes.is_empty() {
        let classes: Vec<String> = model
            .classes
            .iter()
            .map(|c| c.as_str().map_or_else(|| c.to_string(), str::to_string))
            .collect();
        println!("Classes: {}", classes.join(", "));
    }

    let Some(importance) = &model.feature_importance else {
        return;
    };

    let mut ranked: Vec<(&String, &f64)> = importance.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(a.1));

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Feature").add_attribute(Attribute::Bold),
        Cell::new("Importance"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    for (feature, weight) in ranked {
        table.add_row(vec![Cell::new(feature), Cell::new(format!("{:.4}", weight))]);
    }
    println!("{}", table);
}
