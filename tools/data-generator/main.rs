use clap::Parser;
use hyouji::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random form documents and value snapshots for the
/// Hyouji engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated form JSON to
    #[arg(long, default_value = "generated_form.json")]
    form_output: String,

    /// The path to write the generated values JSON to
    #[arg(long, default_value = "generated_values.json")]
    values_output: String,

    /// The number of rows to generate
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// The maximum number of elements per row
    #[arg(long, default_value_t = 3)]
    row_width: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.rows == 0 || cli.row_width == 0 {
        eprintln!("Error: --rows and --row-width must both be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a form with {} row(s) (up to {} elements each)...",
        cli.rows, cli.row_width
    );

    let form = generate_form(&mut rng, cli.rows, cli.row_width);
    let values = generate_values(&mut rng, &form);

    fs::write(&cli.form_output, serde_json::to_string_pretty(&form)?)?;
    fs::write(&cli.values_output, serde_json::to_string_pretty(&values)?)?;

    println!(
        "Successfully generated form '{}' and values '{}'",
        cli.form_output, cli.values_output
    );

    Ok(())
}

/// Generates a form whose later elements carry rules referencing earlier
/// elements, so visibility actually toggles with the generated values.
fn generate_form(rng: &mut ThreadRng, rows: usize, row_width: usize) -> Form {
    let mut elements: Vec<Vec<Element>> = Vec::new();
    let mut prior_ids: Vec<String> = Vec::new();

    for row_index in 0..rows {
        let width = rng.random_range(1..=row_width);
        let mut row = Vec::new();
        for col_index in 0..width {
            let id = format!("field_{}_{}", row_index, col_index);
            let element = generate_element(rng, &id, &prior_ids);
            row.push(element);
        }
        for element in &row {
            prior_ids.push(element.id.clone());
        }
        elements.push(row);
    }

    Form {
        id: "generated".to_string(),
        name: "Generated form".to_string(),
        spacing: Some(2),
        elements,
    }
}

fn generate_element(rng: &mut ThreadRng, id: &str, prior_ids: &[String]) -> Element {
    let is_checkbox = rng.random_range(0..4) == 0;
    let (element_type, choices) = if is_checkbox {
        let choices = (0..rng.random_range(2..5))
            .map(|i| Choice {
                id: format!("{}_opt_{}", id, i),
                name: format!("Option {}", i),
            })
            .collect();
        ("checkbox".to_string(), Some(choices))
    } else {
        ("text".to_string(), None)
    };

    // Roughly half of the elements past the first row get a visibility rule.
    let rules = if !prior_ids.is_empty() && rng.random_range(0..2) == 0 {
        Some(vec![generate_rule(rng, prior_ids)])
    } else {
        None
    };

    Element {
        id: id.to_string(),
        label: format!("Field {}", id),
        element_type,
        required: rng.random_range(0..3) == 0,
        choices,
        props: None,
        rules,
    }
}

fn generate_rule(rng: &mut ThreadRng, prior_ids: &[String]) -> Rule {
    let operation = if rng.random_range(0..2) == 0 {
        RuleOperation::And
    } else {
        RuleOperation::Or
    };
    let condition_count = rng.random_range(1..=2usize.min(prior_ids.len()));
    let conditions = (0..condition_count)
        .map(|_| {
            let target = &prior_ids[rng.random_range(0..prior_ids.len())];
            let (operator, value) = match rng.random_range(0..3) {
                0 => (Operator::Equals, json!("yes")),
                1 => (Operator::GreaterThan, json!(rng.random_range(0..100))),
                _ => (Operator::LessThan, json!(rng.random_range(0..100))),
            };
            Condition {
                element_id: target.clone(),
                operator,
                value,
            }
        })
        .collect();

    Rule {
        operation,
        conditions,
    }
}

/// Generates a values snapshot covering every element of the form.
fn generate_values(rng: &mut ThreadRng, form: &Form) -> Value {
    let mut values = serde_json::Map::new();
    for element in form.iter_elements() {
        let value = match element.element_type.as_str() {
            "checkbox" => {
                let ids = element.choice_ids();
                let picked: Vec<Value> = ids
                    .iter()
                    .filter(|_| rng.random_range(0..2) == 0)
                    .map(|id| json!(id))
                    .collect();
                Value::Array(picked)
            }
            _ => {
                if rng.random_range(0..3) == 0 {
                    json!("yes")
                } else {
                    json!(rng.random_range(0..100).to_string())
                }
            }
        };
        values.insert(element.id.clone(), value);
    }
    Value::Object(values)
}
