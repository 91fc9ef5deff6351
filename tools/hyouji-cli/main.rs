use clap::Parser;
use hyouji::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A declarative conditional-visibility and validation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the form definition JSON file
    form_path: Option<String>,
    /// Optional path to the values snapshot JSON file
    values_path: Option<String>,

    /// Print the dependency set of every element
    #[arg(short, long)]
    deps: bool,

    /// Print a per-element explanation of the visibility outcome
    #[arg(short, long)]
    explain: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_resolution(form_path: String, values_path: Option<String>, deps: bool, explain: bool) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let form_json = fs::read_to_string(&form_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read form file '{}': {}", &form_path, e))
    });

    let values: serde_json::Value = if let Some(path) = values_path {
        let values_json = fs::read_to_string(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read values file '{}': {}", path, e))
        });
        serde_json::from_str(&values_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse values JSON: {}", e)))
    } else {
        println!("No values file provided. Using an empty snapshot.");
        serde_json::json!({})
    };
    let load_duration = load_start.elapsed();

    // --- 2. Form Parsing ---
    let parse_start = Instant::now();
    let form = Form::from_json(&form_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load form: {}", e)));
    let parse_duration = parse_start.elapsed();

    let element_count = form.iter_elements().count();
    let row_count = form.elements.len();
    println!(
        "\nLoaded form '{}' ({} elements across {} rows)",
        form.name, element_count, row_count
    );

    // --- 3. Visibility Resolution ---
    let resolve_start = Instant::now();
    let visibility = resolve_visibility(&form, &values);
    let resolve_duration = resolve_start.elapsed();

    println!("\nVisibility:");
    for element in form.iter_elements() {
        let visible = visibility.get(&element.id).copied().unwrap_or(true);
        println!(
            "  {} {} ({})",
            if visible { "[shown ]" } else { "[hidden]" },
            element.id,
            element.label
        );
        if explain {
            println!("           {}", explain_visibility(element, &values));
        }
    }

    if deps {
        println!("\nDependencies:");
        for (id, targets) in dependency_map(&form) {
            if targets.is_empty() {
                println!("  {} -> (none)", id);
            } else {
                println!("  {} -> {}", id, targets.join(", "));
            }
        }
    }

    // --- 4. Validation ---
    let validate_start = Instant::now();
    let builder = SchemaBuilder::new(form)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to prepare validator: {}", e)));
    let report = builder
        .schema(&values)
        .unwrap_or_else(|e| exit_with_error(&format!("Schema construction failed: {}", e)))
        .validate(&values);
    let validate_duration = validate_start.elapsed();

    println!("\nValidation: {}", if report.valid { "valid" } else { "invalid" });
    for (field, message) in &report.errors {
        println!("  {}: {}", field, message);
    }

    // --- 5. Summary ---
    let visible_count = visibility.values().filter(|v| **v).count();
    let total_duration = total_start.elapsed();

    println!("\n--- Form Summary ---");
    println!("Elements:        {}", element_count);
    println!("Visible:         {}", visible_count);
    println!("Hidden:          {}", element_count - visible_count);
    println!("Errors:          {}", report.errors.len());

    println!("\n--- Performance Summary ---");
    println!("File Loading:         {:?}", load_duration);
    println!("Form Parsing:         {:?}", parse_duration);
    println!("Visibility Pass:      {:?}", resolve_duration);
    println!("Schema + Validation:  {:?}", validate_duration);
    println!("-----------------------------");
    println!("Total Execution:      {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let form_path = cli.form_path.unwrap_or_else(|| {
        exit_with_error("Form path is required in non-interactive mode.");
    });

    run_resolution(form_path, cli.values_path, cli.deps, cli.explain);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Hyouji Interactive Mode ---");

    let form_path = prompt_for_input("Enter form path", Some("data/form.json"));
    let values_path_str =
        prompt_for_input("Enter values path (optional)", Some("data/values.json"));

    let values_path = if values_path_str.is_empty() {
        None
    } else {
        Some(values_path_str)
    };

    let explain = prompt_for_input("Explain visibility outcomes? [y/N]", Some("n"))
        .eq_ignore_ascii_case("y");

    run_resolution(form_path, values_path, true, explain);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
