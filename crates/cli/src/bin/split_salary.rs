use anyhow::{Result, anyhow};
use calculator::CalculatorSession;
use chrono::Utc;
use clap::Parser;
use models::Category;
use serde_json::{Value, json};
use std::path::PathBuf;
use utils::{round2, round4};

#[derive(Parser, Debug)]
#[command(name = "split-salary", about = "Split a net salary across the six spending categories.")]
struct Args {
    /// Net salary, localized text accepted (e.g. "5.000,00" or "5,000.00")
    salary: String,

    /// Optional path to settings.json (minimum salary, currency, default split)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Edits applied in order after the initial split: CATEGORY=PERCENT
    #[arg(long = "set-percentage", value_name = "CATEGORY=PCT")]
    set_percentage: Vec<String>,

    /// Edits applied in order after the initial split: CATEGORY=AMOUNT
    #[arg(long = "set-value", value_name = "CATEGORY=AMOUNT")]
    set_value: Vec<String>,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn parse_edit(spec: &str) -> Result<(Category, &str)> {
    let (name, value) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid edit '{}', expected CATEGORY=VALUE", spec))?;
    let category = Category::parse(name)
        .ok_or_else(|| anyhow!("unknown category '{}' in edit '{}'", name, spec))?;
    Ok((category, value))
}

/// JSON report for the current allocation. Currency amounts are rounded to
/// 2 decimals and shares to 4 so the document is stable across float dust.
fn build_report(session: &CalculatorSession) -> Value {
    let result = session.result().expect("report requires a computed result");
    let categories: Vec<_> = Category::ALL
        .iter()
        .map(|c| {
            json!({
                "category": c.as_str(),
                "amount": round2(result.amounts.get(*c)),
                "share": round4(session.shares().get(*c)),
            })
        })
        .collect();
    json!({
        "metadata": {
            "generated_at": Utc::now().to_rfc3339(),
            "minimum_salary": session.minimum_salary(),
            "currency_symbol": session.currency_symbol(),
        },
        "salary": session.salary(),
        "categories": categories,
        "total_allocated": round2(result.total_allocated),
        "remaining": round2(result.remaining),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();

    let mut session = CalculatorSession::from_optional_settings(args.settings.as_ref())?;
    tracing::debug!(
        minimum_salary = session.minimum_salary(),
        "session ready, calculating"
    );
    session.calculate(&args.salary);

    if let Some(err) = session.salary_error() {
        return Err(anyhow!("{}", err));
    }

    // Percentage edits first, then value edits, each list in argument order.
    for spec in &args.set_percentage {
        let (category, value) = parse_edit(spec)?;
        session.update_field_percentage(category, value);
    }
    for spec in &args.set_value {
        let (category, value) = parse_edit(spec)?;
        session.update_field_value(category, value);
    }

    let result = session
        .result()
        .ok_or_else(|| anyhow!("no allocation computed"))?;

    if args.json {
        let report = build_report(&session);
        if args.pretty {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", serde_json::to_string(&report)?);
        }
        return Ok(());
    }

    println!("Salary: {}", session.format_currency(session.salary()));
    println!();
    for category in Category::ALL {
        println!(
            "{:>14}  {:>6}%  {}",
            category.as_str(),
            session.percentage_strings().get(category),
            session.format_currency(result.amounts.get(category))
        );
    }
    println!();
    println!("Total allocated: {}", session.format_currency(result.total_allocated));
    println!("Remaining:       {}", session.format_currency(result.remaining));

    Ok(())
}
