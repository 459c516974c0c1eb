use anyhow::{Context, Result};
use clap::Parser;
use shared::DomainError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scheduling_engine::domain::entities::{MonthlyRestSetting, ScheduleInput};
use scheduling_engine::domain::ShiftGenerator;
use scheduling_engine::infrastructure::config::Settings;
use scheduling_engine::presentation::ShiftDataSerialize;

/// Generate a monthly staff shift table from a JSON dataset.
#[derive(Parser, Debug)]
#[command(name = "scheduling-engine", version, about)]
struct Cli {
    /// JSON dataset with staffs, tasks, requirements, absences, holidays,
    /// rest settings and the target year/month
    #[arg(long)]
    input: std::path::PathBuf,

    /// Override the target year from the dataset
    #[arg(long)]
    year: Option<i32>,

    /// Override the target month from the dataset
    #[arg(long)]
    month: Option<u32>,

    /// Additional rest days for the target month, overriding any stored
    /// rest setting
    #[arg(long)]
    additional_rest_days: Option<u32>,

    /// Override the workbook output directory
    #[arg(long)]
    output_dir: Option<String>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scheduling_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::new().context("cannot load settings")?;
    if let Some(directory) = cli.output_dir {
        settings.output.directory = directory;
    }

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read dataset {}", cli.input.display()))?;
    let mut input: ScheduleInput =
        serde_json::from_str(&raw).context("dataset is not valid JSON")?;
    if let Some(year) = cli.year {
        input.year = year;
    }
    if let Some(month) = cli.month {
        input.month = month;
    }
    if let Some(additional_days) = cli.additional_rest_days {
        let (year, month) = (input.year, input.month);
        match input
            .rest_settings
            .iter_mut()
            .find(|existing| existing.year == year && existing.month == month)
        {
            Some(existing) => existing.additional_days = additional_days,
            None => input.rest_settings.push(MonthlyRestSetting {
                year,
                month,
                additional_days,
            }),
        }
    }

    let generator = ShiftGenerator::new(settings);
    match generator.generate(&input) {
        Ok(result) => {
            let response = serde_json::json!({
                "download_url": format!("/{}", result.spreadsheet_path),
                "shift_data": ShiftDataSerialize::from(&result.plan),
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(error @ (DomainError::NoSolution(_) | DomainError::SolverFailure(_))) => {
            tracing::error!(%error, "shift generation failed");
            eprintln!("シフトを作成できませんでした。制約条件が厳しすぎるか、人が足りません。");
            std::process::exit(1);
        }
        Err(error) => Err(error.into()),
    }
}
