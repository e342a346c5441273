use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use intro_grader::config::AppConfig;
use intro_grader::error::AppError;
use intro_grader::grading::{Grader, ScoreReport};
use intro_grader::nlp::NlpToolkit;

use crate::infra::load_sample;

#[derive(Args, Debug)]
pub(crate) struct GradeArgs {
    /// Transcript file to score; defaults to the configured sample text
    pub(crate) file: Option<PathBuf>,
    /// Intended speaking duration in seconds
    #[arg(long, default_value_t = 60)]
    pub(crate) duration_seconds: u32,
    /// Print the raw report as JSON instead of formatted text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_grade(args: GradeArgs) -> Result<(), AppError> {
    let GradeArgs {
        file,
        duration_seconds,
        json,
    } = args;

    let config = AppConfig::load()?;
    let (text, source) = match file {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            (text, path.display().to_string())
        }
        None => {
            let sample = load_sample(&config.grading.sample_path);
            (sample.text, sample.source)
        }
    };

    let grader = Grader::new(NlpToolkit::baseline());
    let report = grader.grade(&text, duration_seconds)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report, &source, duration_seconds);
    }

    Ok(())
}

pub(crate) fn render_report(report: &ScoreReport, source: &str, duration_seconds: u32) {
    println!("Self-introduction evaluation");
    println!(
        "Source: {} ({} seconds, evaluated {})",
        source,
        duration_seconds,
        Local::now().format("%Y-%m-%d")
    );

    println!("\nFinal score: {}/100", report.total);

    for entry in &report.dimensions {
        println!("\n{}: {}", entry.dimension.label(), entry.points);
        for line in &entry.feedback {
            println!("- {line}");
        }
        if !entry.coverage_log.is_empty() {
            println!("  Coverage detail:");
            for detail in &entry.coverage_log {
                println!("  * {detail}");
            }
        }
    }
}
