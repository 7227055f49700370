//! Output formatting for run reports and the step listing
//!
//! JSON and YAML serialize the report types directly; the human format is a
//! compact summary for terminals.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pipeline::{Criticality, MigrationReport, MigrationStep, RunStatus, StepOutcome};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// A row of `nextport steps`
#[derive(Debug, Clone, Serialize)]
pub struct StepInfo {
    pub pipeline: String,
    pub order: usize,
    pub name: String,
    pub criticality: Criticality,
    pub description: String,
}

impl StepInfo {
    pub fn list(pipeline: &str, steps: &[Box<dyn MigrationStep>]) -> Vec<StepInfo> {
        steps
            .iter()
            .enumerate()
            .map(|(i, step)| StepInfo {
                pipeline: pipeline.to_string(),
                order: i + 1,
                name: step.name().to_string(),
                criticality: step.criticality(),
                description: step.description().to_string(),
            })
            .collect()
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_report(&self, report: &MigrationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize report to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    pub fn format_steps(&self, steps: &[StepInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(steps).context("Failed to serialize steps to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(steps).context("Failed to serialize steps to YAML")
            }
            OutputFormat::Human => Ok(self.format_steps_human(steps)),
        }
    }

    fn format_report_human(&self, report: &MigrationReport) -> String {
        let mut output = String::new();

        match &report.status {
            RunStatus::Completed if report.count(StepOutcome::Failed) == 0 => {
                output.push_str(&format!("\u{2713} {} complete\n", report.pipeline));
            }
            RunStatus::Completed => {
                output.push_str(&format!(
                    "\u{26A0} {} complete with failures\n",
                    report.pipeline
                ));
            }
            RunStatus::Aborted { step, .. } => {
                output.push_str(&format!(
                    "\u{2717} {} aborted at {}\n",
                    report.pipeline, step
                ));
            }
        }
        output.push_str(RULE);
        output.push_str("\n\n");
        output.push_str(&format!("Project: {}\n\n", report.project.display()));

        for (i, record) in report.steps.iter().enumerate() {
            let connector = if i + 1 == report.steps.len() {
                "\u{2514}"
            } else {
                "\u{251C}"
            };
            let marker = match record.outcome {
                StepOutcome::Applied => "\u{2713}",
                StepOutcome::Skipped => "-",
                StepOutcome::Failed => "\u{2717}",
            };
            output.push_str(&format!(
                "{}\u{2500} {} {:<24} {}\n",
                connector, marker, record.step, record.detail
            ));
        }

        output.push_str(&format!(
            "\n{} applied, {} skipped, {} failed in {}ms\n",
            report.count(StepOutcome::Applied),
            report.count(StepOutcome::Skipped),
            report.count(StepOutcome::Failed),
            report.duration_ms
        ));

        if let RunStatus::Aborted { error, .. } = &report.status {
            output.push_str(&format!("\nError: {}\n", error));
        }

        output
    }

    fn format_steps_human(&self, steps: &[StepInfo]) -> String {
        let mut output = String::new();
        let mut current = "";

        for info in steps {
            if info.pipeline != current {
                if !current.is_empty() {
                    output.push('\n');
                }
                current = &info.pipeline;
                output.push_str(&format!("nextport {}\n", info.pipeline));
                output.push_str(RULE);
                output.push('\n');
            }
            output.push_str(&format!(
                "{:>2}. {:<24} {:<12} {}\n",
                info.order,
                info.name,
                info.criticality.as_str(),
                info.description
            ));
        }

        output
    }
}
