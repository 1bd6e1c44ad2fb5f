//! Output Formatting
//!
//! Human-readable output for analysis reports: per-log findings and series
//! summaries, per-scenario verdicts with status icons, and a closing summary.

use fwmon_core::LogAnalysis;
use fwmon_logic::{MetricVerdict, ScenarioVerdict};
use fwmon_report::{LogStatus, Report, format_seconds};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("fwmon Report\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    if let Some(build) = &report.meta.build {
        output.push_str(&format!("Build: {}\n", build));
    }
    output.push('\n');

    if !report.logs.is_empty() {
        output.push_str("Logs\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for entry in &report.logs {
            let icon = match entry.status {
                LogStatus::Analyzed => "✓",
                LogStatus::Failed => "✗",
            };
            output.push_str(&format!("  {} {}\n", icon, entry.name));

            if let Some(analysis) = &entry.analysis {
                format_analysis(&mut output, analysis);
            }
            if let Some(failure) = &entry.failure {
                output.push_str(&format!("      error: {}\n", failure.message));
            }
            output.push('\n');
        }
    }

    if !report.scenarios.is_empty() {
        output.push_str("Scenarios\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let width = report
            .scenarios
            .iter()
            .flat_map(|s| s.verdicts.keys())
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(16);

        for record in &report.scenarios {
            let icon = match record.scenario_verdict {
                ScenarioVerdict::Pass => "✓",
                ScenarioVerdict::Fail => "✗",
                ScenarioVerdict::Mixed => "◐",
                ScenarioVerdict::Skip => "⊘",
            };
            output.push_str(&format!(
                "  {} {} [{}]\n",
                icon, record.name, record.scenario_verdict
            ));

            for (metric, verdict) in &record.verdicts {
                let avg = record
                    .metrics
                    .get(metric)
                    .and_then(|aggregate| aggregate.avg)
                    .map(|avg| format!("{:.2}", avg))
                    .unwrap_or_else(|| "-".to_string());
                let marker = if *verdict == MetricVerdict::Fail { "  <-" } else { "" };
                output.push_str(&format!(
                    "      {:<width$}  avg {:>10}  {}{}\n",
                    metric,
                    avg,
                    verdict,
                    marker,
                    width = width
                ));
            }
            output.push('\n');
        }
    }

    // Summary
    let summary = &report.summary;
    output.push_str("Summary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    if summary.total_logs > 0 {
        output.push_str(&format!(
            "  Logs: {}  Analyzed: {}  Rejected: {}\n",
            summary.total_logs, summary.analyzed_logs, summary.failed_logs
        ));
    }
    let evaluation = &summary.evaluation;
    if evaluation.total_scenarios > 0 {
        output.push_str(&format!(
            "  Scenarios: {}  Passed: {}  Failed: {}  Mixed: {}  Skipped: {}\n",
            evaluation.total_scenarios,
            evaluation.passed,
            evaluation.failed,
            evaluation.mixed,
            evaluation.skipped
        ));
    }
    output.push_str(&format!("  Duration: {:.2} ms\n", summary.total_duration_ms));

    output
}

fn format_analysis(output: &mut String, analysis: &LogAnalysis) {
    if analysis.is_empty() {
        output.push_str("      no usable telemetry\n");
        return;
    }

    match analysis.boot_time_s {
        Some(seconds) => output.push_str(&format!("      boot time: {}\n", format_seconds(seconds))),
        None => output.push_str("      boot time: undetermined\n"),
    }
    if let Some(seconds) = analysis.boost_duration_s {
        output.push_str(&format!("      boost: {}\n", format_seconds(seconds)));
    }
    if let Some(findings) = &analysis.security {
        let parts: Vec<String> = findings
            .iter()
            .map(|(finding, count)| format!("{}: {}", finding.label(), count))
            .collect();
        output.push_str(&format!("      security: {}\n", parts.join(", ")));
    }

    for (kind, stats) in &analysis.metrics {
        output.push_str(&format!(
            "      {:<24} avg {:.2}  peak {:.2}  min {:.2}",
            kind.label(),
            stats.average,
            stats.peak,
            stats.min
        ));
        if let Some(p95) = stats.p95 {
            output.push_str(&format!("  p95 {:.2}", p95));
        }
        output.push_str(&format!("  samples {}\n", stats.sample_count));
    }
}
