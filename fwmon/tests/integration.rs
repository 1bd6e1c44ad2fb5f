//! Integration tests for fwmon
//!
//! These tests run representative firmware logs and scenario tables through
//! the public API end to end.

use fwmon::{
    AnalysisError, LogAnalysis, MetricAggregate, MetricKind, MetricVerdict, ScenarioMetrics,
    ScenarioVerdict, SecurityFinding, ThresholdTable, analyze_value, default_thresholds,
    evaluate_scenario, evaluate_scenarios, summarize_evaluation,
};
use serde_json::{Value, json};

fn analyze(log: Value) -> LogAnalysis {
    analyze_value(&log).expect("log should be a sequence of events")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn low_load_log() -> Value {
    json!([
        {"event": "System Start", "timestamp_ms": 100, "metric": {"boot_status": "INIT", "mode": "NORMAL"}},
        {"event": "CPU Usage", "timestamp_ms": 1500, "metric": {"cpu_percent": 5.2, "mem_kbytes": 200, "power_mw": 15, "temperature_c": 35.5, "mode": "NORMAL"}},
        {"event": "Task Executed", "timestamp_ms": 1750, "metric": {"latency_us": 250, "cpu_percent": 6.1}},
        {"event": "CPU Usage", "timestamp_ms": 2500, "metric": {"cpu_percent": 4.8, "mem_kbytes": 205, "power_mw": 14, "temperature_c": 36.1, "mode": "NORMAL"}},
        {"event": "Peripheral Ready", "timestamp_ms": 3000, "metric": {"boot_status": "READY"}},
        {"event": "Task Executed", "timestamp_ms": 3100, "metric": {"latency_us": 150, "cpu_percent": 5.5}},
        {"event": "CPU Usage", "timestamp_ms": 3500, "metric": {"cpu_percent": 7.1, "mem_kbytes": 210, "power_mw": 18, "temperature_c": 37.0, "mode": "NORMAL"}},
        {"event": "Task Executed", "timestamp_ms": 3700, "metric": {"latency_us": 400, "cpu_percent": 8.5}},
        {"event": "System Idle", "timestamp_ms": 5000, "metric": {"boot_status": "COMPLETE"}}
    ])
}

fn boost_cycle_log() -> Value {
    json!([
        {"event": "System Start", "timestamp_ms": 100, "metric": {"boot_status": "INIT", "mode": "NORMAL", "power_mw": 20}},
        {"event": "Request Boost", "timestamp_ms": 500},
        {"event": "CPU Usage", "timestamp_ms": 800, "metric": {"mode": "BOOST", "power_mw": 60, "latency_us": 50}},
        {"event": "Exit Boost", "timestamp_ms": 2000},
        {"event": "CPU Usage", "timestamp_ms": 2500, "metric": {"mode": "NORMAL", "power_mw": 25}},
        {"event": "Request Boost", "timestamp_ms": 3000},
        {"event": "CPU Usage", "timestamp_ms": 3200, "metric": {"mode": "BOOST", "power_mw": 55}},
        {"event": "Peripheral Ready", "timestamp_ms": 4000, "metric": {"boot_status": "READY", "mode": "BOOST"}}
    ])
}

fn extreme_latency_log() -> Value {
    let mut events = vec![json!(
        {"event": "System Start", "timestamp_ms": 10, "metric": {"boot_status": "INIT"}}
    )];
    for i in 0..20 {
        events.push(json!({
            "event": format!("Task Executed {i}"),
            "timestamp_ms": 1000 + i,
            "metric": {"latency_us": 100}
        }));
    }
    events.push(json!(
        {"event": "Task Executed (OUTLIER)", "timestamp_ms": 10000, "metric": {"latency_us": 5000}}
    ));
    events.push(json!(
        {"event": "Peripheral Ready", "timestamp_ms": 15000, "metric": {"boot_status": "READY"}}
    ));
    Value::Array(events)
}

fn historical_scenarios() -> Vec<ScenarioMetrics> {
    serde_json::from_value(json!([
        {
            "scenario": "Low Load Boot",
            "metrics": {
                "Boot Timestamps": {"min": 100, "max": 3000, "avg": 1550},
                "CPU (%)": {"min": 4.8, "max": 6.1, "avg": 5.37},
                "Memory (KB)": {"min": 200, "max": 205, "avg": 202.5},
                "Power (mW)": {"min": 14, "max": 15, "avg": 14.5},
                "Temperature (°C)": {"min": 35.5, "max": 36.1, "avg": 35.8},
                "Latency (us)": {"min": 250, "max": 250, "avg": 250}
            }
        },
        {
            "scenario": "High Load Boot",
            "metrics": {
                "Boot Timestamps": {"min": 50, "max": 2100, "avg": 1075},
                "CPU (%)": {"min": 15.0, "max": 25.5, "avg": 20.2},
                "Memory (KB)": {"min": 350, "max": 380, "avg": 365},
                "Power (mW)": {"min": 35, "max": 35, "avg": 35},
                "Temperature (°C)": {"min": 45.0, "max": 50.0, "avg": 47.5},
                "Latency (us)": {"min": 550, "max": 950, "avg": 750}
            }
        },
        {
            "scenario": "Power Dip",
            "metrics": {
                "Power (mW)": {"min": 18, "max": 25, "avg": 21},
                "Boot Timestamps": {"min": 100, "max": 7500, "avg": 3800},
                "CPU (%)": {"min": 5.0, "max": 15.0, "avg": 10},
                "Temperature (°C)": {"min": 35.0, "max": 38.0, "avg": 36.5},
                "Latency (us)": {"min": 400, "max": 400, "avg": 400}
            }
        },
        {
            "scenario": "Resource Contention",
            "metrics": {
                "Boot Timestamps": {"min": 100, "max": 4500, "avg": 2300},
                "CPU (%)": {"min": 8.0, "max": 95.0, "avg": 50.75},
                "Power (mW)": {"min": 20, "max": 150, "avg": 65},
                "Temperature (°C)": {"min": 38.0, "max": 99.0, "avg": 60.67},
                "Memory (KB)": {"min": 300, "max": 950, "avg": 625},
                "Latency (us)": {"min": 7500, "max": 7500, "avg": 7500}
            }
        },
        {
            "scenario": "Thermal Stress",
            "metrics": {
                "Boot Timestamps": {"min": 500, "max": 7000, "avg": 4000},
                "CPU (%)": {"min": 10, "max": 90, "avg": 60},
                "Memory (KB)": {"min": 600, "max": 950, "avg": 800},
                "Power (mW)": {"min": 50, "max": 120, "avg": 90},
                "Temperature (°C)": {"min": 60, "max": 100, "avg": 90},
                "Latency (us)": {"min": 1000, "max": 6000, "avg": 4000}
            }
        },
        {
            "scenario": "Recovery",
            "metrics": {
                "Boot Timestamps": {"min": 100, "max": 5000, "avg": 3000},
                "CPU (%)": {"min": 2, "max": 15, "avg": 8},
                "Power (mW)": {"min": 15, "max": 40, "avg": 20},
                "Temperature (°C)": {"min": 30, "max": 40, "avg": 35},
                "Latency (us)": {"min": 500, "max": 2000, "avg": 1200}
            }
        }
    ]))
    .expect("scenario fixtures should deserialize")
}

// ---------------------------------------------------------------------------
// Log analysis
// ---------------------------------------------------------------------------

/// Test boot time and series statistics for a quiet run
#[test]
fn test_low_load_log() {
    let analysis = analyze(low_load_log());

    assert_eq!(analysis.boot_time_s, Some(2.9));
    assert!(analysis.security.is_none());
    // Only NORMAL observations: no boost at all
    assert_eq!(analysis.boost_duration_s, None);

    let cpu = analysis.metric(MetricKind::Cpu).unwrap();
    assert_eq!(cpu.sample_count, 6);
    assert_eq!(cpu.peak, 8.5);
    assert_eq!(cpu.min, 4.8);
    assert!(cpu.p95.is_none());

    let memory = analysis.metric(MetricKind::Memory).unwrap();
    assert_close(memory.average, 205.0);

    let latency = analysis.metric(MetricKind::Latency).unwrap();
    assert_eq!(latency.sample_count, 3);
    assert_eq!(latency.p95, Some(400.0));
    assert_close(latency.average, 800.0 / 3.0);
}

/// Test that a run ending in boost closes the open interval at the last event
#[test]
fn test_boost_cycle_ending_in_boost() {
    let analysis = analyze(boost_cycle_log());

    assert_close(analysis.boost_duration_s.unwrap(), 2.0);
    assert_close(analysis.boot_time_s.unwrap(), 3.9);

    let power = analysis.metric(MetricKind::Power).unwrap();
    assert_eq!(power.sample_count, 4);
    assert_close(power.average, 40.0);
    assert_eq!(power.peak, 60.0);
}

/// Test that an "Exit Boost" marker without readings closes the interval
#[test]
fn test_secured_boost_closed_by_exit_marker() {
    let analysis = analyze(json!([
        {"event": "System Start", "timestamp_ms": 100, "metric": {"boot_status": "INIT", "mode": "NORMAL"}},
        {"event": "Security Check Start", "timestamp_ms": 500},
        {"event": "Authentication Success", "timestamp_ms": 800, "metric": {"security_state": "SECURE", "auth_attempts": 0}},
        {"event": "Request Boost", "timestamp_ms": 900},
        {"event": "CPU Usage", "timestamp_ms": 1000, "metric": {"mode": "BOOST", "power_mw": 85, "temperature_c": 50.0}},
        {"event": "Task Executed", "timestamp_ms": 1500, "metric": {"latency_us": 100, "cpu_percent": 35.0}},
        {"event": "CPU Usage", "timestamp_ms": 2000, "metric": {"mode": "BOOST", "power_mw": 90, "temperature_c": 55.0}},
        {"event": "Task Executed", "timestamp_ms": 2500, "metric": {"latency_us": 80, "cpu_percent": 40.0}},
        {"event": "Exit Boost", "timestamp_ms": 3000},
        {"event": "CPU Usage", "timestamp_ms": 3200, "metric": {"mode": "NORMAL", "power_mw": 25, "temperature_c": 40.0}},
        {"event": "Peripheral Ready", "timestamp_ms": 4000, "metric": {"boot_status": "READY"}}
    ]));

    assert_close(analysis.boost_duration_s.unwrap(), 2.0);
    // A SECURE state is not a finding
    assert!(analysis.security.is_none());
}

/// Test short boost bursts separated by exit markers
#[test]
fn test_mode_oscillation() {
    let analysis = analyze(json!([
        {"event": "System Start", "timestamp_ms": 100, "metric": {"boot_status": "INIT", "mode": "NORMAL", "power_mw": 20}},
        {"event": "Request Boost", "timestamp_ms": 500},
        {"event": "CPU Usage", "timestamp_ms": 600, "metric": {"mode": "BOOST", "power_mw": 80, "latency_us": 100}},
        {"event": "Exit Boost", "timestamp_ms": 700},
        {"event": "CPU Usage", "timestamp_ms": 800, "metric": {"mode": "NORMAL", "power_mw": 30, "latency_us": 500}},
        {"event": "Request Boost", "timestamp_ms": 900},
        {"event": "CPU Usage", "timestamp_ms": 1000, "metric": {"mode": "BOOST", "power_mw": 75, "latency_us": 150}},
        {"event": "Peripheral Ready", "timestamp_ms": 1500, "metric": {"boot_status": "READY", "mode": "BOOST"}}
    ]));

    // 600..700 plus 1000..1500 (still boosted at the end of the log)
    assert_close(analysis.boost_duration_s.unwrap(), 0.6);
    assert_close(analysis.boot_time_s.unwrap(), 1.4);
}

/// Test counting of failed authentications and breach detections
#[test]
fn test_security_breach() {
    let analysis = analyze(json!([
        {"event": "System Start", "timestamp_ms": 100, "metric": {"boot_status": "INIT"}},
        {"event": "Authentication Failed", "timestamp_ms": 500, "metric": {"attempt_count": 1}},
        {"event": "CPU Usage", "timestamp_ms": 1000, "metric": {"cpu_percent": 5.0, "temperature_c": 30.0}},
        {"event": "Authentication Failed", "timestamp_ms": 1500, "metric": {"attempt_count": 2}},
        {"event": "Authentication Failed", "timestamp_ms": 1800, "metric": {"attempt_count": 3}},
        {"event": "SECURITY ALERT", "timestamp_ms": 2000, "metric": {"security_state": "BREACH_DETECTED"}},
        {"event": "Peripheral Ready", "timestamp_ms": 2500, "metric": {"boot_status": "READY"}}
    ]));

    let security = analysis.security.expect("findings expected");
    assert_eq!(security.get(SecurityFinding::FailedAuthAttempt), 3);
    assert_eq!(security.get(SecurityFinding::BreachDetection), 1);
    assert_eq!(security.len(), 2);
    assert_close(analysis.boot_time_s.unwrap(), 2.4);
    assert_eq!(analysis.boost_duration_s, None);
}

/// Test that a NORMAL-only run reports no boost time
#[test]
fn test_boost_denied_after_breach() {
    let analysis = analyze(json!([
        {"event": "System Start", "timestamp_ms": 100, "metric": {"boot_status": "INIT", "mode": "NORMAL"}},
        {"event": "Authentication Failed", "timestamp_ms": 500, "metric": {"attempt_count": 1}},
        {"event": "SECURITY ALERT", "timestamp_ms": 600, "metric": {"security_state": "BREACH_DETECTED"}},
        {"event": "Request Boost", "timestamp_ms": 1000},
        {"event": "CPU Usage", "timestamp_ms": 1500, "metric": {"mode": "NORMAL", "power_mw": 20, "temperature_c": 35.0}},
        {"event": "Task Executed", "timestamp_ms": 2000, "metric": {"latency_us": 500, "cpu_percent": 10.0}},
        {"event": "CPU Usage", "timestamp_ms": 2500, "metric": {"mode": "NORMAL", "power_mw": 22, "temperature_c": 36.0}},
        {"event": "Peripheral Ready", "timestamp_ms": 3000, "metric": {"boot_status": "READY"}}
    ]));

    assert_eq!(analysis.boost_duration_s, None);
    let security = analysis.security.unwrap();
    assert_eq!(security.get(SecurityFinding::FailedAuthAttempt), 1);
    assert_eq!(security.get(SecurityFinding::BreachDetection), 1);
}

/// Test that one latency outlier moves the peak but not the nearest-rank p95
#[test]
fn test_extreme_latency_p95_ignores_single_outlier() {
    let analysis = analyze(extreme_latency_log());

    let latency = analysis.metric(MetricKind::Latency).unwrap();
    assert_eq!(latency.sample_count, 21);
    assert_eq!(latency.p95, Some(100.0));
    assert_eq!(latency.peak, 5000.0);
    assert_eq!(latency.min, 100.0);
    assert_close(latency.average, 7000.0 / 21.0);
    assert_close(analysis.boot_time_s.unwrap(), 14.99);
}

/// Test peaks and boost time under resource contention
#[test]
fn test_resource_contention_peaks() {
    let analysis = analyze(json!([
        {"event": "System Start", "timestamp_ms": 100, "metric": {"boot_status": "INIT", "mode": "NORMAL"}},
        {"event": "CPU Usage", "timestamp_ms": 500, "metric": {"cpu_percent": 10.0, "power_mw": 25, "temperature_c": 38.0}},
        {"event": "Peripheral Ready", "timestamp_ms": 1500, "metric": {"boot_status": "READY"}},
        {"event": "Critical Task Start", "timestamp_ms": 2000},
        {"event": "CPU Usage", "timestamp_ms": 2050, "metric": {"mode": "BOOST", "cpu_percent": 95.0, "mem_kbytes": 950, "power_mw": 150, "temperature_c": 99.0}},
        {"event": "Task Executed", "timestamp_ms": 2060, "metric": {"latency_us": 7500, "cpu_percent": 90.0}},
        {"event": "CPU Usage", "timestamp_ms": 3500, "metric": {"mode": "NORMAL", "cpu_percent": 8.0, "mem_kbytes": 300, "power_mw": 20, "temperature_c": 45.0}}
    ]));

    assert_eq!(analysis.metric(MetricKind::Cpu).unwrap().peak, 95.0);
    assert_eq!(analysis.metric(MetricKind::Memory).unwrap().peak, 950.0);
    assert_eq!(analysis.metric(MetricKind::Power).unwrap().peak, 150.0);
    assert_eq!(analysis.metric(MetricKind::Temperature).unwrap().peak, 99.0);
    assert_eq!(analysis.metric(MetricKind::Latency).unwrap().p95, Some(7500.0));
    assert_close(analysis.boost_duration_s.unwrap(), 1.45);
    assert_close(analysis.boot_time_s.unwrap(), 1.4);
}

/// Test that untimed events still feed series statistics
#[test]
fn test_missing_timestamp_still_counts_readings() {
    let analysis = analyze(json!([
        {"event": "System Start", "timestamp_ms": 50, "metric": {"boot_status": "INIT"}},
        {"event": "CPU Usage", "metric": {"cpu_percent": 10.0, "mem_kbytes": 300, "power_mw": 30, "temperature_c": 42.0}},
        {"event": "Peripheral Ready", "timestamp_ms": 1000, "metric": {"boot_status": "READY"}}
    ]));

    assert_close(analysis.boot_time_s.unwrap(), 0.95);
    let cpu = analysis.metric(MetricKind::Cpu).unwrap();
    assert_eq!(cpu.sample_count, 1);
    assert_eq!(cpu.average, 10.0);
}

/// Test that an empty log reports absence rather than zeros
#[test]
fn test_zero_data_reports_absence() {
    let analysis = analyze(json!([]));

    assert!(analysis.is_empty());
    assert_eq!(analysis.boot_time_s, None);
    assert_eq!(analysis.boost_duration_s, None);
    assert!(analysis.security.is_none());
    for kind in MetricKind::ALL {
        assert!(analysis.metric(kind).is_none(), "{kind} should be absent");
    }
}

/// Test that non-sequence input is rejected as an invalid shape
#[test]
fn test_non_sequence_input_rejected() {
    let err = analyze_value(&json!("not a list")).unwrap_err();
    assert_eq!(err, AnalysisError::InvalidShape { found: "a string" });

    let err = analyze_value(&json!({"event": "System Start"})).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidShape { .. }));
}

// ---------------------------------------------------------------------------
// Threshold evaluation
// ---------------------------------------------------------------------------

/// Test the historical scenario table against the default thresholds
#[test]
fn test_historical_scenarios_against_default_thresholds() {
    let thresholds = default_thresholds();
    let records = evaluate_scenarios(&historical_scenarios(), &thresholds);

    let verdicts: Vec<(&str, ScenarioVerdict)> = records
        .iter()
        .map(|r| (r.name.as_str(), r.scenario_verdict))
        .collect();
    assert_eq!(
        verdicts,
        vec![
            ("Low Load Boot", ScenarioVerdict::Pass),
            ("High Load Boot", ScenarioVerdict::Pass),
            ("Power Dip", ScenarioVerdict::Mixed),
            ("Resource Contention", ScenarioVerdict::Fail),
            ("Thermal Stress", ScenarioVerdict::Fail),
            ("Recovery", ScenarioVerdict::Mixed),
        ]
    );

    // Missing metrics are judged too, as SKIP
    assert_eq!(records[2].verdicts["Memory (KB)"], MetricVerdict::Skip);
    assert_eq!(records[5].verdicts["Memory (KB)"], MetricVerdict::Skip);
    assert_eq!(records[3].verdicts["Latency (us)"], MetricVerdict::Fail);
    assert_eq!(records[4].verdicts["Temperature (°C)"], MetricVerdict::Fail);
    assert_eq!(records[4].verdicts["Power (mW)"], MetricVerdict::Pass);

    let summary = summarize_evaluation(&records);
    assert_eq!(summary.total_scenarios, 6);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.mixed, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.metrics.pass, 32);
    assert_eq!(summary.metrics.fail, 2);
    assert_eq!(summary.metrics.skip, 2);
    assert!(summary.has_failures());
}

/// Test that an average equal to the ceiling passes
#[test]
fn test_ceiling_is_inclusive() {
    let thresholds = ThresholdTable::new().with("CPU (%)", 80.0);

    let at = ScenarioMetrics::new("At").with("CPU (%)", MetricAggregate::new(70.0, 90.0, 80.0));
    let above = ScenarioMetrics::new("Above").with("CPU (%)", MetricAggregate::new(70.0, 90.0, 81.0));

    assert_eq!(evaluate_scenario(&at, &thresholds).scenario_verdict, ScenarioVerdict::Pass);
    assert_eq!(evaluate_scenario(&above, &thresholds).scenario_verdict, ScenarioVerdict::Fail);
}

/// Test that evaluating a scenario twice gives the same record
#[test]
fn test_evaluation_is_idempotent() {
    let thresholds = default_thresholds();
    for scenario in historical_scenarios() {
        let first = evaluate_scenario(&scenario, &thresholds);
        let second = evaluate_scenario(&scenario, &thresholds);
        assert_eq!(first, second);
    }
}

/// Test that an analyzed log can be judged like a pre-aggregated scenario
#[test]
fn test_analyzed_log_evaluates_like_a_scenario() {
    let analysis = analyze(boost_cycle_log());
    let scenario = ScenarioMetrics::from_analysis("boost_cycle", &analysis);

    let boot = scenario.metrics["Boot Timestamps"];
    assert_eq!(boot.min, Some(100.0));
    assert_eq!(boot.max, Some(4000.0));
    assert_eq!(boot.avg, Some(2050.0));

    let record = evaluate_scenario(&scenario, &default_thresholds());
    assert_eq!(record.verdicts["Power (mW)"], MetricVerdict::Pass);
    assert_eq!(record.verdicts["Latency (us)"], MetricVerdict::Pass);
    assert_eq!(record.verdicts["CPU (%)"], MetricVerdict::Skip);
    assert_eq!(record.scenario_verdict, ScenarioVerdict::Mixed);
}

/// Test that an empty threshold table skips every scenario
#[test]
fn test_empty_threshold_table_skips_everything() {
    let records = evaluate_scenarios(&historical_scenarios(), &ThresholdTable::new());
    assert!(records.iter().all(|r| r.scenario_verdict == ScenarioVerdict::Skip));
}
