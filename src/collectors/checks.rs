use crate::collectors::{system, DiskSample};
use crate::config::{Config, ThresholdPair};
use crate::status::{Status, StatusCode};
use std::time::Duration;
use sysinfo::System;
use tracing::debug;

/// Runs the four checks in fixed order: CPU, memory, disks, swap. The order
/// matters downstream, it is the tie-break between equally severe results.
pub fn run_checks(system: &mut System, cfg: &Config) -> Vec<Status> {
    let cpu = system::cpu_percent(system, Duration::from_millis(cfg.cpu_sample_ms));
    let memory = system::memory_percent(system);
    let disks = system::disk_usage(system);
    let swap = system::swap_percent(system);
    debug!(cpu, memory, swap, "собраны системные метрики");

    let checks = vec![
        check_cpu_usage(cpu, &cfg.thresholds.cpu),
        check_memory_usage(memory, &cfg.thresholds.memory),
        check_disk_usage(&disks, &cfg.thresholds.disk),
        check_swap_usage(swap, &cfg.thresholds.swap),
    ];
    for check in &checks {
        debug!(result = %check, "проверка завершена");
    }
    checks
}

pub fn check_cpu_usage(usage: f64, thresholds: &ThresholdPair) -> Status {
    Status::new(classify(usage, thresholds), format!("CPU: {usage}%"))
}

pub fn check_memory_usage(usage: f64, thresholds: &ThresholdPair) -> Status {
    Status::new(classify(usage, thresholds), format!("Memory: {usage}%"))
}

pub fn check_swap_usage(usage: f64, thresholds: &ThresholdPair) -> Status {
    Status::new(classify(usage, thresholds), format!("Swap: {usage}%"))
}

/// First partition over `crit` wins, else the first strictly between `warn`
/// and `crit`. A partition sitting exactly on `crit` lands in neither bucket.
pub fn check_disk_usage(disks: &[DiskSample], thresholds: &ThresholdPair) -> Status {
    if let Some(disk) = disks.iter().find(|d| d.used_percent > thresholds.crit) {
        return Status::new(
            StatusCode::Critical,
            format!("Disk {}: {}%", disk.mount, disk.used_percent),
        );
    }
    if let Some(disk) = disks
        .iter()
        .find(|d| d.used_percent > thresholds.warn && d.used_percent < thresholds.crit)
    {
        return Status::new(
            StatusCode::Warning,
            format!("Disk {}: {}%", disk.mount, disk.used_percent),
        );
    }
    Status::new(StatusCode::Ok, "Disks OK")
}

// Thresholds are strict: a value exactly equal to a bound is not flagged.
fn classify(usage: f64, thresholds: &ThresholdPair) -> StatusCode {
    if usage > thresholds.crit {
        StatusCode::Critical
    } else if usage > thresholds.warn {
        StatusCode::Warning
    } else {
        StatusCode::Ok
    }
}
