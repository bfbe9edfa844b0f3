use crate::collectors::DiskSample;
use std::thread;
use std::time::Duration;
use sysinfo::{CpuExt, DiskExt, System, SystemExt};
use tracing::debug;

/// Average CPU load across cores over `window`. sysinfo needs two refreshes
/// separated by the sampling window to produce a usage delta.
pub fn cpu_percent(system: &mut System, window: Duration) -> f64 {
    system.refresh_cpu();
    thread::sleep(window);
    system.refresh_cpu();

    if system.cpus().is_empty() {
        return 0.0;
    }
    let sum: f32 = system.cpus().iter().map(|c| c.cpu_usage()).sum();
    round_percent(sum as f64 / system.cpus().len() as f64)
}

pub fn memory_percent(system: &mut System) -> f64 {
    system.refresh_memory();
    if system.total_memory() == 0 {
        return 0.0;
    }
    round_percent(system.used_memory() as f64 / system.total_memory() as f64 * 100.0)
}

/// Swap load in percent; hosts without swap report 0.
pub fn swap_percent(system: &mut System) -> f64 {
    system.refresh_memory();
    if system.total_swap() == 0 {
        return 0.0;
    }
    round_percent(system.used_swap() as f64 / system.total_swap() as f64 * 100.0)
}

pub fn disk_usage(system: &mut System) -> Vec<DiskSample> {
    system.refresh_disks_list();
    system.refresh_disks();

    let samples: Vec<DiskSample> = system
        .disks()
        .iter()
        .map(|d| {
            let total = d.total_space();
            let used = total.saturating_sub(d.available_space());
            let used_percent = if total > 0 {
                round_percent(used as f64 / total as f64 * 100.0)
            } else {
                0.0
            };
            DiskSample {
                mount: d.mount_point().to_string_lossy().to_string(),
                used_percent,
            }
        })
        .collect();

    debug!(disk_count = samples.len(), "собраны данные по разделам");
    samples
}

// One decimal place, the same precision the status line prints.
fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_percent_keeps_one_decimal() {
        assert_eq!(round_percent(37.4561), 37.5);
        assert_eq!(round_percent(95.0), 95.0);
        assert_eq!(round_percent(0.04), 0.0);
    }
}
