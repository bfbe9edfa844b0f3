mod collectors;
mod config;
mod render;
mod status;

use clap::Parser;
use collectors::checks::run_checks;
use config::Config;
use render::{format_status_line, select_status};
use sysinfo::SystemExt;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tmux-status")]
#[command(version)]
struct Cli {
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    print_default_config: bool,
    #[arg(long)]
    cpu_sample_ms: Option<u64>,
    #[arg(long)]
    cpu_warn: Option<f64>,
    #[arg(long)]
    cpu_crit: Option<f64>,
    #[arg(long)]
    memory_warn: Option<f64>,
    #[arg(long)]
    memory_crit: Option<f64>,
    #[arg(long)]
    disk_warn: Option<f64>,
    #[arg(long)]
    disk_crit: Option<f64>,
    #[arg(long)]
    swap_warn: Option<f64>,
    #[arg(long)]
    swap_crit: Option<f64>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if cli.print_default_config {
        println!("{}", Config::example_yaml());
        return;
    }

    let mut cfg = match &cli.config {
        Some(path) => match Config::load_from_file(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                error!(error = %err, "не удалось загрузить конфигурацию");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    apply_overrides(&mut cfg, &cli);
    if let Err(err) = cfg.validate() {
        error!(error = %err, "некорректные пороги в аргументах запуска");
        std::process::exit(1);
    }

    let mut system = sysinfo::System::new();
    let checks = run_checks(&mut system, &cfg);
    let (text, pair) = select_status(&checks, &cfg.colors);
    println!("{}", format_status_line(pair, &text));
}

fn apply_overrides(cfg: &mut Config, cli: &Cli) {
    if let Some(v) = cli.cpu_sample_ms {
        cfg.cpu_sample_ms = v;
    }
    if let Some(v) = cli.cpu_warn {
        cfg.thresholds.cpu.warn = v;
    }
    if let Some(v) = cli.cpu_crit {
        cfg.thresholds.cpu.crit = v;
    }
    if let Some(v) = cli.memory_warn {
        cfg.thresholds.memory.warn = v;
    }
    if let Some(v) = cli.memory_crit {
        cfg.thresholds.memory.crit = v;
    }
    if let Some(v) = cli.disk_warn {
        cfg.thresholds.disk.warn = v;
    }
    if let Some(v) = cli.disk_crit {
        cfg.thresholds.disk.crit = v;
    }
    if let Some(v) = cli.swap_warn {
        cfg.thresholds.swap.warn = v;
    }
    if let Some(v) = cli.swap_crit {
        cfg.thresholds.swap.crit = v;
    }
}

// stdout carries exactly the status line tmux consumes; logs go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
