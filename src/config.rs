use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_cpu_sample_ms")]
    pub cpu_sample_ms: u64,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
}

/// Warn/crit bounds in percent. `warn < crit` is a convention, not a rule:
/// inverted pairs are accepted and simply make the warning tier unreachable.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ThresholdPair {
    pub warn: f64,
    pub crit: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_cpu_thresholds")]
    pub cpu: ThresholdPair,
    #[serde(default = "default_memory_thresholds")]
    pub memory: ThresholdPair,
    #[serde(default = "default_disk_thresholds")]
    pub disk: ThresholdPair,
    #[serde(default = "default_swap_thresholds")]
    pub swap: ThresholdPair,
}

/// Foreground/background indexes into the 256-color terminal palette.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ColorPair {
    pub fg: u8,
    pub bg: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorsConfig {
    #[serde(default = "default_ok_colors")]
    pub ok: ColorPair,
    #[serde(default = "default_warning_colors")]
    pub warning: ColorPair,
    #[serde(default = "default_critical_colors")]
    pub critical: ColorPair,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cpu_sample_ms: default_cpu_sample_ms(),
            thresholds: ThresholdsConfig::default(),
            colors: ColorsConfig::default(),
        }
    }
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            cpu: default_cpu_thresholds(),
            memory: default_memory_thresholds(),
            disk: default_disk_thresholds(),
            swap: default_swap_thresholds(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            ok: default_ok_colors(),
            warning: default_warning_colors(),
            critical: default_critical_colors(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать файл конфигурации {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("не удалось разобрать YAML в {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("ошибка валидации конфигурации: {0}")]
    Validation(String),
}

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let path_display = path_ref.display().to_string();
        let text = fs::read_to_string(path_ref).map_err(|source| ConfigError::Read {
            path: path_display.clone(),
            source,
        })?;

        let cfg: Config = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path_display,
            source,
        })?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cpu_sample_ms < 1 {
            return Err(ConfigError::Validation(
                "cpu_sample_ms должно быть >= 1".to_string(),
            ));
        }

        let pairs = [
            ("cpu", &self.thresholds.cpu),
            ("memory", &self.thresholds.memory),
            ("disk", &self.thresholds.disk),
            ("swap", &self.thresholds.swap),
        ];
        for (name, pair) in pairs {
            if !(0.0..=100.0).contains(&pair.warn) {
                return Err(ConfigError::Validation(format!(
                    "thresholds.{name}.warn должно быть в диапазоне 0..100"
                )));
            }
            if !(0.0..=100.0).contains(&pair.crit) {
                return Err(ConfigError::Validation(format!(
                    "thresholds.{name}.crit должно быть в диапазоне 0..100"
                )));
            }
        }

        Ok(())
    }

    pub fn example_yaml() -> &'static str {
        include_str!("../config.yaml.example")
    }
}

const fn default_cpu_sample_ms() -> u64 {
    1000
}

const fn default_cpu_thresholds() -> ThresholdPair {
    ThresholdPair {
        warn: 80.0,
        crit: 90.0,
    }
}

const fn default_memory_thresholds() -> ThresholdPair {
    ThresholdPair {
        warn: 80.0,
        crit: 90.0,
    }
}

const fn default_disk_thresholds() -> ThresholdPair {
    ThresholdPair {
        warn: 70.0,
        crit: 90.0,
    }
}

const fn default_swap_thresholds() -> ThresholdPair {
    ThresholdPair {
        warn: 20.0,
        crit: 50.0,
    }
}

const fn default_ok_colors() -> ColorPair {
    ColorPair { fg: 17, bg: 190 }
}

const fn default_warning_colors() -> ColorPair {
    ColorPair { fg: 0, bg: 220 }
}

const fn default_critical_colors() -> ColorPair {
    ColorPair { fg: 255, bg: 196 }
}
