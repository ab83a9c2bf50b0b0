//! Serde-facing indicator catalogue.
//!
//! Configuration names an ordered list of these specs; an unrecognized
//! indicator name fails at deserialization, before any computation runs.

use feeder_core::error::IndicatorError;
use feeder_core::traits::Indicator;
use serde::{Deserialize, Serialize};

use crate::{Ac, Adx, Apo, Cci, Cho, Ema, Ma, Macd, Mom, Ppo, Roc, Rsi, Wad, Wpr};

/// One requested indicator with its parameters.
///
/// Field defaults mirror the upstream analytical defaults (RSI 14,
/// MACD 12/26/9, CHO 3/10, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndicatorSpec {
    Ma {
        window: usize,
    },
    Ema {
        window: usize,
    },
    Cho {
        #[serde(default = "default_cho_fast")]
        fast: usize,
        #[serde(default = "default_cho_slow")]
        slow: usize,
    },
    Adx {
        #[serde(default = "default_adx_window")]
        window: usize,
    },
    Cci {
        #[serde(default = "default_cci_window")]
        window: usize,
    },
    Macd {
        #[serde(default = "default_macd_fast")]
        fast: usize,
        #[serde(default = "default_macd_slow")]
        slow: usize,
        #[serde(default = "default_macd_signal")]
        signal: usize,
    },
    Mom {
        #[serde(default = "default_mom_window")]
        window: usize,
    },
    Ppo {
        #[serde(default = "default_macd_fast")]
        fast: usize,
        #[serde(default = "default_macd_slow")]
        slow: usize,
    },
    Apo {
        #[serde(default = "default_apo_fast")]
        fast: usize,
        #[serde(default = "default_apo_slow")]
        slow: usize,
    },
    Rsi {
        #[serde(default = "default_rsi_window")]
        window: usize,
    },
    Roc {
        #[serde(default = "default_roc_window")]
        window: usize,
    },
    Wad {
        #[serde(default = "default_wad_window")]
        window: usize,
    },
    Wpr {
        #[serde(default = "default_rsi_window")]
        window: usize,
    },
    Ac {
        #[serde(default = "default_mom_window")]
        window: usize,
        #[serde(default = "default_mom_window")]
        momentum_window: usize,
    },
}

fn default_cho_fast() -> usize {
    3
}
fn default_cho_slow() -> usize {
    10
}
fn default_adx_window() -> usize {
    50
}
fn default_cci_window() -> usize {
    20
}
fn default_macd_fast() -> usize {
    12
}
fn default_macd_slow() -> usize {
    26
}
fn default_macd_signal() -> usize {
    9
}
fn default_mom_window() -> usize {
    5
}
fn default_apo_fast() -> usize {
    5
}
fn default_apo_slow() -> usize {
    10
}
fn default_rsi_window() -> usize {
    14
}
fn default_roc_window() -> usize {
    10
}
fn default_wad_window() -> usize {
    10
}

impl IndicatorSpec {
    /// Instantiate the indicator, validating its parameters.
    pub fn build(&self, normalize: bool) -> Result<Box<dyn Indicator>, IndicatorError> {
        Ok(match *self {
            IndicatorSpec::Ma { window } => Box::new(Ma::new(window, normalize)?),
            IndicatorSpec::Ema { window } => Box::new(Ema::new(window, normalize)?),
            IndicatorSpec::Cho { fast, slow } => Box::new(Cho::new(fast, slow, normalize)?),
            IndicatorSpec::Adx { window } => Box::new(Adx::new(window, normalize)?),
            IndicatorSpec::Cci { window } => Box::new(Cci::new(window, normalize)?),
            IndicatorSpec::Macd { fast, slow, signal } => {
                Box::new(Macd::new(fast, slow, signal, normalize)?)
            }
            IndicatorSpec::Mom { window } => Box::new(Mom::new(window, normalize)?),
            IndicatorSpec::Ppo { fast, slow } => Box::new(Ppo::new(fast, slow, normalize)?),
            IndicatorSpec::Apo { fast, slow } => Box::new(Apo::new(fast, slow, normalize)?),
            IndicatorSpec::Rsi { window } => Box::new(Rsi::new(window, normalize)?),
            IndicatorSpec::Roc { window } => Box::new(Roc::new(window, normalize)?),
            IndicatorSpec::Wad { window } => Box::new(Wad::new(window, normalize)?),
            IndicatorSpec::Wpr { window } => Box::new(Wpr::new(window, normalize)?),
            IndicatorSpec::Ac {
                window,
                momentum_window,
            } => Box::new(Ac::new(window, momentum_window, normalize)?),
        })
    }

    /// The standard run: the fixed list computed for every ticker when
    /// the configuration names none.
    pub fn default_run() -> Vec<IndicatorSpec> {
        let mut specs = Vec::new();
        for window in [1, 2, 3, 5, 10, 12, 25, 200] {
            specs.push(IndicatorSpec::Roc { window });
        }
        for window in [7, 14, 50, 200] {
            specs.push(IndicatorSpec::Adx { window });
        }
        specs.push(IndicatorSpec::Cho { fast: 3, slow: 10 });
        for window in [7, 50, 200] {
            specs.push(IndicatorSpec::Ema { window });
        }
        specs.push(IndicatorSpec::Macd {
            fast: 12,
            slow: 26,
            signal: 9,
        });
        specs.push(IndicatorSpec::Wad { window: 10 });
        specs.push(IndicatorSpec::Ac {
            window: 5,
            momentum_window: 5,
        });
        specs.push(IndicatorSpec::Cci { window: 20 });
        specs.push(IndicatorSpec::Mom { window: 5 });
        specs.push(IndicatorSpec::Ppo { fast: 12, slow: 26 });
        specs.push(IndicatorSpec::Rsi { window: 14 });
        specs.push(IndicatorSpec::Wpr { window: 14 });
        specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_names() {
        let spec = IndicatorSpec::Macd {
            fast: 12,
            slow: 26,
            signal: 9,
        };
        let indicator = spec.build(false).unwrap();
        assert_eq!(indicator.name(), "MACD_12_26_9");
        assert_eq!(indicator.columns().len(), 3);
    }

    #[test]
    fn test_build_rejects_bad_params() {
        let spec = IndicatorSpec::Rsi { window: 0 };
        assert!(spec.build(false).is_err());
    }

    #[test]
    fn test_default_run_column_names_unique() {
        let specs = IndicatorSpec::default_run();
        let mut names = Vec::new();
        for spec in &specs {
            names.extend(spec.build(false).unwrap().columns());
        }
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_unknown_kind_fails_deserialization() {
        let toml = "kind = \"obv\"\nwindow = 5";
        assert!(toml::from_str::<IndicatorSpec>(toml).is_err());
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let spec: IndicatorSpec = toml::from_str("kind = \"rsi\"").unwrap();
        assert_eq!(spec, IndicatorSpec::Rsi { window: 14 });

        let spec: IndicatorSpec = toml::from_str("kind = \"macd\"\nfast = 5").unwrap();
        assert_eq!(
            spec,
            IndicatorSpec::Macd {
                fast: 5,
                slow: 26,
                signal: 9
            }
        );
    }
}
