//! Startup configuration from positional arguments.
//!
//! `width height cellSize liveFraction [updatesPerSecond]`. Bad input never
//! stops the program: [`Config::resolve`] falls back to [`Config::default`]
//! and hands the error back so the caller can print [`USAGE`].

use std::error::Error;
use std::fmt;

use crate::scheduler::FALLBACK_UPDATES_PER_SECOND;

pub const USAGE: &str = "\
Usage: life-gui [width height cellSize distribution_pct [updates_per_sec]]
Example: life-gui 800 600 5 0.3 15";

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 768;
pub const DEFAULT_CELL_SIZE: u32 = 5;
/// Genesis threshold; a cell is born alive with probability `1 - distribution`.
pub const DEFAULT_DISTRIBUTION: f64 = 0.7;
pub const DEFAULT_UPDATES_PER_SECOND: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Some arguments were given, but fewer than the four required.
    WrongArgumentCount(usize),
    /// An argument did not parse as a finite number.
    InvalidNumber { name: &'static str, value: String },
    /// An argument parsed but leaves no room for even one cell.
    OutOfRange { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArgumentCount(count) => {
                write!(f, "incorrect number of arguments provided ({count})")
            }
            Self::InvalidNumber { name, value } => {
                write!(f, "invalid number format for {name}: '{value}'")
            }
            Self::OutOfRange { name, value } => write!(f, "{name} out of range: {value}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Edge length of a cell in pixels.
    pub cell_size: u32,
    /// `1 - clamp(liveFraction, 0, 1)`.
    pub distribution: f64,
    pub updates_per_second: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            distribution: DEFAULT_DISTRIBUTION,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
        }
    }
}

impl Config {
    /// Parse positional arguments. An empty list yields the defaults.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Config, ConfigError> {
        if args.is_empty() {
            return Ok(Config::default());
        }
        if args.len() < 4 {
            return Err(ConfigError::WrongArgumentCount(args.len()));
        }

        let width = parse_dimension("width", args[0].as_ref())?;
        let height = parse_dimension("height", args[1].as_ref())?;
        let cell_size = parse_dimension("cellSize", args[2].as_ref())?;
        let live_fraction = parse_float("distribution", args[3].as_ref())?;

        let mut updates_per_second = DEFAULT_UPDATES_PER_SECOND;
        if let Some(arg) = args.get(4) {
            updates_per_second = parse_float("updatesPerSecond", arg.as_ref())?;
            if updates_per_second <= 0.0 {
                log::warn!(
                    "updates per second must be positive, got {updates_per_second}; using {FALLBACK_UPDATES_PER_SECOND}"
                );
                updates_per_second = FALLBACK_UPDATES_PER_SECOND;
            }
        }

        if cell_size > width.min(height) {
            return Err(ConfigError::OutOfRange { name: "cellSize", value: cell_size.to_string() });
        }

        let config = Config {
            width,
            height,
            cell_size,
            distribution: 1.0 - live_fraction.clamp(0.0, 1.0),
            updates_per_second,
        };
        log::info!(
            "Configuration: {}x{}, Cell Size: {}, Live%: {:.2}, UPS: {}",
            config.width,
            config.height,
            config.cell_size,
            config.live_probability(),
            config.updates_per_second
        );
        Ok(config)
    }

    /// Like [`Config::from_args`], but any error is replaced by the full
    /// default configuration. The error is returned alongside so the caller
    /// can show [`USAGE`].
    pub fn resolve<S: AsRef<str>>(args: &[S]) -> (Config, Option<ConfigError>) {
        match Config::from_args(args) {
            Ok(config) => (config, None),
            Err(err) => {
                log::warn!("{err}. Using default values.");
                (Config::default(), Some(err))
            }
        }
    }

    /// `(floor(width / cell_size), floor(height / cell_size))`.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.width / self.cell_size) as usize,
            (self.height / self.cell_size) as usize,
        )
    }

    /// Probability that a cell starts alive at genesis.
    pub fn live_probability(&self) -> f64 {
        1.0 - self.distribution
    }
}

fn parse_dimension(name: &'static str, value: &str) -> Result<u32, ConfigError> {
    let parsed: u32 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value: value.to_string() })?;
    if parsed == 0 {
        return Err(ConfigError::OutOfRange { name, value: value.to_string() });
    }
    Ok(parsed)
}

fn parse_float(name: &'static str, value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber { name, value: value.to_string() }),
    }
}
