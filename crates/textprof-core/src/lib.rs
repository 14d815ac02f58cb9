//! Text profiling: size, classification, frequency, Unicode metadata,
//! numeric and palindrome facets of a single input string.

pub mod app_config;
pub mod chartable;
pub mod classify;
pub mod config;
pub mod error;
pub mod metrics;
pub mod numeric;
pub mod palindrome;
pub mod profile;
pub mod shape;

pub use app_config::{AppConfig, OutputFormat};
pub use chartable::{CharacterTable, FrequencyEntry, NO_NAME};
pub use classify::{CharClass, ClassCounts};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use metrics::SizeMetrics;
pub use numeric::NumericInterpretation;
pub use palindrome::PalindromeResult;
pub use profile::{profile, Profile};
pub use shape::ShapeFlags;
