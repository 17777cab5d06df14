//! Password strength meter library
//!
//! Scores generated passwords against six character and length criteria
//! and interprets responses from the password generation endpoint.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_QUANTITY_MIN` / `PWD_QUANTITY_MAX`: Allowed password length range
//!   (default: `8..=50`)
//! - `PWD_EVAL_DEBOUNCE_MS`: Delay before an async evaluation runs (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{score, StrengthLevel};
//!
//! let result = score("Abcdefghij1!");
//! assert_eq!(result.score, 6);
//! assert_eq!(result.level, StrengthLevel::Strong);
//!
//! for line in &result.report {
//!     println!("{}", line);
//! }
//! ```
//!
//! Handling a generate round trip:
//!
//! ```rust
//! use pwd_meter::{interpret_response, MeterConfig, Quantity, StrengthIndicator};
//!
//! let config = MeterConfig::default();
//! let quantity = Quantity::parse("16", &config.quantity).unwrap();
//! assert_eq!(quantity.to_form_body(), "quantity=16");
//!
//! let generated = interpret_response(200, r#"{"password":"Abcdefgh1","length":9}"#).unwrap();
//! let indicator = StrengthIndicator::from_result(&generated.strength);
//! assert_eq!(indicator.text, "Medium");
//! ```

// Internal modules
mod config;
mod criteria;
mod evaluator;
mod indicator;
mod request;
mod response;
mod sections;
mod strength;

// Public API
pub use config::{ConfigError, MeterConfig, QuantityRange};
pub use criteria::{Criteria, CriterionKind, CriterionReport, GOOD_LENGTH, MIN_LENGTH, SPECIAL_CHARS};
pub use evaluator::{ScoreResult, evaluate_password_strength, score};
pub use indicator::StrengthIndicator;
pub use request::{FORM_CONTENT_TYPE, GENERATE_PATH, Quantity, QuantityError};
pub use response::{GenerateError, GeneratedPassword, interpret_response};
pub use strength::{MAX_SCORE, StrengthLevel};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
