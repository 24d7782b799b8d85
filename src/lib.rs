//! Password policy evaluation library
//!
//! Scores a password, maps the score to a complexity tier, estimates how long
//! a brute-force attack would take, and validates the password against a
//! configurable [`PasswordPolicy`].
//!
//! # Features
//!
//! - `async` (default): Enables cancellable evaluation delivered over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: Custom path to the common password list read by
//!   [`CommonPasswordList::from_env`] (default: `./assets/10k-most-common.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{CommonPasswordList, PasswordEvaluator, PasswordPolicy};
//! use secrecy::SecretString;
//!
//! let policy = PasswordPolicy::builder()
//!     .minimum_length(10)
//!     .disallow_common_passwords(true)
//!     .build()
//!     .expect("valid policy");
//!
//! // Usually loaded once at startup with `CommonPasswordList::from_env()`
//! let common = CommonPasswordList::from_entries(["password", "123456", "qwerty"]);
//! let evaluator = PasswordEvaluator::new(policy, common);
//!
//! let password = SecretString::new("1st \"GOOD\" Password!".to_string().into());
//! let evaluation = evaluator.evaluate(&password);
//!
//! assert!(evaluation.validation.is_pass());
//! println!("Score: {}", evaluation.score);
//! println!("Complexity: {}", evaluation.complexity);
//! ```

mod breakdown;
mod common;
mod complexity;
mod error;
mod evaluator;
mod policy;
mod validation;

pub mod analysis;
pub mod charset;

// Public API
pub use breakdown::{Contribution, ScoreBreakdown};
pub use common::{COMMON_PASSWORDS_PATH_ENV, CommonPasswordList, CommonPasswordLookup};
pub use complexity::Complexity;
pub use error::ConfigError;
pub use evaluator::{Evaluation, PasswordEvaluator};
pub use policy::{DEFAULT_KEYS_PER_SECOND, Multipliers, PasswordPolicy, PolicyBuilder};
pub use validation::{Check, Validation};

#[cfg(feature = "async")]
pub use evaluator::EVALUATION_DEBOUNCE;
