//! Wordle Helper
//!
//! Narrows a word list to the answers consistent with a game's feedback and
//! picks the next guess by expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::api::{ConstraintInput, WordleHelper};
//!
//! let helper = WordleHelper::new();
//! helper.initialize_embedded().unwrap();
//!
//! let opening = helper.get_optimal_first_guess().unwrap();
//! let history = [ConstraintInput::new(opening, &["X", "X", "Y", "X", "X"])];
//! let next = helper.get_best_guess(&history).unwrap();
//! assert!(next.is_some());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod corpus;

// Scoring and selection
pub mod solver;

// String-level engine interface
pub mod api;

pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use api::{ConstraintInput, WordleHelper};
pub use error::{EngineError, InitError, InputError};
