//! # moodscan - Questionnaire Depression Screening
//!
//! Screens a 14-question mental health questionnaire into a depression level
//! ("No depression", "Mild", "Moderate", "Severe") with a distance-weighted
//! k-nearest-neighbors classifier trained on prior responses.
//!
//! This is a screening aid, not a diagnosis.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::collections::HashMap;
//! use moodscan::api::Screener;
//! use moodscan::screening::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Loads the dataset and trains once; reuse the screener afterwards.
//!     let screener = Screener::from_config(&Config::default())?;
//!     println!("Held-out accuracy: {:.1}%", screener.report().accuracy * 100.0);
//!
//!     let answers: HashMap<String, String> = moodscan::QUESTIONS
//!         .iter()
//!         .map(|q| (q.id.to_string(), "Rarely".to_string()))
//!         .collect();
//!
//!     let result = screener.assess(&answers)?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```
//!
//! ## Dataset
//!
//! A CSV file with a header row containing `Number`, `Depression State`, and
//! one column per question (see [`QUESTIONS`] for the names). Feature values
//! are integers from 0 to 5.
//!
//! ## Answers
//!
//! | Answer    | Weight |
//! |-----------|--------|
//! | Never     | 1      |
//! | Rarely    | 2      |
//! | Sometimes | 3      |
//! | Often     | 4      |
//! | Always    | 5      |
//!
//! Indonesian spellings (`Tidak Pernah`, `Jarang`, `Kadang-kadang`, `Sering`,
//! `Selalu`) are accepted with [`Locale::Indonesian`].
//!
//! ## Available Cargo Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `cli` | Include the `moodscan` binary | ✓ |
//!
//! ## Error Handling
//!
//! ```no_run
//! use moodscan::api::Screener;
//! use moodscan::error::ScreenError;
//! # use std::collections::HashMap;
//! # let answers = HashMap::new();
//! # let screener = Screener::from_config(&Default::default()).unwrap();
//!
//! match screener.assess(&answers) {
//!     Ok(result) => println!("Level: {}", result.level),
//!     Err(ScreenError::Incomplete(e)) => {
//!         eprintln!("Please answer: {:?}", e.questions_to_reprompt());
//!     }
//!     Err(e) => eprintln!("Screening failed: {}", e),
//! }
//! ```

// Public API modules
pub mod api;
pub mod error;

// Core modules
pub mod category;
pub mod locale;
pub mod questionnaire;
pub mod screening;

pub use category::Category;
pub use locale::Locale;
pub use questionnaire::{Answer, FeatureVector, Question, QUESTIONS, QUESTION_COUNT};
