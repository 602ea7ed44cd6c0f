//! langid - character-trigram language identification
//!
//! Each trained language is a unit vector of trigram frequencies. A query
//! is scored by the dot product of its raw trigram counts with every
//! language vector, and the best score wins unless several languages are
//! within a small tolerance of each other, in which case the result is a
//! tie and more text is needed.
//!
//! ```no_run
//! use langid::classifier::Classifier;
//! use langid::model::ModelStore;
//!
//! let store = ModelStore::load(std::path::Path::new("trained_model.bin"))?;
//! let result = Classifier::new(store.model()).classify("the cat sat on the mat")?;
//! println!("{result}");
//! # Ok::<(), langid::LangIdError>(())
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod train;

pub use classifier::{Classification, Classifier};
pub use error::{LangIdError, LangIdResult};
pub use model::{LanguageLabel, ModelStore, TrainedModel};
