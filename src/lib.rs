//! Rule-based translation of English into fantasy dialects
//!
//! Each dialect is a fixed set of ordered lexical substitution rules,
//! grammar transforms and randomized flourishes. The [`Dispatcher`] routes
//! text to one dialect or to all of them at once.
//!
//! ```ignore
//! use oath_dialects::{Dialect, DialectEngine, RngSource, Translator};
//!
//! let engine = DialectEngine::for_dialect(Dialect::Lord)?;
//! let text = engine.translate("Are you my friend?", &mut RngSource::thread())?;
//! assert!(text.ends_with(", pray tell?"));
//! ```

pub mod config;
pub mod dialects;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod finalize;
pub mod flourish;
pub mod grammar;
pub mod loader;
pub mod mock;
pub mod random;
pub mod rules;

pub use config::Config;
pub use dialects::Dialect;
pub use dispatcher::{BatchEntry, BatchRecord, Dispatcher};
pub use engine::{DialectDefinition, DialectEngine, Translator};
pub use error::{DialectError, DialectResult};
pub use random::{RandomSource, RngSource, Silent};
