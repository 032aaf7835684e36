//! Four classic object-oriented patterns expressed with Rust traits:
//! Template Method, Adapter, Decorator and Strategy.
//!
//! Each pattern lives in its own module and narrates what it does through a
//! [`narrate::Narrator`]. The binaries under `src/bin/` are the drivers.

pub mod adapter;
pub mod decorator;
pub mod error;
pub mod narrate;
pub mod strategy;
pub mod template_method;

pub use error::{MinerStep, PatternError, Result};
