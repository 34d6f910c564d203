//! Domain layer
//!
//! Contains pure data models with no external dependencies.
//! - `entities`: Display records and the portfolio categories
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
