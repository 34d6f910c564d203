//! Domain entities
//!
//! Display records built per request, plus the constant content types.

pub mod category;
pub mod content;
pub mod gallery;
