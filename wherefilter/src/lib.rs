//! Filter expression to SQL WHERE clause translation
//!
//! See [`data::filters`] for the grammar and [`data::query`] for the builder
//! the clauses are composed onto.

pub mod app;
pub mod core;
pub mod data;
pub mod utils;
