//! Query builder
//!
//! A small SELECT builder that filters are composed onto. Expressions bind
//! their values through [`SqlParams`], so rendered SQL only ever contains
//! placeholders, except for [`Expr::Raw`] fragments.
//!
//! ## Usage
//!
//! ```
//! use wherefilter::data::query::{Expr, SelectBuilder, WhereClauseBuilder};
//! use wherefilter::data::sql::Backend;
//!
//! let (sql, params) = SelectBuilder::select(["*"])
//!     .from("cats")
//!     .where_expr(Expr::eq("name", "Tom"))
//!     .placeholder(Backend::Postgres)
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(sql, "SELECT * FROM cats WHERE name = $1");
//! assert_eq!(params, vec!["Tom"]);
//! ```

mod builder;
mod error;
mod expr;
mod params;

pub use builder::{SelectBuilder, WhereClauseBuilder};
pub use error::QueryError;
pub use expr::{CompareOp, Expr};
pub use params::SqlParams;
