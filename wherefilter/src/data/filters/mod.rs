//! Filter expressions
//!
//! Translates `[AND|OR] [NOT] <field> <operator> <value>` chains into WHERE
//! clauses on a [`WhereClauseBuilder`](crate::data::query::WhereClauseBuilder).
//!
//! ## Usage
//!
//! ```
//! use wherefilter::data::filters::parse_filter;
//! use wherefilter::data::query::SelectBuilder;
//!
//! let builder = SelectBuilder::select(["*"]).from("cats");
//! let builder = parse_filter("Foo.Bar.Beta > 21 AND Alpha.Bar != 'hello'", builder).unwrap();
//! let (sql, params) = builder.to_sql().unwrap();
//!
//! assert_eq!(sql, "SELECT * FROM cats WHERE Foo.Bar.Beta > $1 AND (Alpha.Bar <> $2)");
//! assert_eq!(params, vec!["21", "'hello'"]);
//! ```
//!
//! Regex operators (`~ ~* !~ !~*`) cannot be bound as parameters; a filter
//! containing one is attached as raw SQL text. Treat that path as a trust
//! boundary.

mod builder;
mod error;
mod guard;
mod parser;
mod translate;
mod types;

pub use builder::compose;
pub use error::FilterError;
pub use guard::{FORBIDDEN_KEYWORDS, check_forbidden_keywords};
pub use parser::{FilterParser, parse_filter, tokenize};
pub use translate::{BARE_FIELD_VALUE, Translation, raw_clause, translate, translate_condition};
pub use types::{Condition, Conjunction, IdentifierPolicy, Operator};
