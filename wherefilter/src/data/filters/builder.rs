//! Expression composition
//!
//! The first condition is attached as is. Every later condition is wrapped
//! in its own single-member AND or OR group, and the builder ANDs all parts
//! together, giving `c1 AND (c2) AND (c3)`. An `OR` condition does not
//! disjoin with the condition before it.

use crate::data::query::{Expr, WhereClauseBuilder};

use super::types::Conjunction;

/// Attach one translated expression according to its conjunction
pub fn compose<B: WhereClauseBuilder>(builder: B, conjunction: Conjunction, expr: Expr) -> B {
    match conjunction {
        Conjunction::None => builder.where_expr(expr),
        Conjunction::And => builder.where_expr(Expr::and(vec![expr])),
        Conjunction::Or => builder.where_expr(Expr::or(vec![expr])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::query::SelectBuilder;

    #[test]
    fn first_condition_is_unwrapped() {
        let builder = compose(
            SelectBuilder::select(["*"]),
            Conjunction::None,
            Expr::eq("a", "1"),
        );
        assert_eq!(builder.wheres(), &[Expr::eq("a", "1")]);
    }

    #[test]
    fn later_conditions_are_grouped() {
        let builder = SelectBuilder::select(["*"]);
        let builder = compose(builder, Conjunction::None, Expr::eq("a", "1"));
        let builder = compose(builder, Conjunction::And, Expr::eq("b", "2"));
        let builder = compose(builder, Conjunction::Or, Expr::eq("c", "3"));

        assert_eq!(
            builder.wheres(),
            &[
                Expr::eq("a", "1"),
                Expr::and(vec![Expr::eq("b", "2")]),
                Expr::or(vec![Expr::eq("c", "3")]),
            ]
        );
    }
}
