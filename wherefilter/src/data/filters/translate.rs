//! Condition translation
//!
//! Maps each condition's operator and negation to a query expression.
//! Negation never wraps an expression in `NOT (...)`; it substitutes the
//! complement operator instead (`=` <-> `<>`, `>` <-> `<=`, `<` <-> `>=`,
//! `LIKE` <-> `NOT LIKE`, `ILIKE` <-> `NOT ILIKE`).

use crate::data::query::{CompareOp, Expr};

use super::types::{Condition, Conjunction, Operator};

/// Literal a bare field is compared against
///
/// This is text, not a SQL boolean: `active` becomes `active = $1` bound to
/// `"TRUE"`.
pub const BARE_FIELD_VALUE: &str = "TRUE";

/// Result of translating a whole condition list
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// One expression per condition, paired with the conjunction that attaches it
    Structured(Vec<(Conjunction, Expr)>),
    /// The whole list as filter text, for conditions only SQL text can express
    Raw(String),
}

/// Translate conditions in source order
///
/// A single regex condition anywhere in the list switches the whole list to
/// [`Translation::Raw`].
pub fn translate(conditions: &[Condition]) -> Translation {
    let mut exprs = Vec::with_capacity(conditions.len());
    for condition in conditions {
        match translate_condition(condition) {
            Some(expr) => exprs.push((condition.conjunction, expr)),
            None => return Translation::Raw(raw_clause(conditions)),
        }
    }
    Translation::Structured(exprs)
}

/// Structured expression for one condition, `None` for regex operators
pub fn translate_condition(condition: &Condition) -> Option<Expr> {
    let Some(operator) = condition.operator else {
        return Some(bare_field_expr(&condition.field, condition.negated));
    };

    let operator = if condition.negated {
        operator.complement()
    } else {
        operator
    };
    let compare = compare_op(operator)?;
    let value = condition.value.clone().unwrap_or_default();
    Some(Expr::compare(condition.field.clone(), compare, value))
}

fn bare_field_expr(field: &str, negated: bool) -> Expr {
    if negated {
        Expr::not_eq(field, BARE_FIELD_VALUE)
    } else {
        Expr::eq(field, BARE_FIELD_VALUE)
    }
}

fn compare_op(operator: Operator) -> Option<CompareOp> {
    match operator {
        Operator::Eq => Some(CompareOp::Eq),
        Operator::NotEq | Operator::LtGt => Some(CompareOp::NotEq),
        Operator::Gt => Some(CompareOp::Gt),
        Operator::GtOrEq => Some(CompareOp::GtOrEq),
        Operator::Lt => Some(CompareOp::Lt),
        Operator::LtOrEq => Some(CompareOp::LtOrEq),
        Operator::Like => Some(CompareOp::Like),
        Operator::NotLike => Some(CompareOp::NotLike),
        Operator::ILike => Some(CompareOp::ILike),
        Operator::NotILike => Some(CompareOp::NotILike),
        Operator::Match | Operator::IMatch | Operator::NotMatch | Operator::NotIMatch => None,
    }
}

/// Re-serialize every condition, space-joined, in source order
pub fn raw_clause(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(Condition::to_raw)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(negated: bool, operator: Option<Operator>, value: Option<&str>) -> Condition {
        Condition {
            conjunction: Conjunction::None,
            negated,
            field: "f".to_string(),
            operator,
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn plain_operators_map_directly() {
        let expr = translate_condition(&condition(false, Some(Operator::Gt), Some("21")));
        assert_eq!(expr, Some(Expr::gt("f", "21")));
    }

    #[test]
    fn negation_uses_complement() {
        let cases = [
            (Operator::Eq, Expr::not_eq("f", "v")),
            (Operator::NotEq, Expr::eq("f", "v")),
            (Operator::LtGt, Expr::eq("f", "v")),
            (Operator::Gt, Expr::lt_or_eq("f", "v")),
            (Operator::GtOrEq, Expr::lt("f", "v")),
            (Operator::Lt, Expr::gt_or_eq("f", "v")),
            (Operator::LtOrEq, Expr::gt("f", "v")),
            (Operator::Like, Expr::not_like("f", "v")),
            (Operator::ILike, Expr::not_ilike("f", "v")),
        ];
        for (op, expected) in cases {
            let expr = translate_condition(&condition(true, Some(op), Some("v")));
            assert_eq!(expr, Some(expected), "negated {:?}", op);
        }
    }

    #[test]
    fn negated_compound_cancels_out() {
        let expr = translate_condition(&condition(true, Some(Operator::NotLike), Some("v")));
        assert_eq!(expr, Some(Expr::like("f", "v")));
    }

    #[test]
    fn bare_field_compares_to_true_text() {
        assert_eq!(
            translate_condition(&condition(false, None, None)),
            Some(Expr::eq("f", "TRUE"))
        );
        assert_eq!(
            translate_condition(&condition(true, None, None)),
            Some(Expr::not_eq("f", "TRUE"))
        );
    }

    #[test]
    fn regex_operator_has_no_structured_form() {
        assert_eq!(
            translate_condition(&condition(false, Some(Operator::Match), Some("'a'"))),
            None
        );
        assert_eq!(
            translate_condition(&condition(true, Some(Operator::NotIMatch), Some("'a'"))),
            None
        );
    }

    #[test]
    fn regex_anywhere_switches_whole_list_to_raw() {
        let conditions = vec![
            condition(false, Some(Operator::Eq), Some("1")),
            Condition {
                conjunction: Conjunction::And,
                negated: true,
                field: "name".to_string(),
                operator: Some(Operator::IMatch),
                value: Some("'^a'".to_string()),
            },
        ];
        assert_eq!(
            translate(&conditions),
            Translation::Raw("f = 1 AND NOT name ~* '^a'".to_string())
        );
    }

    #[test]
    fn structured_keeps_conjunctions() {
        let mut second = condition(false, Some(Operator::Lt), Some("3"));
        second.conjunction = Conjunction::Or;
        let conditions = vec![condition(false, None, None), second];

        assert_eq!(
            translate(&conditions),
            Translation::Structured(vec![
                (Conjunction::None, Expr::eq("f", "TRUE")),
                (Conjunction::Or, Expr::lt("f", "3")),
            ])
        );
    }
}
