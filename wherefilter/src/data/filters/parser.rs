//! Filter parsing
//!
//! Splits the filter on whitespace and feeds the tokens through a five-state
//! grammar machine:
//!
//! | state      | accepts                         | next                          |
//! |------------|---------------------------------|-------------------------------|
//! | `AndOr`    | `AND` / `OR` (not before first) | `Not`                         |
//! | `Not`      | optional `NOT`                  | `Field`                       |
//! | `Field`    | identifier                      | `AndOr` if a conjunction follows, else `Operator` |
//! | `Operator` | operator, or `NOT LIKE`/`NOT ILIKE` | `Value`                   |
//! | `Value`    | any token but an operator/`NOT` | `AndOr`                       |
//!
//! Input is accepted when the tokens run out in `AndOr`.

use std::sync::Arc;

use crate::data::query::{Expr, WhereClauseBuilder};
use crate::data::schema::{FieldValidator, NoopValidator};
use crate::data::sql::Backend;

use super::builder::compose;
use super::error::FilterError;
use super::guard::check_forbidden_keywords;
use super::translate::{Translation, translate};
use super::types::{Condition, Conjunction, IdentifierPolicy, Operator};

/// Split on runs of whitespace; quote characters are ordinary characters
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

fn is_not(token: &str) -> bool {
    token.eq_ignore_ascii_case("NOT")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AndOr,
    Not,
    Field,
    Operator,
    Value,
}

struct StateMachine<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
    identifiers: IdentifierPolicy,
    current: Condition,
    conditions: Vec<Condition>,
}

impl<'a> StateMachine<'a> {
    fn new(tokens: Vec<&'a str>, identifiers: IdentifierPolicy) -> Self {
        Self {
            tokens,
            pos: 0,
            identifiers,
            current: Condition::default(),
            conditions: Vec::new(),
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    fn run(mut self) -> Result<Vec<Condition>, FilterError> {
        let mut state = State::AndOr;
        while let Some(token) = self.peek() {
            let next = match state {
                State::AndOr => self.and_or(token)?,
                State::Not => self.not(token),
                State::Field => self.field(token)?,
                State::Operator => self.operator(token)?,
                State::Value => self.value(token)?,
            };
            tracing::trace!(from = ?state, to = ?next, position = self.pos, "Filter state transition");
            state = next;
        }
        self.finish(state)
    }

    fn and_or(&mut self, token: &str) -> Result<State, FilterError> {
        let position = self.pos;
        let conjunction = match Conjunction::from_token(token) {
            Some(_) if self.conditions.is_empty() => {
                return Err(FilterError::LeadingConjunction {
                    token: token.to_string(),
                    position,
                });
            }
            Some(conjunction) => {
                self.pos += 1;
                conjunction
            }
            None if !self.conditions.is_empty() => {
                return Err(FilterError::ConjunctionExpected {
                    token: token.to_string(),
                    position,
                });
            }
            None => Conjunction::None,
        };

        if self.peek().is_none() {
            return Err(FilterError::MissingField {
                after: conjunction.as_str().to_string(),
                position: self.pos,
            });
        }

        self.current = Condition::new(conjunction);
        Ok(State::Not)
    }

    fn not(&mut self, token: &str) -> State {
        if is_not(token) {
            self.current.negated = true;
            self.pos += 1;
        }
        State::Field
    }

    fn field(&mut self, token: &str) -> Result<State, FilterError> {
        if Operator::from_token(token).is_some() || is_not(token) || !self.identifiers.accepts(token)
        {
            return Err(FilterError::UnexpectedField {
                token: token.to_string(),
                position: self.pos,
            });
        }
        self.current.field = token.to_string();
        self.pos += 1;

        match self.peek() {
            None => Err(FilterError::MissingOperator {
                field: token.to_string(),
                position: self.pos,
            }),
            // Bare boolean field: no operator, no value
            Some(next) if Conjunction::from_token(next).is_some() => {
                self.complete();
                Ok(State::AndOr)
            }
            Some(_) => Ok(State::Operator),
        }
    }

    fn operator(&mut self, token: &str) -> Result<State, FilterError> {
        let position = self.pos;
        let matched = if is_not(token) {
            self.tokens
                .get(position + 1)
                .and_then(|next| Operator::negated_from_token(next))
                .map(|op| (op, 2))
        } else {
            Operator::from_token(token).map(|op| (op, 1))
        };

        let Some((operator, width)) = matched else {
            return Err(FilterError::UnexpectedOperator {
                token: token.to_string(),
                position,
            });
        };
        self.current.operator = Some(operator);
        self.pos += width;

        if self.peek().is_none() {
            return Err(FilterError::MissingValue {
                field: self.current.field.clone(),
                position: self.pos,
            });
        }
        Ok(State::Value)
    }

    fn value(&mut self, token: &str) -> Result<State, FilterError> {
        // Case-sensitive: `not` is an acceptable value
        if Operator::from_token(token).is_some() || token == "NOT" || token.is_empty() {
            return Err(FilterError::UnexpectedValue {
                token: token.to_string(),
                position: self.pos,
            });
        }
        self.current.value = Some(token.to_string());
        self.pos += 1;
        self.complete();
        Ok(State::AndOr)
    }

    fn complete(&mut self) {
        self.conditions.push(std::mem::take(&mut self.current));
    }

    /// Map the state the tokens ran out in to a result
    fn finish(self, state: State) -> Result<Vec<Condition>, FilterError> {
        let position = self.tokens.len();
        match state {
            State::AndOr => Ok(self.conditions),
            State::Not => Err(FilterError::MissingField {
                after: self.current.conjunction.as_str().to_string(),
                position,
            }),
            State::Field => Err(FilterError::MissingField {
                after: "NOT".to_string(),
                position,
            }),
            State::Operator => Err(FilterError::MissingOperator {
                field: self.current.field,
                position,
            }),
            State::Value => Err(FilterError::MissingValue {
                field: self.current.field,
                position,
            }),
        }
    }
}

/// Parses filters and composes them onto a query builder
///
/// Holds only immutable settings, so one parser can serve any number of
/// concurrent calls as long as each call gets its own builder.
#[derive(Clone)]
pub struct FilterParser {
    identifiers: IdentifierPolicy,
    backend: Backend,
    validator: Arc<dyn FieldValidator>,
}

impl Default for FilterParser {
    fn default() -> Self {
        Self {
            identifiers: IdentifierPolicy::default(),
            backend: Backend::Postgres,
            validator: Arc::new(NoopValidator),
        }
    }
}

impl FilterParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier_policy(mut self, identifiers: IdentifierPolicy) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Placeholder style set on the builder (default: PostgreSQL `$N`)
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Validator consulted once per condition before translation
    pub fn with_validator(mut self, validator: Arc<dyn FieldValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Run the keyword guard and the grammar, returning the condition list
    pub fn parse_conditions(&self, input: &str) -> Result<Vec<Condition>, FilterError> {
        check_forbidden_keywords(input)?;
        let tokens = tokenize(input);
        let token_count = tokens.len();
        let conditions = StateMachine::new(tokens, self.identifiers).run()?;
        tracing::debug!(
            tokens = token_count,
            conditions = conditions.len(),
            "Parsed filter"
        );
        Ok(conditions)
    }

    /// Parse `input` and attach the resulting WHERE clause to `builder`
    ///
    /// Nothing is attached when parsing or validation fails. A filter using
    /// a regex operator (`~ ~* !~ !~*`) is attached as a single raw fragment
    /// with its values inlined: never pass untrusted input through that path
    /// without sanitizing it first.
    pub fn apply<B: WhereClauseBuilder>(&self, input: &str, builder: B) -> Result<B, FilterError> {
        let conditions = self.parse_conditions(input)?;
        for condition in &conditions {
            self.validator
                .validate(&condition.field, condition.value.as_deref())?;
        }

        let builder = builder.placeholder(self.backend);
        let builder = match translate(&conditions) {
            Translation::Structured(exprs) => exprs
                .into_iter()
                .fold(builder, |builder, (conjunction, expr)| {
                    compose(builder, conjunction, expr)
                }),
            Translation::Raw(clause) => {
                tracing::warn!(
                    clause = %clause,
                    "Regex operator in filter, attaching raw SQL without parameter binding"
                );
                builder.where_expr(Expr::raw(clause))
            }
        };
        Ok(builder)
    }
}

/// Parse with default settings: lenient identifiers, `$N` placeholders, no validation
pub fn parse_filter<B: WhereClauseBuilder>(input: &str, builder: B) -> Result<B, FilterError> {
    FilterParser::default().apply(input, builder)
}
