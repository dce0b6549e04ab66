//! Expression tree, JSON form and local evaluation.

use ozone_features::{Feature, PropertyValue, number_text};
use serde::{Serialize, Serializer};
use serde_json::{Value as JsonValue, json};

use crate::error::EvalError;

/// Result of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing property or explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Number.
    Number(f64),
    /// String.
    String(String),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    /// Text the map library's `to-string` produces for this value.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_text(*n),
            Value::String(s) => s.clone(),
        }
    }

    fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => number_json(*n),
            Value::String(s) => JsonValue::String(s.clone()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Anything an expression can read properties from.
pub trait PropertySource {
    /// Returns the named property, or `None` when absent.
    fn property_value(&self, name: &str) -> Option<Value>;
}

impl PropertySource for Feature {
    fn property_value(&self, name: &str) -> Option<Value> {
        self.property(name).map(|p| match p {
            PropertyValue::Text(s) => Value::String(s.to_string()),
            PropertyValue::Number(n) => Value::Number(n),
        })
    }
}

impl PropertySource for serde_json::Map<String, JsonValue> {
    fn property_value(&self, name: &str) -> Option<Value> {
        match self.get(name)? {
            JsonValue::Null => Some(Value::Null),
            JsonValue::Bool(b) => Some(Value::Bool(*b)),
            JsonValue::Number(n) => n.as_f64().map(Value::Number),
            JsonValue::String(s) => Some(Value::String(s.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }
}

/// A declarative map expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Constant value.
    Literal(Value),
    /// `["get", name]`
    Get(String),
    /// `["to-string", e]`
    ToString(Box<Expression>),
    /// `["to-number", e]`
    ToNumber(Box<Expression>),
    /// `["==", a, b]`
    Equals(Box<Expression>, Box<Expression>),
    /// `["<=", a, b]`
    LessOrEqual(Box<Expression>, Box<Expression>),
    /// `["all", ...]`
    All(Vec<Expression>),
    /// `["case", cond, out, ..., fallback]`
    Case {
        /// `(condition, output)` pairs tried in order.
        branches: Vec<(Expression, Expression)>,
        /// Output when no condition holds.
        fallback: Box<Expression>,
    },
    /// `["interpolate", ["linear"], input, x0, y0, ...]`
    InterpolateLinear {
        /// Numeric input.
        input: Box<Expression>,
        /// `(input, output)` stops in ascending input order.
        stops: Vec<(f64, f64)>,
    },
}

impl Expression {
    /// Constant.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    /// Property lookup.
    pub fn get(name: impl Into<String>) -> Self {
        Expression::Get(name.into())
    }

    /// String coercion.
    pub fn to_string_of(inner: Expression) -> Self {
        Expression::ToString(Box::new(inner))
    }

    /// Number coercion.
    pub fn to_number_of(inner: Expression) -> Self {
        Expression::ToNumber(Box::new(inner))
    }

    /// Equality.
    pub fn equals(a: Expression, b: Expression) -> Self {
        Expression::Equals(Box::new(a), Box::new(b))
    }

    /// `a <= b`.
    pub fn less_or_equal(a: Expression, b: Expression) -> Self {
        Expression::LessOrEqual(Box::new(a), Box::new(b))
    }

    /// Conjunction.
    pub fn all(children: Vec<Expression>) -> Self {
        Expression::All(children)
    }

    /// Serialises to the map library's JSON-array form.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Expression::Literal(v) => v.to_json(),
            Expression::Get(name) => json!(["get", name]),
            Expression::ToString(e) => json!(["to-string", e.to_json()]),
            Expression::ToNumber(e) => json!(["to-number", e.to_json()]),
            Expression::Equals(a, b) => json!(["==", a.to_json(), b.to_json()]),
            Expression::LessOrEqual(a, b) => json!(["<=", a.to_json(), b.to_json()]),
            Expression::All(children) => {
                let mut out = vec![json!("all")];
                out.extend(children.iter().map(Expression::to_json));
                JsonValue::Array(out)
            }
            Expression::Case { branches, fallback } => {
                let mut out = vec![json!("case")];
                for (cond, output) in branches {
                    out.push(cond.to_json());
                    out.push(output.to_json());
                }
                out.push(fallback.to_json());
                JsonValue::Array(out)
            }
            Expression::InterpolateLinear { input, stops } => {
                let mut out = vec![json!("interpolate"), json!(["linear"]), input.to_json()];
                for &(x, y) in stops {
                    out.push(number_json(x));
                    out.push(number_json(y));
                }
                JsonValue::Array(out)
            }
        }
    }

    /// Evaluates against one feature's properties.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError`] when an operator receives operands it cannot
    /// handle (for example a non-boolean child of `all`).
    pub fn evaluate<P: PropertySource + ?Sized>(&self, props: &P) -> Result<Value, EvalError> {
        match self {
            Expression::Literal(v) => Ok(v.clone()),
            Expression::Get(name) => Ok(props.property_value(name).unwrap_or(Value::Null)),
            Expression::ToString(e) => Ok(Value::String(e.evaluate(props)?.to_display_string())),
            Expression::ToNumber(e) => to_number(e.evaluate(props)?).map(Value::Number),
            Expression::Equals(a, b) => {
                let (a, b) = (a.evaluate(props)?, b.evaluate(props)?);
                Ok(Value::Bool(a == b))
            }
            Expression::LessOrEqual(a, b) => {
                match (a.evaluate(props)?, b.evaluate(props)?) {
                    (Value::Number(x), Value::Number(y)) => Ok(Value::Bool(x <= y)),
                    (Value::String(x), Value::String(y)) => Ok(Value::Bool(x <= y)),
                    (x, _) => Err(EvalError::TypeMismatch {
                        op: "<=",
                        expected: "two numbers or two strings",
                        found: x.type_name(),
                    }),
                }
            }
            Expression::All(children) => {
                for child in children {
                    if !expect_bool("all", child.evaluate(props)?)? {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            }
            Expression::Case { branches, fallback } => {
                for (cond, output) in branches {
                    if expect_bool("case", cond.evaluate(props)?)? {
                        return output.evaluate(props);
                    }
                }
                fallback.evaluate(props)
            }
            Expression::InterpolateLinear { input, stops } => {
                let x = match input.evaluate(props)? {
                    Value::Number(x) => x,
                    other => {
                        return Err(EvalError::TypeMismatch {
                            op: "interpolate",
                            expected: "number",
                            found: other.type_name(),
                        });
                    }
                };
                Ok(Value::Number(interpolate_linear(stops, x)))
            }
        }
    }

    /// `true` when the expression evaluates to `true`; evaluation errors
    /// count as non-matching.
    pub fn matches<P: PropertySource + ?Sized>(&self, props: &P) -> bool {
        matches!(self.evaluate(props), Ok(Value::Bool(true)))
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn expect_bool(op: &'static str, value: Value) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(EvalError::TypeMismatch {
            op,
            expected: "boolean",
            found: other.type_name(),
        }),
    }
}

fn to_number(value: Value) -> Result<f64, EvalError> {
    match value {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
        Value::Number(n) => Ok(n),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| EvalError::NotANumber { value: s }),
    }
}

fn interpolate_linear(stops: &[(f64, f64)], x: f64) -> f64 {
    let (Some(&(first_x, first_y)), Some(&(last_x, last_y))) = (stops.first(), stops.last()) else {
        return x;
    };
    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }
    for pair in stops.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        if x <= x1 {
            return y0 + (x - x0) * (y1 - y0) / (x1 - x0);
        }
    }
    last_y
}

/// Integral values as JSON integers, so `33` stays `33` rather than `33.0`.
fn number_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        json!(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
    }
}
