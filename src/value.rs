use serde::Serialize;
use std::fmt;

/// A single statistic value, normalized to the most specific type it can represent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// exact base-10 integer
    Int(i64),
    /// decimal or exponential notation
    Float(f64),
    /// anything else, kept verbatim
    Text(String),
}

/// A table entry: one value token is stored bare, two or more as a vector
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Stat {
    Scalar(Value),
    Vector(Vec<Value>),
}

// gem5 prints "nan" and "inf" for undefined ratios, keep them as text
fn is_float_literal(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

/// Convert a raw token: integer first, then float, otherwise the original string
pub fn normalize(token: &str) -> Value {
    if let Ok(value) = token.parse::<i64>() {
        return Value::Int(value);
    }
    if is_float_literal(token) {
        // out-of-range literals such as 1e400 overflow to inf, keep them verbatim
        if let Ok(value) = token.parse::<f64>() {
            if value.is_finite() {
                return Value::Float(value);
            }
        }
    }
    Value::Text(token.to_string())
}

impl Value {
    /// Normalize again; a no-op for numbers
    pub fn renormalize(self) -> Value {
        match self {
            Value::Text(text) => normalize(&text),
            other => other,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            Value::Text(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(token: &str) -> Self {
        normalize(token)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(text) => f.write_str(text),
        }
    }
}

impl Stat {
    /// Build a stat from value tokens, applying the one-token-is-scalar rule.
    /// `tokens` must not be empty.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Stat {
        debug_assert!(!tokens.is_empty(), "statistic without value tokens");
        match tokens {
            [single] => Stat::Scalar(normalize(single.as_ref())),
            many => Stat::Vector(many.iter().map(|token| normalize(token.as_ref())).collect()),
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Stat::Scalar(value) => Some(value),
            Stat::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Stat::Scalar(_) => None,
            Stat::Vector(values) => Some(values),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Scalar(value) => write!(f, "{value}"),
            Stat::Vector(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}
