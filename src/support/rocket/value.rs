use std::{convert::Infallible, str::FromStr};

/// A loosely-typed input to a rocket relation.
///
/// Values arrive from untyped boundaries such as command-line arguments or
/// scripting layers. Only [`Value::Float`] passes the type phase of
/// validation; integers and text are reported as not being numbers.
///
/// # Examples
///
/// ```
/// use rocket_relations::support::rocket::Value;
///
/// assert_eq!(Value::from(1.2), Value::Float(1.2));
/// assert_eq!(Value::from(3500), Value::Integer(3500));
/// assert_eq!(Value::parse("3500"), Value::Float(3500.0));
/// assert_eq!(Value::parse("hot"), Value::Text("hot".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Integer(i64),
    Text(String),
}

impl Value {
    /// Parses text, producing [`Value::Float`] when it reads as an `f64`.
    ///
    /// Anything `f64::from_str` accepts counts, including `inf` and `NaN`;
    /// those are left for the range phase to reject.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(number) => Self::Float(number),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// Returns the number if this value is a float.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            Self::Integer(_) | Self::Text(_) => None,
        }
    }
}

impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
