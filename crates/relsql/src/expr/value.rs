use super::Expr;
use std::fmt;

/// A literal inlined into the statement text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Rendered single-quoted with embedded quotes doubled.
    Text(String),
}

impl Value {
    pub fn render(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(true) => "TRUE".to_string(),
            Value::Bool(false) => "FALSE".to_string(),
            Value::Int(v) => v.to_string(),
            // SQL has no literal for infinities or NaN
            Value::Float(v) if !v.is_finite() => "NULL".to_string(),
            Value::Float(v) => format!("{v:?}"),
            Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! impl_int_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Int(i64::from(v))
                }
            }

            impl From<$ty> for Expr {
                fn from(v: $ty) -> Self {
                    Expr::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_int_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        Expr::Value(v)
    }
}

impl From<f32> for Expr {
    fn from(v: f32) -> Self {
        Expr::Value(v.into())
    }
}

impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Expr::Value(v.into())
    }
}

impl From<bool> for Expr {
    fn from(v: bool) -> Self {
        Expr::Value(v.into())
    }
}

impl From<&str> for Expr {
    fn from(v: &str) -> Self {
        Expr::Value(v.into())
    }
}

impl From<String> for Expr {
    fn from(v: String) -> Self {
        Expr::Value(v.into())
    }
}
