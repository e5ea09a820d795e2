//! Canonical primitive types and their textual value forms.

use std::{fmt::Display, str::FromStr};

use crate::{model::Literal, Error};

/// The four primitive kinds shared by FMI 2.0 and SSP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Real,
    Integer,
    Boolean,
    String,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Real => "Real",
            PrimitiveType::Integer => "Integer",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::String => "String",
        }
    }
}

/// Parses a canonical tag (`Real`, `Integer`, `Boolean`, `String`). Source type names go through
/// [`map_type`] instead.
impl FromStr for PrimitiveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Real" => Ok(PrimitiveType::Real),
            "Integer" => Ok(PrimitiveType::Integer),
            "Boolean" => Ok(PrimitiveType::Boolean),
            "String" => Ok(PrimitiveType::String),
            _ => Err(Error::UnsupportedTypeKind(s.to_owned())),
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn lookup(key: &str) -> Option<PrimitiveType> {
    match key {
        "real" | "float" | "float32" | "float64" | "double" => Some(PrimitiveType::Real),
        "integer" | "int" | "int8" | "int32" | "uint8" | "uint32" => Some(PrimitiveType::Integer),
        "boolean" | "bool" => Some(PrimitiveType::Boolean),
        "string" => Some(PrimitiveType::String),
        _ => None,
    }
}

/// Map a declared source type name onto a primitive kind.
///
/// The lookup trims whitespace and ignores case. Absent names map to [`PrimitiveType::Real`], as do
/// unrecognized ones (with a warning).
pub fn map_type(type_name: Option<&str>) -> PrimitiveType {
    let Some(type_name) = type_name else {
        return PrimitiveType::Real;
    };
    let key = type_name.trim().to_lowercase();
    if key.is_empty() {
        return PrimitiveType::Real;
    }
    lookup(&key).unwrap_or_else(|| {
        log::warn!("Unrecognized type '{type_name}', defaulting to Real");
        PrimitiveType::Real
    })
}

fn invalid(kind: PrimitiveType, literal: &Literal) -> Error {
    let literal = match literal {
        Literal::Real(v) => v.to_string(),
        Literal::Integer(v) => v.to_string(),
        Literal::Boolean(v) => v.to_string(),
        Literal::String(v) => v.clone(),
    };
    Error::InvalidLiteral {
        kind: kind.to_string(),
        literal,
    }
}

fn to_real(literal: &Literal) -> Option<f64> {
    match literal {
        Literal::Real(v) => Some(*v),
        Literal::Integer(v) => Some(*v as f64),
        Literal::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
        Literal::String(s) => s.trim().parse().ok(),
    }
}

fn to_integer(literal: &Literal) -> Option<i64> {
    match literal {
        Literal::Real(v) if v.is_finite() => Some(v.trunc() as i64),
        Literal::Real(_) => None,
        Literal::Integer(v) => Some(*v),
        Literal::Boolean(v) => Some(*v as i64),
        Literal::String(s) => s.trim().parse().ok(),
    }
}

fn to_boolean(literal: &Literal) -> Option<bool> {
    match literal {
        Literal::Real(v) => Some(*v != 0.0),
        Literal::Integer(v) => Some(*v != 0),
        Literal::Boolean(v) => Some(*v),
        Literal::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
    }
}

/// Shortest `xs:double` text that parses back to `value`: the shorter of the positional and the
/// exponent form, positional on ties. Non-finite values use the `INF`/`-INF`/`NaN` literals.
fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_owned();
    }
    let positional = value.to_string();
    let exponent = format!("{value:e}");
    if exponent.len() < positional.len() {
        exponent
    } else {
        positional
    }
}

/// Render `literal` in the canonical text form of `kind`. An absent literal renders as the empty
/// string.
///
/// Reals use the shortest representation that parses back to the same `f64` (see
/// [`format_real`]).
pub fn format_value(kind: PrimitiveType, literal: Option<&Literal>) -> Result<String, Error> {
    let Some(literal) = literal else {
        return Ok(String::new());
    };
    let text = match kind {
        PrimitiveType::Real => to_real(literal).map(format_real),
        PrimitiveType::Integer => to_integer(literal).map(|v| v.to_string()),
        PrimitiveType::Boolean => to_boolean(literal).map(|v| v.to_string()),
        PrimitiveType::String => Some(match literal {
            Literal::String(s) => s.clone(),
            Literal::Real(v) => v.to_string(),
            Literal::Integer(v) => v.to_string(),
            Literal::Boolean(v) => v.to_string(),
        }),
    };
    text.ok_or_else(|| invalid(kind, literal))
}
