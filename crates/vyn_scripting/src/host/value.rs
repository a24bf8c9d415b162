use core::fmt;

use vyn_shared::types::Result;

use crate::host::{HostContext, HostRuntime};
use crate::{ScriptError, ScriptType, ScriptValue};

#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Nil,
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl HostValue {
    /// Parses a literal the way a command line caller would type it: integers first, then
    /// numbers, and anything else is a string.
    pub fn parse_literal(literal: &str) -> Self {
        if let Ok(n) = literal.parse::<i64>() {
            return Self::Integer(n);
        }
        if let Some(f) = literal.parse::<f64>().ok().filter(|f| f.is_finite()) {
            return Self::Number(f);
        }
        Self::String(literal.to_string())
    }

    fn conversion_error(&self, target: ScriptType) -> ScriptError {
        ScriptError::Conversion(format!("cannot convert {} to {target}", self.type_of()))
    }
}

/// Exact integer value of a float, if it has one
#[allow(clippy::cast_possible_truncation)]
fn float_to_integer(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

/// Whole numbers keep a trailing `.0`; very large and very small magnitudes switch to exponent
/// form (`1e+300`, `2.5e-7`)
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    const EXPONENT_ABOVE: f64 = 1e15;
    const EXPONENT_BELOW: f64 = 1e-4;

    if !n.is_finite() {
        return write!(f, "{n}");
    }

    let magnitude = n.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(f, "{mantissa}e+{exponent}"),
            _ => f.write_str(&formatted),
        };
    }

    if n.fract() == 0.0 {
        write!(f, "{n:.1}")
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write_number(f, *n),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl ScriptValue for HostValue {
    type RT = HostRuntime;

    fn type_of(&self) -> ScriptType {
        match self {
            Self::Nil => ScriptType::Nil,
            Self::Bool(_) => ScriptType::Boolean,
            Self::Integer(_) => ScriptType::Integer,
            Self::Number(_) => ScriptType::Number,
            Self::String(_) => ScriptType::String,
        }
    }

    fn as_string(&self) -> Result<String> {
        match self {
            Self::String(_) | Self::Integer(_) | Self::Number(_) => Ok(self.to_string()),
            _ => Err(self.conversion_error(ScriptType::String).into()),
        }
    }

    fn as_integer(&self) -> Result<i64> {
        let n = match self {
            Self::Integer(n) => Some(*n),
            Self::Number(f) => float_to_integer(*f),
            Self::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_integer))
            }
            _ => None,
        };

        n.ok_or_else(|| self.conversion_error(ScriptType::Integer).into())
    }

    fn as_number(&self) -> Result<f64> {
        let n = match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(n) => Some(*n as f64),
            Self::Number(f) => Some(*f),
            Self::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        n.ok_or_else(|| self.conversion_error(ScriptType::Number).into())
    }

    fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.conversion_error(ScriptType::Boolean).into()),
        }
    }

    fn new_string(_ctx: HostContext, value: &str) -> Result<Self> {
        Ok(Self::String(value.to_string()))
    }

    fn new_integer(_ctx: HostContext, value: i64) -> Result<Self> {
        Ok(Self::Integer(value))
    }

    fn new_number(_ctx: HostContext, value: f64) -> Result<Self> {
        Ok(Self::Number(value))
    }

    fn new_bool(_ctx: HostContext, value: bool) -> Result<Self> {
        Ok(Self::Bool(value))
    }

    fn new_nil(_ctx: HostContext) -> Result<Self> {
        Ok(Self::Nil)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("800", HostValue::Integer(800) ; "integer")]
    #[test_case("-600", HostValue::Integer(-600) ; "negative integer")]
    #[test_case("1.5", HostValue::Number(1.5) ; "number")]
    #[test_case("Main", HostValue::String("Main".into()) ; "string")]
    #[test_case("", HostValue::String(String::new()) ; "empty string")]
    #[test_case("inf", HostValue::String("inf".into()) ; "infinity stays text")]
    fn parse_literal(literal: &str, expected: HostValue) {
        assert_eq!(HostValue::parse_literal(literal), expected);
    }

    #[test_case(HostValue::Integer(800), Some(800) ; "integer")]
    #[test_case(HostValue::Number(600.0), Some(600) ; "integral float")]
    #[test_case(HostValue::Number(1.5), None ; "fractional float")]
    #[test_case(HostValue::Number(f64::NAN), None ; "nan")]
    #[test_case(HostValue::Number(1e300), None ; "huge float")]
    #[test_case(HostValue::String(" 42 ".into()), Some(42) ; "numeric string")]
    #[test_case(HostValue::String("10.0".into()), Some(10) ; "integral float string")]
    #[test_case(HostValue::String("Main".into()), None ; "text")]
    #[test_case(HostValue::Bool(true), None ; "boolean")]
    #[test_case(HostValue::Nil, None ; "nil")]
    fn as_integer(value: HostValue, expected: Option<i64>) {
        assert_eq!(value.as_integer().ok(), expected);
    }

    #[test]
    fn as_string_converts_numbers() {
        assert_eq!(HostValue::Integer(800).as_string().unwrap(), "800");
        assert_eq!(HostValue::Number(2.0).as_string().unwrap(), "2.0");
        assert_eq!(HostValue::Number(2.5).as_string().unwrap(), "2.5");
        assert!(HostValue::Nil.as_string().is_err());
        assert!(HostValue::Bool(false).as_string().is_err());
    }

    #[test_case(2.0, "2.0" ; "whole")]
    #[test_case(-0.5, "-0.5" ; "fraction")]
    #[test_case(0.0, "0.0" ; "zero")]
    #[test_case(999_999_999_999_999.0, "999999999999999.0" ; "largest plain")]
    #[test_case(1e15, "1e+15" ; "first exponent")]
    #[test_case(1e300, "1e+300" ; "huge")]
    #[test_case(-1.5e20, "-1.5e+20" ; "huge negative")]
    #[test_case(2.5e-7, "2.5e-7" ; "tiny")]
    #[test_case(f64::INFINITY, "inf" ; "infinity")]
    fn number_display(n: f64, expected: &str) {
        assert_eq!(HostValue::Number(n).to_string(), expected);
    }

    #[test]
    fn type_names() {
        assert_eq!(HostValue::Nil.type_of().to_string(), "nil");
        assert_eq!(HostValue::Integer(1).type_of().to_string(), "number");
        assert_eq!(HostValue::Number(1.0).type_of().to_string(), "number");
        assert_eq!(HostValue::String(String::new()).type_of().to_string(), "string");
        assert_eq!(HostValue::Bool(true).type_of().to_string(), "boolean");
        assert!(HostValue::Integer(1).is_number());
        assert!(!HostValue::Number(1.0).is_integer());
    }
}
