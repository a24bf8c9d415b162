use crate::errors::Error;
use core::fmt::Display;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A single configuration value. Settings are encoded as strings with a type prefix:
///
///   b:true
///   i:-123
///   u:234
///   s:hello world
///   m:foo,bar,baz
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Setting {
    SInt(isize),
    UInt(usize),
    String(String),
    Bool(bool),
    Map(Vec<String>),
}

impl Setting {
    /// Short name of the type, used in warnings and in the `type` column of settings.json
    pub fn type_prefix(&self) -> &'static str {
        match self {
            Self::SInt(_) => "i",
            Self::UInt(_) => "u",
            Self::String(_) => "s",
            Self::Bool(_) => "b",
            Self::Map(_) => "m",
        }
    }

    #[must_use]
    pub fn to_bool(&self) -> bool {
        self.warn_unless("b");

        match self {
            Self::Bool(value) => *value,
            Self::SInt(value) => *value != 0,
            Self::UInt(value) => *value != 0,
            Self::String(value) => is_bool_value(value),
            Self::Map(values) => !values.is_empty(),
        }
    }

    #[must_use]
    pub fn to_sint(&self) -> isize {
        self.warn_unless("i");

        match self {
            Self::SInt(value) => *value,
            Self::UInt(value) => isize::try_from(*value).unwrap_or(isize::MAX),
            Self::Bool(value) => isize::from(*value),
            Self::String(value) => isize::from(is_bool_value(value)),
            Self::Map(values) => isize::try_from(values.len()).unwrap_or(isize::MAX),
        }
    }

    #[must_use]
    pub fn to_uint(&self) -> usize {
        self.warn_unless("u");

        match self {
            Self::UInt(value) => *value,
            Self::SInt(value) => usize::try_from(*value).unwrap_or(0),
            Self::Bool(value) => usize::from(*value),
            Self::String(value) => usize::from(is_bool_value(value)),
            Self::Map(values) => values.len(),
        }
    }

    #[allow(clippy::inherent_to_string_shadow_display)]
    #[must_use]
    pub fn to_string(&self) -> String {
        self.warn_unless("s");
        self.raw_value()
    }

    #[must_use]
    pub fn to_map(&self) -> Vec<String> {
        self.warn_unless("m");

        match self {
            Self::Map(values) => values.clone(),
            other => vec![other.raw_value()],
        }
    }

    /// The value without its type prefix
    fn raw_value(&self) -> String {
        match self {
            Self::SInt(value) => value.to_string(),
            Self::UInt(value) => value.to_string(),
            Self::String(value) => value.clone(),
            Self::Bool(value) => value.to_string(),
            Self::Map(values) => values.join(","),
        }
    }

    fn warn_unless(&self, prefix: &str) {
        if self.type_prefix() != prefix {
            warn!(
                "config: setting of type '{}' read as type '{prefix}'",
                self.type_prefix()
            );
        }
    }
}

fn is_bool_value(s: &str) -> bool {
    ["YES", "ON", "TRUE", "1"].contains(&s.to_uppercase().as_str())
}

fn parse_error(value: &str, err: impl Display) -> Error {
    Error::Config(format!("error parsing {value}: {err}"))
}

impl Serialize for Setting {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Setting {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value)
            .map_err(|err| serde::de::Error::custom(format!("cannot deserialize: {err}")))
    }
}

/// Displays the setting in its encoded form, so it can be parsed back with `from_str`
impl Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.type_prefix(), self.raw_value())
    }
}

impl FromStr for Setting {
    type Err = Error;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        let Some((key_type, key_value)) = encoded.split_once(':') else {
            return Err(Error::Config(format!("missing type prefix: {encoded}")));
        };

        let setting = match key_type {
            "b" => Self::Bool(
                key_value
                    .parse::<bool>()
                    .map_err(|err| parse_error(key_value, err))?,
            ),
            "i" => Self::SInt(
                key_value
                    .parse::<isize>()
                    .map_err(|err| parse_error(key_value, err))?,
            ),
            "u" => Self::UInt(
                key_value
                    .parse::<usize>()
                    .map_err(|err| parse_error(key_value, err))?,
            ),
            "s" => Self::String(key_value.to_string()),
            "m" => Self::Map(key_value.split(',').map(str::to_string).collect()),
            _ => return Err(Error::Config(format!("unknown setting type: {key_type}"))),
        };

        Ok(setting)
    }
}

/// `SettingInfo` returns information about a given setting
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SettingInfo {
    /// Name of the key in dot notation (ie: stdlib.window.module)
    pub key: String,
    /// Description of the setting
    pub description: String,
    /// Default setting if none has been specified
    pub default: Setting,
}
