use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Auto,
}

/// The realized input values for one invocation: a flat map of field name to
/// JSON value, as handed over by the hosting platform or read from a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationConfig {
    values: BTreeMap<String, JsonValue>,
}

impl InvocationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: BTreeMap<String, JsonValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: JsonValue) {
        self.values.insert(name.into(), value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub fn parse_config_str(input: &str, format: ConfigFormat) -> Result<InvocationConfig, ParseError> {
    match format {
        ConfigFormat::Json => into_config(serde_json::from_str::<JsonValue>(input)?),
        ConfigFormat::Yaml => into_config(serde_yaml::from_str::<JsonValue>(input)?),
        ConfigFormat::Auto => parse_config_auto(input),
    }
}

fn parse_config_auto(input: &str) -> Result<InvocationConfig, ParseError> {
    // Heuristic: JSON always starts with `{` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') {
        match serde_json::from_str::<JsonValue>(input) {
            Ok(v) => return into_config(v),
            Err(e) => {
                if let Ok(v) = serde_yaml::from_str::<JsonValue>(input) {
                    return into_config(v);
                }
                return Err(ParseError::Json(e));
            }
        }
    }

    match serde_yaml::from_str::<JsonValue>(input) {
        Ok(v) => into_config(v),
        Err(e) => {
            if let Ok(v) = serde_json::from_str::<JsonValue>(input) {
                return into_config(v);
            }
            Err(ParseError::Yaml(e))
        }
    }
}

fn into_config(value: JsonValue) -> Result<InvocationConfig, ParseError> {
    match value {
        JsonValue::Object(map) => Ok(InvocationConfig {
            values: map.into_iter().collect(),
        }),
        JsonValue::Null => Ok(InvocationConfig::new()),
        _ => Err(ParseError::NotAnObject),
    }
}
