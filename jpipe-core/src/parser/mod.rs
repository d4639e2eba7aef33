use serde_json::Value as JsonValue;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub value: JsonValue,
    pub format: InputFormat,
}

/// Decode the output of an upstream command.
pub fn parse_input_str(input: &str, format: InputFormat) -> Result<ParsedInput, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::Empty);
    }
    match format {
        InputFormat::Json => Ok(ParsedInput {
            value: serde_json::from_str(input)?,
            format,
        }),
        InputFormat::Yaml => Ok(ParsedInput {
            value: serde_yaml::from_str(input)?,
            format,
        }),
        InputFormat::Auto => parse_input_auto(input),
    }
}

fn parse_input_auto(input: &str) -> Result<ParsedInput, InputError> {
    // JSON documents start with `{` or `[`; everything else is tried as YAML first.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<JsonValue>(input) {
            Ok(value) => Ok(ParsedInput {
                value,
                format: InputFormat::Json,
            }),
            Err(e) => match serde_yaml::from_str::<JsonValue>(input) {
                Ok(value) => Ok(ParsedInput {
                    value,
                    format: InputFormat::Yaml,
                }),
                Err(_) => Err(InputError::Json(e)),
            },
        };
    }

    match serde_yaml::from_str::<JsonValue>(input) {
        Ok(value) => Ok(ParsedInput {
            value,
            format: InputFormat::Yaml,
        }),
        Err(e) => match serde_json::from_str::<JsonValue>(input) {
            Ok(value) => Ok(ParsedInput {
                value,
                format: InputFormat::Json,
            }),
            Err(_) => Err(InputError::Yaml(e)),
        },
    }
}
