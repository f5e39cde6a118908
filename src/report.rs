use ipv4_check::is_valid_ipv4;
use serde::Serialize;
use serde_json::Value;

use crate::config::Format;

#[derive(Debug, Serialize, PartialEq)]
pub struct Verdict
{
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict
{
    pub fn evaluate(input: Value) -> Verdict
    {
        match is_valid_ipv4(&input)
        {
            Ok(valid) => Verdict { input, valid: Some(valid), error: None },
            Err(e) => Verdict { input, valid: None, error: Some(e.to_string()) },
        }
    }

    /// A line that could not be turned into a value at all.
    pub fn unreadable(raw: &str, reason: String) -> Verdict
    {
        Verdict { input: Value::String(raw.to_string()), valid: None, error: Some(reason) }
    }

    pub fn is_error(&self) -> bool
    {
        self.error.is_some()
    }

    pub fn render(&self, format: Format) -> String
    {
        match format
        {
            Format::Text => {
                let input = match &self.input
                {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };

                match (&self.error, self.valid)
                {
                    (Some(e), _) => format!("{}\terror: {}", input, e),
                    (None, Some(true)) => format!("{}\tvalid", input),
                    (None, _) => format!("{}\tinvalid", input),
                }
            },
            // a Value-backed struct always serializes
            Format::Json => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

/// 0 when everything is valid, 1 if anything is invalid, 2 if anything errored.
pub fn exit_code(verdicts: &[Verdict]) -> i32
{
    if verdicts.iter().any(Verdict::is_error)
    {
        2
    }
    else if verdicts.iter().any(|v| v.valid == Some(false))
    {
        1
    }
    else
    {
        0
    }
}
