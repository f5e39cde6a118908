use serde_json::Value;
use thiserror::Error;

/// Returned when the value handed to the validator is not text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input must be a string, got {found}")]
pub struct InvalidType
{
    pub found: &'static str,
}

impl InvalidType
{
    pub fn of(value: &Value) -> InvalidType
    {
        InvalidType {
            found: match value
            {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use serde_json::json;

    use super::*;

    #[test]
    fn names_the_offending_kind()
    {
        assert_eq!(InvalidType::of(&json!(null)).to_string(), "input must be a string, got null");
        assert_eq!(InvalidType::of(&json!(false)).found, "boolean");
        assert_eq!(InvalidType::of(&json!(123456789)).found, "number");
        assert_eq!(InvalidType::of(&json!(["1.1.1.1"])).found, "array");
        assert_eq!(InvalidType::of(&json!({"ip": "1.1.1.1"})).found, "object");
    }
}
