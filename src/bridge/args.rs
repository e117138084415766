use serde_json::Value;

use super::plugin::ActionError;

/// Borrowed positional view over an action's JSON argument array.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads the argument at `index` as a JSON string.
    ///
    /// Numbers, booleans and `null` are rejected rather than coerced.
    pub fn get_str(&self, index: usize) -> Result<&'a str, ActionError> {
        let value = self
            .values
            .get(index)
            .ok_or(ActionError::MissingArgument { index })?;
        value.as_str().ok_or_else(|| ActionError::ArgumentType {
            index,
            expected: "string",
            found: json_type_name(value),
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
