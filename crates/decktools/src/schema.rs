use deckcore::ToolError;
use serde::Serialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Number,
    String,
    Boolean,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Number => "number",
            ParamType::String => "string",
            ParamType::Boolean => "boolean",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::Number => value.is_number(),
            ParamType::String => value.is_string(),
            ParamType::Boolean => value.is_boolean(),
        }
    }
}

/// One declared tool parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub param_type: ParamType,
    pub required: bool,
    pub description: Option<&'static str>,
}

impl ParamSpec {
    pub fn required(name: &'static str, param_type: ParamType) -> Self {
        Self {
            name,
            param_type,
            required: true,
            description: None,
        }
    }

    pub fn optional(name: &'static str, param_type: ParamType) -> Self {
        Self {
            required: false,
            ..Self::required(name, param_type)
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Parameters a tool accepts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolSchema {
    params: Vec<ParamSpec>,
}

impl ToolSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Check `input` against the declared parameters
    ///
    /// Missing required parameters, nulls and type mismatches are rejected;
    /// undeclared keys are stripped.
    pub fn validate(&self, input: &Value) -> Result<ValidatedInput, ToolError> {
        let object = input.as_object().ok_or_else(|| {
            ToolError::InvalidInput(format!("expected object, got {}", json_type(input)))
        })?;

        let mut values = Map::new();
        for spec in &self.params {
            match object.get(spec.name) {
                None if spec.required => {
                    return Err(ToolError::MissingField(spec.name.to_string()));
                }
                None => {}
                Some(value) if spec.param_type.matches(value) => {
                    values.insert(spec.name.to_string(), value.clone());
                }
                Some(value) => {
                    return Err(ToolError::InvalidType {
                        field: spec.name.to_string(),
                        expected: spec.param_type.as_str().to_string(),
                        actual: json_type(value).to_string(),
                    });
                }
            }
        }

        Ok(ValidatedInput { values })
    }

    /// JSON Schema object handed to the agent runtime
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for spec in &self.params {
            let mut property = json!({ "type": spec.param_type.as_str() });
            if let Some(description) = spec.description {
                property["description"] = json!(description);
            }
            properties.insert(spec.name.to_string(), property);
        }

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Tool input that passed schema validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedInput {
    values: Map<String, Value>,
}

impl ValidatedInput {
    pub fn number(&self, name: &str) -> Result<f64, ToolError> {
        self.opt_number(name)
            .ok_or_else(|| ToolError::MissingField(name.to_string()))
    }

    pub fn opt_number(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(Value::as_f64)
    }

    pub fn string(&self, name: &str) -> Result<&str, ToolError> {
        self.opt_string(name)
            .ok_or_else(|| ToolError::MissingField(name.to_string()))
    }

    pub fn opt_string(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
