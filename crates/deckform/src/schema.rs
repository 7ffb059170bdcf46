use deckcore::{ConfigValue, NodeKind};
use serde::Serialize;

/// How a text field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Textarea,
}

/// What a configuration key holds and how the dialog treats it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Free text, rendered in the generic field loop
    Input,
    /// Boolean memory switch, rendered as a dedicated checkbox
    Memory,
    /// Form field list, edited by the nested field-list editor
    FormFields,
}

impl FieldRole {
    pub fn default_value(self) -> ConfigValue {
        match self {
            FieldRole::Input => ConfigValue::Text(String::new()),
            FieldRole::Memory => ConfigValue::Flag(false),
            FieldRole::FormFields => ConfigValue::Fields(Vec::new()),
        }
    }
}

/// Display metadata for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub label: String,
    pub placeholder: String,
    pub input_kind: InputKind,
    pub helper: String,
}

impl FieldInfo {
    /// Descriptor used for keys the node type does not describe
    pub fn generic(key: &str) -> Self {
        Self {
            label: key.to_string(),
            placeholder: format!("Enter {}", key),
            input_kind: InputKind::Text,
            helper: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StaticInfo {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_kind: InputKind,
    pub helper: &'static str,
}

impl From<&StaticInfo> for FieldInfo {
    fn from(info: &StaticInfo) -> Self {
        Self {
            label: info.label.to_string(),
            placeholder: info.placeholder.to_string(),
            input_kind: info.input_kind,
            helper: info.helper.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub role: FieldRole,
    pub info: Option<StaticInfo>,
}

/// Output references a node exposes to its descendants
#[derive(Debug, Clone, Copy)]
pub enum OutputFields {
    /// Static suffixes appended to `$node.<id>`
    Suffixes(&'static [&'static str]),
    /// One `$json.body.<key>` reference per declared form field
    FormFields,
}

/// Everything the editor knows about one node type
#[derive(Debug, Clone, Copy)]
pub struct NodeSchema {
    pub fields: &'static [FieldSpec],
    pub outputs: OutputFields,
    pub credentials: bool,
}

impl NodeSchema {
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn has_memory(&self) -> bool {
        self.fields.iter().any(|f| f.role == FieldRole::Memory)
    }
}

/// Label and helper for the Gemini memory checkbox
pub const MEMORY_TOGGLE: (&str, &str) = (
    "Enable Memory",
    "If enabled, Gemini will recall the latest 25 conversations for this workflow.",
);

const VARIABLE_HELPER: &str = "Can include variables for dynamic content";

static RESEND_EMAIL: NodeSchema = NodeSchema {
    fields: &[
        FieldSpec {
            key: "to",
            role: FieldRole::Input,
            info: Some(StaticInfo {
                label: "To Email",
                placeholder: "recipient@example.com or use variables",
                input_kind: InputKind::Text,
                helper: "Email address or variable from webhook/connected nodes",
            }),
        },
        FieldSpec {
            key: "subject",
            role: FieldRole::Input,
            info: Some(StaticInfo {
                label: "Subject",
                placeholder: "Email subject with optional variables",
                input_kind: InputKind::Text,
                helper: VARIABLE_HELPER,
            }),
        },
        FieldSpec {
            key: "body",
            role: FieldRole::Input,
            info: Some(StaticInfo {
                label: "Body",
                placeholder: "Email body with optional variables",
                input_kind: InputKind::Textarea,
                helper: "Supports variables from webhook or connected nodes",
            }),
        },
    ],
    outputs: OutputFields::Suffixes(&[".to", ".subject", ".body"]),
    credentials: true,
};

static TELEGRAM: NodeSchema = NodeSchema {
    fields: &[FieldSpec {
        key: "message",
        role: FieldRole::Input,
        info: Some(StaticInfo {
            label: "Message",
            placeholder: "Message text with optional variables",
            input_kind: InputKind::Textarea,
            helper: VARIABLE_HELPER,
        }),
    }],
    outputs: OutputFields::Suffixes(&[".message"]),
    credentials: true,
};

static GEMINI: NodeSchema = NodeSchema {
    fields: &[
        FieldSpec {
            key: "prompt",
            role: FieldRole::Input,
            info: Some(StaticInfo {
                label: "Prompt",
                placeholder: "Prompt text with optional variables",
                input_kind: InputKind::Textarea,
                helper: "Can include variables from webhook or connected nodes",
            }),
        },
        FieldSpec {
            key: "memory",
            role: FieldRole::Memory,
            info: None,
        },
    ],
    outputs: OutputFields::Suffixes(&[".text", ".query"]),
    credentials: true,
};

static SLACK: NodeSchema = NodeSchema {
    fields: &[
        FieldSpec {
            key: "channel",
            role: FieldRole::Input,
            info: Some(StaticInfo {
                label: "Slack Channel Id",
                placeholder: "Enter your slack channel Id",
                input_kind: InputKind::Text,
                helper: "You can get slack channel id from slack api. Also give bot channel permission",
            }),
        },
        FieldSpec {
            key: "message",
            role: FieldRole::Input,
            info: Some(StaticInfo {
                label: "Slack Message",
                placeholder: "Enter your slack message",
                input_kind: InputKind::Text,
                helper: "Enter the message you want your bot to send",
            }),
        },
    ],
    outputs: OutputFields::Suffixes(&[".channel", ".text"]),
    credentials: true,
};

static FORM: NodeSchema = NodeSchema {
    fields: &[
        FieldSpec {
            key: "title",
            role: FieldRole::Input,
            info: Some(StaticInfo {
                label: "Form Title",
                placeholder: "Enter form title",
                input_kind: InputKind::Text,
                helper: "This will be shown at the top of the form",
            }),
        },
        FieldSpec {
            key: "fields",
            role: FieldRole::FormFields,
            info: Some(StaticInfo {
                label: "fields",
                placeholder: "Add Fields (JSON array)",
                input_kind: InputKind::Textarea,
                helper: r#"Example: [{"label": "Name", "type": "text"}, {"label": "Email", "type": "email"}]"#,
            }),
        },
    ],
    outputs: OutputFields::FormFields,
    credentials: false,
};

/// Schema for a node type, `None` for types the editor does not configure
pub fn schema_for(kind: &NodeKind) -> Option<&'static NodeSchema> {
    match kind {
        NodeKind::ResendEmail => Some(&RESEND_EMAIL),
        NodeKind::Telegram => Some(&TELEGRAM),
        NodeKind::Gemini => Some(&GEMINI),
        NodeKind::Slack => Some(&SLACK),
        NodeKind::Form => Some(&FORM),
        NodeKind::Other(_) => None,
    }
}

/// Key and default value of one configuration field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefault {
    pub key: &'static str,
    pub default: ConfigValue,
}

/// Declared configuration keys of a node type, in display order
pub fn resolve_fields(kind: &NodeKind) -> Vec<FieldDefault> {
    schema_for(kind)
        .map(|schema| {
            schema
                .fields
                .iter()
                .map(|f| FieldDefault {
                    key: f.key,
                    default: f.role.default_value(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Display metadata for `key`, falling back to a generic text descriptor
pub fn field_info(kind: &NodeKind, key: &str) -> FieldInfo {
    schema_for(kind)
        .and_then(|schema| schema.field(key))
        .and_then(|f| f.info.as_ref())
        .map(FieldInfo::from)
        .unwrap_or_else(|| FieldInfo::generic(key))
}
