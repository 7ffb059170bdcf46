use crate::schema::{field_info, schema_for, FieldInfo, FieldRole, NodeSchema};
use crate::variables::{insert_variable, list_available_variables};
use deckcore::{
    ConfigError, ConfigValue, Edge, FormEntry, FormField, Node, NodeData, NodeKind, TriggerType,
    VariableOption, Workflow, WorkflowCredential,
};

/// A field as the dialog renders it
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedField {
    Text {
        key: &'static str,
        value: String,
        info: FieldInfo,
    },
    /// Handed to the nested form field editor as stored
    FormFields {
        key: &'static str,
        value: ConfigValue,
    },
}

/// Configuration being edited for one node
///
/// Owned by the caller for as long as the dialog is open. Nothing is persisted
/// here; [`ConfigDraft::save`] returns the merged node data.
#[derive(Debug, Clone)]
pub struct ConfigDraft<'a> {
    node: &'a Node,
    nodes: &'a [Node],
    edges: &'a [Edge],
    workflow: Option<&'a Workflow>,
    credentials: &'a [WorkflowCredential],
    schema: Option<&'static NodeSchema>,
    config: Vec<(&'static str, ConfigValue)>,
    credential_id: String,
}

impl<'a> ConfigDraft<'a> {
    /// Seed the draft from the node's stored config, filling declared defaults
    pub fn open(node: &'a Node, nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let schema = schema_for(&node.kind);
        let config: Vec<(&'static str, ConfigValue)> = schema
            .map(|schema| {
                schema
                    .fields
                    .iter()
                    .map(|spec| (spec.key, seed_value(spec.role, node.data.config.get(spec.key))))
                    .collect()
            })
            .unwrap_or_default();

        tracing::debug!("Opened config draft for node {} ({})", node.id, node.kind);

        Self {
            node,
            nodes,
            edges,
            workflow: None,
            credentials: &[],
            schema,
            config,
            credential_id: node.data.credentials_id.clone().unwrap_or_default(),
        }
    }

    pub fn with_workflow(mut self, workflow: &'a Workflow) -> Self {
        self.workflow = Some(workflow);
        self
    }

    pub fn with_credentials(mut self, credentials: &'a [WorkflowCredential]) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn node_id(&self) -> &str {
        &self.node.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.node.kind
    }

    pub fn value(&self, key: &str) -> Option<&ConfigValue> {
        self.config.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Replace the text of a declared text field
    pub fn edit_field(&mut self, key: &str, text: impl Into<String>) -> Result<(), ConfigError> {
        let slot = self.text_slot(key)?;
        *slot = ConfigValue::Text(text.into());
        Ok(())
    }

    /// Append a variable token to a text field
    pub fn pick_variable(&mut self, key: &str, token: &str) -> Result<(), ConfigError> {
        let slot = self.text_slot(key)?;
        if token.is_empty() {
            return Ok(());
        }
        let updated = insert_variable(slot.as_str().unwrap_or_default(), token);
        *slot = ConfigValue::Text(updated);
        Ok(())
    }

    pub fn memory(&self) -> Option<bool> {
        self.value("memory").and_then(|v| v.as_bool())
    }

    pub fn set_memory(&mut self, enabled: bool) -> Result<(), ConfigError> {
        let slot = self.role_slot(FieldRole::Memory, "memory")?;
        *slot = ConfigValue::Flag(enabled);
        Ok(())
    }

    /// Store the list produced by the nested form field editor
    pub fn set_form_fields(&mut self, fields: Vec<FormField>) -> Result<(), ConfigError> {
        let slot = self.role_slot(FieldRole::FormFields, "form fields")?;
        *slot = ConfigValue::Fields(fields);
        Ok(())
    }

    /// Whether the credential picker is offered for this node type
    pub fn shows_credentials(&self) -> bool {
        self.schema.map(|s| s.credentials).unwrap_or(true)
    }

    pub fn credential_options(&self) -> &[WorkflowCredential] {
        self.credentials
    }

    pub fn credential_id(&self) -> Option<&str> {
        Some(self.credential_id.as_str()).filter(|id| !id.is_empty())
    }

    /// Select a credential by id, or clear the selection with an empty id
    pub fn select_credential(&mut self, id: &str) -> Result<(), ConfigError> {
        if !self.shows_credentials() {
            return Err(ConfigError::NotSupported {
                node_type: self.node.kind.to_string(),
                feature: "credentials".to_string(),
            });
        }
        if !id.is_empty() && !self.credentials.iter().any(|c| c.id == id) {
            return Err(ConfigError::UnknownCredential(id.to_string()));
        }
        self.credential_id = id.to_string();
        Ok(())
    }

    /// Fields in display order; the memory flag is rendered separately
    pub fn visible_fields(&self) -> Vec<RenderedField> {
        let Some(schema) = self.schema else {
            return Vec::new();
        };

        schema
            .fields
            .iter()
            .filter_map(|spec| {
                let value = self.value(spec.key)?;
                match spec.role {
                    FieldRole::Input => Some(RenderedField::Text {
                        key: spec.key,
                        value: value.as_str().unwrap_or_default().to_string(),
                        info: field_info(&self.node.kind, spec.key),
                    }),
                    FieldRole::FormFields => Some(RenderedField::FormFields {
                        key: spec.key,
                        value: value.clone(),
                    }),
                    FieldRole::Memory => None,
                }
            })
            .collect()
    }

    /// Variables for this node, recomputed from the current graph
    pub fn variables(&self) -> Vec<VariableOption> {
        let trigger = self
            .workflow
            .map(|w| w.trigger_type)
            .unwrap_or(TriggerType::Manual);
        list_available_variables(&self.node.id, self.edges, self.nodes, trigger)
    }

    /// Published form bound to this node
    pub fn form_entry(&self) -> Option<&'a FormEntry> {
        self.workflow.and_then(|w| w.form_entry(&self.node.id))
    }

    /// Last run output, shown for Gemini nodes
    pub fn latest_output(&self) -> Option<&'a str> {
        match self.node.kind {
            NodeKind::Gemini => self.node.data.output.as_deref().filter(|o| !o.is_empty()),
            _ => None,
        }
    }

    /// Node data with the edited config and credential merged in
    pub fn save(&self) -> NodeData {
        let mut data = self.node.data.clone();
        data.config = self
            .config
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        data.credentials_id = self.credential_id().map(str::to_string);

        tracing::info!(
            "Saved config for node {} ({} fields)",
            self.node.id,
            data.config.len()
        );
        data
    }

    fn text_slot(&mut self, key: &str) -> Result<&mut ConfigValue, ConfigError> {
        let role = self
            .schema
            .and_then(|s| s.field(key))
            .map(|spec| spec.role)
            .ok_or_else(|| ConfigError::UnknownField {
                node_type: self.node.kind.to_string(),
                key: key.to_string(),
            })?;
        if role != FieldRole::Input {
            return Err(ConfigError::NotATextField(key.to_string()));
        }
        self.slot(key)
    }

    fn role_slot(&mut self, role: FieldRole, feature: &str) -> Result<&mut ConfigValue, ConfigError> {
        let key = self
            .schema
            .and_then(|s| s.fields.iter().find(|f| f.role == role))
            .map(|spec| spec.key)
            .ok_or_else(|| ConfigError::NotSupported {
                node_type: self.node.kind.to_string(),
                feature: feature.to_string(),
            })?;
        self.slot(key)
    }

    fn slot(&mut self, key: &str) -> Result<&mut ConfigValue, ConfigError> {
        let node_type = self.node.kind.to_string();
        self.config
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| ConfigError::UnknownField {
                node_type,
                key: key.to_string(),
            })
    }
}

/// Stored value for a declared field, or its default
///
/// Any non-empty stored value is kept as is, including JSON the typed
/// variants do not describe. An explicit `false` memory flag equals the default.
fn seed_value(role: FieldRole, stored: Option<&ConfigValue>) -> ConfigValue {
    stored
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| role.default_value())
}
