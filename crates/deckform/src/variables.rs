use crate::ancestors::ancestor_nodes;
use crate::schema::{schema_for, OutputFields};
use deckcore::{Edge, Node, TriggerType, VariableOption};

pub const WEBHOOK_BODY_TOKEN: &str = "{{ $json.body }}";

/// Variables insertable into the text fields of `current`
///
/// The webhook body comes first when the workflow is webhook-triggered, then
/// the outputs of every ancestor in traversal order.
pub fn list_available_variables(
    current: &str,
    edges: &[Edge],
    nodes: &[Node],
    trigger: TriggerType,
) -> Vec<VariableOption> {
    let mut variables = Vec::new();

    if trigger == TriggerType::Webhook {
        variables.push(VariableOption {
            label: "Webhook Body Data".to_string(),
            value: WEBHOOK_BODY_TOKEN.to_string(),
            tooltip: Some("Access any data from the webhook body".to_string()),
        });
    }

    for source in ancestor_nodes(current, edges, nodes) {
        let Some(schema) = schema_for(&source.kind) else {
            continue;
        };

        match schema.outputs {
            OutputFields::FormFields => {
                let fields = source
                    .data
                    .config
                    .get("fields")
                    .and_then(|v| v.as_fields())
                    .unwrap_or_default();

                for field in fields {
                    variables.push(VariableOption {
                        label: format!("{} (Form) - {}", source.id, field.key),
                        value: format!("{{{{ $json.body.{} }}}}", field.key),
                        tooltip: Some(format!(
                            "Form field: {}\nPosition in Flow: {}",
                            field.key, source.id
                        )),
                    });
                }
            }
            OutputFields::Suffixes(suffixes) => {
                for suffix in suffixes {
                    variables.push(VariableOption {
                        label: format!("{} ({}){}", source.id, source.display_name(), suffix),
                        value: format!("{{{{ $node.{}{} }}}}", source.id, suffix),
                        tooltip: Some(format!(
                            "Node Type: {}\nPosition in Flow: {}",
                            source.kind, source.id
                        )),
                    });
                }
            }
        }
    }

    variables
}

/// Append `token` to a field value, separated by a space when non-empty
pub fn insert_variable(current: &str, token: &str) -> String {
    if current.is_empty() {
        token.to_string()
    } else {
        format!("{} {}", current, token)
    }
}
