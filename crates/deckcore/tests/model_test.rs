use deckcore::{
    ClientMessage, ConfigValue, FormField, Node, NodeKind, NodeStatus, TriggerType, Workflow,
    WorkflowEvent,
};
use serde_json::json;

#[test]
fn test_node_from_editor_json() {
    let node: Node = serde_json::from_value(json!({
        "id": "gemini-1",
        "type": "Gemini",
        "position": { "x": 10, "y": 20 },
        "data": {
            "label": "Summarize",
            "config": { "prompt": "Hi", "memory": true },
            "output": "done",
            "credentialsId": "cred-1"
        }
    }))
    .unwrap();

    assert_eq!(node.kind, NodeKind::Gemini);
    assert_eq!(node.data.config.get("prompt"), Some(&ConfigValue::from("Hi")));
    assert_eq!(node.data.config.get("memory").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(node.data.output.as_deref(), Some("done"));
    assert_eq!(node.data.credentials_id.as_deref(), Some("cred-1"));
    assert_eq!(node.display_name(), "Summarize");
}

#[test]
fn test_unknown_node_type_round_trips() {
    let node: Node = serde_json::from_value(json!({ "id": "w", "type": "WebhookTrigger" })).unwrap();
    assert_eq!(node.kind, NodeKind::Other("WebhookTrigger".to_string()));
    assert_eq!(node.display_name(), "WebhookTrigger");

    let back = serde_json::to_value(&node).unwrap();
    assert_eq!(back["type"], "WebhookTrigger");
}

#[test]
fn test_form_fields_config() {
    let node: Node = serde_json::from_value(json!({
        "id": "form",
        "type": "Form",
        "data": { "config": { "title": "Signup", "fields": [{ "key": "name", "type": "text" }] } }
    }))
    .unwrap();

    let fields = node.data.config.get("fields").and_then(|v| v.as_fields()).unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "name");
    assert_eq!(fields[0].field_type.as_deref(), Some("text"));
}

#[test]
fn test_workflow_trigger_and_form_entry() {
    let workflow: Workflow = serde_json::from_value(json!({
        "id": "wf-1",
        "name": "Inbound",
        "triggerType": "Webhook",
        "nodes": [{ "id": "form", "type": "Form" }],
        "edges": [{ "id": "e1", "source": "form", "target": "mail" }],
        "form": [{ "id": "f-9", "nodeId": "form" }]
    }))
    .unwrap();

    assert_eq!(workflow.trigger_type, TriggerType::Webhook);
    assert!(workflow.find_node("form").is_some());
    assert_eq!(workflow.form_entry("form").map(|f| f.id.as_str()), Some("f-9"));
    assert!(workflow.form_entry("mail").is_none());

    let cron: Workflow =
        serde_json::from_value(json!({ "id": "wf-2", "triggerType": "Cron" })).unwrap();
    assert_eq!(cron.trigger_type, TriggerType::Other);
}

#[test]
fn test_event_wire_format() {
    let event: WorkflowEvent = serde_json::from_str(
        r#"{"type":"node_output","workflowId":"wf","nodeId":"a","output":"hello"}"#,
    )
    .unwrap();

    assert_eq!(
        event,
        WorkflowEvent::NodeOutput {
            workflow_id: "wf".to_string(),
            node_id: "a".to_string(),
            output: "hello".to_string(),
        }
    );
    assert_eq!(event.status(), None);

    let started: WorkflowEvent =
        serde_json::from_str(r#"{"type":"node_started","workflowId":"wf","nodeId":"a"}"#).unwrap();
    assert_eq!(started.status(), Some(NodeStatus::Running));
    assert_eq!(started.node_id(), "a");
    assert_eq!(started.workflow_id(), "wf");
}

#[test]
fn test_client_message_wire_format() {
    let subscribe: serde_json::Value =
        serde_json::from_str(&ClientMessage::subscribe("wf-1").to_json().unwrap()).unwrap();
    assert_eq!(subscribe, json!({ "type": "subscribe", "workflowId": "wf-1" }));

    let unsubscribe: serde_json::Value =
        serde_json::from_str(&ClientMessage::unsubscribe("wf-1").to_json().unwrap()).unwrap();
    assert_eq!(unsubscribe, json!({ "type": "unsubscribe", "workflowId": "wf-1" }));
}

#[test]
fn test_config_value_emptiness() {
    assert!(ConfigValue::from("").is_empty());
    assert!(ConfigValue::from(false).is_empty());
    assert!(ConfigValue::Fields(Vec::new()).is_empty());
    assert!(!ConfigValue::Fields(vec![FormField::new("name")]).is_empty());
    assert!(!ConfigValue::from("x").is_empty());
}
