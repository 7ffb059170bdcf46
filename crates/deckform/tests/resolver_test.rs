use deckcore::{ConfigError, ConfigValue, Edge, FormField, Node, NodeKind, TriggerType};
use deckform::{
    field_info, insert_variable, list_available_variables, resolve_fields, InputKind,
    WEBHOOK_BODY_TOKEN,
};

fn keys(kind: NodeKind) -> Vec<&'static str> {
    resolve_fields(&kind).into_iter().map(|f| f.key).collect()
}

#[test]
fn test_resolve_fields_declared_key_sets() {
    assert_eq!(keys(NodeKind::ResendEmail), vec!["to", "subject", "body"]);
    assert_eq!(keys(NodeKind::Telegram), vec!["message"]);
    assert_eq!(keys(NodeKind::Gemini), vec!["prompt", "memory"]);
    assert_eq!(keys(NodeKind::Slack), vec!["channel", "message"]);
    assert_eq!(keys(NodeKind::Form), vec!["title", "fields"]);
    assert!(keys(NodeKind::Other("Webhook".to_string())).is_empty());
}

#[test]
fn test_resolve_fields_defaults() {
    let gemini = resolve_fields(&NodeKind::Gemini);
    assert_eq!(gemini[0].default, ConfigValue::Text(String::new()));
    assert_eq!(gemini[1].default, ConfigValue::Flag(false));

    let form = resolve_fields(&NodeKind::Form);
    assert_eq!(form[1].default, ConfigValue::Fields(Vec::new()));
}

#[test]
fn test_field_info_known_keys() {
    let body = field_info(&NodeKind::ResendEmail, "body");
    assert_eq!(body.label, "Body");
    assert_eq!(body.input_kind, InputKind::Textarea);

    let to = field_info(&NodeKind::ResendEmail, "to");
    assert_eq!(to.label, "To Email");
    assert_eq!(to.input_kind, InputKind::Text);

    let channel = field_info(&NodeKind::Slack, "channel");
    assert_eq!(channel.label, "Slack Channel Id");
}

#[test]
fn test_field_info_falls_back_for_unknown_keys() {
    let info = field_info(&NodeKind::Slack, "thread");
    assert_eq!(info.label, "thread");
    assert_eq!(info.placeholder, "Enter thread");
    assert_eq!(info.input_kind, InputKind::Text);
    assert!(info.helper.is_empty());

    let other = field_info(&NodeKind::Other("Cron".to_string()), "expression");
    assert_eq!(other.label, "expression");
}

#[test]
fn test_webhook_without_ancestors_has_single_option() {
    let nodes = vec![Node::new("mail", "ResendEmail")];
    let variables = list_available_variables("mail", &[], &nodes, TriggerType::Webhook);

    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].value, WEBHOOK_BODY_TOKEN);
    assert_eq!(variables[0].label, "Webhook Body Data");
}

#[test]
fn test_manual_trigger_without_ancestors_is_empty() {
    let nodes = vec![Node::new("mail", "ResendEmail")];
    assert!(list_available_variables("mail", &[], &nodes, TriggerType::Manual).is_empty());
}

#[test]
fn test_form_ancestor_emits_body_fields_only() {
    let nodes = vec![
        Node::new("signup", "Form").with_config("fields", vec![FormField::new("name")]),
        Node::new("mail", "ResendEmail"),
    ];
    let edges = vec![Edge::new("signup", "mail")];

    let variables = list_available_variables("mail", &edges, &nodes, TriggerType::Form);
    let values: Vec<_> = variables.iter().map(|v| v.value.as_str()).collect();

    assert_eq!(values, vec!["{{ $json.body.name }}"]);
    assert!(!values.iter().any(|v| v.contains("$node.signup")));
    assert_eq!(variables[0].label, "signup (Form) - name");
    assert_eq!(
        variables[0].tooltip.as_deref(),
        Some("Form field: name\nPosition in Flow: signup")
    );
}

#[test]
fn test_order_webhook_then_ancestors_then_fields() {
    let nodes = vec![
        Node::new("ask", "Gemini").with_label("Ask AI"),
        Node::new("notify", "Slack"),
        Node::new("mail", "ResendEmail"),
    ];
    let edges = vec![Edge::new("ask", "notify"), Edge::new("notify", "mail")];

    let variables = list_available_variables("mail", &edges, &nodes, TriggerType::Webhook);
    let values: Vec<_> = variables.iter().map(|v| v.value.as_str()).collect();

    assert_eq!(
        values,
        vec![
            "{{ $json.body }}",
            "{{ $node.notify.channel }}",
            "{{ $node.notify.text }}",
            "{{ $node.ask.text }}",
            "{{ $node.ask.query }}",
        ]
    );
    assert_eq!(variables[1].label, "notify (Slack).channel");
    assert_eq!(variables[3].label, "ask (Ask AI).text");
    assert_eq!(
        variables[3].tooltip.as_deref(),
        Some("Node Type: Gemini\nPosition in Flow: ask")
    );
}

#[test]
fn test_cyclic_graph_terminates() {
    let nodes = vec![
        Node::new("a", "Telegram"),
        Node::new("b", "Gemini"),
        Node::new("c", "Slack"),
    ];
    let edges = vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a")];

    let variables = list_available_variables("c", &edges, &nodes, TriggerType::Manual);
    let values: Vec<_> = variables.iter().map(|v| v.value.as_str()).collect();

    assert_eq!(values.len(), 3);
    assert!(values.contains(&"{{ $node.a.message }}"));
    assert!(values.contains(&"{{ $node.b.text }}"));
    assert!(!values.iter().any(|v| v.contains("$node.c")));
}

#[test]
fn test_unconfigured_ancestor_contributes_nothing() {
    let nodes = vec![Node::new("hook", "WebhookTrigger"), Node::new("tg", "Telegram")];
    let edges = vec![Edge::new("hook", "tg")];

    assert!(list_available_variables("tg", &edges, &nodes, TriggerType::Manual).is_empty());
}

#[test]
fn test_insert_variable_appends() {
    assert_eq!(
        insert_variable("Hello", "{{ $node.A.text }}"),
        "Hello {{ $node.A.text }}"
    );
    assert_eq!(insert_variable("", "{{ $json.body }}"), "{{ $json.body }}");
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::UnknownField {
        node_type: "Slack".to_string(),
        key: "thread".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown field 'thread' for node type Slack");
}
