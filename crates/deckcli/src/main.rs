// crates/deckcli/src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deckcore::{NodeKind, NodeStatus, Workflow, WorkflowEvent};
use deckform::{field_info, resolve_fields, schema_for, ConfigDraft, RenderedField};
use deckstream::{StreamConfig, SubscriptionStatus, WorkflowEvents};
use decktools::{ToolCall, ToolRegistry};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deck")]
#[command(about = "flowdeck CLI", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the configuration fields of a node type
    Fields {
        /// Node type tag, e.g. Gemini
        node_type: String,
    },

    /// List variables insertable into a node's fields
    Variables {
        /// Path to workflow JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Node being configured
        #[arg(short, long)]
        node: String,
    },

    /// Follow live execution events of a workflow
    Watch {
        /// Workflow to subscribe to
        #[arg(short, long)]
        workflow: String,

        /// Event socket URL (defaults to FLOWDECK_WS_URL)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Inspect or call agent tools
    Tools {
        #[command(subcommand)]
        command: ToolsCommand,
    },
}

#[derive(Subcommand)]
enum ToolsCommand {
    /// List tools with their parameter schema
    List,

    /// Call a tool
    Call {
        name: String,

        /// Arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        input: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Fields { node_type } => show_fields(&node_type),
        Commands::Variables { file, node } => show_variables(file, &node)?,
        Commands::Watch { workflow, endpoint } => watch(&workflow, endpoint).await?,
        Commands::Tools { command } => match command {
            ToolsCommand::List => list_tools()?,
            ToolsCommand::Call { name, input } => call_tool(&name, &input).await?,
        },
    }

    Ok(())
}

fn show_fields(node_type: &str) {
    let kind = NodeKind::from(node_type);
    let fields = resolve_fields(&kind);

    if fields.is_empty() {
        println!("{} has no configurable fields", kind);
        return;
    }

    println!("📋 {} fields:", kind);
    for field in fields {
        let info = field_info(&kind, field.key);
        println!("  • {} ({:?}): {}", field.key, info.input_kind, info.label);
        if !info.helper.is_empty() {
            println!("    {}", info.helper);
        }
    }

    if schema_for(&kind).is_some_and(|s| s.has_memory()) {
        let (label, helper) = deckform::MEMORY_TOGGLE;
        println!("  ☐ {}: {}", label, helper);
    }
}

fn show_variables(file: PathBuf, node_id: &str) -> Result<()> {
    let workflow_json = std::fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
    let workflow: Workflow = serde_json::from_str(&workflow_json)?;

    let node = workflow
        .find_node(node_id)
        .with_context(|| format!("node {} not found in {}", node_id, workflow.name))?;

    let draft = ConfigDraft::open(node, &workflow.nodes, &workflow.edges).with_workflow(&workflow);

    println!("🔧 Configure {} ({})", node.id, node.kind);
    for field in draft.visible_fields() {
        match field {
            RenderedField::Text { key, value, info } => {
                println!("  {} [{}]: {}", info.label, key, value);
            }
            RenderedField::FormFields { key, value } => {
                println!("  {}: {}", key, serde_json::to_string(&value)?);
            }
        }
    }

    let variables = draft.variables();
    println!();
    if variables.is_empty() {
        println!("No variables available");
        return Ok(());
    }

    println!("📤 Variables:");
    for variable in variables {
        println!("  {:<40} {}", variable.label, variable.value);
    }

    Ok(())
}

async fn watch(workflow_id: &str, endpoint: Option<String>) -> Result<()> {
    let mut config = StreamConfig::from_env();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }

    println!("🔌 Subscribing to {} via {}", workflow_id, config.endpoint);

    let mut events = WorkflowEvents::websocket(config);
    let mut state = events.state();
    let mut status = events.status();
    events.watch(workflow_id).await;

    let mut printed = 0;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = status.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = *status.borrow_and_update();
                match current {
                    SubscriptionStatus::Subscribed => println!("▶️  Subscribed"),
                    SubscriptionStatus::Closed => {
                        println!("⏹  Stream closed");
                        break;
                    }
                    _ => {}
                }
            }
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = state.borrow_and_update().clone();
                for event in snapshot.events.iter().skip(printed) {
                    print_event(event);
                }
                printed = snapshot.events.len();
            }
        }
    }

    events.detach().await;
    Ok(())
}

fn print_event(event: &WorkflowEvent) {
    match event {
        WorkflowEvent::NodeOutput {
            node_id, output, ..
        } => {
            println!("     📤 [{}] {}", node_id, output);
        }
        other => match other.status() {
            Some(NodeStatus::Running) => println!("  ⚡ Node {} running", other.node_id()),
            Some(NodeStatus::Success) => println!("  ✅ Node {} succeeded", other.node_id()),
            Some(NodeStatus::Failed) => println!("  ❌ Node {} failed", other.node_id()),
            None => {}
        },
    }
}

fn list_tools() -> Result<()> {
    println!("📦 Available Tools:");
    println!();

    for definition in ToolRegistry::standard().definitions() {
        println!("  • {}", definition.name);
        println!("    {}", definition.description);
        println!("    {}", serde_json::to_string(&definition.parameters)?);
    }

    Ok(())
}

async fn call_tool(name: &str, input: &str) -> Result<()> {
    let arguments: serde_json::Value =
        serde_json::from_str(input).context("tool input must be JSON")?;

    let call = ToolCall {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        arguments,
    };

    let result = ToolRegistry::standard().invoke_call(&call).await;
    if result.is_error {
        anyhow::bail!("{} rejected: {}", name, result.content);
    }

    println!("{}", result.content);
    Ok(())
}
