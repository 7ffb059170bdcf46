//! Node configuration editor model
//!
//! Resolves the editable fields of a node from its type, lists the upstream
//! variables that can be inserted into its text fields, and holds the draft
//! edited by the configuration dialog until it is saved.

mod ancestors;
mod clipboard;
mod draft;
mod schema;
mod variables;

pub use ancestors::ancestor_nodes;
pub use clipboard::{Clipboard, CopyIndicator, COPY_RESET_DELAY};
pub use draft::{ConfigDraft, RenderedField};
pub use schema::{
    field_info, resolve_fields, schema_for, FieldDefault, FieldInfo, FieldRole, FieldSpec,
    InputKind, NodeSchema, OutputFields, StaticInfo, MEMORY_TOGGLE,
};
pub use variables::{insert_variable, list_available_variables, WEBHOOK_BODY_TOKEN};
