use crate::math::format_number;
use crate::schema::{ParamSpec, ParamType, ToolSchema, ValidatedInput};
use crate::tool::Tool;
use deckcore::ToolError;

pub const DEFAULT_STYLE: &str = "neutral";
pub const DEFAULT_LENGTH: f64 = 300.0;

/// Placeholder article text for `topic`
pub fn generate_content(topic: &str, style: &str, length: f64) -> String {
    format!(
        "Here is a {} article about \"{}\" with approximately {} words. [Content generation logic goes here]",
        style,
        topic,
        format_number(length)
    )
}

pub struct ContentWriterTool;

impl Tool for ContentWriterTool {
    fn name(&self) -> &str {
        "content_writer"
    }

    fn description(&self) -> &str {
        "Use this tool to write or generate content on any topic. \
         Ideal for blog posts, LinkedIn posts, tweets, essays, summaries, articles, or creative text generation. \
         The user doesn't need to mention the tool; detect writing intent automatically."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param(ParamSpec::required("topic", ParamType::String).describe("Topic to write about"))
            .param(
                ParamSpec::optional("style", ParamType::String)
                    .describe("Writing style (e.g. formal, casual, neutral)"),
            )
            .param(ParamSpec::optional("length", ParamType::Number).describe("Approximate word count"))
    }

    fn call(&self, input: &ValidatedInput) -> Result<String, ToolError> {
        let topic = input.string("topic")?;
        let style = input.opt_string("style").unwrap_or(DEFAULT_STYLE);
        let length = input.opt_number("length").unwrap_or(DEFAULT_LENGTH);

        tracing::info!(
            "Content writing: topic={}, style={}, length={}",
            topic,
            style,
            format_number(length)
        );
        Ok(generate_content(topic, style, length))
    }
}
