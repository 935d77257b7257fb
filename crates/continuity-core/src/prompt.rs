//! Prompt template sent to the language model on a memory miss.

/// Role instruction framing the model as a troubleshooting assistant.
pub const SYSTEM_INSTRUCTION: &str = "You are an IT troubleshooting assistant.";

/// Embed a user question in the fixed troubleshooting prompt.
pub fn build_prompt(question: &str) -> String {
    format!("{SYSTEM_INSTRUCTION}\nUser: {question}\nAssistant:")
}
