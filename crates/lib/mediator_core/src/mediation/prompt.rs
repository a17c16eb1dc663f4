//! Mediation prompt template.
//!
//! The wording is what the upstream model was tuned against and must stay
//! byte-for-byte stable, including the no-mediation sentinel.

use crate::models::chat::ChatMessage;

/// Marker the model returns when the conversation needs no mediation.
pub const NO_MEDIATION_SENTINEL: &str = "[[NO MEDIATION NEEDED]]";

/// Number of trailing messages included in the prompt.
pub const CONTEXT_WINDOW: usize = 5;

const PREAMBLE: &str = concat!(
    "You are a mediator for a group house chat. I want you to notice messages that are ",
    "excessively far from being phrased in NVC when conversations are becoming heated. ",
    r#"Respond with {"response": "[[NO MEDIATION NEEDED]]"} when the convo is ok. "#,
    "Respond as a mediator and with a suggested NVC translation in other cases.\n",
);

const INSTRUCTIONS: &str = concat!(
    "\n\nThink step by step, if mediation is needed return a JSON like this: ",
    r#"{"response": "I notice some tension here. Let me help translate this using NVC.", "#,
    r#""observations": "I observe that harsh words were used", "#,
    r#""feelings": "There seems to be frustration and hurt", "#,
    r#""needs": "The need for respect and understanding", "#,
    r#""requests": "Could you try expressing your concern without blame?"}. "#,
    r#"Otherwise return {"response": "[[NO MEDIATION NEEDED]]"}."#,
);

/// Returns the trailing messages that feed the prompt, in original order.
pub fn recent(messages: &[ChatMessage]) -> &[ChatMessage] {
    &messages[messages.len().saturating_sub(CONTEXT_WINDOW)..]
}

/// Renders messages as `role: content` lines joined by newlines.
pub fn render_conversation(messages: &[ChatMessage]) -> String {
    recent(messages)
        .iter()
        .map(|m| format!("{}: {}", m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full mediation prompt for `messages`.
///
/// An empty slice still yields a complete prompt with an empty conversation
/// block.
pub fn build_prompt(messages: &[ChatMessage]) -> String {
    let conversation = render_conversation(messages);
    let mut prompt = String::with_capacity(PREAMBLE.len() + conversation.len() + INSTRUCTIONS.len());
    prompt.push_str(PREAMBLE);
    prompt.push_str(&conversation);
    prompt.push_str(INSTRUCTIONS);
    prompt
}
