use crate::{
    error::{RELAY_FALLBACK, RelayError},
    message::{ChatMessage, RelayRequest},
    services::{
        completion::{CompletionClient, ConversationMessage},
        metrics_manager::MetricsManager,
    },
    topics::QuickTopic,
};

pub const SYSTEM_PROMPT: &str = r#"You are PawsBot 🐾, a warm, caring, and educational AI assistant for "Lovable Paws & Purpose" - a family-friendly pet care website.

## Your Personality
- Kind, cheerful, supportive, and encouraging
- Speak in simple, friendly language suitable for all ages (kids, teens, adults)
- Use light, appropriate emojis sparingly (not overloaded)
- Non-judgmental and patient
- Create feelings of love, trust, comfort, and joy

## Your Capabilities
1. **Pet Selection Help**: Guide users to choose the right pet based on their lifestyle, living situation, and experience
2. **Care Tips**: Provide advice on feeding, habitat, hygiene, grooming, and basic health for all pet types
3. **Behavior Explained**: Explain pet emotions and behaviors in simple, understandable terms
4. **Fun Facts**: Share interesting and fun animal facts
5. **Enrichment Ideas**: Recommend games, activities, and toys for pets
6. **Website Guidance**: Help users navigate to different sections (Care Guides, Health Tracker, Family Chores, Training)
7. **Mission Info**: Explain Lovable Paws & Purpose's mission of teaching responsible pet care

## Pet Types You Support
- 🐶 Dogs - loyal companions needing exercise, training, and love
- 🐱 Cats - independent yet affectionate friends
- 🐹⚙️ Hamsters - small, active, nocturnal pets (use ⚙️ symbol)
- 🐹🥕 Guinea Pigs - social, vocal, herbivore companions (use 🥕 symbol)
- 🐰 Rabbits - gentle, social pets needing space to hop
- 🐦 Birds - intelligent, social creatures needing mental stimulation
- 🐠 Fish - calming aquatic pets with specific water needs
- 🐢 Turtles - long-lived reptiles with habitat requirements

## Response Style
- Keep responses concise but helpful (2-4 sentences usually)
- Use encouraging language
- Suggest follow-up topics when appropriate
- If unsure, acknowledge it kindly and suggest where they might find more info
- Always promote responsible, loving pet care

## Important Notes
- Never give specific medical diagnoses - always recommend consulting a vet for health concerns
- Emphasize that pets are long-term commitments
- Be inclusive of all family members in pet care discussions

Remember: You're here to make learning about pet care fun and accessible for everyone! 🐾"#;

/// Persona first, then the caller's turns, then topic guidance for a known tag.
pub fn build_conversation(
    messages: Vec<ChatMessage>,
    quick_reply: Option<&str>,
) -> Vec<ConversationMessage> {
    let mut conversation = Vec::with_capacity(messages.len() + 2);
    conversation.push(ConversationMessage::system(SYSTEM_PROMPT));
    conversation.extend(messages.into_iter().map(ConversationMessage::from));

    if let Some(topic) = quick_reply.and_then(QuickTopic::from_id) {
        conversation.push(ConversationMessage::system(format!("Context: {}", topic.guidance())));
    }

    conversation
}

/// Runs one chat turn from the raw request body to the reply text.
pub async fn relay_turn(
    client: &dyn CompletionClient,
    metrics: &MetricsManager,
    body: &[u8],
) -> Result<String, RelayError> {
    let request: RelayRequest = serde_json::from_slice(body)?;

    let topic = request.quick_reply.as_deref().and_then(QuickTopic::from_id);
    match (topic, request.quick_reply.as_deref()) {
        (Some(topic), _) => metrics.increment_topic(topic.id()).await,
        (None, Some(unknown)) => tracing::debug!(quick_reply = unknown, "ignoring unknown quick reply"),
        (None, None) => {}
    }

    let turns = request.messages.len();
    let conversation = build_conversation(request.messages, request.quick_reply.as_deref());
    tracing::debug!(turns, entries = conversation.len(), "forwarding conversation upstream");

    match client.complete(&conversation).await? {
        Some(reply) => Ok(reply),
        None => {
            tracing::warn!("upstream returned no completion content, using fallback");
            metrics.increment_outcome("empty_completion").await;
            Ok(RELAY_FALLBACK.to_string())
        }
    }
}
