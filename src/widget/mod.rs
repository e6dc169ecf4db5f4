//! Client-side chat widget: conversation state plus the one-request-at-a-time
//! turn cycle against the relay.
pub mod client;

use std::{
    fmt::Debug,
    sync::{Arc, Mutex as StdMutex, MutexGuard},
};

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    message::{ChatMessage, RelayRequest, Role},
    topics::QuickTopic,
};
use client::{RelayCallError, RelayClient};

pub const GREETING_ID: &str = "greeting";
pub const GREETING: &str = "Hi there! I'm PawsBot 🐾 I'm here to help you care for your furry (and scaly!) friends. Who would you like to learn about today?";
pub const WIDGET_FALLBACK: &str = "Oops! I'm having a little trouble right now. Please try again! 🐾";

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            role,
            content: content.into(),
        }
    }

    fn greeting() -> Self {
        Self {
            id: GREETING_ID.to_string(),
            role: Role::Assistant,
            content: GREETING.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending { turn: Uuid },
}

type PhaseSlot = Arc<StdMutex<Phase>>;

fn lock_phase(slot: &StdMutex<Phase>) -> MutexGuard<'_, Phase> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Handle for the single request in flight. Only `begin_submit` creates one.
///
/// Dropping it without calling [`ChatWidget::finish`] (a cancelled future, a
/// timeout, a panicking client) still returns the widget to idle.
#[derive(Debug)]
#[must_use = "pass the ticket to `finish` to record the reply"]
pub struct InFlight {
    turn: Uuid,
    phase: PhaseSlot,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut phase = lock_phase(&self.phase);
        if *phase == (Phase::Sending { turn: self.turn }) {
            tracing::warn!(turn = %self.turn, "turn abandoned before the relay answered");
            *phase = Phase::Idle;
        }
    }
}

#[derive(Debug)]
pub struct PendingTurn {
    pub ticket: InFlight,
    pub request: RelayRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied,
    FellBack,
}

type ScrollHook = Box<dyn FnMut(&Message) + Send>;

pub struct ChatWidget {
    is_open: bool,
    messages: Vec<Message>,
    input: String,
    phase: PhaseSlot,
    scroll_hook: Option<ScrollHook>,
}

impl Debug for ChatWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidget")
            .field("is_open", &self.is_open)
            .field("messages", &self.messages.len())
            .field("phase", &self.phase())
            .finish()
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    pub fn new() -> Self {
        Self {
            is_open: false,
            messages: vec![Message::greeting()],
            input: String::new(),
            phase: Arc::new(StdMutex::new(Phase::Idle)),
            scroll_hook: None,
        }
    }

    /// Called with the newest message after every append.
    pub fn with_scroll_hook(mut self, hook: impl FnMut(&Message) + Send + 'static) -> Self {
        self.scroll_hook = Some(Box::new(hook));
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn phase(&self) -> Phase {
        *lock_phase(&self.phase)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase(), Phase::Sending { .. })
    }

    pub fn topics_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn can_send(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Conversation as sent to the relay. The greeting never leaves the widget.
    pub fn history_for_relay(&self) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .filter(|m| m.id != GREETING_ID)
            .map(|m| ChatMessage::new(m.role, m.content.clone()))
            .collect()
    }

    /// Starts a turn. Returns `None` without touching any state when the
    /// submission is empty or a turn is already in flight.
    pub fn begin_submit(&mut self, text: &str, topic: Option<QuickTopic>) -> Option<PendingTurn> {
        if self.is_loading() {
            tracing::debug!("submission ignored, a turn is already in flight");
            return None;
        }

        let content = match (text.trim().is_empty(), topic) {
            (false, _) => text.to_string(),
            (true, Some(topic)) => topic.label().to_string(),
            (true, None) => return None,
        };

        self.push(Message::new(Role::User, content));
        self.input.clear();

        let turn = Uuid::now_v7();
        *lock_phase(&self.phase) = Phase::Sending { turn };

        Some(PendingTurn {
            ticket: InFlight { turn, phase: self.phase.clone() },
            request: RelayRequest {
                messages: self.history_for_relay(),
                quick_reply: topic.map(|t| t.id().to_string()),
            },
        })
    }

    pub fn begin_submit_input(&mut self) -> Option<PendingTurn> {
        let text = self.input.clone();
        self.begin_submit(&text, None)
    }

    /// Unknown tags are a no-op.
    pub fn select_topic(&mut self, tag: &str) -> Option<PendingTurn> {
        let topic = QuickTopic::from_id(tag)?;
        self.begin_submit(topic.label(), Some(topic))
    }

    /// Resolves the in-flight turn and returns the widget to idle.
    /// A ticket issued by another widget is ignored.
    pub fn finish(
        &mut self,
        ticket: InFlight,
        outcome: Result<String, RelayCallError>,
    ) -> Option<TurnOutcome> {
        if self.phase() != (Phase::Sending { turn: ticket.turn }) {
            tracing::warn!(turn = %ticket.turn, "ignoring ticket for a turn this widget is not sending");
            return None;
        }

        let resolved = match outcome {
            Ok(reply) => {
                self.push(Message::new(Role::Assistant, reply));
                TurnOutcome::Replied
            }
            Err(err) => {
                tracing::warn!(error = %err, "PawsBot error");
                self.push(Message::new(Role::Assistant, WIDGET_FALLBACK));
                TurnOutcome::FellBack
            }
        };

        *lock_phase(&self.phase) = Phase::Idle;
        Some(resolved)
    }

    /// Full turn while holding the widget exclusively.
    pub async fn submit<C>(
        &mut self,
        client: &C,
        text: &str,
        topic: Option<QuickTopic>,
    ) -> Option<TurnOutcome>
    where
        C: RelayClient + ?Sized,
    {
        let PendingTurn { ticket, request } = self.begin_submit(text, topic)?;
        let outcome = client.send(&request).await;
        self.finish(ticket, outcome)
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        if let (Some(hook), Some(latest)) = (self.scroll_hook.as_mut(), self.messages.last()) {
            hook(latest);
        }
    }
}

/// Full turn against a shared widget. The lock is released while the relay
/// call is pending so other controls stay usable. Dropping the returned future
/// early leaves the widget idle.
pub async fn dispatch<C, F>(widget: &Mutex<ChatWidget>, client: &C, begin: F) -> Option<TurnOutcome>
where
    C: RelayClient + ?Sized,
    F: FnOnce(&mut ChatWidget) -> Option<PendingTurn>,
{
    let PendingTurn { ticket, request } = begin(&mut *widget.lock().await)?;
    let outcome = client.send(&request).await;
    widget.lock().await.finish(ticket, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_idle_with_greeting() {
        let widget = ChatWidget::new();
        assert!(!widget.is_open());
        assert!(!widget.is_loading());
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.messages()[0].id, GREETING_ID);
        assert!(widget.history_for_relay().is_empty());
    }

    #[test]
    fn toggle_only_flips_visibility() {
        let mut widget = ChatWidget::new();
        widget.toggle_open();
        assert!(widget.is_open());
        widget.toggle_open();
        assert!(!widget.is_open());
        assert_eq!(widget.messages().len(), 1);
    }

    #[test]
    fn blank_submission_without_topic_is_ignored() {
        let mut widget = ChatWidget::new();
        assert!(widget.begin_submit("   ", None).is_none());
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.phase(), Phase::Idle);
    }

    #[test]
    fn whitespace_with_topic_sends_label() {
        let mut widget = ChatWidget::new();
        let pending = widget.begin_submit("  ", Some(QuickTopic::FunFacts)).unwrap();
        assert_eq!(widget.messages()[1].content, QuickTopic::FunFacts.label());
        assert_eq!(pending.request.quick_reply.as_deref(), Some("fun-facts"));
        widget.finish(pending.ticket, Ok("Cats sleep a lot!".into()));
    }

    #[test]
    fn foreign_ticket_does_not_resolve_turn() {
        let mut a = ChatWidget::new();
        let mut b = ChatWidget::new();
        let pending_a = a.begin_submit("hello a", None).unwrap();
        let pending_b = b.begin_submit("hello b", None).unwrap();

        assert_eq!(b.finish(pending_a.ticket, Ok("reply meant for a".into())), None);
        assert!(b.is_loading());
        assert_eq!(b.messages().len(), 2);
        assert_eq!(b.messages()[1].content, "hello b");

        // a's ticket was consumed without an answer, so a is free again
        assert!(!a.is_loading());
        assert_eq!(b.finish(pending_b.ticket, Ok("hi b".into())), Some(TurnOutcome::Replied));
        assert!(!b.is_loading());
    }

    #[test]
    fn dropped_ticket_releases_loading() {
        let mut widget = ChatWidget::new();
        let pending = widget.begin_submit("anyone?", None).unwrap();
        assert!(widget.is_loading());

        drop(pending);
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(widget.messages().len(), 2);
        assert!(widget.begin_submit("again", None).is_some());
    }
}
