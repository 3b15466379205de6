//! The floating "Portfolio Assistant" chat widget.
//!
//! The widget keeps two parallel records: the transcript shown to the
//! visitor and the turn history forwarded to the model. Every call re-sends
//! a synthetic opening exchange carrying the portfolio context; it is never
//! shown in the transcript nor stored in the history.

use crate::{content::ContentCatalog, Lifecycle};
use futures::StreamExt;
use portfolio_sdk::{LanguageModel, LanguageModelInput, Message, StreamAccumulator};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const GREETING: &str = "Halo! 👋 Saya asisten AI di portfolio ini. Ada yang ingin ditanyakan?";
pub const APOLOGY: &str = "Maaf, terjadi kesalahan. Silakan coba lagi. 🙏";
pub const NOT_CONFIGURED: &str =
    "⚠️ API key belum dikonfigurasi. Tambahkan GEMINI_API_KEY di file .env";
const PREAMBLE_PREFIX: &str = "Ini adalah sistem prompt kamu sebagai chatbot portfolio: ";
const PREAMBLE_ACK: &str = "Baik, saya siap menjadi asisten portfolio.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}

/// How a call to [`ChatWidget::send_message`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, or another message was still in flight. Nothing changed.
    Rejected,
    /// The model replied and the reply was appended.
    Replied,
    /// The call failed and the apology was appended.
    Failed,
    /// No API key is configured; the configuration hint was appended.
    NotConfigured,
    /// The widget unmounted before the reply arrived; the reply was dropped.
    Discarded,
}

#[derive(Debug)]
struct ChatState {
    messages: Vec<ChatMessage>,
    history: Vec<Message>,
    is_loading: bool,
    is_open: bool,
}

pub struct ChatWidget {
    model: Option<Arc<dyn LanguageModel + Send + Sync>>,
    context: String,
    state: Arc<Mutex<ChatState>>,
    lifecycle: Lifecycle,
}

/// Clears the loading flag on every exit path.
struct LoadingGuard {
    state: Arc<Mutex<ChatState>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_loading = false;
    }
}

impl ChatWidget {
    /// Mount the widget. `model` is `None` when no API key is configured.
    pub fn new(
        model: Option<Arc<dyn LanguageModel + Send + Sync>>,
        catalog: &ContentCatalog,
    ) -> Self {
        Self::with_context(model, catalog.chatbot_context())
    }

    pub fn with_context(
        model: Option<Arc<dyn LanguageModel + Send + Sync>>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            model,
            context: context.into(),
            state: Arc::new(Mutex::new(ChatState {
                messages: vec![ChatMessage::bot(GREETING)],
                history: Vec::new(),
                is_loading: false,
                is_open: false,
            })),
            lifecycle: Lifecycle::mount(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().messages.clone()
    }

    /// Turn history in the shape sent to the model, without the preamble.
    #[must_use]
    pub fn history(&self) -> Vec<Message> {
        self.lock().history.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock().is_open
    }

    pub fn toggle_open(&self) -> bool {
        let mut state = self.lock();
        state.is_open = !state.is_open;
        state.is_open
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Tear the widget down. Replies still in flight are discarded.
    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }

    /// Validate `text`, append it to the transcript and take the in-flight
    /// slot. Returns the trimmed text and the guard that releases the slot.
    fn begin_send(&self, text: &str) -> Option<(String, LoadingGuard)> {
        let text = text.trim();
        if text.is_empty() || !self.lifecycle.is_mounted() {
            return None;
        }

        let mut state = self.lock();
        if state.is_loading {
            tracing::debug!("chat send ignored, a reply is still pending");
            return None;
        }
        state.messages.push(ChatMessage::user(text));
        state.is_loading = true;
        drop(state);

        Some((
            text.to_string(),
            LoadingGuard {
                state: self.state.clone(),
            },
        ))
    }

    fn build_input(&self, text: &str) -> LanguageModelInput {
        let history = self.lock().history.clone();

        let mut messages = Vec::with_capacity(history.len() + 3);
        messages.push(Message::user(format!("{PREAMBLE_PREFIX}{}", self.context)));
        messages.push(Message::model(PREAMBLE_ACK));
        messages.extend(history);
        messages.push(Message::user(text));

        LanguageModelInput {
            messages,
            ..Default::default()
        }
    }

    fn push_bot(&self, text: &str) {
        self.lock().messages.push(ChatMessage::bot(text));
    }

    fn record_exchange(state: &mut ChatState, user_text: &str, reply: &str) {
        state.history.push(Message::user(user_text));
        state.history.push(Message::model(reply));
    }

    /// Send one visitor message and wait for the reply. Exactly one attempt
    /// is made; failures become the apology message.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let Some((text, _loading)) = self.begin_send(text) else {
            return SendOutcome::Rejected;
        };

        let Some(model) = self.model.clone() else {
            self.push_bot(NOT_CONFIGURED);
            return SendOutcome::NotConfigured;
        };

        let input = self.build_input(&text);
        let result = model.generate(input).await;

        if !self.lifecycle.is_mounted() {
            return SendOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                let mut state = self.lock();
                state.messages.push(ChatMessage::bot(response.text.clone()));
                Self::record_exchange(&mut state, &text, &response.text);
                SendOutcome::Replied
            }
            Err(error) => {
                tracing::warn!(%error, provider = model.provider(), "chat reply failed");
                self.push_bot(APOLOGY);
                SendOutcome::Failed
            }
        }
    }

    /// Like [`send_message`](Self::send_message), but the reply is rendered
    /// as it streams in: a bot message is appended once the stream opens and
    /// grows with every delta, which is also passed to `on_delta`.
    pub async fn send_message_streaming<F>(&self, text: &str, mut on_delta: F) -> SendOutcome
    where
        F: FnMut(&str) + Send,
    {
        let Some((text, _loading)) = self.begin_send(text) else {
            return SendOutcome::Rejected;
        };

        let Some(model) = self.model.clone() else {
            self.push_bot(NOT_CONFIGURED);
            return SendOutcome::NotConfigured;
        };

        let input = self.build_input(&text);
        let mut stream = match model.stream(input).await {
            Ok(stream) => stream,
            Err(error) => {
                if !self.lifecycle.is_mounted() {
                    return SendOutcome::Discarded;
                }
                tracing::warn!(%error, provider = model.provider(), "chat stream failed to open");
                self.push_bot(APOLOGY);
                return SendOutcome::Failed;
            }
        };

        let reply_index = {
            let mut state = self.lock();
            state.messages.push(ChatMessage::bot(String::new()));
            state.messages.len() - 1
        };

        let mut accumulator = StreamAccumulator::new();
        let mut failure = None;
        while let Some(partial) = stream.next().await {
            if !self.lifecycle.is_mounted() {
                return SendOutcome::Discarded;
            }
            match partial {
                Ok(partial) => {
                    if let Some(delta) = accumulator.add_partial(partial) {
                        self.lock().messages[reply_index].text = accumulator.text().to_string();
                        on_delta(&delta);
                    }
                }
                Err(error) => {
                    failure = Some(error.to_string());
                    break;
                }
            }
        }

        if !self.lifecycle.is_mounted() {
            return SendOutcome::Discarded;
        }

        let failure = failure.or_else(|| {
            accumulator
                .is_empty()
                .then(|| "stream ended without text".to_string())
        });

        let mut state = self.lock();
        if let Some(error) = failure {
            tracing::warn!(%error, provider = model.provider(), "chat stream failed");
            APOLOGY.clone_into(&mut state.messages[reply_index].text);
            return SendOutcome::Failed;
        }

        let reply = accumulator.compute_response().text;
        Self::record_exchange(&mut state, &text, &reply);
        SendOutcome::Replied
    }
}
