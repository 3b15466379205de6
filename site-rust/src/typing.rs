//! Character-by-character typing animation over a cycle of phrases.

use crate::{Lifecycle, SiteError, SiteResult};
use serde::Serialize;
use std::time::Duration;
use tokio::task::AbortHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypingPhase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    /// Delay between typed characters.
    pub speed: Duration,
    /// Delay between deleted characters.
    pub delete_speed: Duration,
    /// How long a fully typed phrase stays on screen.
    pub pause_time: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            pause_time: Duration::from_millis(2000),
        }
    }
}

/// What the widget renders after each step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingEffectState {
    pub display_text: String,
    pub text_index: usize,
    pub phase: TypingPhase,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<Vec<char>>,
    timings: TypingTimings,
    display: Vec<char>,
    text_index: usize,
    phase: TypingPhase,
}

impl TypingEffect {
    pub fn new<I, S>(phrases: I, timings: TypingTimings) -> SiteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|phrase| phrase.as_ref().chars().collect())
            .collect();
        if phrases.is_empty() {
            return Err(SiteError::InvalidInput(
                "typing effect needs at least one phrase".to_string(),
            ));
        }

        Ok(Self {
            phrases,
            timings,
            display: Vec::new(),
            text_index: 0,
            phase: TypingPhase::Typing,
        })
    }

    #[must_use]
    pub fn display_text(&self) -> String {
        self.display.iter().collect()
    }

    #[must_use]
    pub fn text_index(&self) -> usize {
        self.text_index
    }

    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[must_use]
    pub fn current_phrase(&self) -> String {
        self.phrases[self.text_index].iter().collect()
    }

    #[must_use]
    pub fn state(&self) -> TypingEffectState {
        TypingEffectState {
            display_text: self.display_text(),
            text_index: self.text_index,
            phase: self.phase,
        }
    }

    /// Delay before the first tick after mount.
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        self.timings.speed
    }

    /// Advance one step and return how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        let phrase = &self.phrases[self.text_index];

        match self.phase {
            TypingPhase::Typing => {
                if self.display.len() < phrase.len() {
                    self.display.push(phrase[self.display.len()]);
                }
                if self.display.len() == phrase.len() {
                    self.phase = TypingPhase::Pausing;
                    self.timings.pause_time
                } else {
                    self.timings.speed
                }
            }
            TypingPhase::Pausing => {
                self.phase = TypingPhase::Deleting;
                self.timings.delete_speed
            }
            TypingPhase::Deleting => {
                self.display.pop();
                if self.display.is_empty() {
                    self.text_index = (self.text_index + 1) % self.phrases.len();
                    self.phase = TypingPhase::Typing;
                    self.timings.speed
                } else {
                    self.timings.delete_speed
                }
            }
        }
    }

    /// Run the animation on `lifecycle`, reporting every step to `on_update`.
    /// The pending timer is cancelled when the lifecycle unmounts.
    pub fn spawn<F>(mut self, lifecycle: &Lifecycle, on_update: F) -> Option<AbortHandle>
    where
        F: Fn(TypingEffectState) + Send + 'static,
    {
        let handle = lifecycle.handle();
        lifecycle.spawn(async move {
            let mut delay = self.initial_delay();
            loop {
                tokio::time::sleep(delay).await;
                if !handle.is_mounted() {
                    break;
                }
                delay = self.tick();
                on_update(self.state());
            }
        })
    }
}
