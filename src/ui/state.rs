use crate::api::{Availability, ChatError};
use crate::i18n::{Locale, Strings};
use crate::ui::transcript::{Speaker, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
}

/// All widget state, owned in one place and mutated only through the
/// methods below. No method here performs I/O; the surrounding shell
/// decides what to do with the returned values.
#[derive(Debug)]
pub struct WidgetState {
    locale: Locale,
    panel: PanelState,
    send: SendState,
    greeted: bool,
    availability: Option<Availability>,
    transcript: Transcript,
    input: String,
    scroll_pending: bool,
}

impl WidgetState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            panel: PanelState::Closed,
            send: SendState::Idle,
            greeted: false,
            availability: None,
            transcript: Transcript::default(),
            input: String::new(),
            scroll_pending: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn send_state(&self) -> SendState {
        self.send
    }

    pub fn availability(&self) -> Option<Availability> {
        self.availability
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// True once the probe has resolved in favor of offering the chat.
    /// Until then nothing of the widget is drawn.
    pub fn toggle_visible(&self) -> bool {
        self.availability == Some(Availability::Available)
    }

    /// Flips the panel. The first transition to Open ever appends the
    /// greeting line; the latch never resets, so reopening stays silent.
    pub(crate) fn toggle_panel(&mut self) {
        match self.panel {
            PanelState::Open => self.panel = PanelState::Closed,
            PanelState::Closed => {
                self.panel = PanelState::Open;
                if !self.greeted {
                    self.greeted = true;
                    let hello = self.strings().hello;
                    self.append_line(Speaker::Bot, hello);
                }
            }
        }
    }

    /// Closes the panel. Safe to call in any state; the transcript is
    /// left untouched.
    pub(crate) fn close_panel(&mut self) {
        self.panel = PanelState::Closed;
    }

    /// Gate of the send pipeline. Returns the message to put on the wire,
    /// or `None` when the submission must be ignored: a blank input, or a
    /// request already in flight. Rejected submissions change nothing,
    /// not even the input buffer.
    pub(crate) fn begin_send(&mut self) -> Option<String> {
        if self.send == SendState::Sending {
            return None;
        }

        let message = self.input.trim().to_string();
        if message.is_empty() {
            return None;
        }

        self.append_line(Speaker::User, &message);
        self.input.clear();
        self.send = SendState::Sending;
        Some(message)
    }

    /// Lands the outcome of a send. Every error collapses to the one
    /// localized error line; the last statement always returns the
    /// pipeline to Idle.
    pub(crate) fn finish_send(&mut self, outcome: Result<String, ChatError>) {
        match outcome {
            Ok(reply) => self.append_line(Speaker::Bot, &reply),
            Err(err) => {
                tracing::warn!("Chat request failed: {}", err);
                let error_line = self.strings().error;
                self.append_line(Speaker::Bot, error_line);
            }
        }
        self.send = SendState::Idle;
    }

    /// Applies the probe decision. Latches on the first call; later
    /// decisions are ignored. An unfavorable decision also closes the
    /// panel in case it was opened before the probe resolved.
    pub(crate) fn apply_probe(&mut self, decision: Availability) {
        if self.availability.is_some() {
            return;
        }
        self.availability = Some(decision);
        if decision == Availability::Unavailable {
            self.panel = PanelState::Closed;
        }
    }

    /// True when an append queued a scroll to the newest line. Reading
    /// the request clears it; it stays queued across frames where the
    /// panel is not drawn.
    pub(crate) fn take_scroll_request(&mut self) -> bool {
        let pending = self.scroll_pending;
        self.scroll_pending = false;
        pending
    }

    // Every transcript append goes through here so the log always
    // scrolls to the line it just gained.
    fn append_line(&mut self, speaker: Speaker, text: &str) {
        self.transcript.append(speaker, text);
        self.scroll_pending = true;
    }
}
