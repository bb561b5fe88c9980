use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::api::{Availability, ChatClient, ChatError};
use crate::config::WidgetConfig;
use crate::i18n::Locale;
use crate::ui::state::{PanelState, SendState, WidgetState};
use crate::ui::transcript::Transcript;

const CORNER_MARGIN: f32 = 16.0;
const PANEL_OFFSET: f32 = 64.0;
const PANEL_SIZE: [f32; 2] = [320.0, 420.0];
const TRANSCRIPT_HEIGHT: f32 = 300.0;

/// The embeddable chat widget: state machine, backend client and the
/// channels that carry background results back to the UI thread. Hosts
/// construct one and call [`ChatWidget::show`] every frame.
pub struct ChatWidget {
    state: WidgetState,
    client: ChatClient,
    probe_started: bool,
    probe_rx: Option<mpsc::Receiver<Availability>>,
    reply_rx: Option<mpsc::Receiver<Result<String, ChatError>>>,
    focus_input: bool,
}

impl ChatWidget {
    pub fn new(config: &WidgetConfig, locale: Locale) -> Self {
        Self {
            state: WidgetState::new(locale),
            client: ChatClient::new(&config.base_url),
            probe_started: false,
            probe_rx: None,
            reply_rx: None,
            focus_input: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.state.locale()
    }

    pub fn is_open(&self) -> bool {
        self.state.panel() == PanelState::Open
    }

    pub fn is_busy(&self) -> bool {
        self.state.send_state() == SendState::Sending
    }

    pub fn availability(&self) -> Option<Availability> {
        self.state.availability()
    }

    pub fn toggle_visible(&self) -> bool {
        self.state.toggle_visible()
    }

    pub fn transcript(&self) -> &Transcript {
        self.state.transcript()
    }

    pub fn input(&self) -> &str {
        self.state.input()
    }

    pub fn input_mut(&mut self) -> &mut String {
        self.state.input_mut()
    }

    /// Opens or closes the panel. Opening queues a focus request for the
    /// text input on the next drawn frame.
    pub fn toggle_panel(&mut self) {
        self.state.toggle_panel();
        if self.state.panel() == PanelState::Open {
            self.focus_input = true;
        }
    }

    pub fn close_panel(&mut self) {
        self.state.close_panel();
    }

    /// Starts the availability probe. Runs at most once per widget; the
    /// first [`ChatWidget::show`] calls this, and hosts driving the
    /// widget without drawing can call it themselves.
    pub fn begin_probe(&mut self) {
        if self.probe_started {
            return;
        }
        self.probe_started = true;

        let (tx, rx) = mpsc::channel(1);
        self.probe_rx = Some(rx);

        let client = self.client.clone();
        tokio::spawn(async move {
            let decision = client.probe().await;
            let _ = tx.send(decision).await;
        });
    }

    /// Submits whatever is in the input buffer. A blank input or an
    /// in-flight request makes this a silent no-op.
    pub fn submit(&mut self) {
        let Some(message) = self.state.begin_send() else {
            return;
        };

        let (tx, rx) = mpsc::channel(1);
        self.reply_rx = Some(rx);

        let client = self.client.clone();
        tokio::spawn(async move {
            let outcome = client.send_message(&message).await;
            let _ = tx.send(outcome).await;
        });
    }

    /// Drains finished background work into the state machine. Called by
    /// [`ChatWidget::show`] each frame; callable directly by headless
    /// hosts and tests.
    pub fn pump(&mut self) {
        if let Some(rx) = self.probe_rx.as_mut() {
            match rx.try_recv() {
                Ok(decision) => {
                    self.state.apply_probe(decision);
                    self.probe_rx = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    // A probe that dies proves nothing against the chat.
                    tracing::warn!("Availability probe dropped its channel. Offering chat anyway.");
                    self.state.apply_probe(Availability::Available);
                    self.probe_rx = None;
                }
            }
        }

        if let Some(rx) = self.reply_rx.as_mut() {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.state.finish_send(outcome);
                    self.reply_rx = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    // The busy state must clear even if the task died.
                    self.state.finish_send(Err(ChatError::Interrupted));
                    self.reply_rx = None;
                }
            }
        }
    }

    /// Draws the widget as an overlay. Nothing at all is drawn until the
    /// availability probe resolves in the chat's favor.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.begin_probe();
        self.pump();

        if self.probe_rx.is_some() || self.reply_rx.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        if !self.state.toggle_visible() {
            return;
        }

        let strings = self.state.strings();

        egui::Area::new(egui::Id::new("guide-chat-toggle"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-CORNER_MARGIN, -CORNER_MARGIN])
            .show(ctx, |ui| {
                if ui
                    .button(egui::RichText::new(strings.toggle).size(16.0))
                    .clicked()
                {
                    self.toggle_panel();
                }
            });

        if self.state.panel() != PanelState::Open {
            return;
        }

        let mut open = true;
        egui::Window::new(strings.title)
            .open(&mut open)
            .anchor(egui::Align2::RIGHT_BOTTOM, [-CORNER_MARGIN, -PANEL_OFFSET])
            .collapsible(false)
            .resizable(false)
            .default_size(PANEL_SIZE)
            .show(ctx, |ui| {
                self.panel_contents(ui);
            });

        if !open {
            self.close_panel();
        }
    }

    fn panel_contents(&mut self, ui: &mut egui::Ui) {
        let strings = self.state.strings();
        let busy = self.is_busy();

        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false; 2])
            .max_height(TRANSCRIPT_HEIGHT)
            .show(ui, |ui| {
                self.state.transcript().show(ui);

                // stick_to_bottom releases once the user scrolls away;
                // an append re-pins the view to the newest line.
                if self.state.take_scroll_request() {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });

        ui.add_space(6.0);

        if busy {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label(egui::RichText::new(strings.sending).italics().weak());
            });
            ui.add_space(4.0);
        }

        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(self.state.input_mut())
                .hint_text(strings.placeholder)
                .desired_width(ui.available_width() - 48.0);
            let response = ui.add_enabled(!busy, input);

            if self.focus_input {
                response.request_focus();
                self.focus_input = false;
            }

            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui.add_enabled(!busy, egui::Button::new("➤")).clicked();

            if (submitted || clicked) && !busy {
                self.submit();
            }
        });
    }
}
