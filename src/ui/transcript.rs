use chrono::{DateTime, Utc};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn glyph(self) -> &'static str {
        match self {
            Speaker::User => "👤",
            Speaker::Bot => "🤖",
        }
    }
}

/// One rendered line of the conversation. `text` is stored already
/// escaped; rendering never reinterprets it.
#[derive(Debug, Clone)]
pub struct TranscriptLine {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// Append-only conversation log. Lines can never be edited or removed,
/// and panel open/close cycles do not touch it.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    /// Appends one line, escaping markup-significant characters first.
    /// What is stored is exactly what the log renders.
    pub fn append(&mut self, speaker: Speaker, text: &str) {
        self.lines.push(TranscriptLine {
            speaker,
            text: escape_markup(text),
            at: Utc::now(),
        });
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        for line in &self.lines {
            let is_user = line.speaker == Speaker::User;
            let bg_color = if is_user {
                egui::Color32::from_rgb(70, 130, 180)
            } else {
                egui::Color32::from_rgb(60, 60, 80)
            };

            ui.horizontal(|ui| {
                if is_user {
                    ui.add_space(24.0);
                }

                egui::Frame::none()
                    .fill(bg_color)
                    .rounding(8.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new(line.speaker.glyph()).size(14.0));
                            ui.label(
                                egui::RichText::new(&line.text)
                                    .size(14.0)
                                    .color(egui::Color32::WHITE),
                            );
                        });
                        ui.label(
                            egui::RichText::new(line.at.format("%H:%M").to_string())
                                .size(10.0)
                                .color(egui::Color32::from_rgb(200, 200, 200)),
                        );
                    });

                if !is_user {
                    ui.add_space(24.0);
                }
            });
            ui.add_space(6.0);
        }
    }
}

/// Escapes the characters that could carry markup into the log. A
/// single pass over the input; entities produced within the call are
/// never rescanned.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
