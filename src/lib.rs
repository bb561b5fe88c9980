//! Embeddable site-guide chat widget for egui applications.
//!
//! A host constructs a [`ChatWidget`] and calls [`ChatWidget::show`] once
//! per frame; the widget handles its own availability probe, panel state,
//! localization and the request lifecycle against the site backend.

pub mod api;
pub mod config;
pub mod i18n;
pub mod ui;

pub use api::{Availability, ChatClient, ChatError};
pub use config::WidgetConfig;
pub use i18n::{Locale, Strings};
pub use ui::transcript::{Speaker, Transcript, TranscriptLine};
pub use ui::ChatWidget;
