pub mod state;
pub mod transcript;
pub mod widget;

pub use widget::ChatWidget;
