use eframe::egui;

use guide_chat::config::WidgetConfig;
use guide_chat::i18n::Locale;
use guide_chat::ui::ChatWidget;

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut config = WidgetConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Could not load config: {}. Using defaults.", err);
        WidgetConfig::default()
    });

    if let Ok(url) = std::env::var("GUIDE_CHAT_URL") {
        config.base_url = url;
    }

    if let Err(err) = config.validate() {
        tracing::warn!("Config invalid: {}. Using defaults.", err);
        config = WidgetConfig::default();
    }

    let locale = match config.locale.as_deref() {
        Some(tag) => Locale::resolve(tag),
        None => Locale::detect(),
    };
    tracing::info!("Starting demo host against {} ({:?})", config.base_url, locale);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Guide Chat Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(DemoPage::new(&config, locale)))),
    )
}

/// Stand-in for a site page that embeds the widget in one corner.
struct DemoPage {
    widget: ChatWidget,
}

impl DemoPage {
    fn new(config: &WidgetConfig, locale: Locale) -> Self {
        Self {
            widget: ChatWidget::new(config, locale),
        }
    }
}

impl eframe::App for DemoPage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            ui.heading("Demo page");
            ui.add_space(8.0);
            ui.label("This window stands in for a site embedding the guide widget.");
            ui.label("When the backend reports itself healthy, a chat toggle appears in the lower right corner.");
        });

        self.widget.show(ctx);
    }
}
