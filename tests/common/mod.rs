use std::time::Duration;

use guide_chat::ui::ChatWidget;

/// Polls the widget until `done` holds, draining background work between
/// polls. Panics with `what` after a couple of seconds so a stuck channel
/// fails the test instead of hanging it.
pub async fn pump_until(widget: &mut ChatWidget, what: &str, done: impl Fn(&ChatWidget) -> bool) {
    for _ in 0..400 {
        widget.pump();
        if done(widget) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("timed out waiting for {what}");
}
