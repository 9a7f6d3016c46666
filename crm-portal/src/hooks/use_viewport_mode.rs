use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::debug;

use crm_portal::shell::ViewportMode;

const WIDTH_LISTENER: &str = r#"
    const send = () => dioxus.send(window.innerWidth);
    window.addEventListener('resize', send);
    send();
"#;

/// Track whether the viewport is wide enough for the persistent drawer.
pub fn use_viewport_mode(breakpoint_px: f64) -> Signal<ViewportMode> {
    let mut mode = use_signal(|| ViewportMode::Persistent);

    use_effect(move || {
        let mut listener = eval(WIDTH_LISTENER);
        spawn(async move {
            while let Ok(width) = listener.recv::<f64>().await {
                let next = ViewportMode::for_width(width, breakpoint_px);
                if *mode.peek() != next {
                    debug!(width, ?next, "viewport mode changed");
                    mode.set(next);
                }
            }
        });
    });

    mode
}
