/// Page-level browser capabilities used by view-models.
pub trait Browser: Send + Sync {
    /// Ask the user to confirm; `false` when declined or unavailable.
    fn confirm(&self, message: &str) -> bool;
    fn reload(&self);
}

pub struct WindowBrowser;

impl Browser for WindowBrowser {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().reload() {
            log::error!("page reload failed: {:?}", err);
        }
    }
}
