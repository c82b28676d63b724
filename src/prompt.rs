//! Browser Confirmation Prompt

use packing_list::Confirm;

/// `window.confirm`, answering "no" when no window is available
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Confirm for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(?err, "confirm dialog failed");
                false
            }
        }
    }
}
