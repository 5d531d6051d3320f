//! Blocking browser acknowledgement dialog.

/// Show `message` in a blocking `window.alert`. No-op off-browser.
pub fn acknowledge(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("acknowledging contact submission");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
