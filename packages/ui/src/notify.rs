//! Blocking user notifications: `window.alert` in the browser, tracing on
//! native builds (server-side rendering has no dialog surface).

/// Surface a success message to the user.
pub fn notify_success(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("{message}");
}

/// Surface an error message to the user. The operation that failed is over;
/// nothing is retried.
pub fn notify_error(message: &str) {
    let message = format!("Error! {message}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!("{message}");
}
