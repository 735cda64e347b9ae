//! Clipboard and native dialog helpers.
//!
//! Both are hydrate-only; on the server they report failure so callers
//! never act on an unconfirmed delete.

#![allow(clippy::unused_async)]

/// Ask the user to confirm `message` with the native `confirm()` dialog.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Copy `text` to the system clipboard.
///
/// # Errors
///
/// Returns a printable reason when the clipboard is unavailable or the
/// browser refused the write.
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write failed: {e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard not available on server".to_owned())
    }
}
