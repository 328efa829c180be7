use dioxus::prelude::*;

use common::theme::{SystemPreference, ThemePreference};

// thin wrappers over the handful of window apis the site touches
//
// all of them degrade to a no-op (or None) when there is no window, which keeps
// the components free of unwrap chains

fn media_matches(query: &str) -> Option<bool> {
    let window = web_sys::window()?;
    let list = window.match_media(query).ok().flatten()?;
    Some(list.matches())
}

pub struct ColorScheme;

impl SystemPreference for ColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        media_matches("(prefers-color-scheme: dark)")
    }
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
}

pub fn is_small_screen() -> bool {
    viewport_width().is_some_and(|w| w < 768.0)
}

pub fn apply_theme(pref: ThemePreference) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(err) = root.set_attribute("data-theme", pref.as_str()) {
            tracing::warn!("failed to set data-theme: {err:?}");
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn smooth_scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

// fraction of the document scrolled past, in 0..=1
pub fn scroll_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };

    let scrolled = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let total = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);

    let scrollable = total - viewport;
    if scrollable <= 0.0 {
        0.0
    } else {
        (scrolled / scrollable).clamp(0.0, 1.0)
    }
}

pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

fn clipboard_script(text: &str) -> anyhow::Result<String> {
    let text = serde_json::to_string(text)?;
    Ok(format!(
        "try {{ await navigator.clipboard.writeText({text}); return true; }} catch (e) {{ return false; }}"
    ))
}

// resolves once the browser has accepted (or refused) the write
pub async fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let written = document::eval(&clipboard_script(text)?)
        .join::<bool>()
        .await
        .map_err(|err| anyhow::Error::msg(format!("clipboard eval failed: {err:?}")))?;

    if written {
        Ok(())
    } else {
        Err(anyhow::Error::msg("the browser refused the clipboard write"))
    }
}

// good enough to decorrelate two page loads; the animations only need variety
pub fn seed() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_script_awaits_and_reports_the_write() {
        let script = clipboard_script("https://example.com/blog/a\"b").unwrap();

        assert!(script.contains(r#"writeText("https://example.com/blog/a\"b")"#));
        assert!(script.contains("await navigator.clipboard.writeText"));
        assert!(script.contains("return true"));
        assert!(script.contains("return false"));
    }
}
