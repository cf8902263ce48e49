//! System clipboard access

use anyhow::Context;

/// Copy `text` to the system clipboard, exactly as given.
pub fn set_text(text: &str) -> anyhow::Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut cb| cb.set_text(text.to_string()))
        .context("set clipboard text")?;
    Ok(())
}
