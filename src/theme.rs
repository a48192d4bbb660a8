//! Theme Tokens
//!
//! Named color/spacing custom properties injected into `<head>` while the
//! app is mounted.

use serde::Deserialize;

/// Id of the injected `<style>` element
const STYLE_ID: &str = "dd-theme-tokens";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub bg: String,
    pub ink: String,
    pub muted: String,
    pub accent: String,
    pub elev: String,
    pub radius: [String; 3],
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            bg: "#F8F8F7".to_string(),
            ink: "#111111".to_string(),
            muted: "#6b7280".to_string(),
            accent: "#FF7A59".to_string(),
            elev: "0 8px 24px rgba(0,0,0,0.06)".to_string(),
            radius: ["8px".to_string(), "16px".to_string(), "24px".to_string()],
        }
    }
}

impl ThemeTokens {
    /// `:root{...}` rule declaring every token
    pub fn to_css(&self) -> String {
        let mut css = format!(
            ":root{{--bg:{};--ink:{};--muted:{};--accent:{};--elev:{}",
            self.bg, self.ink, self.muted, self.accent, self.elev
        );
        for (i, radius) in self.radius.iter().enumerate() {
            css.push_str(&format!(";--radius-{}:{}", i + 1, radius));
        }
        css.push('}');
        css
    }
}

/// Append the token stylesheet to `<head>`, replacing a previous one
pub fn install(tokens: &ThemeTokens) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[THEME] no document, skipping tokens");
        return;
    };
    uninstall();

    let Some(head) = doc.head() else {
        log::warn!("[THEME] document has no <head>");
        return;
    };
    match doc.create_element("style") {
        Ok(style) => {
            style.set_id(STYLE_ID);
            style.set_text_content(Some(&tokens.to_css()));
            if head.append_child(&style).is_err() {
                log::warn!("[THEME] failed to attach token stylesheet");
            }
        }
        Err(err) => log::warn!("[THEME] failed to create <style>: {:?}", err),
    }
}

/// Remove the token stylesheet if present
pub fn uninstall() {
    if let Some(style) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(STYLE_ID))
    {
        style.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens_css() {
        assert_eq!(
            ThemeTokens::default().to_css(),
            ":root{--bg:#F8F8F7;--ink:#111111;--muted:#6b7280;--accent:#FF7A59;\
             --elev:0 8px 24px rgba(0,0,0,0.06);--radius-1:8px;--radius-2:16px;--radius-3:24px}"
        );
    }
}
