//! Terminal styling shared by the human-facing writers.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

/// Whether tables and markers may use box-drawing and symbol characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphMode {
    Auto,
    Unicode,
    Ascii,
}

impl GlyphMode {
    pub fn should_use_unicode(&self) -> bool {
        match self {
            Self::Unicode => true,
            Self::Ascii => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub glyphs: GlyphMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            glyphs: GlyphMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, glyphs: GlyphMode) -> Self {
        Self { color, glyphs }
    }

    /// Honors NO_COLOR, CLICOLOR=0 and CLICOLOR_FORCE=1, in that order of
    /// increasing precedence.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // no-color.org: presence alone disables color
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// ASCII-only, no colors
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            glyphs: GlyphMode::Ascii,
        }
    }

    /// Apply a `use_color` preference from the config file. Environment
    /// overrides already resolved to a fixed mode win.
    pub fn with_color_preference(mut self, use_color: Option<bool>) -> Self {
        if self.color == ColorMode::Auto {
            match use_color {
                Some(true) => self.color = ColorMode::Always,
                Some(false) => self.color = ColorMode::Never,
                None => {}
            }
        }
        self
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn marker(&self, unicode: &str, fallback: &str) -> String;

    /// Color an adjustment by direction: reductions red, increases green.
    fn adjustment(&self, percent: f64, text: &str) -> String {
        if percent < 0.0 {
            self.error(text)
        } else if percent > 0.0 {
            self.success(text)
        } else {
            self.dim(text)
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn marker(&self, unicode: &str, fallback: &str) -> String {
        if self.config.glyphs.should_use_unicode() {
            unicode.to_string()
        } else {
            fallback.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn marker(&self, _unicode: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

/// Pick the formatter matching a configuration.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config == FormattingConfig::plain() {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> FormattingConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FormattingConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_no_color_disables_color() {
        assert_eq!(config_with(&[("NO_COLOR", "")]).color, ColorMode::Never);
    }

    #[test]
    fn test_clicolor_zero_disables_color() {
        assert_eq!(config_with(&[("CLICOLOR", "0")]).color, ColorMode::Never);
        assert_eq!(config_with(&[("CLICOLOR", "1")]).color, ColorMode::Auto);
    }

    #[test]
    fn test_clicolor_force_wins() {
        let config = config_with(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]);
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_color_preference_only_fills_auto() {
        let forced = FormattingConfig::plain().with_color_preference(Some(true));
        assert_eq!(forced.color, ColorMode::Never);

        let auto = FormattingConfig::default().with_color_preference(Some(false));
        assert_eq!(auto.color, ColorMode::Never);
    }

    #[test]
    fn test_plain_formatter_leaves_text_alone() {
        let f = PlainFormatter;
        assert_eq!(f.adjustment(-3.0, "-3.00%"), "-3.00%");
        assert_eq!(f.marker("▲", "+"), "+");
    }

    #[test]
    fn test_colored_formatter_without_color_is_plain() {
        let f = ColoredFormatter::new(FormattingConfig::new(ColorMode::Never, GlyphMode::Unicode));
        assert_eq!(f.header("Report"), "Report");
        assert_eq!(f.marker("▲", "+"), "▲");
    }
}
