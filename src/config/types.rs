// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_MIN_CHARS: usize = 1;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_NO_RESULTS_TEXT: &str = "No results found";
pub const DEFAULT_LOADING_TEXT: &str = "Searching...";
pub const DEFAULT_ID_PREFIX: &str = "search";

/// Autocomplete behavior and copy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub disabled: bool,
    /// Minimum input length, in characters, before searching
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    /// Quiet period after the last keystroke before searching
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_no_results_text")]
    pub no_results_text: String,
    #[serde(default = "default_loading_text")]
    pub loading_text: String,
    /// Suffix for generated element ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_min_chars() -> usize {
    DEFAULT_MIN_CHARS
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_no_results_text() -> String {
    DEFAULT_NO_RESULTS_TEXT.to_string()
}

fn default_loading_text() -> String {
    DEFAULT_LOADING_TEXT.to_string()
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            placeholder: default_placeholder(),
            disabled: false,
            min_chars: DEFAULT_MIN_CHARS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            no_results_text: default_no_results_text(),
            loading_text: default_loading_text(),
            id_prefix: default_id_prefix(),
        }
    }
}

impl AutocompleteConfig {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }

    pub fn with_loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}

/// Picker binary settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PickerConfig {
    /// Artificial delay added to every search, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub picker: PickerConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
