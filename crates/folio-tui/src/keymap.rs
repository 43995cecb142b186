use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use folio_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action bound to the "gg" sequence, if configured
    pending_g_action: Option<Action>,
    /// Display strings for the help overlay, in config order
    descriptions: Vec<(String, &'static str)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;
        let mut descriptions = Vec::new();

        let mut add_binding = |key_str: &str, action: Action, help: &'static str| {
            descriptions.push((key_str.to_string(), help));

            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            match parse_key_binding(key_str) {
                Some(binding) => {
                    if let Some(existing) = bindings.get(&binding) {
                        warn!(
                            "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                            key_str, existing, action
                        );
                    } else {
                        bindings.insert(binding, action);
                    }
                }
                None => warn!("Invalid key binding: '{}', ignoring", key_str),
            }
        };

        add_binding(&config.quit, Action::Quit, "quit");
        add_binding(&config.next_section, Action::NextSection, "next section");
        add_binding(&config.prev_section, Action::PrevSection, "previous section");
        add_binding(&config.carousel_next, Action::CarouselNext, "slide forward");
        add_binding(&config.carousel_prev, Action::CarouselPrev, "slide back");
        add_binding(&config.jump_to_first, Action::JumpToFirst, "first item");
        add_binding(&config.jump_to_last, Action::JumpToLast, "last item");
        add_binding(&config.open_link, Action::OpenLink, "open link");
        add_binding(&config.contact, Action::OpenContact, "contact form");
        add_binding(&config.help, Action::ShowHelp, "help");

        // Always available, not configurable
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.entry(KeyBinding::simple(KeyCode::Left)).or_insert(Action::CarouselPrev);
        bindings.entry(KeyBinding::simple(KeyCode::Right)).or_insert(Action::CarouselNext);
        bindings.entry(KeyBinding::simple(KeyCode::Home)).or_insert(Action::JumpToFirst);
        bindings.entry(KeyBinding::simple(KeyCode::End)).or_insert(Action::JumpToLast);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self {
            bindings,
            pending_g_action,
            descriptions,
        }
    }

    /// Get action for a key binding
    ///
    /// Punctuation arrives with SHIFT on some terminals ('?' is Shift+/) and
    /// BackTab arrives with or without it, so those retry with SHIFT toggled.
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding).or_else(|| {
            let shift_agnostic = match binding.code {
                KeyCode::Char(c) => !c.is_ascii_alphabetic(),
                KeyCode::BackTab => true,
                _ => false,
            };
            if !shift_agnostic {
                return None;
            }
            let toggled = KeyBinding::new(binding.code, binding.modifiers.symmetric_difference(KeyModifiers::SHIFT));
            self.bindings.get(&toggled)
        })
    }

    /// Get the action for completed "gg" sequence
    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Check if a single 'g' press should start a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }

    /// (key notation, description) pairs for the help overlay
    pub fn descriptions(&self) -> &[(String, &'static str)] {
        &self.descriptions
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "h", "l", "q", "/"
/// - Uppercase (Shift): "G"
/// - Ctrl: "<C-n>"
/// - Shift: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<Right>", ...
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.starts_with('<') && s.ends_with('>') && s.len() > 2 {
        return parse_special_key(&s[1..s.len() - 1]);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        // crossterm reports Shift+Tab as BackTab
        return match parse_key_name(rest)? {
            KeyCode::Tab => Some(KeyBinding::shift(KeyCode::BackTab)),
            key => Some(KeyBinding::shift(key)),
        };
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}
