//! User configuration: keybindings, scroll-effect tuning and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/stay-scroll/config.toml` (default
//! `~/.config/stay-scroll/config.toml`).  Unknown keys are ignored; invalid
//! tuning values fall back to the defaults with a warning.

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::parallax::ParallaxMapper;
use crate::core::progress::SpringConfig;
use crate::core::threshold::DEFAULT_THRESHOLD_PX;

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for `{key}`: {reason}")]
    InvalidTuning { key: &'static str, reason: String },
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    ToggleMenu,
    NextLink,
    PrevLink,
    Activate,
    Book,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::Top,
        Action::Bottom,
        Action::ToggleMenu,
        Action::NextLink,
        Action::PrevLink,
        Action::Activate,
        Action::Book,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ScrollUp => "Scroll Up",
            Action::ScrollDown => "Scroll Down",
            Action::PageUp => "Page Up",
            Action::PageDown => "Page Down",
            Action::Top => "Top",
            Action::Bottom => "Bottom",
            Action::ToggleMenu => "Menu",
            Action::NextLink => "Next Link",
            Action::PrevLink => "Prev Link",
            Action::Activate => "Open Link",
            Action::Book => "Book",
            Action::Quit => "Quit",
        }
    }

    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::ToggleMenu => "toggle_menu",
            Action::NextLink => "next_link",
            Action::PrevLink => "prev_link",
            Action::Activate => "activate",
            Action::Book => "book",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A key code plus CTRL/ALT/SHIFT modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    fn modifier_prefix(&self) -> String {
        let mut s = String::new();
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(name);
            }
        }
        s
    }

    /// Short form for the status bar (e.g. `"↓"`, `"Ctrl+c"`).
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            _ => self.key_name(),
        };
        format!("{}{key}", self.modifier_prefix())
    }

    fn key_name(&self) -> String {
        match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::BackTab => "BackTab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }

    fn to_config_string(&self) -> String {
        format!("{}{}", self.modifier_prefix(), self.key_name())
    }

    /// Parse `"Ctrl+c"`, `"Shift+Tab"`, `"q"`, `"PageDown"`…
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ => {
                // Single characters keep their case (`G` vs `g`).
                let mut chars = key_part.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyCode::Char(c)
            }
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── tuning ────────────

/// Scroll-effect and animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Pixels represented by one terminal row.
    pub px_per_row: u32,
    /// Navbar turns solid strictly past this offset.
    pub threshold_px: u32,
    pub parallax_domain_px: f64,
    pub parallax_translate_px: f64,
    pub parallax_min_opacity: f64,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    pub spring_rest_delta: f64,
    /// Rows moved per arrow key / wheel notch.
    pub scroll_step_rows: u32,
    /// `1.0` = reference pacing, `0` = no entrance animation.
    pub entrance_speed: f64,
    /// Anchor navigation ease; `0` jumps straight to the section.
    pub glide_speed: f64,
    pub booking_lead_days: u32,
    pub booking_nights: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        let spring = SpringConfig::default();
        let parallax = ParallaxMapper::default();
        Self {
            px_per_row: 20,
            threshold_px: DEFAULT_THRESHOLD_PX,
            parallax_domain_px: parallax.domain,
            parallax_translate_px: parallax.translate_range.1,
            parallax_min_opacity: parallax.opacity_range.1,
            spring_stiffness: spring.stiffness,
            spring_damping: spring.damping,
            spring_rest_delta: spring.rest_delta,
            scroll_step_rows: 3,
            entrance_speed: 1.0,
            glide_speed: 0.35,
            booking_lead_days: 14,
            booking_nights: 3,
        }
    }
}

impl Tuning {
    pub fn spring(&self) -> SpringConfig {
        SpringConfig {
            stiffness: self.spring_stiffness,
            damping: self.spring_damping,
            rest_delta: self.spring_rest_delta,
        }
    }

    pub fn parallax(&self) -> ParallaxMapper {
        ParallaxMapper {
            domain: self.parallax_domain_px,
            translate_range: (0.0, self.parallax_translate_px),
            opacity_range: (1.0, self.parallax_min_opacity),
        }
    }

    /// Tuning keys, in file order.
    const KEYS: &'static [&'static str] = &[
        "px_per_row",
        "threshold_px",
        "parallax_domain_px",
        "parallax_translate_px",
        "parallax_min_opacity",
        "spring_stiffness",
        "spring_damping",
        "spring_rest_delta",
        "scroll_step_rows",
        "entrance_speed",
        "glide_speed",
        "booking_lead_days",
        "booking_nights",
    ];

    /// Largest accepted spring stiffness and damping.
    pub const MAX_SPRING_STIFFNESS: f64 = 10_000.0;
    pub const MAX_SPRING_DAMPING: f64 = 1_000.0;
    /// Smallest non-zero entrance speed; slower factors overflow the timings.
    pub const MIN_ENTRANCE_SPEED: f64 = 0.01;

    /// Reject values that would break the derivations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::KEYS.iter().try_for_each(|&key| self.check(key))
    }

    /// Reset every invalid key to its default, keeping the valid ones.
    /// Returns the errors that were repaired.
    pub fn repair(&mut self) -> Vec<ConfigError> {
        let defaults = Tuning::default();
        let mut repaired = Vec::new();
        for &key in Self::KEYS {
            if let Err(e) = self.check(key) {
                self.reset(key, &defaults);
                repaired.push(e);
            }
        }
        repaired
    }

    fn check(&self, key: &'static str) -> Result<(), ConfigError> {
        let bad = |reason: &str| -> Result<(), ConfigError> {
            Err(ConfigError::InvalidTuning {
                key,
                reason: reason.to_string(),
            })
        };
        let stiffness = self.spring_stiffness;
        let damping = self.spring_damping;
        let entrance = self.entrance_speed;
        match key {
            "px_per_row" if self.px_per_row == 0 => bad("must be at least 1"),
            "parallax_domain_px"
                if !(self.parallax_domain_px.is_finite() && self.parallax_domain_px > 0.0) =>
            {
                bad("must be a positive number")
            }
            "parallax_translate_px"
                if !self.parallax_translate_px.is_finite() || self.parallax_translate_px < 0.0 =>
            {
                bad("must be a non-negative number")
            }
            "parallax_min_opacity" if !(0.0..=1.0).contains(&self.parallax_min_opacity) => {
                bad("must be within 0..=1")
            }
            "spring_stiffness" if !(stiffness > 0.0 && stiffness <= Self::MAX_SPRING_STIFFNESS) => {
                bad("must be within (0, 10000]")
            }
            "spring_damping" if !(0.0..=Self::MAX_SPRING_DAMPING).contains(&damping) => {
                bad("must be within 0..=1000")
            }
            "spring_rest_delta"
                if !(self.spring_rest_delta.is_finite() && self.spring_rest_delta > 0.0) =>
            {
                bad("must be positive")
            }
            "scroll_step_rows" if self.scroll_step_rows == 0 => bad("must be at least 1"),
            "entrance_speed"
                if !entrance.is_finite()
                    || !(entrance == 0.0 || entrance >= Self::MIN_ENTRANCE_SPEED) =>
            {
                bad("must be 0 or at least 0.01")
            }
            "glide_speed" if !(0.0..=1.0).contains(&self.glide_speed) => bad("must be within 0..=1"),
            "booking_nights" if self.booking_nights == 0 => bad("must be at least 1"),
            _ => Ok(()),
        }
    }

    fn reset(&mut self, key: &str, defaults: &Tuning) {
        match key {
            "px_per_row" => self.px_per_row = defaults.px_per_row,
            "threshold_px" => self.threshold_px = defaults.threshold_px,
            "parallax_domain_px" => self.parallax_domain_px = defaults.parallax_domain_px,
            "parallax_translate_px" => self.parallax_translate_px = defaults.parallax_translate_px,
            "parallax_min_opacity" => self.parallax_min_opacity = defaults.parallax_min_opacity,
            "spring_stiffness" => self.spring_stiffness = defaults.spring_stiffness,
            "spring_damping" => self.spring_damping = defaults.spring_damping,
            "spring_rest_delta" => self.spring_rest_delta = defaults.spring_rest_delta,
            "scroll_step_rows" => self.scroll_step_rows = defaults.scroll_step_rows,
            "entrance_speed" => self.entrance_speed = defaults.entrance_speed,
            "glide_speed" => self.glide_speed = defaults.glide_speed,
            "booking_lead_days" => self.booking_lead_days = defaults.booking_lead_days,
            "booking_nights" => self.booking_nights = defaults.booking_nights,
            _ => {}
        }
    }

    /// Apply one `key = value` pair.  Returns `false` for unknown keys or
    /// unparsable values.
    fn set(&mut self, key: &str, value: &str) -> bool {
        fn num<T: std::str::FromStr>(slot: &mut T, value: &str) -> bool {
            match value.parse() {
                Ok(v) => {
                    *slot = v;
                    true
                }
                Err(_) => false,
            }
        }
        match key {
            "px_per_row" => num(&mut self.px_per_row, value),
            "threshold_px" => num(&mut self.threshold_px, value),
            "parallax_domain_px" => num(&mut self.parallax_domain_px, value),
            "parallax_translate_px" => num(&mut self.parallax_translate_px, value),
            "parallax_min_opacity" => num(&mut self.parallax_min_opacity, value),
            "spring_stiffness" => num(&mut self.spring_stiffness, value),
            "spring_damping" => num(&mut self.spring_damping, value),
            "spring_rest_delta" => num(&mut self.spring_rest_delta, value),
            "scroll_step_rows" => num(&mut self.scroll_step_rows, value),
            "entrance_speed" => num(&mut self.entrance_speed, value),
            "glide_speed" => num(&mut self.glide_speed, value),
            "booking_lead_days" => num(&mut self.booking_lead_days, value),
            "booking_nights" => num(&mut self.booking_nights, value),
            _ => false,
        }
    }

    fn serialise_into(&self, lines: &mut Vec<String>) {
        lines.push(format!("px_per_row = {}", self.px_per_row));
        lines.push(format!("threshold_px = {}", self.threshold_px));
        lines.push(format!("parallax_domain_px = {}", self.parallax_domain_px));
        lines.push(format!("parallax_translate_px = {}", self.parallax_translate_px));
        lines.push(format!("parallax_min_opacity = {}", self.parallax_min_opacity));
        lines.push(format!("spring_stiffness = {}", self.spring_stiffness));
        lines.push(format!("spring_damping = {}", self.spring_damping));
        lines.push(format!("spring_rest_delta = {}", self.spring_rest_delta));
        lines.push(format!("scroll_step_rows = {}", self.scroll_step_rows));
        lines.push(format!("entrance_speed = {}", self.entrance_speed));
        lines.push(format!("glide_speed = {}", self.glide_speed));
        lines.push(format!("booking_lead_days = {}", self.booking_lead_days));
        lines.push(format!("booking_nights = {}", self.booking_nights));
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration: keybindings and tuning.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub tuning: Tuning,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            tuning: Tuning::default(),
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let mut m = HashMap::new();

        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Action::PageUp, vec![KeyBind::new(KeyCode::PageUp, n), KeyBind::new(Char('b'), n)]);
        m.insert(Action::PageDown, vec![KeyBind::new(KeyCode::PageDown, n), KeyBind::new(Char(' '), n)]);
        m.insert(Top, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(Bottom, vec![KeyBind::new(End, n), KeyBind::new(Char('G'), shift)]);
        m.insert(ToggleMenu, vec![KeyBind::new(Char('m'), n)]);
        m.insert(NextLink, vec![KeyBind::new(Tab, n), KeyBind::new(Right, n)]);
        m.insert(PrevLink, vec![KeyBind::new(BackTab, shift), KeyBind::new(Left, n)]);
        m.insert(Activate, vec![KeyBind::new(Enter, n)]);
        m.insert(Book, vec![KeyBind::new(Char('r'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action bound to `event`; the binding with the most
    /// modifiers wins when several match.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: scroll | {}: menu | {}: links | {}: book | {}: quit",
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::ToggleMenu),
            self.short_binding(Action::NextLink),
            self.short_binding(Action::Book),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                tracing::warn!("{}", ConfigError::Io { path, source });
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path();
        let io = |source| ConfigError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        std::fs::write(&path, self.serialise()).map_err(io)
    }

    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if let Some(action) = Action::from_config_key(key) {
                let parsed: Vec<KeyBind> = value
                    .split(',')
                    .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                    .collect();
                if !parsed.is_empty() {
                    config.bindings.insert(action, parsed);
                }
                continue;
            }

            if !config.tuning.set(key, value) {
                tracing::debug!(key, value, "ignoring config entry");
            }
        }

        for e in config.tuning.repair() {
            tracing::warn!("{e}; using the default");
        }
        config
    }

    pub fn serialise(&self) -> String {
        let mut lines = vec![
            "# stay-scroll configuration".to_string(),
            String::new(),
            "# Scroll effects (offsets in pixels)".to_string(),
        ];
        self.tuning.serialise_into(&mut lines);
        lines.extend([
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ]);

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// `$XDG_CONFIG_HOME/stay-scroll/config.toml`.
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn default_tuning_matches_reference_effects() {
        let t = Tuning::default();
        assert_eq!(t.threshold_px, 50);
        assert_eq!(t.parallax(), ParallaxMapper::default());
        assert_eq!(t.spring(), SpringConfig::default());
    }

    #[test]
    fn serialise_then_parse_keeps_everything() {
        let mut config = AppConfig::default();
        config.tuning.threshold_px = 80;
        config.tuning.spring_damping = 12.5;
        config
            .bindings
            .insert(Action::Quit, vec![KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL)]);

        let parsed = AppConfig::parse(&config.serialise());
        assert_eq!(parsed.tuning, config.tuning);
        assert_eq!(parsed.bindings, config.bindings);
    }

    #[test]
    fn invalid_tuning_falls_back_per_key() {
        let parsed = AppConfig::parse("threshold_px = 10\nparallax_min_opacity = 3\n");
        assert_eq!(parsed.tuning.threshold_px, 10);
        assert_eq!(parsed.tuning.parallax_min_opacity, Tuning::default().parallax_min_opacity);
        assert!(parsed.tuning.validate().is_ok());
    }

    #[test]
    fn tiny_entrance_speed_is_rejected() {
        let parsed = AppConfig::parse("entrance_speed = 1e-30\n");
        assert_eq!(parsed.tuning.entrance_speed, 1.0);
        assert_eq!(AppConfig::parse("entrance_speed = 0\n").tuning.entrance_speed, 0.0);
    }

    #[test]
    fn runaway_spring_values_are_rejected() {
        let parsed = AppConfig::parse("spring_stiffness = 1000000\nspring_damping = 5000\nspring_rest_delta = 0.01\n");
        assert_eq!(parsed.tuning.spring_stiffness, Tuning::default().spring_stiffness);
        assert_eq!(parsed.tuning.spring_damping, Tuning::default().spring_damping);
        assert_eq!(parsed.tuning.spring_rest_delta, 0.01);
    }

    #[test]
    fn page_keys_bind_page_actions() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::PageUp)), Some(Action::PageUp));
        assert_eq!(config.match_key(key(KeyCode::PageDown)), Some(Action::PageDown));
        assert_eq!(config.match_key(key(KeyCode::Char(' '))), Some(Action::PageDown));
    }

    #[test]
    fn validate_names_the_bad_key() {
        let tuning = Tuning {
            px_per_row: 0,
            ..Tuning::default()
        };
        match tuning.validate() {
            Err(ConfigError::InvalidTuning { key, .. }) => assert_eq!(key, "px_per_row"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_and_malformed_lines_are_ignored() {
        let parsed = AppConfig::parse("[section]\nnonsense\ncolour = teal\nscroll_step_rows = lots\n");
        assert_eq!(parsed.tuning, Tuning::default());
    }

    #[test]
    fn match_key_uses_bindings() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Char('j'))), Some(Action::ScrollDown));
        assert_eq!(config.match_key(key(KeyCode::Char('m'))), Some(Action::ToggleMenu));
        assert_eq!(config.match_key(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn uppercase_binding_requires_shift() {
        let config = AppConfig::default();
        let g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(config.match_key(g), Some(Action::Bottom));
        assert_eq!(config.match_key(key(KeyCode::Char('g'))), Some(Action::Top));
    }

    #[test]
    fn parse_keybind_forms() {
        assert_eq!(
            KeyBind::parse("Ctrl+c"),
            Some(KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
        assert_eq!(KeyBind::parse("pgdn"), Some(KeyBind::new(KeyCode::PageDown, KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("F5"), Some(KeyBind::new(KeyCode::F(5), KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("Hyper+x"), None);
        assert_eq!(KeyBind::parse("xyz"), None);
    }
}
