//! Typed interface elements and the element store
//!
//! The store is the single source of truth for everything the forms
//! show: panels, inputs, toggle buttons, labels, and trigger links,
//! keyed by the identifiers the binding layer looks up. Rendering
//! reads the store; only event handlers and timers mutate it.

use crate::state::transition::Fade;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Element identifiers shared between page construction, the binding
/// layer, and the rendering layer.
pub mod ids {
    pub const TOGGLE_REG_PASSWORD: &str = "toggle-reg-password";
    pub const REG_PASSWORD: &str = "reg-password";
    pub const TOGGLE_REG_PASSWORD2: &str = "toggle-reg-password2";
    pub const REG_PASSWORD2: &str = "reg-password2";
    pub const TOGGLE_LOGIN_PASSWORD: &str = "toggle-login-password";
    pub const LOGIN_PASSWORD: &str = "login-password";
    pub const REGISTRATION_FORM: &str = "registration-form";
    pub const LOGIN_FORM: &str = "login-form";
    pub const SHOW_LOGIN: &str = "show-login";
    pub const SHOW_REGISTER: &str = "show-register";
    pub const USER_EMAIL: &str = "user-email";
    pub const OTP: &str = "otp";
    pub const RESEND: &str = "resend";
    pub const REG_EMAIL: &str = "reg-email";
    pub const LOGIN_EMAIL: &str = "login-email";
}

/// Whether a password input renders its value or a masked placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Password,
    Text,
}

/// A password-bearing input field
#[derive(Debug, Clone, Default)]
pub struct PasswordInput {
    pub kind: InputKind,
    pub value: String,
}

impl PasswordInput {
    pub fn is_masked(&self) -> bool {
        self.kind == InputKind::Password
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

/// A button whose label tracks the paired input's visibility
#[derive(Debug, Clone)]
pub struct ToggleButton {
    pub label: String,
}

impl ToggleButton {
    pub const SHOW: &'static str = "Show";
    pub const HIDE: &'static str = "Hide";
}

impl Default for ToggleButton {
    fn default() -> Self {
        Self {
            label: Self::SHOW.to_string(),
        }
    }
}

/// A top-level form section shown or hidden as a unit
#[derive(Debug, Clone)]
pub struct Panel {
    /// Whether the panel participates in layout at all
    pub shown: bool,
    /// Specified opacity, the value the panel settles at
    pub opacity: f32,
    /// In-flight presentational animation, if any
    pub fade: Option<Fade>,
}

impl Panel {
    pub fn shown_opaque() -> Self {
        Self {
            shown: true,
            opacity: 1.0,
            fade: None,
        }
    }

    pub fn hidden() -> Self {
        Self {
            shown: false,
            opacity: 1.0,
            fade: None,
        }
    }

    /// Start an eased fade from the current rendered opacity to `to`
    pub fn begin_fade(&mut self, to: f32, now: Instant, duration: Duration) {
        let from = self.rendered_opacity(now);
        self.opacity = to;
        self.fade = Some(Fade {
            from,
            to,
            start: now,
            duration,
        });
    }

    /// Opacity to render at `now`, easing through any in-flight fade
    pub fn rendered_opacity(&self, now: Instant) -> f32 {
        match &self.fade {
            Some(fade) => fade.opacity_at(now),
            None => self.opacity,
        }
    }

    pub fn is_fading(&self, now: Instant) -> bool {
        self.fade.as_ref().is_some_and(|f| !f.is_done(now))
    }
}

/// A plain text input with a length limit used by the OTP filter
#[derive(Debug, Clone)]
pub struct TextInput {
    pub value: String,
    pub max_length: usize,
}

impl TextInput {
    pub fn new(max_length: usize) -> Self {
        Self {
            value: String::new(),
            max_length,
        }
    }
}

/// A read-only text display
#[derive(Debug, Clone, Default)]
pub struct Label {
    pub text: String,
}

/// A trigger whose default action handlers may suppress
#[derive(Debug, Clone, Default)]
pub struct Link;

#[derive(Debug, Clone)]
pub enum Element {
    PasswordInput(PasswordInput),
    ToggleButton(ToggleButton),
    Panel(Panel),
    TextInput(TextInput),
    Label(Label),
    Link(Link),
}

/// All interface elements, keyed by identifier
#[derive(Debug, Default)]
pub struct ElementStore {
    elements: HashMap<String, Element>,
}

impl ElementStore {
    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn password_input(&self, id: &str) -> Option<&PasswordInput> {
        match self.elements.get(id) {
            Some(Element::PasswordInput(input)) => Some(input),
            _ => None,
        }
    }

    pub fn password_input_mut(&mut self, id: &str) -> Option<&mut PasswordInput> {
        match self.elements.get_mut(id) {
            Some(Element::PasswordInput(input)) => Some(input),
            _ => None,
        }
    }

    pub fn toggle_button(&self, id: &str) -> Option<&ToggleButton> {
        match self.elements.get(id) {
            Some(Element::ToggleButton(button)) => Some(button),
            _ => None,
        }
    }

    pub fn toggle_button_mut(&mut self, id: &str) -> Option<&mut ToggleButton> {
        match self.elements.get_mut(id) {
            Some(Element::ToggleButton(button)) => Some(button),
            _ => None,
        }
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        match self.elements.get(id) {
            Some(Element::Panel(panel)) => Some(panel),
            _ => None,
        }
    }

    pub fn panel_mut(&mut self, id: &str) -> Option<&mut Panel> {
        match self.elements.get_mut(id) {
            Some(Element::Panel(panel)) => Some(panel),
            _ => None,
        }
    }

    pub fn text_input(&self, id: &str) -> Option<&TextInput> {
        match self.elements.get(id) {
            Some(Element::TextInput(input)) => Some(input),
            _ => None,
        }
    }

    pub fn text_input_mut(&mut self, id: &str) -> Option<&mut TextInput> {
        match self.elements.get_mut(id) {
            Some(Element::TextInput(input)) => Some(input),
            _ => None,
        }
    }

    pub fn label(&self, id: &str) -> Option<&Label> {
        match self.elements.get(id) {
            Some(Element::Label(label)) => Some(label),
            _ => None,
        }
    }

    pub fn label_mut(&mut self, id: &str) -> Option<&mut Label> {
        match self.elements.get_mut(id) {
            Some(Element::Label(label)) => Some(label),
            _ => None,
        }
    }

    pub fn link(&self, id: &str) -> Option<&Link> {
        match self.elements.get(id) {
            Some(Element::Link(link)) => Some(link),
            _ => None,
        }
    }

    /// True while any panel still has an in-flight fade
    pub fn any_panel_fading(&self, now: Instant) -> bool {
        self.elements.values().any(|element| match element {
            Element::Panel(panel) => panel.is_fading(now),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod password_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_masked_and_empty() {
            let input = PasswordInput::default();
            assert_eq!(input.kind, InputKind::Password);
            assert!(input.is_masked());
            assert_eq!(input.value, "");
        }

        #[test]
        fn test_push_and_pop_chars() {
            let mut input = PasswordInput::default();
            input.push_char('h');
            input.push_char('i');
            assert_eq!(input.value, "hi");
            input.pop_char();
            assert_eq!(input.value, "h");
        }

        #[test]
        fn test_pop_on_empty_is_noop() {
            let mut input = PasswordInput::default();
            input.pop_char();
            assert_eq!(input.value, "");
        }
    }

    mod toggle_button {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_label_is_show() {
            let button = ToggleButton::default();
            assert_eq!(button.label, ToggleButton::SHOW);
        }
    }

    mod panel {
        use super::*;
        use pretty_assertions::assert_eq;
        use std::time::Duration;

        #[test]
        fn test_shown_opaque_defaults() {
            let panel = Panel::shown_opaque();
            assert!(panel.shown);
            assert_eq!(panel.opacity, 1.0);
            assert!(panel.fade.is_none());
        }

        #[test]
        fn test_hidden_does_not_participate_in_layout() {
            let panel = Panel::hidden();
            assert!(!panel.shown);
        }

        #[test]
        fn test_begin_fade_sets_specified_opacity_immediately() {
            let now = Instant::now();
            let mut panel = Panel::shown_opaque();
            panel.begin_fade(0.0, now, Duration::from_millis(400));
            assert_eq!(panel.opacity, 0.0);
            assert!(panel.fade.is_some());
        }

        #[test]
        fn test_rendered_opacity_reaches_target_after_duration() {
            let now = Instant::now();
            let mut panel = Panel::shown_opaque();
            panel.begin_fade(0.0, now, Duration::from_millis(400));
            let later = now + Duration::from_millis(400);
            assert_eq!(panel.rendered_opacity(later), 0.0);
            assert!(!panel.is_fading(later));
        }

        #[test]
        fn test_rendered_opacity_is_partial_mid_fade() {
            let now = Instant::now();
            let mut panel = Panel::shown_opaque();
            panel.begin_fade(0.0, now, Duration::from_millis(400));
            let mid = now + Duration::from_millis(200);
            let opacity = panel.rendered_opacity(mid);
            assert!(opacity > 0.0 && opacity < 1.0);
            assert!(panel.is_fading(mid));
        }
    }

    mod element_store {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typed_accessors_reject_wrong_kind() {
            let mut store = ElementStore::default();
            store.insert(ids::OTP, Element::TextInput(TextInput::new(6)));

            assert!(store.text_input(ids::OTP).is_some());
            assert!(store.password_input(ids::OTP).is_none());
            assert!(store.panel(ids::OTP).is_none());
            assert!(store.label(ids::OTP).is_none());
        }

        #[test]
        fn test_missing_id_returns_none() {
            let store = ElementStore::default();
            assert!(!store.contains(ids::RESEND));
            assert!(store.link(ids::RESEND).is_none());
        }

        #[test]
        fn test_any_panel_fading() {
            let now = Instant::now();
            let mut store = ElementStore::default();
            store.insert(ids::REGISTRATION_FORM, Element::Panel(Panel::shown_opaque()));
            assert!(!store.any_panel_fading(now));

            store
                .panel_mut(ids::REGISTRATION_FORM)
                .unwrap()
                .begin_fade(0.0, now, Duration::from_millis(400));
            assert!(store.any_panel_fading(now));
            assert!(!store.any_panel_fading(now + Duration::from_millis(500)));
        }
    }
}
