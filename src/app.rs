//! Application state and core logic

use crate::bindings::{
    bind_otp_filter, bind_panel_switch, bind_password_toggle, bind_resend, init_email_display,
    Bindings, EventCtx,
};
use crate::config::TuiConfig;
use crate::state::{
    ids, ActivePanel, AppState, Element, ElementStore, Label, Link, Panel, PasswordInput,
    TextInput, TimerQueue, ToggleButton, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Digits the OTP input accepts
pub const OTP_LENGTH: usize = 6;
/// Generous bound for email inputs
const EMAIL_MAX_LENGTH: usize = 254;

/// Main application struct
pub struct App {
    /// Current shell state (view, panel, focus)
    pub state: AppState,
    /// All interface elements, keyed by identifier
    pub store: ElementStore,
    /// Registered event handlers
    pub bindings: Bindings,
    /// Pending crossfade timers
    pub timers: TimerQueue,
    /// Notices queued by handlers during the current event
    notice_queue: Vec<String>,
    /// Last notice, shown in the status bar until the next key press
    pub notice: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance: build the page, read the cached
    /// email, and wire every binding.
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("config load failed, using defaults: {err}");
            TuiConfig::default()
        });

        let mut store = build_page();
        init_email_display(&mut store, ids::USER_EMAIL, config.cached_email());

        let mut bindings = Bindings::default();
        wire_page(&mut bindings, &store);

        Ok(Self {
            state: AppState::default(),
            store,
            bindings,
            timers: TimerQueue::default(),
            notice_queue: Vec::new(),
            notice: None,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Fire any due crossfade timers
    pub fn tick(&mut self, now: Instant) {
        self.timers.advance(&mut self.store, now);
    }

    /// True while a fade is rendering or timers are pending
    pub fn is_animating(&self, now: Instant) -> bool {
        self.store.any_panel_fading(now) || !self.timers.is_empty()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Any key press clears the current notice
        self.notice = None;

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus.prev(),
            KeyCode::Esc => match self.state.current_view {
                View::Verify => self.navigate(View::SignIn),
                View::SignIn => self.quit = true,
            },
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Backspace => self.erase_char(),
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                if self.focused_is_clickable() {
                    if c == ' ' {
                        self.activate_focused();
                    }
                } else {
                    self.type_char(c);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.current_view = view;
        self.state.refresh_focus();
        tracing::debug!(?view, "navigated");
    }

    fn focused_is_clickable(&self) -> bool {
        self.state.focus.active_id().is_some_and(|id| {
            self.store.toggle_button(id).is_some() || self.store.link(id).is_some()
        })
    }

    /// Click the focused button or link, or submit the form the
    /// focused input belongs to.
    fn activate_focused(&mut self) {
        let Some(id) = self.state.focus.active_id() else {
            return;
        };

        if self.focused_is_clickable() {
            self.click(id);
            // Panel-switch triggers move the focus ring to the panel
            // being revealed; the crossfade itself runs on timers.
            match id {
                ids::SHOW_LOGIN => {
                    self.state.active_panel = ActivePanel::Login;
                    self.state.refresh_focus();
                }
                ids::SHOW_REGISTER => {
                    self.state.active_panel = ActivePanel::Registration;
                    self.state.refresh_focus();
                }
                _ => return,
            }
            tracing::debug!(panel = self.state.active_panel.panel_id(), "switching panel");
            return;
        }

        // Enter inside a registration input submits the panel
        if self.state.current_view == View::SignIn
            && self.state.active_panel == ActivePanel::Registration
        {
            self.submit_registration();
        }
    }

    /// Registration submit: cache the entered email for the verify
    /// screen, then show it. Navigation only; nothing is sent.
    fn submit_registration(&mut self) {
        let email = self
            .store
            .text_input(ids::REG_EMAIL)
            .map(|input| input.value.trim().to_string())
            .unwrap_or_default();

        if !email.is_empty() {
            let config = TuiConfig {
                user_email: Some(email.clone()),
            };
            if let Err(err) = config.save() {
                tracing::warn!("failed to cache email: {err}");
            }
            init_email_display(&mut self.store, ids::USER_EMAIL, Some(&email));
        }

        self.navigate(View::Verify);
    }

    fn type_char(&mut self, c: char) {
        let Some(id) = self.state.focus.active_id() else {
            return;
        };
        if let Some(field) = self.store.password_input_mut(id) {
            field.push_char(c);
        } else if let Some(input) = self.store.text_input(id) {
            let mut proposed = input.value.clone();
            proposed.push(c);
            self.input(id, &proposed);
        }
    }

    fn erase_char(&mut self) {
        let Some(id) = self.state.focus.active_id() else {
            return;
        };
        if let Some(field) = self.store.password_input_mut(id) {
            field.pop_char();
        } else if let Some(input) = self.store.text_input(id) {
            let mut proposed = input.value.clone();
            proposed.pop();
            self.input(id, &proposed);
        }
    }

    /// Dispatch a click event and drain any notices it raised
    fn click(&mut self, id: &str) -> bool {
        let now = Instant::now();
        let mut ctx = EventCtx::new(&mut self.timers, &mut self.notice_queue, now);
        let prevented = self.bindings.dispatch_click(&mut self.store, id, &mut ctx);
        self.drain_notices();
        prevented
    }

    /// Dispatch an input event and drain any notices it raised
    fn input(&mut self, id: &str, text: &str) {
        let now = Instant::now();
        let mut ctx = EventCtx::new(&mut self.timers, &mut self.notice_queue, now);
        self.bindings
            .dispatch_input(&mut self.store, id, text, &mut ctx);
        self.drain_notices();
    }

    fn drain_notices(&mut self) {
        if let Some(notice) = self.notice_queue.drain(..).last() {
            self.notice = Some(notice);
        }
    }
}

/// Build every element the sign-in and verify screens reference
fn build_page() -> ElementStore {
    let mut store = ElementStore::default();

    // Registration panel starts interactively visible
    store.insert(ids::REGISTRATION_FORM, Element::Panel(Panel::shown_opaque()));
    store.insert(ids::LOGIN_FORM, Element::Panel(Panel::hidden()));

    store.insert(
        ids::REG_EMAIL,
        Element::TextInput(TextInput::new(EMAIL_MAX_LENGTH)),
    );
    store.insert(
        ids::REG_PASSWORD,
        Element::PasswordInput(PasswordInput::default()),
    );
    store.insert(
        ids::TOGGLE_REG_PASSWORD,
        Element::ToggleButton(ToggleButton::default()),
    );
    store.insert(
        ids::REG_PASSWORD2,
        Element::PasswordInput(PasswordInput::default()),
    );
    store.insert(
        ids::TOGGLE_REG_PASSWORD2,
        Element::ToggleButton(ToggleButton::default()),
    );

    store.insert(
        ids::LOGIN_EMAIL,
        Element::TextInput(TextInput::new(EMAIL_MAX_LENGTH)),
    );
    store.insert(
        ids::LOGIN_PASSWORD,
        Element::PasswordInput(PasswordInput::default()),
    );
    store.insert(
        ids::TOGGLE_LOGIN_PASSWORD,
        Element::ToggleButton(ToggleButton::default()),
    );

    store.insert(ids::SHOW_LOGIN, Element::Link(Link));
    store.insert(ids::SHOW_REGISTER, Element::Link(Link));

    store.insert(ids::USER_EMAIL, Element::Label(Label::default()));
    store.insert(ids::OTP, Element::TextInput(TextInput::new(OTP_LENGTH)));
    store.insert(ids::RESEND, Element::Link(Link));

    store
}

/// Attach every binding the page uses. Binders skip silently when an
/// element is missing, so partial pages are fine.
fn wire_page(bindings: &mut Bindings, store: &ElementStore) {
    bind_password_toggle(bindings, store, ids::TOGGLE_REG_PASSWORD, ids::REG_PASSWORD);
    bind_password_toggle(
        bindings,
        store,
        ids::TOGGLE_REG_PASSWORD2,
        ids::REG_PASSWORD2,
    );
    bind_password_toggle(
        bindings,
        store,
        ids::TOGGLE_LOGIN_PASSWORD,
        ids::LOGIN_PASSWORD,
    );

    bind_panel_switch(
        bindings,
        store,
        ids::SHOW_LOGIN,
        ids::REGISTRATION_FORM,
        ids::LOGIN_FORM,
    );
    bind_panel_switch(
        bindings,
        store,
        ids::SHOW_REGISTER,
        ids::LOGIN_FORM,
        ids::REGISTRATION_FORM,
    );

    bind_otp_filter(bindings, store, ids::OTP);
    bind_resend(bindings, store, ids::RESEND);
}
