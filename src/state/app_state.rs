//! Application state definitions

use crate::state::elements::ids;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Sign-up / sign-in panels with the crossfade between them
    #[default]
    SignIn,
    /// Email verification with the OTP input
    Verify,
}

/// Which sign-in panel the user is interacting with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    #[default]
    Registration,
    Login,
}

impl ActivePanel {
    pub fn panel_id(&self) -> &'static str {
        match self {
            Self::Registration => ids::REGISTRATION_FORM,
            Self::Login => ids::LOGIN_FORM,
        }
    }
}

/// Ordered focusable element ids with wrapping navigation
#[derive(Debug, Clone)]
pub struct FocusRing {
    order: Vec<&'static str>,
    active: usize,
}

impl FocusRing {
    pub fn new(order: Vec<&'static str>) -> Self {
        Self { order, active: 0 }
    }

    pub fn active_id(&self) -> Option<&'static str> {
        self.order.get(self.active).copied()
    }

    pub fn next(&mut self) {
        if !self.order.is_empty() {
            self.active = (self.active + 1) % self.order.len();
        }
    }

    pub fn prev(&mut self) {
        if self.order.is_empty() {
            return;
        }
        if self.active == 0 {
            self.active = self.order.len() - 1;
        } else {
            self.active -= 1;
        }
    }
}

/// Focus order for the registration panel
pub fn registration_focus_order() -> Vec<&'static str> {
    vec![
        ids::REG_EMAIL,
        ids::REG_PASSWORD,
        ids::TOGGLE_REG_PASSWORD,
        ids::REG_PASSWORD2,
        ids::TOGGLE_REG_PASSWORD2,
        ids::SHOW_LOGIN,
    ]
}

/// Focus order for the login panel
pub fn login_focus_order() -> Vec<&'static str> {
    vec![
        ids::LOGIN_EMAIL,
        ids::LOGIN_PASSWORD,
        ids::TOGGLE_LOGIN_PASSWORD,
        ids::SHOW_REGISTER,
    ]
}

/// Focus order for the verification view
pub fn verify_focus_order() -> Vec<&'static str> {
    vec![ids::OTP, ids::RESEND]
}

/// Shell state the renderer and key handlers share
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub active_panel: ActivePanel,
    pub focus: FocusRing,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            active_panel: ActivePanel::default(),
            focus: FocusRing::new(registration_focus_order()),
        }
    }
}

impl AppState {
    /// Rebuild the focus ring for the current view and panel
    pub fn refresh_focus(&mut self) {
        let order = match self.current_view {
            View::Verify => verify_focus_order(),
            View::SignIn => match self.active_panel {
                ActivePanel::Registration => registration_focus_order(),
                ActivePanel::Login => login_focus_order(),
            },
        };
        self.focus = FocusRing::new(order);
    }
}
