//! Form interaction controller: binder functions and event dispatch
//!
//! Each binder checks that the elements it names exist and silently
//! binds nothing when one is missing; that feature is simply inert.
//! Registration returns a handle so callers can unbind for teardown.

use crate::state::{ElementStore, InputKind, TimerAction, TimerQueue, ToggleButton, FADE_DURATION};
use std::time::Instant;

/// Fixed acknowledgment shown when the resend trigger is clicked
pub const RESEND_NOTICE: &str = "A new code has been sent to your email.";
/// Address shown when no cached email exists
pub const FALLBACK_EMAIL: &str = "user@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
}

/// Per-event mutable context handlers run against
pub struct EventCtx<'a> {
    pub timers: &'a mut TimerQueue,
    pub notices: &'a mut Vec<String>,
    pub now: Instant,
    default_prevented: bool,
}

impl<'a> EventCtx<'a> {
    pub fn new(timers: &'a mut TimerQueue, notices: &'a mut Vec<String>, now: Instant) -> Self {
        Self {
            timers,
            notices,
            now,
            default_prevented: false,
        }
    }

    /// Suppress the trigger's default action for this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

type Handler = Box<dyn FnMut(&mut ElementStore, &mut EventCtx)>;

struct BindingEntry {
    id: String,
    kind: EventKind,
    handler: Handler,
}

/// Handle returned by registration; pass to [`Bindings::unbind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingHandle(usize);

/// Registered event handlers, dispatched in registration order
#[derive(Default)]
pub struct Bindings {
    entries: Vec<Option<BindingEntry>>,
}

impl Bindings {
    pub fn on_click(
        &mut self,
        id: &str,
        handler: impl FnMut(&mut ElementStore, &mut EventCtx) + 'static,
    ) -> BindingHandle {
        self.register(id, EventKind::Click, Box::new(handler))
    }

    pub fn on_input(
        &mut self,
        id: &str,
        handler: impl FnMut(&mut ElementStore, &mut EventCtx) + 'static,
    ) -> BindingHandle {
        self.register(id, EventKind::Input, Box::new(handler))
    }

    fn register(&mut self, id: &str, kind: EventKind, handler: Handler) -> BindingHandle {
        self.entries.push(Some(BindingEntry {
            id: id.to_string(),
            kind,
            handler,
        }));
        BindingHandle(self.entries.len() - 1)
    }

    /// Remove a binding; the disposer for test teardown
    #[allow(dead_code)]
    pub fn unbind(&mut self, handle: BindingHandle) {
        if let Some(entry) = self.entries.get_mut(handle.0) {
            *entry = None;
        }
    }

    /// Dispatch a click on `id`. Returns true if any handler
    /// suppressed the default action.
    pub fn dispatch_click(
        &mut self,
        store: &mut ElementStore,
        id: &str,
        ctx: &mut EventCtx,
    ) -> bool {
        self.run(store, id, EventKind::Click, ctx);
        ctx.default_prevented()
    }

    /// Write `text` into the named input (host behavior) and fire the
    /// input handlers, which may rewrite the value.
    pub fn dispatch_input(
        &mut self,
        store: &mut ElementStore,
        id: &str,
        text: &str,
        ctx: &mut EventCtx,
    ) {
        if let Some(input) = store.text_input_mut(id) {
            input.value = text.to_string();
        }
        self.run(store, id, EventKind::Input, ctx);
    }

    fn run(&mut self, store: &mut ElementStore, id: &str, kind: EventKind, ctx: &mut EventCtx) {
        for entry in self.entries.iter_mut().flatten() {
            if entry.kind == kind && entry.id == id {
                (entry.handler)(store, ctx);
            }
        }
    }
}

/// Wire a show/hide toggle to a password input. Skipped silently if
/// either element is absent.
pub fn bind_password_toggle(
    bindings: &mut Bindings,
    store: &ElementStore,
    toggle_id: &str,
    input_id: &str,
) -> Option<BindingHandle> {
    if store.toggle_button(toggle_id).is_none() || store.password_input(input_id).is_none() {
        return None;
    }
    let toggle = toggle_id.to_string();
    let input = input_id.to_string();
    Some(bindings.on_click(toggle_id, move |store, _ctx| {
        let next = match store.password_input(&input).map(|f| f.kind) {
            Some(InputKind::Password) => InputKind::Text,
            Some(InputKind::Text) => InputKind::Password,
            None => return,
        };
        if let Some(field) = store.password_input_mut(&input) {
            field.kind = next;
        }
        if let Some(button) = store.toggle_button_mut(&toggle) {
            button.label = match next {
                InputKind::Text => ToggleButton::HIDE.to_string(),
                InputKind::Password => ToggleButton::SHOW.to_string(),
            };
        }
    }))
}

/// Wire a trigger link to crossfade from one panel to the other.
/// Skipped silently if the trigger or either panel is absent.
pub fn bind_panel_switch(
    bindings: &mut Bindings,
    store: &ElementStore,
    trigger_id: &str,
    from_id: &str,
    to_id: &str,
) -> Option<BindingHandle> {
    if store.link(trigger_id).is_none()
        || store.panel(from_id).is_none()
        || store.panel(to_id).is_none()
    {
        return None;
    }
    let from = from_id.to_string();
    let to = to_id.to_string();
    Some(bindings.on_click(trigger_id, move |store, ctx| {
        ctx.prevent_default();
        if let Some(panel) = store.panel_mut(&from) {
            panel.opacity = 1.0;
            panel.fade = None;
            panel.begin_fade(0.0, ctx.now, FADE_DURATION);
        }
        ctx.timers.schedule(
            ctx.now + FADE_DURATION,
            TimerAction::SwapPanels {
                hide: from.clone(),
                reveal: to.clone(),
            },
        );
    }))
}

/// Keep the longest digit-only prefix, at most `limit` characters
pub fn digits_prefix(text: &str, limit: usize) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).take(limit).collect()
}

/// Wire the OTP input to rewrite itself to digits only on every input
/// event. Skipped silently if the element is absent.
pub fn bind_otp_filter(
    bindings: &mut Bindings,
    store: &ElementStore,
    input_id: &str,
) -> Option<BindingHandle> {
    store.text_input(input_id)?;
    let input = input_id.to_string();
    Some(bindings.on_input(input_id, move |store, _ctx| {
        if let Some(field) = store.text_input_mut(&input) {
            field.value = digits_prefix(&field.value, field.max_length);
        }
    }))
}

/// Wire the resend trigger to surface the fixed acknowledgment.
/// Skipped silently if the element is absent.
pub fn bind_resend(
    bindings: &mut Bindings,
    store: &ElementStore,
    trigger_id: &str,
) -> Option<BindingHandle> {
    store.link(trigger_id)?;
    Some(bindings.on_click(trigger_id, move |_store, ctx| {
        ctx.prevent_default();
        ctx.notices.push(RESEND_NOTICE.to_string());
    }))
}

/// Set the email display once at startup: the cached address if one
/// exists, the fixed placeholder otherwise. No-op without the label.
pub fn init_email_display(store: &mut ElementStore, label_id: &str, cached: Option<&str>) {
    if let Some(label) = store.label_mut(label_id) {
        label.text = cached.unwrap_or(FALLBACK_EMAIL).to_string();
    }
}
