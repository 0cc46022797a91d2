//! Panel crossfade animation and the deferred-effect timer queue
//!
//! Timers are fire-and-forget: nothing cancels them, and overlapping
//! chains from rapid re-triggering resolve by last-write-wins on the
//! panels they touch.

use crate::state::elements::ElementStore;
use std::time::{Duration, Instant};

/// Duration of a panel fade in either direction
pub const FADE_DURATION: Duration = Duration::from_millis(400);
/// Delay between revealing a panel at zero opacity and raising it
pub const REVEAL_DELAY: Duration = Duration::from_millis(10);

/// An eased opacity animation between two values
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub start: Instant,
    pub duration: Duration,
}

impl Fade {
    /// Opacity at `now`, cubic ease-out between the endpoints
    pub fn opacity_at(&self, now: Instant) -> f32 {
        if now <= self.start {
            return self.from;
        }
        let elapsed = now - self.start;
        if elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now >= self.start + self.duration
    }
}

/// Deferred effects the panel switcher schedules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Remove the faded-out panel from layout and reveal the target
    /// at zero opacity
    SwapPanels { hide: String, reveal: String },
    /// Raise the revealed panel to full opacity with a fade-in
    RaiseOpacity { panel: String },
}

#[derive(Debug)]
struct Timer {
    deadline: Instant,
    action: TimerAction,
}

/// Pending deferred effects, fired in scheduling order
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn schedule(&mut self, deadline: Instant, action: TimerAction) {
        self.timers.push(Timer { deadline, action });
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Fire every timer due at `now` against the store. Actions may
    /// schedule follow-up timers; those only fire once their own
    /// deadline passes.
    pub fn advance(&mut self, store: &mut ElementStore, now: Instant) {
        loop {
            let due = self.timers.iter().position(|t| t.deadline <= now);
            let Some(index) = due else {
                return;
            };
            let timer = self.timers.remove(index);
            self.fire(timer.action, store, now);
        }
    }

    fn fire(&mut self, action: TimerAction, store: &mut ElementStore, now: Instant) {
        match action {
            TimerAction::SwapPanels { hide, reveal } => {
                if let Some(panel) = store.panel_mut(&hide) {
                    panel.shown = false;
                    panel.fade = None;
                }
                if let Some(panel) = store.panel_mut(&reveal) {
                    panel.shown = true;
                    panel.opacity = 0.0;
                    panel.fade = None;
                }
                self.schedule(now + REVEAL_DELAY, TimerAction::RaiseOpacity { panel: reveal });
            }
            TimerAction::RaiseOpacity { panel } => {
                if let Some(panel) = store.panel_mut(&panel) {
                    panel.begin_fade(1.0, now, FADE_DURATION);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::elements::{ids, Element, Panel};
    use pretty_assertions::assert_eq;

    fn store_with_panels() -> ElementStore {
        let mut store = ElementStore::default();
        store.insert(ids::REGISTRATION_FORM, Element::Panel(Panel::shown_opaque()));
        store.insert(ids::LOGIN_FORM, Element::Panel(Panel::hidden()));
        store
    }

    mod fade {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_holds_start_value_before_start() {
            let start = Instant::now() + Duration::from_millis(100);
            let fade = Fade {
                from: 1.0,
                to: 0.0,
                start,
                duration: FADE_DURATION,
            };
            assert_eq!(fade.opacity_at(Instant::now()), 1.0);
        }

        #[test]
        fn test_reaches_target_at_duration() {
            let start = Instant::now();
            let fade = Fade {
                from: 1.0,
                to: 0.0,
                start,
                duration: FADE_DURATION,
            };
            assert_eq!(fade.opacity_at(start + FADE_DURATION), 0.0);
            assert!(fade.is_done(start + FADE_DURATION));
        }

        #[test]
        fn test_monotonic_between_endpoints() {
            let start = Instant::now();
            let fade = Fade {
                from: 1.0,
                to: 0.0,
                start,
                duration: FADE_DURATION,
            };
            let quarter = fade.opacity_at(start + FADE_DURATION / 4);
            let half = fade.opacity_at(start + FADE_DURATION / 2);
            assert!(quarter > half);
            assert!(half > 0.0);
        }
    }

    mod timer_queue {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_swap_hides_and_reveals_at_zero_opacity() {
            let now = Instant::now();
            let mut store = store_with_panels();
            let mut timers = TimerQueue::default();
            timers.schedule(
                now,
                TimerAction::SwapPanels {
                    hide: ids::REGISTRATION_FORM.to_string(),
                    reveal: ids::LOGIN_FORM.to_string(),
                },
            );

            timers.advance(&mut store, now);

            let hidden = store.panel(ids::REGISTRATION_FORM).unwrap();
            assert!(!hidden.shown);
            let revealed = store.panel(ids::LOGIN_FORM).unwrap();
            assert!(revealed.shown);
            assert_eq!(revealed.opacity, 0.0);
            // The raise timer is queued but not yet due
            assert_eq!(timers.len(), 1);
        }

        #[test]
        fn test_raise_fires_after_reveal_delay() {
            let now = Instant::now();
            let mut store = store_with_panels();
            let mut timers = TimerQueue::default();
            timers.schedule(
                now,
                TimerAction::SwapPanels {
                    hide: ids::REGISTRATION_FORM.to_string(),
                    reveal: ids::LOGIN_FORM.to_string(),
                },
            );

            timers.advance(&mut store, now);
            timers.advance(&mut store, now + REVEAL_DELAY);

            assert!(timers.is_empty());
            let revealed = store.panel(ids::LOGIN_FORM).unwrap();
            assert_eq!(revealed.opacity, 1.0);
            assert!(revealed.fade.is_some());
        }

        #[test]
        fn test_timer_does_not_fire_early() {
            let now = Instant::now();
            let mut store = store_with_panels();
            let mut timers = TimerQueue::default();
            timers.schedule(
                now + FADE_DURATION,
                TimerAction::SwapPanels {
                    hide: ids::REGISTRATION_FORM.to_string(),
                    reveal: ids::LOGIN_FORM.to_string(),
                },
            );

            timers.advance(&mut store, now + FADE_DURATION - Duration::from_millis(1));
            assert!(store.panel(ids::REGISTRATION_FORM).unwrap().shown);
            assert_eq!(timers.len(), 1);
        }

        #[test]
        fn test_swap_with_missing_panels_is_silent() {
            let now = Instant::now();
            let mut store = ElementStore::default();
            let mut timers = TimerQueue::default();
            timers.schedule(
                now,
                TimerAction::SwapPanels {
                    hide: "gone".to_string(),
                    reveal: "also-gone".to_string(),
                },
            );

            timers.advance(&mut store, now);
            timers.advance(&mut store, now + REVEAL_DELAY);
            assert!(timers.is_empty());
        }

        #[test]
        fn test_overlapping_chains_last_write_wins() {
            let now = Instant::now();
            let mut store = store_with_panels();
            let mut timers = TimerQueue::default();

            // Two opposing swaps in flight at once, as rapid clicking
            // in both directions produces.
            timers.schedule(
                now,
                TimerAction::SwapPanels {
                    hide: ids::REGISTRATION_FORM.to_string(),
                    reveal: ids::LOGIN_FORM.to_string(),
                },
            );
            timers.schedule(
                now,
                TimerAction::SwapPanels {
                    hide: ids::LOGIN_FORM.to_string(),
                    reveal: ids::REGISTRATION_FORM.to_string(),
                },
            );

            timers.advance(&mut store, now);

            // The second swap ran last: registration revealed, login hidden.
            assert!(store.panel(ids::REGISTRATION_FORM).unwrap().shown);
            assert!(!store.panel(ids::LOGIN_FORM).unwrap().shown);

            timers.advance(&mut store, now + REVEAL_DELAY);
            // Both raise timers ran; both panels end at full specified
            // opacity even though only one is shown.
            assert_eq!(store.panel(ids::REGISTRATION_FORM).unwrap().opacity, 1.0);
            assert_eq!(store.panel(ids::LOGIN_FORM).unwrap().opacity, 1.0);
        }
    }
}
