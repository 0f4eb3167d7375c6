//! Scripted button input for the simulation driver.
//!
//! The `ButtonSchedule` holds configured input transitions and applies
//! each one to the register bank once its time has arrived. The schedule
//! epoch is the first sampling instant, so tests can drive it with
//! synthetic `Instant`s instead of wall-clock time.

use blink_common::gpio::config::ButtonEvent;
use blink_common::gpio::registers::RegisterBank;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Queue of scripted button input transitions.
pub struct ButtonSchedule {
    /// Sampling instant of the first `apply_due` call.
    epoch: Option<Instant>,
    /// Pending events, ordered by `at_ms`.
    pending: VecDeque<ButtonEvent>,
    /// Bit index of the button in the input register.
    button_bit: u8,
}

impl ButtonSchedule {
    /// Build a schedule from configured events.
    ///
    /// Events are sorted by `at_ms`; config order does not matter.
    pub fn new(events: &[ButtonEvent], button_bit: u8) -> Self {
        let mut sorted: Vec<ButtonEvent> = events.to_vec();
        sorted.sort_by_key(|e| e.at_ms);

        Self {
            epoch: None,
            pending: sorted.into(),
            button_bit,
        }
    }

    /// Apply all events whose time has arrived at `now`.
    ///
    /// The first call fixes the schedule epoch; an event with `at_ms = 0`
    /// is applied on that same call.
    pub fn apply_due(&mut self, bank: &mut RegisterBank, now: Instant) {
        let epoch = *self.epoch.get_or_insert(now);

        while let Some(front) = self.pending.front() {
            let trigger_time = epoch + Duration::from_millis(front.at_ms);
            if trigger_time > now {
                // Queue is time-ordered, so we can break
                break;
            }

            let event = self.pending.pop_front().expect("front checked above");
            let old = bank.input_bit(self.button_bit);
            bank.drive_input_bit(self.button_bit, event.pressed);
            if old != event.pressed {
                debug!(
                    "Button input changed: {} -> {} (scripted at {}ms)",
                    if old { "ON" } else { "OFF" },
                    if event.pressed { "ON" } else { "OFF" },
                    event.at_ms
                );
            }
        }
    }

    /// Number of events not yet applied.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
