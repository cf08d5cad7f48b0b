// SPDX-License-Identifier: MPL-2.0
//! The two card presentation slots and the rules between them.
//!
//! Admission policy is asymmetric: primary is fed strictly FIFO from the
//! queue, secondary admits urgent messages only, by preemption. Each slot
//! performs either admission or decay in a given tick, never both, which
//! keeps expiry timing exact: a duration-`d` card admitted on tick N is
//! destroyed on tick N+d.

use crate::config::defaults::LANE_GAP;
use crate::config::SchedulerConfig;

use super::message::Message;
use super::queue::NotificationQueue;

/// Presentation state of one slot.
#[derive(Debug, Default)]
pub enum SlotState {
    #[default]
    Empty,
    /// Occupied, slide animation still approaching the rest position.
    Filling(Message),
    /// Occupied and at rest. Countdown continues.
    Holding(Message),
}

/// One on-screen slot plus its fixed lane displacement.
#[derive(Debug)]
pub struct Slot {
    state: SlotState,
    lane_offset: f32,
}

impl Slot {
    fn new(lane_offset: f32) -> Self {
        Self {
            state: SlotState::Empty,
            lane_offset,
        }
    }

    #[must_use]
    pub fn occupant(&self) -> Option<&Message> {
        match &self.state {
            SlotState::Empty => None,
            SlotState::Filling(m) | SlotState::Holding(m) => Some(m),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, SlotState::Empty)
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        matches!(self.state, SlotState::Holding(_))
    }

    /// Perpendicular displacement of this slot from the primary lane.
    #[must_use]
    pub fn lane_offset(&self) -> f32 {
        self.lane_offset
    }

    /// Assigns a new occupant, discarding any current one.
    fn fill(&mut self, message: Message) {
        self.state = SlotState::Filling(message);
    }

    fn clear(&mut self) {
        self.state = SlotState::Empty;
    }

    /// One decay step: countdown first, then slide advancement. The occupant
    /// is destroyed the tick its countdown reaches zero.
    fn decay(&mut self, slide_step: f32) {
        self.state = match std::mem::take(&mut self.state) {
            SlotState::Empty => SlotState::Empty,
            SlotState::Filling(mut m) | SlotState::Holding(mut m) => {
                if m.count_down() == 0 {
                    SlotState::Empty
                } else {
                    m.advance_slide(slide_step);
                    if m.at_rest() {
                        SlotState::Holding(m)
                    } else {
                        SlotState::Filling(m)
                    }
                }
            }
        };
    }
}

/// Owns the primary and secondary slots and applies the per-tick
/// promotion, preemption, and decay rules.
#[derive(Debug)]
pub struct SlotController {
    primary: Slot,
    secondary: Slot,
    slide_step: f32,
}

impl SlotController {
    pub fn new(config: &SchedulerConfig) -> Self {
        let (_, card_h) = config.card_size();
        Self {
            primary: Slot::new(0.0),
            secondary: Slot::new(card_h + LANE_GAP),
            slide_step: config.slide_step(),
        }
    }

    #[must_use]
    pub fn primary(&self) -> &Slot {
        &self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> &Slot {
        &self.secondary
    }

    /// Advances both slots by one tick. Returns the number of admissions
    /// performed (0..=2); the caller plays the notice cue once per admission.
    ///
    /// When `frozen` is set nothing moves: no admission, no countdown, no
    /// slide.
    pub fn tick(&mut self, queue: &mut NotificationQueue, frozen: bool) -> u32 {
        if frozen {
            return 0;
        }
        let mut admissions = 0;

        // Primary: FIFO promotion when empty, decay otherwise.
        if self.primary.is_empty() {
            if let Some(message) = queue.pop_front() {
                self.primary.fill(message);
                admissions += 1;
            }
        } else {
            self.primary.decay(self.slide_step);
        }

        // Secondary: at most one urgent preemption per tick; the new
        // occupant replaces any current one unconditionally, even
        // mid-countdown. Without a waiting urgent, the occupant decays.
        if let Some(urgent) = queue.extract_first_urgent() {
            self.secondary.fill(urgent);
            admissions += 1;
        } else {
            self.secondary.decay(self.slide_step);
        }

        admissions
    }

    pub fn clear(&mut self) {
        self.primary.clear();
        self.secondary.clear();
    }
}
