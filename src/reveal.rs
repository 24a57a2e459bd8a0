//! One-shot reveal animations triggered by viewport intersection.
//!
//! Two watchers share the "observe until first intersection, then detach"
//! shape: [`RevealAnimator`] flips one flag per target, and [`SkillsReveal`]
//! fires a single staggered run across the skill items.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::action::Action;
use crate::consts::{SKILL_PRIME_MS, SKILL_STAGGER_MS};
use crate::timer::{Task, Timers};

/// Per-target revealed flags. A flag never goes back to `false`.
#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    revealed: Vec<bool>,
}

impl RevealAnimator {
    /// Track `count` targets, all hidden.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    /// Observer callback for target `index`.
    pub fn on_intersection(&mut self, index: usize, intersecting: bool) -> Vec<Action> {
        if !intersecting {
            return Vec::new();
        }
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                vec![Action::RevealTarget(index)]
            }
            Some(_) => Vec::new(),
            None => {
                log::warn!("intersection for unknown reveal target {index}");
                Vec::new()
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.revealed.len()
    }
}

/// Delay before skill item `index` starts animating.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(SKILL_STAGGER_MS)
}

/// Staggered one-shot reveal of the skills section.
#[derive(Debug, Clone, Default)]
pub struct SkillsReveal {
    item_count: usize,
    fired: bool,
}

impl SkillsReveal {
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self { item_count, fired: false }
    }

    /// Observer callback for the skills section.
    pub fn on_intersection(&mut self, intersecting: bool, timers: &mut Timers) -> Vec<Action> {
        if !intersecting || self.fired {
            return Vec::new();
        }
        self.fired = true;
        log::debug!("skills section visible, revealing {} items", self.item_count);

        let mut actions = vec![Action::StopObservingSkills];
        for index in 0..self.item_count {
            let handle = timers.schedule(Task::PrimeSkillItem(index));
            actions.push(Action::Schedule { handle, delay_ms: stagger_delay_ms(index) });
        }
        actions
    }

    /// Stagger timer fired: prime the item and queue its transition.
    pub fn on_prime(&self, index: usize, timers: &mut Timers) -> Vec<Action> {
        if index >= self.item_count {
            log::warn!("stagger timer for unknown skill item {index}");
            return Vec::new();
        }
        let handle = timers.schedule(Task::ShowSkillItem(index));
        vec![Action::PrimeSkillItem(index), Action::Schedule { handle, delay_ms: SKILL_PRIME_MS }]
    }

    #[cfg(test)]
    pub(crate) fn has_fired(&self) -> bool {
        self.fired
    }
}
