//! Mobile navigation menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::action::{Action, Target};

const ACTIVE: &str = "active";

/// Open/closed state of the hamburger menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> Vec<Action> {
        self.open = !self.open;
        self.sync()
    }

    /// Force the menu shut (nav-link click).
    pub fn close(&mut self) -> Vec<Action> {
        self.open = false;
        self.sync()
    }

    fn sync(self) -> Vec<Action> {
        vec![
            Action::class(Target::Hamburger, ACTIVE, self.open),
            Action::class(Target::NavMenu, ACTIVE, self.open),
        ]
    }
}
