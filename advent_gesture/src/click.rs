// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot suppression of the click that follows a drag release.

/// What a capturing click listener should do with a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Let the click propagate to the content.
    Allow,
    /// Stop propagation and prevent the default action.
    Suppress,
}

/// Swallows exactly one click after being armed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickSuppressor {
    armed: bool,
}

impl ClickSuppressor {
    /// Arms the suppressor so the next click is swallowed.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Drops a pending suppression without consuming a click.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Returns `true` while the next click would be swallowed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Decides the fate of a click, disarming after a suppression.
    pub fn filter(&mut self) -> ClickAction {
        if core::mem::take(&mut self.armed) {
            ClickAction::Suppress
        } else {
            ClickAction::Allow
        }
    }
}
