//! Scroll-position synchronization
//!
//! Keeps a secondary view's topline equal to a primary view's for the
//! lifetime of one subscription. The coordinator is the sole writer of the
//! secondary view's scroll position.

use std::mem;

use crate::host::{Host, ScrollEvent, SubscriptionId, ViewId};

#[derive(Debug, Clone, Copy, Default)]
enum State {
    #[default]
    Idle,
    Active {
        primary: ViewId,
        secondary: ViewId,
        subscription: SubscriptionId,
    },
}

/// Idle ⇄ Active coordinator between two independently-scrollable views.
///
/// Either view disappearing is not an error: the next sync pass detects the
/// dead handle, cancels the subscription, and falls back to Idle silently.
#[derive(Debug, Default)]
pub struct ScrollSync {
    state: State,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// Begin mirroring `primary` into `secondary`.
    ///
    /// Tears down any previous pairing first, so at most one subscription is
    /// ever live, and immediately performs one sync pass so the secondary
    /// view matches without waiting for a scroll event.
    pub fn activate(&mut self, host: &mut dyn Host, primary: ViewId, secondary: ViewId) {
        self.deactivate(host);
        let subscription = host.subscribe_scroll(primary);
        self.state = State::Active {
            primary,
            secondary,
            subscription,
        };
        self.sync_pass(host);
    }

    /// Handle one scroll notification.
    ///
    /// Events attributed to any view other than the primary are ignored.
    pub fn on_scroll(&mut self, host: &mut dyn Host, event: ScrollEvent) {
        let State::Active { primary, .. } = self.state else {
            return;
        };
        if event.view != primary {
            return;
        }
        self.sync_pass(host);
    }

    /// Cancel the subscription and return to Idle. No-op when already Idle.
    pub fn deactivate(&mut self, host: &mut dyn Host) {
        if let State::Active { subscription, .. } = mem::take(&mut self.state) {
            host.unsubscribe_scroll(subscription);
        }
    }

    fn sync_pass(&mut self, host: &mut dyn Host) {
        let State::Active {
            primary, secondary, ..
        } = self.state
        else {
            return;
        };
        if !host.view_is_live(primary) || !host.view_is_live(secondary) {
            self.deactivate(host);
            return;
        }
        if let Some(topline) = host.topline(primary) {
            host.set_topline(secondary, topline);
        }
    }
}
