//! Notification read-state tracking.
//!
//! Per notification the only legal transition is unread → read; nothing
//! reverts a read notification. The center lives behind one `Mutex` in
//! `AppState`, so bulk transitions are atomic to every reader.

use crate::models::notification::Notification;

pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Snapshot in insertion order (newest first in the seed set).
    pub fn list(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    /// Count of unread notifications, recomputed on demand.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Mark one notification read. No-op when the id is unknown or the
    /// notification is already read; returns whether a transition happened.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.is_read => {
                n.is_read = true;
                true
            }
            _ => false,
        }
    }

    /// Mark every unread notification read in one step. Returns how many
    /// notifications transitioned.
    pub fn mark_all_read(&mut self) -> usize {
        let mut transitioned = 0;
        for n in self.notifications.iter_mut() {
            if !n.is_read {
                n.is_read = true;
                transitioned += 1;
            }
        }
        transitioned
    }

    /// Append a new notification (e.g. raised by a save operation).
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_data;

    fn center() -> NotificationCenter {
        NotificationCenter::new(seed_data().notifications)
    }

    #[test]
    fn unread_count_tracks_seed_state() {
        let c = center();
        assert_eq!(c.unread_count(), 3);
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut c = center();
        assert!(c.mark_read("n1"));
        let after_once = c.unread_count();

        // Second application changes nothing.
        assert!(!c.mark_read("n1"));
        assert_eq!(c.unread_count(), after_once);
    }

    #[test]
    fn mark_read_unknown_id_is_a_noop() {
        let mut c = center();
        let before = c.unread_count();
        assert!(!c.mark_read("missing"));
        assert_eq!(c.unread_count(), before);
    }

    #[test]
    fn mark_all_read_drains_unread() {
        let mut c = center();
        let transitioned = c.mark_all_read();
        assert_eq!(transitioned, 3);
        assert_eq!(c.unread_count(), 0);

        // Already-read set: bulk transition is a no-op.
        assert_eq!(c.mark_all_read(), 0);
    }

    #[test]
    fn read_state_never_reverts() {
        let mut c = center();
        c.mark_all_read();
        assert!(c.list().iter().all(|n| n.is_read));
    }
}
