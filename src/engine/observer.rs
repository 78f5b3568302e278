//! Change subscribers

use super::GameSnapshot;

type Callback = Box<dyn FnMut(&GameSnapshot)>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Registered callbacks, notified in subscription order
#[derive(Default)]
pub(super) struct Observers {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

impl Observers {
    pub(super) fn subscribe(&mut self, callback: Callback) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.callbacks.push((id, callback));
        Subscription(id)
    }

    pub(super) fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(id, _)| *id != subscription.0);
        self.callbacks.len() != before
    }

    pub(super) fn notify(&mut self, snapshot: &GameSnapshot) {
        for (_, callback) in &mut self.callbacks {
            callback(snapshot);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.callbacks.len()
    }
}
