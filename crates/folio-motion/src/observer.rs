//! Explicit subscribe/unsubscribe registry used by the telemetry sources.
//!
//! Listeners are notified synchronously, in subscription order, after every
//! accepted state change. There is no implicit recomputation: consumers that
//! want a fresh value each frame read the source's snapshot themselves.

use smallvec::SmallVec;

/// Returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

pub struct Subscribers<T> {
    next_id: u64,
    listeners: SmallVec<[(SubscriptionToken, Listener<T>); 4]>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: SmallVec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionToken {
        let token = SubscriptionToken(self.next_id);
        self.next_id += 1;
        self.listeners.push((token, Box::new(listener)));
        token
    }

    /// Returns false if the token was unknown (already removed or never issued).
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(t, _)| *t != token);
        self.listeners.len() != before
    }

    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::<i32>::default();
        let a = {
            let seen = seen.clone();
            subs.subscribe(move |v| seen.borrow_mut().push(("a", *v)))
        };
        {
            let seen = seen.clone();
            subs.subscribe(move |v| seen.borrow_mut().push(("b", *v)));
        }
        assert_eq!(subs.len(), 2);
        subs.notify(&1);
        assert!(subs.unsubscribe(a));
        assert_eq!(subs.len(), 1);
        assert!(!subs.unsubscribe(a));
        subs.notify(&2);
        assert_eq!(*seen.borrow(), vec![("a", 1), ("b", 1), ("b", 2)]);
    }

    #[test]
    fn clear_drops_every_listener() {
        let mut subs = Subscribers::<i32>::default();
        assert!(subs.is_empty());
        let t = subs.subscribe(|_| {});
        subs.subscribe(|_| {});
        subs.clear();
        assert!(subs.is_empty());
        assert!(!subs.unsubscribe(t));
        subs.notify(&1);
    }
}
