use std::fmt;

/// Handle returned by [`RedrawSignal::subscribe`], used to remove a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Multi-subscriber callback registry fired when a boundary edge's surface
/// assignment changes.
///
/// Fan-out is synchronous: every subscriber runs to completion, in
/// subscription order, before [`RedrawSignal::fire`] returns.
#[derive(Default)]
pub struct RedrawSignal {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut()>)>,
}

impl RedrawSignal {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and returns its removal handle.
    pub fn subscribe<F: FnMut() + 'static>(&mut self, callback: F) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if the handle was already removed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Invokes every current subscriber once, in subscription order.
    pub fn fire(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback();
        }
    }

    /// Returns the number of current subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if no subscriber is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for RedrawSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawSignal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn fires_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut signal = RedrawSignal::new();
        for tag in 0..3 {
            let order = Rc::clone(&order);
            signal.subscribe(move || order.borrow_mut().push(tag));
        }
        signal.fire();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut signal = RedrawSignal::new();
        let c = Rc::clone(&count);
        let id = signal.subscribe(move || *c.borrow_mut() += 1);
        signal.fire();
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.fire();
        assert_eq!(*count.borrow(), 1);
        assert!(signal.is_empty());
    }

    #[test]
    fn fire_with_no_subscribers_is_a_no_op() {
        RedrawSignal::new().fire();
    }
}
