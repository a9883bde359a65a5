/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Synchronous listener registry.
///
/// `notify` calls every listener on the caller's thread, in subscription
/// order, before returning.
pub struct Observers<E> {
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    next_id: u64,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Observers {
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn notify(&self, event: &E) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}
