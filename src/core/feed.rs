//! Transition feed: latest-value cell plus one channel per subscriber.
//!
//! Every publish computes the `(previous, next)` pair at the moment of
//! mutation and pushes it into each live subscriber's channel before
//! returning. A new subscriber is primed with the latest change only.

use super::history::StateChange;
use super::state::State;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Publisher side of the feed, owned by a state machine.
#[derive(Debug)]
pub struct TransitionFeed<S: State> {
    latest: Option<StateChange<S>>,
    subscribers: Vec<UnboundedSender<StateChange<S>>>,
    emitted: u64,
}

impl<S: State> TransitionFeed<S> {
    /// Create a feed with no latest value.
    pub fn new() -> Self {
        Self {
            latest: None,
            subscribers: Vec::new(),
            emitted: 0,
        }
    }

    /// Create a feed that continues from a previously emitted change.
    ///
    /// `emitted` is the number of changes already published; the next
    /// publish gets sequence `emitted + 1`.
    pub fn resume(latest: Option<StateChange<S>>, emitted: u64) -> Self {
        Self {
            latest,
            subscribers: Vec::new(),
            emitted,
        }
    }

    /// Publish a change to every live subscriber and remember it as latest.
    pub fn publish(&mut self, from: S, to: S) -> &StateChange<S> {
        self.emitted = self.emitted.saturating_add(1);
        let change = StateChange::new(from, to, self.emitted);

        let before = self.subscribers.len();
        self.subscribers
            .retain(|subscriber| subscriber.send(change.clone()).is_ok());
        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            tracing::debug!(
                target: "actor_fsm::feed",
                pruned,
                remaining = self.subscribers.len(),
                "dropped subscriptions pruned"
            );
        }

        self.latest.insert(change)
    }

    /// Open a new subscription, primed with the latest change if any.
    pub fn subscribe(&mut self) -> Subscription<S> {
        let (sender, receiver) = mpsc::unbounded_channel();
        if let Some(latest) = &self.latest {
            let _ = sender.send(latest.clone());
        }
        self.subscribers.push(sender);
        tracing::debug!(
            target: "actor_fsm::feed",
            subscribers = self.subscribers.len(),
            replayed = self.latest.is_some(),
            "subscription opened"
        );
        Subscription { receiver }
    }

    /// Most recently published change.
    pub fn latest(&self) -> Option<&StateChange<S>> {
        self.latest.as_ref()
    }

    /// Number of changes published over the feed's lifetime.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Number of subscriptions that are still open.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|subscriber| !subscriber.is_closed())
            .count()
    }
}

impl<S: State> Default for TransitionFeed<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of the feed.
///
/// Dropping a subscription unsubscribes it; the feed prunes it on the
/// next publish.
#[derive(Debug)]
pub struct Subscription<S: State> {
    receiver: UnboundedReceiver<StateChange<S>>,
}

impl<S: State> Subscription<S> {
    /// Take the next pending change without waiting.
    pub fn try_next(&mut self) -> Option<StateChange<S>> {
        self.receiver.try_recv().ok()
    }

    /// Wait for the next change.
    ///
    /// Returns `None` once the publishing machine has been dropped and
    /// every pending change has been consumed.
    pub async fn next(&mut self) -> Option<StateChange<S>> {
        self.receiver.recv().await
    }

    /// Take every pending change without waiting.
    pub fn drain(&mut self) -> Vec<StateChange<S>> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}
