use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::mpsc;

struct Inner<T> {
    value: T,
    subscribers: Vec<mpsc::UnboundedSender<T>>,
}

/// A single shared value, replaced whole and broadcast to every subscriber.
///
/// Mutations and subscriptions are serialized by one lock, so all subscribers
/// observe the same sequence of values in the order the mutations completed.
/// Subscribers never lag: each one owns an unbounded queue.
pub struct StateCell<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value: initial,
                subscribers: Vec::new(),
            })),
        }
    }

    // A panicking `update` closure never leaves a half-written value behind,
    // so recovering from poisoning is sound.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Borrows the current value without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    pub fn replace(&self, value: T) {
        let mut inner = self.lock();
        inner.value = value;
        Self::publish(&mut inner);
    }

    /// Computes the next value from the current one and swaps it in; returns the new value.
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let mut inner = self.lock();
        let next = f(&inner.value);
        inner.value = next.clone();
        Self::publish(&mut inner);
        next
    }

    /// The returned subscription yields the current value first, then every later one.
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.lock();
        inner.subscribers.retain(|s| !s.is_closed());
        // rx is alive, the send cannot fail
        let _ = tx.send(inner.value.clone());
        inner.subscribers.push(tx);
        Subscription { rx }
    }

    pub fn subscriber_count(&self) -> usize {
        let mut inner = self.lock();
        inner.subscribers.retain(|s| !s.is_closed());
        inner.subscribers.len()
    }

    fn publish(inner: &mut Inner<T>) {
        let value = &inner.value;
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(value.clone()).is_ok());
    }
}

impl<T: Clone + Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Receiving end of a [`StateCell`] subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// Waits for the next value. `None` once the cell has been dropped.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Next queued value, without waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    pub fn unsubscribe(mut self) {
        self.rx.close();
    }
}

impl<T> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}
