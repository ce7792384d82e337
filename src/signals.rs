//! Environment signal hub: pointer, viewport and scroll.
//!
//! The front end translates raw egui input into [`Signal`]s and publishes
//! them once per frame. Components subscribe for the span of their mount:
//!
//! - `subscribe()` registers an mpsc sender and hands back a [`Subscription`]
//! - the component drains `Subscription::drain()` on its own update
//! - dropping the `Subscription` deregisters it from the hub
//!
//! Everything here lives on the UI thread; the registry is `Rc<RefCell<..>>`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::sync::mpsc;

/// Where a pointer sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// One environment signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Pointer (mouse or primary touch) position in viewport space
    PointerMoved { x: f32, y: f32, source: PointerSource },
    /// Viewport size changed
    ViewportResized { width: f32, height: f32 },
    /// Vertical scroll offset of the page
    Scrolled { offset: f32 },
}

type Registry = BTreeMap<u64, mpsc::Sender<Signal>>;

/// Fan-out point for environment signals.
pub struct SignalHub {
    listeners: Rc<RefCell<Registry>>,
    next_id: u64,
}

impl SignalHub {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(BTreeMap::new())),
            next_id: 0,
        }
    }

    /// Register a listener. It stays registered until the guard is dropped.
    pub fn subscribe(&mut self) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;

        let (tx, rx) = mpsc::channel();
        self.listeners.borrow_mut().insert(id, tx);
        log::debug!("signal listener {} registered", id);

        Subscription {
            id,
            rx,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver a signal to every live listener.
    pub fn publish(&self, signal: Signal) {
        // A closed receiver means the guard is mid-drop; prune it here too.
        self.listeners
            .borrow_mut()
            .retain(|_, tx| tx.send(signal).is_ok());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for SignalHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped listener registration. Deregisters on drop.
pub struct Subscription {
    id: u64,
    rx: mpsc::Receiver<Signal>,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Take every signal published since the last drain, oldest first.
    pub fn drain(&self) -> Vec<Signal> {
        self.rx.try_iter().collect()
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(&self.id);
            log::debug!("signal listener {} dropped", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_receives_published_signals_in_order() {
        let mut hub = SignalHub::new();
        let sub = hub.subscribe();
        hub.publish(Signal::Scrolled { offset: 10.0 });
        hub.publish(Signal::ViewportResized { width: 800.0, height: 600.0 });

        let got = sub.drain();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0], Signal::Scrolled { offset: 10.0 });
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn dropping_subscription_deregisters() {
        let mut hub = SignalHub::new();
        let a = hub.subscribe();
        let b = hub.subscribe();
        assert_eq!(hub.listener_count(), 2);

        drop(a);
        assert_eq!(hub.listener_count(), 1);

        hub.publish(Signal::Scrolled { offset: 1.0 });
        assert_eq!(b.drain().len(), 1);

        drop(b);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_hub_is_harmless() {
        let mut hub = SignalHub::new();
        let sub = hub.subscribe();
        drop(hub);
        assert!(sub.drain().is_empty());
        drop(sub);
    }
}
