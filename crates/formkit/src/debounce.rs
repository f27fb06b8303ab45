// File: src/debounce.rs
// Purpose: Single-slot trailing-edge debouncer

use std::time::{Duration, Instant};

/// Collapses bursts of calls into one trailing delivery.
///
/// Each `call` replaces any pending arguments and re-arms the deadline, so
/// only the last call of a burst is ever delivered. The hosting event loop
/// pumps the slot with `poll`; nothing fires on its own. `cancel` abandons
/// the slot, which is the unmount path.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use formkit::Debouncer;
///
/// let mut debouncer: Debouncer<String> = Debouncer::new(Duration::from_millis(300));
/// debouncer.call("a".to_string());
/// debouncer.call("ab".to_string()); // replaces "a"
/// // ...300ms later...
/// assert_eq!(debouncer.poll(), Some("ab".to_string()));
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `args` for delivery after the quiet period, replacing any
    /// pending slot.
    pub fn call(&mut self, args: T) {
        self.call_at(args, Instant::now());
    }

    pub fn call_at(&mut self, args: T, now: Instant) {
        self.pending = Some((args, now + self.delay));
    }

    /// Deliver the pending arguments once the quiet period has elapsed.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => {
                self.pending.take().map(|(args, _)| args)
            }
            _ => None,
        }
    }

    /// Abandon the pending slot without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
