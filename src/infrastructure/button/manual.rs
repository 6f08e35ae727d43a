//! Software button adapter
//!
//! Presses are injected through a [`ManualTrigger`] and filtered by the same
//! debounce contract the GPIO driver applies. Backs `--simulate` and tests.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::application::ports::{ButtonError, ButtonSource, PressHandler};
use crate::domain::timing::{Debouncer, Duration};

#[derive(Default)]
struct Watch {
    debouncer: Option<Debouncer>,
    handler: Option<PressHandler>,
}

/// In-process button source
#[derive(Default)]
pub struct ManualButton {
    watch: Arc<Mutex<Watch>>,
}

/// Handle for injecting falling edges into a [`ManualButton`]
#[derive(Clone)]
pub struct ManualTrigger {
    watch: Arc<Mutex<Watch>>,
}

impl ManualButton {
    /// Create an unwatched button
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for injecting presses
    pub fn trigger(&self) -> ManualTrigger {
        ManualTrigger {
            watch: Arc::clone(&self.watch),
        }
    }
}

impl ButtonSource for ManualButton {
    fn watch(&mut self, debounce: Duration, on_press: PressHandler) -> Result<(), ButtonError> {
        let mut watch = self.watch.lock().unwrap_or_else(|e| e.into_inner());
        if watch.handler.is_some() {
            return Err(ButtonError::AlreadyWatching);
        }
        watch.debouncer = Some(Debouncer::new(debounce));
        watch.handler = Some(on_press);
        Ok(())
    }

    fn describe(&self) -> String {
        "simulated button".to_string()
    }
}

impl ManualTrigger {
    /// Inject a falling edge now. Returns true if the press was accepted.
    pub fn press(&self) -> bool {
        self.press_at(Instant::now())
    }

    /// Inject a falling edge observed at `at`
    pub fn press_at(&self, at: Instant) -> bool {
        let handler = {
            let mut watch = self.watch.lock().unwrap_or_else(|e| e.into_inner());
            let accepted = match watch.debouncer.as_mut() {
                Some(debouncer) => debouncer.accept(at),
                None => false,
            };
            if !accepted {
                return false;
            }
            watch.handler.clone()
        };

        // Call outside the lock so the handler may press again
        if let Some(handler) = handler {
            handler();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration as StdDuration;

    fn counting_handler() -> (PressHandler, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        (
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            count,
        )
    }

    #[test]
    fn presses_before_watch_are_ignored() {
        let button = ManualButton::new();
        assert!(!button.trigger().press());
    }

    #[test]
    fn presses_within_window_fire_once() {
        let mut button = ManualButton::new();
        let (handler, count) = counting_handler();
        button.watch(Duration::from_millis(2000), handler).unwrap();
        let trigger = button.trigger();

        let start = Instant::now();
        assert!(trigger.press_at(start));
        assert!(!trigger.press_at(start + StdDuration::from_millis(300)));
        assert!(!trigger.press_at(start + StdDuration::from_millis(1900)));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn presses_outside_window_fire_each_time() {
        let mut button = ManualButton::new();
        let (handler, count) = counting_handler();
        button.watch(Duration::from_millis(2000), handler).unwrap();
        let trigger = button.trigger();

        let start = Instant::now();
        assert!(trigger.press_at(start));
        assert!(trigger.press_at(start + StdDuration::from_millis(2500)));

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn watching_twice_is_an_error() {
        let mut button = ManualButton::new();
        let (handler, _) = counting_handler();
        button.watch(Duration::from_millis(10), handler.clone()).unwrap();
        assert!(matches!(
            button.watch(Duration::from_millis(10), handler),
            Err(ButtonError::AlreadyWatching)
        ));
    }
}
