//! Rate limiting for high-frequency DOM events.
//!
//! Two distinct strategies, both owning a single pending-timer slot:
//!
//! * [`Throttle`] caps the rate: a call outside any window fires at once and
//!   opens a window; calls inside the window collapse into at most one
//!   trailing execution (last arguments win) when the window closes.
//! * [`Debounce`] collapses bursts: every call restarts the timer and the
//!   wrapped function runs once with the last arguments after a quiet period.
//!
//! The timing decisions live in [`ThrottlePacer`] which only sees `now_ms`
//! values, so the semantics are testable off the main thread clock.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// What a throttled call should do right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Outside any window: execute immediately.
    Fire,
    /// First call inside the open window: arm the trailing timer for this
    /// many milliseconds.
    Arm(f64),
    /// Trailing timer already armed: just replace the stored arguments.
    Wait,
}

/// Pure throttle state machine over millisecond timestamps.
#[derive(Debug, Clone)]
pub struct ThrottlePacer {
    wait: f64,
    window_ends: Option<f64>,
    trailing_armed: bool,
}

impl ThrottlePacer {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait: wait_ms,
            window_ends: None,
            trailing_armed: false,
        }
    }

    pub fn on_call(&mut self, now: f64) -> Decision {
        match self.window_ends {
            Some(end) if now < end => {
                if self.trailing_armed {
                    Decision::Wait
                } else {
                    self.trailing_armed = true;
                    Decision::Arm(end - now)
                }
            }
            _ => {
                self.window_ends = Some(now + self.wait);
                Decision::Fire
            }
        }
    }

    /// The trailing timer fired; the pending invocation runs now and the
    /// next window opens.
    pub fn on_trailing(&mut self, now: f64) {
        self.trailing_armed = false;
        self.window_ends = Some(now + self.wait);
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

struct ThrottleShared<T> {
    pacer: ThrottlePacer,
    pending: Option<T>,
    timer: Option<Timeout>,
}

/// Fixed-rate wrapper around a callback. Dropping it cancels any pending
/// trailing invocation.
pub struct Throttle<T: 'static> {
    shared: Rc<RefCell<ThrottleShared<T>>>,
    func: Rc<RefCell<Box<dyn FnMut(T)>>>,
}

impl<T: 'static> Throttle<T> {
    pub fn new(wait_ms: u32, func: impl FnMut(T) + 'static) -> Self {
        Self {
            shared: Rc::new(RefCell::new(ThrottleShared {
                pacer: ThrottlePacer::new(f64::from(wait_ms)),
                pending: None,
                timer: None,
            })),
            func: Rc::new(RefCell::new(Box::new(func))),
        }
    }

    pub fn call(&self, arg: T) {
        let decision = self.shared.borrow_mut().pacer.on_call(now_ms());
        match decision {
            Decision::Fire => (self.func.borrow_mut())(arg),
            Decision::Arm(delay) => {
                // Weak handles keep the timer from pinning the wrapper
                // alive: dropping the wrapper drops (and cancels) the timer.
                let shared = Rc::downgrade(&self.shared);
                let func = Rc::downgrade(&self.func);
                let timer = Timeout::new(delay.ceil() as u32, move || {
                    let (Some(shared), Some(func)) = (shared.upgrade(), func.upgrade()) else {
                        return;
                    };
                    let fired = {
                        let mut shared = shared.borrow_mut();
                        shared.pacer.on_trailing(now_ms());
                        shared.timer = None;
                        shared.pending.take()
                    };
                    if let Some(arg) = fired {
                        (func.borrow_mut())(arg);
                    }
                });
                let mut shared = self.shared.borrow_mut();
                shared.pending = Some(arg);
                shared.timer = Some(timer);
            }
            Decision::Wait => self.shared.borrow_mut().pending = Some(arg),
        }
    }
}

/// Quiet-period wrapper around a callback: runs once with the last
/// arguments after `wait_ms` with no further calls. Dropping it cancels the
/// pending invocation.
pub struct Debounce<T: 'static> {
    wait_ms: u32,
    pending: Rc<RefCell<Option<T>>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    func: Rc<RefCell<Box<dyn FnMut(T)>>>,
}

impl<T: 'static> Debounce<T> {
    pub fn new(wait_ms: u32, func: impl FnMut(T) + 'static) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
            timer: Rc::new(RefCell::new(None)),
            func: Rc::new(RefCell::new(Box::new(func))),
        }
    }

    pub fn call(&self, arg: T) {
        *self.pending.borrow_mut() = Some(arg);
        let pending = Rc::downgrade(&self.pending);
        let func = Rc::downgrade(&self.func);
        let slot = Rc::downgrade(&self.timer);
        let timer = Timeout::new(self.wait_ms, move || {
            if let Some(slot) = slot.upgrade() {
                *slot.borrow_mut() = None;
            }
            let (Some(pending), Some(func)) = (pending.upgrade(), func.upgrade()) else {
                return;
            };
            let fired = pending.borrow_mut().take();
            if let Some(arg) = fired {
                (func.borrow_mut())(arg);
            }
        });
        // Replacing the slot drops (and so cancels) the previous timer.
        *self.timer.borrow_mut() = Some(timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Models the single timer slot the wasm wrappers own, so the pacer can
    /// be driven through realistic call timelines.
    struct Harness {
        pacer: ThrottlePacer,
        pending: Option<u32>,
        deadline: Option<f64>,
        fired: Vec<(f64, u32)>,
    }

    impl Harness {
        fn new(wait: f64) -> Self {
            Self {
                pacer: ThrottlePacer::new(wait),
                pending: None,
                deadline: None,
                fired: Vec::new(),
            }
        }

        fn call(&mut self, now: f64, arg: u32) {
            self.drain(now);
            match self.pacer.on_call(now) {
                Decision::Fire => self.fired.push((now, arg)),
                Decision::Arm(delay) => {
                    self.pending = Some(arg);
                    self.deadline = Some(now + delay);
                }
                Decision::Wait => self.pending = Some(arg),
            }
        }

        /// Fire the trailing timer if its deadline has passed.
        fn drain(&mut self, now: f64) {
            if let Some(deadline) = self.deadline {
                if now >= deadline {
                    self.deadline = None;
                    self.pacer.on_trailing(deadline);
                    if let Some(arg) = self.pending.take() {
                        self.fired.push((deadline, arg));
                    }
                }
            }
        }
    }

    #[test]
    fn first_call_fires_immediately() {
        let mut h = Harness::new(100.0);
        h.call(0.0, 1);
        assert_eq!(h.fired, vec![(0.0, 1)]);
    }

    #[test]
    fn burst_collapses_to_one_trailing_execution_with_last_args() {
        let mut h = Harness::new(100.0);
        h.call(0.0, 1);
        h.call(20.0, 2);
        h.call(40.0, 3);
        h.call(60.0, 4);
        assert_eq!(h.fired, vec![(0.0, 1)]);
        h.drain(100.0);
        assert_eq!(h.fired, vec![(0.0, 1), (100.0, 4)]);
    }

    #[test]
    fn rate_never_exceeds_one_execution_per_window() {
        let mut h = Harness::new(100.0);
        for t in 0..50 {
            h.call(f64::from(t) * 10.0, t as u32);
        }
        h.drain(1_000.0);
        for pair in h.fired.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= 100.0, "fired too close: {pair:?}");
        }
    }

    #[test]
    fn spaced_calls_all_fire_on_the_leading_edge() {
        let mut h = Harness::new(100.0);
        h.call(0.0, 1);
        h.call(150.0, 2);
        h.call(300.0, 3);
        assert_eq!(h.fired, vec![(0.0, 1), (150.0, 2), (300.0, 3)]);
    }

    #[test]
    fn trailing_execution_opens_the_next_window() {
        let mut h = Harness::new(100.0);
        h.call(0.0, 1);
        h.call(10.0, 2);
        // Trailing fires at 100; a call at 150 is inside the window the
        // trailing execution opened, so it arms another trailing run.
        h.call(150.0, 3);
        assert_eq!(h.fired, vec![(0.0, 1), (100.0, 2)]);
        h.drain(200.0);
        assert_eq!(h.fired.last(), Some(&(200.0, 3)));
    }

    /// Debounce semantics modeled against the same single-slot shape: each
    /// call replaces the deadline entirely.
    struct DebounceHarness {
        wait: f64,
        pending: Option<u32>,
        deadline: Option<f64>,
        fired: Vec<(f64, u32)>,
    }

    impl DebounceHarness {
        fn new(wait: f64) -> Self {
            Self {
                wait,
                pending: None,
                deadline: None,
                fired: Vec::new(),
            }
        }

        fn call(&mut self, now: f64, arg: u32) {
            self.drain(now);
            self.pending = Some(arg);
            self.deadline = Some(now + self.wait);
        }

        fn drain(&mut self, now: f64) {
            if let Some(deadline) = self.deadline {
                if now >= deadline {
                    self.deadline = None;
                    if let Some(arg) = self.pending.take() {
                        self.fired.push((deadline, arg));
                    }
                }
            }
        }
    }

    #[test]
    fn debounce_burst_runs_once_with_last_args() {
        let mut h = DebounceHarness::new(250.0);
        h.call(0.0, 1);
        h.call(100.0, 2);
        h.call(200.0, 3);
        h.drain(450.0);
        assert_eq!(h.fired, vec![(450.0, 3)]);
    }

    #[test]
    fn debounce_quiet_period_restarts_on_every_call() {
        let mut h = DebounceHarness::new(250.0);
        h.call(0.0, 1);
        h.drain(200.0);
        assert!(h.fired.is_empty());
        h.call(200.0, 2);
        h.drain(440.0);
        assert!(h.fired.is_empty(), "fired before the quiet period elapsed");
        h.drain(450.0);
        assert_eq!(h.fired, vec![(450.0, 2)]);
    }
}
