//! An explicit (delay, action) step list driven by one timer at a time.
//!
//! Steps are declared with offsets from the moment [`Sequence::play`] is
//! called and always execute in declaration order; only a single timeout is
//! armed at any instant. Dropping the returned handle cancels every step
//! that has not fired yet.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

type Action = Box<dyn FnOnce()>;

/// Offsets for a group of elements entering one after another.
pub fn staggered_offsets(count: usize, base_ms: u32, step_ms: u32) -> Vec<u32> {
    (0..count as u32).map(|i| base_ms + i * step_ms).collect()
}

/// The waits the driver will actually sleep between steps, given the
/// declared offsets. An offset that is already in the past collapses to a
/// zero-length wait; order is never reshuffled.
pub fn gaps(offsets: &[u32]) -> Vec<u32> {
    let mut elapsed = 0u32;
    offsets
        .iter()
        .map(|&offset| {
            let gap = offset.saturating_sub(elapsed);
            elapsed = elapsed.max(offset);
            gap
        })
        .collect()
}

#[derive(Default)]
pub struct Sequence {
    steps: Vec<(u32, Action)>,
}

impl Sequence {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Adds a step firing `offset_ms` after `play`.
    pub fn at(mut self, offset_ms: u32, action: impl FnOnce() + 'static) -> Self {
        self.steps.push((offset_ms, Box::new(action)));
        self
    }

    pub fn play(self) -> SequenceHandle {
        let (offsets, actions): (Vec<u32>, Vec<Action>) = self.steps.into_iter().unzip();
        let queue: VecDeque<(u32, Action)> =
            gaps(&offsets).into_iter().zip(actions).collect();
        let driver = Rc::new(RefCell::new(Driver { queue, timer: None }));
        schedule_next(&driver);
        SequenceHandle { driver }
    }
}

struct Driver {
    queue: VecDeque<(u32, Action)>,
    timer: Option<Timeout>,
}

fn schedule_next(driver: &Rc<RefCell<Driver>>) {
    let next = driver.borrow_mut().queue.pop_front();
    let Some((gap, action)) = next else { return };
    let chained = Rc::clone(driver);
    let timer = Timeout::new(gap, move || {
        chained.borrow_mut().timer = None;
        action();
        schedule_next(&chained);
    });
    driver.borrow_mut().timer = Some(timer);
}

/// Owner of a playing sequence.
pub struct SequenceHandle {
    driver: Rc<RefCell<Driver>>,
}

impl SequenceHandle {
    pub fn cancel(&self) {
        let mut inner = self.driver.borrow_mut();
        inner.timer = None;
        inner.queue.clear();
    }
}

impl Drop for SequenceHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggered_offsets_space_evenly_from_the_base() {
        assert_eq!(staggered_offsets(3, 500, 200), vec![500, 700, 900]);
        assert_eq!(staggered_offsets(0, 500, 200), Vec::<u32>::new());
    }

    #[test]
    fn gaps_are_the_differences_between_ordered_offsets() {
        assert_eq!(gaps(&[500, 700, 900]), vec![500, 200, 200]);
    }

    #[test]
    fn past_offsets_collapse_to_zero_waits_without_reordering() {
        assert_eq!(gaps(&[300, 100, 400]), vec![300, 0, 100]);
    }

    #[test]
    fn immediate_first_step_is_allowed() {
        assert_eq!(gaps(&[0, 50]), vec![0, 50]);
    }
}
