//! Local-only contact form simulation.
//!
//! Submitting flips the status to `Sent` and schedules a single deferred
//! reset back to `Idle`. A later submission cancels the earlier reset, and
//! tearing the form down cancels whatever is still pending.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use crate::error::HostError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sent,
}

pub trait PendingReset {
    fn cancel(self);
}

/// One-shot timer used for the deferred reset.
pub trait ResetTimer {
    type Handle: PendingReset + 'static;

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Result<Self::Handle, HostError>;
}

struct FormState<P> {
    status: Cell<SubmissionStatus>,
    pending: RefCell<Option<P>>,
    generation: Cell<u64>,
    torn_down: Cell<bool>,
    listener: Box<dyn Fn(SubmissionStatus)>,
}

impl<P> FormState<P> {
    fn transition(&self, status: SubmissionStatus) {
        if self.torn_down.get() {
            return;
        }
        self.status.set(status);
        (self.listener)(status);
    }
}

pub struct ContactForm<T: ResetTimer> {
    timer: T,
    delay: Duration,
    state: Rc<FormState<T::Handle>>,
}

impl<T: ResetTimer> ContactForm<T> {
    /// `listener` is told about every status change until teardown.
    pub fn new(timer: T, delay: Duration, listener: impl Fn(SubmissionStatus) + 'static) -> Self {
        Self {
            timer,
            delay,
            state: Rc::new(FormState {
                status: Cell::new(SubmissionStatus::Idle),
                pending: RefCell::new(None),
                generation: Cell::new(0),
                torn_down: Cell::new(false),
                listener: Box::new(listener),
            }),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> SubmissionStatus {
        self.state.status.get()
    }

    #[cfg(test)]
    pub fn has_pending_reset(&self) -> bool {
        self.state.pending.borrow().is_some()
    }

    pub fn submit(&self) {
        if self.state.torn_down.get() {
            log::debug!("contact form submitted after teardown; ignoring");
            return;
        }
        self.cancel_pending();
        self.state.transition(SubmissionStatus::Sent);

        let generation = self.state.generation.get() + 1;
        self.state.generation.set(generation);
        let state = Rc::downgrade(&self.state);
        let fire = Box::new(move || {
            let Some(state) = state.upgrade() else {
                return;
            };
            // a newer submission owns the slot now
            if state.generation.get() != generation {
                return;
            }
            state.pending.borrow_mut().take();
            state.transition(SubmissionStatus::Idle);
        });

        match self.timer.schedule(self.delay, fire) {
            Ok(handle) => {
                *self.state.pending.borrow_mut() = Some(handle);
            }
            Err(e) => log::warn!("couldn't schedule contact form reset: {e}"),
        }
    }

    /// Cancels any pending reset. No transition is observable afterwards.
    pub fn teardown(&self) {
        self.cancel_pending();
        self.state.torn_down.set(true);
    }

    fn cancel_pending(&self) {
        let pending = self.state.pending.borrow_mut().take();
        if let Some(handle) = pending {
            handle.cancel();
        }
    }
}

impl<T: ResetTimer> Drop for ContactForm<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Callback = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        queue: Vec<(u64, Duration, Callback)>,
    }

    /// Timer driven by hand through `advance`.
    #[derive(Clone, Default)]
    struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    struct ManualHandle {
        id: u64,
        clock: Rc<RefCell<Clock>>,
    }

    impl PendingReset for ManualHandle {
        fn cancel(self) {
            self.clock
                .borrow_mut()
                .queue
                .retain(|(id, _, _)| *id != self.id);
        }
    }

    impl ResetTimer for ManualTimer {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, fire: Callback) -> Result<ManualHandle, HostError> {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.queue.push((id, due, fire));
            Ok(ManualHandle {
                id,
                clock: self.clock.clone(),
            })
        }
    }

    impl ManualTimer {
        fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let earliest = clock
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (_, due, _))| *due <= target)
                        .min_by_key(|(_, (_, due, _))| *due)
                        .map(|(i, _)| i);
                    earliest.map(|i| {
                        let (_, due, fire) = clock.queue.remove(i);
                        clock.now = due;
                        fire
                    })
                };
                match next {
                    Some(fire) => fire(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }

        fn pending(&self) -> usize {
            self.clock.borrow().queue.len()
        }
    }

    struct BrokenTimer;

    impl ResetTimer for BrokenTimer {
        type Handle = ManualHandle;

        fn schedule(&self, _delay: Duration, _fire: Callback) -> Result<ManualHandle, HostError> {
            Err(HostError::Timer("setTimeout unavailable".to_string()))
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn form_with_log(
        timer: &ManualTimer,
    ) -> (ContactForm<ManualTimer>, Rc<RefCell<Vec<SubmissionStatus>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let form = ContactForm::new(timer.clone(), ms(2500), move |s| sink.borrow_mut().push(s));
        (form, seen)
    }

    #[test]
    fn test_submit_then_reset_after_delay() {
        let timer = ManualTimer::default();
        let (form, seen) = form_with_log(&timer);
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.submit();
        assert_eq!(form.status(), SubmissionStatus::Sent);
        assert!(form.has_pending_reset());

        timer.advance(ms(2499));
        assert_eq!(form.status(), SubmissionStatus::Sent);

        timer.advance(ms(1));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(!form.has_pending_reset());
        assert_eq!(
            *seen.borrow(),
            vec![SubmissionStatus::Sent, SubmissionStatus::Idle]
        );
    }

    #[test]
    fn test_resubmit_restarts_the_reset() {
        let timer = ManualTimer::default();
        let (form, seen) = form_with_log(&timer);

        form.submit();
        timer.advance(ms(1000));
        form.submit();
        assert_eq!(timer.pending(), 1);

        // first reset would have fired here
        timer.advance(ms(1500));
        assert_eq!(form.status(), SubmissionStatus::Sent);

        timer.advance(ms(999));
        assert_eq!(form.status(), SubmissionStatus::Sent);
        timer.advance(ms(1));
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let resets = seen
            .borrow()
            .iter()
            .filter(|s| **s == SubmissionStatus::Idle)
            .count();
        assert_eq!(resets, 1);
    }

    #[test]
    fn test_drop_cancels_pending_reset() {
        let timer = ManualTimer::default();
        let (form, seen) = form_with_log(&timer);

        form.submit();
        drop(form);
        assert_eq!(timer.pending(), 0);

        timer.advance(ms(10_000));
        assert_eq!(*seen.borrow(), vec![SubmissionStatus::Sent]);
    }

    #[test]
    fn test_teardown_blocks_later_transitions() {
        let timer = ManualTimer::default();
        let (form, seen) = form_with_log(&timer);

        form.submit();
        form.teardown();
        form.submit();
        timer.advance(ms(5000));

        assert_eq!(form.status(), SubmissionStatus::Sent);
        assert!(!form.has_pending_reset());
        assert_eq!(*seen.borrow(), vec![SubmissionStatus::Sent]);
    }

    #[test]
    fn test_stale_callback_is_ignored() {
        let timer = ManualTimer::default();
        let (form, _seen) = form_with_log(&timer);

        form.submit();
        // keep the first callback alive as if cancellation had been lost
        let stale = timer.clock.borrow_mut().queue.remove(0);
        form.submit();
        (stale.2)();
        assert_eq!(form.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn test_schedule_failure_keeps_sent() {
        let form = ContactForm::new(BrokenTimer, ms(2500), |_| {});
        form.submit();
        assert_eq!(form.status(), SubmissionStatus::Sent);
        assert!(!form.has_pending_reset());
    }
}
