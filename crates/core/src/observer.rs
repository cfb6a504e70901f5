/// Sees each iteration of a solver and may steer it.
///
/// Every root finder calls [`observe`](Observer::observe) once per iteration
/// with that iteration's event. Returning `Some(action)` asks the solver to act
/// on it (the root finders understand a single `StopEarly` action); returning
/// `None` lets the iteration continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the observer
/// that never acts.
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<u32, &'static str>>(mut observer: O, events: &[u32]) -> Vec<&'static str> {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |e: &u32| {
                seen.push(*e);
                (*e == 2).then_some("stop")
            },
            &[1, 2, 3],
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn borrowed_closure_keeps_state() {
        let mut count = 0usize;
        let mut counter = |_: &u32| -> Option<&'static str> {
            count += 1;
            None
        };

        drive(&mut counter, &[1, 2]);
        drive(&mut counter, &[3]);

        assert_eq!(count, 3);
    }
}
