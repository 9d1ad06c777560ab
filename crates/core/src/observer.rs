/// Receives driver events and decides whether the run should continue.
///
/// Observers let callers watch a running wheel (to render it, record a
/// trajectory, or stop after some condition) without the driver knowing what
/// they do with the events.
///
/// Returning `Some(action)` requests a driver-specific action; `None` lets the
/// run continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
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

    fn drive<O: Observer<u32, bool>>(mut observer: O, events: &[u32]) -> Vec<bool> {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |e: &u32| {
                seen.push(*e);
                (*e > 1).then_some(true)
            },
            &[0, 1, 2, 3],
        );

        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(actions, vec![true, true]);
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[0, 1, 2]).is_empty());
    }
}
