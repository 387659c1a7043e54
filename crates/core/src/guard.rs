//! The [`Scoped`] guard: runs a cleanup action exactly once at scope exit.

// ---------------------------------------------------------------------------
// Guard
// ---------------------------------------------------------------------------

/// Owns responsibility for invoking the closing half of a paired call.
///
/// A guard is `armed` while it still holds its cleanup action and
/// `discharged` once the action has run (or was never armed). The transition
/// happens exactly once, in [`Drop`], on every control path out of the
/// guard's scope -- fall-through, early return, or panic unwind.
///
/// Guards are uniquely owned: there is no `Clone`, and moving one transfers
/// the cleanup responsibility with it.
#[must_use = "dropping the guard immediately would close the region it opened; bind it to a named variable"]
#[derive(Debug)]
pub struct Scoped<F: FnOnce()> {
    open: bool,
    /// `None` = discharged; `Some` = armed.
    end: Option<F>,
}

impl<F: FnOnce()> Scoped<F> {
    /// Guard for an unconditional push/pop pair: the begin call has no
    /// failure concept, and the pop must always run.
    #[inline]
    pub fn always(end: F) -> Self {
        Self {
            open: true,
            end: Some(end),
        }
    }

    /// Guard for a begin call that can fail but whose matching end must run
    /// regardless of the reported result.
    #[inline]
    pub fn required(open: bool, end: F) -> Self {
        Self {
            open,
            end: Some(end),
        }
    }

    /// Guard for a begin call whose matching end must run only when the
    /// begin reported success. On failure the guard is born discharged.
    #[inline]
    pub fn when_open(open: bool, end: F) -> Self {
        Self {
            open,
            end: open.then_some(end),
        }
    }

    /// Whether the begin call reported success. Callers conventionally skip
    /// the region's contents when this is `false`; the guard itself only
    /// pairs begin with end and does not enforce that.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl<F: FnOnce()> Drop for Scoped<F> {
    #[inline]
    fn drop(&mut self) {
        // take() discharges before the action runs, so cleanup can never
        // fire twice even if drop logic is somehow reentered.
        if let Some(end) = self.end.take() {
            end();
        }
    }
}

// ---------------------------------------------------------------------------
// Defer helper
// ---------------------------------------------------------------------------

/// Runs `f` when the returned guard leaves scope.
///
/// ```
/// use imscope_core::defer;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// {
///     let _cleanup = defer(|| calls.set(calls.get() + 1));
///     assert_eq!(calls.get(), 0);
/// }
/// assert_eq!(calls.get(), 1);
/// ```
#[inline]
pub fn defer<F: FnOnce()>(f: F) -> Scoped<F> {
    Scoped::always(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn always_fires_exactly_once() {
        let count = Cell::new(0u32);
        {
            let _g = Scoped::always(|| count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn required_fires_even_on_failed_begin() {
        for open in [true, false] {
            let count = Cell::new(0u32);
            {
                let g = Scoped::required(open, || count.set(count.get() + 1));
                assert_eq!(g.is_open(), open);
            }
            assert_eq!(count.get(), 1, "required end must run for open={open}");
        }
    }

    #[test]
    fn when_open_skips_end_on_failed_begin() {
        let count = Cell::new(0u32);
        {
            let g = Scoped::when_open(false, || count.set(count.get() + 1));
            assert!(!g.is_open());
        }
        assert_eq!(count.get(), 0);

        {
            let g = Scoped::when_open(true, || count.set(count.get() + 1));
            assert!(g.is_open());
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn nested_guards_discharge_in_reverse_order() {
        let order = RefCell::new(Vec::new());
        {
            let _a = Scoped::always(|| order.borrow_mut().push("a"));
            let _b = Scoped::required(false, || order.borrow_mut().push("b"));
            let _c = Scoped::when_open(true, || order.borrow_mut().push("c"));
            let _d = defer(|| order.borrow_mut().push("d"));
        }
        assert_eq!(*order.borrow(), ["d", "c", "b", "a"]);
    }

    #[test]
    fn move_transfers_cleanup_responsibility() {
        fn into_inner_scope<F: FnOnce()>(g: Scoped<F>) {
            let _held = g;
            // dropped here
        }

        let count = Cell::new(0u32);
        let g = Scoped::always(|| count.set(count.get() + 1));
        assert_eq!(count.get(), 0, "moving must not discharge the source");
        into_inner_scope(g);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn early_return_still_discharges() {
        fn body(count: &Cell<u32>, bail: bool) -> u32 {
            let _g = Scoped::always(|| count.set(count.get() + 1));
            if bail {
                return 0;
            }
            1
        }

        let count = Cell::new(0u32);
        body(&count, true);
        body(&count, false);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn panic_unwind_discharges_exactly_once() {
        use std::sync::atomic::{AtomicU32, Ordering};

        static COUNT: AtomicU32 = AtomicU32::new(0);

        let result = std::panic::catch_unwind(|| {
            let _g = Scoped::required(false, || {
                COUNT.fetch_add(1, Ordering::SeqCst);
            });
            panic!("unwind through the guard");
        });

        assert!(result.is_err());
        assert_eq!(COUNT.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn is_open_reflects_begin_result_independent_of_arming() {
        let noop = || {};
        assert!(Scoped::always(noop).is_open());
        assert!(!Scoped::required(false, noop).is_open());
        assert!(!Scoped::when_open(false, noop).is_open());
    }
}
