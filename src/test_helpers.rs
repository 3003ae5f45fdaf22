use std::cell::Cell;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
    static BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Element type that counts its live instances.
///
/// Counters are per thread, and every test runs on its own thread, so tests
/// never see each other's instances. `panic_after(n)` makes the `n + 1`th
/// construction from now on panic, and dropping a [`Tracked::POISON`] value
/// panics after it has been counted as dropped.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Tracked(pub(crate) u32);

impl Tracked {
    pub(crate) const POISON: u32 = u32::MAX;

    pub(crate) fn new(value: u32) -> Self {
        BUDGET.with(|budget| match budget.get() {
            Some(0) => {
                budget.set(None);
                panic!("construction budget exhausted");
            }
            Some(n) => budget.set(Some(n - 1)),
            None => {}
        });
        LIVE.with(|live| live.set(live.get() + 1));
        CONSTRUCTED.with(|c| c.set(c.get() + 1));
        Self(value)
    }

    pub(crate) fn live() -> isize { LIVE.with(Cell::get) }

    pub(crate) fn constructed() -> usize { CONSTRUCTED.with(Cell::get) }

    pub(crate) fn panic_after(constructions: usize) {
        BUDGET.with(|budget| budget.set(Some(constructions)));
    }
}

impl Default for Tracked {
    fn default() -> Self { Self::new(0) }
}

impl Clone for Tracked {
    fn clone(&self) -> Self { Self::new(self.0) }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
        if self.0 == Self::POISON {
            panic!("poisoned element dropped");
        }
    }
}

/// Reads the values out of a slice of tracked elements.
pub(crate) fn values(items: &[Tracked]) -> Vec<u32> {
    items.iter().map(|t| t.0).collect()
}
