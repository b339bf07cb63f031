use std::cell::Cell;
use std::rc::Rc;

/// Shared "still mounted" flag handed to deferred callbacks (timers, observer
/// callbacks) so they can tell whether the component that scheduled them is gone.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn mounted() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    /// Marks the owner as torn down. Every clone observes this.
    pub fn dispose(&self) {
        self.0.set(false);
    }

    /// Runs `f` only while mounted. Returns whether it ran.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_mounted() {
            f();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_while_mounted() {
        let guard = MountGuard::mounted();
        let hits = Cell::new(0);
        assert!(guard.run(|| hits.set(hits.get() + 1)));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn clones_see_dispose() {
        let guard = MountGuard::mounted();
        let deferred = guard.clone();
        guard.dispose();

        let hits = Cell::new(0);
        assert!(!deferred.is_mounted());
        assert!(!deferred.run(|| hits.set(1)));
        assert_eq!(hits.get(), 0);
    }
}
