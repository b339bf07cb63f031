use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::lifecycle::MountGuard;

/// Per-card reveal progress. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    Unseen,
    PendingReveal,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// The card first crossed the visibility threshold.
    Intersected(usize),
    /// The card's stagger timer elapsed.
    Elapsed(usize),
}

pub fn reveal_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// An observer notification counts only once the card is intersecting with at
/// least `ratio` of its area visible.
pub fn crosses_threshold(is_intersecting: bool, visible_ratio: f64, ratio: f64) -> bool {
    is_intersecting && visible_ratio >= ratio
}

/// Handles one observer notification for card `index`. The first one that
/// counts while mounted disarms the watcher and yields the reveal delay.
pub fn schedule_reveal(
    armed: &Cell<bool>,
    guard: &MountGuard,
    entered: bool,
    index: usize,
) -> Option<u32> {
    if !entered || !armed.get() || !guard.is_mounted() {
        return None;
    }
    armed.set(false);
    Some(reveal_delay_ms(index, config::CARD_STAGGER_MS))
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardReveal {
    phases: Vec<CardPhase>,
}

impl CardReveal {
    pub fn new(count: usize) -> Self {
        Self {
            phases: vec![CardPhase::Unseen; count],
        }
    }

    pub fn phase(&self, index: usize) -> Option<CardPhase> {
        self.phases.get(index).copied()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.phase(index) == Some(CardPhase::Revealed)
    }

    /// Applies one transition. Out-of-order actions and unknown indices are
    /// ignored. Returns whether anything changed.
    pub fn apply(&mut self, action: RevealAction) -> bool {
        let (index, from, to) = match action {
            RevealAction::Intersected(index) => {
                (index, CardPhase::Unseen, CardPhase::PendingReveal)
            }
            RevealAction::Elapsed(index) => (index, CardPhase::PendingReveal, CardPhase::Revealed),
        };

        match self.phases.get_mut(index) {
            Some(phase) if *phase == from => {
                *phase = to;
                true
            }
            _ => false,
        }
    }
}

impl Reducible for CardReveal {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Browser side of the reveal: one observer per card plus the pending timers.
struct RevealWatchers {
    guard: MountGuard,
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
    timers: Rc<RefCell<Vec<Timeout>>>,
}

impl RevealWatchers {
    fn attach(refs: &[NodeRef], dispatcher: UseReducerDispatcher<CardReveal>) -> Self {
        let guard = MountGuard::mounted();
        let timers: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::CARD_VISIBILITY_RATIO));

        let mut observers = Vec::with_capacity(refs.len());
        for (index, node_ref) in refs.iter().enumerate() {
            let Some(element) = node_ref.cast::<Element>() else {
                debug!("card {} has no element, skipping reveal", index);
                continue;
            };

            let callback = Self::on_intersect(index, guard.clone(), dispatcher.clone(), timers.clone());
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => {
                    observer.observe(&element);
                    observers.push((observer, callback));
                }
                Err(err) => warn!("failed to observe card {}: {:?}", index, err),
            }
        }

        Self {
            guard,
            observers,
            timers,
        }
    }

    fn on_intersect(
        index: usize,
        guard: MountGuard,
        dispatcher: UseReducerDispatcher<CardReveal>,
        timers: Rc<RefCell<Vec<Timeout>>>,
    ) -> ObserverCallback {
        let armed = Cell::new(true);
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| {
                    crosses_threshold(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        config::CARD_VISIBILITY_RATIO,
                    )
                });
            let Some(delay) = schedule_reveal(&armed, &guard, entered, index) else {
                return;
            };
            observer.disconnect();

            dispatcher.dispatch(RevealAction::Intersected(index));
            debug!("card {} visible, revealing in {}ms", index, delay);

            let guard = guard.clone();
            let dispatcher = dispatcher.clone();
            let timeout = Timeout::new(delay, move || {
                guard.run(|| dispatcher.dispatch(RevealAction::Elapsed(index)));
            });
            timers.borrow_mut().push(timeout);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    }

    fn detach(self) {
        self.guard.dispose();
        for (observer, _callback) in &self.observers {
            observer.disconnect();
        }
        // Dropping a Timeout clears it.
        self.timers.borrow_mut().clear();
    }
}

/// Reveals each referenced card once it scrolls into view, staggered by its
/// index. Watchers and pending timers are torn down with the caller.
#[hook]
pub fn use_card_reveal(refs: Rc<Vec<NodeRef>>) -> UseReducerHandle<CardReveal> {
    let count = refs.len();
    let reveal = use_reducer(move || CardReveal::new(count));

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |refs| {
                let watchers = RevealWatchers::attach(refs, dispatcher);
                move || watchers.detach()
            },
            refs,
        );
    }

    reveal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visibility(state: &CardReveal) -> Vec<bool> {
        (0..state.phases.len()).map(|i| state.is_revealed(i)).collect()
    }

    /// Deterministic stand-in for the browser: intersections schedule timers
    /// on a virtual clock, exactly as the observer callback does.
    struct Harness {
        now: u32,
        state: CardReveal,
        guard: MountGuard,
        armed: Vec<Cell<bool>>,
        pending: Vec<(u32, usize)>,
        revealed_at: Vec<Option<u32>>,
    }

    impl Harness {
        fn new(count: usize) -> Self {
            Self {
                now: 0,
                state: CardReveal::new(count),
                guard: MountGuard::mounted(),
                armed: (0..count).map(|_| Cell::new(true)).collect(),
                pending: Vec::new(),
                revealed_at: vec![None; count],
            }
        }

        fn intersect(&mut self, index: usize) {
            if let Some(delay) = schedule_reveal(&self.armed[index], &self.guard, true, index) {
                self.state.apply(RevealAction::Intersected(index));
                self.pending.push((self.now + delay, index));
            }
        }

        fn advance_to(&mut self, at: u32) {
            self.now = at;
            let (due, later): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(deadline, _)| *deadline <= at);
            self.pending = later;
            for (deadline, index) in due {
                let state = &mut self.state;
                let revealed_at = &mut self.revealed_at;
                self.guard.run(|| {
                    if state.apply(RevealAction::Elapsed(index)) {
                        revealed_at[index] = Some(deadline);
                    }
                });
            }
        }
    }

    #[test]
    fn delay_is_index_times_stagger() {
        assert_eq!(reveal_delay_ms(0, config::CARD_STAGGER_MS), 0);
        assert_eq!(reveal_delay_ms(1, config::CARD_STAGGER_MS), 200);
        assert_eq!(reveal_delay_ms(2, config::CARD_STAGGER_MS), 400);
    }

    #[test]
    fn delay_saturates_for_huge_index() {
        assert_eq!(reveal_delay_ms(usize::MAX, config::CARD_STAGGER_MS), u32::MAX);
        assert_eq!(reveal_delay_ms(30_000_000, config::CARD_STAGGER_MS), u32::MAX);
    }

    #[test]
    fn notification_schedules_only_once() {
        let guard = MountGuard::mounted();
        let armed = Cell::new(true);

        assert_eq!(schedule_reveal(&armed, &guard, false, 2), None);
        assert!(armed.get());

        assert_eq!(schedule_reveal(&armed, &guard, true, 2), Some(400));
        assert!(!armed.get());
        assert_eq!(schedule_reveal(&armed, &guard, true, 2), None);
    }

    #[test]
    fn notification_after_unmount_is_dropped() {
        let guard = MountGuard::mounted();
        let armed = Cell::new(true);
        guard.dispose();

        assert_eq!(schedule_reveal(&armed, &guard, true, 0), None);
    }

    #[test]
    fn phases_only_move_forward() {
        let mut reveal = CardReveal::new(1);

        // timer before intersection is ignored
        assert!(!reveal.apply(RevealAction::Elapsed(0)));
        assert_eq!(reveal.phase(0), Some(CardPhase::Unseen));

        assert!(reveal.apply(RevealAction::Intersected(0)));
        assert!(!reveal.apply(RevealAction::Intersected(0)));
        assert_eq!(reveal.phase(0), Some(CardPhase::PendingReveal));

        assert!(reveal.apply(RevealAction::Elapsed(0)));
        assert!(reveal.is_revealed(0));

        for action in [RevealAction::Intersected(0), RevealAction::Elapsed(0)] {
            assert!(!reveal.apply(action));
            assert!(reveal.is_revealed(0));
        }
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut reveal = CardReveal::new(2);
        assert!(!reveal.apply(RevealAction::Intersected(5)));
        assert_eq!(visibility(&reveal), vec![false, false]);
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let reveal = Rc::new(CardReveal::new(1));
        let same = reveal.clone().reduce(RevealAction::Elapsed(0));
        assert!(Rc::ptr_eq(&reveal, &same));

        let next = reveal.clone().reduce(RevealAction::Intersected(0));
        assert!(!Rc::ptr_eq(&reveal, &next));
        assert_eq!(next.phase(0), Some(CardPhase::PendingReveal));
    }

    #[test]
    fn each_card_waits_on_its_own_intersection() {
        let mut harness = Harness::new(3);

        harness.advance_to(1_000);
        harness.intersect(2);
        harness.advance_to(1_300);
        harness.intersect(0);

        harness.advance_to(1_300);
        assert_eq!(visibility(&harness.state), vec![true, false, false]);

        harness.advance_to(1_399);
        assert!(!harness.state.is_revealed(2));
        harness.advance_to(1_400);

        assert_eq!(harness.revealed_at[2], Some(1_400));
        assert_eq!(harness.revealed_at[0], Some(1_300));
        assert_eq!(harness.revealed_at[1], None);
        assert_eq!(visibility(&harness.state), vec![true, false, true]);
    }

    #[test]
    fn repeated_intersections_do_not_reschedule() {
        let mut harness = Harness::new(2);
        harness.intersect(1);
        harness.advance_to(150);
        harness.intersect(1);
        harness.advance_to(200);

        assert_eq!(harness.revealed_at[1], Some(200));
        assert!(harness.pending.is_empty());
    }

    #[test]
    fn no_update_after_unmount() {
        let mut harness = Harness::new(3);
        harness.intersect(2);
        harness.guard.dispose();
        harness.advance_to(1_000);

        assert_eq!(harness.state.phase(2), Some(CardPhase::PendingReveal));
        assert_eq!(harness.revealed_at[2], None);

        harness.intersect(1);
        assert_eq!(harness.state.phase(1), Some(CardPhase::Unseen));
    }

    #[test]
    fn threshold_needs_intersection_and_ratio() {
        assert!(!crosses_threshold(false, 1.0, 0.3));
        assert!(!crosses_threshold(true, 0.1, 0.3));
        assert!(crosses_threshold(true, 0.3, 0.3));
        assert!(crosses_threshold(true, 0.9, 0.3));
    }
}
