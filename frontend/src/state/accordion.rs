use std::rc::Rc;
use yew::Reducible;

/// Which FAQ entry is expanded. At most one entry is open at any time,
/// and the open index always points into the entry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionState {
    len: usize,
    open: Option<usize>,
}

/// Regions whose open flag changed during a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggled {
    pub closed: Option<usize>,
    pub opened: Option<usize>,
}

impl AccordionState {
    /// A default index outside the sequence is dropped, leaving every entry collapsed.
    pub fn new(len: usize, default_open: Option<usize>) -> Self {
        Self {
            len,
            open: default_open.filter(|&index| index < len),
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapses `index` if it is the open entry, otherwise opens it and
    /// closes whichever entry was open before.
    ///
    /// Panics if `index` is not a position in the entry sequence.
    pub fn toggle(&mut self, index: usize) -> Toggled {
        assert!(
            index < self.len,
            "accordion index {} out of range for {} entries",
            index,
            self.len
        );
        let previous = self.open;
        if previous == Some(index) {
            self.open = None;
            Toggled { closed: Some(index), opened: None }
        } else {
            self.open = Some(index);
            Toggled { closed: previous, opened: Some(index) }
        }
    }

    /// Value for the trigger's `aria-expanded` attribute.
    pub fn aria_expanded(&self, index: usize) -> &'static str {
        if self.is_open(index) { "true" } else { "false" }
    }
}

pub enum AccordionAction {
    Toggle(usize),
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            AccordionAction::Toggle(index) => {
                let toggled = next.toggle(index);
                log::debug!("faq toggle {}: closed {:?}, opened {:?}", index, toggled.closed, toggled.opened);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(state: &AccordionState) -> usize {
        (0..state.len).filter(|&i| state.is_open(i)).count()
    }

    #[test]
    fn at_most_one_entry_open_after_any_toggle() {
        let mut state = AccordionState::new(4, Some(0));
        for index in [0, 2, 1, 1, 3, 3, 0, 2, 2, 1] {
            state.toggle(index);
            assert!(open_count(&state) <= 1);
            if let Some(open) = state.open_index() {
                assert!(open < state.len);
            }
        }
    }

    #[test]
    fn toggling_twice_restores_previous_state() {
        for index in 0..4 {
            for start in [None, Some(index)] {
                let mut state = AccordionState::new(4, start);
                state.toggle(index);
                state.toggle(index);
                assert_eq!(state.open_index(), start, "start {:?}, index {}", start, index);
            }
        }
    }

    #[test]
    fn toggling_another_entry_twice_collapses_everything() {
        let mut state = AccordionState::new(4, Some(0));
        state.toggle(1);
        assert_eq!(state.open_index(), Some(1));
        state.toggle(1);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn switching_entries_closes_the_previous_one() {
        let mut state = AccordionState::new(4, Some(1));
        let toggled = state.toggle(3);
        assert_eq!(state.open_index(), Some(3));
        assert!(!state.is_open(1));
        assert_eq!(toggled, Toggled { closed: Some(1), opened: Some(3) });
    }

    #[test]
    fn single_region_changes_when_nothing_else_is_open() {
        let mut state = AccordionState::new(4, None);
        assert_eq!(state.toggle(2), Toggled { closed: None, opened: Some(2) });
        assert_eq!(state.toggle(2), Toggled { closed: Some(2), opened: None });
    }

    #[test]
    fn aria_expanded_mirrors_open_index() {
        let mut state = AccordionState::new(4, Some(0));
        for index in [0, 2, 1, 1] {
            state.toggle(index);
            for row in 0..state.len {
                let expected = if state.open_index() == Some(row) { "true" } else { "false" };
                assert_eq!(state.aria_expanded(row), expected);
            }
        }
    }

    #[test]
    fn faq_walkthrough() {
        let mut state = AccordionState::new(4, Some(0));
        state.toggle(0);
        assert_eq!(state.open_index(), None);
        state.toggle(2);
        assert_eq!(state.open_index(), Some(2));
        state.toggle(1);
        assert_eq!(state.open_index(), Some(1));
        state.toggle(1);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn out_of_range_default_starts_collapsed() {
        assert_eq!(AccordionState::new(4, Some(4)).open_index(), None);
        assert_eq!(AccordionState::new(0, Some(0)).open_index(), None);
        assert_eq!(AccordionState::new(4, None).open_index(), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn toggling_past_the_end_panics() {
        AccordionState::new(4, None).toggle(4);
    }

    #[test]
    fn reducer_applies_toggle() {
        let state = Rc::new(AccordionState::new(4, Some(0)));
        let state = state.reduce(AccordionAction::Toggle(3));
        assert_eq!(state.open_index(), Some(3));
        let state = state.reduce(AccordionAction::Toggle(3));
        assert_eq!(state.open_index(), None);
    }
}
