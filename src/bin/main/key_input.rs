use std::{cell::RefCell, collections::VecDeque, convert::Infallible, rc::Rc};

use smartlearn_core::input::{InputEvent, InputProvider};

/// Shared event queue between the terminal loop (producer) and the app
/// state machine (consumer). Single-threaded by construction.
#[derive(Clone, Default)]
pub(super) struct InputQueue {
    events: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl InputQueue {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&self, event: InputEvent) {
        self.events.borrow_mut().push_back(event);
    }
}

impl InputProvider for InputQueue {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.borrow_mut().pop_front())
    }
}
