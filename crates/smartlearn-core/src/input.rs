//! Input abstraction layer.

/// Logical actions consumed by the learning app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Next,
    Prev,
    Select,
    Back,
    /// 0-based page target; ignored outside the viewer.
    JumpToPage(u16),
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
