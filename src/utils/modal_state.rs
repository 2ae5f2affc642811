/// Visibility of a single modal. Starts closed and never reaches a terminal
/// state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Everything that can happen to a modal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModalEvent {
    Open,
    Close,
    Set(bool),
    Toggle,
    /// The dismiss key was pressed while the key binding was live.
    DismissKey,
    BackdropClick,
    /// Clicks inside the content never reach the backdrop.
    ContentClick,
}

impl ModalEvent {
    /// What a click on the backdrop means, if anything.
    pub fn backdrop(close_on_backdrop: bool) -> Option<ModalEvent> {
        close_on_backdrop.then_some(ModalEvent::BackdropClick)
    }
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }

    pub fn apply(self, event: ModalEvent) -> ModalState {
        match event {
            ModalEvent::Open => ModalState::Open,
            ModalEvent::Close | ModalEvent::DismissKey | ModalEvent::BackdropClick => {
                ModalState::Closed
            }
            ModalEvent::Set(open) => ModalState::from(open),
            ModalEvent::Toggle => ModalState::from(!self.is_open()),
            ModalEvent::ContentClick => self,
        }
    }

    /// The state after `event`, or `None` when nothing would change.
    pub fn transition(self, event: ModalEvent) -> Option<ModalState> {
        let next = self.apply(event);
        (next != self).then_some(next)
    }

    pub fn name(self) -> &'static str {
        match self {
            ModalState::Closed => "closed",
            ModalState::Open => "open",
        }
    }
}

impl From<bool> for ModalState {
    fn from(open: bool) -> Self {
        if open {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }
}

impl From<ModalState> for bool {
    fn from(state: ModalState) -> Self {
        state.is_open()
    }
}
