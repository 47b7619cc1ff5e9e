//! UI events raised by widgets and consumed by the reducer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackSource {
    TopBarButton,
    Keyboard,
    PointerButton,
}

impl BackSource {
    pub fn label(self) -> &'static str {
        match self {
            BackSource::TopBarButton => "top_bar_button",
            BackSource::Keyboard => "keyboard",
            BackSource::PointerButton => "pointer_button",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    RowClicked { name: String },
    BackRequested { source: BackSource },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::RowClicked { .. } => "row_clicked",
            UiEvent::BackRequested { .. } => "back_requested",
        }
    }
}
