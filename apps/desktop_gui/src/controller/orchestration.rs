//! Queues UI events raised while a frame is being drawn.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(event_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) {
    let event_name = event.name();

    match event_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *status = "UI event queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "UI event queue disconnected; input is being ignored".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::dispatch_ui_event;
    use crate::controller::events::{BackSource, UiEvent};

    #[test]
    fn queues_event_without_touching_status() {
        let (tx, rx) = bounded(4);
        let mut status = String::new();
        dispatch_ui_event(
            &tx,
            UiEvent::RowClicked {
                name: "OtterTeal".into(),
            },
            &mut status,
        );
        assert!(status.is_empty());
        assert_eq!(
            rx.try_recv().ok(),
            Some(UiEvent::RowClicked {
                name: "OtterTeal".into()
            })
        );
    }

    #[test]
    fn full_queue_sets_status() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        let back = UiEvent::BackRequested {
            source: BackSource::Keyboard,
        };
        dispatch_ui_event(&tx, back.clone(), &mut status);
        dispatch_ui_event(&tx, back, &mut status);
        assert!(status.contains("full"));
    }

    #[test]
    fn disconnected_queue_sets_status() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        dispatch_ui_event(
            &tx,
            UiEvent::BackRequested {
                source: BackSource::TopBarButton,
            },
            &mut status,
        );
        assert!(status.contains("disconnected"));
    }
}
