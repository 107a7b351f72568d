use crate::error::DashboardError;
use crate::host::{ButtonControl, DashboardApi, Sleep};
use std::time::Duration;

pub const REVERT_DELAY: Duration = Duration::from_millis(3000);

pub const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
pub const SENT_LABEL: &str = r#"<i class="fas fa-check"></i> Request sent!"#;
pub const FAILED_LABEL: &str = r#"<i class="fas fa-exclamation-triangle"></i> Error - try again"#;

pub const SENT_COLOR: &str = "#10B981";
pub const FAILED_COLOR: &str = "#EF4444";

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The button was already disabled by an earlier click.
    Ignored,
    Sent,
    Failed(DashboardError),
}

/// Click handler of the "request data" button. The disabled flag is the
/// only guard against overlapping submissions; nothing is cancelled.
pub async fn handle_data_request<A, B, S>(api: &A, button: &B, sleeper: &S) -> SubmitOutcome
where
    A: DashboardApi,
    B: ButtonControl,
    S: Sleep,
{
    if button.is_disabled() {
        return SubmitOutcome::Ignored;
    }

    let original = button.label();
    button.set_label(SENDING_LABEL);
    button.set_disabled(true);

    let outcome = match api.request_data().await {
        Ok(()) => {
            button.set_label(SENT_LABEL);
            button.set_background(Some(SENT_COLOR));
            SubmitOutcome::Sent
        }
        Err(err) => {
            button.set_label(FAILED_LABEL);
            button.set_background(Some(FAILED_COLOR));
            SubmitOutcome::Failed(err)
        }
    };

    sleeper.sleep(REVERT_DELAY).await;
    button.set_label(&original);
    button.set_disabled(false);
    button.set_background(None);

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ButtonSnapshot, FakeApi, FakeButton, FakeSleep};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::FutureExt;

    const ORIGINAL: &str = r#"<i class="fas fa-download"></i> Request complete data"#;

    fn restored() -> ButtonSnapshot {
        ButtonSnapshot {
            label: ORIGINAL.to_string(),
            disabled: false,
            background: None,
        }
    }

    #[test]
    fn success_shows_sent_then_reverts_after_three_seconds() {
        let api = FakeApi::default();
        let button = FakeButton::new(ORIGINAL);
        let sleeper = FakeSleep::watching(&button);

        let outcome = block_on(handle_data_request(&api, &button, &sleeper));

        assert_eq!(outcome, SubmitOutcome::Sent);
        let sleeps = sleeper.sleeps.borrow();
        assert_eq!(sleeps.len(), 1);
        assert_eq!(sleeps[0].0, Duration::from_millis(3000));
        assert_eq!(
            sleeps[0].1,
            ButtonSnapshot {
                label: SENT_LABEL.to_string(),
                disabled: true,
                background: Some(SENT_COLOR.to_string()),
            }
        );
        assert_eq!(button.snapshot(), restored());
    }

    #[test]
    fn failure_shows_error_then_reverts_identically() {
        let api = FakeApi::default();
        *api.submit_result.borrow_mut() = Some(Err(DashboardError::Status(503)));
        let button = FakeButton::new(ORIGINAL);
        let sleeper = FakeSleep::watching(&button);

        let outcome = block_on(handle_data_request(&api, &button, &sleeper));

        assert_eq!(outcome, SubmitOutcome::Failed(DashboardError::Status(503)));
        let sleeps = sleeper.sleeps.borrow();
        assert_eq!(sleeps[0].0, REVERT_DELAY);
        assert_eq!(sleeps[0].1.label, FAILED_LABEL);
        assert_eq!(sleeps[0].1.background.as_deref(), Some(FAILED_COLOR));
        assert_eq!(button.snapshot(), restored());
    }

    #[test]
    fn click_during_flight_is_ignored() {
        let (tx, rx) = oneshot::channel();
        let api = FakeApi::default();
        *api.submit_gate.borrow_mut() = Some(rx);
        let button = FakeButton::new(ORIGINAL);
        let sleeper = FakeSleep::watching(&button);

        let mut first = Box::pin(handle_data_request(&api, &button, &sleeper));
        assert!(first.as_mut().now_or_never().is_none());

        let in_flight = button.snapshot();
        assert!(in_flight.disabled);
        assert_eq!(in_flight.label, SENDING_LABEL);

        let second = block_on(handle_data_request(&api, &button, &sleeper));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(api.submit_calls.get(), 1);
        assert_eq!(button.snapshot(), in_flight);

        tx.send(Ok(())).expect("send");
        assert_eq!(block_on(first), SubmitOutcome::Sent);
        assert_eq!(api.submit_calls.get(), 1);
        assert_eq!(button.snapshot(), restored());
    }
}
