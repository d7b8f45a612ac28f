// Submission orchestrator and session state
use std::time::Duration;

use futures::join;
use tokio::time::sleep;
use tracing::{debug, error};

use crate::api::BookingApi;
use crate::booking::BookingResponse;
use crate::form::BookingForm;
use crate::view::View;

// User-facing texts. Raw error detail goes to the log, never to the user.
pub const KEY_BANNER_MESSAGE: &str = "Could not load API key. Please try again later.";
pub const NO_KEY_MESSAGE: &str = "Cannot send booking right now (no API key).";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Oops! The booking could not be completed. Please try again.";

// Loading-indicator floor: a submission stays visibly "submitting" for at
// least this long even when the service answers faster.
pub const MIN_SUBMIT_DURATION: Duration = Duration::from_millis(1000);

// Submission state machine. Failed carries the text the widget shows
// inline; everything else the widget needs is a separate accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed { message: String },
}

// Owns every piece of per-page-load state: the credential, the current
// view, the submission state and the last confirmed booking. All mutation
// goes through `&mut self`, so a submission can never overlap another one
// or a navigation. Dropped on page reload, nothing is persisted.
pub struct BookingSession<A: BookingApi> {
    api: A,
    api_key: Option<String>,
    key_banner: Option<&'static str>,
    view: View,
    menu_open: bool,
    state: SubmitState,
    booking: Option<BookingResponse>,
    min_submit_duration: Duration,
}

impl<A: BookingApi> BookingSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            api_key: None,
            key_banner: None,
            view: View::Booking,
            menu_open: false,
            state: SubmitState::Idle,
            booking: None,
            min_submit_duration: MIN_SUBMIT_DURATION,
        }
    }

    pub fn with_min_submit_duration(mut self, duration: Duration) -> Self {
        self.min_submit_duration = duration;
        self
    }

    // The one-time startup fetch. A failure leaves the session unable to
    // submit until the embedding page reloads; the key is never refreshed.
    pub async fn load_api_key(&mut self) {
        match self.api.fetch_api_key().await {
            Ok(key) => {
                self.api_key = Some(key);
                self.key_banner = None;
            }
            Err(err) => {
                error!(error = %err, "API key fetch failed");
                self.key_banner = Some(KEY_BANNER_MESSAGE);
            }
        }
    }

    // Persistent banner text while no key is available.
    pub fn api_key_banner(&self) -> Option<&str> {
        self.key_banner
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    // Inline error text, if the last submission failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn booking(&self) -> Option<&BookingResponse> {
        self.booking.as_ref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    // Menu navigation is unconditional; the confirmation view itself copes
    // with a missing booking.
    pub fn go_to_booking(&mut self) {
        self.view = View::Booking;
        self.menu_open = false;
    }

    pub fn go_to_confirmation(&mut self) {
        self.view = View::Confirmation;
        self.menu_open = false;
    }

    // One user-initiated submission: validate, gate on the credential, then
    // run the creation call against the indicator floor. Nothing here
    // retries on its own; a failure waits for the user to submit again.
    pub async fn submit(&mut self, form: &BookingForm) {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.state = SubmitState::Failed {
                    message: err.to_string(),
                };
                return;
            }
        };

        let Some(api_key) = self.api_key.clone() else {
            self.state = SubmitState::Failed {
                message: NO_KEY_MESSAGE.to_string(),
            };
            return;
        };

        self.state = SubmitState::Submitting;
        debug!(when = %request.when, lanes = request.lanes, people = request.people, "submitting booking");

        // Wait for both the call and the floor timer; the slower of the two
        // decides when the submitting state ends.
        let (result, _) = join!(
            self.api.create_booking(&api_key, &request),
            sleep(self.min_submit_duration),
        );

        match result {
            Ok(response) => {
                debug!(id = %response.id, "booking confirmed");
                self.booking = Some(response);
                self.state = SubmitState::Succeeded;
                self.view = View::Confirmation;
            }
            Err(err) => {
                error!(error = %err, "booking submission failed");
                self.state = SubmitState::Failed {
                    message: SUBMIT_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }
}
