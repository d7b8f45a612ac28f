// Main library file for the Strajk bowling booking widget core

// Export modules for each part of the workflow
pub mod api;
pub mod booking;
pub mod form;
pub mod session;
pub mod view;
pub mod wire;

// Re-export key types for convenience
pub use api::{
    BookingApi, BookingSubmitError, ClientConfig, ClientError, HttpBookingClient, KeyFetchError,
};
pub use booking::{BookingRequest, BookingResponse};
pub use form::{BookingForm, ValidationError};
pub use session::{BookingSession, SubmitState};
pub use view::{ConfirmationSummary, View};
