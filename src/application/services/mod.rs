//! Application services
//!
//! Concrete controllers that orchestrate domain logic. They depend on the
//! `ConfigHost` boundary trait but are themselves concrete structs, not traits.

mod connection_form;
mod domain_selection;

pub use connection_form::{
    coerce_poll_interval, effective_poll_interval, mask_token, parse_poll_interval,
    ConnectionForm, ConnectionView, PollIntervalField, POLL_INTERVAL_DEFAULT, POLL_INTERVAL_MIN,
    POLL_INTERVAL_STEP,
};
pub use domain_selection::{DomainRow, DomainSelectionController};
