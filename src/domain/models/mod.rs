pub mod auth;
pub mod early_access;
pub mod event;
pub mod guest;
pub mod rsvp;
pub mod user;
