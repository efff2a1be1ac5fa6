pub mod auth;
pub mod early_access;
pub mod event;
pub mod guest;
pub mod health;
pub mod public;
pub mod rsvp;
pub mod user;
