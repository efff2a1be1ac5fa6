pub mod sqlite_early_access_repo;
pub mod sqlite_event_admin_repo;
pub mod sqlite_event_repo;
pub mod sqlite_guest_repo;
pub mod sqlite_rsvp_repo;
pub mod sqlite_user_repo;
