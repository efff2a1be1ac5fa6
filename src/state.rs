use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{
    EarlyAccessRepository, EventAdminRepository, EventRepository, GuestRepository,
    RsvpRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub event_admin_repo: Arc<dyn EventAdminRepository>,
    pub guest_repo: Arc<dyn GuestRepository>,
    pub rsvp_repo: Arc<dyn RsvpRepository>,
    pub early_access_repo: Arc<dyn EarlyAccessRepository>,
    pub auth_service: Arc<AuthService>,
}
