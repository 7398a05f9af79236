pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use db::Store;
use services::services::{
    billing::BillingService, notification::NotificationService, roster::RosterService,
};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
    roster: RosterService,
    billing: BillingService,
    notifications: NotificationService,
}

impl AppState {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            roster: RosterService::new(store.clone()),
            billing: BillingService::new(store.clone()),
            notifications: NotificationService::new(),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn roster(&self) -> &RosterService {
        &self.roster
    }

    pub fn billing(&self) -> &BillingService {
        &self.billing
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
