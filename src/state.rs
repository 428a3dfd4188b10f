use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use crate::config::AppConfig;
use crate::fixtures::Fixtures;
use crate::notify::NotificationCenter;
use crate::pages::Pages;

#[derive(Clone)]
pub struct AppState {
    pub pages: Arc<Mutex<Pages>>,
    pub notifications: Arc<NotificationCenter>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let fixtures = Arc::new(Fixtures::seed(Utc::now()));
        let notifications = Arc::new(NotificationCenter::new(config.notification_capacity));
        let pages = Pages::new(fixtures, notifications.clone());

        Self {
            pages: Arc::new(Mutex::new(pages)),
            notifications,
        }
    }
}
