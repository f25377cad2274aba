use std::sync::Arc;

use sqlx::MySqlPool;

use crate::config::Config;
use crate::modules::notifications::services::{
    EmailSender, EmailTemplates, NotificationService, SendGridMailer,
};
use crate::modules::reminders::repositories::{MySqlReminderRepository, ReminderRepository};
use crate::modules::stations::repositories::{MySqlStationRepository, StationRepository};
use crate::modules::statistics::repositories::{MySqlStatisticsRepository, StatisticsRepository};
use crate::modules::tax_types::repositories::{MySqlTaxTypeRepository, TaxTypeRepository};
use crate::modules::taxes::repositories::{MySqlTaxRepository, TaxRepository};
use crate::modules::taxes::services::TaxService;
use crate::modules::users::repositories::{MySqlUserRepository, UserRepository};

/// Shared application state handed to every handler.
///
/// Repositories are held behind trait objects so controllers and services
/// are wired identically in production and in tests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub stations: Arc<dyn StationRepository>,
    pub tax_types: Arc<dyn TaxTypeRepository>,
    pub reminders: Arc<dyn ReminderRepository>,
    pub statistics: Arc<dyn StatisticsRepository>,
    pub taxes: TaxService,
    pub notifications: NotificationService,
}

impl AppState {
    /// Production wiring over a MySQL pool and the SendGrid mailer
    pub fn new(pool: MySqlPool, config: &Config) -> Self {
        let mailer: Arc<dyn EmailSender> = Arc::new(SendGridMailer::new(
            config.email.sendgrid_api_key.clone(),
            config.email.from_email.clone(),
        ));

        Self::with_parts(
            Arc::new(MySqlUserRepository::new(pool.clone())),
            Arc::new(MySqlStationRepository::new(pool.clone())),
            Arc::new(MySqlTaxTypeRepository::new(pool.clone())),
            Arc::new(MySqlTaxRepository::new(pool.clone())),
            Arc::new(MySqlReminderRepository::new(pool.clone())),
            Arc::new(MySqlStatisticsRepository::new(pool)),
            mailer,
            EmailTemplates::new(config.email.app_url.clone()),
        )
    }

    /// Explicit wiring; tests pass mock repositories and mailers here.
    #[allow(clippy::too_many_arguments)]
    pub fn with_parts(
        users: Arc<dyn UserRepository>,
        stations: Arc<dyn StationRepository>,
        tax_types: Arc<dyn TaxTypeRepository>,
        taxes: Arc<dyn TaxRepository>,
        reminders: Arc<dyn ReminderRepository>,
        statistics: Arc<dyn StatisticsRepository>,
        mailer: Arc<dyn EmailSender>,
        templates: EmailTemplates,
    ) -> Self {
        let tax_service = TaxService::new(taxes.clone(), tax_types.clone());
        let notifications =
            NotificationService::new(taxes, reminders.clone(), mailer, templates);

        Self {
            users,
            stations,
            tax_types,
            reminders,
            statistics,
            taxes: tax_service,
            notifications,
        }
    }
}
