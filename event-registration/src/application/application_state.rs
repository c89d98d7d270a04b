use super::ApplicationEnv;
use crate::{
    repository::RegistrationsRepositoryImpl,
    service::{
        mail_service::{MailServiceConfig, SmtpMailService},
        qr_code_service::{QrCodeServiceConfig, QrCodeServiceImpl},
        registrations_service::{RegistrationsService, RegistrationsServiceImpl},
        ticket_code_service::TicketCodeServiceImpl,
        uploads_service::{UploadsServiceConfig, UploadsServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

const UPLOADS_PUBLIC_PATH: &str = "/uploads";
const MAIL_SENDER_NAME: &str = "Charity & Hope Africa Empowerment";

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub registrations_service: Arc<dyn RegistrationsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let registrations_repository = RegistrationsRepositoryImpl::new(db).await?;
    let registrations_repository = Arc::new(registrations_repository);

    tracing::info!(directory = %env.upload_directory.display(), "creating upload directory");
    tokio::fs::create_dir_all(&env.upload_directory).await?;

    tracing::info!("creating services");
    let ticket_code_service = TicketCodeServiceImpl::new();
    let ticket_code_service = Arc::new(ticket_code_service);

    let config = UploadsServiceConfig {
        directory: env.upload_directory.clone(),
        public_path: UPLOADS_PUBLIC_PATH.to_string(),
    };
    let uploads_service = UploadsServiceImpl::new(config);
    let uploads_service = Arc::new(uploads_service);

    let config = QrCodeServiceConfig {
        directory: env.upload_directory.clone(),
        min_dimension: QrCodeServiceConfig::DEFAULT_MIN_DIMENSION,
    };
    let qr_code_service = QrCodeServiceImpl::new(config);
    let qr_code_service = Arc::new(qr_code_service);

    let config = MailServiceConfig {
        relay: env.mail_relay.clone(),
        user: env.mail_user.clone(),
        password: env.mail_password.clone(),
        sender_name: MAIL_SENDER_NAME.to_string(),
    };
    let mail_service = SmtpMailService::new(config)?;
    let mail_service = Arc::new(mail_service);

    let registrations_service = RegistrationsServiceImpl::new(
        ticket_code_service,
        uploads_service,
        qr_code_service,
        registrations_repository,
        mail_service,
    );
    let registrations_service = Arc::new(registrations_service);

    Ok((
        ApplicationState {
            registrations_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
