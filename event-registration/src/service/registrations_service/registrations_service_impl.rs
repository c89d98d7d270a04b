use super::RegistrationsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{NewRegistration, RegistrationsRepository},
    service::{
        mail_service::{ConfirmationMail, MailService},
        qr_code_service::QrCodeService,
        ticket_code_service::TicketCodeService,
        uploads_service::{StoredFile, UploadsService},
    },
};
use axum::async_trait;
use std::{path::Path, sync::Arc};
use time::OffsetDateTime;

const MISSING_FIELDS_MESSAGE: &str = "Tous les champs sont obligatoires.";

struct ValidRegistration {
    full_name: String,
    email: String,
    event_type: String,
    phone: String,
    file: Option<input::UploadedFile>,
}

pub struct RegistrationsServiceImpl {
    ticket_code_service: Arc<dyn TicketCodeService>,
    uploads_service: Arc<dyn UploadsService>,
    qr_code_service: Arc<dyn QrCodeService>,
    repository: Arc<dyn RegistrationsRepository>,
    mail_service: Arc<dyn MailService>,
}

impl RegistrationsServiceImpl {
    pub fn new(
        ticket_code_service: Arc<dyn TicketCodeService>,
        uploads_service: Arc<dyn UploadsService>,
        qr_code_service: Arc<dyn QrCodeService>,
        repository: Arc<dyn RegistrationsRepository>,
        mail_service: Arc<dyn MailService>,
    ) -> Self {
        Self {
            ticket_code_service,
            uploads_service,
            qr_code_service,
            repository,
            mail_service,
        }
    }

    fn validate(form: input::RegistrationForm) -> Result<ValidRegistration, Error> {
        Ok(ValidRegistration {
            full_name: Self::required(form.full_name)?,
            email: Self::required(form.email)?,
            event_type: Self::required(form.event_type)?,
            phone: Self::required(form.phone)?,
            file: form.file,
        })
    }

    fn required(value: Option<String>) -> Result<String, Error> {
        value
            .filter(|value| !value.trim().is_empty())
            .ok_or(Error::Validation(MISSING_FIELDS_MESSAGE))
    }

    async fn save_upload(
        &self,
        file: Option<&input::UploadedFile>,
    ) -> Result<Option<StoredFile>, Error> {
        let Some(file) = file else {
            return Ok(None);
        };

        let stored_file = self
            .uploads_service
            .save(&file.file_name, &file.content)
            .await?;

        Ok(Some(stored_file))
    }

    ///
    /// Removes upload of a registration that was not saved.
    ///
    /// QR images are left in place: equal ticket codes share one image,
    /// which may belong to another saved registration.
    ///
    async fn discard_upload(&self, upload_path: Option<&Path>) {
        if let Some(path) = upload_path {
            self.uploads_service.remove(path).await;
        }
    }
}

#[async_trait]
impl RegistrationsService for RegistrationsServiceImpl {
    #[tracing::instrument(name = "Registration", skip_all)]
    async fn register(
        &self,
        form: input::RegistrationForm,
    ) -> Result<output::RegistrationCreated, Error> {
        tracing::info!("registering participant");
        tracing::debug!(fields = ?form.present_fields(), "received form");

        let registration = Self::validate(form)?;

        let upload = self.save_upload(registration.file.as_ref()).await?;
        let upload_path = upload.as_ref().map(|upload| upload.path.as_path());

        let ticket_code = self
            .ticket_code_service
            .generate(&registration.event_type);
        tracing::info!(%ticket_code, "generated ticket code");

        let qr_code_path = match self.qr_code_service.render(&ticket_code).await {
            Ok(qr_code_path) => qr_code_path,
            Err(err) => {
                self.discard_upload(upload_path).await;
                return Err(err);
            }
        };

        let new_registration = NewRegistration {
            full_name: registration.full_name,
            email: registration.email,
            event_type: registration.event_type,
            phone: registration.phone,
            file: upload.as_ref().map(|upload| upload.uri.clone()),
            ticket_code,
            created_at: OffsetDateTime::now_utc(),
        };

        let id = match self.repository.insert(&new_registration).await {
            Ok(id) => id,
            Err(err) => {
                self.discard_upload(upload_path).await;
                return Err(Error::Database(err));
            }
        };
        tracing::info!(%id, "saved registration");

        let NewRegistration {
            full_name,
            email,
            event_type,
            ticket_code,
            ..
        } = new_registration;
        let mail = ConfirmationMail {
            recipient: email,
            full_name,
            event_type,
            ticket_code: ticket_code.clone(),
            qr_code_path,
        };

        // Registration is already saved, it is not rolled back
        if let Err(err) = self.mail_service.send_confirmation(mail).await {
            tracing::error!(%id, "registration saved but confirmation mail not sent");
            return Err(Error::Mail(err));
        }
        tracing::info!("sent confirmation");

        Ok(output::RegistrationCreated::new(ticket_code))
    }
}
