use super::{ConfirmationMail, Error, MailService, MailServiceConfig};
use axum::async_trait;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

const QR_CODE_CONTENT_TYPE: &str = "image/png";

///
/// Sends mails through an authenticated SMTP relay.
/// The transport keeps its connection pool for the whole application lifetime.
///
pub struct SmtpMailService {
    sender: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailService {
    pub fn new(config: MailServiceConfig) -> Result<Self, Error> {
        let address = config.user.parse::<Address>()?;
        let sender = Mailbox::new(Some(config.sender_name), address);

        let credentials = Credentials::new(config.user, config.password);
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)?
            .credentials(credentials)
            .build();

        Ok(Self { sender, transport })
    }

    fn build_message(
        sender: Mailbox,
        mail: &ConfirmationMail,
        qr_code: Vec<u8>,
    ) -> Result<Message, Error> {
        let recipient = mail.recipient.parse::<Mailbox>()?;

        let attachment = Attachment::new(mail.attachment_name())
            .body(qr_code, ContentType::parse(QR_CODE_CONTENT_TYPE)?);

        let message = Message::builder()
            .from(sender)
            .to(recipient)
            .subject(mail.subject())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::html(mail.html_body()))
                    .singlepart(attachment),
            )?;

        Ok(message)
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    #[tracing::instrument(
        name = "Confirmation mail",
        skip_all,
        fields(ticket_code = %mail.ticket_code)
    )]
    async fn send_confirmation(&self, mail: ConfirmationMail) -> Result<(), Error> {
        tracing::debug!(path = %mail.qr_code_path.display(), "reading qr code");
        let qr_code = tokio::fs::read(&mail.qr_code_path).await?;

        let message = Self::build_message(self.sender.clone(), &mail, qr_code)?;

        tracing::info!("sending confirmation mail");
        let response = self.transport.send(message).await?;
        tracing::info!(code = %response.code(), "sent confirmation mail");

        Ok(())
    }
}
