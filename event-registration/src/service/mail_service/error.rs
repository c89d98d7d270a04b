#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("invalid content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),

    #[error("cannot build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("cannot read attachment: {0}")]
    Attachment(#[from] std::io::Error),
}
