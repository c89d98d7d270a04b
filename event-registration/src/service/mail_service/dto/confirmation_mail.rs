use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationMail {
    pub recipient: String,
    pub full_name: String,
    pub event_type: String,
    pub ticket_code: String,
    pub qr_code_path: PathBuf,
}

impl ConfirmationMail {
    pub fn subject(&self) -> String {
        format!("Confirmation d'inscription - {}", self.event_type)
    }

    ///
    /// Name and event type are inserted as received, without HTML escaping
    ///
    pub fn html_body(&self) -> String {
        let ConfirmationMail {
            full_name,
            event_type,
            ticket_code,
            ..
        } = self;

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Confirmation d'inscription</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #2563eb;">Bonjour {full_name},</h2>
        <p>Votre inscription à l'événement <strong>{event_type}</strong> est confirmée.</p>
        <p>Votre code de billet : <strong>{ticket_code}</strong></p>
        <p>Présentez le QR code joint à ce message à l'entrée.</p>
        <p style="color: #666; font-size: 14px;">Charity &amp; Hope Africa Empowerment</p>
    </div>
</body>
</html>
"#
        )
    }

    pub fn attachment_name(&self) -> String {
        self.qr_code_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("{}.png", self.ticket_code))
    }
}
