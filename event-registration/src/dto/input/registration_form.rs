use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart},
};
use std::fmt;

///
/// Raw registration submission as it arrived in the multipart form.
/// Every field is optional here, presence is checked by the service.
///
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub event_type: Option<String>,
    pub phone: Option<String>,
    pub file: Option<UploadedFile>,
}

pub struct UploadedFile {
    pub file_name: String,
    pub content: Bytes,
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("size", &self.content.len())
            .finish()
    }
}

impl RegistrationForm {
    const FULL_NAME: &'static str = "fullName";
    const EMAIL: &'static str = "email";
    const EVENT_TYPE: &'static str = "eventType";
    const PHONE: &'static str = "phone";
    const FILE: &'static str = "file";

    ///
    /// Reads the whole form into memory.
    ///
    /// Unknown fields are skipped. A `file` part without a file name
    /// (browsers send one when nothing was selected) is treated as no file.
    ///
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                Self::FULL_NAME => form.full_name = Some(field.text().await?),
                Self::EMAIL => form.email = Some(field.text().await?),
                Self::EVENT_TYPE => form.event_type = Some(field.text().await?),
                Self::PHONE => form.phone = Some(field.text().await?),
                Self::FILE => {
                    let file_name = field.file_name().map(str::to_owned).unwrap_or_default();
                    let content = field.bytes().await?;
                    if !file_name.is_empty() {
                        form.file = Some(UploadedFile { file_name, content });
                    }
                }
                _ => tracing::debug!(field = %name, "skipping unknown form field"),
            }
        }

        Ok(form)
    }

    ///
    /// Names of the submitted fields, values are left out
    /// so the form can be logged without personal data.
    ///
    pub fn present_fields(&self) -> Vec<&'static str> {
        [
            (Self::FULL_NAME, self.full_name.is_some()),
            (Self::EMAIL, self.email.is_some()),
            (Self::EVENT_TYPE, self.event_type.is_some()),
            (Self::PHONE, self.phone.is_some()),
            (Self::FILE, self.file.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{
        body::Body,
        extract::FromRequest,
        http::{header::CONTENT_TYPE, Request},
    };

    const BOUNDARY: &str = "registration-form-boundary";

    async fn multipart(body: String) -> Multipart {
        let request = Request::builder()
            .method("POST")
            .uri("/api/register")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        Multipart::from_request(request, &()).await.unwrap()
    }

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(file_name: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n{content}\r\n"
        )
    }

    fn closing() -> String {
        format!("--{BOUNDARY}--\r\n")
    }

    #[tokio::test]
    async fn from_multipart_all_fields() {
        let body = [
            text_part("fullName", "Amina Diallo"),
            text_part("email", "amina@example.com"),
            text_part("eventType", "Gala VIP"),
            text_part("phone", "+221771234567"),
            file_part("badge.pdf", "%PDF-1.4"),
            closing(),
        ]
        .concat();

        let form = RegistrationForm::from_multipart(multipart(body).await)
            .await
            .unwrap();

        assert_eq!(form.full_name.as_deref(), Some("Amina Diallo"));
        assert_eq!(form.email.as_deref(), Some("amina@example.com"));
        assert_eq!(form.event_type.as_deref(), Some("Gala VIP"));
        assert_eq!(form.phone.as_deref(), Some("+221771234567"));
        let file = form.file.unwrap();
        assert_eq!(file.file_name, "badge.pdf");
        assert_eq!(&file.content[..], b"%PDF-1.4");
    }

    #[tokio::test]
    async fn from_multipart_missing_fields_stay_none() {
        let body = [text_part("fullName", "Amina Diallo"), closing()].concat();

        let form = RegistrationForm::from_multipart(multipart(body).await)
            .await
            .unwrap();

        assert_eq!(form.full_name.as_deref(), Some("Amina Diallo"));
        assert!(form.email.is_none());
        assert!(form.event_type.is_none());
        assert!(form.phone.is_none());
        assert!(form.file.is_none());
    }

    #[tokio::test]
    async fn from_multipart_file_without_name_ignored() {
        let body = [
            text_part("fullName", "Amina Diallo"),
            file_part("", ""),
            closing(),
        ]
        .concat();

        let form = RegistrationForm::from_multipart(multipart(body).await)
            .await
            .unwrap();

        assert!(form.file.is_none());
    }

    #[tokio::test]
    async fn from_multipart_unknown_fields_skipped() {
        let body = [
            text_part("newsletter", "yes"),
            text_part("phone", "+221771234567"),
            closing(),
        ]
        .concat();

        let form = RegistrationForm::from_multipart(multipart(body).await)
            .await
            .unwrap();

        assert_eq!(form.phone.as_deref(), Some("+221771234567"));
    }

    #[test]
    fn present_fields_names_only() {
        let form = RegistrationForm {
            full_name: Some("Amina Diallo".to_string()),
            email: Some("amina@example.com".to_string()),
            event_type: None,
            phone: Some("+221771234567".to_string()),
            file: None,
        };

        let fields = form.present_fields();

        assert_eq!(fields, vec!["fullName", "email", "phone"]);
    }
}
