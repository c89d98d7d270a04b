///
/// Issues human-readable ticket codes.
///
/// Codes are display identifiers, not keys: nothing guarantees
/// two registrations receive different codes.
///
#[cfg_attr(test, mockall::automock)]
pub trait TicketCodeService: Send + Sync {
    fn generate(&self, event_type: &str) -> String;
}
