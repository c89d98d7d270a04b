use super::TicketCodeService;
use rand::Rng;
use std::ops::Range;
use time::OffsetDateTime;

pub struct TicketCodeServiceImpl;

impl TicketCodeServiceImpl {
    /// 100 possible numbers per (event type, year) pair
    pub const NUMBER_RANGE: Range<u32> = 233..333;

    pub fn new() -> Self {
        Self
    }

    fn prefix(event_type: &str) -> String {
        event_type
            .split_whitespace()
            .map(str::to_uppercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl TicketCodeService for TicketCodeServiceImpl {
    ///
    /// Builds `<EVENT-TYPE>-<number>-<year>`, e.g. `GALA-VIP-287-2025`
    ///
    fn generate(&self, event_type: &str) -> String {
        let prefix = Self::prefix(event_type);
        let number = rand::thread_rng().gen_range(Self::NUMBER_RANGE);
        let year = OffsetDateTime::now_utc().year();

        format!("{prefix}-{number}-{year}")
    }
}
