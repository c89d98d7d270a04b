pub struct MailServiceConfig {
    pub relay: String,
    pub user: String,
    pub password: String,
    pub sender_name: String,
}
