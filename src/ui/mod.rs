pub mod locale;
pub mod messages;
