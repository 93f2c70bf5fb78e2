pub mod payload_check;
pub mod setup;
