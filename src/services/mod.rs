/// Time-zone conversion service
pub mod converter;
