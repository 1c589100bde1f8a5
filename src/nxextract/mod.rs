pub mod checksum;
pub mod constants;
pub mod errors;
pub mod helpers;
pub mod types;
