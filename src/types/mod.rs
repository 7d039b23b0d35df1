pub mod record;
pub mod signature;
