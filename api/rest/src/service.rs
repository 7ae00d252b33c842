pub mod record;
pub mod root;
