pub use db::Db;

mod db;
pub mod dto;
pub mod record;
