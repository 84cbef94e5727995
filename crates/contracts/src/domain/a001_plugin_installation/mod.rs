pub mod aggregate;
pub mod update;
