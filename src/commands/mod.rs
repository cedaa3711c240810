pub mod delete;
pub mod get;
pub mod new;
pub mod update;
