pub mod component;
pub mod host;
