pub mod agenda;
pub mod config;
pub mod display;
pub mod filter;
pub mod layout;
pub mod logic;
pub mod navigation;

pub use logic::Core;
