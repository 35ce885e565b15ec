pub mod application;
pub mod message;
pub mod widgets;

// Tabs
mod pages;
