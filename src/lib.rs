pub mod app;
pub mod assist;
pub mod catalog;
pub mod model;
pub mod scoring;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::TriviaApp;
