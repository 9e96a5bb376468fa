//! Facelet entry application for the Facelace cube solver front end.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod action;
mod action_handler;
mod app;
mod async_work;
mod persistence;
mod state;
mod ui;
mod view_model_builder;
pub mod version;

pub use self::app::FacelaceApp;
