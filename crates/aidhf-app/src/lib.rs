//! # aidhf-app - Application State and Orchestration
//!
//! This crate holds the questionnaire state machine following the TEA (The
//! Elm Architecture) pattern, independent of any terminal library.
//!
//! ## Public API
//!
//! ### Core Types
//! - [`Engine`] - Owns state, message channel, advice service and timers
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All possible application events
//! - [`UpdateAction`] / [`UpdateResult`] - Side effects requested by `update()`
//!
//! ### Form
//! - [`SymptomForm`] - Questionnaire and submission workflow
//! - [`controls`] - Grade and yes/no question controls
//! - [`RootShell`] - Advice slot deciding which screen is shown
//!
//! ### Configuration
//! - [`config::Settings`] - `config.toml` contents
//! - [`Labels`] / [`Catalog`] - Display text lookup

pub mod actions;
pub mod banner;
pub mod config;
pub mod controls;
pub mod disclosure;
pub mod engine;
pub mod engine_event;
pub mod form;
pub mod handler;
pub mod i18n;
pub mod input_key;
pub mod message;
pub mod process;
pub mod shell;
pub mod signals;
pub mod state;

pub use banner::{BannerId, ErrorBanner, ERROR_DISMISS_DELAY};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use form::{FormFocus, SymptomForm};
pub use handler::{UpdateAction, UpdateResult};
pub use i18n::{Catalog, Labels, DEFAULT_LANGUAGE};
pub use input_key::InputKey;
pub use message::Message;
pub use shell::{RootShell, Screen};
pub use state::AppState;
