// src/lib.rs
pub mod api;
pub mod assets;
pub mod backend;
pub mod banner;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod form;
pub mod models;
pub mod render;
pub mod submission;
