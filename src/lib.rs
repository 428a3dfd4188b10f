pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod form;
pub mod models;
pub mod notify;
pub mod pages;
pub mod repository;
pub mod route;
pub mod state;
pub mod table;
