pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod hydrator;
pub mod layout;
pub mod navigation;
pub mod screens;
pub mod viewport;
