pub mod catalog;
pub mod common;
pub mod config;
pub mod export;
pub mod helpers;
pub mod input;
pub mod message;
pub mod raster;
pub mod render;
pub mod state;
pub mod update;
pub mod view;
