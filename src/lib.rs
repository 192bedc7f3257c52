pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod mvu;
pub mod score;
pub mod storage;
pub mod view;

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";
