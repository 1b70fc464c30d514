//! Adapters for data that comes from outside the app.

pub mod dataset;
