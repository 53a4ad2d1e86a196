//! Small domain utilities

pub mod label_color;
