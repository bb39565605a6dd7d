//! Shared vocabulary for the sanctuary workspace.
//!
//! Downstream crates pull their error and JSON aliases from here so the
//! whole workspace agrees on one `Result` and one `Value`.

pub use anyhow::{Error, Result, anyhow, bail};

pub use serde_json::Value;

pub mod json {
    pub use serde_json::{
        Map, Value, from_slice, from_str, from_value, json, to_string, to_string_pretty, to_value,
        to_vec,
    };
}
