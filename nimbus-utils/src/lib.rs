// Copyright (c) Microsoft. All rights reserved.

#![deny(rust_2018_idioms, warnings)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

//! Helpers shared by the Nimbus API model crates: the structural fingerprint
//! and rendering contract every model object implements, a serde-based deep
//! copy, and failure logging.

mod error;
mod fmt;
mod hash;
mod logging;
mod ser_de;

pub use crate::error::Error;
pub use crate::fmt::FieldWriter;
pub use crate::hash::{hash_fields, StableHash};
pub use crate::logging::{error_chain, log_failure};
pub use crate::ser_de::{serde_clone, string_or_struct};
