// Copyright (c) Microsoft. All rights reserved.

#![deny(rust_2018_idioms, warnings)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::too_many_lines,
    clippy::uninlined_format_args
)]

//! Typed data models for the Nimbus compute service API.
//!
//! Every type under [`models`] is a value object: construct it empty with
//! `new()`, populate it through setters or fluent `with_*` chains, and hand
//! it to a transport layer. Equality is structural, hashing is the stable
//! 31-fold fingerprint shared by the other SDK ports, and `Display` renders
//! the `{Key: value}` form with unset fields omitted. All three walk the
//! fields in wire declaration order.
//!
//! Enumerated string fields stay `Option<String>` on the wire shape; the
//! vocabulary enums next to them convert losslessly in both directions, so
//! unrecognized service literals survive a round trip.

pub mod models;
pub mod utils;
