//! Typed Rust client for the Savannacom SMS HTTP API.
//!
//! Recipients are checked against the Zambian numbering plan (`26` + an Airtel,
//! MTN or Zamtel prefix + 7 digits) before anything is sent. The crate is
//! layered: a domain layer of strong types and pure planning logic, a
//! transport layer for wire-format details, and a small client layer that
//! talks HTTP.
//!
//! Two calling conventions are offered: a [`SavannacomClient`] handle holding
//! the credentials, and the free functions in [`functional`] taking them per
//! call. Sends never return `Err`; every failure is reported as data.
//!
//! ```rust,no_run
//! use savannacom::{DuplicatePolicy, SavannacomClient, SendRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), savannacom::SavannacomError> {
//!     let client = SavannacomClient::new("10001", "Local_council")?;
//!
//!     let outcome = client.send_sms("260971234567", "hello").await;
//!     println!("{}: {:?}", outcome.status, outcome.error);
//!
//!     let entries = vec![
//!         SendRequest::new("260971234567", "hello"),
//!         SendRequest::new("260761234567", "hello"),
//!     ];
//!     let report = client.send_bulk(entries, DuplicatePolicy::default()).await;
//!     println!("{report:?}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod functional;
mod transport;

pub use client::{SavannacomClient, SavannacomClientBuilder, SavannacomError};
pub use domain::{
    BatchError, BatchPlan, BatchResult, Carrier, Credentials, DuplicatePolicy, EchoedRequest,
    KnownStatus, Msisdn, SendFailure, SendOutcome, SendRequest, ValidationError, plan_batch,
    validate_msisdn,
};
