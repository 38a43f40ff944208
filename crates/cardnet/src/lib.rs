//! Card number classification and checksum engine.
//!
//! The `cards` module carries all of the algorithmic content: the Luhn
//! checksum, the issuing-network rule model, and the first-match-wins
//! classifier, composed by a validation service that transport layers call.
//! `config`, `telemetry`, and `error` hold the ambient plumbing shared with
//! the API binary.

pub mod cards;
pub mod config;
pub mod error;
pub mod telemetry;
