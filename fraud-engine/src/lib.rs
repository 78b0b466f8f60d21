//! Fraud decision engine
//!
//! Scores banking transactions by fusing a classifier-derived fraud
//! probability with a deterministic rule chain (amount thresholds,
//! geo-velocity, time-of-day) into a bounded risk score and a categorical
//! decision.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)]

pub mod alert;
pub mod config;
pub mod engine;
pub mod error;
pub mod geo;
pub mod geolocate;
pub mod model;
pub mod rules;
pub mod time;
pub mod types;

pub use alert::{Alert, AlertPolicy};
pub use config::EngineConfig;
pub use engine::FraudEngine;
pub use error::{Error, Result};
pub use geo::{haversine, GeoPoint};
pub use geolocate::{GeoLocation, Geolocator, StaticGeolocator};
pub use model::{clamp_probability, HeuristicModel, ProbabilitySource};
pub use time::{time_features, TimeFeatures};
pub use types::*;
