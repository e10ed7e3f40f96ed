pub mod tracker;

pub use tracker::{ActivityTracker, AlertContent, Thresholds};
