//! Numeric utilities for field discretization

/// Threshold bucketing and normalized binning
pub mod quantize;
/// Majority-vote smoothing filter
pub mod smooth;
