//! Mathematical utility functions for geometric and numeric calculations
//!
//! This file contains:
//! - Angle normalization and conversion utilities
//! - Distance calculations in various coordinate systems
//! - Interpolation functions for smooth parameter transitions
//! - Numerical integration and differentiation for trajectory calculations
//! - Statistical utilities for distribution analysis
//!
//! Contributes to project by:
//! - Providing accurate mathematical operations for scenario calculations
//! - Supporting geometric transformations and coordinate conversions
//! - Enabling smooth animations and transitions through interpolation
//! - Facilitating numerical analysis of scenario parameters
//! - Supporting integration with physics and simulation systems