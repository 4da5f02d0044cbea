//! Advanced curve types for smooth path and trajectory definitions
//!
//! This file contains:
//! - Clothoid curves for realistic road geometry and smooth transitions
//! - ClothoidSpline for complex multi-segment curved paths
//! - NURBS curves for precise mathematical curve representation
//! - Control point and knot vector management for spline curves
//! - Curve interpolation and parameter calculation utilities
//!