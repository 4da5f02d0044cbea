//! Miscellaneous object entity types for environmental elements
//!
//! This file contains:
//! - MiscObject definition for static and dynamic environmental objects
//! - Object categories (barriers, buildings, poles, vegetation, etc.)
//! - External object reference system for third-party integration
//! - Object physical properties and bounding box specifications
//! - Custom object support through user-defined properties
//!