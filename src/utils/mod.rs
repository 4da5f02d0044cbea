//! Utility module root for common helper functions and utilities
//!
//! This file contains:
//! - Common utility traits and helper functions
//! - Cross-cutting utility concerns and shared functionality
//! - Integration utilities for external systems and libraries
//! - Performance utilities and optimization helpers
//! - Debug and introspection utilities for development
//!
//! Contributes to project by:
//! - Providing centralized access to all utility functionality
//! - Reducing code duplication through shared utility functions
//! - Supporting integration with external systems and libraries
//! - Facilitating debugging and development workflows
//! - Enabling performance optimization through specialized utilities