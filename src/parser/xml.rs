//! XML parsing implementation using quick-xml and serde
//!
//! This file contains:
//! - XML document parsing and DOM tree construction
//! - Custom deserializers for OpenSCENARIO-specific XML patterns
//! - Namespace handling and XML schema validation
//! - Streaming parser for large scenario files
//! - XML attribute and element mapping to Rust types
//!
//! Contributes to project by:
//! - Providing efficient XML parsing with minimal memory overhead
//! - Supporting both streaming and in-memory parsing strategies
//! - Handling OpenSCENARIO-specific XML patterns and conventions
//! - Enabling custom deserialization for complex type relationships
//! - Supporting XML validation against OpenSCENARIO schema

use std::fs;
use std::path::Path;
use crate::error::{Error, Result};
use crate::types::catalogs::files::CatalogFile;
use crate::types::scenario::storyboard::OpenScenario;

/// Parse an OpenSCENARIO document from a string
/// 
/// This function uses quick-xml's serde integration to deserialize
/// the XML into our Rust type system.
pub fn parse_from_str(xml: &str) -> Result<OpenScenario> {
    quick_xml::de::from_str(xml)
        .map_err(Error::from)
        .map_err(|e| e.with_context("Failed to parse OpenSCENARIO XML"))
}

/// Parse an OpenSCENARIO document from a file
/// 
/// Reads the file into memory and then parses it as a string.
/// For very large files, consider using the streaming parser (when available).
pub fn parse_from_file<P: AsRef<Path>>(path: P) -> Result<OpenScenario> {
    let xml_content = fs::read_to_string(&path)
        .map_err(Error::from)
        .map_err(|e| e.with_context(&format!("Failed to read file: {}", path.as_ref().display())))?;
    
    parse_from_str(&xml_content)
        .map_err(|e| e.with_context(&format!("Failed to parse file: {}", path.as_ref().display())))
}

/// Serialize an OpenSCENARIO document to XML string
/// 
/// This function uses quick-xml's serde integration to serialize
/// our Rust types back to XML format.
pub fn serialize_to_string(scenario: &OpenScenario) -> Result<String> {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    
    let serialized = quick_xml::se::to_string(scenario)
        .map_err(Error::XmlParseError)
        .map_err(|e| e.with_context("Failed to serialize OpenSCENARIO to XML"))?;
    
    xml.push_str(&serialized);
    Ok(xml)
}

/// Serialize an OpenSCENARIO document to a file
/// 
/// Serializes the scenario to XML and writes it to the specified file.
pub fn serialize_to_file<P: AsRef<Path>>(scenario: &OpenScenario, path: P) -> Result<()> {
    let xml = serialize_to_string(scenario)?;
    
    fs::write(&path, xml)
        .map_err(Error::from)
        .map_err(|e| e.with_context(&format!("Failed to write file: {}", path.as_ref().display())))
}

/// Validate XML structure before parsing
/// 
/// This function performs basic XML structure validation to provide
/// better error messages for malformed documents.
pub fn validate_xml_structure(xml: &str) -> Result<()> {
    // Basic validation - check for XML declaration and root element
    let trimmed = xml.trim();
    
    if trimmed.is_empty() {
        return Err(Error::validation_error("xml", "XML document is empty"));
    }
    
    if !trimmed.starts_with("<?xml") && !trimmed.starts_with('<') {
        return Err(Error::validation_error("xml", "XML document must start with XML declaration or root element"));
    }
    
    // Check for basic OpenSCENARIO root element
    if !trimmed.contains("OpenSCENARIO") {
        return Err(Error::validation_error("xml", "Document does not appear to contain OpenSCENARIO root element"));
    }
    
    Ok(())
}

/// Parse with validation
/// 
/// Validates the XML structure before attempting to parse it.
pub fn parse_from_str_validated(xml: &str) -> Result<OpenScenario> {
    validate_xml_structure(xml)?;
    parse_from_str(xml)
}

/// Parse file with validation
/// 
/// Validates the XML structure before attempting to parse it.
pub fn parse_from_file_validated<P: AsRef<Path>>(path: P) -> Result<OpenScenario> {
    let xml_content = fs::read_to_string(&path)
        .map_err(Error::from)
        .map_err(|e| e.with_context(&format!("Failed to read file: {}", path.as_ref().display())))?;
    
    parse_from_str_validated(&xml_content)
        .map_err(|e| e.with_context(&format!("Failed to parse file: {}", path.as_ref().display())))
}

/// Parse a catalog document from a string
///
/// Catalog files share the `<OpenSCENARIO>` root element but carry a
/// `Catalog` body instead of a scenario `Storyboard`.
pub fn parse_catalog_from_str(xml: &str) -> Result<CatalogFile> {
    quick_xml::de::from_str(xml)
        .map_err(Error::from)
        .map_err(|e| e.with_context("Failed to parse catalog XML"))
}

/// Parse a catalog document from a file
pub fn parse_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<CatalogFile> {
    let xml_content = fs::read_to_string(&path)
        .map_err(Error::from)
        .map_err(|e| e.with_context(&format!("Failed to read file: {}", path.as_ref().display())))?;

    parse_catalog_from_str(&xml_content)
        .map_err(|e| e.with_context(&format!("Failed to parse file: {}", path.as_ref().display())))
}

// TODO: Add custom deserializers for OpenSCENARIO patterns (Week 5)
// TODO: Custom deserializer for Value<T> to handle ${param} syntax - already implemented in basic.rs
// TODO: Custom deserializer for choice-based elements (actions, conditions)
// TODO: Custom date/time parsing for OpenSCENARIO format

// TODO: Add streaming parser later (Week 13+) - feature gated
// TODO: #[cfg(feature = "streaming")] pub mod streaming;
