//! Integration tests for the EditorsKit feature catalog provider

mod catalog_contents;
mod config_integration;
mod settings_assembly;
