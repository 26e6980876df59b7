#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Subcommand implementations for the `smd` binary.

use std::path::PathBuf;

use cache::DescriptorCache;
use config::{Config, SmdConfig};
use ir::ServiceMap;
use registry::{MethodSignature, Registrar, RegistrarError, TypeAliasRegistry};
use types::SmdError;

/// Errors surfaced by CLI subcommands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("{0}")]
    Config(#[from] config::ConfigError),
    /// A configured or parsed value failed SMD validation
    #[error("{0}")]
    Smd(#[from] SmdError),
    /// Method signatures could not be loaded or registered
    #[error("{0}")]
    Registrar(#[from] RegistrarError),
    /// Output could not be rendered as JSON
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// Missing or malformed command-line arguments
    #[error("{0}")]
    Usage(String),
    /// The descriptor cache could not be read, written or deleted
    #[error("{0}")]
    Cache(String),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Value following `flag`, if present.
pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter().position(|a| a == flag).and_then(|i| args.get(i + 1)).map(String::as_str)
}

/// Whether `flag` is present.
pub fn has_flag(args: &[String], flag: &str) -> bool { args.iter().any(|a| a == flag) }

fn cache_location(args: &[String], config: &Config) -> PathBuf {
    flag_value(args, "--cache").map(PathBuf::from).unwrap_or_else(|| config.cache.location.clone())
}

fn descriptor_cache(config: &Config) -> DescriptorCache {
    if config.cache.atomic_writes {
        DescriptorCache::atomic()
    } else {
        DescriptorCache::new()
    }
}

/// An empty service map carrying the configured document-level defaults.
pub fn service_map_from_config(smd: &SmdConfig) -> std::result::Result<ServiceMap, SmdError> {
    let mut map = ServiceMap::new();
    map.set_default_envelope(&smd.envelope)?
        .set_default_transport(&smd.transport)?
        .set_content_type(&smd.content_type)?;
    if let Some(target) = &smd.target {
        map.set_default_target(target);
    }
    if let Some(id) = &smd.id {
        map.set_id(id.as_str());
    }
    if let Some(description) = &smd.description {
        map.set_description(description.as_str());
    }
    Ok(map)
}

fn render(map: &ServiceMap, document: bool) -> Result<String> {
    if document {
        Ok(serde_json::to_string_pretty(&map.to_document())?)
    } else {
        Ok(map.to_json_text())
    }
}

/// Build the service map from `--input`, cache it, and return the rendered SMD.
pub fn run_build(args: &[String], config: &Config) -> Result<String> {
    let input = flag_value(args, "--input")
        .ok_or_else(|| CliError::Usage("build requires --input <file>".to_string()))?;
    let signatures = MethodSignature::load_from_file(input)?;

    let mut registrar = match flag_value(args, "--namespace") {
        Some(ns) => Registrar::with_namespace(ns),
        None => Registrar::new(),
    };
    if let Some(aliases) = flag_value(args, "--aliases") {
        registrar = registrar.with_aliases(TypeAliasRegistry::load_from_file(aliases)?);
    }

    let mut map = service_map_from_config(&config.smd)?;
    registrar.register_all(&mut map, &signatures)?;

    let location = cache_location(args, config);
    if !descriptor_cache(config).save(&location, &map) {
        return Err(CliError::Cache(format!("Failed to save SMD cache to {}", location.display())));
    }
    render(&map, has_flag(args, "--document"))
}

/// Read the cached SMD, optionally wrapping it as a full document.
pub fn run_show(args: &[String], config: &Config) -> Result<String> {
    let location = cache_location(args, config);
    let text = descriptor_cache(config)
        .get(&location)
        .ok_or_else(|| CliError::Cache(format!("No cached SMD at {}", location.display())))?;

    if !has_flag(args, "--document") {
        return Ok(text);
    }
    let mut map = service_map_from_config(&config.smd)?;
    map.add_services(ServiceMap::from_json_text(&text)?.services().cloned());
    render(&map, true)
}

/// Delete the cached SMD, returning the location that was cleared.
pub fn run_clear(args: &[String], config: &Config) -> Result<PathBuf> {
    let location = cache_location(args, config);
    if descriptor_cache(config).delete(&location) {
        Ok(location)
    } else {
        Err(CliError::Cache(format!("No cached SMD to delete at {}", location.display())))
    }
}
