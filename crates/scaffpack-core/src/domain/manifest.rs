//! `package.json` fragment generation and additive merging.

use serde_json::{Map, Value, json};

use crate::domain::{dependencies::DependencyList, error::DomainError};

/// Packages every generated project needs regardless of answers.
pub const BASE_DEPENDENCIES: [&str; 2] = ["webpack", "webpack-cli"];

/// Version specifier written for every dev dependency.
pub const DEPENDENCY_VERSION: &str = "latest";

/// Build the manifest fragment merged into the destination `package.json`.
pub fn fragment(dev_server: bool, dependencies: &DependencyList) -> Value {
    let mut scripts = Map::new();
    scripts.insert(
        "build".into(),
        "webpack --mode=production --node-env=production".into(),
    );
    scripts.insert("build:dev".into(), "webpack --mode=development".into());
    scripts.insert(
        "build:prod".into(),
        "webpack --mode=production --node-env=production".into(),
    );
    scripts.insert("watch".into(), "webpack --watch".into());
    if dev_server {
        scripts.insert("serve".into(), "webpack serve".into());
    }

    let mut dev_dependencies = Map::new();
    for name in BASE_DEPENDENCIES.iter().copied().chain(dependencies.iter()) {
        dev_dependencies
            .entry(name)
            .or_insert_with(|| DEPENDENCY_VERSION.into());
    }

    json!({
        "version": "1.0.0",
        "description": "My webpack project",
        "name": "my-webpack-project",
        "scripts": scripts,
        "devDependencies": dev_dependencies,
    })
}

/// Parse an existing manifest. Missing or blank content is an empty object.
pub fn parse_existing(content: Option<&str>) -> Result<Value, DomainError> {
    let Some(content) = content.filter(|c| !c.trim().is_empty()) else {
        return Ok(Value::Object(Map::new()));
    };

    let value: Value = serde_json::from_str(content)
        .map_err(|e| DomainError::InvalidManifest(format!("package.json is not valid JSON: {e}")))?;

    if !value.is_object() {
        return Err(DomainError::InvalidManifest(
            "package.json must contain a JSON object".into(),
        ));
    }
    Ok(value)
}

/// Deep-merge `fragment` into `base`.
///
/// Objects merge key by key; any other fragment value replaces the base value.
/// Keys only present in `base` are preserved.
pub fn merge(base: &mut Value, fragment: &Value) {
    match (base, fragment) {
        (Value::Object(base_map), Value::Object(fragment_map)) => {
            for (key, value) in fragment_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, fragment) => *base = fragment.clone(),
    }
}

/// Parse, merge and pretty-print in one step.
pub fn extend(existing: Option<&str>, fragment: &Value) -> Result<String, DomainError> {
    let mut manifest = parse_existing(existing)?;
    merge(&mut manifest, fragment);
    let mut out = serde_json::to_string_pretty(&manifest)
        .map_err(|e| DomainError::InvalidManifest(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
