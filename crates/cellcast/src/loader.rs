//! The generic literal loader boundary.
//!
//! Once the pipeline has stripped a token of ambiguous decorations and judged
//! it safe, a loader parses standard scalar and flow-collection literal
//! syntax: booleans, quoted and unquoted scalars, `[a, b]` sequences,
//! `{k: v}` mappings. The loader is an injected capability so the pipeline
//! can be tested against a stub that echoes or rejects arbitrary strings.

use indexmap::IndexMap;
use thiserror::Error;

use crate::value::Value;

/// Failure from a literal loader.
///
/// Recoverable: the pipeline logs the rejection and continues with the
/// pre-load string.
#[derive(Debug, Error)]
#[error("literal loader rejected '{text}': {message}")]
pub struct LoadError {
    /// The rejected input.
    pub text: String,
    /// Loader-specific diagnostic.
    pub message: String,
}

/// Parses scalar and flow-collection literals.
pub trait LiteralLoader {
    fn load(&self, text: &str) -> Result<Value, LoadError>;
}

/// Default loader backed by serde_yaml.
///
/// Scalars resolve per the YAML 1.2 core schema, so `yes`/`no` and
/// sexagesimal numbers stay strings. Callers wanting 1.1-era behavior can
/// inject their own [`LiteralLoader`].
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlLoader;

impl LiteralLoader for YamlLoader {
    fn load(&self, text: &str) -> Result<Value, LoadError> {
        let parsed: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|source| LoadError {
                text: text.to_string(),
                message: source.to_string(),
            })?;
        Ok(convert(parsed))
    }
}

fn convert(node: serde_yaml::Value) -> Value {
    match node {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(flag) => Value::Bool(flag),
        serde_yaml::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Value::Int(int)
            } else {
                Value::Float(number.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(text) => Value::Str(text),
        serde_yaml::Value::Sequence(items) => {
            Value::List(items.into_iter().map(convert).collect())
        }
        serde_yaml::Value::Mapping(entries) => {
            let map: IndexMap<String, Value> = entries
                .into_iter()
                .map(|(key, value)| (key_string(key), convert(value)))
                .collect();
            Value::Map(map)
        }
        serde_yaml::Value::Tagged(tagged) => convert(tagged.value),
    }
}

/// Mapping keys are not required to be strings in the literal grammar;
/// stringify the scalar ones.
fn key_string(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(text) => text,
        serde_yaml::Value::Bool(flag) => flag.to_string(),
        serde_yaml::Value::Number(number) => number.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|text| text.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_scalars() {
        let loader = YamlLoader;
        assert_eq!(loader.load("15").unwrap(), Value::Int(15));
        assert_eq!(loader.load("15.0").unwrap(), Value::Float(15.0));
        assert_eq!(loader.load("true").unwrap(), Value::Bool(true));
        assert_eq!(loader.load("~").unwrap(), Value::Null);
        assert_eq!(loader.load("hello").unwrap(), Value::Str("hello".to_string()));
    }

    #[test]
    fn test_loads_flow_sequence() {
        let loaded = YamlLoader.load("[1,2,3]").unwrap();
        assert_eq!(
            loaded,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_loads_flow_mapping_with_string_keys() {
        let loaded = YamlLoader.load("{a: 1, 5: three}").unwrap();
        let Value::Map(map) = loaded else {
            panic!("expected mapping");
        };
        assert_eq!(map.get("a"), Some(&Value::Int(1)));
        assert_eq!(map.get("5"), Some(&Value::Str("three".to_string())));
    }

    #[test]
    fn test_rejects_malformed_input() {
        let err = YamlLoader.load("{unclosed: ").unwrap_err();
        assert!(err.to_string().contains("literal loader rejected"));
    }
}
