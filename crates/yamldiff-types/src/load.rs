//! Multi-document YAML loader.
//!
//! Parses text with `serde_yaml`, keeping mapping keys in source order, and
//! converts every document into a [`TreeValue`] wrapped in a [`Document`].

use serde::Deserialize;
use serde_yaml::{Number, Value};
use tracing::debug;

use crate::document::Document;
use crate::error::{LoadError, LoadResult};
use crate::value::{format_number, Mapping, TreeValue, TWO_POW_63, TWO_POW_64};

/// Parse every document in `text`.
///
/// Merge keys (`<<`) are applied and tags are dropped in favour of the
/// tagged value. Documents whose root is null (an empty stream, a trailing
/// `---`) are skipped. A failure in any document fails the whole load.
pub fn load(text: &str) -> LoadResult<Vec<Document>> {
    let mut documents = Vec::new();
    let mut skipped = 0;

    for (index, de) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let mut value =
            Value::deserialize(de).map_err(|source| LoadError::Parse { index, source })?;
        value
            .apply_merge()
            .map_err(|source| LoadError::Merge { index, source })?;
        match convert(value)? {
            TreeValue::Null => skipped += 1,
            tree => documents.push(Document::new(tree)),
        }
    }

    debug!(documents = documents.len(), skipped, "loaded YAML documents");
    Ok(documents)
}

fn convert(value: Value) -> LoadResult<TreeValue> {
    Ok(match value {
        Value::Null => TreeValue::Null,
        Value::Bool(b) => TreeValue::Bool(b),
        Value::Number(n) => TreeValue::Number(convert_number(&n)?),
        Value::String(s) => TreeValue::String(s),
        Value::Sequence(items) => TreeValue::Sequence(
            items
                .into_iter()
                .map(convert)
                .collect::<LoadResult<Vec<_>>>()?,
        ),
        Value::Mapping(entries) => {
            let mut mapping = Mapping::new();
            for (key, value) in entries {
                let key = convert_key(key)?;
                if mapping.contains_key(&key) {
                    return Err(LoadError::DuplicateKey(key));
                }
                mapping.insert(key, convert(value)?);
            }
            TreeValue::Mapping(mapping)
        }
        Value::Tagged(tagged) => convert(tagged.value)?,
    })
}

/// Integers must survive the trip through `f64` unchanged.
fn convert_number(n: &Number) -> LoadResult<f64> {
    let unsupported = || LoadError::UnsupportedNumber(n.to_string());
    let f = n.as_f64().ok_or_else(unsupported)?;

    let exact = if let Some(i) = n.as_i64() {
        f >= -TWO_POW_63 && f < TWO_POW_63 && f as i64 == i
    } else if let Some(u) = n.as_u64() {
        f < TWO_POW_64 && f as u64 == u
    } else {
        true
    };

    if exact {
        Ok(f)
    } else {
        Err(unsupported())
    }
}

fn convert_key(key: Value) -> LoadResult<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Null => Ok(TreeValue::Null.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => convert_number(&n).map(format_number),
        Value::Tagged(tagged) => convert_key(tagged.value),
        other => Err(LoadError::UnsupportedKey(format!("{other:?}"))),
    }
}
