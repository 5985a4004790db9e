use lodeforge_core::{
    CompileError, DEFAULT_METADATA, DEFAULT_WEIGHT, MaterialList, MaterialLookup, WeightedMaterial,
};
use serde_json::Value;

use crate::context::CompileContext;

/// Parse a resource value (single entry or array) into a material list.
///
/// Any failing element fails the whole list; an empty array is malformed.
pub fn parse_material_list<L: MaterialLookup>(
    value: &Value,
    ctx: &CompileContext<L>,
) -> Result<MaterialList, CompileError> {
    match value {
        Value::Array(items) => {
            let entries = items
                .iter()
                .map(|item| parse_material_entry(item, ctx))
                .collect::<Result<Vec<_>, _>>()?;
            MaterialList::new(entries).ok_or_else(|| {
                CompileError::MalformedResourceEntry(
                    "resource list must contain at least one entry".to_string(),
                )
            })
        }
        other => parse_material_entry(other, ctx).map(MaterialList::single),
    }
}

/// Parse one resource entry: a bare identifier or a `{name, metadata, weight}` object.
pub fn parse_material_entry<L: MaterialLookup>(
    value: &Value,
    ctx: &CompileContext<L>,
) -> Result<WeightedMaterial, CompileError> {
    match value {
        Value::String(raw) => ctx.resolve(raw).map(WeightedMaterial::plain),
        Value::Object(entry) => {
            let name = match entry.get("name") {
                Some(Value::String(name)) => name,
                Some(_) => {
                    return Err(CompileError::MalformedResourceEntry(
                        "resource entry name must be a string".to_string(),
                    ));
                }
                None => {
                    return Err(CompileError::MalformedResourceEntry(
                        "resource entry needs a name".to_string(),
                    ));
                }
            };
            let material = ctx.resolve(name)?;
            let metadata = optional_int(entry.get("metadata"), "metadata")?
                .unwrap_or(i64::from(DEFAULT_METADATA));
            let weight =
                optional_int(entry.get("weight"), "weight")?.unwrap_or(i64::from(DEFAULT_WEIGHT));
            Ok(WeightedMaterial::new(material, metadata, weight))
        }
        _ => Err(CompileError::MalformedResourceEntry(
            "resource entry must be an identifier string or an object".to_string(),
        )),
    }
}

/// Any JSON integer or whole-number float; out of range values saturate and
/// are clamped later.
fn optional_int(value: Option<&Value>, key: &str) -> Result<Option<i64>, CompileError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let number = value
        .as_i64()
        .or_else(|| value.as_u64().map(|_| i64::MAX))
        .or_else(|| {
            value
                .as_f64()
                .filter(|raw| raw.is_finite() && raw.fract() == 0.0)
                .map(|raw| raw as i64)
        });
    number.map(Some).ok_or_else(|| {
        CompileError::MalformedResourceEntry(format!("resource entry {key} must be an integer"))
    })
}
