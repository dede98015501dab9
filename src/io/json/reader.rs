use crate::io::{Format, error::Error};
use crate::model::store::ResultStore;
use log::info;
use serde_json::Value;
use std::io::Read;

pub fn read<R: Read>(reader: R) -> Result<ResultStore, Error> {
    let value: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            Error::Io { source: e.into() }
        } else {
            Error::parse(Format::Json, e.line(), e.to_string())
        }
    })?;

    let records = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::parse(
                Format::Json,
                1,
                format!(
                    "expected an object keyed by calculation index, found {}",
                    kind(&other)
                ),
            ));
        }
    };

    info!("loaded {} calculation records", records.len());
    Ok(ResultStore::from_map(records))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
