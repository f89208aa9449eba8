//! Output rendering for the CLI
//!
//! `lines` prints one item per line, `json` and `yaml` serialize the whole list.

use fieldpath_config::OutputFormat;
use fieldpath_parser::fields::{params, Parameter};
use serde::Serialize;

/// An expanded path with its parameter block read off
#[derive(Debug, Serialize)]
pub struct PathRecord {
    pub path: String,
    pub field: String,
    pub params: Vec<Parameter>,
}

impl PathRecord {
    pub fn new(path: &str, decode: bool) -> Self {
        Self {
            path: path.to_string(),
            field: params::strip(path),
            params: params::read(path, decode),
        }
    }
}

/// A field with its parameter block read off
#[derive(Debug, Serialize)]
pub struct ParamsRecord {
    pub field: String,
    pub params: Vec<Parameter>,
}

impl ParamsRecord {
    pub fn new(field: &str, decode: bool) -> Self {
        Self {
            field: params::strip(field),
            params: params::read(field, decode),
        }
    }
}

/// Plain-text rendering used by the `lines` format
pub trait ToLine {
    fn to_line(&self) -> String;
}

impl ToLine for String {
    fn to_line(&self) -> String {
        self.clone()
    }
}

impl ToLine for PathRecord {
    fn to_line(&self) -> String {
        with_params(&self.path, &self.params)
    }
}

impl ToLine for ParamsRecord {
    fn to_line(&self) -> String {
        with_params(&self.field, &self.params)
    }
}

fn with_params(head: &str, params: &[Parameter]) -> String {
    let mut line = head.to_string();
    for param in params {
        line.push('\t');
        line.push_str(&param.to_string());
    }
    line
}

pub fn render<T>(items: &[T], format: OutputFormat) -> Result<String, String>
where
    T: Serialize + ToLine,
{
    match format {
        OutputFormat::Lines => Ok(items
            .iter()
            .map(|item| format!("{}\n", item.to_line()))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(items)
            .map(|json| format!("{}\n", json))
            .map_err(|e| format!("Error formatting JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(items).map_err(|e| format!("Error formatting YAML: {}", e))
        }
    }
}
