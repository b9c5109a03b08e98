use std::collections::HashMap;

use thiserror::Error;

/// Failure while typing a single `_cat` row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatError {
    #[error("malformed field `{field}`: `{token}` is not an integer")]
    MalformedField { field: &'static str, token: String },
}

/// One typed cell of a `_cat` row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatValue {
    Text(String),
    Num(i64),
}

impl CatValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CatValue::Text(s) => Some(s),
            CatValue::Num(_) => None,
        }
    }

    pub fn as_num(&self) -> Option<i64> {
        match self {
            CatValue::Num(n) => Some(*n),
            CatValue::Text(_) => None,
        }
    }
}

/// A parsed row keyed by header name. Headers that received no token are
/// simply absent from the map.
pub type CatRow = HashMap<&'static str, CatValue>;

/// Splits one table line on whitespace and pairs tokens with `headers` in
/// order. Columns named in `int_fields` must parse as integers.
///
/// A line of exactly two tokens is the cluster's shorthand for a closed
/// index, which reports only `status` and `index` regardless of the table's
/// own column order. Otherwise pairing stops at the shorter of the two
/// sequences: short lines leave trailing headers absent, and surplus tokens
/// are dropped.
pub fn parse_row(
    line: &str,
    headers: &[&'static str],
    int_fields: &[&'static str],
) -> Result<CatRow, CatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut row = CatRow::new();

    if tokens.len() == 2 {
        row.insert("status", CatValue::Text(tokens[0].to_string()));
        row.insert("index", CatValue::Text(tokens[1].to_string()));
        return Ok(row);
    }

    for (&header, token) in headers.iter().zip(tokens) {
        let value = if int_fields.contains(&header) {
            let parsed = token.parse::<i64>().map_err(|_| CatError::MalformedField {
                field: header,
                token: token.to_string(),
            })?;
            CatValue::Num(parsed)
        } else {
            CatValue::Text(token.to_string())
        };
        row.insert(header, value);
    }

    Ok(row)
}

pub(super) fn take_text(row: &mut CatRow, field: &'static str) -> Option<String> {
    match row.remove(field)? {
        CatValue::Text(s) => Some(s),
        CatValue::Num(n) => Some(n.to_string()),
    }
}

pub(super) fn take_num(row: &mut CatRow, field: &'static str) -> Option<i64> {
    match row.remove(field)? {
        CatValue::Num(n) => Some(n),
        CatValue::Text(_) => None,
    }
}

#[cfg(test)]
#[path = "../tests/cat/row_tests.rs"]
mod tests;
