use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameSuggestError {
    #[error("`{0}` does not end in a `.<millis>z` counter")]
    UnrecognizedIndexName(String),
    #[error("the counter in `{0}` cannot grow any further")]
    CounterExhausted(String),
}

/// Suggests the next name in a time-bucketed series by bumping the
/// millisecond counter after the last dot:
/// `2015-10-10t00:00:00.000z` becomes `2015-10-10t00:00:00.001z`.
///
/// The counter keeps at least three digits but widens past `999` rather
/// than wrapping, so successors stay unique.
pub fn next_index_name(name: &str) -> Result<String, NameSuggestError> {
    let Some((stem, counter)) = name.rsplit_once('.') else {
        return Err(NameSuggestError::UnrecognizedIndexName(name.to_string()));
    };
    let digits = counter.strip_suffix('z').unwrap_or(counter);
    let value: i64 = digits
        .parse()
        .map_err(|_| NameSuggestError::UnrecognizedIndexName(name.to_string()))?;
    let next = value
        .checked_add(1)
        .ok_or_else(|| NameSuggestError::CounterExhausted(name.to_string()))?;
    Ok(format!("{stem}.{next:03}z"))
}

#[cfg(test)]
#[path = "../tests/console/commands_tests.rs"]
mod tests;
