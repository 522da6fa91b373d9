use std::str::FromStr;

/// Comma separated list of integers (e.g. `-2,5,-1`).
///
/// Whitespace around items and `_` digit separators are ignored. An empty
/// string parses to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueList(pub Vec<i64>);

impl FromStr for ValueList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }

        s.split(',')
            .map(parse_single_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

fn parse_single_value(part: &str) -> Result<i64, String> {
    let cleaned = part.trim().replace('_', "");
    if cleaned.is_empty() {
        return Err("empty item in value list".to_string());
    }
    cleaned
        .parse()
        .map_err(|err| format!("invalid integer '{}': {err}", part.trim()))
}
