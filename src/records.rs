use std::collections::HashMap;

use crate::codec::is_blank;
use crate::models::RawRow;

/// A data row keyed by its (cleaned) header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRecord {
    fields: HashMap<String, String>,
}

impl SourceRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// First non-empty value among alternative spellings of the same header.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.get(k))
            .find(|v| !v.is_empty())
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Strip one leading byte-order mark and surrounding whitespace.
pub fn clean_header(value: &str) -> String {
    value.strip_prefix('\u{FEFF}').unwrap_or(value).trim().to_string()
}

pub fn clean_headers(row: &[String]) -> Vec<String> {
    row.iter().map(|h| clean_header(h)).collect()
}

/// Pair every data row with the header row. Short rows get empty strings for
/// the missing columns; cells past the last header are ignored.
pub fn to_records(rows: &[RawRow]) -> Vec<SourceRecord> {
    let Some((header_row, data)) = rows.split_first() else {
        return Vec::new();
    };
    let headers = clean_headers(header_row);

    data.iter()
        .filter(|row| !is_blank(row))
        .map(|row| {
            let mut fields = HashMap::with_capacity(headers.len());
            for (i, header) in headers.iter().enumerate() {
                let value = row.get(i).map(|c| c.trim().to_string()).unwrap_or_default();
                fields.insert(header.clone(), value);
            }
            SourceRecord { fields }
        })
        .collect()
}
