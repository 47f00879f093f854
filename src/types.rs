use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Largest integer a JSON consumer can hold exactly in a double (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

//==============================================================================
// Cell values
//==============================================================================

/// A kept spreadsheet value, carried through with its native type
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric cell (risk percentages, ages, confidence probabilities)
    Number(f64),
    /// Text cell (test results, management recommendations)
    Text(String),
    /// Boolean cell
    Bool(bool),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Integral numbers go out as `0`, `25`, not `0.0`, `25.0`
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

//==============================================================================
// Records
//==============================================================================

/// One output row: header text → value, in column order of first insertion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. An existing header keeps its position and takes the new value.
    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        let header = header.into();
        match self.fields.iter_mut().find(|(h, _)| *h == header) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((header, value)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, header: &str) -> bool {
        self.get(header).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(h, _)| h.as_str())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (header, value) in &self.fields {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (header, value) in iter {
            record.insert(header, value.into());
        }
        record
    }
}

//==============================================================================
// Row-indexed tables
//==============================================================================

/// Records of one spreadsheet file, indexed by their 1-based row number.
///
/// Slot 0 (the header row) and rows without kept values stay empty, so the
/// table is sparse rather than zero-filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowTable {
    rows: Vec<Option<Record>>,
}

impl RowTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `header` on the record at `row`, creating the record (and any
    /// intermediate empty slots) when needed.
    pub fn set(&mut self, row: u32, header: &str, value: CellValue) {
        let idx = row as usize;
        if self.rows.len() <= idx {
            self.rows.resize(idx + 1, None);
        }
        self.rows[idx]
            .get_or_insert_with(Record::new)
            .insert(header, value);
    }

    pub fn get(&self, row: usize) -> Option<&Record> {
        self.rows.get(row).and_then(Option::as_ref)
    }

    /// Row-indexed length: highest populated row number + 1, or 0 when empty
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of materialized records
    pub fn record_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_some()).count()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter().flatten()
    }

    pub fn into_records(self) -> impl Iterator<Item = Record> {
        self.rows.into_iter().flatten()
    }

    pub fn into_slots(self) -> Vec<Option<Record>> {
        self.rows
    }
}

/// How sparse positions appear in the written JSON array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputLayout {
    /// Keep row-indexed positions; empty slots become `null`
    #[default]
    Sparse,
    /// Drop empty slots
    Dense,
}
