//! Raw column-keyed rows

/// One cell of a [`RawRow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawCell<'a> {
    /// Column missing from a short row
    Absent,
    Text(&'a str),
    /// Bytes that are not valid UTF-8
    Invalid(&'a [u8]),
}

impl<'a> RawCell<'a> {
    fn from_bytes(bytes: &'a [u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => RawCell::Text(text),
            Err(_) => RawCell::Invalid(bytes),
        }
    }

    fn text(self) -> Option<&'a str> {
        match self {
            RawCell::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl<'a> From<Option<&'a str>> for RawCell<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(RawCell::Absent, RawCell::Text)
    }
}

/// One tokenized input row, borrowed from the tokenizer's buffers
///
/// Column names are matched exactly: case and surrounding whitespace are
/// significant (`" Speed1"` is not `"Speed1"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow<'a> {
    number: usize,
    fields: Vec<(&'a str, RawCell<'a>)>,
}

impl<'a> RawRow<'a> {
    /// Empty row with a 1-based data row number
    pub fn new(number: usize) -> Self {
        Self {
            number,
            fields: Vec::new(),
        }
    }

    /// Zip headers with values; missing trailing values are absent
    pub fn from_record<H, V>(number: usize, headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let mut values = values.into_iter();
        let fields = headers
            .into_iter()
            .map(|name| (name, values.next().into()))
            .collect();
        Self { number, fields }
    }

    /// Zip headers with undecoded values
    ///
    /// Each value is checked for UTF-8 on its own, so one bad cell does not
    /// spoil the rest of the row.
    pub fn from_byte_record<H, V>(number: usize, headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a [u8]>,
    {
        let mut values = values.into_iter();
        let fields = headers
            .into_iter()
            .map(|name| {
                let cell = values.next().map_or(RawCell::Absent, RawCell::from_bytes);
                (name, cell)
            })
            .collect();
        Self { number, fields }
    }

    /// Append a column
    pub fn push(&mut self, name: &'a str, value: Option<&'a str>) {
        self.fields.push((name, value.into()));
    }

    /// 1-based data row number
    pub fn number(&self) -> usize {
        self.number
    }

    /// Text of `name`; `None` if the column is absent, has no value or is not
    /// valid UTF-8
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.cell(name).text()
    }

    /// Whether the row has a column called `name`
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(column, _)| *column == name)
    }

    fn cell(&self, name: &str) -> RawCell<'a> {
        self.fields
            .iter()
            .find(|(column, _)| *column == name)
            .map_or(RawCell::Absent, |(_, cell)| *cell)
    }

    /// Cell at `index` if that position holds `name`, else a name lookup
    pub(crate) fn cell_at(&self, index: usize, name: &str) -> RawCell<'a> {
        match self.fields.get(index) {
            Some((column, cell)) if *column == name => *cell,
            _ => self.cell(name),
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Columns in input order, with the text of each valid value
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + '_ {
        self.fields.iter().map(|(name, cell)| (*name, cell.text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_match() {
        let row = RawRow::from_record(1, ["VIN", " Speed1"], ["1N4AZ0CP5DC400000", "12"]);
        assert_eq!(row.get(" Speed1"), Some("12"));
        assert_eq!(row.get("Speed1"), None);
        assert_eq!(row.get("vin"), None);
    }

    #[test]
    fn test_short_record() {
        let row = RawRow::from_record(3, ["A", "B", "C"], ["1"]);
        assert_eq!(row.len(), 3);
        assert!(row.contains("C"));
        assert_eq!(row.get("C"), None);
        assert_eq!(row.number(), 3);
    }

    #[test]
    fn test_index_fast_path_falls_back() {
        let row = RawRow::from_record(1, ["A", "B"], ["1", "2"]);
        assert_eq!(row.cell_at(1, "B"), RawCell::Text("2"));
        assert_eq!(row.cell_at(0, "B"), RawCell::Text("2"));
        assert_eq!(row.cell_at(9, "A"), RawCell::Text("1"));
        assert_eq!(row.cell_at(0, "C"), RawCell::Absent);
    }

    #[test]
    fn test_invalid_utf8_is_kept_per_cell() {
        let values: [&[u8]; 2] = [b"12", b"\xb0F"];
        let row = RawRow::from_byte_record(2, ["Speed", "Debug", "VIN"], values);
        assert_eq!(row.get("Speed"), Some("12"));
        assert_eq!(row.get("Debug"), None);
        assert_eq!(row.cell_at(1, "Debug"), RawCell::Invalid(b"\xb0F"));
        assert_eq!(row.cell_at(2, "VIN"), RawCell::Absent);
        assert!(row.contains("Debug"));
    }
}
