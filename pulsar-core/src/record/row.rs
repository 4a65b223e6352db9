use super::value::FieldValue;

/// An ordered field mapping, exactly as the external decoder produced it.
///
/// Column order is kept so that an export hands the encoder the same column
/// layout it decoded. Rows are narrow (tens of columns), so lookups are a
/// linear scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    fields: Vec<(String, FieldValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// First non-blank value among several alternative column names.
    pub fn get_any(&self, columns: &[&str]) -> Option<&FieldValue> {
        columns
            .iter()
            .filter_map(|column| self.get(column))
            .find(|value| !value.is_blank())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    /// Set a column. An existing column is replaced in place and its old
    /// value returned; a new column is appended.
    pub fn insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((column, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl IntoIterator for Row {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Row {
        Row::from_iter([
            ("png_file", FieldValue::from("a.png")),
            ("f0_old", FieldValue::Number(100.0)),
            ("notes", FieldValue::Empty),
        ])
    }

    #[test]
    fn test_column_order_preserved() {
        let row = sample();
        let cols: Vec<_> = row.columns().collect();
        assert_eq!(cols, ["png_file", "f0_old", "notes"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut row = sample();
        let old = row.insert("f0_old", 50.0);
        assert_eq!(old, Some(FieldValue::Number(100.0)));
        assert_eq!(row.len(), 3);
        assert_eq!(row.columns().nth(1), Some("f0_old"));
        assert_eq!(row.get("f0_old"), Some(&FieldValue::Number(50.0)));
    }

    #[test]
    fn test_insert_appends_new_column() {
        let mut row = sample();
        assert!(row.insert("classification", "Noise").is_none());
        assert_eq!(row.columns().last(), Some("classification"));
    }

    #[test]
    fn test_get_any_skips_blank() {
        let row = sample();
        assert_eq!(
            row.get_any(&["notes", "png_file"]),
            Some(&FieldValue::from("a.png"))
        );
        assert_eq!(row.get_any(&["missing", "notes"]), None);
    }

    #[test]
    fn test_duplicate_columns_collapse() {
        let row = Row::from_iter([("a", 1.0), ("b", 2.0), ("a", 3.0)]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("a"), Some(&FieldValue::Number(3.0)));
    }
}
