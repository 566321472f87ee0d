use serde::ser::{Serialize, SerializeMap, Serializer};

/// Dishes per weekday, keys in menu order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRecord {
    days: Vec<(String, Vec<String>)>,
}

impl MenuRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a record that already lists each of `days` with no dishes.
    pub fn with_days(days: impl IntoIterator<Item = String>) -> Self {
        Self {
            days: days.into_iter().map(|day| (day, Vec::new())).collect(),
        }
    }

    /// Makes sure `day` has an entry, keeping first-seen order.
    pub fn open_day(&mut self, day: &str) {
        if !self.days.iter().any(|(key, _)| key == day) {
            self.days.push((day.to_string(), Vec::new()));
        }
    }

    pub fn push_dish(&mut self, day: &str, dish: String) {
        self.open_day(day);
        if let Some((_, dishes)) = self.days.iter_mut().find(|(key, _)| key == day) {
            dishes.push(dish);
        }
    }

    #[cfg(test)]
    pub fn dishes(&self, day: &str) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(key, _)| key == day)
            .map(|(_, dishes)| dishes.as_slice())
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|(key, _)| key.as_str())
    }

    pub fn dish_count(&self) -> usize {
        self.days.iter().map(|(_, dishes)| dishes.len()).sum()
    }

    /// Wraps the record under the site's top-level field name.
    pub const fn into_document(self, field: &'static str) -> MenuDocument {
        MenuDocument { field, menu: self }
    }
}

impl Serialize for MenuRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, dishes) in &self.days {
            map.serialize_entry(day, dishes)?;
        }
        map.end()
    }
}

/// The finished output: `{ "<field>": { "<day>": [dishes] } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDocument {
    field: &'static str,
    menu: MenuRecord,
}

impl MenuDocument {
    #[cfg(test)]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    #[cfg(test)]
    pub const fn menu(&self) -> &MenuRecord {
        &self.menu
    }

    /// Indented JSON with non-ASCII characters left as they are.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

impl Serialize for MenuDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, &self.menu)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_insertion_order() {
        let mut record = MenuRecord::new();
        record.push_dish("tisdag", "Lasagne".to_string());
        record.push_dish("måndag", "Pytt i panna".to_string());
        record.push_dish("tisdag", "Lasagne".to_string());
        assert_eq!(record.days().collect::<Vec<_>>(), vec!["tisdag", "måndag"]);
        assert_eq!(
            record.dishes("tisdag"),
            Some(&["Lasagne".to_string(), "Lasagne".to_string()][..])
        );
        assert_eq!(record.dish_count(), 3);
    }

    #[test]
    fn test_document_json() {
        let mut record = MenuRecord::with_days(["måndag".to_string(), "tisdag".to_string()]);
        record.push_dish("måndag", "Ärtsoppa".to_string());
        let json = record.into_document("lunchmeny").to_json().unwrap();
        assert_eq!(
            json,
            "{\n  \"lunchmeny\": {\n    \"måndag\": [\n      \"Ärtsoppa\"\n    ],\n    \"tisdag\": []\n  }\n}\n"
        );
    }
}
