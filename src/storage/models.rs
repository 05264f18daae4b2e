//! Storage record models for the persistence layer.
//!
//! This module defines [`BookRecord`], the storage-layer mirror of the domain
//! [`Book`]. Keeping the record separate pins the snapshot's wire format
//! (camelCase `isComplete`, tolerant year hydration) without leaking
//! serialization choices into the domain type.

use crate::domain::Book;
use serde::{Deserialize, Deserializer, Serialize};

/// One book as it appears in the snapshot.
///
/// The snapshot is a flat JSON array of these records with keys
/// `id, title, author, year, isComplete`. The year is written as text but
/// read from either text or a JSON number, so snapshots produced by other
/// tooling hydrate cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "year_from_text_or_number")]
    pub year: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

fn year_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Text(String),
        Number(i64),
    }

    Ok(match YearRepr::deserialize(deserializer)? {
        YearRepr::Text(text) => text,
        YearRepr::Number(number) => number.to_string(),
    })
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.clone(),
            is_complete: book.is_complete,
        }
    }
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            year: record.year,
            is_complete: record.is_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_camel_case_completion_key() {
        let record = BookRecord::from(&Book::new(1, "Dune", "Frank Herbert", "1965", true));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"isComplete\":true"));
        assert!(!json.contains("is_complete"));
    }

    #[test]
    fn roundtrip_preserves_all_fields() {
        let record = BookRecord::from(&Book::new(7, "Solaris", "Stanisław Lem", "1961", false));
        let json = serde_json::to_string(&record).unwrap();
        let back: BookRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn numeric_year_hydrates_as_text() {
        let json = r#"{"id":1,"title":"Dune","author":"Frank Herbert","year":1965,"isComplete":false}"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.year, "1965");
    }

    #[test]
    fn record_converts_back_to_domain_book() {
        let book = Book::new(3, "Ubik", "Philip K. Dick", "1969", true);
        let roundtrip = Book::from(BookRecord::from(&book));
        assert_eq!(roundtrip, book);
    }
}
