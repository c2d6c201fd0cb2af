//! Driver-level write acknowledgments.
//!
//! Mutation endpoints answer with the store's own counts rather than the
//! written document, so clients can tell "matched nothing" apart from
//! "changed one row" without a second read.

use serde::{Deserialize, Serialize};

/// Acknowledgment for an insert.
///
/// `inserted_id` is `None` when the insert was skipped because an equivalent
/// row already existed (idempotent create-if-absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    /// ID of the inserted row, if one was inserted.
    pub inserted_id: Option<i32>,
}

impl InsertResult {
    /// Acknowledge an insert of the row with the given id.
    #[must_use]
    pub const fn inserted(id: i32) -> Self {
        Self {
            inserted_id: Some(id),
        }
    }

    /// Acknowledge that nothing was inserted.
    #[must_use]
    pub const fn skipped() -> Self {
        Self { inserted_id: None }
    }
}

/// Acknowledgment for an update (possibly an upsert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    /// Number of rows the filter matched.
    pub matched_count: u64,
    /// Number of rows actually modified.
    pub modified_count: u64,
    /// ID of the row inserted by upsert, when the filter matched nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<i32>,
}

impl UpdateResult {
    /// Acknowledge an update that matched `count` rows.
    #[must_use]
    pub const fn matched(count: u64) -> Self {
        Self {
            matched_count: count,
            modified_count: count,
            upserted_id: None,
        }
    }

    /// Acknowledge an upsert that matched nothing and inserted a row.
    #[must_use]
    pub const fn upserted(id: i32) -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
        }
    }
}

/// Acknowledgment for a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// Number of rows deleted.
    pub deleted_count: u64,
}

impl DeleteResult {
    /// Acknowledge deletion of `count` rows.
    #[must_use]
    pub const fn deleted(count: u64) -> Self {
        Self {
            deleted_count: count,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_result_wire_shape() {
        let json = serde_json::to_string(&InsertResult::inserted(5)).unwrap();
        assert_eq!(json, r#"{"insertedId":5}"#);

        let json = serde_json::to_string(&InsertResult::skipped()).unwrap();
        assert_eq!(json, r#"{"insertedId":null}"#);
    }

    #[test]
    fn test_update_result_wire_shape() {
        let json = serde_json::to_string(&UpdateResult::matched(1)).unwrap();
        assert_eq!(json, r#"{"matchedCount":1,"modifiedCount":1}"#);

        let json = serde_json::to_string(&UpdateResult::upserted(3)).unwrap();
        assert_eq!(
            json,
            r#"{"matchedCount":0,"modifiedCount":0,"upsertedId":3}"#
        );
    }

    #[test]
    fn test_delete_result_wire_shape() {
        let json = serde_json::to_string(&DeleteResult::deleted(2)).unwrap();
        assert_eq!(json, r#"{"deletedCount":2}"#);
    }
}
