//! Mapping of schema constraint violations to domain errors.
//!
//! Constraint names come from `migrations/`; keep the two in sync.

use crate::domain::foundation::{DomainError, ErrorCode, ListId};
use crate::domain::list::{DUPLICATE_ITEM_ERROR, EMPTY_ITEM_ERROR};
use crate::domain::user::EMAIL_TAKEN_ERROR;

pub(super) const USERS_EMAIL_KEY: &str = "users_email_key";
pub(super) const ITEMS_LIST_TEXT_KEY: &str = "items_list_text_key";
pub(super) const ITEMS_TEXT_NOT_BLANK: &str = "items_text_not_blank";
pub(super) const ITEMS_LIST_FK: &str = "items_list_fk";
pub(super) const LIST_SHARED_WITH_LIST_FK: &str = "list_shared_with_list_fk";
pub(super) const LIST_SHARED_WITH_USER_FK: &str = "list_shared_with_user_fk";

/// Domain error for a violated constraint, if it is one we know.
pub(super) fn constraint_error(constraint: &str) -> Option<DomainError> {
    let err = match constraint {
        USERS_EMAIL_KEY => {
            DomainError::new(ErrorCode::EmailTaken, EMAIL_TAKEN_ERROR).with_detail("field", "email")
        }
        ITEMS_LIST_TEXT_KEY => DomainError::new(ErrorCode::DuplicateItem, DUPLICATE_ITEM_ERROR)
            .with_detail("field", "text"),
        ITEMS_TEXT_NOT_BLANK => DomainError::validation("text", EMPTY_ITEM_ERROR),
        ITEMS_LIST_FK | LIST_SHARED_WITH_LIST_FK => {
            DomainError::new(ErrorCode::ListNotFound, "List not found")
        }
        LIST_SHARED_WITH_USER_FK => DomainError::new(ErrorCode::UserNotFound, "User not found"),
        _ => return None,
    };
    Some(err)
}

/// Names the list behind a foreign-key `ListNotFound`.
pub(super) fn for_list(err: DomainError, list_id: &ListId) -> DomainError {
    match err.code {
        ErrorCode::ListNotFound => DomainError::list_not_found(list_id),
        _ => err,
    }
}

/// Converts a failed query into a `DomainError`.
///
/// Known constraint violations become their domain codes; anything else is
/// a `DatabaseError` prefixed with `context`.
pub(super) fn query_error(context: &str, err: sqlx::Error) -> DomainError {
    let constraint = match &err {
        sqlx::Error::Database(db) => db.constraint().and_then(constraint_error),
        _ => None,
    };
    constraint.unwrap_or_else(|| DomainError::database(format!("{}: {}", context, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_key_maps_to_email_taken() {
        let err = constraint_error(USERS_EMAIL_KEY).unwrap();
        assert_eq!(err.code, ErrorCode::EmailTaken);
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn list_text_key_maps_to_duplicate_item() {
        let err = constraint_error(ITEMS_LIST_TEXT_KEY).unwrap();
        assert_eq!(err.code, ErrorCode::DuplicateItem);
        assert_eq!(err.message, DUPLICATE_ITEM_ERROR);
    }

    #[test]
    fn blank_text_check_maps_to_validation() {
        let err = constraint_error(ITEMS_TEXT_NOT_BLANK).unwrap();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.field(), Some("text"));
    }

    #[test]
    fn list_foreign_keys_map_to_list_not_found() {
        for name in [ITEMS_LIST_FK, LIST_SHARED_WITH_LIST_FK] {
            assert_eq!(constraint_error(name).unwrap().code, ErrorCode::ListNotFound);
        }
    }

    #[test]
    fn for_list_names_the_missing_list() {
        let id = ListId::new();
        let err = for_list(constraint_error(ITEMS_LIST_FK).unwrap(), &id);
        assert_eq!(err.list_id(), Some(id));

        let other = for_list(constraint_error(ITEMS_LIST_TEXT_KEY).unwrap(), &id);
        assert_eq!(other.code, ErrorCode::DuplicateItem);
        assert_eq!(other.list_id(), None);
    }

    #[test]
    fn sharee_foreign_key_maps_to_user_not_found() {
        let err = constraint_error(LIST_SHARED_WITH_USER_FK).unwrap();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[test]
    fn unknown_constraint_is_not_mapped() {
        assert!(constraint_error("some_other_constraint").is_none());
    }

    #[test]
    fn non_database_errors_become_database_errors() {
        let err = query_error("Failed to insert item", sqlx::Error::RowNotFound);
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.starts_with("Failed to insert item"));
    }
}
