use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_new_ids_are_unique_and_time_ordered() {
    let first = BudgetId::new();
    let second = BudgetId::new();
    assert_ne!(first, second);
    assert_eq!(first.as_uuid().get_version_num(), 7);
}

#[test]
fn test_uuid_conversions() {
    let uuid = Uuid::new_v4();
    let id = CategoryId::from(uuid);
    assert_eq!(id, CategoryId::from_uuid(uuid));
    assert_eq!(Uuid::from(id), uuid);
}

#[test]
fn test_display_and_parse_use_uuid_text() {
    let uuid = Uuid::new_v4();
    let id = EventId::from_uuid(uuid);
    assert_eq!(id.to_string(), uuid.to_string());
    assert_eq!(TransactionId::from_str(&uuid.to_string()).unwrap().as_uuid(), &uuid);
    assert!(UserId::from_str("not-a-uuid").is_err());
}

#[test]
fn test_serializes_as_bare_uuid_string() {
    let uuid = Uuid::new_v4();
    let json = serde_json::to_string(&UserId::from_uuid(uuid)).unwrap();
    assert_eq!(json, format!("\"{uuid}\""));
    let back: UserId = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_uuid(), &uuid);
}
