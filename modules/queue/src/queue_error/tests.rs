use alloc::string::ToString;

use super::QueueError;

#[test]
fn full_variant_returns_item() {
  let error = QueueError::Full(42);
  assert_eq!(error.into_item(), Some(42));
}

#[test]
fn alloc_error_variant_returns_item() {
  let error = QueueError::AllocError("payload");
  assert_eq!(error.into_item(), Some("payload"));
}

#[test]
fn empty_variant_has_no_item() {
  let error: QueueError<i32> = QueueError::Empty;
  assert!(matches!(error, QueueError::Empty));
  assert_eq!(error.into_item(), None);
}

#[test]
fn error_messages_are_stable() {
  assert_eq!(QueueError::<u8>::Empty.to_string(), "invalid operation on an empty queue");
  assert_eq!(QueueError::Full(1).to_string(), "queue capacity exceeded");
  assert_eq!(QueueError::AllocError(1).to_string(), "failed to allocate queue storage");
}

#[test]
fn partial_eq_compares_payloads() {
  assert_eq!(QueueError::Full(1), QueueError::Full(1));
  assert_ne!(QueueError::Full(1), QueueError::Full(2));
  assert_ne!(QueueError::Full(1), QueueError::AllocError(1));
}
