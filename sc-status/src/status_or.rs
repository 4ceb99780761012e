// status-core - common status and result primitives
// Copyright Statuscore, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./status_or_test.rs"]
mod status_or_test;

use crate::Status;

//
// StatusOr
//

// Container for the outcome of a fallible operation: either a computed value or the status
// describing why no value could be produced. The two states are mutually exclusive, and the
// failed state never carries an `Ok` coded status. The variants are private so that invariant
// cannot be bypassed; moving or overwriting a container drops the old payload exactly once.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct StatusOr<T> {
  inner: Inner<T>,
}

#[derive(Debug, Clone, PartialEq)]
enum Inner<T> {
  Value(T),
  Failed(Status),
}

impl<T> StatusOr<T> {
  // Create a container holding `value`.
  pub fn ok(value: T) -> Self {
    Self {
      inner: Inner::Value(value),
    }
  }

  // Create a container holding the value produced by `f`. The value is built directly into the
  // container's storage slot, so non-clonable and non-defaultable types construct through this
  // path without an intermediate.
  pub fn ok_with(f: impl FnOnce() -> T) -> Self {
    Self {
      inner: Inner::Value(f()),
    }
  }

  // Create a container from a fallible producer. A production failure becomes the failed
  // state, never a half initialized container.
  pub fn try_ok_with(f: impl FnOnce() -> Result<T, Status>) -> Self {
    match f() {
      Ok(value) => Self::ok(value),
      Err(status) => Self::from_status(status),
    }
  }

  // Create a failed container. Panics if `status` carries the `Ok` code: an "empty success"
  // container is unrepresentable by contract.
  pub fn from_status(status: Status) -> Self {
    assert!(
      !status.is_ok(),
      "StatusOr failure constructed with Ok status"
    );

    Self {
      inner: Inner::Failed(status),
    }
  }

  #[must_use]
  pub fn has_value(&self) -> bool {
    matches!(self.inner, Inner::Value(_))
  }

  // Borrow the held value. Panics when the container is failed; callers either check
  // `has_value` first or go through `value_or`/`into_result`.
  #[must_use]
  pub fn value(&self) -> &T {
    match &self.inner {
      Inner::Value(value) => value,
      Inner::Failed(status) => panic!("value() called on failed StatusOr: {status}"),
    }
  }

  // Mutably borrow the held value. Panics when the container is failed.
  #[must_use]
  pub fn value_mut(&mut self) -> &mut T {
    match &mut self.inner {
      Inner::Value(value) => value,
      Inner::Failed(status) => panic!("value_mut() called on failed StatusOr: {status}"),
    }
  }

  // Consume the container and return the held value. Panics when the container is failed.
  #[must_use]
  pub fn into_value(self) -> T {
    match self.inner {
      Inner::Value(value) => value,
      Inner::Failed(status) => panic!("into_value() called on failed StatusOr: {status}"),
    }
  }

  // The status of the operation: the ok sentinel when a value is held, otherwise the stored
  // failure.
  pub fn status(&self) -> Status {
    match &self.inner {
      Inner::Value(_) => Status::ok(),
      Inner::Failed(status) => status.clone(),
    }
  }

  // Return the held value, or `default` when the container is failed.
  #[must_use]
  pub fn value_or(self, default: T) -> T {
    match self.inner {
      Inner::Value(value) => value,
      Inner::Failed(_) => default,
    }
  }

  // Convert into a standard `Result` for propagation with `?`.
  pub fn into_result(self) -> Result<T, Status> {
    match self.inner {
      Inner::Value(value) => Ok(value),
      Inner::Failed(status) => Err(status),
    }
  }
}

impl<T> From<Result<T, Status>> for StatusOr<T> {
  fn from(result: Result<T, Status>) -> Self {
    match result {
      Ok(value) => Self::ok(value),
      Err(status) => Self::from_status(status),
    }
  }
}
