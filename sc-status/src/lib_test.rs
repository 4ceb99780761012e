// status-core - common status and result primitives
// Copyright Statuscore, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{Code, Status};
use pretty_assertions::assert_eq;

#[test]
fn default_is_ok_sentinel() {
  let status = Status::default();

  assert!(status.is_ok());
  assert_eq!(Code::Ok, status.code());
  assert_eq!("", status.message());
  assert_eq!(Status::ok(), status);
}

#[test]
fn accessors_reflect_construction() {
  let status = Status::new(Code::NotFound, "missing");

  assert!(!status.is_ok());
  assert_eq!(Code::NotFound, status.code());
  assert_eq!("missing", status.message());
}

#[test]
fn equality_is_code_and_message() {
  assert_eq!(
    Status::new(Code::Internal, "a"),
    Status::new(Code::Internal, "a")
  );
  assert_ne!(
    Status::new(Code::Internal, "a"),
    Status::new(Code::Internal, "b")
  );
  assert_ne!(
    Status::new(Code::Internal, "a"),
    Status::new(Code::Aborted, "a")
  );
}

#[test]
fn display_includes_code_and_message() {
  assert_eq!(
    "code: NOT FOUND, message: missing",
    Status::new(Code::NotFound, "missing").to_string()
  );
  assert_eq!("code: OK, message: ", Status::ok().to_string());
}

#[test]
fn usable_as_error_trait_object() {
  let error: Box<dyn std::error::Error> = Box::new(Status::new(Code::DataLoss, "corrupt"));

  assert_eq!("code: DATA LOSS, message: corrupt", error.to_string());
}
