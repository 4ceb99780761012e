// status-core - common status and result primitives
// Copyright Statuscore, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./lib_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

//
// Code
//

// Closed set of status codes: one success value plus fifteen failure kinds. The numeric values
// are stable and form the contiguous range 0..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Code {
  Ok = 0,
  Cancelled = 1,
  InvalidArgument = 2,
  NotFound = 3,
  AlreadyExists = 4,
  PermissionDenied = 5,
  Unauthenticated = 6,
  OutOfRange = 7,
  DeadlineExceeded = 8,
  ResourceExhausted = 9,
  FailedPrecondition = 10,
  Aborted = 11,
  Unimplemented = 12,
  Internal = 13,
  Unavailable = 14,
  DataLoss = 15,
}

impl Code {
  // Every code, in numeric order. Callers that need to pre-validate a name against the known
  // set can scan this instead of relying on the `from_string` fallback.
  pub const ALL: [Self; 16] = [
    Self::Ok,
    Self::Cancelled,
    Self::InvalidArgument,
    Self::NotFound,
    Self::AlreadyExists,
    Self::PermissionDenied,
    Self::Unauthenticated,
    Self::OutOfRange,
    Self::DeadlineExceeded,
    Self::ResourceExhausted,
    Self::FailedPrecondition,
    Self::Aborted,
    Self::Unimplemented,
    Self::Internal,
    Self::Unavailable,
    Self::DataLoss,
  ];

  // Convert to the canonical display name. Total and injective over the enum. Note that the
  // canonical name for `Aborted` is "ABORT" for compatibility with existing data.
  #[must_use]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Ok => "OK",
      Self::Cancelled => "CANCELLED",
      Self::InvalidArgument => "INVALID ARGUMENT",
      Self::NotFound => "NOT FOUND",
      Self::AlreadyExists => "ALREADY EXISTS",
      Self::PermissionDenied => "PERMISSION DENIED",
      Self::Unauthenticated => "UNAUTHENTICATED",
      Self::OutOfRange => "OUT OF RANGE",
      Self::DeadlineExceeded => "DEADLINE EXCEEDED",
      Self::ResourceExhausted => "RESOURCE EXHAUSTED",
      Self::FailedPrecondition => "FAILED PRECONDITION",
      Self::Aborted => "ABORT",
      Self::Unimplemented => "UNIMPLEMENTED",
      Self::Internal => "INTERNAL",
      Self::Unavailable => "UNAVAILABLE",
      Self::DataLoss => "DATA LOSS",
    }
  }

  // Convert from a canonical display name, case-insensitively. An unrecognized name resolves
  // to `Ok` rather than an error; this keeps the lookup total but makes "unknown name"
  // indistinguishable from success. Use the `FromStr` impl when that distinction matters.
  #[must_use]
  pub fn from_string(name: &str) -> Self {
    for code in Self::ALL {
      if name.eq_ignore_ascii_case(code.as_str()) {
        return code;
      }
    }

    log::debug!("unrecognized status code name {name:?}, resolving to Ok");
    Self::Ok
  }

  // Convert to the stable numeric value.
  #[must_use]
  pub const fn to_int(&self) -> u32 {
    *self as u32
  }

  // Convert from a stable numeric value.
  #[must_use]
  pub const fn from_int(value: u32) -> Option<Self> {
    match value {
      0 => Some(Self::Ok),
      1 => Some(Self::Cancelled),
      2 => Some(Self::InvalidArgument),
      3 => Some(Self::NotFound),
      4 => Some(Self::AlreadyExists),
      5 => Some(Self::PermissionDenied),
      6 => Some(Self::Unauthenticated),
      7 => Some(Self::OutOfRange),
      8 => Some(Self::DeadlineExceeded),
      9 => Some(Self::ResourceExhausted),
      10 => Some(Self::FailedPrecondition),
      11 => Some(Self::Aborted),
      12 => Some(Self::Unimplemented),
      13 => Some(Self::Internal),
      14 => Some(Self::Unavailable),
      15 => Some(Self::DataLoss),
      _ => None,
    }
  }
}

impl fmt::Display for Code {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

//
// ParseCodeError
//

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown status code name: {0}")]
pub struct ParseCodeError(String);

impl FromStr for Code {
  type Err = ParseCodeError;

  // Strict lookup: unlike `from_string`, an unrecognized name is an error instead of `Ok`.
  fn from_str(name: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|code| name.eq_ignore_ascii_case(code.as_str()))
      .ok_or_else(|| ParseCodeError(name.to_string()))
  }
}
