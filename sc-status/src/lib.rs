// status-core - common status and result primitives
// Copyright Statuscore, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./lib_test.rs"]
mod lib_test;

pub mod status_or;

pub use sc_status_code::Code;
pub use status_or::StatusOr;

use std::fmt;

//
// Status
//

// The outcome of an operation: a status code plus a human readable message. A status with code
// `Ok` and an empty message is the canonical success sentinel. Values are immutable after
// construction and cheap to clone and share.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Status {
  code: Code,
  message: String,
}

impl Status {
  // Create a new status.
  pub fn new(code: Code, message: impl Into<String>) -> Self {
    Self {
      code,
      message: message.into(),
    }
  }

  // The success sentinel.
  pub const fn ok() -> Self {
    Self {
      code: Code::Ok,
      message: String::new(),
    }
  }

  #[must_use]
  pub fn is_ok(&self) -> bool {
    self.code == Code::Ok
  }

  #[must_use]
  pub const fn code(&self) -> Code {
    self.code
  }

  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl Default for Status {
  fn default() -> Self {
    Self::ok()
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "code: {}, message: {}", self.code, self.message)
  }
}

impl std::error::Error for Status {}
