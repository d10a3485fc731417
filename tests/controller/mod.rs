//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes and
//! response bodies for both successful requests and error handling.

mod catalog;
mod favorite;

use holocron_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
