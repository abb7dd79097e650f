// NLQ Bench - Comparative benchmarking for natural-language query backends
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scripted backends.

use nlq_bench::{BackendError, QueryBackend, QueryResponse};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

/// Shared record of the questions a backend received, in order.
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Backend that replays canned responses.
///
/// Exact-match answers take priority over the default answer. A query with
/// neither fails with a query error.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    name: String,
    answers: HashMap<String, QueryResponse>,
    default: Option<QueryResponse>,
    delay: Option<Duration>,
    init_error: Option<String>,
    strict: bool,
    initialized: bool,
    calls: CallLog,
    cleaned: Rc<Cell<bool>>,
}

impl ScriptedBackend {
    /// Creates a backend with no answers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Answers `query` with `response`.
    pub fn with_answer(mut self, query: impl Into<String>, response: QueryResponse) -> Self {
        self.answers.insert(query.into(), response);
        self
    }

    /// Answers every unscripted query with plain text.
    pub fn with_default(self, text: impl Into<String>) -> Self {
        self.with_default_response(QueryResponse::new(text))
    }

    /// Answers every unscripted query with `response`.
    pub fn with_default_response(mut self, response: QueryResponse) -> Self {
        self.default = Some(response);
        self
    }

    /// Sleeps this long before each answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Makes `initialize` fail with the given reason.
    pub fn failing_init(mut self, reason: impl Into<String>) -> Self {
        self.init_error = Some(reason.into());
        self
    }

    /// Rejects queries until `initialize` succeeded.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Handle to the questions received so far.
    pub fn call_log(&self) -> CallLog {
        Rc::clone(&self.calls)
    }

    /// Handle that turns true once `cleanup` ran.
    pub fn cleanup_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.cleaned)
    }
}

impl QueryBackend for ScriptedBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self) -> Result<(), BackendError> {
        if let Some(reason) = &self.init_error {
            return Err(BackendError::Unavailable(reason.clone()));
        }
        self.initialized = true;
        Ok(())
    }

    fn query(&mut self, text: &str) -> Result<QueryResponse, BackendError> {
        self.calls.borrow_mut().push(text.to_string());

        if self.strict && !self.initialized {
            return Err(BackendError::NotInitialized(self.name.clone()));
        }
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }

        self.answers
            .get(text)
            .or(self.default.as_ref())
            .cloned()
            .ok_or_else(|| BackendError::query(format!("no scripted answer for '{}'", text)))
    }

    fn cleanup(&mut self) {
        self.initialized = false;
        self.cleaned.set(true);
    }
}

/// Backend whose every query fails.
#[derive(Debug, Clone)]
pub struct FailingBackend {
    name: String,
    message: String,
}

impl FailingBackend {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl QueryBackend for FailingBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    fn query(&mut self, _text: &str) -> Result<QueryResponse, BackendError> {
        Err(BackendError::query(self.message.clone()))
    }

    fn cleanup(&mut self) {}
}

/// Backend whose every query panics.
#[derive(Debug, Clone)]
pub struct PanickingBackend {
    name: String,
}

impl PanickingBackend {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl QueryBackend for PanickingBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    fn query(&mut self, text: &str) -> Result<QueryResponse, BackendError> {
        panic!("index out of range while answering '{}'", text)
    }

    fn cleanup(&mut self) {}
}

/// Backend that fails every `period`-th call and answers the rest.
#[derive(Debug, Clone)]
pub struct FlakyBackend {
    name: String,
    answer: String,
    period: usize,
    calls: usize,
}

impl FlakyBackend {
    /// `period` of 0 or 1 fails every call.
    pub fn new(name: impl Into<String>, answer: impl Into<String>, period: usize) -> Self {
        Self {
            name: name.into(),
            answer: answer.into(),
            period: period.max(1),
            calls: 0,
        }
    }
}

impl QueryBackend for FlakyBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    fn query(&mut self, _text: &str) -> Result<QueryResponse, BackendError> {
        self.calls += 1;
        if self.calls % self.period == 0 {
            Err(BackendError::query("connection reset by peer"))
        } else {
            Ok(QueryResponse::new(self.answer.clone()))
        }
    }

    fn cleanup(&mut self) {
        self.calls = 0;
    }
}
