//! Test doubles shared by the core unit tests.

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::{
    domain::{MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::DeleteOutcome},
    Result,
};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique path under the temp dir; the file itself is not created.
pub fn tmp_path(prefix: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("{prefix}-{}-{n}.txt", std::process::id()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sent {
    Text(MessageRef, String),
    Html(MessageRef, String),
}

pub struct FakeMessenger {
    next_id: Mutex<i32>,
    sent: Mutex<Vec<Sent>>,
    deletes: Mutex<Vec<MessageRef>>,
    delete_outcome: DeleteOutcome,
    fail_sends: bool,
}

impl Default for FakeMessenger {
    fn default() -> Self {
        Self {
            next_id: Mutex::new(1000),
            sent: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
            delete_outcome: DeleteOutcome::Deleted,
            fail_sends: false,
        }
    }
}

impl FakeMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delete_outcome(outcome: DeleteOutcome) -> Self {
        Self {
            delete_outcome: outcome,
            ..Default::default()
        }
    }

    pub fn failing_sends() -> Self {
        Self {
            fail_sends: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<MessageRef> {
        self.deletes.lock().unwrap().clone()
    }

    fn record(&self, msg: MessageRef, sent: Sent) -> Result<MessageRef> {
        if self.fail_sends {
            return Err(Error::External("send failed".to_string()));
        }
        self.sent.lock().unwrap().push(sent);
        let mut guard = self.next_id.lock().unwrap();
        *guard += 1;
        Ok(MessageRef {
            chat_id: msg.chat_id,
            message_id: MessageId(*guard),
        })
    }
}

#[async_trait]
impl MessagingPort for FakeMessenger {
    async fn reply_text(&self, msg: MessageRef, text: &str) -> Result<MessageRef> {
        self.record(msg, Sent::Text(msg, text.to_string()))
    }

    async fn reply_html(&self, msg: MessageRef, html: &str) -> Result<MessageRef> {
        self.record(msg, Sent::Html(msg, html.to_string()))
    }

    async fn delete_message(&self, msg: MessageRef) -> DeleteOutcome {
        self.deletes.lock().unwrap().push(msg);
        self.delete_outcome.clone()
    }
}
