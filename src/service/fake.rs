//! Recording fakes for the platform boundary traits.

use serenity::all::{ChannelId, UserId};
use serenity::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use super::outbox::{Outbox, ReplySource};
use crate::{error::AppError, model::notice::Notice};

/// Where a recorded notice was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Channel(ChannelId),
    Direct(UserId),
}

/// Outbox that records every notice instead of sending it.
#[derive(Default)]
pub struct RecordingOutbox {
    sent: Mutex<Vec<(Destination, Notice)>>,
    fail_direct: bool,
}

impl RecordingOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outbox whose direct messages fail, like a user with closed DMs.
    pub fn failing_direct() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_direct: true,
        }
    }

    pub fn sent(&self) -> Vec<(Destination, Notice)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<Option<String>> {
        self.sent()
            .into_iter()
            .map(|(_, notice)| notice.title)
            .collect()
    }

    pub fn descriptions(&self) -> Vec<Option<String>> {
        self.sent()
            .into_iter()
            .map(|(_, notice)| notice.description)
            .collect()
    }
}

#[async_trait]
impl Outbox for RecordingOutbox {
    async fn send(&self, channel_id: ChannelId, notice: Notice) -> Result<(), AppError> {
        self.sent
            .lock()
            .unwrap()
            .push((Destination::Channel(channel_id), notice));
        Ok(())
    }

    async fn send_direct(&self, user_id: UserId, notice: Notice) -> Result<(), AppError> {
        if self.fail_direct {
            return Err(AppError::InternalError("direct messages closed".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((Destination::Direct(user_id), notice));
        Ok(())
    }
}

/// Reply source that plays back a fixed script.
///
/// Each call pops the next entry: `Some(text)` is a reply, `None` a missed deadline.
/// An exhausted script behaves as a missed deadline.
#[derive(Default)]
pub struct ScriptedReplies {
    script: Mutex<VecDeque<Option<String>>>,
    requests: Mutex<Vec<(UserId, ChannelId, Duration)>>,
}

impl ScriptedReplies {
    pub fn new(script: Vec<Option<&str>>) -> Self {
        Self {
            script: Mutex::new(
                script
                    .into_iter()
                    .map(|entry| entry.map(str::to_string))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replies that answer every question in order.
    pub fn answering(answers: &[&str]) -> Self {
        Self::new(answers.iter().map(|answer| Some(*answer)).collect())
    }

    /// Every wait that was requested, in order.
    pub fn requests(&self) -> Vec<(UserId, ChannelId, Duration)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySource for ScriptedReplies {
    async fn next_reply(
        &self,
        respondent: UserId,
        channel_id: ChannelId,
        timeout: Duration,
    ) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .push((respondent, channel_id, timeout));
        self.script.lock().unwrap().pop_front().flatten()
    }
}
