use chrono::Utc;
use serenity::all::{ChannelId, UserId};
use std::time::Duration;

use crate::{
    data::{ApplicationRepository, Store},
    error::{command::CommandError, AppError},
    model::{
        application::{Application, ApplicationStatus},
        notice::Tone,
    },
    service::{
        application::{IntakeFlow, IntakeOutcome, ReviewFlow, QUESTIONS, QUESTION_TIMEOUT},
        fake::{Destination, RecordingOutbox, ScriptedReplies},
    },
};

mod intake;

const RESPONDENT: UserId = UserId::new(1101);
const CHANNEL: ChannelId = ChannelId::new(2202);
