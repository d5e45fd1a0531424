use super::Invocation;
use crate::{
    bot::outbox::{CollectorReplies, SerenityOutbox},
    error::{command::CommandError, AppError},
    service::application::{IntakeFlow, IntakeOutcome, ReviewFlow},
    util::parse,
};

/// Runs the intake questionnaire for the invoker in the invoking channel.
pub async fn apply(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let outbox = SerenityOutbox::new(invocation.ctx.http.clone());
    let replies = CollectorReplies::new(invocation.ctx.shard.clone());

    let outcome = IntakeFlow::new(invocation.store, &outbox, &replies)
        .run(invocation.msg.author.id, invocation.msg.channel_id)
        .await?;

    if let IntakeOutcome::Submitted(application) = outcome {
        tracing::debug!(
            "Application from user {} stored with {} answers",
            application.respondent,
            application.answers.len()
        );
    }
    Ok(())
}

/// Records a reviewer's decision: `reviewapp <member> <status>`.
///
/// The respondent only needs to be a valid user reference; they may have left the
/// guild since applying.
pub async fn review(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, rest) = parse::split_first(args);
    let (status, _) = parse::split_first(rest);
    let (Some(target), Some(status)) = (target, status) else {
        return Err(invocation.missing_argument());
    };

    let respondent =
        parse::parse_user(target).ok_or_else(|| CommandError::MemberNotFound(target.to_string()))?;

    let outbox = SerenityOutbox::new(invocation.ctx.http.clone());
    ReviewFlow::new(invocation.store, &outbox)
        .run(invocation.msg.channel_id, respondent, status)
        .await?;
    Ok(())
}
