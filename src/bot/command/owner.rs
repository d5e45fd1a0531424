use super::Invocation;
use crate::{error::AppError, service::no_prefix::NoPrefixService, util::parse};

pub async fn grant_no_prefix(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, _) = parse::split_first(args);
    let target = target.ok_or_else(|| invocation.missing_argument())?;
    let member = invocation.resolve_member(target).await?;

    let notice = NoPrefixService::new(invocation.store)
        .grant(member.user.id)
        .await;

    invocation.reply(notice).await?;
    Ok(())
}

pub async fn revoke_no_prefix(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, _) = parse::split_first(args);
    let target = target.ok_or_else(|| invocation.missing_argument())?;
    let member = invocation.resolve_member(target).await?;

    let notice = NoPrefixService::new(invocation.store)
        .revoke(member.user.id)
        .await?;

    invocation.reply(notice).await?;
    Ok(())
}

pub async fn list_no_prefix(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let notice = NoPrefixService::new(invocation.store).list().await;
    invocation.reply(notice).await?;
    Ok(())
}
