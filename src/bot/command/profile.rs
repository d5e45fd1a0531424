use super::Invocation;
use crate::{
    error::AppError,
    service::{info, profile::ProfileService},
    util::parse,
};

pub async fn profile(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, _) = parse::split_first(args);
    let member = invocation.member_or_author(target).await?;
    let roles = invocation.guild_roles().await?;

    let notice = ProfileService::new(invocation.store)
        .profile(
            &member.user,
            member.joined_at,
            info::display_colour(&member, &roles),
        )
        .await;

    invocation.reply(notice).await?;
    Ok(())
}

pub async fn grant_badge(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, key) = badge_args(invocation, args)?;
    let member = invocation.resolve_member(target).await?;

    let notice = ProfileService::new(invocation.store)
        .grant_badge(member.user.id, key)
        .await?;

    invocation.reply(notice).await?;
    Ok(())
}

pub async fn revoke_badge(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, key) = badge_args(invocation, args)?;
    let member = invocation.resolve_member(target).await?;

    let notice = ProfileService::new(invocation.store)
        .revoke_badge(member.user.id, key)
        .await?;

    invocation.reply(notice).await?;
    Ok(())
}

/// Splits `<member> <badge>`, both required.
fn badge_args<'a>(invocation: &Invocation<'_>, args: &'a str) -> Result<(&'a str, &'a str), AppError> {
    let (target, rest) = parse::split_first(args);
    let (key, _) = parse::split_first(rest);
    match (target, key) {
        (Some(target), Some(key)) => Ok((target, key)),
        _ => Err(invocation.missing_argument()),
    }
}
