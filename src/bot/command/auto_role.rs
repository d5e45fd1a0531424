use super::Invocation;
use crate::{
    error::{command::CommandError, AppError},
    service::auto_role::AutoRoleService,
    util::parse,
};

pub async fn set_auto_role(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let guild_id = invocation.guild_id()?;
    let (arg, _) = parse::split_first(args);
    let arg = arg.ok_or_else(|| invocation.missing_argument())?;

    let role_id = parse::parse_role(arg).ok_or_else(|| CommandError::RoleNotFound(arg.to_string()))?;
    let roles = invocation.guild_roles().await?;
    let role = roles
        .get(&role_id)
        .ok_or_else(|| CommandError::RoleNotFound(arg.to_string()))?;

    let notice = AutoRoleService::new(invocation.store)
        .set(guild_id, role)
        .await;

    invocation.reply(notice).await?;
    Ok(())
}
