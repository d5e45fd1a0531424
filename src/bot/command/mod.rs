//! Command registry and per-command handlers.
//!
//! Every command the bot understands is described by a `CommandSpec` in `COMMANDS`:
//! its name, aliases, help text, and the permission predicate the router checks before
//! dispatching. Handlers live in one module per help category and receive an
//! `Invocation` plus the raw argument text after the command name.

pub mod application;
pub mod auto_role;
pub mod help;
pub mod moderation;
pub mod owner;
pub mod profile;
pub mod utility;

use std::collections::HashMap;

use serenity::all::{Context, GuildId, Member, Message, Permissions, Role, RoleId};

use crate::{
    bot::outbox,
    config::Config,
    data::Store,
    error::{command::CommandError, AppError},
    model::notice::Notice,
    util::parse,
};

/// Help menu section a command is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Moderation,
    AutoRole,
    Application,
    Utility,
    Profile,
    Owner,
}

impl Category {
    /// Sections in the order the help menu lists them.
    pub const ALL: [Category; 6] = [
        Category::Moderation,
        Category::AutoRole,
        Category::Application,
        Category::Utility,
        Category::Profile,
        Category::Owner,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Category::Moderation => "🛡️ Moderation",
            Category::AutoRole => "🎭 Auto-Role",
            Category::Application => "📝 Application",
            Category::Utility => "🔧 Utility",
            Category::Profile => "👤 Profile",
            Category::Owner => "👑 Owner Only",
        }
    }
}

/// Who may run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Everyone,
    /// Only the configured bot owner.
    Owner,
    /// Members whose guild permissions include all of these. Administrators always pass.
    Permissions(Permissions),
}

impl Requirement {
    /// Checks the predicate against an invoker.
    ///
    /// # Arguments
    /// - `is_owner` - Whether the invoker is the configured bot owner
    /// - `permissions` - The invoker's computed guild permissions, `None` outside guilds
    ///
    /// # Returns
    /// - `true` - The invoker may run the command
    /// - `false` - The invoker lacks the required permission
    pub fn is_met(self, is_owner: bool, permissions: Option<Permissions>) -> bool {
        match self {
            Requirement::Everyone => true,
            Requirement::Owner => is_owner,
            Requirement::Permissions(required) => permissions
                .map(|held| held.administrator() || held.contains(required))
                .unwrap_or(false),
        }
    }
}

/// Identifies the handler a command dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Kick,
    Ban,
    Unban,
    Clear,
    Warn,
    Warnings,
    SetAutoRole,
    Apply,
    ReviewApp,
    Ping,
    ServerInfo,
    UserInfo,
    Profile,
    GrantBadge,
    RevokeBadge,
    GrantNoPrefix,
    RevokeNoPrefix,
    ListNoPrefix,
    Help,
}

/// Static description of a command.
#[derive(Debug, PartialEq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// `None` for commands not listed in the help overview.
    pub category: Option<Category>,
    /// Argument signature, e.g. `<member> [reason]`.
    pub usage: &'static str,
    /// One-line summary for the help overview.
    pub summary: &'static str,
    /// Longer description for `help <command>`.
    pub help: &'static str,
    pub requirement: Requirement,
    pub kind: CommandKind,
}

impl CommandSpec {
    /// Whether `name` is this command's name or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }

    /// Full usage line including the prefix.
    pub fn usage_line(&self, prefix: &str) -> String {
        if self.usage.is_empty() {
            format!("{}{}", prefix, self.name)
        } else {
            format!("{}{} {}", prefix, self.name, self.usage)
        }
    }
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "kick",
        aliases: &[],
        category: Some(Category::Moderation),
        usage: "<member> [reason]",
        summary: "Kick a member",
        help: "Kick a member from the server 👢",
        requirement: Requirement::Permissions(Permissions::KICK_MEMBERS),
        kind: CommandKind::Kick,
    },
    CommandSpec {
        name: "ban",
        aliases: &[],
        category: Some(Category::Moderation),
        usage: "<member> [reason]",
        summary: "Ban a member",
        help: "Ban a member from the server 🔨",
        requirement: Requirement::Permissions(Permissions::BAN_MEMBERS),
        kind: CommandKind::Ban,
    },
    CommandSpec {
        name: "unban",
        aliases: &[],
        category: Some(Category::Moderation),
        usage: "<user>",
        summary: "Unban a user",
        help: "Unban a member from the server 🔓. The user can be given as a mention, \
               an ID, `name#discriminator`, or a username.",
        requirement: Requirement::Permissions(Permissions::BAN_MEMBERS),
        kind: CommandKind::Unban,
    },
    CommandSpec {
        name: "clear",
        aliases: &[],
        category: Some(Category::Moderation),
        usage: "<amount>",
        summary: "Purge messages",
        help: "Clear a specified number of messages (1 to 99) 🧹",
        requirement: Requirement::Permissions(Permissions::MANAGE_MESSAGES),
        kind: CommandKind::Clear,
    },
    CommandSpec {
        name: "warn",
        aliases: &[],
        category: Some(Category::Moderation),
        usage: "<member> [reason]",
        summary: "Warn a user",
        help: "Warn a member ⚠️",
        requirement: Requirement::Permissions(Permissions::MANAGE_ROLES),
        kind: CommandKind::Warn,
    },
    CommandSpec {
        name: "warnings",
        aliases: &[],
        category: Some(Category::Moderation),
        usage: "[member]",
        summary: "List a user's warnings",
        help: "List the warnings issued to a member 📋",
        requirement: Requirement::Permissions(Permissions::MANAGE_ROLES),
        kind: CommandKind::Warnings,
    },
    CommandSpec {
        name: "setautorole",
        aliases: &[],
        category: Some(Category::AutoRole),
        usage: "<role>",
        summary: "Set role for new members",
        help: "Set the role automatically given to new members 🎭",
        requirement: Requirement::Permissions(Permissions::MANAGE_ROLES),
        kind: CommandKind::SetAutoRole,
    },
    CommandSpec {
        name: "apply",
        aliases: &[],
        category: Some(Category::Application),
        usage: "",
        summary: "Start an application",
        help: "Start a server application 📝",
        requirement: Requirement::Everyone,
        kind: CommandKind::Apply,
    },
    CommandSpec {
        name: "reviewapp",
        aliases: &[],
        category: Some(Category::Application),
        usage: "<member> <status>",
        summary: "Review a user's application",
        help: "Review a member's application 📋",
        requirement: Requirement::Permissions(Permissions::ADMINISTRATOR),
        kind: CommandKind::ReviewApp,
    },
    CommandSpec {
        name: "ping",
        aliases: &[],
        category: Some(Category::Utility),
        usage: "",
        summary: "Show latency",
        help: "Check bot latency 🏓",
        requirement: Requirement::Everyone,
        kind: CommandKind::Ping,
    },
    CommandSpec {
        name: "serverinfo",
        aliases: &[],
        category: Some(Category::Utility),
        usage: "",
        summary: "Server stats",
        help: "Display server information 📊",
        requirement: Requirement::Everyone,
        kind: CommandKind::ServerInfo,
    },
    CommandSpec {
        name: "userinfo",
        aliases: &[],
        category: Some(Category::Utility),
        usage: "[member]",
        summary: "User info",
        help: "Display user information 👤",
        requirement: Requirement::Everyone,
        kind: CommandKind::UserInfo,
    },
    CommandSpec {
        name: "profile",
        aliases: &["p"],
        category: Some(Category::Profile),
        usage: "[member]",
        summary: "View profile",
        help: "View your or another user's profile 👤",
        requirement: Requirement::Everyone,
        kind: CommandKind::Profile,
    },
    CommandSpec {
        name: "grant_badge",
        aliases: &[],
        category: Some(Category::Profile),
        usage: "<member> <badge>",
        summary: "Grant badge (Owner)",
        help: "Grant a badge to a user (Owner only)",
        requirement: Requirement::Owner,
        kind: CommandKind::GrantBadge,
    },
    CommandSpec {
        name: "revoke_badge",
        aliases: &[],
        category: Some(Category::Profile),
        usage: "<member> <badge>",
        summary: "Revoke badge (Owner)",
        help: "Revoke a badge from a user (Owner only)",
        requirement: Requirement::Owner,
        kind: CommandKind::RevokeBadge,
    },
    CommandSpec {
        name: "grant_no_prefix",
        aliases: &[],
        category: Some(Category::Owner),
        usage: "<member>",
        summary: "Allow user to run commands without prefix",
        help: "Grant no-prefix permission to a user (Owner only)",
        requirement: Requirement::Owner,
        kind: CommandKind::GrantNoPrefix,
    },
    CommandSpec {
        name: "revoke_no_prefix",
        aliases: &[],
        category: Some(Category::Owner),
        usage: "<member>",
        summary: "Remove no-prefix permission",
        help: "Revoke no-prefix permission from a user (Owner only)",
        requirement: Requirement::Owner,
        kind: CommandKind::RevokeNoPrefix,
    },
    CommandSpec {
        name: "list_no_prefix",
        aliases: &[],
        category: Some(Category::Owner),
        usage: "",
        summary: "List users with no-prefix access",
        help: "List all users with no-prefix permission (Owner only)",
        requirement: Requirement::Owner,
        kind: CommandKind::ListNoPrefix,
    },
    CommandSpec {
        name: "help",
        aliases: &[],
        category: None,
        usage: "[command]",
        summary: "Show this menu",
        help: "Shows the help menu, or detailed help for one command",
        requirement: Requirement::Everyone,
        kind: CommandKind::Help,
    },
];

/// Looks up a command by name or alias. Matching is case-sensitive.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.answers_to(name))
}

/// Everything a command handler needs about the message that invoked it.
pub struct Invocation<'a> {
    pub ctx: &'a Context,
    pub msg: &'a Message,
    pub store: &'a Store,
    pub config: &'a Config,
    pub spec: &'static CommandSpec,
}

impl Invocation<'_> {
    /// Guild the command was used in.
    ///
    /// # Returns
    /// - `Ok(GuildId)` - The invoking guild
    /// - `Err(CommandError::GuildOnly)` - The command was used in a direct message
    pub fn guild_id(&self) -> Result<GuildId, AppError> {
        self.msg
            .guild_id
            .ok_or_else(|| CommandError::GuildOnly.into())
    }

    /// Error for a missing required argument, carrying this command's usage line.
    pub fn missing_argument(&self) -> AppError {
        CommandError::MissingArgument {
            usage: self.spec.usage_line(&self.config.command_prefix),
        }
        .into()
    }

    /// Posts a notice in the invoking channel.
    pub async fn reply(&self, notice: Notice) -> Result<Message, AppError> {
        outbox::post(&self.ctx.http, self.msg.channel_id, notice).await
    }

    /// Resolves a member argument in the invoking guild.
    ///
    /// # Arguments
    /// - `arg` - Mention or raw ID as typed
    ///
    /// # Returns
    /// - `Ok(Member)` - The member, from cache or fetched
    /// - `Err(CommandError::MemberNotFound)` - The argument is not a user reference or
    ///   the user is not in this guild
    /// - `Err(CommandError::GuildOnly)` - Used in a direct message
    pub async fn resolve_member(&self, arg: &str) -> Result<Member, AppError> {
        let guild_id = self.guild_id()?;
        let user_id =
            parse::parse_user(arg).ok_or_else(|| CommandError::MemberNotFound(arg.to_string()))?;

        guild_id.member(self.ctx, user_id).await.map_err(|e| {
            tracing::debug!("Failed to resolve member {} in {}: {:?}", user_id, guild_id, e);
            CommandError::MemberNotFound(arg.to_string()).into()
        })
    }

    /// Resolves an optional member argument, defaulting to the invoker.
    pub async fn member_or_author(&self, arg: Option<&str>) -> Result<Member, AppError> {
        match arg {
            Some(arg) => self.resolve_member(arg).await,
            None => {
                self.guild_id()?;
                Ok(self.msg.member(self.ctx).await?)
            }
        }
    }

    /// Roles of the invoking guild, from cache when available.
    pub async fn guild_roles(&self) -> Result<HashMap<RoleId, Role>, AppError> {
        let guild_id = self.guild_id()?;

        let cached = self
            .ctx
            .cache
            .guild(guild_id)
            .map(|guild| guild.roles.clone());

        match cached {
            Some(roles) => Ok(roles),
            None => Ok(guild_id.roles(&self.ctx.http).await?),
        }
    }
}

/// Runs the handler for an authorized invocation.
///
/// # Arguments
/// - `invocation` - The invoking message and shared state
/// - `args` - Argument text after the command name
///
/// # Returns
/// - `Ok(())` - The command completed and reported its own result
/// - `Err(AppError)` - The command failed; the caller reports it
pub async fn execute(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    match invocation.spec.kind {
        CommandKind::Kick => moderation::kick(invocation, args).await,
        CommandKind::Ban => moderation::ban(invocation, args).await,
        CommandKind::Unban => moderation::unban(invocation, args).await,
        CommandKind::Clear => moderation::clear(invocation, args).await,
        CommandKind::Warn => moderation::warn(invocation, args).await,
        CommandKind::Warnings => moderation::warnings(invocation, args).await,
        CommandKind::SetAutoRole => auto_role::set_auto_role(invocation, args).await,
        CommandKind::Apply => application::apply(invocation).await,
        CommandKind::ReviewApp => application::review(invocation, args).await,
        CommandKind::Ping => utility::ping(invocation).await,
        CommandKind::ServerInfo => utility::server_info(invocation).await,
        CommandKind::UserInfo => utility::user_info(invocation, args).await,
        CommandKind::Profile => profile::profile(invocation, args).await,
        CommandKind::GrantBadge => profile::grant_badge(invocation, args).await,
        CommandKind::RevokeBadge => profile::revoke_badge(invocation, args).await,
        CommandKind::GrantNoPrefix => owner::grant_no_prefix(invocation, args).await,
        CommandKind::RevokeNoPrefix => owner::revoke_no_prefix(invocation, args).await,
        CommandKind::ListNoPrefix => owner::list_no_prefix(invocation).await,
        CommandKind::Help => help::help(invocation, args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_aliases_are_unique() {
        let mut seen = HashSet::new();
        for spec in COMMANDS {
            assert!(seen.insert(spec.name), "duplicate name {}", spec.name);
            for alias in spec.aliases {
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn finds_by_alias_case_sensitively() {
        assert_eq!(find("p").map(|spec| spec.name), Some("profile"));
        assert_eq!(find("profile").map(|spec| spec.kind), Some(CommandKind::Profile));
        assert!(find("PING").is_none());
        assert!(find("unknown").is_none());
    }

    #[test]
    fn usage_line_includes_prefix() {
        assert_eq!(
            find("kick").unwrap().usage_line("u!"),
            "u!kick <member> [reason]"
        );
        assert_eq!(find("ping").unwrap().usage_line("u!"), "u!ping");
    }

    #[test]
    fn permission_requirements() {
        let kick = Requirement::Permissions(Permissions::KICK_MEMBERS);

        assert!(Requirement::Everyone.is_met(false, None));
        assert!(Requirement::Owner.is_met(true, None));
        assert!(!Requirement::Owner.is_met(false, Some(Permissions::ADMINISTRATOR)));
        assert!(kick.is_met(false, Some(Permissions::KICK_MEMBERS | Permissions::SEND_MESSAGES)));
        assert!(kick.is_met(false, Some(Permissions::ADMINISTRATOR)));
        assert!(!kick.is_met(false, Some(Permissions::BAN_MEMBERS)));
        assert!(!kick.is_met(true, None));
    }

    #[test]
    fn moderation_commands_require_their_permissions() {
        let required = |name| find(name).unwrap().requirement;

        assert_eq!(
            required("ban"),
            Requirement::Permissions(Permissions::BAN_MEMBERS)
        );
        assert_eq!(
            required("clear"),
            Requirement::Permissions(Permissions::MANAGE_MESSAGES)
        );
        assert_eq!(
            required("reviewapp"),
            Requirement::Permissions(Permissions::ADMINISTRATOR)
        );
        assert_eq!(required("grant_no_prefix"), Requirement::Owner);
        assert_eq!(required("apply"), Requirement::Everyone);
    }
}
