//! Help menu.

use super::{find, Category, CommandSpec, Invocation, COMMANDS};
use crate::{
    error::AppError,
    model::notice::{Notice, Tone},
    util::parse,
};

pub async fn help(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let prefix = invocation.config.command_prefix.as_str();
    let (name, _) = parse::split_first(args);

    let notice = match name {
        None => overview(prefix),
        Some(name) => match find(name) {
            Some(spec) => detail(spec, prefix),
            None => Notice::error(format!("No command called \"{}\" found.", name)),
        },
    };

    invocation.reply(notice).await?;
    Ok(())
}

/// Builds the help overview listing every command by category.
pub fn overview(prefix: &str) -> Notice {
    let notice = Notice::titled(
        Tone::Info,
        "📚 Universx MC Bot Help Menu",
        format!(
            "Welcome to the help menu! Use `{}help <command>` for detailed information.",
            prefix
        ),
    );

    Category::ALL
        .iter()
        .fold(notice, |notice, category| {
            let lines = COMMANDS
                .iter()
                .filter(|spec| spec.category == Some(*category))
                .map(|spec| {
                    let names = std::iter::once(spec.name)
                        .chain(spec.aliases.iter().copied())
                        .map(|name| format!("`{}`", name))
                        .collect::<Vec<_>>()
                        .join(" / ");
                    format!("{} – {}", names, spec.summary)
                })
                .collect::<Vec<_>>()
                .join("\n");
            notice.field(category.heading(), lines, false)
        })
        .footer(format!(
            "Use {}help <command> to view detailed help for a command.",
            prefix
        ))
}

/// Builds the detailed help for one command.
pub fn detail(spec: &CommandSpec, prefix: &str) -> Notice {
    let notice = Notice::titled(Tone::Info, format!("Command: {}", spec.name), spec.help)
        .field("Usage", format!("`{}`", spec.usage_line(prefix)), false);

    if spec.aliases.is_empty() {
        notice
    } else {
        notice.field(
            "Aliases",
            spec.aliases
                .iter()
                .map(|alias| format!("`{}`", alias))
                .collect::<Vec<_>>()
                .join(", "),
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_every_category() {
        let notice = overview("u!");

        assert_eq!(notice.fields.len(), Category::ALL.len());
        assert_eq!(
            notice.field_value("🎭 Auto-Role"),
            Some("`setautorole` – Set role for new members")
        );
        assert!(notice
            .field_value("👤 Profile")
            .unwrap()
            .starts_with("`profile` / `p` – View profile"));
        assert!(notice.fields.iter().all(|field| !field.value.contains("`help`")));
    }

    #[test]
    fn detail_shows_usage_and_aliases() {
        let notice = detail(find("p").unwrap(), "u!");

        assert_eq!(notice.title.as_deref(), Some("Command: profile"));
        assert_eq!(notice.field_value("Usage"), Some("`u!profile [member]`"));
        assert_eq!(notice.field_value("Aliases"), Some("`p`"));

        let notice = detail(find("ping").unwrap(), "u!");
        assert_eq!(notice.field_value("Aliases"), None);
    }
}
