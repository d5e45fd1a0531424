//! Platform-neutral user-facing notices.
//!
//! Services describe what the bot wants to tell a user as a `Notice`; the bot layer
//! renders it into a Discord embed. Keeping services free of embed builders lets them
//! be tested by inspecting plain data.

/// Colour family of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Caution,
    Warning,
    Error,
    /// Explicit RGB colour, e.g. a member's top role colour.
    Colour(u32),
}

impl Tone {
    /// RGB value used for the embed side bar.
    pub fn colour(self) -> u32 {
        match self {
            Tone::Info => 0x3498DB,
            Tone::Success => 0x2ECC71,
            Tone::Caution => 0xE67E22,
            Tone::Warning => 0xFEE75C,
            Tone::Error => 0xE74C3C,
            Tone::Colour(rgb) => rgb,
        }
    }
}

/// A single name/value field of a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A message the bot sends to a channel or user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tone: Tone,
    pub fields: Vec<NoticeField>,
    pub thumbnail: Option<String>,
    pub footer: Option<String>,
}

impl Notice {
    /// Creates an empty notice with the given tone.
    pub fn new(tone: Tone) -> Self {
        Self {
            title: None,
            description: None,
            tone,
            fields: Vec::new(),
            thumbnail: None,
            footer: None,
        }
    }

    /// Creates a notice with a title and description.
    ///
    /// # Arguments
    /// - `tone` - Colour family of the notice
    /// - `title` - Heading line
    /// - `description` - Body text
    ///
    /// # Returns
    /// - `Notice` - Notice without fields, thumbnail, or footer
    pub fn titled(tone: Tone, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(tone).title(title).description(description)
    }

    /// Shorthand for a red "❌ Error" notice.
    pub fn error(description: impl Into<String>) -> Self {
        Self::titled(Tone::Error, "❌ Error", description)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(NoticeField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn thumbnail(mut self, url: Option<String>) -> Self {
        self.thumbnail = url;
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    /// Looks up a field value by name.
    #[cfg(test)]
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}
