use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Creator, CreatorDraft, ValidationError};

/// Draft form shared by the create and edit screens. Holds the raw text of
/// the four editable fields plus focus and the last validation or submit
/// error, which stays visible until the user types again.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct CreatorForm {
    pub(crate) name: String,
    pub(crate) url: String,
    pub(crate) image_url: String,
    pub(crate) description: String,
    pub(crate) active: CreatorField,
    pub(crate) error: Option<String>,
}

/// Enumerates the fields within the form to drive focus management.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum CreatorField {
    Name,
    Url,
    ImageUrl,
    Description,
}

impl Default for CreatorField {
    fn default() -> Self {
        CreatorField::Name
    }
}

impl CreatorForm {
    /// Pre-populate the form from an existing creator when entering edit
    /// mode. An absent image URL becomes an empty field.
    pub(crate) fn from_creator(creator: &Creator) -> Self {
        Self {
            name: creator.name.clone(),
            url: creator.url.clone(),
            image_url: creator.image_url.clone().unwrap_or_default(),
            description: creator.description.clone(),
            active: CreatorField::Name,
            error: None,
        }
    }

    /// Move focus to the next field, wrapping after the description.
    pub(crate) fn cycle_field(&mut self) {
        self.active = match self.active {
            CreatorField::Name => CreatorField::Url,
            CreatorField::Url => CreatorField::ImageUrl,
            CreatorField::ImageUrl => CreatorField::Description,
            CreatorField::Description => CreatorField::Name,
        };
    }

    /// Move focus to the previous field.
    pub(crate) fn cycle_field_back(&mut self) {
        self.active = match self.active {
            CreatorField::Name => CreatorField::Description,
            CreatorField::Url => CreatorField::Name,
            CreatorField::ImageUrl => CreatorField::Url,
            CreatorField::Description => CreatorField::ImageUrl,
        };
    }

    /// Append a character to the active field, rejecting control input.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.field_mut(self.active).push(ch);
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        self.field_mut(self.active).pop();
    }

    /// Validate and normalize the inputs into a draft ready for the store.
    /// Name, URL, and description are required; a blank image URL is
    /// normalized to "absent" rather than stored as an empty string.
    pub(crate) fn parse_inputs(&self) -> Result<CreatorDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("Name"));
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingField("URL"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingField("Description"));
        }

        let image_url = self.image_url.trim();
        Ok(CreatorDraft {
            name: name.to_string(),
            url: url.to_string(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            description: description.to_string(),
        })
    }

    fn field(&self, field: CreatorField) -> &String {
        match field {
            CreatorField::Name => &self.name,
            CreatorField::Url => &self.url,
            CreatorField::ImageUrl => &self.image_url,
            CreatorField::Description => &self.description,
        }
    }

    fn field_mut(&mut self, field: CreatorField) -> &mut String {
        match field {
            CreatorField::Name => &mut self.name,
            CreatorField::Url => &mut self.url,
            CreatorField::ImageUrl => &mut self.image_url,
            CreatorField::Description => &mut self.description,
        }
    }

    /// Render a styled line for the form, with a placeholder for empty
    /// values and a highlight on the focused field.
    pub(crate) fn build_line(&self, field_name: &str, field: CreatorField) -> Line<'static> {
        let value = self.field(field);
        let is_active = self.active == field;

        let placeholder = match field {
            CreatorField::ImageUrl => "<optional>",
            _ => "<required>",
        };
        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Character count of the requested field, used for cursor placement.
    pub(crate) fn value_len(&self, field: CreatorField) -> usize {
        self.field(field).chars().count()
    }
}

/// State for confirming a permanent creator deletion. Carries the name so
/// the dialog can say exactly what is about to disappear.
#[derive(Debug, Clone)]
pub(crate) struct ConfirmDelete {
    pub(crate) id: i64,
    pub(crate) name: String,
}

impl ConfirmDelete {
    /// Build the confirmation state from the creator being considered.
    pub(crate) fn from(creator: &Creator) -> Self {
        Self {
            id: creator.id,
            name: creator.name.clone(),
        }
    }
}
