//! Option key decomposition.
//!
//! tmux prints keys as `name`, `name[index]`, and, for values inherited from
//! a parent scope (`show-options -A`), with a trailing `*` on the name.

use std::fmt;

use thiserror::Error;

/// Marker tmux appends to inherited option names.
pub const INHERITED_MARKER: char = '*';

/// A key whose `[index]` suffix could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed option key: {0}")]
pub struct MalformedKey(pub String);

/// A decomposed option key.
///
/// # Examples
///
/// ```
/// use tmux_options_core::OptionKey;
///
/// let key = OptionKey::parse("command-alias[5]").unwrap();
/// assert_eq!(key.name, "command-alias");
/// assert_eq!(key.index, Some(5));
/// assert!(!key.inherited);
///
/// let key = OptionKey::parse("visual-activity*").unwrap();
/// assert_eq!(key.attribute_name(), "visual_activity");
/// assert!(key.inherited);
///
/// assert!(OptionKey::parse("status-format[x]").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionKey<'a> {
    /// Base name without index or inheritance marker.
    pub name: &'a str,
    pub index: Option<usize>,
    pub inherited: bool,
}

impl<'a> OptionKey<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, MalformedKey> {
        let malformed = || MalformedKey(raw.to_string());

        let mut rest = raw.trim();
        let mut inherited = false;
        if let Some(stripped) = rest.strip_suffix(INHERITED_MARKER) {
            rest = stripped;
            inherited = true;
        }

        let mut index = None;
        if let Some(open) = rest.find('[') {
            let suffix = rest[open + 1..].strip_suffix(']').ok_or_else(malformed)?;
            if suffix.is_empty() || !suffix.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(malformed());
            }
            index = Some(suffix.parse().map_err(|_| malformed())?);
            rest = &rest[..open];
        } else if rest.contains(']') {
            return Err(malformed());
        }

        if let Some(stripped) = rest.strip_suffix(INHERITED_MARKER) {
            rest = stripped;
            inherited = true;
        }

        if rest.is_empty() || rest.chars().any(char::is_whitespace) {
            return Err(malformed());
        }

        Ok(Self {
            name: rest,
            index,
            inherited,
        })
    }

    /// Name with the inheritance marker kept, used as the exploded map key.
    pub fn map_key(&self) -> String {
        if self.inherited {
            format!("{}{INHERITED_MARKER}", self.name)
        } else {
            self.name.to_string()
        }
    }

    /// Record field name: hyphens become underscores.
    pub fn attribute_name(&self) -> String {
        attribute_name(self.name)
    }
}

impl fmt::Display for OptionKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if self.inherited {
            write!(f, "{INHERITED_MARKER}")?;
        }
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// Converts a hyphenated tmux name to its record field name.
pub fn attribute_name(name: &str) -> String {
    name.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key() {
        let key = OptionKey::parse("status-keys").unwrap();
        assert_eq!(key.name, "status-keys");
        assert_eq!(key.index, None);
        assert!(!key.inherited);
        assert_eq!(key.map_key(), "status-keys");
    }

    #[test]
    fn test_inherited_marker_before_or_after_index() {
        let before = OptionKey::parse("status-format*[1]").unwrap();
        let after = OptionKey::parse("status-format[1]*").unwrap();
        assert_eq!(before, after);
        assert_eq!(before.name, "status-format");
        assert_eq!(before.index, Some(1));
        assert_eq!(before.map_key(), "status-format*");
        assert_eq!(before.to_string(), "status-format*[1]");
    }

    #[test]
    fn test_user_option_names_are_kept() {
        let key = OptionKey::parse("@custom-option").unwrap();
        assert_eq!(key.name, "@custom-option");
        assert_eq!(key.attribute_name(), "@custom_option");
    }

    #[test]
    fn test_malformed_suffixes() {
        for raw in ["name[", "name[]", "name[1", "name]1[", "name[-1]", "[3]", ""] {
            assert!(OptionKey::parse(raw).is_err(), "{raw} should be rejected");
        }
        assert!(OptionKey::parse("name[99999999999999999999999999]").is_err());
    }
}
