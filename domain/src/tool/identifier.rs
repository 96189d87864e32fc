//! Canonical tool identifiers and alias derivation.
//!
//! Every registered tool is indexed under exactly one canonical identifier,
//! `"<adapter-id>:<tool-name>"` in kebab-case, plus at most one derived
//! alias (the snake_case variant). Lookups always normalize to canonical
//! before any policy or audit logic runs, so aliases are never first-class.
//!
//! A tool name must use a single separator convention internally:
//! exclusively hyphens or exclusively underscores, never both. Alias
//! derivation assumes one canonical form plus one generated variant, so a
//! mixed name is a registration-time error.

/// Separator between the adapter id and the tool name in a canonical id.
pub const ID_SEPARATOR: char = ':';

/// Why a tool or adapter name was rejected at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty.
    Empty,
    /// Name mixes hyphens and underscores.
    MixedSeparators,
    /// Name contains a character outside `[a-z0-9-_]`.
    InvalidCharacter(char),
    /// Name begins or ends with a separator.
    EdgeSeparator,
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameError::Empty => write!(f, "name is empty"),
            NameError::MixedSeparators => {
                write!(f, "name mixes hyphen and underscore separators")
            }
            NameError::InvalidCharacter(c) => write!(f, "invalid character '{}'", c),
            NameError::EdgeSeparator => write!(f, "name starts or ends with a separator"),
        }
    }
}

/// Validate a tool (or adapter) name against the single-separator rule.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    for c in name.chars() {
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_') {
            return Err(NameError::InvalidCharacter(c));
        }
    }
    if name.starts_with(['-', '_']) || name.ends_with(['-', '_']) {
        return Err(NameError::EdgeSeparator);
    }
    if name.contains('-') && name.contains('_') {
        return Err(NameError::MixedSeparators);
    }
    Ok(())
}

/// Kebab-case normalization (underscores become hyphens).
pub fn to_kebab(name: &str) -> String {
    name.replace('_', "-")
}

/// Snake_case normalization (hyphens become underscores).
pub fn to_snake(name: &str) -> String {
    name.replace('-', "_")
}

/// Build the canonical identifier for a tool.
///
/// Both parts are normalized to kebab-case, so canonical ids are globally
/// unique by construction: a collision can only arise from a duplicate tool
/// name inside one adapter.
pub fn canonical_id(adapter_id: &str, tool_name: &str) -> String {
    format!("{}{}{}", to_kebab(adapter_id), ID_SEPARATOR, to_kebab(tool_name))
}

/// Derive the snake_case alias of a canonical id.
///
/// Returns `None` when the name carries no separators (the alias would be
/// identical to the canonical id).
pub fn alias_of(canonical: &str) -> Option<String> {
    let alias = to_snake(canonical);
    if alias == canonical { None } else { Some(alias) }
}

/// Split an identifier into `(adapter_id, tool_name)`.
pub fn split_id(id: &str) -> Option<(&str, &str)> {
    let (adapter, tool) = id.split_once(ID_SEPARATOR)?;
    if adapter.is_empty() || tool.is_empty() {
        return None;
    }
    Some((adapter, tool))
}
