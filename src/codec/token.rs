//! Page token grammar.
//!
//! ```text
//! token        = page-info [ "-" listener-info [ "-" segment ]* ]
//! page-info    = [ alias "." ] page-id [ "." version ]
//! listener-info = name [ "." behavior-index ]
//! ```
//!
//! # Responsibilities
//! - Parse a token into page coordinates and an optional listener call
//! - Render the canonical (minimal) token for the same values
//!
//! # Design Decisions
//! - Pure: no registry or resolver access here
//! - Numeric fields are `[0-9]+` that fit the target type; anything else
//!   rejects the whole token, never a partial parse
//! - A three-part all-numeric page info (`4.5.6`) is rejected
//! - An alias is never purely numeric; in the two-part shape it also may
//!   not start with a digit, so `4x.5` is a malformed id

use std::fmt;
use std::str::FromStr;

use crate::codec::error::{EncodeError, EncodeResult, NoMatchReason};
use crate::codec::handler::ComponentPath;

const TOKEN_SEPARATOR: char = '-';
const FIELD_SEPARATOR: char = '.';
const PATH_SEPARATOR: char = ':';

/// Characters the Url wire form cannot carry inside a parameter name.
const WIRE_RESERVED: [char; 3] = ['&', '=', '#'];

/// Page coordinates carried by a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken {
    pub alias: Option<String>,
    pub page_id: u64,
    pub version: u64,
}

impl PageToken {
    pub fn new(alias: Option<String>, page_id: u64, version: u64) -> Self {
        Self {
            alias,
            page_id,
            version,
        }
    }
}

/// Listener name and optional behavior index carried by a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerToken {
    pub interface_name: String,
    pub behavior_index: Option<u32>,
}

/// A fully parsed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedToken {
    Render(PageToken),
    Listener {
        page: PageToken,
        listener: ListenerToken,
        component_path: ComponentPath,
    },
}

impl ParsedToken {
    pub fn page(&self) -> &PageToken {
        match self {
            ParsedToken::Render(page) => page,
            ParsedToken::Listener { page, .. } => page,
        }
    }

    /// Render the canonical token, rejecting values that would not parse back.
    pub fn to_token(&self) -> EncodeResult<String> {
        match self {
            ParsedToken::Render(page) => format_page_info(page),
            ParsedToken::Listener {
                page,
                listener,
                component_path,
            } => {
                let mut token = format_page_info(page)?;
                token.push(TOKEN_SEPARATOR);
                token.push_str(&format_listener_info(listener)?);

                if component_path.segments().is_empty() {
                    return Err(EncodeError::Empty { field: "component path" });
                }
                for segment in component_path.segments() {
                    check_field(
                        "component path segment",
                        segment,
                        &[TOKEN_SEPARATOR, PATH_SEPARATOR],
                    )?;
                    token.push(TOKEN_SEPARATOR);
                    token.push_str(segment);
                }
                Ok(token)
            }
        }
    }
}

impl FromStr for ParsedToken {
    type Err = NoMatchReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.alias, self.version) {
            (Some(alias), version) => write!(f, "{}.{}.{}", alias, self.page_id, version),
            (None, 0) => write!(f, "{}", self.page_id),
            (None, version) => write!(f, "{}.{}", self.page_id, version),
        }
    }
}

/// Parse a token into its page and listener parts.
pub fn parse_token(token: &str) -> Result<ParsedToken, NoMatchReason> {
    let mut parts = token.split(TOKEN_SEPARATOR);
    // split always yields at least one item
    let page = parse_page_info(parts.next().unwrap_or_default())?;

    let Some(listener_info) = parts.next() else {
        return Ok(ParsedToken::Render(page));
    };
    let listener = parse_listener_info(listener_info)?;

    let segments: Vec<&str> = parts.collect();
    if segments.is_empty()
        || segments
            .iter()
            .any(|s| s.is_empty() || s.contains(PATH_SEPARATOR))
    {
        return Err(NoMatchReason::MalformedComponentPath);
    }

    Ok(ParsedToken::Listener {
        page,
        listener,
        component_path: ComponentPath::new(segments),
    })
}

fn parse_page_info(info: &str) -> Result<PageToken, NoMatchReason> {
    let parts: Vec<&str> = info.split(FIELD_SEPARATOR).collect();
    let malformed = NoMatchReason::MalformedPageInfo;

    match parts.as_slice() {
        [id] => {
            let page_id = parse_numeric(id).ok_or(malformed)?;
            Ok(PageToken::new(None, page_id, 0))
        }
        [id, version] if is_numeric_literal(id) => {
            let page_id = parse_numeric(id).ok_or(malformed.clone())?;
            let version = parse_numeric(version).ok_or(malformed)?;
            Ok(PageToken::new(None, page_id, version))
        }
        [alias, id] if is_short_form_alias(alias) => {
            let page_id = parse_numeric(id).ok_or(malformed)?;
            Ok(PageToken::new(Some(alias.to_string()), page_id, 0))
        }
        [alias, id, version] if is_alias(alias) => {
            let page_id = parse_numeric(id).ok_or(malformed.clone())?;
            let version = parse_numeric(version).ok_or(malformed)?;
            Ok(PageToken::new(Some(alias.to_string()), page_id, version))
        }
        _ => Err(malformed),
    }
}

fn parse_listener_info(info: &str) -> Result<ListenerToken, NoMatchReason> {
    let malformed = NoMatchReason::MalformedListenerInfo;
    let mut pieces = info.split(FIELD_SEPARATOR);

    let interface_name = pieces.next().unwrap_or_default();
    if interface_name.is_empty() {
        return Err(malformed);
    }
    let behavior_index = match pieces.next() {
        Some(index) => Some(parse_numeric(index).ok_or(malformed.clone())?),
        None => None,
    };
    if pieces.next().is_some() {
        return Err(malformed);
    }

    Ok(ListenerToken {
        interface_name: interface_name.to_string(),
        behavior_index,
    })
}

/// Leading part of `alias.id.version`: anything non-empty that is not a number.
fn is_alias(s: &str) -> bool {
    !s.is_empty() && !is_numeric_literal(s)
}

/// Leading part of `alias.id`. It competes with `id.version`, so a leading
/// digit means a malformed id (`4x.5`) rather than an alias.
fn is_short_form_alias(s: &str) -> bool {
    is_alias(s) && s.chars().next().is_some_and(|c| !c.is_ascii_digit())
}

fn is_numeric_literal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_numeric<T: FromStr>(s: &str) -> Option<T> {
    if is_numeric_literal(s) {
        s.parse().ok()
    } else {
        None
    }
}

fn format_page_info(page: &PageToken) -> EncodeResult<String> {
    if let Some(alias) = &page.alias {
        check_field("alias", alias, &[TOKEN_SEPARATOR, FIELD_SEPARATOR])?;
        if !is_alias(alias) {
            return Err(EncodeError::InvalidAlias(alias.clone()));
        }
    }
    Ok(page.to_string())
}

fn format_listener_info(listener: &ListenerToken) -> EncodeResult<String> {
    check_field(
        "listener interface",
        &listener.interface_name,
        &[TOKEN_SEPARATOR, FIELD_SEPARATOR],
    )?;
    Ok(match listener.behavior_index {
        Some(index) => format!("{}{}{}", listener.interface_name, FIELD_SEPARATOR, index),
        None => listener.interface_name.clone(),
    })
}

fn check_field(field: &'static str, value: &str, reserved: &[char]) -> EncodeResult<()> {
    if value.is_empty() {
        return Err(EncodeError::Empty { field });
    }
    let found = value
        .chars()
        .find(|c| reserved.contains(c) || WIRE_RESERVED.contains(c));
    match found {
        Some(reserved) => Err(EncodeError::ReservedCharacter {
            field,
            value: value.to_string(),
            reserved,
        }),
        None => Ok(()),
    }
}
