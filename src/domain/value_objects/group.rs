//! Group kind value object - the closed set of icon size/style variants
//!
//! Each variant maps to exactly one input subdirectory, one registration
//! token and one rendered size. The mapping is resolved once when groups are
//! discovered; nothing downstream re-derives it from directory names.

use serde::{Deserialize, Serialize};

/// Size/style variant of the icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// 24px solid icons
    Solid,
    /// 24px outline icons
    Outline,
    /// 20px solid icons
    Mini,
    /// 16px solid icons
    Micro,
}

impl GroupKind {
    /// All variants in discovery order
    pub const ALL: [GroupKind; 4] = [
        GroupKind::Solid,
        GroupKind::Outline,
        GroupKind::Mini,
        GroupKind::Micro,
    ];

    /// Input subdirectory, relative to the source root
    pub fn path(&self) -> &'static str {
        match self {
            GroupKind::Solid => "24/solid",
            GroupKind::Outline => "24/outline",
            GroupKind::Mini => "20/solid",
            GroupKind::Micro => "16/solid",
        }
    }

    /// Token used in tag names and class names
    pub fn token(&self) -> &'static str {
        match self {
            GroupKind::Solid => "solid",
            GroupKind::Outline => "outline",
            GroupKind::Mini => "mini",
            GroupKind::Micro => "micro",
        }
    }

    /// CSS length used for the host element's width and height
    pub fn size(&self) -> &'static str {
        match self {
            GroupKind::Solid | GroupKind::Outline => "1.5rem",
            GroupKind::Mini => "1.25rem",
            GroupKind::Micro => "1rem",
        }
    }

    /// Parse a token as written in config files
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.token() == token)
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
