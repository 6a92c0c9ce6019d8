//! The bracket key table.
//!
//! Every recognized key has a long spelling and a short code. Both
//! directions come from the same enum, so a key added here is added to the
//! long-to-short and short-to-long maps together.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameKey {
    GroupSort,
    GroupName,
    Name,
    Description,
    Color,
    GradientType,
}

impl NameKey {
    /// All keys in encoding order.
    pub const ALL: [NameKey; 6] = [
        NameKey::GroupSort,
        NameKey::GroupName,
        NameKey::Name,
        NameKey::Description,
        NameKey::Color,
        NameKey::GradientType,
    ];

    pub fn long(self) -> &'static str {
        match self {
            Self::GroupSort => "groupSort",
            Self::GroupName => "groupName",
            Self::Name => "name",
            Self::Description => "description",
            Self::Color => "color",
            Self::GradientType => "gradientType",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Self::GroupSort => "GS",
            Self::GroupName => "G",
            Self::Name => "N",
            Self::Description => "D",
            Self::Color => "C",
            Self::GradientType => "CGT",
        }
    }

    pub fn spelling(self, abbreviated: bool) -> &'static str {
        if abbreviated {
            self.short()
        } else {
            self.long()
        }
    }

    pub fn from_short(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.short() == key)
    }

    pub fn from_long(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.long() == key)
    }

    /// Resolve either spelling. Short codes are checked first.
    pub fn lookup(key: &str) -> Option<Self> {
        Self::from_short(key).or_else(|| Self::from_long(key))
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long())
    }
}
