use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    English,
    Sinhala,
    Tamil,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::English, Lang::Sinhala, Lang::Tamil];

    /// Two-letter code used on the command line and in table file names.
    pub fn code(self) -> &'static str {
        match self {
            Lang::English => "en",
            Lang::Sinhala => "si",
            Lang::Tamil => "ta",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0}")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Lang::English),
            "si" | "sinhala" => Ok(Lang::Sinhala),
            "ta" | "tamil" => Ok(Lang::Tamil),
            _ => Err(UnknownLang(s.to_string())),
        }
    }
}

/// Gender hint for person names.
///
/// On a rule, `Unspecified` means the rule fires for any requested gender.
/// As a request, `Unspecified` routes dictionary lookups to the general
/// vocabulary instead of the person-name map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
}

impl Gender {
    /// Numeric code used in rule files: 0 unspecified, 1 male, 2 female.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Gender::Unspecified),
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            _ => None,
        }
    }

    /// Whether a rule carrying this selector may fire for `requested`.
    pub fn admits(self, requested: Gender) -> bool {
        self == Gender::Unspecified || self == requested
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Unspecified => "u",
            Gender::Male => "m",
            Gender::Female => "f",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "unknown" | "unspecified" => Ok(Gender::Unspecified),
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}
