//! Fixed dialect and voice catalogs.
//!
//! The generation service accepts a closed set of regional dialect labels and
//! synthetic speaker identities. Both sets are part of the service contract,
//! so they are typed here rather than fetched at runtime.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Regional language variant selectable for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Msa,
    Egyptian,
    Gulf,
    Levantine,
    Maghrebi,
}

impl Dialect {
    /// All dialects, in the order the service presents them.
    pub fn all() -> [Dialect; 5] {
        [
            Dialect::Msa,
            Dialect::Egyptian,
            Dialect::Gulf,
            Dialect::Levantine,
            Dialect::Maghrebi,
        ]
    }

    /// Wire code sent to the service.
    pub fn code(&self) -> &'static str {
        match self {
            Dialect::Msa => "msa",
            Dialect::Egyptian => "egyptian",
            Dialect::Gulf => "gulf",
            Dialect::Levantine => "levantine",
            Dialect::Maghrebi => "maghrebi",
        }
    }

    /// Native display label.
    pub fn label(&self) -> &'static str {
        match self {
            Dialect::Msa => "العربية الفصحى",
            Dialect::Egyptian => "المصرية",
            Dialect::Gulf => "الخليجية",
            Dialect::Levantine => "الشامية",
            Dialect::Maghrebi => "المغاربية",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dialect::Msa => "Modern Standard Arabic",
            Dialect::Egyptian => "Egyptian Arabic",
            Dialect::Gulf => "Gulf Arabic",
            Dialect::Levantine => "Levantine Arabic",
            Dialect::Maghrebi => "Maghrebi Arabic",
        }
    }
}

impl FromStr for Dialect {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "msa" => Ok(Dialect::Msa),
            "egyptian" => Ok(Dialect::Egyptian),
            "gulf" => Ok(Dialect::Gulf),
            "levantine" => Ok(Dialect::Levantine),
            "maghrebi" => Ok(Dialect::Maghrebi),
            other => Err(ClientError::UnknownDialect(other.to_string())),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Speaker gender, as declared by the voice catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Male,
    Female,
}

/// Synthetic speaker identity selectable for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Male1,
    Female1,
    Male2,
    Female2,
}

impl Voice {
    /// All voices, in the order the service presents them.
    pub fn all() -> [Voice; 4] {
        [Voice::Male1, Voice::Female1, Voice::Male2, Voice::Female2]
    }

    /// Wire id sent to the service.
    pub fn id(&self) -> &'static str {
        match self {
            Voice::Male1 => "male1",
            Voice::Female1 => "female1",
            Voice::Male2 => "male2",
            Voice::Female2 => "female2",
        }
    }

    /// Speaker name as shown to users.
    pub fn name(&self) -> &'static str {
        match self {
            Voice::Male1 => "أحمد",
            Voice::Female1 => "فاطمة",
            Voice::Male2 => "محمد",
            Voice::Female2 => "عائشة",
        }
    }

    pub fn gender(&self) -> VoiceGender {
        match self {
            Voice::Male1 | Voice::Male2 => VoiceGender::Male,
            Voice::Female1 | Voice::Female2 => VoiceGender::Female,
        }
    }

    /// Dialect the voice was recorded for.
    pub fn native_dialect(&self) -> Dialect {
        match self {
            Voice::Male1 | Voice::Female1 => Dialect::Msa,
            Voice::Male2 => Dialect::Egyptian,
            Voice::Female2 => Dialect::Gulf,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Voice::Male1 => "صوت ذكوري هادئ",
            Voice::Female1 => "صوت أنثوي واضح",
            Voice::Male2 => "صوت ذكوري قوي",
            Voice::Female2 => "صوت أنثوي دافئ",
        }
    }
}

impl FromStr for Voice {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male1" => Ok(Voice::Male1),
            "female1" => Ok(Voice::Female1),
            "male2" => Ok(Voice::Male2),
            "female2" => Ok(Voice::Female2),
            other => Err(ClientError::UnknownVoice(other.to_string())),
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
