use crate::error::RecordError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(RecordError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(AppointmentStatus {
    Programmato => "programmato",
    Svolto => "svolto",
    Annullato => "annullato",
    Recuperato => "recuperato",
});

impl AppointmentStatus {
    /// Lenient parse for collaborator data (spreadsheet imports, legacy
    /// rows): lowercase, trim, inner whitespace becomes `_`, the historical
    /// label "da recuperare" maps to `Recuperato`, anything unrecognized
    /// falls back to `Programmato`.
    pub fn from_raw(raw: &str) -> Self {
        let mut normalized = raw
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        if normalized == "da_recuperare" {
            normalized = "recuperato".to_string();
        }
        normalized.parse().unwrap_or(Self::Programmato)
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        Self::Programmato
    }
}
