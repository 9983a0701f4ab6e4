//! Enumerations accepted as typed operation arguments.
//!
//! Operations receive enum arguments as text (`"female"`, `"https"`).
//! Each enum implements [`Enumerable`], which provides parsing with an
//! error listing the accepted values, and the full variant list so a
//! random source can pick one when the caller leaves the argument out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error for a value that is not a member of an enumeration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}, expected one of: {}", .accepted.join(", "))]
pub struct NonEnumerableError {
    /// Enumeration name
    pub kind: &'static str,
    /// Rejected value
    pub value: String,
    /// Accepted values
    pub accepted: Vec<&'static str>,
}

/// A closed set of string-named variants.
pub trait Enumerable: Copy + Sized + 'static {
    /// Human-readable name of the enumeration.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Canonical string form of the variant.
    fn as_str(&self) -> &'static str;

    /// Parse a variant from its canonical form (case-insensitive).
    fn parse(value: &str) -> Result<Self, NonEnumerableError> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| NonEnumerableError {
                kind: Self::KIND,
                value: value.to_string(),
                accepted: Self::ALL.iter().map(|v| v.as_str()).collect(),
            })
    }
}

macro_rules! enumerable {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl Enumerable for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = NonEnumerableError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Enumerable>::parse(s)
            }
        }
    };
}

enumerable! {
    /// Gender of a generated person.
    Gender ("gender") {
        Female => "female",
        Male => "male",
    }
}

impl Gender {
    /// ISO/IEC 5218 code of the gender.
    pub fn iso5218(&self) -> i64 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }
}

enumerable! {
    /// Kind of honorific title.
    TitleType ("title type") {
        Typical => "typical",
        Academic => "academic",
    }
}

enumerable! {
    /// Port range classes.
    PortRange ("port range") {
        All => "all",
        WellKnown => "well_known",
        Ephemeral => "ephemeral",
        Registered => "registered",
    }
}

impl PortRange {
    /// Inclusive bounds of the range.
    pub fn bounds(&self) -> (u16, u16) {
        match self {
            Self::All => (1, 65535),
            Self::WellKnown => (1, 1023),
            Self::Ephemeral => (49152, 65535),
            Self::Registered => (1024, 49151),
        }
    }
}

enumerable! {
    /// Top-level domain classes.
    TldType ("tld type") {
        Cctld => "cctld",
        Gtld => "gtld",
        Geotld => "geotld",
        Utld => "utld",
        Stld => "stld",
    }
}

enumerable! {
    /// URL schemes.
    UrlScheme ("url scheme") {
        Http => "http",
        Https => "https",
        Ftp => "ftp",
        Sftp => "sftp",
        Ws => "ws",
        Wss => "wss",
    }
}

enumerable! {
    /// Top-level MIME type families.
    MimeType ("mime type") {
        Application => "application",
        Audio => "audio",
        Image => "image",
        Message => "message",
        Text => "text",
        Video => "video",
    }
}

enumerable! {
    /// Operating system flavour used to build file-system paths.
    Platform ("platform") {
        Linux => "linux",
        Darwin => "darwin",
        Windows => "windows",
    }
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Darwin
        } else {
            Self::Linux
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
