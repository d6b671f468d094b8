use std::str::FromStr;

use super::denmark::Denmark;
use super::finland::Finland;
use super::germany::Germany;
use super::norway::Norway;
use super::sweden::Sweden;
use super::HolidayRules;
use pc_core::errors::{Error, Result};

/// A country with built-in holiday rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Country {
    /// Denmark (`DK`).
    Denmark,
    /// Finland (`FI`).
    Finland,
    /// Germany (`DE`).
    Germany,
    /// Norway (`NO`).
    Norway,
    /// Sweden (`SE`).
    Sweden,
}

struct Entry {
    country: Country,
    name: &'static str,
    code: &'static str,
    rules: &'static dyn HolidayRules,
}

static TABLE: [Entry; 5] = [
    Entry {
        country: Country::Denmark,
        name: "Denmark",
        code: "DK",
        rules: &Denmark,
    },
    Entry {
        country: Country::Finland,
        name: "Finland",
        code: "FI",
        rules: &Finland,
    },
    Entry {
        country: Country::Germany,
        name: "Germany",
        code: "DE",
        rules: &Germany,
    },
    Entry {
        country: Country::Norway,
        name: "Norway",
        code: "NO",
        rules: &Norway,
    },
    Entry {
        country: Country::Sweden,
        name: "Sweden",
        code: "SE",
        rules: &Sweden,
    },
];

impl Country {
    /// Every supported country.
    pub const ALL: [Country; 5] = [
        Country::Denmark,
        Country::Finland,
        Country::Germany,
        Country::Norway,
        Country::Sweden,
    ];

    /// Look a country up by English name or ISO 3166 alpha-2 code,
    /// ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    /// [`Error::UnsupportedCountry`] if no built-in rule set matches.
    pub fn from_name(name: &str) -> Result<Self> {
        let key = name.trim();
        TABLE
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(key) || e.code.eq_ignore_ascii_case(key))
            .map(|e| e.country)
            .ok_or_else(|| Error::UnsupportedCountry(name.to_owned()))
    }

    fn entry(&self) -> &'static Entry {
        &TABLE[*self as usize]
    }

    /// English name.
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// ISO 3166 alpha-2 code.
    pub fn code(&self) -> &'static str {
        self.entry().code
    }

    /// The holiday rules for this country.
    pub fn rules(&self) -> &'static dyn HolidayRules {
        self.entry().rules
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Country::from_name(s)
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
