//! Bead vendors and their per-color code records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A bead product line with its own color numbering scheme.
///
/// Serialized with the vendor's own name, which is also the key used in the
/// palette source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vendor {
    #[serde(rename = "MARD")]
    Mard,
    #[serde(rename = "COCO")]
    Coco,
    #[serde(rename = "漫漫")]
    Manman,
    #[serde(rename = "盼盼")]
    Panpan,
    #[serde(rename = "咪小窝")]
    Mixiaowo,
}

impl Vendor {
    /// All vendors in display order.
    pub const ALL: [Vendor; 5] = [
        Vendor::Mard,
        Vendor::Coco,
        Vendor::Manman,
        Vendor::Panpan,
        Vendor::Mixiaowo,
    ];

    /// The vendor's name as used in palette files.
    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::Mard => "MARD",
            Vendor::Coco => "COCO",
            Vendor::Manman => "漫漫",
            Vendor::Panpan => "盼盼",
            Vendor::Mixiaowo => "咪小窝",
        }
    }

    /// ASCII alias, handy on command lines.
    pub fn alias(self) -> &'static str {
        match self {
            Vendor::Mard => "mard",
            Vendor::Coco => "coco",
            Vendor::Manman => "manman",
            Vendor::Panpan => "panpan",
            Vendor::Mixiaowo => "mixiaowo",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vendor::ALL
            .into_iter()
            .find(|v| s == v.as_str() || s.eq_ignore_ascii_case(v.alias()))
            .ok_or_else(|| {
                let known: Vec<&str> = Vendor::ALL.iter().map(|v| v.alias()).collect();
                format!("unknown vendor '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Vendor → code mapping for a single color.
///
/// Coverage is not validated: a palette record missing a vendor simply has
/// no code for it, and [`get`](Self::get) returns `None`. Unknown vendor keys
/// in the source are dropped while deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VendorCodes(BTreeMap<Vendor, String>);

impl VendorCodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same code for every vendor.
    pub fn uniform(code: &str) -> Self {
        Self(Vendor::ALL.iter().map(|&v| (v, code.to_string())).collect())
    }

    /// Builder-style insert.
    pub fn with(mut self, vendor: Vendor, code: impl Into<String>) -> Self {
        self.0.insert(vendor, code.into());
        self
    }

    pub fn insert(&mut self, vendor: Vendor, code: impl Into<String>) {
        self.0.insert(vendor, code.into());
    }

    /// The code this vendor uses for the color, if the record has one.
    pub fn get(&self, vendor: Vendor) -> Option<&str> {
        self.0.get(&vendor).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vendor, &str)> {
        self.0.iter().map(|(&v, c)| (v, c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Vendor, String)> for VendorCodes {
    fn from_iter<T: IntoIterator<Item = (Vendor, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for VendorCodes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut codes = VendorCodes::new();
        for (key, code) in raw {
            match key.parse::<Vendor>() {
                Ok(vendor) => codes.insert(vendor, code),
                Err(_) => tracing::debug!(vendor = %key, "Ignoring unknown vendor key"),
            }
        }
        Ok(codes)
    }
}
