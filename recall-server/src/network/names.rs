//! Canonical station names.

use crate::domain::{STATION_COUNT, StationId};

/// Name shown for an identifier with no canonical name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Canonical display names, indexed by station id.
const MTR_NAMES: [&str; STATION_COUNT] = [
    // Island Line
    "Kennedy Town",
    "HKU",
    "Sai Ying Pun",
    "Sheung Wan",
    "Central",
    "Admiralty",
    "Wan Chai",
    "Causeway Bay",
    "Tin Hau",
    "Fortress Hill",
    "North Point",
    "Quarry Bay",
    "Tai Koo",
    "Sai Wan Ho",
    "Shau Kei Wan",
    "Heng Fa Chuen",
    "Chai Wan",
    // Tsuen Wan Line
    "Tsim Sha Tsui",
    "Jordan",
    "Yau Ma Tei",
    "Mong Kok",
    "Prince Edward",
    "Sham Shui Po",
    "Cheung Sha Wan",
    "Lai Chi Kok",
    "Mei Foo",
    "Lai King",
    "Kwai Fong",
    "Kwai Hing",
    "Tai Wo Hau",
    "Tsuen Wan",
    // Kwun Tong Line
    "Whampoa",
    "Ho Man Tin",
    "Shek Kip Mei",
    "Kowloon Tong",
    "Lok Fu",
    "Wong Tai Sin",
    "Diamond Hill",
    "Choi Hung",
    "Kowloon Bay",
    "Ngau Tau Kok",
    "Kwun Tong",
    "Lam Tin",
    "Yau Tong",
    "Tiu Keng Leng",
    // Airport Express
    "Hong Kong",
    "Kowloon",
    "Tsing Yi",
    "Airport",
    "AsiaWorld-Expo",
    // Tseung Kwan O Line (50-53 are interchanges with no alias of their own)
    "North Point",
    "Quarry Bay",
    "Yau Tong",
    "Tiu Keng Leng",
    "Tseung Kwan O",
    "Hang Hau",
    "Po Lam",
    "LOHAS Park",
    // Tung Chung Line
    "Olympic",
    "Nam Cheong",
    "Sunny Bay",
    "Tung Chung",
    "Tsing Yi",
    UNKNOWN_NAME,
    "Disneyland Resort",
    // East Rail Line
    "Exhibition Centre",
    "Hung Hom",
    "Mong Kok East",
    "Tai Wai",
    "Sha Tin",
    "Fo Tan",
    "Racecourse",
    "University",
    "Tai Po Market",
    "Tai Wo",
    "Fanling",
    "Sheung Shui",
    "Lo Wu",
    "Lok Ma Chau",
    // Tuen Ma Line
    "Tuen Mun",
    "Siu Hong",
    "Tin Shui Wai",
    "Long Ping",
    "Yuen Long",
    "Kam Sheung Road",
    "Tsuen Wan West",
    "Austin",
    "East Tsim Sha Tsui",
    "To Kwa Wan",
    "Sung Wong Toi",
    "Kai Tak",
    "Hin Keng",
    "Che Kung Temple",
    "Sha Tin Wai",
    "City One",
    "Shek Mun",
    "Tai Shui Hang",
    // South Island Line
    "Ocean Park",
];

/// Station id → canonical name lookup.
#[derive(Debug, Clone)]
pub struct StationNames {
    names: Vec<&'static str>,
}

impl StationNames {
    /// The MTR name table.
    pub fn mtr() -> Self {
        Self {
            names: MTR_NAMES.to_vec(),
        }
    }

    /// Build a name table from an explicit list, indexed by position.
    pub fn from_names(names: Vec<&'static str>) -> Self {
        Self { names }
    }

    /// Look up the canonical name, falling back to [`UNKNOWN_NAME`].
    pub fn get(&self, id: StationId) -> &'static str {
        self.names.get(id.index()).copied().unwrap_or(UNKNOWN_NAME)
    }

    /// Number of names in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
