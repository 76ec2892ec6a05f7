//! The alias table: what a player may type for each station.
//!
//! Keys are already normalized (lowercase, no surrounding whitespace).
//! Several aliases share a station; some stations have none.

/// Alias → raw station id pairs.
pub const MTR_ALIASES: &[(&str, usize)] = &[
    // Island Line
    ("central", 4),
    ("admiralty", 5),
    ("wan chai", 6),
    ("wanchai", 6),
    ("causeway bay", 7),
    ("tin hau", 8),
    ("fortress hill", 9),
    ("north point", 10),
    ("quarry bay", 11),
    ("kennedy town", 0),
    ("kennedy", 0),
    ("hku", 1),
    ("sai ying pun", 2),
    ("sheung wan", 3),
    ("tai koo", 12),
    ("taikoo", 12),
    ("sai wan ho", 13),
    ("shau kei wan", 14),
    ("heng fa chuen", 15),
    ("chai wan", 16),
    // Tsuen Wan Line
    ("tsim sha tsui", 17),
    ("tst", 17),
    ("jordan", 18),
    ("yau ma tei", 19),
    ("mong kok", 20),
    ("mongkok", 20),
    ("prince edward", 21),
    ("sham shui po", 22),
    ("cheung sha wan", 23),
    ("lai chi kok", 24),
    ("mei foo", 25),
    ("lai king", 26),
    ("kwai fong", 27),
    ("kwai hing", 28),
    ("tai wo hau", 29),
    ("tsuen wan", 30),
    // Kwun Tong Line
    ("whampoa", 31),
    ("ho man tin", 32),
    ("shek kip mei", 33),
    ("kowloon tong", 34),
    ("lok fu", 35),
    ("wong tai sin", 36),
    ("diamond hill", 37),
    ("choi hung", 38),
    ("kowloon bay", 39),
    ("ngau tau kok", 40),
    ("kwun tong", 41),
    ("lam tin", 42),
    ("yau tong", 43),
    ("tiu keng leng", 44),
    // Airport Express
    ("hong kong", 45),
    ("kowloon", 46),
    ("tsing yi", 47),
    ("airport", 48),
    ("asiaworld-expo", 49),
    ("asiaworld expo", 49),
    ("awe", 49),
    // Tseung Kwan O Line
    ("tseung kwan o", 54),
    ("tko", 54),
    ("hang hau", 55),
    ("po lam", 56),
    ("lohas park", 57),
    // Tung Chung Line
    ("olympic", 58),
    ("nam cheong", 59),
    ("sunny bay", 60),
    ("tung chung", 61),
    ("disneyland resort", 64),
    ("disneyland", 64),
    // East Rail Line
    ("exhibition centre", 65),
    ("hung hom", 66),
    ("mong kok east", 67),
    ("mke", 67),
    ("tai wai", 68),
    ("sha tin", 69),
    ("shatin", 69),
    ("fo tan", 70),
    ("racecourse", 71),
    ("university", 72),
    ("cuhk", 72),
    ("tai po market", 73),
    ("tai po", 73),
    ("tai wo", 74),
    ("fanling", 75),
    ("sheung shui", 76),
    ("lo wu", 77),
    ("lok ma chau", 78),
    // Tuen Ma Line
    ("tuen mun", 79),
    ("siu hong", 80),
    ("tin shui wai", 81),
    ("tsw", 81),
    ("long ping", 82),
    ("yuen long", 83),
    ("kam sheung road", 84),
    ("tsuen wan west", 85),
    ("austin", 86),
    ("east tsim sha tsui", 87),
    ("east tst", 87),
    ("to kwa wan", 88),
    ("sung wong toi", 89),
    ("kai tak", 90),
    ("hin keng", 91),
    ("che kung temple", 92),
    ("sha tin wai", 93),
    ("city one", 94),
    ("shek mun", 95),
    ("tai shui hang", 96),
    ("heng on", 95),
    ("ma on shan", 96),
    ("wu kai sha", 96),
    // South Island Line
    ("ocean park", 97),
    ("wong chuk hang", 97),
    ("lei tung", 97),
    ("south horizons", 97),
];
