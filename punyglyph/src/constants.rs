use idna::Config;
use phf::phf_map;

lazy_static! {

    /// IDNA configuration used for every candidate encoding.
    ///
    /// UTS #46 transitional processing without STD3 ASCII rules or hyphen
    /// checks, which matches IDNA2003 ToASCII: `ß` maps to `ss`, and
    /// underscores or edge hyphens pass through. Label lengths are checked
    /// separately in `encode` so that the rejection reason can be reported.
    pub static ref IDNA_CONFIG: Config = Config::default()
        .use_std3_ascii_rules(false)
        .transitional_processing(true)
        .check_hyphens(false)
        .verify_dns_length(false);
}

/// Maximum length of a single DNS label, in octets.
pub const MAX_LABEL_LEN: usize = 63;

/// Seed table of Latin characters and the Unicode look-alikes they are
/// swapped for. Glyphs are kept in a fixed order so that enumeration is
/// reproducible.
///
/// Every entry must be non-empty and must not contain its own key.
pub static HOMOGLYPHS: phf::Map<char, &'static str> = phf_map! {
    // Cyrillic, IPA
    'a' => "\u{0430}\u{0251}\u{2c65}",
    // Cyrillic, diacritics
    'e' => "\u{0435}\u{0117}\u{00eb}",
    'i' => "\u{0456}\u{01d0}\u{0131}",
    'o' => "\u{043e}\u{00f8}\u{00f5}",
    'y' => "\u{0443}\u{04af}\u{00ff}",
    'c' => "\u{0441}\u{010b}\u{010d}",
    'm' => "\u{043c}\u{1e43}",
    't' => "\u{0442}\u{0163}",
    's' => "\u{0455}\u{0161}",
    // Diacritics only
    'n' => "\u{00f1}\u{0144}",
    // IPA, diacritics
    'g' => "\u{0261}\u{011f}",
    // Greek, diacritics
    'u' => "\u{03bc}\u{00fc}",
    // Icelandic, diacritics
    'd' => "\u{00f0}\u{0111}",
};
