//! Static catalog of the electrical panel symbols the extractor can detect.
//!
//! Symbol identifiers are the internal keys used throughout the store and
//! the aggregation engine; the extractor reports symbols under their API
//! identifier (underscored display name), so lookup has to tolerate a few
//! spelling variants.

/// Display metadata for one panel symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Internal identifier, stable across the catalog.
    pub id: &'static str,
    /// Human-readable name shown in tables.
    pub name: &'static str,
    /// Identifier format used by the extraction API (underscores for spaces).
    pub api_id: &'static str,
    /// Icon asset filename.
    pub icon_file_name: &'static str,
}

pub const SYMBOLS: &[Symbol] = &[
    Symbol {
        id: "KATKAISIJA_3_4",
        name: "3 ja 4-NAP KATKAISIJA",
        api_id: "3_ja_4-NAP_KATKAISIJA",
        icon_file_name: "3 ja 4-NAP KATKAISIJA icon.svg",
    },
    Symbol {
        id: "KYTKINVAROKE_3",
        name: "3-NAP KYTKINVAROKE KVKE",
        api_id: "3-NAP_KYTKINVAROKE_KVKE",
        icon_file_name: "3-NAP KYTKINVAROKE KVKE icon.svg",
    },
    Symbol {
        id: "TULPPAVAROKE_3",
        name: "3-VAIHEINEN TULPPAVAROKE",
        api_id: "3-VAIHEINEN_TULPPAVAROKE",
        icon_file_name: "3-VAIHEINEN TULPPAVAROKE icon.svg",
    },
    Symbol {
        id: "JOHDONSUOJA_1",
        name: "JOHDONSUOJA 1-NAP",
        api_id: "JOHDONSUOJA_1-NAP",
        icon_file_name: "JOHDONSUOJA 1-NAP icon.svg",
    },
    Symbol {
        id: "JOHDONSUOJA_3",
        name: "JOHDONSUOJA 3-NAP",
        api_id: "JOHDONSUOJA_3-NAP",
        icon_file_name: "JOHDONSUOJA 3-NAP icon.svg",
    },
    Symbol {
        id: "VIKAVIRTASUOJA",
        name: "VIKAVIRTASUOJA",
        api_id: "VIKAVIRTASUOJA",
        icon_file_name: "VIKAVIRTASUOJA icon.svg",
    },
    Symbol {
        id: "YHDISTELMASUOJA",
        name: "YHDISTELMASUOJA",
        api_id: "YHDISTELMASUOJA",
        icon_file_name: "YHDISTELMASUOJA icon.svg",
    },
];

pub fn symbol_by_id(id: &str) -> Option<&'static Symbol> {
    SYMBOLS.iter().find(|s| s.id == id)
}

pub fn symbol_by_api_id(api_id: &str) -> Option<&'static Symbol> {
    SYMBOLS
        .iter()
        .find(|s| s.api_id == api_id || s.api_id.eq_ignore_ascii_case(api_id))
}

/// Find a symbol by a name coming from the extractor.
///
/// The extractor may use spaces or underscores; try exact name,
/// case-insensitive name, underscores-as-spaces, then the API id with
/// spaces collapsed to underscores.
pub fn symbol_by_name(name: &str) -> Option<&'static Symbol> {
    let raw = name.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(s) = SYMBOLS.iter().find(|s| s.name == raw) {
        return Some(s);
    }
    if let Some(s) = SYMBOLS.iter().find(|s| s.name.eq_ignore_ascii_case(raw)) {
        return Some(s);
    }

    let spaced = raw.replace('_', " ");
    if let Some(s) = SYMBOLS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(&spaced))
    {
        return Some(s);
    }

    let underscored: String = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    SYMBOLS
        .iter()
        .find(|s| s.api_id == underscored || s.api_id.eq_ignore_ascii_case(&underscored))
}

/// Resolve an extractor-reported symbol string to an internal identifier.
///
/// Tries id, API id, then loose name matching. Returns None for unknown
/// strings; the decoder passes those through verbatim so the reviewer can
/// still see that something was detected.
pub fn resolve_symbol(raw: &str) -> Option<&'static str> {
    symbol_by_id(raw)
        .or_else(|| symbol_by_api_id(raw))
        .or_else(|| symbol_by_name(raw))
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(symbol_by_id("VIKAVIRTASUOJA").unwrap().name, "VIKAVIRTASUOJA");
        assert!(symbol_by_id("NOPE").is_none());
    }

    #[test]
    fn test_lookup_by_api_id() {
        let s = symbol_by_api_id("JOHDONSUOJA_1-NAP").unwrap();
        assert_eq!(s.id, "JOHDONSUOJA_1");
    }

    #[test]
    fn test_lookup_by_name_exact() {
        let s = symbol_by_name("JOHDONSUOJA 3-NAP").unwrap();
        assert_eq!(s.id, "JOHDONSUOJA_3");
    }

    #[test]
    fn test_lookup_by_name_case_insensitive() {
        let s = symbol_by_name("johdonsuoja 3-nap").unwrap();
        assert_eq!(s.id, "JOHDONSUOJA_3");
    }

    #[test]
    fn test_lookup_by_name_underscored() {
        let s = symbol_by_name("JOHDONSUOJA_1-NAP").unwrap();
        assert_eq!(s.id, "JOHDONSUOJA_1");
    }

    #[test]
    fn test_resolve_prefers_internal_id() {
        assert_eq!(resolve_symbol("KATKAISIJA_3_4"), Some("KATKAISIJA_3_4"));
        assert_eq!(resolve_symbol("3_ja_4-NAP_KATKAISIJA"), Some("KATKAISIJA_3_4"));
        assert_eq!(resolve_symbol("no such symbol"), None);
    }
}
