use phf::{Map, Set, phf_map, phf_set};

// Legacy species dictionaries omit bath gases; these are their canonical structures.
static BATH_GAS_SMILES: Map<&'static str, &'static str> = phf_map! {
    "Ar" => "[Ar]",
    "Ne" => "[Ne]",
    "He" => "[He]",
    "N2" => "N#N",
};

static RESERVED_FILENAME_CHARS: Set<char> = phf_set! {
    '/', '\\', ':', '*', '?', '"', '<', '>', '|', '%',
};

/// SMILES of the bath gas carrying exactly this label, if it is one.
pub fn bath_gas_smiles(label: &str) -> Option<&'static str> {
    BATH_GAS_SMILES.get(label).copied()
}

/// Renders a species label as a string usable as a file name on any platform.
///
/// Path separators, characters reserved on Windows, `%`, whitespace and control
/// characters are written as `%XX` escapes of their UTF-8 bytes, so distinct labels
/// always give distinct names. Labels made only of dots have every dot escaped, and
/// the empty label becomes a lone `%`.
pub fn path_safe_label(label: &str) -> String {
    if label.is_empty() {
        return "%".to_string();
    }
    let all_dots = label.chars().all(|c| c == '.');

    let mut encoded = String::with_capacity(label.len());
    for c in label.chars() {
        if all_dots || RESERVED_FILENAME_CHARS.contains(&c) || c.is_whitespace() || c.is_control()
        {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        } else {
            encoded.push(c);
        }
    }
    encoded
}
