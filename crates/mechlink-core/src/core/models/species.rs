use std::fmt;
use std::str::FromStr;

/// Notation used to encode a molecular structure.
///
/// The engine never interprets the notation itself; it is handed verbatim to the
/// chemistry collaborators, which decide how to parse and compare it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructureFormat {
    /// Multi-line adjacency list, the format used by species dictionaries.
    #[default]
    AdjacencyList,
    /// SMILES line notation.
    Smiles,
    /// IUPAC International Chemical Identifier.
    InChI,
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructureFormat::AdjacencyList => "adjacency-list",
            StructureFormat::Smiles => "smiles",
            StructureFormat::InChI => "inchi",
        };
        f.write_str(name)
    }
}

impl FromStr for StructureFormat {
    type Err = ();

    /// Parses a format name, case-insensitively.
    ///
    /// Accepts `adjacency-list`, `adjlist`, `smiles` and `inchi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "adjacency-list" | "adjacency_list" | "adjlist" => Ok(StructureFormat::AdjacencyList),
            "smiles" => Ok(StructureFormat::Smiles),
            "inchi" => Ok(StructureFormat::InChI),
            _ => Err(()),
        }
    }
}

/// One molecular representation of a species.
///
/// A structure owns its notation, so cloning it never shares state with the
/// original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Structure {
    pub format: StructureFormat,
    pub notation: String,
}

impl Structure {
    pub fn new(format: StructureFormat, notation: impl Into<String>) -> Self {
        Self {
            format,
            notation: notation.into(),
        }
    }

    pub fn smiles(notation: impl Into<String>) -> Self {
        Self::new(StructureFormat::Smiles, notation)
    }

    pub fn adjacency_list(notation: impl Into<String>) -> Self {
        Self::new(StructureFormat::AdjacencyList, notation)
    }
}

/// A chemical species as seen by either the job specification or the canonical network.
///
/// Two species are equivalent when any of their structures is isomorphic to any
/// structure of the other. Labels are informative only and are not guaranteed to be
/// unique across the two sides of a reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    /// Human-readable label (e.g. "CH4", "OH(5)").
    pub label: String,
    /// Equivalent structures (resonance forms); the first one is the primary structure.
    pub structures: Vec<Structure>,
    /// Whether the species takes part in reactions.
    pub reactive: bool,
    /// Whether the species is explicitly held at constant concentration.
    pub constant: bool,
}

impl Species {
    /// Creates a reactive, non-constant species.
    pub fn new(label: impl Into<String>, structures: Vec<Structure>) -> Self {
        Self {
            label: label.into(),
            structures,
            reactive: true,
            constant: false,
        }
    }

    pub fn with_reactive(mut self, reactive: bool) -> Self {
        self.reactive = reactive;
        self
    }

    pub fn with_constant(mut self, constant: bool) -> Self {
        self.constant = constant;
        self
    }

    /// The structure used when a single representation is needed (e.g. for rendering).
    pub fn primary_structure(&self) -> Option<&Structure> {
        self.structures.first()
    }

    /// Returns `true` if the label carries the given observed-species marker.
    pub fn is_observed(&self, suffix: &str) -> bool {
        self.label.contains(suffix)
    }

    /// Label the observed counterpart of this species would carry.
    pub fn observed_label(&self, suffix: &str) -> String {
        format!("{}{}", self.label, suffix)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_species_is_reactive_and_not_constant() {
        let species = Species::new("CH4", vec![Structure::smiles("C")]);

        assert_eq!(species.label, "CH4");
        assert!(species.reactive);
        assert!(!species.constant);
        assert_eq!(species.primary_structure(), Some(&Structure::smiles("C")));
    }

    #[test]
    fn builder_flags_override_defaults() {
        let species = Species::new("Ar", vec![Structure::smiles("[Ar]")])
            .with_reactive(false)
            .with_constant(true);

        assert!(!species.reactive);
        assert!(species.constant);
    }

    #[test]
    fn primary_structure_is_none_without_structures() {
        let species = Species::new("X", Vec::new());
        assert!(species.primary_structure().is_none());
    }

    #[test]
    fn clone_does_not_alias_structures() {
        let original = Species::new("C2H6", vec![Structure::smiles("CC")]);
        let mut copy = original.clone();
        copy.structures[0].notation.push('C');
        copy.label = "C3H8".to_string();

        assert_eq!(original.structures[0].notation, "CC");
        assert_eq!(original.label, "C2H6");
    }

    #[test]
    fn observed_label_appends_suffix() {
        let species = Species::new("OH", vec![Structure::smiles("[OH]")]);
        assert_eq!(species.observed_label("_obs"), "OH_obs");
        assert!(!species.is_observed("_obs"));

        let observed = Species::new("OH_obs", Vec::new());
        assert!(observed.is_observed("_obs"));
    }

    #[test]
    fn observed_marker_is_matched_anywhere_in_label() {
        let species = Species::new("OH_obs(3)", Vec::new());
        assert!(species.is_observed("_obs"));
    }

    #[test]
    fn structure_format_parses_known_names() {
        assert_eq!(
            StructureFormat::from_str("adjlist"),
            Ok(StructureFormat::AdjacencyList)
        );
        assert_eq!(
            StructureFormat::from_str("Adjacency-List"),
            Ok(StructureFormat::AdjacencyList)
        );
        assert_eq!(StructureFormat::from_str("SMILES"), Ok(StructureFormat::Smiles));
        assert_eq!(StructureFormat::from_str("InChI"), Ok(StructureFormat::InChI));
        assert_eq!(StructureFormat::from_str("mol2"), Err(()));
    }

    #[test]
    fn structure_format_display_round_trips_through_from_str() {
        for format in [
            StructureFormat::AdjacencyList,
            StructureFormat::Smiles,
            StructureFormat::InChI,
        ] {
            assert_eq!(StructureFormat::from_str(&format.to_string()), Ok(format));
        }
    }
}
