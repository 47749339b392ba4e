//! Vocabulary domain selection
//!
//! A vocabulary domain is a thematic noun phrase that biases word choice
//! in the generated text. Callers either name a topic explicitly or pass
//! the [`GENERIC_TOPIC`] sentinel, in which case one entry is drawn
//! uniformly at random from [`VOCAB_DOMAINS`].

/// Reserved topic meaning "no topic given, draw one from the catalog".
pub const GENERIC_TOPIC: &str = "generic";

/// Fixed catalog of vocabulary domains for the generic draw.
pub const VOCAB_DOMAINS: [&str; 30] = [
    "kitchen utensils",
    "deep ocean creatures",
    "desert geology",
    "antique furniture",
    "tropical insects",
    "winter clothing",
    "brass instruments",
    "root vegetables",
    "abandoned factories",
    "circus equipment",
    "volcanic rock",
    "old bookshops",
    "fishing tackle",
    "bread baking",
    "railway stations",
    "carpentry tools",
    "tide pools",
    "alpine meadows",
    "pottery glazes",
    "copper plumbing",
    "beekeeping",
    "clock repair",
    "leather tanning",
    "paper mills",
    "harbor docks",
    "seed catalogues",
    "blacksmithing",
    "weaving looms",
    "cave formations",
    "market stalls",
];

/// A thematic noun phrase the model draws its word choice from (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyDomain(String);

impl VocabularyDomain {
    pub fn new(domain: impl Into<String>) -> Self {
        Self(domain.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VocabularyDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Random-choice capability used for the generic draw.
///
/// The production implementation lives in the infrastructure layer and
/// wraps `rand`; tests substitute a deterministic stub. Uniformity is
/// expected, cryptographic strength is not.
pub trait DomainPicker: Send + Sync {
    /// Pick one index in `0..len`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Resolve the vocabulary domain for a request.
///
/// Any topic other than [`GENERIC_TOPIC`] is returned verbatim,
/// unvalidated: the caller's literal topic becomes the domain text.
pub fn select_domain(topic: &str, picker: &dyn DomainPicker) -> VocabularyDomain {
    if topic != GENERIC_TOPIC {
        return VocabularyDomain::new(topic);
    }

    let index = picker.pick_index(VOCAB_DOMAINS.len());
    VocabularyDomain::new(VOCAB_DOMAINS[index])
}
