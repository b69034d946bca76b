use std::fmt;

/// Identifiers of externally provided algorithm libraries start with this prefix.
pub const LIBRARY_PREFIX: &str = "dynamic-";

/// The algorithm an automated player uses to choose its actions.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum ComputationMethod {
    ExhaustiveSearch,
    AlphaBeta,
    Minimax,
    Random,
    /// Suffix of a `dynamic-` identifier.
    Library(String),
    Other(String),
}

impl ComputationMethod {
    pub fn identifier(&self) -> String {
        match self {
            ComputationMethod::ExhaustiveSearch => "exhaustive-search".to_string(),
            ComputationMethod::AlphaBeta => "alpha-beta".to_string(),
            ComputationMethod::Minimax => "minimax".to_string(),
            ComputationMethod::Random => "random".to_string(),
            ComputationMethod::Library(name) => format!("{}{}", LIBRARY_PREFIX, name),
            ComputationMethod::Other(identifier) => identifier.clone(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ComputationMethod::ExhaustiveSearch => "Exhaustive Search".to_string(),
            ComputationMethod::AlphaBeta => "Alpha-Beta".to_string(),
            ComputationMethod::Minimax => "Minimax".to_string(),
            ComputationMethod::Random => "Random actions".to_string(),
            ComputationMethod::Library(name) => format!("Library: {}", name),
            ComputationMethod::Other(identifier) => identifier.clone(),
        }
    }
}

impl From<&str> for ComputationMethod {
    fn from(identifier: &str) -> Self {
        match identifier {
            "exhaustive-search" => ComputationMethod::ExhaustiveSearch,
            "alpha-beta" => ComputationMethod::AlphaBeta,
            "minimax" => ComputationMethod::Minimax,
            "random" => ComputationMethod::Random,
            _ => match identifier.strip_prefix(LIBRARY_PREFIX) {
                Some(name) => ComputationMethod::Library(name.to_string()),
                None => ComputationMethod::Other(identifier.to_string()),
            },
        }
    }
}

impl fmt::Display for ComputationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Human readable label for a computation method identifier.
pub fn computation_method_label(identifier: &str) -> String {
    ComputationMethod::from(identifier).label()
}
