pub mod alphabet;
pub mod context;
pub mod dictionary;
pub mod endings;
pub mod engine;
pub mod phonetic;
pub mod phrases;
pub mod pipeline;
pub mod prefixes;
pub mod stage;
pub mod translator;
pub mod transliterator;
pub mod validator;

pub use context::{Settings, Variant};
pub use engine::{Engine, EngineBuilder, EngineError};
pub use phonetic::{Phonetic, Trasianka};
pub use stage::{Stage, StageError};
pub use validator::validate_public_dictionary;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
