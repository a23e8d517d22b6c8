pub mod analysis;
pub mod config;
pub mod core;
pub mod phoneme;
pub mod rules;
pub mod tokenizer;

pub use analysis::{analyze, MorphemeAnalysis};
pub use self::core::decomposer::{compose, decompose, decompose_text};
pub use self::core::triple::{Coda, Nucleus, Onset, SoundTriple};
pub use rules::{apply_phonological_rules, PipelineOptions};
pub use tokenizer::{SimpleTokenizer, Tokenizer};
