//! 텍스트 단위 분석: 형태소 분리 -> 자모 분해 -> 음운 변동

use std::fmt;

use serde::Serialize;

use crate::core::decomposer::decompose_text;
use crate::core::triple::SoundTriple;
use crate::rules::{apply_until_stable, PipelineOptions};
use crate::tokenizer::Tokenizer;

/// 형태소 하나의 분석 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MorphemeAnalysis {
    pub morpheme: String,
    /// 분해 직후 슬롯
    pub jamos: Vec<SoundTriple>,
    /// 음운 변동 적용 결과
    pub phonological: Vec<SoundTriple>,
}

impl MorphemeAnalysis {
    pub fn new(morpheme: &str, options: &PipelineOptions) -> Self {
        let jamos = decompose_text(morpheme);
        let phonological = apply_until_stable(&jamos, options);
        Self {
            morpheme: morpheme.to_string(),
            jamos,
            phonological,
        }
    }

    /// 음운 변동으로 바뀐 형태소인지
    pub fn is_changed(&self) -> bool {
        self.jamos != self.phonological
    }
}

fn join_triples(triples: &[SoundTriple]) -> String {
    triples
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for MorphemeAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "형태소: {}", self.morpheme)?;
        writeln!(f, "  자모: {}", join_triples(&self.jamos))?;
        write!(f, "  음운: {}", join_triples(&self.phonological))
    }
}

/// 텍스트를 형태소로 나누고 각각 분석
pub fn analyze(
    text: &str,
    tokenizer: &dyn Tokenizer,
    options: &PipelineOptions,
) -> Vec<MorphemeAnalysis> {
    let morphemes = tokenizer.tokenize(text);
    log::debug!("형태소 {}개: {:?}", morphemes.len(), morphemes);

    morphemes
        .iter()
        .filter(|morpheme| !morpheme.is_empty())
        .map(|morpheme| MorphemeAnalysis::new(morpheme, options))
        .collect()
}
