//! 음운 변동 규칙 파이프라인
//!
//! 일곱 단계를 고정된 순서로 한 번씩 적용합니다:
//!
//! 1. **음절의 끝소리 규칙** (`final_consonant`)
//! 2. **비음화/유음화** (`assimilation`)
//! 3. **구개음화** (`palatalization`)
//! 4. **자음 축약** (`contraction`)
//! 5. **모음 축약** (`contraction`)
//! 6. **된소리되기** (`fortition`)
//! 7. **사잇소리 현상** (`linked_sound`)
//!
//! 각 단계는 슬롯 시퀀스를 받아 새 시퀀스를 돌려주는 순수 함수입니다.
//! 다음 슬롯을 참조하는 단계는 마지막 슬롯을 절대 바꾸지 않습니다.
//! 뒤 단계의 결과가 앞 단계를 다시 일으키지 않는 단일 패스가 기본이며,
//! 반복 적용은 `apply_until_stable`로만 선택할 수 있습니다.
//!
//! # 사용 예시
//!
//! ```
//! use eumun::rules::apply_phonological_rules;
//!
//! let realized = apply_phonological_rules("학교");
//! assert_eq!(realized[0].to_string(), "(ㅎ, ㅏ, ㄲ)");
//! assert_eq!(realized[1].to_string(), "(ㄱ, ㅛ, ∅)");
//! ```

mod assimilation;
mod contraction;
mod final_consonant;
mod fortition;
mod linked_sound;
mod palatalization;

use serde::{Deserialize, Serialize};

use crate::core::decomposer::decompose_text;
use crate::core::triple::SoundTriple;

pub use assimilation::apply_consonant_assimilation;
pub use contraction::{apply_consonant_contraction, apply_vowel_contraction};
pub use final_consonant::{apply_final_consonant_rule, neutralize_coda};
pub use fortition::apply_fortition;
pub use linked_sound::{apply_linked_sound_rule, is_linked_sound_exception};
pub use palatalization::apply_palatalization;

/// 비음화 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NasalizationMode {
    /// ㄱ, ㄷ, ㅂ 받침 + ㄴ 초성 -> 받침을 모두 ㅇ으로
    #[default]
    Uniform,
    /// 조음 위치별 비음화 (ㄱ→ㅇ, ㄷ→ㄴ, ㅂ→ㅁ)
    ByPlace,
}

/// 파이프라인 옵션
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub nasalization: NasalizationMode,
    /// `apply_until_stable`의 최대 패스 수 (1 = 단일 패스)
    pub max_passes: u32,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            nasalization: NasalizationMode::Uniform,
            max_passes: 1,
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nasalization(mut self, mode: NasalizationMode) -> Self {
        self.nasalization = mode;
        self
    }

    pub fn with_max_passes(mut self, passes: u32) -> Self {
        self.max_passes = passes;
        self
    }
}

/// 파이프라인 단계 (적용 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FinalConsonant,
    Assimilation,
    Palatalization,
    ConsonantContraction,
    VowelContraction,
    Fortition,
    SoundInsertion,
}

impl Stage {
    /// 적용 순서대로 나열한 전체 단계
    pub const ALL: [Stage; 7] = [
        Stage::FinalConsonant,
        Stage::Assimilation,
        Stage::Palatalization,
        Stage::ConsonantContraction,
        Stage::VowelContraction,
        Stage::Fortition,
        Stage::SoundInsertion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::FinalConsonant => "음절의 끝소리 규칙",
            Stage::Assimilation => "비음화/유음화",
            Stage::Palatalization => "구개음화",
            Stage::ConsonantContraction => "자음 축약",
            Stage::VowelContraction => "모음 축약",
            Stage::Fortition => "된소리되기",
            Stage::SoundInsertion => "사잇소리 현상",
        }
    }

    /// 다음 슬롯을 참조하는 단계인지
    pub fn is_pairwise(&self) -> bool {
        matches!(
            self,
            Stage::Assimilation | Stage::VowelContraction | Stage::Fortition | Stage::SoundInsertion
        )
    }

    pub fn apply(&self, triples: &[SoundTriple], options: &PipelineOptions) -> Vec<SoundTriple> {
        match self {
            Stage::FinalConsonant => apply_final_consonant_rule(triples),
            Stage::Assimilation => apply_consonant_assimilation(triples, options.nasalization),
            Stage::Palatalization => apply_palatalization(triples),
            Stage::ConsonantContraction => apply_consonant_contraction(triples),
            Stage::VowelContraction => apply_vowel_contraction(triples),
            Stage::Fortition => apply_fortition(triples),
            Stage::SoundInsertion => apply_linked_sound_rule(triples),
        }
    }
}

/// 일곱 단계를 한 번씩 순서대로 적용
pub fn apply_stages(triples: &[SoundTriple], options: &PipelineOptions) -> Vec<SoundTriple> {
    Stage::ALL
        .iter()
        .fold(triples.to_vec(), |current, stage| stage.apply(&current, options))
}

/// 결과가 더 이상 바뀌지 않거나 `max_passes`에 도달할 때까지 파이프라인 반복
///
/// `max_passes`가 1 이하이면 `apply_stages`와 같습니다.
pub fn apply_until_stable(triples: &[SoundTriple], options: &PipelineOptions) -> Vec<SoundTriple> {
    let max_passes = options.max_passes.max(1);
    let mut current = apply_stages(triples, options);
    let mut passes = 1;

    while passes < max_passes {
        let next = apply_stages(&current, options);
        passes += 1;
        if next == current {
            break;
        }
        current = next;
    }

    log::debug!("파이프라인 {}회 적용 (최대 {})", passes, max_passes);
    current
}

/// 형태소 하나에 음운 변동 규칙 적용 (단일 패스, 기본 옵션)
pub fn apply_phonological_rules(morpheme: &str) -> Vec<SoundTriple> {
    apply_stages(&decompose_text(morpheme), &PipelineOptions::default())
}

/// 옵션을 지정하여 형태소 하나에 음운 변동 규칙 적용
pub fn apply_phonological_rules_with(morpheme: &str, options: &PipelineOptions) -> Vec<SoundTriple> {
    apply_until_stable(&decompose_text(morpheme), options)
}

/// (현재, 다음) 쌍마다 현재 슬롯을 다시 쓰고 마지막 슬롯은 그대로 붙임
fn rewrite_pairs<F>(triples: &[SoundTriple], mut rewrite: F) -> Vec<SoundTriple>
where
    F: FnMut(&SoundTriple, &SoundTriple) -> SoundTriple,
{
    let mut result = Vec::with_capacity(triples.len());
    for pair in triples.windows(2) {
        result.push(rewrite(&pair[0], &pair[1]));
    }
    if let Some(last) = triples.last() {
        result.push(*last);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(triples: &[SoundTriple]) -> Vec<String> {
        triples.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(Stage::ALL[0], Stage::FinalConsonant);
        assert_eq!(Stage::ALL[6], Stage::SoundInsertion);
        let pairwise: Vec<_> = Stage::ALL.iter().filter(|s| s.is_pairwise()).collect();
        assert_eq!(pairwise.len(), 4);
    }

    #[test]
    fn test_hakgyo_end_to_end() {
        let jamos = decompose_text("학교");
        assert_eq!(render(&jamos), vec!["(ㅎ, ㅏ, ㄱ)", "(ㄱ, ㅛ, ∅)"]);

        // 끝소리 규칙: ㄱ은 그대로
        let options = PipelineOptions::default();
        let after_final = Stage::FinalConsonant.apply(&jamos, &options);
        assert_eq!(after_final, jamos);

        let realized = apply_phonological_rules("학교");
        assert_eq!(render(&realized), vec!["(ㅎ, ㅏ, ㄲ)", "(ㄱ, ㅛ, ∅)"]);
    }

    #[test]
    fn test_untriggered_and_chained_rules() {
        // 국물: ㄱ + ㅁ은 비음화 조건(ㄴ 초성)이 아니므로 변화 없음
        let realized = apply_phonological_rules("국물");
        assert_eq!(render(&realized), vec!["(ㄱ, ㅜ, ㄱ)", "(ㅁ, ㅜ, ㄹ)"]);

        // 꽃놀: 끝소리 ㅊ→ㄷ 뒤 비음화 ㄷ→ㅇ
        let realized = apply_phonological_rules("꽃놀");
        assert_eq!(render(&realized), vec!["(ㄲ, ㅗ, ㅇ)", "(ㄴ, ㅗ, ㄹ)"]);
    }

    #[test]
    fn test_empty_morpheme() {
        assert!(apply_phonological_rules("").is_empty());
        assert!(apply_until_stable(&[], &PipelineOptions::default()).is_empty());
    }

    #[test]
    fn test_until_stable_single_pass_matches_apply_stages() {
        let jamos = decompose_text("산길");
        let options = PipelineOptions::default();
        assert_eq!(apply_until_stable(&jamos, &options), apply_stages(&jamos, &options));
    }

    #[test]
    fn test_until_stable_stops_when_unchanged() {
        // 변화가 없는 입력은 몇 번을 돌려도 같음
        let jamos = decompose_text("나무");
        let options = PipelineOptions::new().with_max_passes(5);
        assert_eq!(apply_until_stable(&jamos, &options), jamos);
    }

    #[test]
    fn test_until_stable_is_bounded() {
        // 사잇소리는 매 패스마다 슬롯을 하나씩 늘림
        let jamos = decompose_text("산길");
        let one = apply_until_stable(&jamos, &PipelineOptions::new().with_max_passes(1));
        let three = apply_until_stable(&jamos, &PipelineOptions::new().with_max_passes(3));
        assert_eq!(one.len(), 3);
        assert_eq!(three.len(), 5);
    }

    #[test]
    fn test_by_place_nasalization_option() {
        let options = PipelineOptions::new().with_nasalization(NasalizationMode::ByPlace);
        let realized = apply_phonological_rules_with("밥물", &options);
        // ㅂ + ㅁ은 비음화 조건이 아님
        assert_eq!(realized[0].to_string(), "(ㅂ, ㅏ, ㅂ)");

        let realized = apply_phonological_rules_with("밥냄", &options);
        assert_eq!(realized[0].to_string(), "(ㅂ, ㅏ, ㅁ)");
        let realized = apply_phonological_rules("밥냄");
        assert_eq!(realized[0].to_string(), "(ㅂ, ㅏ, ㅇ)");
    }
}
