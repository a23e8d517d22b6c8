//! 구개음화

use crate::core::jamo::{Consonant, Vowel};
use crate::core::triple::{Nucleus, Onset, SoundTriple};

fn palatalize(triple: &SoundTriple) -> SoundTriple {
    let palatal = match (triple.onset, triple.nucleus) {
        (Onset::Consonant(Consonant::Digeut), Nucleus::Vowel(Vowel::I)) => Consonant::Jieut,
        (Onset::Consonant(Consonant::Tieut), Nucleus::Vowel(Vowel::I)) => Consonant::Chieut,
        _ => return *triple,
    };
    log::trace!("[구개음화] {} -> {}", triple, palatal);
    // 중성은 비우고 종성은 유지
    triple
        .with_onset(Onset::Consonant(palatal))
        .with_nucleus(Nucleus::Empty)
}

/// 초성 ㄷ/ㅌ + 중성 ㅣ -> 초성 ㅈ/ㅊ, 중성 제거
pub fn apply_palatalization(triples: &[SoundTriple]) -> Vec<SoundTriple> {
    triples.iter().map(palatalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decomposer::decompose_text;

    fn render(text: &str) -> Vec<String> {
        apply_palatalization(&decompose_text(text))
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_digeut_and_tieut() {
        assert_eq!(render("디"), vec!["(ㅈ, ∅, ∅)"]);
        assert_eq!(render("틴"), vec!["(ㅊ, ∅, ㄴ)"]);
    }

    #[test]
    fn test_other_syllables_unchanged() {
        assert_eq!(render("다"), vec!["(ㄷ, ㅏ, ∅)"]);
        assert_eq!(render("지"), vec!["(ㅈ, ㅣ, ∅)"]);
        assert_eq!(render("굳이"), vec!["(ㄱ, ㅜ, ㄷ)", "(ㅇ, ㅣ, ∅)"]);
    }
}
