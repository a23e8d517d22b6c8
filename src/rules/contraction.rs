//! 자음 축약과 모음 축약

use crate::core::jamo::{Consonant, Vowel};
use crate::core::triple::{Coda, Nucleus, Onset, SoundTriple};

use super::rewrite_pairs;

fn contract_consonant(triple: &SoundTriple) -> SoundTriple {
    if triple.coda != Coda::Consonant(Consonant::Hieut) {
        return *triple;
    }
    // 같은 슬롯의 초성이 ㄱ/ㄷ/ㅂ/ㅈ일 때만 축약, 나머지는 그대로 둠
    let Some(aspirated) = triple.onset.consonant().and_then(Consonant::aspirated) else {
        return *triple;
    };
    log::trace!("[자음 축약] {} -> {}", triple, aspirated);
    SoundTriple::new(Onset::Consonant(aspirated), Nucleus::Empty, Coda::Empty)
}

/// 받침 ㅎ + 같은 슬롯의 초성 ㄱ/ㄷ/ㅂ/ㅈ -> 거센소리 초성, 중성/종성 제거
pub fn apply_consonant_contraction(triples: &[SoundTriple]) -> Vec<SoundTriple> {
    triples.iter().map(contract_consonant).collect()
}

/// 인접한 두 중성의 이중모음
fn diphthong(current: Vowel, next: Vowel) -> Option<Vowel> {
    match (current, next) {
        (Vowel::I, Vowel::Eo) => Some(Vowel::Yeo),
        (Vowel::Eu, Vowel::I) => Some(Vowel::Ui),
        (Vowel::O, Vowel::I) => Some(Vowel::Oe),
        (Vowel::O, Vowel::A) => Some(Vowel::Wa),
        (Vowel::U, Vowel::Eo) => Some(Vowel::Wo),
        (Vowel::Oe, Vowel::Eo) => Some(Vowel::Wae),
        _ => None,
    }
}

fn contract_vowels(current: &SoundTriple, next: &SoundTriple) -> SoundTriple {
    let (Some(first), Some(second)) = (current.nucleus.vowel(), next.nucleus.vowel()) else {
        return *current;
    };
    match diphthong(first, second) {
        Some(merged) => {
            log::trace!("[모음 축약] {} + {} -> {}", first, second, merged);
            // 현재 슬롯이 다음 슬롯의 받침을 가져감
            current
                .with_nucleus(Nucleus::Vowel(merged))
                .with_coda(next.coda)
        }
        None => *current,
    }
}

/// 인접 중성을 이중모음으로 축약
pub fn apply_vowel_contraction(triples: &[SoundTriple]) -> Vec<SoundTriple> {
    rewrite_pairs(triples, contract_vowels)
}
