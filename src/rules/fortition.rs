//! 된소리되기

use crate::core::jamo::Consonant;
use crate::core::triple::{Coda, SoundTriple};

use super::rewrite_pairs;

fn tense(current: &SoundTriple, next: &SoundTriple) -> SoundTriple {
    let (Some(coda), Some(onset)) = (current.coda.consonant(), next.onset.consonant()) else {
        return *current;
    };
    if !matches!(coda, Consonant::Giyeok | Consonant::Digeut | Consonant::Bieup) {
        return *current;
    }
    // 된소리는 받침이 아니라 다음 초성을 기준으로 정해짐
    match onset.tensed() {
        Some(tensed) => {
            log::trace!("[된소리] {} + {} -> {}", coda, onset, tensed);
            current.with_coda(Coda::Consonant(tensed))
        }
        None => *current,
    }
}

/// 받침 ㄱ/ㄷ/ㅂ + 초성 ㄱ/ㄷ/ㅂ/ㅅ/ㅈ -> 받침을 다음 초성의 된소리로
pub fn apply_fortition(triples: &[SoundTriple]) -> Vec<SoundTriple> {
    rewrite_pairs(triples, tense)
}
