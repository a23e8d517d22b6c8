//! 비음화와 유음화
//!
//! 현재 받침과 다음 초성만 봅니다.

use crate::core::jamo::Consonant;
use crate::core::triple::{Coda, SoundTriple};

use super::{rewrite_pairs, NasalizationMode};

/// 받침이 ㄱ, ㄷ, ㅂ이고 다음 초성이 ㄴ일 때의 비음
fn nasal_for(coda: Consonant, mode: NasalizationMode) -> Consonant {
    match mode {
        NasalizationMode::Uniform => Consonant::Ieung,
        NasalizationMode::ByPlace => match coda {
            Consonant::Digeut => Consonant::Nieun,
            Consonant::Bieup => Consonant::Mieum,
            _ => Consonant::Ieung,
        },
    }
}

fn assimilate(current: &SoundTriple, next: &SoundTriple, mode: NasalizationMode) -> SoundTriple {
    let (Some(coda), Some(onset)) = (current.coda.consonant(), next.onset.consonant()) else {
        return *current;
    };

    let replaced = match (coda, onset) {
        // 비음화
        (Consonant::Giyeok | Consonant::Digeut | Consonant::Bieup, Consonant::Nieun) => {
            nasal_for(coda, mode)
        }
        // ㄹ + ㄴ: 받침 ㄹ 유지
        (Consonant::Rieul, Consonant::Nieun) => Consonant::Rieul,
        // 유음화
        (Consonant::Nieun, Consonant::Rieul) => Consonant::Rieul,
        _ => return *current,
    };

    if replaced != coda {
        log::trace!("[동화] {} + {} -> {}", coda, onset, replaced);
    }
    current.with_coda(Coda::Consonant(replaced))
}

/// 자음 동화 (비음화, 유음화)
pub fn apply_consonant_assimilation(
    triples: &[SoundTriple],
    mode: NasalizationMode,
) -> Vec<SoundTriple> {
    rewrite_pairs(triples, |current, next| assimilate(current, next, mode))
}
