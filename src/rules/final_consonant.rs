//! 음절의 끝소리 규칙
//!
//! 받침을 대표음 ㄱ, ㄷ, ㅂ으로 중화합니다. 다음 슬롯은 보지 않습니다.

use crate::core::jamo::Consonant;
use crate::core::triple::{Coda, SoundTriple};

/// 받침 하나를 대표음으로 중화
/// - ㄲ, ㅋ -> ㄱ
/// - ㅅ, ㅆ, ㅈ, ㅊ, ㅌ, ㅎ -> ㄷ
/// - ㅂ, ㅍ -> ㅂ
/// - 그 외 (겹받침 포함) -> 그대로
pub fn neutralize_coda(coda: Coda) -> Coda {
    let Some(consonant) = coda.consonant() else {
        return coda;
    };
    match consonant {
        Consonant::SsangGiyeok | Consonant::Kieuk => Coda::Consonant(Consonant::Giyeok),
        Consonant::Siot
        | Consonant::SsangSiot
        | Consonant::Jieut
        | Consonant::Chieut
        | Consonant::Tieut
        | Consonant::Hieut => Coda::Consonant(Consonant::Digeut),
        Consonant::Bieup | Consonant::Pieup => Coda::Consonant(Consonant::Bieup),
        _ => coda,
    }
}

/// 모든 슬롯의 받침에 끝소리 규칙 적용
pub fn apply_final_consonant_rule(triples: &[SoundTriple]) -> Vec<SoundTriple> {
    triples
        .iter()
        .map(|triple| {
            let coda = neutralize_coda(triple.coda);
            if coda != triple.coda {
                log::trace!("[끝소리] {} -> {}", triple.coda, coda);
            }
            triple.with_coda(coda)
        })
        .collect()
}
