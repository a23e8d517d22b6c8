//! 문자 -> (초성, 중성, 종성) 분해와 역조합

use crate::core::jamo::{Consonant, Vowel};
use crate::core::triple::{Coda, Nucleus, Onset, SoundTriple};
use crate::core::unicode::{compose_syllable, decompose_syllable};

/// 문자 하나를 초성/중성/종성으로 분해
///
/// - 완성형 한글: 받침이 없으면 종성은 빈 슬롯
/// - 호환용 자음 단독(ㄱ 등): 초성만 채운 슬롯
/// - 그 외 문자: 초성 자리에 문자를 그대로 담은 슬롯 (실패하지 않음)
pub fn decompose(c: char) -> SoundTriple {
    if let Some((cho, jung, jong)) = decompose_syllable(c) {
        // 유효 범위의 음절은 세 인덱스 모두 항상 매핑됨
        if let (Some(onset), Some(nucleus), Some(coda)) = (
            Consonant::from_choseong(cho),
            Vowel::from_jungseong(jung),
            Coda::from_jongseong(jong),
        ) {
            return SoundTriple::new(Onset::Consonant(onset), Nucleus::Vowel(nucleus), coda);
        }
    }

    if let Some(consonant) = Consonant::from_char(c) {
        return SoundTriple::new(Onset::Consonant(consonant), Nucleus::Empty, Coda::Empty);
    }

    SoundTriple::literal(c)
}

/// 문자열 전체를 분해
pub fn decompose_text(text: &str) -> Vec<SoundTriple> {
    text.chars().map(decompose).collect()
}

/// 초성/중성/종성을 완성형 한글로 조합
///
/// 초성이 자음이 아니거나 중성이 비어 있거나,
/// 종성이 받침으로 쓸 수 없는 자음(ㄸ, ㅃ, ㅉ)이면 None
pub fn compose(onset: Onset, nucleus: Nucleus, coda: Coda) -> Option<char> {
    let cho = onset.consonant()?.choseong_index();
    let jung = nucleus.vowel()?.jungseong_index();
    let jong = coda.jongseong_index()?;
    compose_syllable(cho, jung, jong)
}

/// 슬롯 하나를 다시 음절로 조합
pub fn compose_triple(triple: &SoundTriple) -> Option<char> {
    compose(triple.onset, triple.nucleus, triple.coda)
}
