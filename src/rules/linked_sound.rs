//! 사잇소리 현상
//!
//! 예외 어휘에 속한 음절 뒤에만 ㄸ 초성 슬롯을 새로 끼워 넣습니다.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::decomposer::compose_triple;
use crate::core::jamo::Consonant;
use crate::core::triple::{Onset, SoundTriple};

/// 사잇소리가 나는 음절 목록
static LINKED_SOUND_EXCEPTIONS: LazyLock<HashSet<char>> =
    LazyLock::new(|| ['등', '손', '김', '밤', '산'].into_iter().collect());

/// 음절이 사잇소리 예외 어휘에 속하는지
pub fn is_linked_sound_exception(syllable: char) -> bool {
    LINKED_SOUND_EXCEPTIONS.contains(&syllable)
}

/// 받침이 있고 다음 초성이 자음인 슬롯 중 예외 음절이면 뒤에 ㄸ 슬롯 삽입
///
/// 삽입된 슬롯은 다음 슬롯의 중성/종성을 그대로 가져가고,
/// 다음 슬롯은 그 뒤에 따로 처리됩니다. 슬롯 수는 늘기만 합니다.
pub fn apply_linked_sound_rule(triples: &[SoundTriple]) -> Vec<SoundTriple> {
    let mut result = Vec::with_capacity(triples.len() + 1);

    for pair in triples.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        result.push(*current);

        if current.coda.is_empty() || next.onset.consonant().is_none() {
            continue;
        }
        if let Some(syllable) = compose_triple(current).filter(|s| is_linked_sound_exception(*s)) {
            let inserted = next.with_onset(Onset::Consonant(Consonant::SsangDigeut));
            log::trace!("[사잇소리] {} 뒤에 {} 삽입", syllable, inserted);
            result.push(inserted);
        }
    }

    if let Some(last) = triples.last() {
        result.push(*last);
    }
    result
}
