//! 음소 분류 조회 함수
//!
//! 모든 조회는 실패하지 않습니다. 테이블에 없는 기호는
//! 빈 집합, 입력 그대로, 또는 `false`를 돌려줍니다.

use std::collections::BTreeSet;

use serde::Serialize;

use super::features::{ConsonantFeature, VowelFeature};
use super::tables::{ALLOPHONES, COMPLEX_FINALS, CONSONANT_FEATURES, DISTRIBUTION, VOWEL_FEATURES};
use super::Position;

/// 두 음소의 변별 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distinction {
    Distinctive,
    NonDistinctive,
}

/// 자음의 조음 위치/방법 자질 (미등록 기호는 빈 집합)
pub fn classify_consonant(symbol: char) -> BTreeSet<ConsonantFeature> {
    CONSONANT_FEATURES.get(&symbol).cloned().unwrap_or_default()
}

/// 모음의 높이/앞뒤/원순 자질 (미등록 기호는 빈 집합)
pub fn classify_vowel(symbol: char) -> BTreeSet<VowelFeature> {
    VOWEL_FEATURES.get(&symbol).cloned().unwrap_or_default()
}

/// 두 음소가 다르면 변별적
///
/// 최소대립쌍 분석이 아니라 기호 비교일 뿐입니다.
pub fn phoneme_distinction(first: char, second: char) -> Distinction {
    if first != second {
        Distinction::Distinctive
    } else {
        Distinction::NonDistinctive
    }
}

/// 위치별 변이음 (ㅂ, ㄹ만 등록, 그 외에는 음소 그대로)
pub fn allophone(phoneme: char, position: Position) -> String {
    ALLOPHONES
        .get(&phoneme)
        .and_then(|rules| rules.get(&position))
        .map(|phone| phone.to_string())
        .unwrap_or_else(|| phoneme.to_string())
}

/// 음소가 해당 위치에 올 수 있는지
pub fn distribution_constraint(phoneme: char, position: Position) -> bool {
    DISTRIBUTION
        .get(&position)
        .is_some_and(|allowed| allowed.contains(&phoneme))
}

/// 겹받침 -> 대표 자음 (겹받침이 아니면 그대로)
pub fn simplify_final(complex_coda: char) -> char {
    COMPLEX_FINALS
        .get(&complex_coda)
        .copied()
        .unwrap_or(complex_coda)
}
