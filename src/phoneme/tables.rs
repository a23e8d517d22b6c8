//! 조음 자질 정적 테이블
//!
//! 프로세스 시작 후 처음 조회할 때 한 번만 만들어지고 이후 변경되지 않습니다.
//! 모음 테이블은 일부 모음만 다룹니다 (ㅑ, ㅕ 등 이중모음 대부분은 미등록).

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use super::features::{Backness, ConsonantFeature, Height, Manner, Place, Rounding, VowelFeature};
use super::Position;

/// 조음 위치별 자음
const PLACE_TABLE: &[(Place, &[char])] = &[
    (Place::Bilabial, &['ㅂ', 'ㅃ', 'ㅍ', 'ㅁ']),
    (Place::Labiodental, &[]),
    (Place::Dental, &[]),
    (Place::Alveolar, &['ㄴ', 'ㄷ', 'ㄸ', 'ㅌ', 'ㄹ']),
    (Place::Palatal, &['ㅈ', 'ㅉ', 'ㅊ']),
    (Place::Velar, &['ㄱ', 'ㄲ', 'ㅋ']),
    (Place::Glottal, &['ㅎ']),
];

/// 조음 방법별 자음
const MANNER_TABLE: &[(Manner, &[char])] = &[
    (
        Manner::Plosive,
        &['ㅂ', 'ㅃ', 'ㅍ', 'ㄷ', 'ㄸ', 'ㅌ', 'ㄱ', 'ㄲ', 'ㅋ'],
    ),
    (Manner::Affricate, &['ㅈ', 'ㅉ', 'ㅊ']),
    (Manner::Fricative, &['ㅅ', 'ㅆ', 'ㅎ']),
    (Manner::Nasal, &['ㅁ', 'ㄴ', 'ㅇ']),
    (Manner::Liquid, &['ㄹ']),
];

const HEIGHT_TABLE: &[(Height, &[char])] = &[
    (Height::High, &['ㅣ', 'ㅟ', 'ㅜ', 'ㅡ']),
    (Height::Mid, &['ㅔ', 'ㅚ', 'ㅗ', 'ㅓ', 'ㅐ']),
    (Height::Low, &['ㅏ']),
];

const BACKNESS_TABLE: &[(Backness, &[char])] = &[
    (Backness::Front, &['ㅣ', 'ㅔ', 'ㅐ']),
    (Backness::Back, &['ㅜ', 'ㅗ', 'ㅚ', 'ㅡ', 'ㅓ']),
];

const ROUNDING_TABLE: &[(Rounding, &[char])] = &[
    (Rounding::Round, &['ㅟ', 'ㅚ', 'ㅗ', 'ㅜ']),
    (Rounding::Unround, &['ㅏ', 'ㅓ', 'ㅐ', 'ㅔ', 'ㅣ', 'ㅡ']),
];

/// 변이음 (음소 -> 위치 -> 음성 기호)
const ALLOPHONE_TABLE: &[(char, &[(Position, &str)])] = &[
    (
        'ㅂ',
        &[
            (Position::Initial, "p"),
            (Position::Medial, "b"),
            (Position::Final, "p̚"),
        ],
    ),
    ('ㄹ', &[(Position::Initial, "r"), (Position::Medial, "l")]),
];

/// 위치별 허용 자음
const DISTRIBUTION_TABLE: &[(Position, &[char])] = &[
    (
        Position::Initial,
        &['ㄴ', 'ㄹ', 'ㅁ', 'ㅇ', 'ㄷ', 'ㅂ', 'ㅅ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ'],
    ),
    (
        Position::Medial,
        &['ㄴ', 'ㄹ', 'ㅁ', 'ㅇ', 'ㄷ', 'ㅂ', 'ㅅ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ'],
    ),
    (Position::Final, &['ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅇ']),
];

/// 겹받침 -> 대표 자음
const COMPLEX_FINAL_TABLE: &[(char, char)] = &[
    ('ㄳ', 'ㄱ'),
    ('ㄵ', 'ㄴ'),
    ('ㄼ', 'ㄹ'),
    ('ㄽ', 'ㄹ'),
    ('ㅄ', 'ㅂ'),
    ('ㄺ', 'ㄱ'),
    ('ㄻ', 'ㅁ'),
    ('ㄿ', 'ㅂ'),
];

/// 테이블을 기호별 색인으로 뒤집음
fn index_by_symbol<K: Copy, F: Ord>(
    table: &[(K, &[char])],
    tag: impl Fn(K) -> F,
    index: &mut HashMap<char, BTreeSet<F>>,
) {
    for (key, symbols) in table {
        for symbol in symbols.iter() {
            index.entry(*symbol).or_default().insert(tag(*key));
        }
    }
}

pub(super) static CONSONANT_FEATURES: LazyLock<HashMap<char, BTreeSet<ConsonantFeature>>> =
    LazyLock::new(|| {
        let mut index = HashMap::new();
        index_by_symbol(PLACE_TABLE, ConsonantFeature::Place, &mut index);
        index_by_symbol(MANNER_TABLE, ConsonantFeature::Manner, &mut index);
        index
    });

pub(super) static VOWEL_FEATURES: LazyLock<HashMap<char, BTreeSet<VowelFeature>>> =
    LazyLock::new(|| {
        let mut index = HashMap::new();
        index_by_symbol(HEIGHT_TABLE, VowelFeature::Height, &mut index);
        index_by_symbol(BACKNESS_TABLE, VowelFeature::Backness, &mut index);
        index_by_symbol(ROUNDING_TABLE, VowelFeature::Rounding, &mut index);
        index
    });

pub(super) static ALLOPHONES: LazyLock<HashMap<char, HashMap<Position, &'static str>>> =
    LazyLock::new(|| {
        ALLOPHONE_TABLE
            .iter()
            .map(|(phoneme, rules)| (*phoneme, rules.iter().copied().collect()))
            .collect()
    });

pub(super) static DISTRIBUTION: LazyLock<HashMap<Position, HashSet<char>>> = LazyLock::new(|| {
    DISTRIBUTION_TABLE
        .iter()
        .map(|(position, symbols)| (*position, symbols.iter().copied().collect()))
        .collect()
});

pub(super) static COMPLEX_FINALS: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| COMPLEX_FINAL_TABLE.iter().copied().collect());
