//! 음절 하나의 초성/중성/종성 슬롯

use std::fmt;

use serde::{Serialize, Serializer};

use super::jamo::{Cluster, Consonant, Vowel};

/// 빈 슬롯 표시 기호
pub const EMPTY_MARKER: char = '∅';

/// 초성 슬롯
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Onset {
    Empty,
    Consonant(Consonant),
    /// 분해할 수 없는 문자 (숫자, 영문, 문장부호 등)
    Literal(char),
}

/// 중성 슬롯
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleus {
    Empty,
    Vowel(Vowel),
}

/// 종성 슬롯
///
/// 된소리되기 결과인 ㄸ, ㅃ, ㅉ도 담을 수 있습니다 (유니코드 받침으로는 조합 불가).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coda {
    Empty,
    Consonant(Consonant),
    Cluster(Cluster),
}

impl Onset {
    pub fn symbol(&self) -> Option<char> {
        match self {
            Onset::Empty => None,
            Onset::Consonant(c) => Some(c.to_char()),
            Onset::Literal(c) => Some(*c),
        }
    }

    pub fn consonant(&self) -> Option<Consonant> {
        match self {
            Onset::Consonant(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Onset::Empty)
    }
}

impl Nucleus {
    pub fn symbol(&self) -> Option<char> {
        self.vowel().map(Vowel::to_char)
    }

    pub fn vowel(&self) -> Option<Vowel> {
        match self {
            Nucleus::Vowel(v) => Some(*v),
            Nucleus::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Nucleus::Empty)
    }
}

impl Coda {
    pub fn symbol(&self) -> Option<char> {
        match self {
            Coda::Empty => None,
            Coda::Consonant(c) => Some(c.to_char()),
            Coda::Cluster(c) => Some(c.to_char()),
        }
    }

    /// 홑받침 자음 (겹받침이나 빈 슬롯이면 None)
    pub fn consonant(&self) -> Option<Consonant> {
        match self {
            Coda::Consonant(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Coda::Empty)
    }

    /// 종성 인덱스 -> 종성 슬롯 (0 = 받침 없음)
    pub fn from_jongseong(index: u32) -> Option<Self> {
        if index == 0 {
            return Some(Coda::Empty);
        }
        Consonant::from_jongseong(index)
            .map(Coda::Consonant)
            .or_else(|| Cluster::from_jongseong(index).map(Coda::Cluster))
    }

    /// 종성 슬롯 -> 종성 인덱스 (받침으로 조합할 수 없는 자음이면 None)
    pub fn jongseong_index(&self) -> Option<u32> {
        match self {
            Coda::Empty => Some(0),
            Coda::Consonant(c) => c.jongseong_index(),
            Coda::Cluster(c) => Some(c.jongseong_index()),
        }
    }
}

/// 슬롯 출력: 빈 슬롯은 빈 문자열
macro_rules! impl_slot_output {
    ($($slot:ty),*) => {
        $(
            impl fmt::Display for $slot {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self.symbol() {
                        Some(c) => write!(f, "{}", c),
                        None => Ok(()),
                    }
                }
            }

            impl Serialize for $slot {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

impl_slot_output!(Onset, Nucleus, Coda);

/// 음절 하나를 이루는 (초성, 중성, 종성) 값 객체
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SoundTriple {
    pub onset: Onset,
    pub nucleus: Nucleus,
    pub coda: Coda,
}

impl SoundTriple {
    pub fn new(onset: Onset, nucleus: Nucleus, coda: Coda) -> Self {
        Self {
            onset,
            nucleus,
            coda,
        }
    }

    /// 분해할 수 없는 문자를 그대로 담은 슬롯
    pub fn literal(c: char) -> Self {
        Self::new(Onset::Literal(c), Nucleus::Empty, Coda::Empty)
    }

    pub fn with_onset(self, onset: Onset) -> Self {
        Self { onset, ..self }
    }

    pub fn with_nucleus(self, nucleus: Nucleus) -> Self {
        Self { nucleus, ..self }
    }

    pub fn with_coda(self, coda: Coda) -> Self {
        Self { coda, ..self }
    }
}

impl fmt::Display for SoundTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |symbol: Option<char>| symbol.unwrap_or(EMPTY_MARKER);
        write!(
            f,
            "({}, {}, {})",
            render(self.onset.symbol()),
            render(self.nucleus.symbol()),
            render(self.coda.symbol())
        )
    }
}
