//! 닫힌 자모 집합: 자음 19개, 모음 21개, 겹받침 11개
//!
//! 각 자모는 호환용 자모 문자(U+3131~U+3163) 하나와 일대일로 대응합니다.
//! 유니코드 음절 산술에 쓰이는 초성/중성/종성 인덱스도 여기서 변환합니다.

use std::fmt;

/// 자음 (초성 인덱스 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Consonant {
    Giyeok,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

impl Consonant {
    /// 초성 인덱스 순서의 전체 자음
    pub const ALL: [Consonant; 19] = [
        Consonant::Giyeok,
        Consonant::SsangGiyeok,
        Consonant::Nieun,
        Consonant::Digeut,
        Consonant::SsangDigeut,
        Consonant::Rieul,
        Consonant::Mieum,
        Consonant::Bieup,
        Consonant::SsangBieup,
        Consonant::Siot,
        Consonant::SsangSiot,
        Consonant::Ieung,
        Consonant::Jieut,
        Consonant::SsangJieut,
        Consonant::Chieut,
        Consonant::Kieuk,
        Consonant::Tieut,
        Consonant::Pieup,
        Consonant::Hieut,
    ];

    /// 호환용 자모 문자
    pub fn to_char(self) -> char {
        match self {
            Consonant::Giyeok => 'ㄱ',
            Consonant::SsangGiyeok => 'ㄲ',
            Consonant::Nieun => 'ㄴ',
            Consonant::Digeut => 'ㄷ',
            Consonant::SsangDigeut => 'ㄸ',
            Consonant::Rieul => 'ㄹ',
            Consonant::Mieum => 'ㅁ',
            Consonant::Bieup => 'ㅂ',
            Consonant::SsangBieup => 'ㅃ',
            Consonant::Siot => 'ㅅ',
            Consonant::SsangSiot => 'ㅆ',
            Consonant::Ieung => 'ㅇ',
            Consonant::Jieut => 'ㅈ',
            Consonant::SsangJieut => 'ㅉ',
            Consonant::Chieut => 'ㅊ',
            Consonant::Kieuk => 'ㅋ',
            Consonant::Tieut => 'ㅌ',
            Consonant::Pieup => 'ㅍ',
            Consonant::Hieut => 'ㅎ',
        }
    }

    /// 호환용 자모 문자 -> 자음 (자음이 아니면 None)
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|consonant| consonant.to_char() == c)
    }

    /// 초성 인덱스 (0~18)
    pub fn choseong_index(self) -> u32 {
        self as u32
    }

    /// 초성 인덱스 -> 자음
    pub fn from_choseong(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// 종성 인덱스 (ㄸ, ㅃ, ㅉ은 받침으로 쓸 수 없어 None)
    pub fn jongseong_index(self) -> Option<u32> {
        match self {
            Consonant::Giyeok => Some(1),
            Consonant::SsangGiyeok => Some(2),
            Consonant::Nieun => Some(4),
            Consonant::Digeut => Some(7),
            Consonant::Rieul => Some(8),
            Consonant::Mieum => Some(16),
            Consonant::Bieup => Some(17),
            Consonant::Siot => Some(19),
            Consonant::SsangSiot => Some(20),
            Consonant::Ieung => Some(21),
            Consonant::Jieut => Some(22),
            Consonant::Chieut => Some(23),
            Consonant::Kieuk => Some(24),
            Consonant::Tieut => Some(25),
            Consonant::Pieup => Some(26),
            Consonant::Hieut => Some(27),
            Consonant::SsangDigeut | Consonant::SsangBieup | Consonant::SsangJieut => None,
        }
    }

    /// 종성 인덱스 -> 홑받침 자음 (겹받침이나 0이면 None)
    pub fn from_jongseong(index: u32) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|consonant| consonant.jongseong_index() == Some(index))
    }

    /// 거센소리 짝 (ㄱ→ㅋ, ㄷ→ㅌ, ㅂ→ㅍ, ㅈ→ㅊ)
    pub fn aspirated(self) -> Option<Self> {
        match self {
            Consonant::Giyeok => Some(Consonant::Kieuk),
            Consonant::Digeut => Some(Consonant::Tieut),
            Consonant::Bieup => Some(Consonant::Pieup),
            Consonant::Jieut => Some(Consonant::Chieut),
            _ => None,
        }
    }

    /// 된소리 짝 (ㄱ→ㄲ, ㄷ→ㄸ, ㅂ→ㅃ, ㅅ→ㅆ, ㅈ→ㅉ)
    pub fn tensed(self) -> Option<Self> {
        match self {
            Consonant::Giyeok => Some(Consonant::SsangGiyeok),
            Consonant::Digeut => Some(Consonant::SsangDigeut),
            Consonant::Bieup => Some(Consonant::SsangBieup),
            Consonant::Siot => Some(Consonant::SsangSiot),
            Consonant::Jieut => Some(Consonant::SsangJieut),
            _ => None,
        }
    }
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 모음 (중성 인덱스 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vowel {
    A,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

impl Vowel {
    /// 중성 인덱스 순서의 전체 모음
    pub const ALL: [Vowel; 21] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Ui,
        Vowel::I,
    ];

    /// 호환용 자모 문자 (ㅏ(0x314F) ~ ㅣ(0x3163)이 중성 순서와 같음)
    pub fn to_char(self) -> char {
        char::from_u32(0x314F + self as u32).unwrap_or('\u{3164}')
    }

    /// 호환용 자모 문자 -> 모음 (모음이 아니면 None)
    pub fn from_char(c: char) -> Option<Self> {
        let code = c as u32;
        if (0x314F..=0x3163).contains(&code) {
            Self::from_jungseong(code - 0x314F)
        } else {
            None
        }
    }

    /// 중성 인덱스 (0~20)
    pub fn jungseong_index(self) -> u32 {
        self as u32
    }

    /// 중성 인덱스 -> 모음
    pub fn from_jungseong(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 겹받침
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cluster {
    GiyeokSiot,
    NieunJieut,
    NieunHieut,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    BieupSiot,
}

impl Cluster {
    pub const ALL: [Cluster; 11] = [
        Cluster::GiyeokSiot,
        Cluster::NieunJieut,
        Cluster::NieunHieut,
        Cluster::RieulGiyeok,
        Cluster::RieulMieum,
        Cluster::RieulBieup,
        Cluster::RieulSiot,
        Cluster::RieulTieut,
        Cluster::RieulPieup,
        Cluster::RieulHieut,
        Cluster::BieupSiot,
    ];

    pub fn to_char(self) -> char {
        match self {
            Cluster::GiyeokSiot => 'ㄳ',
            Cluster::NieunJieut => 'ㄵ',
            Cluster::NieunHieut => 'ㄶ',
            Cluster::RieulGiyeok => 'ㄺ',
            Cluster::RieulMieum => 'ㄻ',
            Cluster::RieulBieup => 'ㄼ',
            Cluster::RieulSiot => 'ㄽ',
            Cluster::RieulTieut => 'ㄾ',
            Cluster::RieulPieup => 'ㄿ',
            Cluster::RieulHieut => 'ㅀ',
            Cluster::BieupSiot => 'ㅄ',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|cluster| cluster.to_char() == c)
    }

    /// 종성 인덱스
    pub fn jongseong_index(self) -> u32 {
        match self {
            Cluster::GiyeokSiot => 3,
            Cluster::NieunJieut => 5,
            Cluster::NieunHieut => 6,
            Cluster::RieulGiyeok => 9,
            Cluster::RieulMieum => 10,
            Cluster::RieulBieup => 11,
            Cluster::RieulSiot => 12,
            Cluster::RieulTieut => 13,
            Cluster::RieulPieup => 14,
            Cluster::RieulHieut => 15,
            Cluster::BieupSiot => 18,
        }
    }

    pub fn from_jongseong(index: u32) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|cluster| cluster.jongseong_index() == index)
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
