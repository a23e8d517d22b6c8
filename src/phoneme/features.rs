//! 조음 자질 태그

use std::fmt;

use serde::{Serialize, Serializer};

/// 조음 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Place {
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    Palatal,
    Velar,
    Glottal,
}

/// 조음 방법
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Manner {
    Plosive,
    Affricate,
    Fricative,
    Nasal,
    Liquid,
}

/// 혀의 높이
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Height {
    High,
    Mid,
    Low,
}

/// 혀의 앞뒤 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Backness {
    Front,
    Back,
}

/// 입술 모양
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rounding {
    Round,
    Unround,
}

/// 자음 자질: 위치 또는 방법
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConsonantFeature {
    Place(Place),
    Manner(Manner),
}

/// 모음 자질: 축(높이/앞뒤/원순) 이름을 함께 가짐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VowelFeature {
    Height(Height),
    Backness(Backness),
    Rounding(Rounding),
}

impl ConsonantFeature {
    pub fn name(&self) -> &'static str {
        match self {
            ConsonantFeature::Place(place) => match place {
                Place::Bilabial => "bilabial",
                Place::Labiodental => "labiodental",
                Place::Dental => "dental",
                Place::Alveolar => "alveolar",
                Place::Palatal => "palatal",
                Place::Velar => "velar",
                Place::Glottal => "glottal",
            },
            ConsonantFeature::Manner(manner) => match manner {
                Manner::Plosive => "plosive",
                Manner::Affricate => "affricate",
                Manner::Fricative => "fricative",
                Manner::Nasal => "nasal",
                Manner::Liquid => "liquid",
            },
        }
    }
}

impl VowelFeature {
    /// 축 이름 (height, backness, rounding)
    pub fn axis(&self) -> &'static str {
        match self {
            VowelFeature::Height(_) => "height",
            VowelFeature::Backness(_) => "backness",
            VowelFeature::Rounding(_) => "rounding",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VowelFeature::Height(Height::High) => "high",
            VowelFeature::Height(Height::Mid) => "mid",
            VowelFeature::Height(Height::Low) => "low",
            VowelFeature::Backness(Backness::Front) => "front",
            VowelFeature::Backness(Backness::Back) => "back",
            VowelFeature::Rounding(Rounding::Round) => "round",
            VowelFeature::Rounding(Rounding::Unround) => "unround",
        }
    }
}

impl fmt::Display for ConsonantFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for VowelFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.axis(), self.name())
    }
}

impl Serialize for ConsonantFeature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for VowelFeature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
