//! 음소 분류기
//!
//! 자음/모음의 조음 자질, 변이음, 분포 제약, 겹받침 단순화를 조회합니다.
//! 분해기나 규칙 파이프라인과 무관하게 호환용 자모 기호 하나로 호출합니다.
//!
//! # 사용 예시
//!
//! ```
//! use eumun::phoneme::{allophone, classify_consonant, simplify_final, Position};
//!
//! let names: Vec<_> = classify_consonant('ㅂ').iter().map(|f| f.name()).collect();
//! assert_eq!(names, vec!["bilabial", "plosive"]);
//! assert_eq!(allophone('ㅂ', Position::Final), "p̚");
//! assert_eq!(simplify_final('ㄳ'), 'ㄱ');
//! ```

mod classifier;
pub mod features;
mod tables;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use classifier::{
    allophone, classify_consonant, classify_vowel, distribution_constraint, phoneme_distinction,
    simplify_final, Distinction,
};
pub use features::{ConsonantFeature, VowelFeature};

/// 음절 안의 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Initial,
    Medial,
    Final,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Initial, Position::Medial, Position::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Initial => "initial",
            Position::Medial => "medial",
            Position::Final => "final",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initial" => Ok(Position::Initial),
            "medial" => Ok(Position::Medial),
            "final" => Ok(Position::Final),
            other => Err(format!("알 수 없는 위치: {}", other)),
        }
    }
}

/// 위치별 값 묶음
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByPosition<T> {
    pub initial: T,
    pub medial: T,
    #[serde(rename = "final")]
    pub final_: T,
}

impl<T> ByPosition<T> {
    fn from_fn(f: impl Fn(Position) -> T) -> Self {
        Self {
            initial: f(Position::Initial),
            medial: f(Position::Medial),
            final_: f(Position::Final),
        }
    }
}

/// 기호 하나에 대한 분류기 조회 결과 전체
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonemeReport {
    pub symbol: char,
    pub consonant_features: BTreeSet<ConsonantFeature>,
    pub vowel_features: BTreeSet<VowelFeature>,
    pub allophones: ByPosition<String>,
    pub distribution: ByPosition<bool>,
    pub simplified: char,
}

/// 기호 하나에 대해 모든 분류 조회를 실행
pub fn describe_phoneme(symbol: char) -> PhonemeReport {
    PhonemeReport {
        symbol,
        consonant_features: classify_consonant(symbol),
        vowel_features: classify_vowel(symbol),
        allophones: ByPosition::from_fn(|position| allophone(symbol, position)),
        distribution: ByPosition::from_fn(|position| distribution_constraint(symbol, position)),
        simplified: simplify_final(symbol),
    }
}

impl fmt::Display for PhonemeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |names: Vec<String>| {
            if names.is_empty() {
                "-".to_string()
            } else {
                names.join(", ")
            }
        };
        writeln!(f, "음소: {}", self.symbol)?;
        writeln!(
            f,
            "  자음 자질: {}",
            join(self.consonant_features.iter().map(|c| c.to_string()).collect())
        )?;
        writeln!(
            f,
            "  모음 자질: {}",
            join(self.vowel_features.iter().map(|v| v.to_string()).collect())
        )?;
        writeln!(
            f,
            "  변이음: initial={}, medial={}, final={}",
            self.allophones.initial, self.allophones.medial, self.allophones.final_
        )?;
        writeln!(
            f,
            "  분포: initial={}, medial={}, final={}",
            self.distribution.initial, self.distribution.medial, self.distribution.final_
        )?;
        write!(f, "  받침 단순화: {}", self.simplified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse_and_display() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>(), Ok(position));
            assert_eq!(position.to_string(), position.as_str());
        }
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_serde() {
        let json = serde_json::to_string(&Position::Final).unwrap();
        assert_eq!(json, r#""final""#);
        let parsed: Position = serde_json::from_str(r#""medial""#).unwrap();
        assert_eq!(parsed, Position::Medial);
    }

    #[test]
    fn test_describe_consonant() {
        let report = describe_phoneme('ㅂ');
        assert_eq!(report.consonant_features.len(), 2);
        assert!(report.vowel_features.is_empty());
        assert_eq!(report.allophones.final_, "p̚");
        assert!(report.distribution.initial);
        assert!(report.distribution.final_);
        assert_eq!(report.simplified, 'ㅂ');
    }

    #[test]
    fn test_describe_cluster() {
        let report = describe_phoneme('ㄼ');
        assert!(report.consonant_features.is_empty());
        assert_eq!(report.simplified, 'ㄹ');
        assert!(!report.distribution.medial);
    }

    #[test]
    fn test_report_display() {
        let text = describe_phoneme('ㅣ').to_string();
        assert!(text.contains("height:high"));
        assert!(text.contains("자음 자질: -"));
    }

    #[test]
    fn test_report_serialize() {
        let value = serde_json::to_value(describe_phoneme('ㄹ')).unwrap();
        assert_eq!(value["symbol"], "ㄹ");
        assert_eq!(value["allophones"]["medial"], "l");
        assert_eq!(value["allophones"]["final"], "ㄹ");
        assert_eq!(value["consonant_features"][0], "alveolar");
    }
}
