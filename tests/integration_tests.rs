//! 통합 테스트 - 분해, 음운 변동 파이프라인, 음소 분류

use eumun::core::decomposer::{compose, compose_triple, decompose, decompose_text};
use eumun::phoneme::{
    allophone, classify_consonant, classify_vowel, simplify_final, ConsonantFeature, Position,
    VowelFeature,
};
use eumun::rules::{
    apply_consonant_assimilation, apply_fortition, apply_linked_sound_rule,
    apply_vowel_contraction, NasalizationMode, PipelineOptions, Stage,
};
use eumun::{analyze, apply_phonological_rules, SimpleTokenizer, SoundTriple};

fn render(triples: &[SoundTriple]) -> Vec<String> {
    triples.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_round_trip_with_and_without_coda() {
    for c in ['학', '교', '닭', '값', '가', '힣'] {
        let t = decompose(c);
        assert_eq!(compose(t.onset, t.nucleus, t.coda), Some(c));
    }
}

#[test]
fn test_literal_passthrough() {
    assert_eq!(render(&decompose_text("a1.")), vec!["(a, ∅, ∅)", "(1, ∅, ∅)", "(., ∅, ∅)"]);
}

#[test]
fn test_pairwise_stages_keep_last_triple() {
    let samples = ["학교", "국내", "보아", "산길", "밤손", "신라", "기어", "a", "맏볍ab"];
    for sample in samples {
        let input = decompose_text(sample);
        let outputs = [
            apply_consonant_assimilation(&input, NasalizationMode::Uniform),
            apply_consonant_assimilation(&input, NasalizationMode::ByPlace),
            apply_vowel_contraction(&input),
            apply_fortition(&input),
            apply_linked_sound_rule(&input),
        ];
        for output in outputs {
            assert_eq!(output.last(), input.last(), "{}", sample);
            assert!(output.len() >= input.len(), "{}", sample);
        }
    }
}

#[test]
fn test_stage_lengths_never_shrink() {
    let options = PipelineOptions::default();
    for sample in ["좋다", "놓고", "산길", "디디", "보았다"] {
        let mut current = decompose_text(sample);
        for stage in Stage::ALL {
            let next = stage.apply(&current, &options);
            assert!(next.len() >= current.len(), "{} at {}", sample, stage.name());
            current = next;
        }
    }
}

#[test]
fn test_hakgyo() {
    let jamos = decompose_text("학교");
    assert_eq!(render(&jamos), vec!["(ㅎ, ㅏ, ㄱ)", "(ㄱ, ㅛ, ∅)"]);
    assert_eq!(
        render(&apply_phonological_rules("학교")),
        vec!["(ㅎ, ㅏ, ㄲ)", "(ㄱ, ㅛ, ∅)"]
    );
}

#[test]
fn test_sound_insertion_through_pipeline() {
    assert_eq!(
        render(&apply_phonological_rules("산길")),
        vec!["(ㅅ, ㅏ, ㄴ)", "(ㄸ, ㅣ, ㄹ)", "(ㄱ, ㅣ, ㄹ)"]
    );
}

#[test]
fn test_palatalization_through_pipeline() {
    // 같이: 끝소리 ㅌ→ㄷ, 이는 초성 ㅇ이라 구개음화 없음
    assert_eq!(
        render(&apply_phonological_rules("같이")),
        vec!["(ㄱ, ㅏ, ㄷ)", "(ㅇ, ㅣ, ∅)"]
    );
    assert_eq!(render(&apply_phonological_rules("티")), vec!["(ㅊ, ∅, ∅)"]);
}

#[test]
fn test_classifier_properties() {
    let names: Vec<_> = classify_consonant('ㅂ').iter().map(ConsonantFeature::name).collect();
    assert!(names.contains(&"bilabial"));
    assert!(names.contains(&"plosive"));

    let names: Vec<_> = classify_vowel('ㅣ').iter().map(VowelFeature::name).collect();
    assert!(names.contains(&"high"));
    assert!(names.contains(&"front"));
    assert!(names.contains(&"unround"));
}

#[test]
fn test_simplify_and_allophone() {
    assert_eq!(simplify_final('ㄳ'), 'ㄱ');
    assert_eq!(simplify_final('ㄵ'), 'ㄴ');
    assert_eq!(simplify_final('ㄼ'), 'ㄹ');
    assert_eq!(simplify_final('ㄱ'), 'ㄱ');

    assert_eq!(allophone('ㅂ', Position::Initial), "p");
    assert_eq!(allophone('ㅂ', Position::Final), "p̚");
    assert_eq!(allophone('ㅌ', Position::Initial), "ㅌ");
}

#[test]
fn test_analyze_text() {
    let text = "하늘고에서 맏이하는 아침은 정말 졸리다.";
    let result = analyze(text, &SimpleTokenizer, &PipelineOptions::default());
    let morphemes: Vec<_> = result.iter().map(|a| a.morpheme.as_str()).collect();
    assert_eq!(morphemes, vec!["하늘고에서", "맏이하는", "아침은", "정말", "졸리다", "."]);
    let options = PipelineOptions::default();
    for analysis in &result {
        assert_eq!(analysis.jamos.len(), analysis.morpheme.chars().count());

        // 마지막 슬롯은 다음 슬롯을 보지 않는 단계에서만 바뀜
        let last = vec![*analysis.jamos.last().unwrap()];
        let expected_last = Stage::ALL
            .iter()
            .filter(|stage| !stage.is_pairwise())
            .fold(last, |acc, stage| stage.apply(&acc, &options));
        assert_eq!(analysis.phonological.last(), expected_last.last());
    }
}

#[test]
fn test_compose_triple_rejects_tense_coda() {
    let realized = apply_phonological_rules("학교");
    assert_eq!(compose_triple(&realized[0]), None);
    assert_eq!(compose_triple(&realized[1]), Some('교'));
}
