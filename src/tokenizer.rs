//! 형태소 분리 경계
//!
//! 형태소 분석기는 외부 협력자입니다. 이 크레이트는 `텍스트 -> 형태소 목록`
//! 함수만 요구하며, 기본 구현으로 공백/문장부호 기준 분리기를 제공합니다.

/// 텍스트를 순서 있는 형태소 문자열 목록으로 분리
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// 외부 형태소 분석기를 클로저로 연결
impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// 기본 분리기
///
/// - 공백은 구분자로만 쓰이고 버려짐
/// - 한글/영문/숫자가 이어진 구간은 토큰 하나
/// - 문장부호는 한 글자씩 토큰
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut word = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() {
                word.push(ch);
                continue;
            }
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if !ch.is_whitespace() {
                tokens.push(ch.to_string());
            }
        }

        if !word.is_empty() {
            tokens.push(word);
        }
        tokens
    }
}
