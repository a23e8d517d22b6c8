//! 자모 분해 핵심 모듈

pub mod decomposer;
pub mod jamo;
pub mod triple;
pub mod unicode;
