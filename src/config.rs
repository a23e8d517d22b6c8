//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::{NasalizationMode, PipelineOptions};

/// 출력 형식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Eumun 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EumunConfig {
    /// 비음화 방식 (기본: 일괄 ㅇ)
    #[serde(default)]
    pub nasalization: NasalizationMode,
    /// 파이프라인 최대 반복 횟수 (1 = 단일 패스)
    #[serde(default = "default_max_passes")]
    pub max_passes: u32,
    /// CLI 출력 형식
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_max_passes() -> u32 {
    1
}

impl Default for EumunConfig {
    fn default() -> Self {
        Self {
            nasalization: NasalizationMode::default(),
            max_passes: default_max_passes(),
            output: OutputFormat::default(),
        }
    }
}

impl EumunConfig {
    /// 설정을 파이프라인 옵션으로 변환
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::new()
            .with_nasalization(self.nasalization)
            .with_max_passes(self.max_passes)
    }
}

/// 설정 파일 경로: ~/.config/eumun/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("eumun").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> EumunConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> EumunConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            EumunConfig::default()
        }),
        Err(_) => EumunConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &EumunConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리는 자동 생성)
pub fn save_config_to(config: &EumunConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    log::info!("설정 저장: {}", path.display());
    Ok(())
}
