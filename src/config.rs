//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// dubeol 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DubeolConfig {
    /// 한글 모드로 시작할지 여부
    #[serde(default = "default_start_in_hangul")]
    pub start_in_hangul: bool,
    /// 한/영 전환으로 취급할 문자
    #[serde(default = "default_toggle_key")]
    pub toggle_key: char,
    /// RUST_LOG 미설정 시 기본 로그 레벨
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 변환 결과와 함께 편집 명령을 출력할지 여부
    #[serde(default)]
    pub trace_edits: bool,
}

fn default_start_in_hangul() -> bool {
    true
}

fn default_toggle_key() -> char {
    '\\'
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DubeolConfig {
    fn default() -> Self {
        Self {
            start_in_hangul: default_start_in_hangul(),
            toggle_key: default_toggle_key(),
            log_level: default_log_level(),
            trace_edits: false,
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/dubeol/config.json (없으면 ~/.config)
pub fn config_path() -> PathBuf {
    let is_usable = |p: &PathBuf| p.is_absolute() && p.is_dir();
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(is_usable)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(is_usable)
                .map(|home| home.join(".config"))
        })
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("dubeol").join("config.json")
}

/// 설정 파일 로드
/// 파일이 없으면 기본값, 파싱에 실패하면 에러 메시지를 돌려줍니다.
/// 로거 초기화 전에 불리므로 여기서는 로그를 남기지 않습니다.
pub fn load_config() -> Result<DubeolConfig, String> {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<DubeolConfig, String> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .map_err(|e| format!("설정 파일 파싱 실패 ({}): {}", path.display(), e)),
        Err(_) => Ok(DubeolConfig::default()),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &DubeolConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &DubeolConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DubeolConfig::default();
        assert!(config.start_in_hangul);
        assert_eq!(config.toggle_key, '\\');
        assert_eq!(config.log_level, "warn");
        assert!(!config.trace_edits);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = DubeolConfig {
            start_in_hangul: false,
            toggle_key: '`',
            log_level: "debug".to_string(),
            trace_edits: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: DubeolConfig = serde_json::from_str(&json).unwrap();
        assert!(!parsed.start_in_hangul);
        assert_eq!(parsed.toggle_key, '`');
        assert_eq!(parsed.log_level, "debug");
        assert!(parsed.trace_edits);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"trace_edits": true}"#;
        let config: DubeolConfig = serde_json::from_str(json).unwrap();
        assert!(config.start_in_hangul);
        assert_eq!(config.toggle_key, '\\');
        assert!(config.trace_edits);
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("dubeol/config.json"));
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("dubeol-config-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_path("missing");
        let config = load_config_from(&path).unwrap();
        assert!(config.start_in_hangul);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_malformed_file_reports_error() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.contains("설정 파일 파싱 실패"), "{}", err);
        // 호출자는 에러를 기록한 뒤 기본값으로 진행
        let config = load_config_from(&path).unwrap_or_default();
        assert!(config.start_in_hangul);
        assert_eq!(config.toggle_key, '\\');

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save");
        let config = DubeolConfig {
            start_in_hangul: false,
            toggle_key: '`',
            log_level: "info".to_string(),
            trace_edits: true,
        };
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert!(!loaded.start_in_hangul);
        assert_eq!(loaded.toggle_key, '`');
        assert_eq!(loaded.log_level, "info");
        assert!(loaded.trace_edits);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
