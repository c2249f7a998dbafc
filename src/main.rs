//! dubeol - 두벌식 한글 조합기 (영문 키 입력 -> 한글)
//!
//! 인자로 받은 문자열 또는 표준 입력의 각 줄을 한 입력 세션으로 처리합니다.
//! `--write-default-config` 는 기본 설정 파일을 만들고 끝냅니다.

use dubeol::config::{config_path, load_config, save_config, DubeolConfig};
use dubeol::core::converter::BACKSPACE;
use dubeol::{InputMode, InputSession};
use std::io::{self, BufRead, Write};

/// 한 줄을 세션으로 처리하고 최종 텍스트 반환
fn run_line(line: &str, config: &DubeolConfig) -> String {
    let mode = if config.start_in_hangul {
        InputMode::Hangul
    } else {
        InputMode::English
    };
    let mut session = InputSession::new(mode);

    for c in line.chars() {
        let edits = if c == config.toggle_key {
            session.toggle_mode();
            Vec::new()
        } else if c == BACKSPACE {
            session.backspace()
        } else {
            session.type_char(c)
        };

        if config.trace_edits && !edits.is_empty() {
            eprintln!("{:?} -> {:?}", c, edits);
        }
    }

    session.finish()
}

const WRITE_DEFAULT_CONFIG: &str = "--write-default-config";

fn main() {
    // 설정 로드 (실패 시 기본값, 에러는 로거 초기화 뒤에 기록)
    let loaded = load_config();
    let config = loaded.clone().unwrap_or_default();

    // 로깅 초기화 (RUST_LOG 우선, 없으면 설정의 log_level)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Err(e) = loaded {
        log::warn!("{}, 기본값 사용", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == WRITE_DEFAULT_CONFIG) {
        match save_config(&DubeolConfig::default()) {
            Ok(()) => println!("{}", config_path().display()),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if !args.is_empty() {
        for arg in &args {
            println!("{}", run_line(arg, &config));
        }
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("표준 입력 읽기 실패: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = writeln!(out, "{}", run_line(&line, &config)) {
            log::error!("출력 실패: {}", e);
            std::process::exit(1);
        }
    }
}
