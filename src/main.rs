//! Eumun - 한국어 음운 변동 분석기
//!
//! 사용법:
//!   eumun [OPTIONS] [--] [TEXT...]
//!   eumun phoneme SYMBOL...
//!   eumun config [OPTIONS]
//!
//! TEXT가 없으면 표준 입력을 읽습니다.

use std::io::{self, Read};
use std::process::ExitCode;

use eumun::analysis::analyze;
use eumun::config::{config_path, load_config, save_config, EumunConfig, OutputFormat};
use eumun::phoneme::describe_phoneme;
use eumun::rules::NasalizationMode;
use eumun::tokenizer::SimpleTokenizer;

const USAGE: &str = "\
사용법:
  eumun [OPTIONS] [--] [TEXT...]    텍스트 분석 (TEXT가 없으면 표준 입력)
  eumun phoneme SYMBOL...           음소 분류
  eumun config [OPTIONS]            옵션을 설정 파일에 저장

첫 단어가 phoneme/config이면 하위 명령으로 처리합니다.
그 단어 자체를 분석하려면 -- 뒤에 적으세요 (eumun -- phoneme).

옵션:
  --json        JSON으로 출력
  --text        텍스트로 출력
  --passes N    파이프라인 최대 반복 횟수 (기본 1)
  --by-place    조음 위치별 비음화 (ㄱ→ㅇ, ㄷ→ㄴ, ㅂ→ㅁ)
  --uniform     ㄱ, ㄷ, ㅂ 받침을 모두 ㅇ으로 비음화 (기본)
  -h, --help    도움말 출력";

/// 실행할 명령
#[derive(Debug, PartialEq)]
enum Command {
    Analyze(Vec<String>),
    Phoneme(Vec<String>),
    Config,
    Help,
}

/// 명령행 인자
#[derive(Debug, Default)]
struct CliArgs {
    output: Option<OutputFormat>,
    passes: Option<u32>,
    nasalization: Option<NasalizationMode>,
}

impl CliArgs {
    /// 명령행 옵션을 설정 위에 덮어씀
    fn apply_to(&self, config: &mut EumunConfig) {
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(passes) = self.passes {
            config.max_passes = passes;
        }
        if let Some(mode) = self.nasalization {
            config.nasalization = mode;
        }
    }
}

fn parse_args(args: &[String]) -> Result<(Command, CliArgs), String> {
    let mut cli = CliArgs::default();
    let mut rest = Vec::new();
    let mut literal = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--" => {
                literal = rest.is_empty();
                rest.extend(iter.by_ref().cloned());
            }
            "-h" | "--help" => return Ok((Command::Help, cli)),
            "--json" => cli.output = Some(OutputFormat::Json),
            "--text" => cli.output = Some(OutputFormat::Text),
            "--by-place" => cli.nasalization = Some(NasalizationMode::ByPlace),
            "--uniform" => cli.nasalization = Some(NasalizationMode::Uniform),
            "--passes" => {
                let value = iter.next().ok_or("--passes 값이 없습니다")?;
                let n = value
                    .parse::<u32>()
                    .map_err(|e| format!("--passes 값이 잘못되었습니다 ({}): {}", value, e))?;
                cli.passes = Some(n);
            }
            _ => rest.push(arg.clone()),
        }
    }

    let command = match rest.first().map(String::as_str) {
        Some("phoneme") if !literal => Command::Phoneme(rest.split_off(1)),
        Some("config") if !literal => {
            if rest.len() > 1 {
                return Err(format!("config에 알 수 없는 인자: {}", rest[1..].join(" ")));
            }
            Command::Config
        }
        _ => Command::Analyze(rest),
    };

    Ok((command, cli))
}

fn read_stdin() -> Result<String, io::Error> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("JSON 직렬화 실패: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn run(command: Command, cli: CliArgs) -> Result<(), String> {
    let mut config = load_config();
    cli.apply_to(&mut config);

    match command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Config => {
            save_config(&config)?;
            println!("설정 저장: {}", config_path().display());
            print_json(&config)
        }
        Command::Phoneme(symbols) => {
            let reports: Vec<_> = symbols
                .iter()
                .flat_map(|s| s.chars())
                .map(describe_phoneme)
                .collect();
            if reports.is_empty() {
                return Err("분류할 기호가 없습니다".to_string());
            }
            match config.output {
                OutputFormat::Json => print_json(&reports),
                OutputFormat::Text => {
                    for report in &reports {
                        println!("{}", report);
                    }
                    Ok(())
                }
            }
        }
        Command::Analyze(words) => {
            let text = if words.is_empty() {
                read_stdin().map_err(|e| format!("표준 입력 읽기 실패: {}", e))?
            } else {
                words.join(" ")
            };

            let options = config.pipeline_options();
            log::debug!("파이프라인 옵션: {:?}", options);
            let analyses = analyze(&text, &SimpleTokenizer, &options);

            match config.output {
                OutputFormat::Json => print_json(&analyses),
                OutputFormat::Text => {
                    for analysis in &analyses {
                        println!("{}", analysis);
                    }
                    Ok(())
                }
            }
        }
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (기본 warn, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let (command, cli) = match parse_args(&argv) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match run(command, cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_analyze_with_flags() {
        let (command, cli) = parse_args(&args(&["--json", "학교", "--passes", "3", "국물"])).unwrap();
        assert_eq!(command, Command::Analyze(args(&["학교", "국물"])));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.passes, Some(3));
        assert_eq!(cli.nasalization, None);
    }

    #[test]
    fn test_no_text_reads_stdin() {
        let (command, _) = parse_args(&[]).unwrap();
        assert_eq!(command, Command::Analyze(Vec::new()));
    }

    #[test]
    fn test_phoneme_subcommand() {
        let (command, cli) = parse_args(&args(&["phoneme", "ㅂ", "--json", "ㅣ"])).unwrap();
        assert_eq!(command, Command::Phoneme(args(&["ㅂ", "ㅣ"])));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_double_dash_keeps_subcommand_word() {
        let (command, _) = parse_args(&args(&["--", "phoneme", "--json"])).unwrap();
        assert_eq!(command, Command::Analyze(args(&["phoneme", "--json"])));

        // -- 앞에 이미 단어가 있으면 하위 명령 판정은 그대로
        let (command, _) = parse_args(&args(&["phoneme", "--", "ㄹ"])).unwrap();
        assert_eq!(command, Command::Phoneme(args(&["ㄹ"])));
    }

    #[test]
    fn test_passes_missing_or_invalid() {
        assert!(parse_args(&args(&["--passes"])).is_err());
        let err = parse_args(&args(&["--passes", "두번"])).unwrap_err();
        assert!(err.contains("두번"));
        assert!(parse_args(&args(&["--passes", "-1"])).is_err());
    }

    #[test]
    fn test_help_short_circuits() {
        // -h 뒤의 잘못된 인자는 보지 않음
        let (command, _) = parse_args(&args(&["-h", "--passes"])).unwrap();
        assert_eq!(command, Command::Help);
        let (command, _) = parse_args(&args(&["학교", "--help"])).unwrap();
        assert_eq!(command, Command::Help);
    }

    #[test]
    fn test_config_subcommand() {
        let (command, cli) = parse_args(&args(&["config", "--by-place", "--passes", "2"])).unwrap();
        assert_eq!(command, Command::Config);

        let mut config = EumunConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.nasalization, NasalizationMode::ByPlace);
        assert_eq!(config.max_passes, 2);
        assert_eq!(config.output, OutputFormat::Text);

        assert!(parse_args(&args(&["config", "학교"])).is_err());
    }

    #[test]
    fn test_flags_override_loaded_config() {
        let mut config = EumunConfig {
            nasalization: NasalizationMode::ByPlace,
            max_passes: 4,
            output: OutputFormat::Json,
        };
        let (_, cli) = parse_args(&args(&["--uniform", "--text"])).unwrap();
        cli.apply_to(&mut config);
        assert_eq!(config.nasalization, NasalizationMode::Uniform);
        assert_eq!(config.max_passes, 4);
        assert_eq!(config.output, OutputFormat::Text);
    }
}
