use std::path::PathBuf;

use anyhow::Context;
use chemphys_toolbox::{app, config, i18n};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 화학/물리 공식 계산기 (CLI)
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 표시 언어: auto, ko, en
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 로그 레벨 (RUST_LOG 가 있으면 그쪽이 우선)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);
    if let Err(err) = try_run(&args) {
        eprintln!("오류: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // 메뉴 출력과 섞이지 않도록 stderr 로 보낸다
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn try_run(args: &Args) -> anyhow::Result<()> {
    let mut cfg = config::load_or_default(&args.config)
        .with_context(|| format!("설정 파일을 읽을 수 없습니다: {}", args.config.display()))?;
    let lang = i18n::resolve_language(&args.lang, Some(&cfg.language));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::info!(language = %lang, config = %args.config.display(), "starting");
    app::run(&mut cfg, &args.config, &tr)?;
    Ok(())
}
