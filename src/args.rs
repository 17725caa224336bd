// src/args.rs
use clap::{ArgGroup, Parser, ValueEnum, ValueHint};
use count_loc_infra::IoStrategy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "count_loc",
    version,
    about = "コメントを認識してLOCを集計するツール",
    group(
        ArgGroup::new("target")
            .args(["file", "dir"])
            .required(true)
            .multiple(false)
    )
)]
pub struct Args {
    /// 走査対象のファイル
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "走査/入力")]
    pub file: Option<PathBuf>,

    /// 走査対象のディレクトリ
    #[arg(short, long, value_hint = ValueHint::DirPath, help_heading = "走査/入力")]
    pub dir: Option<PathBuf>,

    /// サブディレクトリも再帰的に走査する
    #[arg(short, long, help_heading = "走査/入力")]
    pub recurse: bool,

    /// 再帰の最大深さ（未指定なら無制限）
    #[arg(long = "max-depth", requires = "recurse", help_heading = "走査/入力")]
    pub max_depth: Option<usize>,

    /// 隠しファイル/ディレクトリも対象にする
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// LOCと見なす最小有意文字数（0なら空行もLOC）
    #[arg(long = "min-chars", default_value_t = 1, help_heading = "解析")]
    pub min_chars: usize,

    /// 単一行コメント記号の上書き
    #[arg(long, value_name = "SYMBOL", help_heading = "解析")]
    pub single: Option<String>,

    /// 複数行コメント開始記号の上書き（--multi-end と対で指定）
    #[arg(long = "multi-start", value_name = "SYMBOL", requires = "multi_end", help_heading = "解析")]
    pub multi_start: Option<String>,

    /// 複数行コメント終了記号の上書き（--multi-start と対で指定）
    #[arg(long = "multi-end", value_name = "SYMBOL", requires = "multi_start", help_heading = "解析")]
    pub multi_end: Option<String>,

    /// 読み取り戦略（結果は戦略に依存しない）
    #[arg(long, value_enum, default_value = "buffered", help_heading = "解析")]
    pub mode: IoMode,

    /// 言語テーブル(JSON)の差し替え
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "解析")]
    pub languages: Option<PathBuf>,

    /// ファイル名(グロブ)で包含
    #[arg(long = "include-file", value_name = "GLOB", help_heading = "フィルタ")]
    pub include_file: Vec<String>,

    /// 拡張子で包含
    #[arg(long = "include-type", value_name = "EXT", help_heading = "フィルタ")]
    pub include_type: Vec<String>,

    /// ディレクトリ名(グロブ)で包含
    #[arg(long = "include-dir", value_name = "GLOB", help_heading = "フィルタ")]
    pub include_dir: Vec<String>,

    /// ファイル名(グロブ)で除外
    #[arg(long = "exclude-file", value_name = "GLOB", help_heading = "フィルタ")]
    pub exclude_file: Vec<String>,

    /// 拡張子で除外
    #[arg(long = "exclude-type", value_name = "EXT", help_heading = "フィルタ")]
    pub exclude_type: Vec<String>,

    /// ディレクトリ名(グロブ)で除外
    #[arg(long = "exclude-dir", value_name = "GLOB", help_heading = "フィルタ")]
    pub exclude_dir: Vec<String>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 出力先ファイル（未指定なら標準出力）
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// ファイルごとの内訳も表示する
    #[arg(long, help_heading = "出力")]
    pub verbose: bool,
}

/// 読み取り戦略の選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum IoMode {
    Complete,
    Buffered,
    Mmap,
}

impl From<IoMode> for IoStrategy {
    fn from(mode: IoMode) -> Self {
        match mode {
            IoMode::Complete => Self::Complete,
            IoMode::Buffered => Self::Buffered,
            IoMode::Mmap => Self::Mmap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}
