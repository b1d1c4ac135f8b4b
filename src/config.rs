//! 起動時に一度だけ決定される実行設定。
//!
//! コマンドライン引数と環境変数 (`clap` が解決済み) から出力パスを確定させ、
//! `workflow::run` に明示的に渡す。

use crate::cli::Args;
use std::path::{Path, PathBuf};
use webp2png::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
    /// `false` の場合、既存の出力ファイルがあればエラーにする。
    pub overwrite: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, AppError> {
        let output = match args.output {
            Some(output) => output,
            None => derive_output_path(&args.input, args.outdir.as_deref()).ok_or_else(|| {
                AppError::OutputName(args.input.display().to_string())
            })?,
        };

        Ok(Self {
            input: args.input,
            output,
            verbose: args.verbose,
            overwrite: !args.no_clobber,
        })
    }

    /// `RUST_LOG` が未設定のときに使うログフィルタ。
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "webp2png=debug"
        } else {
            "webp2png=warn"
        }
    }
}

/// 入力ファイル名の拡張子を `.png` に置き換えた出力パスを組み立てます。
///
/// `outdir` が指定されていればその中に、なければ入力ファイルと同じ場所に置きます。
/// ファイル名部分を持たないパス (`..` など) の場合は `None`。
pub fn derive_output_path(input: &Path, outdir: Option<&Path>) -> Option<PathBuf> {
    let stem = input.file_stem()?;
    let mut file_name = stem.to_os_string();
    file_name.push(".png");

    let dir = outdir.or_else(|| input.parent()).unwrap_or_else(|| Path::new(""));
    Some(dir.join(file_name))
}
