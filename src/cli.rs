use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// WebP画像をPNG画像に変換するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 変換するWebPファイルのパス
    #[arg(required = true)]
    pub input: PathBuf,

    /// 出力するPNGファイルのパス (オプション: 省略時は入力ファイル名の拡張子を .png にしたもの)
    ///
    /// 指定された場合は --outdir より優先される。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// PNGの出力先フォルダのパス (オプション: デフォルトは入力ファイルと同じフォルダ)
    #[arg(short = 'd', long, env = "WEBP2PNG_OUTDIR")]
    pub outdir: Option<PathBuf>,

    /// 詳細なログを表示する
    #[arg(
        short,
        long,
        env = "WEBP2PNG_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// 出力ファイルが既に存在する場合は上書きせずにエラーにする
    #[arg(long)]
    pub no_clobber: bool,
}
