//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! UI層（`cli` / `config`）とライブラリ（`webp2png::convert`）を仲介する。

use crate::config::Config;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};
use webp2png::error::{AppError, ConvertError};

/// 設定に従って1つのファイルを変換します。
///
/// # 戻り値
/// * `Ok(())`: 変換が完了した場合。
/// * `Err(AppError)`: 出力ファイルが既に存在し上書きが禁止されている場合、または変換に失敗した場合。
pub fn run(config: &Config) -> Result<(), AppError> {
    debug!(?config, "実行設定");

    if !has_webp_extension(&config.input) {
        warn!(
            "入力ファイルの拡張子が .webp ではありません: {}",
            config.input.display()
        );
    }

    if config.overwrite && config.output.exists() {
        info!("既存のファイルを上書きします: {}", config.output.display());
    }

    // 上書き禁止の判定は保存時のリネームと同時に行われる
    webp2png::convert_with(&config.input, &config.output, config.overwrite).map_err(|e| {
        match e {
            ConvertError::InvalidOutput { ref source, .. }
                if !config.overwrite && source.kind() == io::ErrorKind::AlreadyExists =>
            {
                AppError::OutputExists(config.output.display().to_string())
            }
            e => AppError::Convert(e),
        }
    })?;
    info!(
        "変換完了: {} -> {}",
        config.input.display(),
        config.output.display()
    );
    Ok(())
}

/// パスの拡張子が `webp` であるか判定します。
fn has_webp_extension(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case("webp"),
        None => false,
    }
}
