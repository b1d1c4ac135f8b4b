use crate::error::ConvertError;
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// 変換元のWebPファイルへのパスを表現し、その妥当性を保証する構造体。
///
/// 中身が本当にWebPかどうかはデコーダが判断するため、ここでは拡張子を検証しない。
#[derive(Debug, Clone)]
pub struct WebpFilePath(PathBuf);

impl WebpFilePath {
    /// 新しい `WebpFilePath` インスタンスを生成する。
    ///
    /// パスが存在し、通常のファイルであり、かつ読み取り可能であることを検証する。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|e| ConvertError::invalid_input(path, e))?;
        if !metadata.is_file() {
            return Err(ConvertError::invalid_input(
                path,
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("パス '{}' はファイルではありません。", path.display()),
                ),
            ));
        }

        // 読み取り権限の確認。ハンドルはすぐに閉じる
        File::open(path).map_err(|e| ConvertError::invalid_input(path, e))?;

        Ok(Self(path.to_path_buf()))
    }

    /// 内部の `Path` への参照を返す。
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// ファイルを読み取り用に開く。
    pub fn open(&self) -> Result<File, ConvertError> {
        File::open(&self.0).map_err(|e| ConvertError::invalid_input(&self.0, e))
    }
}

impl fmt::Display for WebpFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
