use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 変換処理で発生するエラーの種類。
///
/// `ConvertError` から原因を取り除いた単純なタグで、呼び出し側での分岐やテストでの比較に使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyPath,
    InvalidInput,
    InvalidOutput,
    Decoding,
    Encoding,
}

/// `convert` が返すエラー。
///
/// 各バリアントは発生箇所で生成され、元になったエラーを `source()` として保持する。
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("ファイルパスが空です")]
    EmptyPath,

    #[error("入力ファイルが無効です: {}", path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("出力先パスが無効です: {}", path.display())]
    InvalidOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("WebPのデコードに失敗しました")]
    Decoding(#[source] image::ImageError),

    #[error("PNGのエンコードに失敗しました")]
    Encoding(#[source] image::ImageError),
}

impl ConvertError {
    /// エラーの種類を返します。
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::EmptyPath => ErrorKind::EmptyPath,
            ConvertError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ConvertError::InvalidOutput { .. } => ErrorKind::InvalidOutput,
            ConvertError::Decoding(_) => ErrorKind::Decoding,
            ConvertError::Encoding(_) => ErrorKind::Encoding,
        }
    }

    pub(crate) fn invalid_input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::InvalidInput {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::InvalidOutput {
            path: path.into(),
            source,
        }
    }
}

/// コマンドライン層のエラー。
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("出力ファイル名を決定できません: {0}")]
    OutputName(String),

    #[error("出力ファイルが既に存在します: {0}")]
    OutputExists(String),
}
