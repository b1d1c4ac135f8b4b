//! WebP画像をPNG画像に変換するライブラリ。
//!
//! デコードとエンコードは `image` クレートに任せ、このクレートはパスの検証、
//! エラーの分類、出力ファイルの安全な書き込みだけを担当します。

pub mod domain;
pub mod error;

use domain::{ConversionRequest, PngFile, WebpImage};
use error::ConvertError;
use std::path::Path;
use tracing::debug;

/// WebPファイルを読み込み、PNGファイルとして書き出します。
///
/// 検証は「パスが空でない → 入力が読み取り可能なファイル → 出力先の親ディレクトリが存在する」
/// の順に行われ、最初に失敗した項目のエラーを返します。出力先に既存のファイルがあれば上書きします。
///
/// 失敗した場合、出力先には何も書き込まれません。同じ出力先への同時呼び出しの順序は保証しないため、
/// 呼び出し側で調停してください。
///
/// # 戻り値
/// * `Ok(())`: 出力先に有効なPNGファイルが作成された場合。
/// * `Err(ConvertError)`: 検証・デコード・エンコード・書き込みのいずれかに失敗した場合。
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), ConvertError> {
    convert_with(input, output, true)
}

/// `convert` と同じですが、`overwrite` が `false` の場合は既存の出力ファイルを上書きしません。
///
/// 出力先が既に存在した場合は `ConvertError::InvalidOutput` (原因は `io::ErrorKind::AlreadyExists`)
/// を返します。存在確認は最後の置き換えと同時に行われるため、変換中に作られたファイルも上書きしません。
pub fn convert_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    overwrite: bool,
) -> Result<(), ConvertError> {
    let request = ConversionRequest::new(input.as_ref(), output.as_ref())?;
    debug!("変換開始: {} -> {}", request.input(), request.output());

    let image = WebpImage::decode(request.input())?;
    let png = PngFile::create_file(&image)?;
    png.save_to_path(request.output(), overwrite)
}
