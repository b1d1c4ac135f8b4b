use super::paths::{PngOutputPath, WebpFilePath};
use crate::error::ConvertError;
use std::path::Path;

/// 検証済みの変換要求 (入力パス, 出力パス)。
///
/// `new` を通じてのみ生成でき、その際に以下の順で検証され、最初に失敗した項目のエラーを返す。
/// 1. どちらのパスも空でないこと (`EmptyPath`)
/// 2. 入力が読み取り可能なファイルであること (`InvalidInput`)
/// 3. 出力先の親ディレクトリが存在すること (`InvalidOutput`)
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    input: WebpFilePath,
    output: PngOutputPath,
}

impl ConversionRequest {
    pub fn new(input: &Path, output: &Path) -> Result<Self, ConvertError> {
        if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
            return Err(ConvertError::EmptyPath);
        }

        let input = WebpFilePath::new(input)?;
        let output = PngOutputPath::new(output)?;

        Ok(Self { input, output })
    }

    pub fn input(&self) -> &WebpFilePath {
        &self.input
    }

    pub fn output(&self) -> &PngOutputPath {
        &self.output
    }
}
