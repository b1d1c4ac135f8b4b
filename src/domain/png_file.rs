// --- 依存モジュール ---

use super::paths::PngOutputPath;
use super::webp_image::WebpImage;
use crate::error::ConvertError;

use image::codecs::png::PngEncoder;
use image::ImageError;
use std::io::Write;
use tracing::debug;

/// メモリ上にエンコードされたPNGファイル。
///
/// エンコード結果をいったんメモリに保持してから保存することで、
/// エンコードに失敗した場合に出力先へ何も書き込まないようにしている。
#[derive(Debug)]
pub struct PngFile {
    /// 元画像の幅と高さ。
    pub dimensions: (u32, u32),
    /// PNGのバイナリデータ（バイト列）。
    pub png_data: Vec<u8>,
}

impl PngFile {
    /// デコード済みの画像をPNGとしてエンコードします。
    ///
    /// # 戻り値
    /// - `Ok(Self)`: エンコードに成功した場合。
    /// - `Err(ConvertError::Encoding)`: エンコーダがエラーを返した場合。
    pub fn create_file(image: &WebpImage) -> Result<Self, ConvertError> {
        let mut png_data: Vec<u8> = Vec::new();
        image
            .image()
            .write_with_encoder(PngEncoder::new(&mut png_data))
            .map_err(ConvertError::Encoding)?;

        debug!(bytes = png_data.len(), "PNGエンコード完了");

        Ok(Self {
            dimensions: image.dimensions(),
            png_data,
        })
    }

    /// PNGのバイト列を指定されたパスに保存します。
    ///
    /// 出力先と同じディレクトリに一時ファイルを作って全体を書き込み、最後にリネームで置き換える。
    /// 途中で失敗した場合は一時ファイルが削除され、既存の出力ファイルはそのまま残る。
    ///
    /// `overwrite` が `false` の場合、最後の置き換えは出力先が存在しないときにだけ成功する。
    /// 存在確認と置き換えは1回の操作で行われるため、その間に別のプロセスが作ったファイルも上書きしない。
    ///
    /// # 戻り値
    /// - `Err(ConvertError::InvalidOutput)`: 一時ファイルの作成、またはリネームに失敗した場合。
    ///   上書き禁止で出力先が既に存在した場合は、原因が `io::ErrorKind::AlreadyExists` になる。
    /// - `Err(ConvertError::Encoding)`: 書き込みに失敗した場合。
    pub fn save_to_path(&self, path: &PngOutputPath, overwrite: bool) -> Result<(), ConvertError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(".webp2png-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o644));
        }

        let mut tmp = builder
            .tempfile_in(path.parent_dir())
            .map_err(|e| ConvertError::invalid_output(path.as_path(), e))?;

        tmp.write_all(&self.png_data)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| ConvertError::Encoding(ImageError::IoError(e)))?;

        let persisted = if overwrite {
            tmp.persist(path.as_path())
        } else {
            tmp.persist_noclobber(path.as_path())
        };
        persisted.map_err(|e| ConvertError::invalid_output(path.as_path(), e.error))?;

        debug!("保存しました: {}", path);
        Ok(())
    }
}
