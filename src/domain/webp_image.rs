use super::paths::WebpFilePath;
use crate::error::ConvertError;
use image::codecs::webp::WebPDecoder;
use image::{DynamicImage, GenericImageView, ImageDecoder, Limits};
use std::io::{BufRead, BufReader, Seek};
use tracing::debug;

/// WebPをデコードして得られた、メモリ上のラスタ画像。
///
/// 1回の変換の間だけ保持され、PNGへのエンコードに渡される。
#[derive(Debug)]
pub struct WebpImage {
    image: DynamicImage,
}

impl WebpImage {
    /// ファイルを開いてWebPとしてデコードします。
    ///
    /// ファイルハンドルはこの関数の中だけで保持され、デコードの成否にかかわらず閉じられます。
    pub fn decode(path: &WebpFilePath) -> Result<Self, ConvertError> {
        let file = path.open()?;
        debug!("WebPをデコード中: {}", path);
        Self::from_reader(BufReader::new(file))
    }

    /// 任意のリーダーからWebPをデコードします。
    ///
    /// ヘッダの破損・未対応の機能・途中で切れたデータなど、デコーダのエラーはすべて
    /// `ConvertError::Decoding` になります。ヘッダが `image::Limits` の既定値を超える
    /// メモリを要求する場合も、バッファを確保する前に `Decoding` として失敗します。
    pub fn from_reader<R: BufRead + Seek>(reader: R) -> Result<Self, ConvertError> {
        let mut decoder = WebPDecoder::new(reader).map_err(ConvertError::Decoding)?;

        let limits = Limits::default();
        limits
            .clone()
            .reserve(decoder.total_bytes())
            .map_err(ConvertError::Decoding)?;
        decoder.set_limits(limits).map_err(ConvertError::Decoding)?;

        let image = DynamicImage::from_decoder(decoder).map_err(ConvertError::Decoding)?;
        let (width, height) = image.dimensions();
        debug!(width, height, color = ?image.color(), "デコード完了");

        Ok(Self { image })
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}
