use crate::error::ConvertError;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 変換先のPNGファイルへのパス。
///
/// 親ディレクトリが存在することだけを保証する。ファイル自体の有無は問わず、既存なら上書きされる。
#[derive(Debug, Clone)]
pub struct PngOutputPath {
    path: PathBuf,
    parent: PathBuf,
}

impl PngOutputPath {
    /// 親ディレクトリを検証して `PngOutputPath` を生成する。
    ///
    /// `out.png` のようにディレクトリ部分を持たないパスはカレントディレクトリを親とみなす。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();

        let parent = match path.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => p,
            None => {
                return Err(ConvertError::invalid_output(
                    path,
                    io::Error::new(
                        io::ErrorKind::Other,
                        format!("パス '{}' には親ディレクトリがありません。", path.display()),
                    ),
                ))
            }
        };

        let metadata = fs::metadata(parent).map_err(|e| ConvertError::invalid_output(path, e))?;
        if !metadata.is_dir() {
            return Err(ConvertError::invalid_output(
                path,
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("パス '{}' はディレクトリではありません。", parent.display()),
                ),
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            parent: parent.to_path_buf(),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent
    }
}

impl fmt::Display for PngOutputPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
