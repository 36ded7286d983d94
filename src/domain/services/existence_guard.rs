//! # Existence Guard
//!
//! ネットワークアクセス前に全ファイルの存在を確認する

use std::path::Path;

use crate::domain::errors::UploadError;

/// 全パスの存在を確認し、最初に見つからなかったパスでエラーを返す
///
/// ```
/// use gdrive_upload::domain::services::existence_guard::ensure_all_exist;
///
/// let err = ensure_all_exist(&["definitely-missing.ipynb"]).unwrap_err();
/// assert_eq!(err.to_string(), "Required file not found: definitely-missing.ipynb");
/// ```
pub fn ensure_all_exist<P: AsRef<Path>>(paths: &[P]) -> Result<(), UploadError> {
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(UploadError::MissingFile(path.to_path_buf()));
        }
    }
    Ok(())
}
