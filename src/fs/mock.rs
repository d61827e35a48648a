//! テスト用モックファイルシステム

use super::*;
use crate::error::BpmError;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, MockFile>>,
}

struct MockFile {
    content: Vec<u8>,
    mtime: SystemTime,
    file_type: FsFileType,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile {
                content: content.as_bytes().to_vec(),
                mtime: SystemTime::now(),
                file_type: FsFileType::File,
            },
        );
    }

    /// 更新時刻を指定してファイルを追加
    ///
    /// `age_secs` 秒だけ過去の mtime を持つファイルになる。
    pub fn add_file_aged(&self, path: &str, content: &str, age_secs: u64) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile {
                content: content.as_bytes().to_vec(),
                mtime: SystemTime::now() - Duration::from_secs(age_secs),
                file_type: FsFileType::File,
            },
        );
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile {
                content: Vec::new(),
                mtime: SystemTime::now(),
                file_type: FsFileType::Dir,
            },
        );
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> BpmError {
    BpmError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("not found: {}", path.display()),
    ))
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .map(|f| f.file_type == FsFileType::Dir)
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        // 中間ディレクトリもまとめて登録する
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.add_dir(current.to_string_lossy().as_ref());
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let files = self.files.read().unwrap();
        let file = files
            .get(path.to_string_lossy().as_ref())
            .ok_or_else(|| not_found(path))?;
        Ok(String::from_utf8_lossy(&file.content).to_string())
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.files.write().unwrap().insert(
            path.to_string_lossy().to_string(),
            MockFile {
                content: content.to_vec(),
                mtime: SystemTime::now(),
                file_type: FsFileType::File,
            },
        );
        Ok(())
    }

    fn rename(&self, src: &Path, dst: &Path) -> Result<()> {
        let mut files = self.files.write().unwrap();
        let file = files
            .remove(src.to_string_lossy().as_ref())
            .ok_or_else(|| not_found(src))?;
        files.insert(dst.to_string_lossy().to_string(), file);
        Ok(())
    }

    fn mtime(&self, path: &Path) -> Result<SystemTime> {
        let files = self.files.read().unwrap();
        let file = files
            .get(path.to_string_lossy().as_ref())
            .ok_or_else(|| not_found(path))?;
        Ok(file.mtime)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>> {
        let files = self.files.read().unwrap();
        if !matches!(
            files.get(path.to_string_lossy().as_ref()).map(|f| f.file_type),
            Some(FsFileType::Dir)
        ) {
            return Err(not_found(path));
        }

        let entries = files
            .iter()
            .filter(|(key, _)| Path::new(key).parent() == Some(path))
            .map(|(key, file)| FsDirEntry {
                path: PathBuf::from(key),
                file_type: file.file_type,
            })
            .collect();
        Ok(entries)
    }
}
