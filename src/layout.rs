use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub const SKELETON_FILE: &str = "skeleton.ozz";
pub const ARCHIVE_FILE: &str = "archive.ozz";
pub const OZZ_EXTENSION: &str = "ozz";
pub const SOURCE_EXTENSION: &str = "fbx";

/// Where sources are read from and where converted files land.
/// Neither directory is checked for existence here.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn pose_file(&self, pose_name: &str) -> PathBuf {
        self.input_dir.join(pose_name)
    }

    pub fn skeleton_path(&self) -> PathBuf {
        self.output_dir.join(SKELETON_FILE)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(ARCHIVE_FILE)
    }

    pub fn source_path(&self, entry: &OsStr) -> PathBuf {
        self.input_dir.join(entry)
    }

    pub fn animation_path(&self, entry: &OsStr) -> PathBuf {
        let mut name = animation_stem(entry);
        name.push(".");
        name.push(OZZ_EXTENSION);
        self.output_dir.join(name)
    }
}

/// `.` and `..` as reported by some directory listings.
pub fn is_pseudo_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

/// Entry name with a trailing `.fbx` removed. Any other name is kept whole,
/// so `walk.bvh` and `walk.fbx` never share an output file.
pub fn animation_stem(name: &OsStr) -> OsString {
    let path = Path::new(name);
    match (path.extension(), path.file_stem()) {
        (Some(ext), Some(stem)) if ext == SOURCE_EXTENSION => stem.to_os_string(),
        _ => name.to_os_string(),
    }
}
