use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Writes a file whose content is `size` repetitions of `fill`.
pub fn write_sized_file(dir: &Path, name: &str, fill: char, size: usize) -> FileSpec {
    let file_spec = FileSpec::new(dir.join(name), fill.to_string().repeat(size));
    write_file(file_spec.clone());
    file_spec
}

pub fn write_generated_files(dir: &Path, files_count: usize) -> Vec<FileSpec> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    let mut specs = Vec::<FileSpec>::new();
    while specs.len() < files_count {
        let file_name = format!("{}_{}.txt", Word().fake::<String>(), specs.len());
        let file_content = Words(5..10).fake::<Vec<String>>().join(" ");

        let file_spec = FileSpec::new(dir.join(&file_name), file_content);
        write_file(file_spec.clone());
        specs.push(file_spec);
    }

    specs
}

pub fn copy_files(files: &[FileSpec], target_dir: &Path) -> Vec<FileSpec> {
    files
        .iter()
        .map(|file_spec| {
            let file_name = file_spec
                .path
                .file_name()
                .unwrap_or_else(|| panic!("File has no name: {:?}", file_spec.path));
            let copy = FileSpec::new(target_dir.join(file_name), file_spec.content.clone());
            write_file(copy.clone());
            copy
        })
        .collect()
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}

pub fn file_name(file_spec: &FileSpec) -> String {
    file_spec
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
