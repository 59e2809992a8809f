//! The request sent to `/run-agent`.
//!
//! The server expects a `multipart/form-data` body with exactly three fields: the parameter table,
//! the PDF document and an optional join key. The key is always sent, empty if the user left it blank.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};

pub const PARAMS_FILE_FIELD: &str = "params_file";
pub const PDF_FILE_FIELD: &str = "pdf_file";
pub const KEY_FIELD: &str = "key";

/// A file picked by the user, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name).to_string();
        Self {
            name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only its file name for the upload.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, bytes))
    }

    fn into_part(self) -> Part {
        let part = Part::bytes(self.bytes.to_vec()).file_name(self.name.clone());

        match part.mime_str(&self.content_type) {
            Ok(part) => part,
            Err(err) => {
                tracing::warn!("Dropping content type {:?}: {err}", self.content_type);
                Part::bytes(self.bytes.to_vec()).file_name(self.name)
            }
        }
    }
}

/// A file the user chose whose contents have not necessarily been read yet.
///
/// The form hands over whatever the pickers hold at click time, and the bytes are only pulled
/// once the handler has decided to submit.
#[allow(async_fn_in_trait)]
pub trait PickedFile {
    async fn load(self) -> crate::Result<SelectedFile>;
}

impl PickedFile for SelectedFile {
    async fn load(self) -> crate::Result<SelectedFile> {
        Ok(self)
    }
}

/// Guess the content type the server should see from the file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => "text/csv",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Both files plus the key. Only constructible once both files have been chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunAgentRequest {
    pub params_file: SelectedFile,
    pub pdf_file: SelectedFile,
    pub key: String,
}

impl RunAgentRequest {
    pub fn new(params_file: SelectedFile, pdf_file: SelectedFile, key: impl Into<String>) -> Self {
        Self {
            params_file,
            pdf_file,
            key: key.into(),
        }
    }

    pub fn into_form(self) -> Form {
        Form::new()
            .part(PARAMS_FILE_FIELD, self.params_file.into_part())
            .part(PDF_FILE_FIELD, self.pdf_file.into_part())
            .text(KEY_FIELD, self.key)
    }
}
