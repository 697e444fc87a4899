//! Image preview handles for selected files.
//!
//! A [`PreviewSource`] turns a [`FileRef`] into a displayable
//! [`PreviewHandle`] and takes it back when it is no longer needed.
//! [`ImagePreview`] owns at most one live handle and keeps it in step with
//! the draft's image field: the old handle is released before a new one is
//! acquired, and clearing the field releases it.
//!
//! Handles are not `Clone` and [`PreviewSource::release`] consumes them, so a
//! handle cannot be released twice or kept alive after release.

use std::collections::HashSet;
use std::fs::File;

use log::{debug, warn};

use crate::error::{Result, WizardError};
use crate::models::FileRef;

/// A transient reference to a selected image, usable for on-screen preview.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewHandle {
    id: u64,
    uri: String,
}

impl PreviewHandle {
    pub fn new(id: u64, uri: impl Into<String>) -> Self {
        Self {
            id,
            uri: uri.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Displayable URI of the preview.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Issues and revokes preview handles.
pub trait PreviewSource {
    /// Creates a handle for `file`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read.
    fn acquire(&mut self, file: &FileRef) -> Result<PreviewHandle>;

    /// Revokes a handle previously returned by [`PreviewSource::acquire`].
    fn release(&mut self, handle: PreviewHandle);
}

/// Default source backed by the local file system.
///
/// Acquisition opens the file to make sure it is readable and hands out a
/// `preview://<n>/<file name>` URI.
#[derive(Debug, Default)]
pub struct FilePreviewSource {
    next_id: u64,
    live: HashSet<u64>,
}

impl FilePreviewSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles issued and not yet released.
    pub fn live_handles(&self) -> usize {
        self.live.len()
    }
}

impl PreviewSource for FilePreviewSource {
    fn acquire(&mut self, file: &FileRef) -> Result<PreviewHandle> {
        File::open(file.path()).map_err(|e| WizardError::FileSystem {
            path: file.path().to_path_buf(),
            source: e,
        })?;

        self.next_id += 1;
        let id = self.next_id;
        self.live.insert(id);
        Ok(PreviewHandle::new(id, format!("preview://{id}/{}", file.name())))
    }

    fn release(&mut self, handle: PreviewHandle) {
        if !self.live.remove(&handle.id) {
            warn!("Released unknown preview handle {}", handle.id);
        }
    }
}

/// Keeps at most one preview handle alive for the draft's image.
pub struct ImagePreview {
    source: Box<dyn PreviewSource>,
    current: Option<(FileRef, PreviewHandle)>,
}

impl ImagePreview {
    pub fn new(source: Box<dyn PreviewSource>) -> Self {
        Self {
            source,
            current: None,
        }
    }

    /// URI of the live preview, if any.
    pub fn uri(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, handle)| handle.uri())
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Brings the held handle in line with `file`.
    ///
    /// The same file keeps its handle. A different file releases the old
    /// handle first and then acquires a new one. `None` releases the handle.
    /// A failed acquisition leaves no preview.
    pub fn sync(&mut self, file: Option<&FileRef>) {
        if let (Some((held, _)), Some(wanted)) = (&self.current, file) {
            if held == wanted {
                return;
            }
        }

        self.release();

        if let Some(file) = file {
            match self.source.acquire(file) {
                Ok(handle) => {
                    debug!("Acquired preview {} for {}", handle.uri(), file.name());
                    self.current = Some((file.clone(), handle));
                }
                Err(e) => warn!("Image preview unavailable: {e}"),
            }
        }
    }

    /// Releases the held handle, if any.
    pub fn release(&mut self) {
        if let Some((file, handle)) = self.current.take() {
            debug!("Releasing preview {} for {}", handle.uri(), file.name());
            self.source.release(handle);
        }
    }
}

impl Drop for ImagePreview {
    fn drop(&mut self) {
        self.release();
    }
}
