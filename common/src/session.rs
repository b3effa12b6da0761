//! Upload/review session state machine
//!
//! `ExtractionSession` is the single owner of an [`UploadState`]. The
//! frontend feeds it file-selection, collaborator and reset events; every
//! extraction attempt is identified by an [`ExtractionToken`] so a result
//! arriving after a reset (or after a newer attempt started) is discarded
//! instead of being applied to a stale session.

use crate::types::{DocumentData, UploadPhase, UploadState};

/// Identifies one extraction attempt. A completion or failure is only
/// applied while its token matches the session's live attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionToken(u64);

/// Owner of the upload/processing/completed/error flow.
#[derive(Debug, Clone, Default)]
pub struct ExtractionSession {
    state: UploadState,
    attempt: u64,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn phase(&self) -> UploadPhase {
        self.state.phase()
    }

    pub fn data(&self) -> Option<DocumentData> {
        self.state.data.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error.clone()
    }

    /// A file read has started. Refused while a read, an extraction or a
    /// finished record is active; the explicit reset path leaves `Completed`.
    pub fn begin_upload(&mut self) -> bool {
        if self.state.uploading || self.state.processing || self.state.completed {
            return false;
        }
        self.state.uploading = true;
        self.state.error = None;
        true
    }

    /// The selection was not a usable image. Surfaces a message without
    /// touching the `processing`/`completed` flags; ignored while an
    /// extraction is in flight or a record is displayed.
    pub fn reject_input(&mut self, message: impl Into<String>) -> bool {
        if self.state.processing || self.state.completed {
            return false;
        }
        self.state.uploading = false;
        self.state.error = Some(message.into());
        true
    }

    /// Image payload ready, hand off to the extraction collaborator.
    ///
    /// Returns the token identifying this attempt, or `None` while another
    /// extraction is in flight or a record is still displayed — new
    /// selections are ignored until a terminal state is reached.
    pub fn begin_extraction(&mut self) -> Option<ExtractionToken> {
        if self.state.processing || self.state.completed {
            return None;
        }
        self.state.uploading = false;
        self.state.processing = true;
        self.state.error = None;
        self.state.data = None;
        self.attempt += 1;
        Some(ExtractionToken(self.attempt))
    }

    /// True while `token` belongs to the live processing attempt.
    pub fn is_current(&self, token: ExtractionToken) -> bool {
        self.state.processing && token.0 == self.attempt
    }

    /// Collaborator finished. Stores the record unless the attempt went
    /// stale, in which case the result is discarded and `false` is returned.
    pub fn complete(&mut self, token: ExtractionToken, record: DocumentData) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.state.processing = false;
        self.state.completed = true;
        self.state.error = None;
        self.state.data = Some(record);
        true
    }

    /// Collaborator failed. Returns to a re-uploadable state with the
    /// message surfaced; stale failures are discarded.
    pub fn fail(&mut self, token: ExtractionToken, message: impl Into<String>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.state.processing = false;
        self.state.data = None;
        self.state.error = Some(message.into());
        true
    }

    /// "Process new document": drop the record and any surfaced error, and
    /// invalidate whatever extraction may still be in flight.
    pub fn reset(&mut self) {
        self.state = UploadState::default();
        self.attempt += 1;
    }
}
