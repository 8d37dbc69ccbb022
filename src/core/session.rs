use tracing::debug;

use super::draft::InvoiceDraft;
use super::error::BeejakError;
use super::snapshot::InvoiceSnapshot;

/// One interactive invoicing session: a draft being edited and, after
/// "generate", the preview of the frozen invoice.
///
/// Closing the preview returns to editing with the details exactly as they
/// were generated, so the user can adjust and generate again.
#[derive(Debug, Clone)]
pub struct InvoiceSession {
    draft: InvoiceDraft,
    preview: Option<InvoiceSnapshot>,
}

impl InvoiceSession {
    pub fn new(draft: InvoiceDraft) -> Self {
        Self {
            draft,
            preview: None,
        }
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    /// Mutable access to the draft. Edits never touch an open preview.
    pub fn draft_mut(&mut self) -> &mut InvoiceDraft {
        &mut self.draft
    }

    /// Freeze the draft and open its preview.
    pub fn generate(&mut self) -> &InvoiceSnapshot {
        self.preview.insert(self.draft.generate())
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    pub fn preview(&self) -> Option<&InvoiceSnapshot> {
        self.preview.as_ref()
    }

    /// Close the preview and resume editing the generated details.
    ///
    /// On error the preview stays open and the draft is left as it was.
    pub fn close_preview(&mut self) -> Result<(), BeejakError> {
        let snapshot = self
            .preview
            .as_ref()
            .ok_or_else(|| BeejakError::Session("no preview is open".into()))?;
        self.draft = InvoiceDraft::from_details(snapshot.to_details(), self.draft.profile())?;
        self.preview = None;
        debug!("closed invoice preview");
        Ok(())
    }

    /// Hand the open preview to the host's print facility.
    #[cfg(feature = "preview")]
    pub fn print<P: crate::preview::PrintTarget>(&self, target: &mut P) -> Result<(), BeejakError> {
        let snapshot = self
            .preview
            .as_ref()
            .ok_or_else(|| BeejakError::Session("nothing to print: no preview is open".into()))?;
        crate::preview::print(snapshot, target)
    }
}
