//! Symptom form workflow
//!
//! [`SymptomForm`] composes the five question controls into a single
//! [`SymptomRecord`], enforces the required syncope answer, tracks the
//! in-flight submission and owns the error state shown by the banner.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use aidhf_core::{Grade, SymptomField, SymptomRecord, YesNo};
use tracing::{debug, trace, warn};

use crate::banner::{BannerId, ErrorBanner};
use crate::controls::{BooleanQuestion, FormControl, GradeQuestion};
use crate::disclosure::InfoPanel;

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Question(SymptomField),
    Submit,
    Reset,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Question(SymptomField::Orthopnea)
    }
}

impl FormFocus {
    const ORDER: [FormFocus; 7] = [
        FormFocus::Question(SymptomField::Orthopnea),
        FormFocus::Question(SymptomField::Cough),
        FormFocus::Question(SymptomField::Edema),
        FormFocus::Question(SymptomField::Dizziness),
        FormFocus::Question(SymptomField::Syncope),
        FormFocus::Submit,
        FormFocus::Reset,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next element, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous element, wrapping around.
    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn field(self) -> Option<SymptomField> {
        match self {
            FormFocus::Question(field) => Some(field),
            _ => None,
        }
    }
}

/// The questionnaire and its submission state.
#[derive(Debug)]
pub struct SymptomForm {
    orthopnea: GradeQuestion,
    cough: GradeQuestion,
    edema: GradeQuestion,
    dizziness: GradeQuestion,
    syncope: BooleanQuestion,
    info: [InfoPanel; 5],
    focus: FormFocus,
    error: Option<ErrorBanner>,
    submitting: bool,
    submit_attempted: bool,
    dirty: Arc<AtomicBool>,
    syncope_touched: Arc<AtomicBool>,
}

impl Default for SymptomForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SymptomForm {
    /// Fresh form: every grade 0, syncope unanswered, no error.
    pub fn new() -> Self {
        let defaults = SymptomRecord::default();
        let dirty = Arc::new(AtomicBool::new(false));

        let mut form = Self {
            orthopnea: GradeQuestion::new(defaults.orthopnea),
            cough: GradeQuestion::new(defaults.cough),
            edema: GradeQuestion::new(defaults.edema),
            dizziness: GradeQuestion::new(defaults.dizziness),
            syncope: BooleanQuestion::new(defaults.syncope),
            info: [InfoPanel::new(); 5],
            focus: FormFocus::default(),
            error: None,
            submitting: false,
            submit_attempted: false,
            dirty,
            syncope_touched: Arc::new(AtomicBool::new(false)),
        };
        form.bind_controls();
        form
    }

    fn bind_controls(&mut self) {
        for field in SymptomField::ALL {
            let dirty = self.dirty.clone();
            let name = field.name();
            if let Some(question) = self.grade_question_mut(field) {
                question.register_on_change(Box::new(move |grade: &Grade| {
                    trace!("{} changed to {}", name, grade);
                    dirty.store(true, Ordering::Relaxed);
                }));
                question.register_on_touched(Box::new(move || trace!("{} touched", name)));
            }
        }

        let dirty = self.dirty.clone();
        self.syncope
            .register_on_change(Box::new(move |answer: &Option<YesNo>| {
                trace!("syncope changed to {:?}", answer);
                dirty.store(true, Ordering::Relaxed);
            }));
        let touched = self.syncope_touched.clone();
        self.syncope.register_on_touched(Box::new(move || {
            trace!("syncope touched");
            touched.store(true, Ordering::Relaxed);
        }));
    }

    // ─────────────────────────────────────────────────────────
    // Controls
    // ─────────────────────────────────────────────────────────

    /// Graded control for `field`; `None` for the syncope question.
    pub fn grade_question(&self, field: SymptomField) -> Option<&GradeQuestion> {
        match field {
            SymptomField::Orthopnea => Some(&self.orthopnea),
            SymptomField::Cough => Some(&self.cough),
            SymptomField::Edema => Some(&self.edema),
            SymptomField::Dizziness => Some(&self.dizziness),
            SymptomField::Syncope => None,
        }
    }

    fn grade_question_mut(&mut self, field: SymptomField) -> Option<&mut GradeQuestion> {
        match field {
            SymptomField::Orthopnea => Some(&mut self.orthopnea),
            SymptomField::Cough => Some(&mut self.cough),
            SymptomField::Edema => Some(&mut self.edema),
            SymptomField::Dizziness => Some(&mut self.dizziness),
            SymptomField::Syncope => None,
        }
    }

    pub fn syncope(&self) -> &BooleanQuestion {
        &self.syncope
    }

    pub fn info(&self, field: SymptomField) -> &InfoPanel {
        &self.info[field.index()]
    }

    /// Current answers as a record.
    pub fn record(&self) -> SymptomRecord {
        SymptomRecord {
            orthopnea: *self.orthopnea.value(),
            cough: *self.cough.value(),
            edema: *self.edema.value(),
            dizziness: *self.dizziness.value(),
            syncope: *self.syncope.value(),
        }
    }

    /// Overwrite every answer from outside the form.
    ///
    /// Counts as an external write: change callbacks fire for answers that
    /// differ, nothing is marked touched.
    pub fn write_record(&mut self, record: &SymptomRecord) {
        for field in SymptomField::ALL {
            if let (Some(question), Some(grade)) = (self.grade_question_mut(field), record.grade(field))
            {
                question.write_value(grade);
            }
        }
        self.syncope.write_value(record.syncope);
    }

    /// Whether any answer changed since the form was created or last reset.
    ///
    /// Drives whether the reset action is offered.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Relaxed)
    }

    /// Whether the "answer required" hint applies to the syncope question.
    pub fn syncope_missing(&self) -> bool {
        self.syncope.value().is_none()
            && (self.syncope_touched.load(Ordering::Relaxed) || self.submit_attempted)
    }

    // ─────────────────────────────────────────────────────────
    // Focus and Editing
    // ─────────────────────────────────────────────────────────

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Step the focused question forward. Returns `true` if a value changed.
    pub fn increase(&mut self) -> bool {
        match self.focus.field() {
            Some(SymptomField::Syncope) => self.syncope.select_next(),
            Some(field) => self
                .grade_question_mut(field)
                .is_some_and(|q| q.select_next()),
            None => false,
        }
    }

    /// Step the focused question backward. Returns `true` if a value changed.
    pub fn decrease(&mut self) -> bool {
        match self.focus.field() {
            Some(SymptomField::Syncope) => self.syncope.select_previous(),
            Some(field) => self
                .grade_question_mut(field)
                .is_some_and(|q| q.select_previous()),
            None => false,
        }
    }

    /// Pick a grade for the focused graded question.
    pub fn set_grade(&mut self, value: u8) -> bool {
        let Some(field) = self.focus.field() else {
            return false;
        };
        let grade = match Grade::try_from(value) {
            Ok(grade) => grade,
            Err(e) => {
                debug!("Ignoring grade input: {}", e);
                return false;
            }
        };
        self.grade_question_mut(field)
            .is_some_and(|q| q.choose(grade))
    }

    /// Answer the syncope question and move focus to it.
    pub fn answer_syncope(&mut self, answer: YesNo) -> bool {
        self.focus = FormFocus::Question(SymptomField::Syncope);
        self.syncope.choose(Some(answer))
    }

    /// Toggle the info panel of the focused question. Returns the new state.
    pub fn toggle_info(&mut self) -> Option<bool> {
        let field = self.focus.field()?;
        Some(self.info[field.index()].toggle())
    }

    // ─────────────────────────────────────────────────────────
    // Submission Workflow
    // ─────────────────────────────────────────────────────────

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error_banner(&self) -> Option<&ErrorBanner> {
        self.error.as_ref()
    }

    pub fn error_state(&self) -> bool {
        self.error.is_some()
    }

    /// Validate and mark a submission in flight.
    ///
    /// Returns the record to send, or `None` if a request is already pending
    /// or the syncope answer is missing.
    pub fn begin_submission(&mut self) -> Option<SymptomRecord> {
        if self.submitting {
            debug!("Submit ignored: request already in flight");
            return None;
        }

        self.submit_attempted = true;
        let record = self.record();
        if let Err(e) = record.validate() {
            debug!("Submit blocked: {}", e);
            self.focus = FormFocus::Question(SymptomField::Syncope);
            return None;
        }

        self.submitting = true;
        Some(record)
    }

    /// Request completed. Returns the banner that was cleared, if any.
    pub fn submission_succeeded(&mut self) -> Option<BannerId> {
        self.submitting = false;
        self.error.take().map(|banner| banner.id)
    }

    /// Request failed; raise a fresh banner with `banner_id`.
    pub fn submission_failed(&mut self, banner_id: BannerId, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Advice submission failed: {}", reason);
        self.submitting = false;
        self.error = Some(ErrorBanner {
            id: banner_id,
            reason,
        });
    }

    /// Clear the error banner. Returns the banner that was cleared, if any.
    pub fn dismiss_error(&mut self) -> Option<BannerId> {
        self.error.take().map(|banner| banner.id)
    }

    /// Restore default answers and clear the error banner.
    ///
    /// An in-flight request is left alone. Returns the banner that was
    /// cleared, if any.
    pub fn reset(&mut self) -> Option<BannerId> {
        let defaults = SymptomRecord::default();
        self.write_record(&defaults);
        self.orthopnea.mark_untouched();
        self.cough.mark_untouched();
        self.edema.mark_untouched();
        self.dizziness.mark_untouched();
        self.syncope.mark_untouched();
        self.submit_attempted = false;
        // After write_record: its change notifications set the flag
        self.dirty.store(false, Ordering::Relaxed);
        self.syncope_touched.store(false, Ordering::Relaxed);
        self.dismiss_error()
    }
}
