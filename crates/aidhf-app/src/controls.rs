//! Question input controls
//!
//! A control holds one answer and exposes the same capability set regardless
//! of what it holds: read the value, overwrite it externally, and subscribe to
//! value changes and to the first user interaction ("touched").
//!
//! The two variants differ only in their [`ValueDomain`]:
//! - [`GradeQuestion`] holds a [`Grade`] (0..=3)
//! - [`BooleanQuestion`] holds an optional [`YesNo`], empty until answered

use std::fmt;

use aidhf_core::{Grade, YesNo};
use tracing::trace;

/// Callback invoked with the new value after every change.
pub type ChangeCallback<V> = Box<dyn FnMut(&V) + Send>;

/// Callback invoked once, on the first user interaction.
pub type TouchedCallback = Box<dyn FnMut() + Send>;

/// Capability set shared by every form-embeddable control.
///
/// A parent form only talks to its controls through this trait, so it never
/// needs to know how a control represents its value.
pub trait FormControl {
    type Value;

    /// Current value.
    fn value(&self) -> &Self::Value;

    /// Overwrite the value from outside (initial value, form reset).
    ///
    /// Change callbacks fire if the value differs; the control is not
    /// marked as touched.
    fn write_value(&mut self, value: Self::Value);

    /// Subscribe to value changes, user-driven or external.
    fn register_on_change(&mut self, callback: ChangeCallback<Self::Value>);

    /// Subscribe to the first user interaction.
    fn register_on_touched(&mut self, callback: TouchedCallback);

    /// Whether the user has interacted with the control.
    fn is_touched(&self) -> bool;

    /// Forget previous interactions; the next one fires touched again.
    fn mark_untouched(&mut self);
}

/// Legal values for a control and how the user steps through them.
pub trait ValueDomain {
    type Value: Clone + PartialEq + fmt::Debug;

    /// Values offered to the user, in display order.
    fn options() -> Vec<Self::Value>;

    /// Whether the user may pick `value`.
    fn accepts(value: &Self::Value) -> bool;

    fn next(value: &Self::Value) -> Self::Value;

    fn previous(value: &Self::Value) -> Self::Value;
}

/// Ordinal 0..=3 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeScale;

impl ValueDomain for GradeScale {
    type Value = Grade;

    fn options() -> Vec<Grade> {
        Grade::ALL.to_vec()
    }

    fn accepts(_value: &Grade) -> bool {
        true
    }

    fn next(value: &Grade) -> Grade {
        value.next()
    }

    fn previous(value: &Grade) -> Grade {
        value.previous()
    }
}

/// Yes/no answer; `None` means not yet answered and cannot be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YesNoChoice;

impl ValueDomain for YesNoChoice {
    type Value = Option<YesNo>;

    fn options() -> Vec<Option<YesNo>> {
        vec![Some(YesNo::Yes), Some(YesNo::No)]
    }

    fn accepts(value: &Option<YesNo>) -> bool {
        value.is_some()
    }

    fn next(value: &Option<YesNo>) -> Option<YesNo> {
        Some(value.map(YesNo::toggled).unwrap_or(YesNo::Yes))
    }

    fn previous(value: &Option<YesNo>) -> Option<YesNo> {
        Some(value.map(YesNo::toggled).unwrap_or(YesNo::No))
    }
}

/// Value-holding control over a [`ValueDomain`].
pub struct Question<D: ValueDomain> {
    value: D::Value,
    touched: bool,
    on_change: Vec<ChangeCallback<D::Value>>,
    on_touched: Vec<TouchedCallback>,
}

pub type GradeQuestion = Question<GradeScale>;
pub type BooleanQuestion = Question<YesNoChoice>;

impl<D: ValueDomain> Question<D> {
    /// Create a control with an externally supplied initial value.
    pub fn new(initial: D::Value) -> Self {
        Self {
            value: initial,
            touched: false,
            on_change: Vec::new(),
            on_touched: Vec::new(),
        }
    }

    /// Values the user can pick, in display order.
    pub fn options(&self) -> Vec<D::Value> {
        D::options()
    }

    /// User picked `value`. Returns `true` if the value changed.
    ///
    /// Values outside the domain count as an interaction but are ignored.
    pub fn choose(&mut self, value: D::Value) -> bool {
        self.touch();

        if !D::accepts(&value) {
            trace!("Ignoring out-of-domain value {:?}", value);
            return false;
        }
        self.replace(value)
    }

    /// User stepped forward through the options.
    pub fn select_next(&mut self) -> bool {
        let value = D::next(&self.value);
        self.choose(value)
    }

    /// User stepped backward through the options.
    pub fn select_previous(&mut self) -> bool {
        let value = D::previous(&self.value);
        self.choose(value)
    }

    fn replace(&mut self, value: D::Value) -> bool {
        if value == self.value {
            return false;
        }

        self.value = value;
        for callback in &mut self.on_change {
            callback(&self.value);
        }
        true
    }

    fn touch(&mut self) {
        if self.touched {
            return;
        }
        self.touched = true;
        for callback in &mut self.on_touched {
            callback();
        }
    }
}

impl<D: ValueDomain> FormControl for Question<D> {
    type Value = D::Value;

    fn value(&self) -> &D::Value {
        &self.value
    }

    fn write_value(&mut self, value: D::Value) {
        self.replace(value);
    }

    fn register_on_change(&mut self, callback: ChangeCallback<D::Value>) {
        self.on_change.push(callback);
    }

    fn register_on_touched(&mut self, callback: TouchedCallback) {
        self.on_touched.push(callback);
    }

    fn is_touched(&self) -> bool {
        self.touched
    }

    fn mark_untouched(&mut self) {
        self.touched = false;
    }
}

impl<D: ValueDomain> fmt::Debug for Question<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("value", &self.value)
            .field("touched", &self.touched)
            .field("on_change", &self.on_change.len())
            .field("on_touched", &self.on_touched.len())
            .finish()
    }
}
