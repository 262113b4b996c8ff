//! Form serialization.
//!
//! A form is read into [`FormInputs`], an ordered name/value mapping that is
//! sent as a flat JSON object.

use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Single(String),
    /// Selected values of a `<select multiple>`, in option order.
    Multiple(Vec<String>),
}

impl FormValue {
    fn to_json(&self) -> Value {
        match self {
            FormValue::Single(value) => Value::String(value.clone()),
            FormValue::Multiple(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// Named form values in the order the controls appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    fields: Vec<(String, FormValue)>,
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. A name seen before keeps its position and takes the
    /// new value.
    pub fn insert(&mut self, name: impl Into<String>, value: FormValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, FormValue::Single(value.into()));
    }

    pub fn set_multiple(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.insert(name, FormValue::Multiple(values));
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Scalar value of `name`, or an empty string.
    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Some(FormValue::Single(value)) => value,
            _ => "",
        }
    }

    /// Whether `value` is the value of `name` or one of its selected values.
    pub fn contains_value(&self, name: &str, value: &str) -> bool {
        match self.get(name) {
            Some(FormValue::Single(current)) => current == value,
            Some(FormValue::Multiple(values)) => values.iter().any(|v| v == value),
            None => false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut inputs = FormInputs::new();
        for (name, value) in iter {
            inputs.set(name, value);
        }
        inputs
    }
}

/// Source of a form's current values.
pub trait FormReader {
    fn read(&self) -> FormInputs;
}

/// Snapshot of one form control, as far as submission is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub name: String,
    pub disabled: bool,
    pub kind: ControlKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// `<input>` with its `type` attribute.
    Input {
        input_type: String,
        checked: bool,
        value: String,
    },
    TextArea(String),
    Select(String),
    /// Selected options of a `<select multiple>`, in document order.
    MultiSelect(Vec<String>),
}

impl Control {
    /// Value this control contributes, or `None` when a browser would leave
    /// it out of the submission.
    fn submitted(self) -> Option<(String, FormValue)> {
        if self.disabled || self.name.is_empty() {
            return None;
        }
        let value = match self.kind {
            ControlKind::Input {
                input_type,
                checked,
                value,
            } => match input_type.as_str() {
                "submit" | "button" | "reset" | "image" | "file" => return None,
                "checkbox" | "radio" if !checked => return None,
                _ => FormValue::Single(value),
            },
            ControlKind::TextArea(value) | ControlKind::Select(value) => FormValue::Single(value),
            ControlKind::MultiSelect(values) => FormValue::Multiple(values),
        };
        Some((self.name, value))
    }
}

/// Collect controls in document order; a later control overwrites an
/// earlier one with the same name.
pub fn collect_controls(controls: impl IntoIterator<Item = Control>) -> FormInputs {
    let mut inputs = FormInputs::new();
    for (name, value) in controls.into_iter().filter_map(Control::submitted) {
        inputs.insert(name, value);
    }
    inputs
}

/// Reads a rendered `<form>` the way a browser would submit it.
pub struct DomFormReader {
    form: HtmlFormElement,
}

impl DomFormReader {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

impl FormReader for DomFormReader {
    fn read(&self) -> FormInputs {
        let elements = self.form.elements();
        collect_controls(
            (0..elements.length())
                .filter_map(|i| elements.item(i))
                .filter_map(|element| control_of(&element)),
        )
    }
}

fn control_of(element: &Element) -> Option<Control> {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        let kind = if select.multiple() {
            let selected = select.selected_options();
            ControlKind::MultiSelect(
                (0..selected.length())
                    .filter_map(|i| selected.item(i))
                    .filter_map(|option| option.dyn_into::<HtmlOptionElement>().ok())
                    .map(|option| option.value())
                    .collect(),
            )
        } else {
            ControlKind::Select(select.value())
        };
        return Some(Control {
            name: select.name(),
            disabled: select.disabled(),
            kind,
        });
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(Control {
            name: area.name(),
            disabled: area.disabled(),
            kind: ControlKind::TextArea(area.value()),
        });
    }
    let input = element.dyn_ref::<HtmlInputElement>()?;
    Some(Control {
        name: input.name(),
        disabled: input.disabled(),
        kind: ControlKind::Input {
            input_type: input.type_(),
            checked: input.checked(),
            value: input.value(),
        },
    })
}
