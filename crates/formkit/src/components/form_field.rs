// File: src/components/form_field.rs
// Purpose: Label / input / error trio for a single bound field

use maud::{html, Markup};

use crate::form::FieldBinding;

/// A single labeled input with its error line.
///
/// Purely presentational: everything it shows comes from the container's
/// [`FieldBinding`], plus the static props set here. The element id doubles
/// as the `aria-describedby` anchor for the error line.
///
/// # Example
///
/// ```rust,ignore
/// use formkit::FormField;
///
/// let field = FormField::new("email", "Email")
///     .input_type("email")
///     .placeholder("you@example.com");
/// let markup = field.render(&form.binding("email"));
/// ```
#[derive(Debug, Clone)]
pub struct FormField {
    name: String,
    label: String,
    id: String,
    input_type: String,
    placeholder: Option<String>,
    required_marker: bool,
}

impl FormField {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            id: name.to_string(),
            input_type: "text".to_string(),
            placeholder: None,
            required_marker: false,
        }
    }

    /// Override the element id; defaults to the field name.
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// HTML input type, e.g. `email`, `password`, `date`, `checkbox`.
    pub fn input_type(mut self, input_type: &str) -> Self {
        self.input_type = input_type.to_string();
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Append the `*` marker to the label.
    pub fn required_marker(mut self) -> Self {
        self.required_marker = true;
        self
    }

    pub fn render(&self, binding: &FieldBinding<'_>) -> Markup {
        let visible_error = binding.visible_error();
        let errors_id = format!("{}-errors", self.id);

        let mut input_class = String::from("form-validator-input");
        if visible_error.is_some() {
            input_class.push_str(" errors");
        } else if binding.is_success() {
            input_class.push_str(" success");
        }

        let is_checkbox = self.input_type == "checkbox";
        let text_value = if is_checkbox {
            None
        } else {
            binding.value.as_text()
        };

        html! {
            div class="form-validator-field-container" style=[binding.style] {
                label class="form-validator-label" for=(self.id) {
                    (self.label)
                    @if self.required_marker { " *" }
                }
                input
                    id=(self.id)
                    name=(self.name)
                    type=(self.input_type)
                    class=(input_class)
                    value=[text_value]
                    checked[is_checkbox && binding.checked == Some(true)]
                    placeholder=[self.placeholder.as_deref()]
                    aria-invalid=(visible_error.is_some().to_string())
                    aria-describedby=(errors_id);
                @if let Some(message) = visible_error {
                    div class="form-validator-errors-message" id=(errors_id) role="alert" {
                        (message)
                    }
                }
            }
        }
    }
}
