// File: src/styles.rs
// Purpose: Compiled-in stylesheet with an explicit one-shot loader

use once_cell::sync::OnceCell;

/// Baseline styles for the form container and field components.
pub const STYLESHEET: &str = r#"
.form-validator-field-container {
  display: flex;
  flex-direction: column;
  margin-bottom: 1rem;
}

.form-validator-label {
  margin-bottom: 0.25rem;
  font-weight: 600;
}

.form-validator-input {
  padding: 0.5rem;
  border: 1px solid #ccc;
  border-radius: 4px;
  transition: border-color 0.2s ease;
}

.form-validator-field.error .form-validator-input,
.form-validator-input.errors {
  border-color: #d33;
}

.form-validator-field.form-validator-success .form-validator-input,
.form-validator-input.success {
  border-color: #2a8;
}

.form-validator-errors-message,
.form-validator-error-message,
.error-message {
  color: #d33;
  font-size: 0.85rem;
  margin-top: 0.25rem;
  animation: form-validator-fade-in 0.15s ease-in;
}

.error-summary {
  margin-top: 1rem;
  padding: 0.75rem;
  border: 1px solid #d33;
  border-radius: 4px;
}

.checkbox-group {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.checkbox-label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.form-validator-theme-dark {
  background: #1e1e1e;
  color: #eee;
}

@keyframes form-validator-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;

static LOADED: OnceCell<()> = OnceCell::new();

/// One-shot stylesheet load, called explicitly at application start.
///
/// The first call returns the stylesheet for the host to install; every later
/// call returns `None`. Nothing happens at module load time.
pub fn load() -> Option<&'static str> {
    LOADED.set(()).ok().map(|_| STYLESHEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_is_idempotent() {
        // first successful call wins, regardless of which test got there first
        let first = load();
        if let Some(css) = first {
            assert!(css.contains(".form-validator-input"));
        }
        assert_eq!(load(), None);
        assert_eq!(load(), None);
    }
}
