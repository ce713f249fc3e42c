//! External editor integration for [`RecordForm`]s.
//!
//! A form is written to a temporary file as a small text document, opened in
//! the user's editor, and parsed back:
//!
//! ```text
//! # Edit Box 12
//! # Lines starting with '#' are ignored. Save unchanged to cancel.
//! name: Winter clothes
//! location: back left
//! type: plastic
//! shelf: 7
//! #     7  Shelf A
//! #     9  Shelf B
//! tags: winter, attic
//!
//! Everything after the first blank line is the description.
//! ```

use crate::error::{Result, ShelfwiseError};
use crate::form::RecordForm;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const HELP_LINE: &str = "# Lines starting with '#' are ignored. Save unchanged to cancel.";

/// Renders a form as an editor buffer.
pub fn to_buffer(form: &RecordForm) -> String {
    let mut out = String::new();
    let id = match form.id {
        0 => "(new)".to_string(),
        id => id.to_string(),
    };
    out.push_str(&format!(
        "# {} {} {}\n",
        form.caption.trim(),
        form.kind.label(),
        id
    ));
    out.push_str(HELP_LINE);
    out.push('\n');
    out.push_str(&format!("name: {}\n", form.name));
    for field in &form.fields {
        out.push_str(&format!("{}: {}\n", field.key, field.value));
        for option in &field.options {
            out.push_str(&format!("# {:>5}  {}\n", option.id, option.name));
        }
    }
    out.push_str(&format!("tags: {}\n", form.tags));
    out.push('\n');
    out.push_str(&form.description);
    out
}

/// Parses an edited buffer on top of `template`.
///
/// Keys missing from the buffer keep the template's value; unknown keys are
/// an error so typos do not silently drop edits.
pub fn from_buffer(template: &RecordForm, buffer: &str) -> Result<RecordForm> {
    let mut form = template.clone();
    let mut lines = buffer.lines();

    for line in lines.by_ref() {
        if line.trim().is_empty() {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ShelfwiseError::Api(format!("Cannot read line \"{}\"", line)))?;
        let (key, value) = (key.trim(), value.trim());
        match key {
            "name" => form.name = value.to_string(),
            "tags" => form.tags = value.to_string(),
            _ => {
                let field = form
                    .fields
                    .iter_mut()
                    .find(|f| f.key == key)
                    .ok_or_else(|| ShelfwiseError::Api(format!("Unknown field \"{}\"", key)))?;
                field.value = value.to_string();
            }
        }
    }

    form.description = lines.collect::<Vec<_>>().join("\n").trim_end().to_string();
    Ok(form)
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(ShelfwiseError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor, waits for it to close and returns the
/// file's contents.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(editor.as_str());
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| ShelfwiseError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(ShelfwiseError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(ShelfwiseError::Io)
}

/// Edits `form` in the user's editor. `Ok(None)` when the buffer came back
/// unchanged or empty.
pub fn edit_form(form: &RecordForm) -> Result<Option<RecordForm>> {
    let temp_file = env::temp_dir().join(format!("shelfwise_edit_{}.txt", std::process::id()));
    let initial = to_buffer(form);
    fs::write(&temp_file, &initial).map_err(ShelfwiseError::Io)?;

    let edited = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);
    let edited = edited?;

    if edited.trim().is_empty() || edited.trim_end() == initial.trim_end() {
        return Ok(None);
    }
    from_buffer(form, &edited).map(Some)
}
