//! Interactive terminal form for a progression request.

use std::io::ErrorKind;

use dialoguer::{Editor, Error as DialoguerError, Input, Select};

use crate::domain::{AppError, GradeLevel, MAX_ANCESTOR_SECTIONS, ProgressionRequest, SectionDescriptor};

/// Walk the user through the form. Returns `None` when the user cancels.
pub(super) fn prompt_request() -> Result<Option<ProgressionRequest>, AppError> {
    let Some(grade) = prompt_grade()? else {
        return Ok(None);
    };

    eprintln!("Current Section");
    let Some(current) = prompt_section("Current Section ID", "Current Section Overview")? else {
        return Ok(None);
    };

    eprintln!("Parent Sections (you do not need to complete all fields)");
    let Some(parents) = prompt_ancestors("Parent")? else {
        return Ok(None);
    };

    eprintln!("Grandparent Sections (you do not need to complete all fields)");
    let Some(grandparents) = prompt_ancestors("Grandparent")? else {
        return Ok(None);
    };

    Ok(Some(
        ProgressionRequest::new(grade.label(), current)
            .with_parents(parents)
            .with_grandparents(grandparents),
    ))
}

fn prompt_grade() -> Result<Option<GradeLevel>, AppError> {
    let items: Vec<&str> = GradeLevel::ALL.iter().map(|grade| grade.label()).collect();
    let selection = Select::new()
        .with_prompt("Select Grade Level")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| interactive_error("grade level", err))?;

    Ok(selection.map(|index| GradeLevel::ALL[index]))
}

fn prompt_ancestors(kind: &str) -> Result<Option<Vec<SectionDescriptor>>, AppError> {
    let mut sections = Vec::with_capacity(MAX_ANCESTOR_SECTIONS);
    for i in 1..=MAX_ANCESTOR_SECTIONS {
        let id_label = format!("{} Section ID {}", kind, i);
        let overview_label = format!("{} Section Overview {}", kind, i);
        match prompt_section(&id_label, &overview_label)? {
            Some(section) => sections.push(section),
            None => return Ok(None),
        }
    }
    Ok(Some(sections))
}

fn prompt_section(id_label: &str, overview_label: &str) -> Result<Option<SectionDescriptor>, AppError> {
    let Some(id) = prompt_text(id_label)? else {
        return Ok(None);
    };
    let overview = prompt_overview(overview_label)?;
    Ok(Some(SectionDescriptor { id, overview }))
}

/// Overviews are free text and may span paragraphs, so they go through `$EDITOR`.
fn prompt_overview(label: &str) -> Result<String, AppError> {
    eprintln!("{} (opens your editor; leave empty to skip)", label);
    let edited = Editor::new().edit("").map_err(|err| interactive_error(label, err))?;
    Ok(overview_text(edited))
}

/// An editor closed without saving yields no text.
fn overview_text(edited: Option<String>) -> String {
    edited.unwrap_or_default()
}

fn prompt_text(label: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(label).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(interactive_error(label, err)),
    }
}

fn interactive_error(what: &str, err: DialoguerError) -> AppError {
    AppError::InteractiveInput { what: what.to_string(), details: err.to_string() }
}
