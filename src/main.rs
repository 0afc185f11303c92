// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad CLI entrypoint.
//!
//! By default this runs the interactive viewer on a diagram snapshot (or the
//! built-in demo process). With `--script` it instead applies a scripted
//! selection sequence headlessly and prints the feedback log after every
//! turn.

use std::error::Error;
use std::fmt;

use naiad::dispatch::{Editor, EditorEvent};
use naiad::feedback::FeedbackInstruction;
use naiad::model::{ElementId, IdError, Point};
use naiad::overlay::{Viewport, ViewportError};
use naiad::select::SelectionError;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <snapshot.json>\n  {program} --snapshot <snapshot.json>\n  {program} --demo\n  {program} [--demo | <snapshot.json>] --script <ops.txt>\n\nSnapshot files are JSON element trees ({{ id, type, bounds, children }}).\n--demo uses the built-in demo process and cannot be combined with a snapshot.\n--script applies one selection turn per line (select/deselect/replace/clear/viewport)\nand prints the dispatcher state and feedback registry after each turn."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    snapshot: Option<String>,
    script: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--snapshot" => {
                if options.snapshot.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.snapshot = Some(path);
            }
            "--script" => {
                if options.script.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.script = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.snapshot.is_some() {
                    return Err(());
                }
                options.snapshot = Some(arg);
            }
        }
    }

    if options.demo && options.snapshot.is_some() {
        return Err(());
    }
    if !options.demo && options.snapshot.is_none() {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug, Clone, PartialEq)]
enum ScriptCommand {
    Select(Vec<String>),
    Deselect(Vec<String>),
    Replace(Vec<String>),
    Clear,
    Viewport { x: f64, y: f64, zoom: f64 },
}

#[derive(Debug)]
enum ScriptError {
    Parse { line: usize, message: String },
    InvalidId { line: usize, source: IdError },
    Selection { line: usize, source: SelectionError },
    Viewport { line: usize, source: ViewportError },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, message } => write!(f, "script line {line}: {message}"),
            Self::InvalidId { line, source } => write!(f, "script line {line}: {source}"),
            Self::Selection { line, source } => write!(f, "script line {line}: {source}"),
            Self::Viewport { line, source } => write!(f, "script line {line}: {source}"),
        }
    }
}

impl Error for ScriptError {}

fn parse_script(text: &str) -> Result<Vec<(usize, ScriptCommand)>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let rest: Vec<String> = parts.map(ToOwned::to_owned).collect();

        let parsed = match command {
            "select" | "deselect" | "replace" => {
                if rest.is_empty() {
                    return Err(ScriptError::Parse {
                        line,
                        message: format!("'{command}' needs at least one element id"),
                    });
                }
                match command {
                    "select" => ScriptCommand::Select(rest),
                    "deselect" => ScriptCommand::Deselect(rest),
                    _ => ScriptCommand::Replace(rest),
                }
            }
            "clear" => {
                if !rest.is_empty() {
                    return Err(ScriptError::Parse {
                        line,
                        message: "'clear' takes no arguments".to_owned(),
                    });
                }
                ScriptCommand::Clear
            }
            "viewport" => {
                let values: Vec<f64> = rest
                    .iter()
                    .map(|raw| raw.parse::<f64>())
                    .collect::<Result<_, _>>()
                    .map_err(|err| ScriptError::Parse {
                        line,
                        message: format!("invalid viewport value: {err}"),
                    })?;
                let [x, y, zoom] = values.as_slice() else {
                    return Err(ScriptError::Parse {
                        line,
                        message: "'viewport' needs <scroll_x> <scroll_y> <zoom>".to_owned(),
                    });
                };
                ScriptCommand::Viewport {
                    x: *x,
                    y: *y,
                    zoom: *zoom,
                }
            }
            other => {
                return Err(ScriptError::Parse {
                    line,
                    message: format!("unknown command '{other}'"),
                })
            }
        };
        commands.push((line, parsed));
    }
    Ok(commands)
}

fn parse_ids(raw: &[String], line: usize) -> Result<Vec<ElementId>, ScriptError> {
    raw.iter()
        .map(|value| {
            ElementId::new(value.clone()).map_err(|source| ScriptError::InvalidId { line, source })
        })
        .collect()
}

/// Applies the script to the editor and returns the feedback log.
fn run_script(editor: &mut Editor, text: &str) -> Result<String, ScriptError> {
    let mut out = String::new();
    for (step, (line, command)) in parse_script(text)?.into_iter().enumerate() {
        let heading = match &command {
            ScriptCommand::Select(ids) => format!("select [{}]", ids.join(", ")),
            ScriptCommand::Deselect(ids) => format!("deselect [{}]", ids.join(", ")),
            ScriptCommand::Replace(ids) => format!("replace [{}]", ids.join(", ")),
            ScriptCommand::Clear => "clear".to_owned(),
            ScriptCommand::Viewport { x, y, zoom } => {
                format!("viewport scroll={x},{y} zoom={zoom}")
            }
        };

        match command {
            ScriptCommand::Select(raw) => {
                let added = parse_ids(&raw, line)?;
                editor
                    .dispatch(EditorEvent::SelectionChanged {
                        added,
                        removed: Vec::new(),
                    })
                    .map_err(|source| ScriptError::Selection { line, source })?;
            }
            ScriptCommand::Deselect(raw) => {
                let removed = parse_ids(&raw, line)?;
                editor
                    .dispatch(EditorEvent::SelectionChanged {
                        added: Vec::new(),
                        removed,
                    })
                    .map_err(|source| ScriptError::Selection { line, source })?;
            }
            ScriptCommand::Replace(raw) => {
                let added = parse_ids(&raw, line)?;
                let removed: Vec<ElementId> = editor
                    .selection()
                    .ids()
                    .iter()
                    .filter(|id| !added.contains(id))
                    .cloned()
                    .collect();
                editor
                    .dispatch(EditorEvent::SelectionChanged { added, removed })
                    .map_err(|source| ScriptError::Selection { line, source })?;
            }
            ScriptCommand::Clear => {
                let removed = editor.selection().ids().to_vec();
                editor
                    .dispatch(EditorEvent::SelectionChanged {
                        added: Vec::new(),
                        removed,
                    })
                    .map_err(|source| ScriptError::Selection { line, source })?;
            }
            ScriptCommand::Viewport { x, y, zoom } => {
                let viewport = Viewport::new(Point::new(x, y), zoom)
                    .map_err(|source| ScriptError::Viewport { line, source })?;
                editor
                    .dispatch(EditorEvent::ViewportChanged { viewport })
                    .map_err(|source| ScriptError::Selection { line, source })?;
            }
        }

        let selection: Vec<String> =
            editor.selection().ids().iter().map(ToString::to_string).collect();
        out.push_str(&format!(
            "#{} {heading} state={:?} selection=[{}]\n",
            step + 1,
            editor.state(),
            selection.join(", ")
        ));
        for (kind, instruction) in editor.feedback().current_state() {
            match instruction {
                FeedbackInstruction::Show {
                    element_ids,
                    actions,
                    ..
                } => {
                    let ids: Vec<String> = element_ids.iter().map(ToString::to_string).collect();
                    out.push_str(&format!(
                        "  {kind}: show [{}] ({} actions)\n",
                        ids.join(", "),
                        actions.len()
                    ));
                }
                FeedbackInstruction::Hide { .. } => {
                    out.push_str(&format!("  {kind}: hide\n"));
                }
            }
        }
    }
    Ok(out)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "naiad".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();

        let diagram = if options.demo {
            naiad::tui::demo_diagram()
        } else {
            let path = options.snapshot.as_deref().unwrap_or_default();
            let json = std::fs::read_to_string(path)?;
            naiad::model::diagram_from_json(&json)?
        };

        let mut editor = Editor::new(diagram);

        if let Some(script_path) = options.script {
            let script = std::fs::read_to_string(&script_path)?;
            let log = run_script(&mut editor, &script)?;
            print!("{log}");
            return Ok(());
        }

        naiad::tui::run_editor(editor)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("naiad: {err}");
        std::process::exit(1);
    }
}
