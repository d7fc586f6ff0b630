//! Subcommand execution against the persisted layout store.

use std::path::{Path, PathBuf};
use std::time::Duration;

use splitterm_common::SplittermError;
use splitterm_config::SplittermConfig;
use splitterm_session::{ManagerSettings, NativeBackend, SessionManager};
use splitterm_tiling::{
    LayoutCommand, LayoutPrefs, LayoutSearch, LayoutState, NullSink, SwapTarget,
};
use tracing::info;

use crate::cli::{Args, Command};
use crate::workspace::{render_tree, Workspace};

const PUMP_TICK: Duration = Duration::from_millis(16);

pub fn execute(args: &Args, config: SplittermConfig) -> Result<(), SplittermError> {
    let path = layout_path(args, &config)?;

    match &args.command {
        Command::Show { tab, json } => {
            let layouts = LayoutState::load_from_path(&path)?;
            show(&layouts, tab.as_deref(), *json)
        }
        Command::Run {
            tab,
            execute,
            find,
            duration_ms,
            lines,
        } => {
            let layouts = LayoutState::load_from_path(&path)?;
            if layouts.layout(tab).is_none() {
                return Err(SplittermError::Other(format!("unknown tab: {tab}")));
            }
            let run = RunOptions {
                tab,
                execute: execute.as_deref(),
                find: find.as_deref(),
                duration: Duration::from_millis(*duration_ms),
                lines: *lines,
            };
            let layouts = run_tab(layouts, config, &run)?;
            if run.find.is_some() {
                layouts.save_to_path(&path)?;
            }
            Ok(())
        }
        other => {
            let Some(command) = layout_command(other) else {
                return Ok(());
            };
            let described = format!("{command:?}");
            if !edit_store(&path, command)? {
                return Err(SplittermError::Other(format!(
                    "layout unchanged: {described}"
                )));
            }
            info!("layouts saved to {}", path.display());
            Ok(())
        }
    }
}

/// Apply one command to the store at `path`, saving it when it changed.
///
/// A one-shot edit has no live sessions, so kills and swaps go nowhere.
fn edit_store(path: &Path, command: LayoutCommand) -> Result<bool, SplittermError> {
    let mut layouts = LayoutState::load_from_path(path)?;
    let changed = layouts.apply(command, &mut NullSink);
    if changed {
        layouts.save_to_path(path)?;
    }
    Ok(changed)
}

/// `--layouts` wins over the configured store.
fn layout_path(args: &Args, config: &SplittermConfig) -> Result<PathBuf, SplittermError> {
    args.layouts
        .clone()
        .or_else(|| config.state.layout_path())
        .ok_or_else(|| SplittermError::Other("no layout store path available".into()))
}

/// The layout mutation a subcommand stands for, if any.
pub(crate) fn layout_command(command: &Command) -> Option<LayoutCommand> {
    let command = match command {
        Command::NewTab { tab } => LayoutCommand::NewLayout {
            tab_id: tab.clone(),
        },
        Command::RemoveTab { tab } => LayoutCommand::RemoveLayout {
            tab_id: tab.clone(),
        },
        Command::Split {
            id,
            index,
            direction,
            before,
        } => LayoutCommand::MakeSplit {
            split_id: id.clone(),
            child_index: *index,
            direction: (*direction).into(),
            before: *before,
        },
        Command::Close { id, index } => LayoutCommand::CloseSplit {
            split_id: id.clone(),
            child_index: *index,
        },
        Command::Swap { id, parent, index } => LayoutCommand::SwapWith {
            split_id: id.clone(),
            target: SwapTarget {
                parent_id: parent.clone(),
                child_index: *index,
            },
        },
        Command::Sizes { id, sizes } => LayoutCommand::UpdateSplitSizes {
            split_id: id.clone(),
            sizes: sizes.clone(),
        },
        Command::Prefs {
            id,
            badge,
            directory,
            startup,
            title,
        } => LayoutCommand::SetPrefs {
            split_id: id.clone(),
            prefs: LayoutPrefs {
                badge: badge.clone(),
                directory: directory.clone(),
                startup: startup.clone(),
                title: title.clone(),
            },
        },
        Command::Search { id, text, wrap } => LayoutCommand::SetSearch {
            split_id: id.clone(),
            search: LayoutSearch {
                text: text.clone(),
                wrap: *wrap,
            },
        },
        Command::Show { .. } | Command::Run { .. } => return None,
    };
    Some(command)
}

fn show(layouts: &LayoutState, tab: Option<&str>, json: bool) -> Result<(), SplittermError> {
    let tabs = match tab {
        Some(tab) if layouts.layout(tab).is_none() => {
            return Err(SplittermError::Other(format!("unknown tab: {tab}")));
        }
        Some(tab) => vec![tab.to_string()],
        None => layouts.tab_ids(),
    };

    if json {
        let out = match tab.and_then(|t| layouts.layout(t)) {
            Some(tree) => serde_json::to_string_pretty(tree),
            None => serde_json::to_string_pretty(layouts),
        }
        .map_err(|e| SplittermError::Other(format!("failed to serialize layouts: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    for tab in tabs {
        if let Some(tree) = layouts.layout(&tab) {
            println!("tab {tab}");
            print!("{}", render_tree(tree));
        }
    }
    Ok(())
}

struct RunOptions<'a> {
    tab: &'a str,
    execute: Option<&'a str>,
    find: Option<&'a str>,
    duration: Duration,
    lines: usize,
}

/// Start every pane of the tab, collect output for a while, print each
/// pane's tail and tear the sessions down again.
fn run_tab(
    layouts: LayoutState,
    config: SplittermConfig,
    run: &RunOptions<'_>,
) -> Result<LayoutState, SplittermError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let settings = ManagerSettings::from_config(&config);
    let backend = NativeBackend::new(config.shell.clone());
    let sessions = SessionManager::new(Box::new(backend), settings);
    let mut workspace = Workspace::new(layouts, sessions, config);

    let leaves = workspace.connect_tab(run.tab);
    if let Some(line) = run.execute {
        for id in &leaves {
            workspace.sessions_mut().writeln(id, line);
        }
    }

    runtime.block_on(workspace.pump_for(run.duration, PUMP_TICK));

    for id in &leaves {
        if let Some(needle) = run.find {
            workspace.apply(LayoutCommand::SetSearch {
                split_id: id.clone(),
                search: LayoutSearch {
                    text: Some(needle.to_string()),
                    wrap: None,
                },
            });
            workspace.find(id, true);
            let hit = workspace
                .sessions()
                .view(id)
                .and_then(|view| view.search_cursor());
            match hit {
                Some(hit) => println!(
                    "{id}: \"{needle}\" at line {} column {}",
                    hit.line, hit.column
                ),
                None => println!("{id}: \"{needle}\" not found"),
            }
        }
        print_tail(&workspace, id, run.lines);
    }

    workspace.disconnect_tab(run.tab);
    Ok(workspace.into_layouts())
}

fn print_tail(workspace: &Workspace, id: &str, lines: usize) {
    let title = workspace
        .layouts()
        .find_by_id(id)
        .and_then(|node| node.prefs())
        .and_then(|prefs| prefs.title.clone())
        .unwrap_or_else(|| id.to_string());
    println!("==> {title} <==");
    if let Some(view) = workspace.sessions().view(id) {
        for line in view.tail(lines) {
            println!("{line}");
        }
    }
}
