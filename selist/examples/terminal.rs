//! Terminal Example
//!
//! Drives a selectable list from the keyboard and renders it with crossterm.
//!
//! Up/Down move the pointer (hover), Enter makes the pointed item current,
//! Space toggles its checkbox, `a`/`n` check or uncheck everything, `d`
//! removes the pointed item and `q` quits. Debug output goes to
//! `terminal.log`.

use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use log::LevelFilter;
use selist::prelude::*;
use simplelog::{Config, WriteLogger};

const FRUITS: [(&str, &str, u32); 5] = [
    ("apple", "Apple", 52),
    ("banana", "Banana", 89),
    ("cherry", "Cherry", 50),
    ("date", "Date", 282),
    ("elder", "Elderberry", 73),
];

// ============================================================================
// List Setup
// ============================================================================

fn fruit(id: &str, label: &str) -> Element {
    Element::box_()
        .id(id)
        .child(Element::text(label).id(format!("{id}-label")))
        .child(Element::text("[delete]").id(format!("{id}-delete")))
}

fn build_list(status: Arc<Mutex<String>>) -> Result<SelectableList<u32>, Box<dyn std::error::Error>> {
    let list = SelectableList::new(ListConfig::default())?;
    for (id, label, kcal) in FRUITS {
        list.add_item(fruit(id, label), kcal)?;
    }

    list.subscribe(move |event: &ListEvent<u32>| {
        let line = match event {
            ListEvent::CurrentItemChanged { item, data, .. } => match (item, data) {
                (Some(item), Some(kcal)) => format!("current: {item} ({kcal} kcal)"),
                _ => "current: none".to_string(),
            },
            ListEvent::SelectionChanged { selected_items } => {
                format!("selected: [{}]", selected_items.join(", "))
            }
        };
        log::info!("[terminal] {line}");
        if let Ok(mut status) = status.lock() {
            *status = line;
        }
    });

    Ok(list)
}

// ============================================================================
// Rendering
// ============================================================================

fn render(out: &mut impl Write, list: &SelectableList<u32>, pointer: usize, status: &str) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(out, SetAttribute(Attribute::Bold), Print("Fruits"), SetAttribute(Attribute::Reset))?;

    let root = list.root();
    for (row, id) in list.item_ids().iter().enumerate() {
        let checked = listdom::find_element(&root, &format!("{id}-checkbox"))
            .and_then(Element::checked)
            .unwrap_or(false);
        let label = list
            .get_data(id)
            .map(|kcal| format!("{id} ({kcal} kcal)"))
            .unwrap_or_else(|| id.clone());
        let marker = match list.classification(id).unwrap_or_default() {
            Classification::Plain => " ",
            Classification::Current => ">",
            Classification::Checked => "*",
            Classification::CheckedCurrent => "#",
        };
        let actions = if list.actions_visible(id) == Some(true) {
            "  [delete]"
        } else {
            ""
        };

        let y = row as u16 + 2;
        queue!(out, cursor::MoveTo(0, y))?;
        if row == pointer {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            out,
            Print(format!(
                "{marker} [{}] {label}{actions}",
                if checked { 'x' } else { ' ' }
            )),
            SetAttribute(Attribute::Reset)
        )?;
    }

    let footer = list.len() as u16 + 3;
    queue!(
        out,
        cursor::MoveTo(0, footer),
        Print(status),
        cursor::MoveTo(0, footer + 2),
        Print("Up/Down move  Enter current  Space check  a all  n none  d delete  q quit")
    )?;
    out.flush()
}

// ============================================================================
// Input
// ============================================================================

/// Move the pointer, translating it into hover enter/exit on items.
///
/// Hover goes through the list, so every move also marks it dirty.
fn move_pointer(list: &SelectableList<u32>, pointer: &mut usize, target: usize) {
    let ids = list.item_ids();
    if let Some(old) = ids.get(*pointer) {
        list.on_hover_exit(old);
    }
    *pointer = target.min(ids.len().saturating_sub(1));
    if let Some(new) = ids.get(*pointer) {
        list.on_hover_enter(new);
    }
}

fn run(list: &SelectableList<u32>, status: &Arc<Mutex<String>>) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut pointer = 0;
    move_pointer(list, &mut pointer, 0);

    loop {
        if list.is_dirty() {
            let line = status.lock().map(|s| s.clone()).unwrap_or_default();
            render(&mut stdout, list, pointer, &line)?;
            list.clear_dirty();
        }

        let CrosstermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(id) = list.item_ids().get(pointer).cloned() else {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => continue,
            }
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Up => {
                let next = pointer.saturating_sub(1);
                move_pointer(list, &mut pointer, next);
            }
            KeyCode::Down => {
                let next = pointer + 1;
                move_pointer(list, &mut pointer, next);
            }
            KeyCode::Enter => {
                list.on_click(&format!("{id}-label"));
            }
            KeyCode::Char(' ') => {
                let checked = list.selected_items().contains(&id);
                list.on_change(&format!("{id}-checkbox"), !checked);
            }
            KeyCode::Char('a') => list.select(true),
            KeyCode::Char('n') => list.select(false),
            KeyCode::Char('d') => {
                list.remove_by_id(&id);
                let next = pointer;
                move_pointer(list, &mut pointer, next);
            }
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize file logging
    if let Ok(log_file) = File::create("terminal.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let status = Arc::new(Mutex::new(String::from("ready")));
    let list = build_list(Arc::clone(&status))?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&list, &status);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
    Ok(())
}
