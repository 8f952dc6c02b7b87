use crate::app::{App, DialogKind, Grab, HexEditor, Mode, Notification, PendingOperation};
use crate::palette::{ColorId, ColorRecord, EffectSink};

use super::Action;

/// Handles action execution
pub struct ActionHandler;

impl ActionHandler {
    /// Handle an action
    pub fn handle<S: EffectSink>(app: &mut App<S>, action: Action) {
        match action {
            // Navigation
            Action::MoveUp => app.move_up(),
            Action::MoveDown => app.move_down(),
            Action::MoveTop => app.move_top(),
            Action::MoveBottom => app.move_bottom(),

            // Palette operations
            Action::AddColor => Self::handle_add_color(app),
            Action::EditColor => Self::handle_edit_color(app),
            Action::DeleteColor => Self::handle_delete_color(app),
            Action::GrabColor => Self::handle_grab_color(app),
            Action::Reload => {
                app.pending_operation = Some(PendingOperation::Reload);
            }

            // Dialog / editor
            Action::Confirm => Self::handle_confirm(app),
            Action::Cancel => Self::handle_cancel(app),

            // Input
            Action::InsertChar(c) => Self::handle_insert_char(app, c),
            Action::DeleteChar => {
                if let DialogKind::EditHex(ref mut editor) = app.dialog {
                    editor.input.pop();
                }
            }

            // Other
            Action::Quit => {
                if app.has_active_dialog() || app.grab.is_some() {
                    Self::handle_cancel(app);
                } else {
                    app.should_quit = true;
                }
            }
            Action::ForceQuit => {
                app.should_quit = true;
            }
        }
    }

    fn handle_add_color<S: EffectSink>(app: &mut App<S>) {
        let order = app.palette.add(ColorRecord::new(ColorId::new())).order;
        app.select_order(order);
    }

    fn handle_edit_color<S: EffectSink>(app: &mut App<S>) {
        let Some(record) = app.selected_color() else {
            return;
        };

        app.dialog = DialogKind::EditHex(HexEditor::new(record));
        app.mode = Mode::Insert;
    }

    fn handle_delete_color<S: EffectSink>(app: &mut App<S>) {
        let Some(record) = app.selected_color() else {
            return;
        };

        let label = record
            .name
            .label()
            .map(str::to_string)
            .unwrap_or_else(|| record.hex.display());

        app.dialog = DialogKind::ConfirmDelete {
            id: record.id,
            label,
        };
        app.mode = Mode::Dialog;
    }

    fn handle_grab_color<S: EffectSink>(app: &mut App<S>) {
        let Some(record) = app.selected_color() else {
            return;
        };

        app.grab = Some(Grab {
            id: record.id,
            from_order: record.order,
        });
        app.mode = Mode::Grab;
    }

    /// Keystroke in the hex editor; every complete hex is previewed live
    fn handle_insert_char<S: EffectSink>(app: &mut App<S>, c: char) {
        let DialogKind::EditHex(ref mut editor) = app.dialog else {
            return;
        };

        if !c.is_ascii_hexdigit() || editor.input.len() >= 6 {
            return;
        }

        editor.input.push(c);
        let (order, input) = (editor.order, editor.input.clone());
        app.palette.update_fields(order, &input);
    }

    fn handle_confirm<S: EffectSink>(app: &mut App<S>) {
        match &app.dialog {
            DialogKind::EditHex(_) => Self::finish_edit(app),
            DialogKind::ConfirmDelete { id, label } => {
                let (id, label) = (*id, label.clone());
                if app.palette.delete(id).is_some() {
                    app.notify(Notification::info(format!("Deleted {}", label)));
                }
                app.close_dialog();
                app.clamp_selection();
            }
            DialogKind::None => Self::drop_grabbed(app),
        }
    }

    fn handle_cancel<S: EffectSink>(app: &mut App<S>) {
        match app.dialog {
            // Leaving the editor commits like any other blur
            DialogKind::EditHex(_) => Self::finish_edit(app),
            _ => {
                if let Some(grab) = app.grab.take() {
                    app.select_order(grab.from_order);
                }
                app.pending_operation = None;
                app.close_dialog();
            }
        }
    }

    /// Close the editor and request a name if the hex was edited
    fn finish_edit<S: EffectSink>(app: &mut App<S>) {
        let DialogKind::EditHex(ref editor) = app.dialog else {
            return;
        };

        let id = editor.id;
        app.close_dialog();

        let edited = app.palette.get(id).is_some_and(|r| r.name.is_pending());
        if edited {
            app.palette.commit_color(id);
        }
    }

    /// Drop the grabbed swatch onto the selected slot
    fn drop_grabbed<S: EffectSink>(app: &mut App<S>) {
        let Some(grab) = app.grab.take() else {
            return;
        };
        app.mode = Mode::Normal;

        let Some(target) = app.selected_order() else {
            return;
        };

        if app.palette.reorder(grab.id, grab.from_order, target) {
            if let Some(record) = app.palette.get(grab.id) {
                let order = record.order;
                app.select_order(order);
            }
        }
    }
}
