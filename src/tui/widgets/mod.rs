mod confirm_dialog;
mod detail_panel;
mod help_footer;
mod hex_editor;
mod swatch_list;

pub use confirm_dialog::render_confirm_dialog;
pub use detail_panel::render_detail_panel;
pub use help_footer::render_help_footer;
pub use hex_editor::render_hex_editor;
pub use swatch_list::render_swatch_list;
