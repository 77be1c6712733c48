use crate::App;
use ratatui::Frame;
use stocktui::model::{ActiveDialog, InputMode};

use super::{dialogs, filter_bar, layout, legend, status_bar, table, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let keyword_editing = app.ui.input_mode == InputMode::Keyword;

    let legend_height = legend::calculate_legend_height(
        size.width,
        app.ui.vim_mode,
        app.ui.create_button,
        keyword_editing,
    );
    let layout_info = layout::calculate_layout(size, legend_height);

    filter_bar::render_filter_bar(
        f,
        layout_info.filter_area,
        &app.draft_category_label(),
        &app.ui.draft_keyword,
        keyword_editing,
        app.ui.create_button,
    );

    let plan = app.controller.render_plan();
    table::render_stock_table(
        f,
        layout_info.table_area,
        &plan,
        &app.controller.state().sort,
        app.nav.selected_row,
    );
    table::render_pager(f, layout_info.pager_area, &plan);

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.ui.vim_mode,
        app.ui.create_button,
        keyword_editing,
    );

    let history = app.controller.history();
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.controller.state(),
        app.controller.items().len(),
        &app.controller.location().to_string(),
        (history.position(), history.len()),
    );

    // Render the active dialog over everything but toasts
    match &app.ui.dialog {
        Some(ActiveDialog::Create(form)) | Some(ActiveDialog::Edit { form, .. }) => {
            dialogs::render_form_dialog(f, form);
        }
        Some(ActiveDialog::ConfirmDelete { dialog, .. }) => {
            dialogs::render_confirm_dialog(f, dialog);
        }
        Some(ActiveDialog::CategoryPicker(picker)) => {
            dialogs::render_picker_dialog(f, picker);
        }
        None => {}
    }

    if let Some(container) = app.controller.notifier().container() {
        toast::render_toasts(f, size, container.cards());
    }
}
