//! App shell: form panel, list panel, alert and confirmation dialogs.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::TreeId, protocol::TreeRecord};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{AlertKind, AlertMessage, Operation, UiEvent};
use crate::controller::form::{SubmitMode, TreeForm};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::sync::SyncPhase;
use crate::ui::view::{
    build_list_entries, date_style_from_env, DateStyle, ListEntry, TreeRowView,
    EMPTY_LIST_HEADLINE, EMPTY_LIST_SUBLINE,
};

struct PendingDelete {
    id: TreeId,
    custom_name: String,
}

enum RowAction {
    Edit(TreeRecord),
    RequestDelete(TreeRecord),
}

pub struct RegistryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    date_style: DateStyle,
    entries: Vec<ListEntry>,
    form: TreeForm,
    sync: SyncPhase,

    alert: Option<AlertMessage>,
    pending_delete: Option<PendingDelete>,
    // Operation whose post-settle refresh is still outstanding; create
    // clears the form once that refresh has rendered.
    refresh_after: Option<Operation>,

    worker_ready: bool,
    status: String,
}

impl RegistryApp {
    pub fn bootstrap(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut status = "Starting backend worker...".to_string();
        // Initial load; the command queue buffers it until the worker is up.
        dispatch_backend_command(&cmd_tx, BackendCommand::RefreshList, &mut status);
        Self {
            cmd_tx,
            ui_rx,
            date_style: date_style_from_env(),
            entries: Vec::new(),
            form: TreeForm::default(),
            sync: SyncPhase::default(),
            alert: None,
            pending_delete: None,
            refresh_after: None,
            worker_ready: false,
            status,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.worker_ready = true;
                    self.status = "Connected to registry backend".to_string();
                }
                UiEvent::ListLoaded(records) => {
                    self.entries = build_list_entries(&records, self.date_style);
                    if self.refresh_after.take() == Some(Operation::Create) {
                        self.form.reset();
                    }
                    self.sync.mark_refreshed();
                    self.status = if records.is_empty() {
                        "No trees registered".to_string()
                    } else {
                        format!("{} tree(s) registered", records.len())
                    };
                }
                UiEvent::MutationSettled { operation, alert } => {
                    if operation == Operation::Update {
                        // Mirrors the form being cleared when an update
                        // submission settles, whatever the outcome.
                        self.form.reset();
                    }
                    if let Some(alert) = alert {
                        self.alert = Some(alert);
                    }
                    self.sync.mark_settled();
                    self.refresh_after = Some(operation);
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::RefreshList,
                        &mut self.status,
                    );
                }
                UiEvent::WorkerFailed(message) => {
                    self.worker_ready = false;
                    self.status = message;
                }
            }
        }
    }

    fn show_validation_failure(&mut self, text: String) {
        self.alert = Some(AlertMessage {
            kind: AlertKind::Failure,
            text,
        });
    }

    fn submit_create(&mut self) {
        if !self.sync.is_idle() {
            return;
        }
        match self.form.validate() {
            Ok(fields) => {
                self.sync.begin_submission();
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::CreateTree { fields },
                    &mut self.status,
                );
            }
            Err(err) => self.show_validation_failure(err.to_string()),
        }
    }

    fn submit_update(&mut self) {
        if !self.sync.is_idle() {
            return;
        }
        match self.form.validate_for_update() {
            Ok((fields, id)) => {
                self.sync.begin_submission();
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::UpdateTree { fields, id },
                    &mut self.status,
                );
            }
            Err(err) => self.show_validation_failure(err.to_string()),
        }
    }

    fn request_delete(&mut self, record: &TreeRecord) {
        self.pending_delete = Some(PendingDelete {
            id: record.id.clone(),
            custom_name: record.custom_name.clone(),
        });
    }

    fn confirm_delete(&mut self) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };
        if self.sync.begin_submission() {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::DeleteTree { id: pending.id },
                &mut self.status,
            );
        }
    }

    fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    fn dialog_open(&self) -> bool {
        self.alert.is_some() || self.pending_delete.is_some()
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tree registry");
        ui.add_space(6.0);

        ui.label(egui::RichText::new("Custom name").strong());
        ui.text_edit_singleline(&mut self.form.custom_name);
        ui.label(egui::RichText::new("Species").strong());
        ui.text_edit_singleline(&mut self.form.species);
        ui.label(egui::RichText::new("Location").strong());
        ui.text_edit_singleline(&mut self.form.location);
        ui.label(egui::RichText::new("Planting date").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.form.planting_date).hint_text("YYYY-MM-DD"),
        );

        ui.add_space(10.0);
        let submit_enabled = self.sync.is_idle() && !self.dialog_open();
        ui.horizontal(|ui| {
            match self.form.mode() {
                SubmitMode::Create => {
                    if ui
                        .add_enabled(submit_enabled, egui::Button::new("Plant tree"))
                        .clicked()
                    {
                        self.submit_create();
                    }
                }
                SubmitMode::Update => {
                    if ui
                        .add_enabled(submit_enabled, egui::Button::new("Confirm update"))
                        .clicked()
                    {
                        self.submit_update();
                    }
                }
            }
            if ui.button("Clear form").clicked() {
                self.form.reset();
            }
        });

        if let Some(id) = self.form.editing() {
            ui.add_space(4.0);
            ui.weak(format!("Editing tree {id}"));
        }
    }

    fn show_row(&self, ui: &mut egui::Ui, row: &TreeRowView, actions_enabled: bool) -> Option<RowAction> {
        let mut action = None;
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&row.record.custom_name).strong());
                        ui.small(format!("Species: {}", row.species_display));
                        ui.small(format!("Location: {}", row.record.location));
                        ui.small(format!("Planted: {}", row.planting_date_display));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add_enabled(actions_enabled, egui::Button::new("Delete"))
                            .clicked()
                        {
                            action = Some(RowAction::RequestDelete(row.record.clone()));
                        }
                        if ui
                            .add_enabled(actions_enabled, egui::Button::new("Edit"))
                            .clicked()
                        {
                            action = Some(RowAction::Edit(row.record.clone()));
                        }
                    });
                });
            });
        action
    }

    fn show_list(&mut self, ui: &mut egui::Ui) {
        ui.heading("My trees");
        ui.add_space(6.0);

        let actions_enabled = self.sync.is_idle() && !self.dialog_open();
        let mut action = None;
        egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            for entry in &self.entries {
                match entry {
                    ListEntry::Row(row) => {
                        if let Some(row_action) = self.show_row(ui, row, actions_enabled) {
                            action = Some(row_action);
                        }
                    }
                    ListEntry::Placeholder => {
                        egui::Frame::group(ui.style())
                            .inner_margin(egui::Margin::symmetric(10, 12))
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(EMPTY_LIST_HEADLINE).strong());
                                ui.small(EMPTY_LIST_SUBLINE);
                            });
                    }
                }
                ui.add_space(4.0);
            }
        });

        match action {
            Some(RowAction::Edit(record)) => self.form.begin_edit(&record),
            Some(RowAction::RequestDelete(record)) => self.request_delete(&record),
            None => {}
        }
    }

    fn show_alert_dialog(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.alert.clone() else {
            return;
        };
        let title = match alert.kind {
            AlertKind::Success => "Done",
            AlertKind::Failure => "Something went wrong",
        };
        egui::Window::new("registry_alert")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(title).strong());
                ui.add_space(4.0);
                ui.label(&alert.text);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.alert = None;
                }
            });
    }

    fn show_delete_dialog(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending_delete else {
            return;
        };
        let custom_name = pending.custom_name.clone();
        egui::Window::new("delete_confirmation")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Remove this tree?").strong());
                ui.add_space(4.0);
                ui.label(custom_name);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Confirm").clicked() {
                        self.confirm_delete();
                    }
                    if ui.button("Cancel").clicked() {
                        self.decline_delete();
                    }
                });
            });
    }
}

impl eframe::App for RegistryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_alert_dialog(ctx);
        self.show_delete_dialog(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
        egui::SidePanel::left("tree_form")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| self.show_form(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.show_list(ui));

        // Worker events arrive without user input; keep polling.
        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}
