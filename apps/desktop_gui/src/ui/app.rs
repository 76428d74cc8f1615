use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{EmployeeId, EmployeeRecord};

use crate::backend_bridge::commands::StoreCommand;
use crate::controller::events::UiEvent;
use crate::controller::form::{EmployeeForm, FormMode};
use crate::controller::orchestration::dispatch_store_command;

const NO_SELECTION_UPDATE: &str = "Please select an employee to update!";
const NO_SELECTION_DELETE: &str = "Please select an employee to delete!";

pub struct EmployeeApp {
    form: EmployeeForm,
    roster: Vec<EmployeeRecord>,
    status: String,
    pending_delete: Option<EmployeeId>,
    cmd_tx: Sender<StoreCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl EmployeeApp {
    pub fn new(cmd_tx: Sender<StoreCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            form: EmployeeForm::default(),
            roster: Vec::new(),
            status: "Loading employees...".to_string(),
            pending_delete: None,
            cmd_tx,
            ui_rx,
        }
    }

    fn drain_store_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Roster(records) => {
                    self.roster = records;
                    // Drop a selection whose record vanished underneath it.
                    if let FormMode::Editing(id) = self.form.mode() {
                        if !self.roster.iter().any(|r| r.id == id) {
                            self.form.clear();
                        }
                    }
                }
                UiEvent::Info(message) | UiEvent::Error(message) => self.status = message,
            }
        }
    }

    fn on_add_clicked(&mut self) {
        match self.form.validate() {
            Ok(draft) => {
                dispatch_store_command(
                    &self.cmd_tx,
                    StoreCommand::AddEmployee { draft },
                    &mut self.status,
                );
                self.form.clear();
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    fn on_update_clicked(&mut self) {
        let Some(id) = self.form.selected_id() else {
            self.status = NO_SELECTION_UPDATE.to_string();
            return;
        };
        match self.form.validate() {
            Ok(draft) => {
                dispatch_store_command(
                    &self.cmd_tx,
                    StoreCommand::UpdateEmployee { id, draft },
                    &mut self.status,
                );
                self.form.clear();
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    fn on_delete_clicked(&mut self) {
        match self.form.selected_id() {
            Some(id) => self.pending_delete = Some(id),
            None => self.status = NO_SELECTION_DELETE.to_string(),
        }
    }

    fn labeled_text_field(
        ui: &mut egui::Ui,
        id: &'static str,
        label: &str,
        hint: &str,
        value: &mut String,
    ) {
        ui.label(egui::RichText::new(label).strong());
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .hint_text(
                egui::RichText::new(hint)
                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
            )
            .desired_width(f32::INFINITY);
        ui.add_sized([ui.available_width(), 28.0], edit);
        ui.add_space(6.0);
    }

    fn show_form_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("employee_form_panel")
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Employee Details");
                ui.small(match self.form.mode() {
                    FormMode::NewEntry => "New entry".to_string(),
                    FormMode::Editing(id) => format!("Editing employee #{}", id.0),
                });
                ui.separator();

                Self::labeled_text_field(
                    ui,
                    "employee_name",
                    "Employee Name",
                    "Full name",
                    &mut self.form.name,
                );
                Self::labeled_text_field(
                    ui,
                    "employee_position",
                    "Position",
                    "Job title",
                    &mut self.form.position,
                );
                Self::labeled_text_field(
                    ui,
                    "employee_salary",
                    "Salary",
                    "e.g. 75000",
                    &mut self.form.salary,
                );
                Self::labeled_text_field(
                    ui,
                    "employee_dob",
                    "Date of Birth",
                    "YYYY-MM-DD",
                    &mut self.form.dob,
                );
                Self::labeled_text_field(
                    ui,
                    "employee_email",
                    "Email",
                    "name@example.com",
                    &mut self.form.email,
                );
                Self::labeled_text_field(
                    ui,
                    "employee_mobile",
                    "Mobile Number",
                    "7-15 digits",
                    &mut self.form.mobile,
                );

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("Add Employee").clicked() {
                        self.on_add_clicked();
                    }
                    if ui.button("Update Employee").clicked() {
                        self.on_update_clicked();
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button("Delete Employee").clicked() {
                        self.on_delete_clicked();
                    }
                    if ui.button("Clear Form").clicked() {
                        self.form.clear();
                        self.status.clear();
                    }
                });
            });
    }

    fn show_roster_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Employees");
            ui.separator();

            let selected_id = self.form.selected_id();
            let mut clicked: Option<EmployeeRecord> = None;

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("employee_roster_grid")
                    .striped(true)
                    .num_columns(7)
                    .min_col_width(48.0)
                    .show(ui, |ui| {
                        for header in ["ID", "Name", "Position", "Salary", "DOB", "Email", "Mobile"]
                        {
                            ui.label(egui::RichText::new(header).strong());
                        }
                        ui.end_row();

                        for record in &self.roster {
                            let selected = selected_id == Some(record.id);
                            let cells = [
                                record.id.0.to_string(),
                                record.name.clone(),
                                record.position.clone(),
                                record.salary.to_string(),
                                record.dob.clone(),
                                record.email.clone(),
                                record.mobile.clone(),
                            ];
                            for cell in cells {
                                if ui.selectable_label(selected, cell).clicked() {
                                    clicked = Some(record.clone());
                                }
                            }
                            ui.end_row();
                        }
                    });

                if self.roster.is_empty() {
                    ui.add_space(12.0);
                    ui.weak("No employees yet. Fill in the form and press Add Employee.");
                }
            });

            if let Some(record) = clicked {
                self.form.load(&record);
            }
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{} employee(s)", self.roster.len()));
                });
            });
        });
    }

    fn show_confirm_delete(&mut self, ctx: &egui::Context) {
        let Some(id) = self.pending_delete else {
            return;
        };

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Are you sure you want to delete the selected employee?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes, delete").clicked() {
                        dispatch_store_command(
                            &self.cmd_tx,
                            StoreCommand::DeleteEmployee { id },
                            &mut self.status,
                        );
                        self.form.clear();
                        self.pending_delete = None;
                    }
                    // Declining must be a true no-op: form and list untouched.
                    if ui.button("No").clicked() {
                        self.pending_delete = None;
                    }
                });
            });
    }
}

impl eframe::App for EmployeeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_store_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Employee Management System");
            ui.add_space(4.0);
        });

        self.show_status_bar(ctx);
        self.show_form_panel(ctx);
        self.show_roster_panel(ctx);
        self.show_confirm_delete(ctx);

        // Worker events must surface even while the window is idle.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
