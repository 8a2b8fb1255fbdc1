use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{SortKey, Story},
    error::{FetchOutcome, FETCH_FAILED_MESSAGE, LOADING_MESSAGE},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::SearchScreen,
};

const HEADLINE: &str = "For Geeks Only";

pub struct SearchApp {
    screen: SearchScreen,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    focus_requested: bool,
}

impl SearchApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        endpoint: impl Into<String>,
    ) -> Self {
        let mut app = Self {
            screen: SearchScreen::new(endpoint),
            cmd_tx,
            ui_rx,
            focus_requested: false,
        };
        let startup = app.screen.startup_commands();
        app.queue(startup);
        app
    }

    fn queue(&mut self, commands: impl IntoIterator<Item = BackendCommand>) {
        for cmd in commands {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.screen.status);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            let commands = self.screen.apply_ui_event(event);
            self.queue(commands);
        }
    }

    fn show_search_form(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Search:");
            let input = ui.text_edit_singleline(&mut self.screen.search_input);
            if !self.focus_requested {
                input.request_focus();
                self.focus_requested = true;
            }
            if input.changed() {
                let cmd = self.screen.on_search_input();
                self.queue([cmd]);
            }

            let enter_pressed =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let submit_clicked = ui
                .add_enabled(self.screen.can_submit(), egui::Button::new("Submit"))
                .clicked();
            if submit_clicked || (enter_pressed && self.screen.can_submit()) {
                let cmd = self.screen.submit();
                self.queue(cmd);
            }
        });
    }

    fn show_story_list(&mut self, ui: &mut egui::Ui) {
        let active = self.screen.sort();
        let mut sort_clicked = None;
        let mut dismissed: Option<Story> = None;
        let visible = self.screen.visible_stories();

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("story_list")
                .num_columns(5)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for column in [
                        SortKey::Title,
                        SortKey::Author,
                        SortKey::CommentCount,
                        SortKey::Points,
                    ] {
                        if ui.button(header_caption(column, active)).clicked() {
                            sort_clicked = Some(column);
                        }
                    }
                    ui.weak("Actions");
                    ui.end_row();

                    for story in &visible {
                        match &story.url {
                            Some(url) => {
                                ui.hyperlink_to(story.title.as_str(), url);
                            }
                            None => {
                                ui.label(story.title.as_str());
                            }
                        }
                        ui.label(story.author.as_str());
                        ui.label(story.num_comments.to_string());
                        ui.label(story.points.to_string());
                        if ui.button("Dismiss").clicked() {
                            dismissed = Some(story.clone());
                        }
                        ui.end_row();
                    }
                });
        });

        if let Some(key) = sort_clicked {
            self.screen.set_sort(key);
        }
        if let Some(story) = dismissed {
            self.screen.dismiss(&story);
        }
    }
}

fn header_caption(column: SortKey, active: SortKey) -> String {
    if column == active {
        format!("{} ▼", column.label())
    } else {
        column.label().to_string()
    }
}

impl eframe::App for SearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(HEADLINE);
            ui.add_space(8.0);
            self.show_search_form(ui);
            ui.add_space(8.0);

            if !self.screen.status.is_empty() {
                ui.weak(self.screen.status.as_str());
            }

            let outcome = self.screen.stories().outcome();
            match outcome {
                FetchOutcome::Loading => {
                    ui.label(LOADING_MESSAGE);
                }
                FetchOutcome::Failed => {
                    ui.colored_label(egui::Color32::LIGHT_RED, FETCH_FAILED_MESSAGE);
                    self.show_story_list(ui);
                }
                FetchOutcome::Loaded => self.show_story_list(ui),
            }
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
