use crate::api::{spawn_page_fetch, AsyncOperation, PageResult, PokeApi};
use crate::config::Config;
use crate::error::NavigationError;
use crate::models::Pokemon;
use crate::pagination::{NavState, NavigationController, PageClick};
use crate::ui::components::*;
use crate::ui::setup_styles;
use eframe::egui;
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct PokedexApp {
    /// File-backed settings; requests use `config.effective()`.
    pub config: Config,

    // Tokio runtime for async operations
    pub runtime: Arc<tokio::runtime::Runtime>,
    pub source: Arc<PokeApi>,

    // Page state and the in-flight load, if any
    pub navigation: NavigationController<Pokemon>,
    pub pending_operation: Option<AsyncOperation>,

    // Index into the current page's records
    pub selected: Option<usize>,

    pub status_message: String,
    pub show_settings: bool,

    // UI Components
    menu_bar: MenuBar,
    status_bar: StatusBar,
    settings_dialog: SettingsDialog,
    pagination: PaginationControls,
    card_grid: CardGrid,
    detail_dialog: DetailDialog,
}

impl PokedexApp {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Arc<tokio::runtime::Runtime>) -> Self {
        setup_styles(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let config = Config::load().unwrap_or_else(|e| {
            error!("Failed to load config, using defaults: {}", e);
            Config::default()
        });

        let mut app = Self {
            source: Arc::new(PokeApi::new(&config.effective())),
            navigation: NavigationController::new(config.inner_circle_size),
            config,
            runtime,
            pending_operation: None,
            selected: None,
            status_message: "Ready".to_string(),
            show_settings: false,
            menu_bar: MenuBar::new(),
            status_bar: StatusBar::new(),
            settings_dialog: SettingsDialog::new(),
            pagination: PaginationControls::new(),
            card_grid: CardGrid::new(),
            detail_dialog: DetailDialog::new(),
        };

        // Initial load of page 1
        app.reload_page();

        app
    }

    pub fn navigate(&mut self, click: PageClick) {
        match self.navigation.begin_navigation(click) {
            Ok(page) => self.start_fetch(page),
            Err(e) => debug!("Ignoring navigation click: {}", e),
        }
    }

    pub fn reload_page(&mut self) {
        match self.navigation.begin_reload() {
            Ok(page) => self.start_fetch(page),
            Err(e) => debug!("Ignoring reload: {}", e),
        }
    }

    fn start_fetch(&mut self, page: u32) {
        self.status_message = format!("Loading page {}...", page);
        let promise = spawn_page_fetch(Arc::clone(&self.runtime), Arc::clone(&self.source), page);
        self.pending_operation = Some(AsyncOperation::LoadPage(promise));
    }

    pub fn apply_config(&mut self, config: Config) {
        if let Err(e) = config.save() {
            error!("Failed to save config: {}", e);
        }
        let effective = config.effective();
        info!(base_url = %effective.api_base_url, page_size = effective.page_size, "Applying settings");

        // A load for the old source may still be running; its result is dropped.
        self.pending_operation = None;
        self.source = Arc::new(PokeApi::new(&effective));
        self.navigation = NavigationController::new(config.inner_circle_size);
        self.selected = None;
        self.config = config;
        self.reload_page();
    }

    fn select_relative(&mut self, forward: bool) {
        if let Some(index) = self.selected {
            let len = self.navigation.items().len();
            self.selected = if forward {
                Some((index + 1).min(len.saturating_sub(1)))
            } else {
                Some(index.saturating_sub(1))
            };
        }
    }
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle pending async operations
        self.handle_async_operations();

        // Top menu bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            let current_page = self.navigation.current_page();
            let total_pages = self.navigation.total_pages();
            let loading_page = match self.navigation.state() {
                NavState::Loading { target_page } => Some(target_page),
                NavState::Idle => None,
            };
            if let Some(event) = self.menu_bar.show(ui, current_page, total_pages, loading_page) {
                match event {
                    MenuBarEvent::ShowSettings => self.show_settings = true,
                    MenuBarEvent::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                    MenuBarEvent::Reload => self.reload_page(),
                }
            }
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar.show(
                ui,
                &self.status_message,
                self.navigation.is_loading(),
                self.navigation.items().len(),
            );
        });

        // Settings dialog
        if self.show_settings {
            if let Some(event) = self.settings_dialog.show(ctx, &self.config) {
                match event {
                    SettingsDialogEvent::Apply(config) => {
                        self.apply_config(config);
                        self.show_settings = false;
                    }
                    SettingsDialogEvent::Close => self.show_settings = false,
                }
            }
        }

        // Detail dialog for the selected card
        if let Some(index) = self.selected {
            let len = self.navigation.items().len();
            let event = match self.navigation.items().get(index) {
                Some(pokemon) => self.detail_dialog.show(ctx, pokemon, index > 0, index + 1 < len),
                None => Some(DetailDialogEvent::Close),
            };
            match event {
                Some(DetailDialogEvent::Previous) => self.select_relative(false),
                Some(DetailDialogEvent::Next) => self.select_relative(true),
                Some(DetailDialogEvent::Close) => self.selected = None,
                None => {}
            }
        }

        // Main content area - pagination control and card grid
        egui::CentralPanel::default().show(ctx, |ui| {
            let is_loading = self.navigation.is_loading();

            if let Some(event) = self.pagination.show(ui, self.navigation.entries(), is_loading) {
                match event {
                    PaginationEvent::Reload => self.reload_page(),
                    PaginationEvent::Navigate(click) => self.navigate(click),
                }
            }

            if self.navigation.items().is_empty() {
                ui.centered_and_justified(|ui| {
                    if is_loading {
                        ui.spinner();
                    } else {
                        ui.label("No Pokémon loaded");
                    }
                });
            } else if let Some(CardGridEvent::Opened(index)) = self.card_grid.show(ui, self.navigation.items()) {
                self.selected = Some(index);
            }
        });

        // Request repaint if we're waiting for async operations
        if self.pending_operation.is_some() {
            ctx.request_repaint();
        }
    }
}

impl PokedexApp {
    fn handle_async_operations(&mut self) {
        let Some(operation) = self.pending_operation.take() else {
            return;
        };

        match operation {
            AsyncOperation::LoadPage(promise) => match promise.try_take() {
                Ok(result) => {
                    let outcome = settle_page_load(&mut self.navigation, result);
                    if let Some(status) = outcome.status {
                        self.status_message = status;
                    }
                    if outcome.clear_selection {
                        self.selected = None;
                    }
                    if outcome.reload {
                        self.reload_page();
                    }
                }
                Err(promise) => {
                    self.pending_operation = Some(AsyncOperation::LoadPage(promise));
                }
            },
        }
    }
}

/// What the app does once a page load has settled.
#[derive(Debug, PartialEq)]
struct PageLoadOutcome {
    status: Option<String>,
    clear_selection: bool,
    reload: bool,
}

fn settle_page_load<T>(navigation: &mut NavigationController<T>, result: PageResult<T>) -> PageLoadOutcome {
    let page_before = navigation.current_page();
    let outcome = navigation.complete(result);
    let page_changed = navigation.current_page() != page_before;

    match outcome {
        Ok(()) => PageLoadOutcome {
            status: Some(format!(
                "Page {} of {}",
                navigation.current_page(),
                navigation.total_pages()
            )),
            clear_selection: page_changed,
            reload: false,
        },
        Err(NavigationError::FetchFailure(e)) => PageLoadOutcome {
            status: Some(format!("Error loading page: {}", e)),
            clear_selection: false,
            reload: false,
        },
        // The displayed page was dropped with the old total; fetch the clamped one.
        Err(NavigationError::PageOutOfRange { requested, total_pages }) => PageLoadOutcome {
            status: Some(format!("Page {} no longer exists, {} pages available", requested, total_pages)),
            clear_selection: page_changed,
            reload: page_changed,
        },
        Err(e) => {
            debug!("Page result ignored: {}", e);
            PageLoadOutcome {
                status: None,
                clear_selection: false,
                reload: false,
            }
        }
    }
}
