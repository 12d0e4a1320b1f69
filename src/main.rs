use iced::widget::{canvas, column, container, horizontal_rule, row, vertical_rule};
use iced::{Element, Length, Task, Theme};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod color;
mod config;
mod css;
mod state;
mod ui;

use config::Limits;
use state::{LayerId, LayerStore, PresetLibrary, ShadowUpdate};

/// Main application state
struct ShadowEditor {
    /// Single source of truth for the layers and the selection
    store: LayerStore,
    /// Built-in presets, decoded at startup
    presets: PresetLibrary,
    /// Slider ranges applied to numeric edits
    limits: Limits,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Add Layer"
    AddLayer,
    /// User deleted a layer
    RemoveLayer(LayerId),
    /// User picked a layer in the list
    SelectLayer(LayerId),
    /// User toggled a layer's visibility
    ToggleVisibility(LayerId),
    /// A layer was moved within the list
    MoveLayer { from: usize, to: usize },
    /// A property control changed a field of the active layer
    UpdateActive(ShadowUpdate),
    /// The preview was dragged; carries the new absolute offset
    OffsetDragged(f32, f32),
    /// User picked a preset by name
    LoadPreset(String),
    /// User clicked "Copy"
    CopyCss,
}

impl ShadowEditor {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Fall back to an empty library if the presets fail to decode
        let presets = PresetLibrary::builtin().unwrap_or_else(|err| {
            error!(%err, "failed to load built-in presets");
            PresetLibrary::default()
        });

        let store = match presets.default_preset() {
            Some(preset) => LayerStore::with_preset(&preset.layers),
            None => LayerStore::new(),
        };

        info!(
            "🎨 Shadow Editor initialized with {} presets and {} layers",
            presets.len(),
            store.len()
        );

        let status = if presets.is_empty() {
            "Ready. No presets available.".to_string()
        } else {
            format!("Ready. {} presets available.", presets.len())
        };

        (
            ShadowEditor {
                store,
                presets,
                limits: Limits::default(),
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        // The status line only describes the most recent action
        self.status.clear();

        match message {
            Message::AddLayer => {
                let id = self.store.add_layer();
                self.status = format!("Added {}.", id);
            }
            Message::RemoveLayer(id) => {
                self.store.remove_layer(id);
                self.status = format!("{} layers.", self.store.len());
            }
            Message::SelectLayer(id) => {
                self.store.set_active_layer_id(Some(id));
            }
            Message::ToggleVisibility(id) => {
                self.store.toggle_layer_visibility(id);
            }
            Message::MoveLayer { from, to } => {
                self.store.reorder_layers(from, to);
            }
            Message::UpdateActive(update) => {
                if let Some(id) = self.store.active_layer_id() {
                    self.store.update_layer(id, self.limits.clamp(update));
                }
            }
            Message::OffsetDragged(x, y) => {
                if let Some(id) = self.store.active_layer_id() {
                    self.store.update_layer(id, self.limits.clamp(ShadowUpdate::X(x)));
                    self.store.update_layer(id, self.limits.clamp(ShadowUpdate::Y(y)));
                }
            }
            Message::LoadPreset(name) => match self.presets.get(&name) {
                Some(preset) => {
                    self.store.load_preset(&preset.layers);
                    info!("✨ Loaded preset '{}' ({} layers)", name, preset.layers.len());
                    self.status = format!("Loaded preset: {}", name);
                }
                None => {
                    error!(%name, "unknown preset requested");
                }
            },
            Message::CopyCss => {
                // Same text as the code panel shows
                let declaration = css::generate_declaration(self.store.layers());
                self.status = "✅ Copied to clipboard!".to_string();
                return iced::clipboard::write(declaration);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let active = self.store.active_layer().map(|layer| &layer.params);

        let preview = canvas(ui::ShadowPreview {
            layers: self.store.layers(),
            active,
        })
        .width(Length::Fill)
        .height(Length::FillPortion(3));

        let declaration = css::generate_declaration(self.store.layers());

        let sidebar = column![
            ui::panels::preset_bar(&self.presets),
            horizontal_rule(1),
            ui::panels::layer_list(&self.store),
        ]
        .spacing(16)
        .padding(20)
        .width(Length::Fixed(420.0));

        let main = column![
            preview,
            row![
                container(ui::panels::properties(active, &self.limits)).width(Length::FillPortion(1)),
                container(ui::panels::code_output(declaration, &self.status)).width(Length::FillPortion(1)),
            ]
            .spacing(24)
            .height(Length::FillPortion(2)),
        ]
        .spacing(20)
        .padding(20);

        row![sidebar, vertical_rule(1), main]
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();

    iced::application(config::APP_TITLE, ShadowEditor::update, ShadowEditor::view)
        .theme(ShadowEditor::theme)
        .centered()
        .run_with(ShadowEditor::new)
}
