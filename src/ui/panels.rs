/// Side panels of the editor window
///
/// Each function builds one panel from read-only state. Every user action
/// comes back as a [`Message`] for `ShadowEditor::update`; nothing here
/// touches the store directly.
use iced::widget::{
    button, checkbox, column, container, row, scrollable, slider, text, text_input, Column,
};
use iced::{Alignment, Element, Font, Length};
use iced_aw::Wrap;

use crate::config::Limits;
use crate::css::format_shadow;
use crate::state::{LayerStore, PresetLibrary, ShadowParams, ShadowUpdate};
use crate::Message;

/// Ordered layer list with select, visibility, move and delete controls
pub fn layer_list(store: &LayerStore) -> Element<'_, Message> {
    let last = store.len().saturating_sub(1);

    let rows: Vec<Element<Message>> = store
        .layers()
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let is_active = store.active_layer_id() == Some(layer.id);
            let params = &layer.params;

            let label = text(format!("{}. {}", index + 1, format_shadow(params))).size(13);
            let select = button(label)
                .on_press(Message::SelectLayer(layer.id))
                .width(Length::Fill)
                .style(if is_active { button::primary } else { button::secondary });

            let visibility = button(text(if params.visible { "Hide" } else { "Show" }).size(13))
                .on_press(Message::ToggleVisibility(layer.id))
                .style(button::text);

            // Stand-ins for drag-and-drop: each emits a reorder request
            let up = button(text("↑").size(13))
                .on_press_maybe((index > 0).then(|| Message::MoveLayer { from: index, to: index - 1 }));
            let down = button(text("↓").size(13))
                .on_press_maybe((index < last).then(|| Message::MoveLayer { from: index, to: index + 1 }));

            let delete = button(text("✕").size(13))
                .on_press(Message::RemoveLayer(layer.id))
                .style(button::danger);

            row![select, visibility, up, down, delete]
                .spacing(4)
                .align_y(Alignment::Center)
                .into()
        })
        .collect();

    let list: Column<Message> = if store.is_empty() {
        column![text("No layers. The declaration is `box-shadow: none;`.").size(13)]
    } else {
        Column::with_children(rows).spacing(6)
    };

    column![
        row![
            text("Layers").size(20).width(Length::Fill),
            button("+ Add Layer").on_press(Message::AddLayer),
        ]
        .align_y(Alignment::Center),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(12)
    .into()
}

/// Property editor for the active layer
pub fn properties<'a>(active: Option<&'a ShadowParams>, limits: &Limits) -> Element<'a, Message> {
    let Some(params) = active else {
        return container(text("Select or add a layer to edit its shadow.").size(14))
            .padding(12)
            .into();
    };

    let color_input = text_input("rgba(0, 0, 0, 0.2)", &params.color)
        .on_input(|color| Message::UpdateActive(ShadowUpdate::Color(color)))
        .font(Font::MONOSPACE);

    column![
        text("Properties").size(20),
        numeric_slider("Offset X", limits.offset.clone(), params.x, ShadowUpdate::X),
        numeric_slider("Offset Y", limits.offset.clone(), params.y, ShadowUpdate::Y),
        numeric_slider("Blur", limits.blur.clone(), params.blur, ShadowUpdate::Blur),
        numeric_slider("Spread", limits.spread.clone(), params.spread, ShadowUpdate::Spread),
        column![text("Color").size(14), color_input].spacing(4),
        row![
            checkbox("Inset", params.inset)
                .on_toggle(|inset| Message::UpdateActive(ShadowUpdate::Inset(inset))),
            checkbox("Visible", params.visible)
                .on_toggle(|visible| Message::UpdateActive(ShadowUpdate::Visible(visible))),
        ]
        .spacing(24),
    ]
    .spacing(12)
    .into()
}

fn numeric_slider<'a>(
    label: &'a str,
    range: std::ops::RangeInclusive<f32>,
    value: f32,
    field: fn(f32) -> ShadowUpdate,
) -> Element<'a, Message> {
    column![
        row![
            text(label).size(14).width(Length::Fill),
            text(format!("{}px", value)).size(14).font(Font::MONOSPACE),
        ],
        slider(range, value, move |v| Message::UpdateActive(field(v))).step(1.0),
    ]
    .spacing(4)
    .into()
}

/// One button per built-in preset
pub fn preset_bar(presets: &PresetLibrary) -> Element<'_, Message> {
    let buttons: Vec<Element<Message>> = presets
        .presets()
        .iter()
        .map(|preset| {
            container(
                button(text(preset.name.as_str()).size(13))
                    .on_press(Message::LoadPreset(preset.name.clone()))
                    .style(button::secondary),
            )
            .padding(3)
            .into()
        })
        .collect();

    column![text("Presets").size(20), Wrap::with_elements(buttons)]
        .spacing(8)
        .into()
}

/// Generated CSS with a copy action and the last status message
pub fn code_output<'a>(css: String, status: &'a str) -> Element<'a, Message> {
    column![
        row![
            text("CSS").size(20).width(Length::Fill),
            button("Copy").on_press(Message::CopyCss),
        ]
        .align_y(Alignment::Center),
        container(text(css).font(Font::MONOSPACE).size(14))
            .padding(12)
            .width(Length::Fill)
            .style(container::rounded_box),
        text(status).size(13),
    ]
    .spacing(8)
    .into()
}
