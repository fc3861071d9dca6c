use bevy::prelude::*;
use bevy::ui::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};

use super::components::*;
use crate::core::config::GameConfig;
use crate::core::session::{ColorMatchSession, Mode};
use crate::interaction::commands::{BoardRepaint, SessionCommand, SessionCommandSet};

pub const NEW_COLORS_LABEL: &str = "New Colors";
pub const PLAY_AGAIN_LABEL: &str = "Play Again?";

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_board)
            .add_systems(
                Update,
                (swatch_clicks, mode_button_clicks, new_colors_clicks).before(SessionCommandSet),
            )
            .add_systems(
                Update,
                (apply_board_repaints, sync_board_text, apply_board_style)
                    .chain()
                    .after(SessionCommandSet),
            );
    }
}

/// Builds the node tree. Fills and text colors that come from config are
/// painted by [`apply_board_style`], so they start out unset here.
fn spawn_board(mut commands: Commands, mut repaint: EventWriter<BoardRepaint>) {
    let unset = BackgroundColor(Color::NONE);
    commands.spawn(Camera2d);

    let root = commands
        .spawn((
            BoardRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                ..default()
            },
            unset,
        ))
        .id();

    commands.entity(root).with_children(|p| {
        // Header: title lines around the target readout.
        p.spawn((
            HeaderPanel,
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::vertical(Val::Px(18.0)),
                row_gap: Val::Px(4.0),
                ..default()
            },
            unset,
        ))
        .with_children(|h| {
            h.spawn((
                Text::new("THE GREAT"),
                TextFont { font_size: 24.0, ..default() },
                TextColor(Color::WHITE),
            ));
            h.spawn((
                TargetReadout,
                Text::new(""),
                TextFont { font_size: 44.0, ..default() },
                TextColor(Color::WHITE),
            ));
            h.spawn((
                Text::new("COLOR GAME"),
                TextFont { font_size: 24.0, ..default() },
                TextColor(Color::WHITE),
            ));
        });

        // Control stripe: new colors, status message, mode selector.
        p.spawn((
            ControlStripe,
            Node {
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(16.0), Val::Px(6.0)),
                column_gap: Val::Px(12.0),
                ..default()
            },
            unset,
        ))
        .with_children(|s| {
            s.spawn((
                NewColorsButton,
                Button,
                Node { padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)), ..default() },
                unset,
            ))
            .with_children(|b| {
                b.spawn((
                    NewColorsLabel,
                    Text::new(NEW_COLORS_LABEL),
                    TextFont { font_size: 18.0, ..default() },
                    TextColor::default(),
                ));
            });
            s.spawn((
                MessageText,
                Text::new(""),
                TextFont { font_size: 18.0, ..default() },
                TextColor::default(),
            ));
            s.spawn(Node { column_gap: Val::Px(4.0), ..default() })
                .with_children(|modes| {
                    for mode in Mode::ALL {
                        modes
                            .spawn((
                                ModeButton(mode),
                                Button,
                                Node { padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)), ..default() },
                                unset,
                            ))
                            .with_children(|b| {
                                b.spawn((
                                    ModeLabel(mode),
                                    Text::new(mode.label().to_uppercase()),
                                    TextFont { font_size: 18.0, ..default() },
                                    TextColor::default(),
                                ));
                            });
                    }
                });
        });

        // 3x3 swatch grid; every slot exists for the lifetime of the board.
        p.spawn(Node {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            justify_content: JustifyContent::Center,
            align_content: AlignContent::FlexStart,
            padding: UiRect::all(Val::Px(20.0)),
            row_gap: Val::Percent(1.5),
            column_gap: Val::Percent(1.5),
            flex_grow: 1.0,
            ..default()
        })
        .with_children(|grid| {
            for slot in 0..Mode::MAX_PALETTE {
                grid.spawn((
                    Swatch { slot },
                    RenderedColor::default(),
                    Button,
                    Node {
                        width: Val::Percent(30.0),
                        aspect_ratio: Some(1.0),
                        ..default()
                    },
                    BorderRadius::all(Val::Percent(15.0)),
                    Outline::new(Val::Px(3.0), Val::Px(2.0), Color::NONE),
                    unset,
                ));
            }
        });
    });

    repaint.write(BoardRepaint::NewRound);
}

pub fn swatch_clicks(
    q: Query<(&Interaction, &Swatch, &RenderedColor, &Node), Changed<Interaction>>,
    mut out: EventWriter<SessionCommand>,
) {
    for (interaction, swatch, color, node) in &q {
        if *interaction == Interaction::Pressed && node.display != Display::None {
            out.write(SessionCommand::SwatchClicked {
                slot: swatch.slot,
                color: color.0.clone(),
            });
        }
    }
}

pub fn mode_button_clicks(
    q: Query<(&Interaction, &ModeButton), Changed<Interaction>>,
    mut out: EventWriter<SessionCommand>,
) {
    for (interaction, button) in &q {
        if *interaction == Interaction::Pressed {
            out.write(SessionCommand::ModeSelected(button.0));
        }
    }
}

pub fn new_colors_clicks(
    q: Query<&Interaction, (Changed<Interaction>, With<NewColorsButton>)>,
    mut out: EventWriter<SessionCommand>,
) {
    if q.iter().any(|i| *i == Interaction::Pressed) {
        out.write(SessionCommand::ResetRequested);
    }
}

/// Applies the repaint requests produced by the session commands this frame.
pub fn apply_board_repaints(
    mut events: EventReader<BoardRepaint>,
    session: Res<ColorMatchSession>,
    cfg: Res<GameConfig>,
    mut q_swatches: Query<(&Swatch, &mut RenderedColor, &mut BackgroundColor, &mut Node)>,
    mut q_header: Query<&mut BackgroundColor, (With<HeaderPanel>, Without<Swatch>)>,
    mut q_label: Query<&mut Text, With<NewColorsLabel>>,
) {
    for ev in events.read() {
        let view = session.view();
        match *ev {
            BoardRepaint::NewRound => {
                for (swatch, mut rendered, mut bg, mut node) in &mut q_swatches {
                    match view.palette.get(swatch.slot) {
                        Some(rgb) => {
                            rendered.0 = rgb.canonical();
                            bg.0 = rgb.to_color();
                            node.display = Display::Flex;
                        }
                        None => node.display = Display::None,
                    }
                }
                for mut bg in &mut q_header {
                    bg.0 = cfg.colors.header_color();
                }
                set_label(&mut q_label, NEW_COLORS_LABEL);
            }
            BoardRepaint::Celebrate => {
                let target = view.target;
                for (_, mut rendered, mut bg, _) in &mut q_swatches {
                    rendered.0 = target.canonical();
                    bg.0 = target.to_color();
                }
                for mut bg in &mut q_header {
                    bg.0 = target.to_color();
                }
                set_label(&mut q_label, PLAY_AGAIN_LABEL);
            }
            BoardRepaint::Dim { slot } => {
                for (swatch, mut rendered, mut bg, _) in &mut q_swatches {
                    if swatch.slot == slot {
                        rendered.0 = cfg.colors.wrong.clone();
                        bg.0 = cfg.colors.wrong_color();
                    }
                }
            }
        }
    }
}

fn set_label(q_label: &mut Query<&mut Text, With<NewColorsLabel>>, label: &str) {
    for mut text in q_label.iter_mut() {
        if text.0 != label {
            text.0 = label.to_string();
        }
    }
}

/// Keeps the readout and status line in step with the session.
pub fn sync_board_text(
    session: Res<ColorMatchSession>,
    mut q_texts: ParamSet<(
        Query<&mut Text, With<TargetReadout>>,
        Query<&mut Text, With<MessageText>>,
    )>,
) {
    if !session.is_changed() {
        return;
    }
    let view = session.view();
    let target = view.target_text();
    for mut text in q_texts.p0().iter_mut() {
        if text.0 != target {
            text.0 = target.clone();
        }
    }
    let message = view.message.text();
    for mut text in q_texts.p1().iter_mut() {
        if text.0 != message {
            text.0 = message.to_string();
        }
    }
}

/// Paints every config-derived fill and text color, plus the mode highlight.
/// Runs on the first frame and again whenever the config or session changes,
/// so startup and hot reload go through the same path.
pub fn apply_board_style(
    session: Res<ColorMatchSession>,
    cfg: Res<GameConfig>,
    clear: Option<ResMut<ClearColor>>,
    mut q_fills: ParamSet<(
        Query<&mut BackgroundColor, With<BoardRoot>>,
        Query<&mut BackgroundColor, With<ControlStripe>>,
        Query<&mut BackgroundColor, With<NewColorsButton>>,
        Query<&mut BackgroundColor, With<HeaderPanel>>,
        Query<(&ModeButton, &mut BackgroundColor)>,
    )>,
    mut q_text_colors: ParamSet<(
        Query<&mut TextColor, With<NewColorsLabel>>,
        Query<&mut TextColor, With<MessageText>>,
        Query<(&ModeLabel, &mut TextColor)>,
    )>,
) {
    let cfg_changed = cfg.is_changed();
    if !cfg_changed && !session.is_changed() {
        return;
    }
    let colors = &cfg.colors;
    let (selected, idle) = (colors.selected_color(), colors.button_color());
    let view = session.view();

    if cfg_changed {
        let background = colors.background_color();
        if let Some(mut clear) = clear {
            clear.0 = background;
        }
        for mut bg in q_fills.p0().iter_mut() {
            bg.set_if_neq(BackgroundColor(background));
        }
        for mut bg in q_fills.p1().iter_mut() {
            bg.set_if_neq(BackgroundColor(idle));
        }
        for mut bg in q_fills.p2().iter_mut() {
            bg.set_if_neq(BackgroundColor(idle));
        }
        // A won round keeps its celebration tint until the next reset.
        if !view.won {
            for mut bg in q_fills.p3().iter_mut() {
                bg.set_if_neq(BackgroundColor(colors.header_color()));
            }
        }
        for mut color in q_text_colors.p0().iter_mut() {
            color.set_if_neq(TextColor(selected));
        }
        for mut color in q_text_colors.p1().iter_mut() {
            color.set_if_neq(TextColor(selected));
        }
    }
    for (button, mut bg) in q_fills.p4().iter_mut() {
        bg.set_if_neq(BackgroundColor(if button.0 == view.mode { selected } else { idle }));
    }
    for (label, mut color) in q_text_colors.p2().iter_mut() {
        color.set_if_neq(TextColor(if label.0 == view.mode { idle } else { selected }));
    }
}
