use glam::Vec2;

use crate::components::MatchKind;
use crate::config::Config;
use crate::frontend::{InputSnapshot, Key, Shape, Surface, TextSize};

use super::Transition;

/// Entries on the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start(MatchKind),
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [
        MenuItem::Start(MatchKind::SinglePlayer),
        MenuItem::Start(MatchKind::TwoPlayer),
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start(kind) => kind.label(),
            MenuItem::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    /// Move the highlight, wrapping at either end
    pub fn move_selection(&mut self, delta: isize) {
        let len = MenuItem::ALL.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    pub fn update(&mut self, input: &InputSnapshot) -> Option<Transition> {
        if input.was_pressed(Key::Quit) || input.was_pressed(Key::Back) {
            return Some(Transition::Quit);
        }
        if input.was_pressed(Key::Up) {
            self.move_selection(-1);
        }
        if input.was_pressed(Key::Down) {
            self.move_selection(1);
        }
        if input.was_pressed(Key::Confirm) {
            return Some(match self.selected() {
                MenuItem::Start(kind) => Transition::Start(kind),
                MenuItem::Exit => Transition::Quit,
            });
        }
        None
    }

    pub fn render(&self, config: &Config, surface: &mut dyn Surface) {
        let palette = config.palette;
        let center_x = config.field_width / 2.0;
        surface.clear(palette.background);

        surface.draw(
            Shape::Text {
                text: config.title.clone(),
                size: TextSize::Large,
            },
            Vec2::new(center_x, config.field_height / 4.0),
            palette.foreground,
        );

        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let color = if i == self.selected {
                palette.highlight
            } else {
                palette.foreground
            };
            surface.draw(
                Shape::Text {
                    text: item.label().to_string(),
                    size: TextSize::Medium,
                },
                Vec2::new(center_x, config.field_height / 2.0 + i as f32 * 50.0),
                color,
            );
        }

        surface.draw(
            Shape::Text {
                text: "Use UP/DOWN arrows and ENTER to select".to_string(),
                size: TextSize::Small,
            },
            Vec2::new(center_x, config.field_height * 0.8),
            palette.foreground,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::DrawList;

    fn press(key: Key) -> InputSnapshot {
        InputSnapshot::new().with_pressed(key)
    }

    #[test]
    fn test_selection_wraps_around() {
        let mut menu = MenuState::new();
        assert_eq!(menu.selected(), MenuItem::Start(MatchKind::SinglePlayer));

        menu.update(&press(Key::Up));
        assert_eq!(menu.selected(), MenuItem::Exit, "Up from the top wraps to the bottom");

        menu.update(&press(Key::Down));
        assert_eq!(menu.selected(), MenuItem::Start(MatchKind::SinglePlayer));
    }

    #[test]
    fn test_confirm_starts_selected_match() {
        let mut menu = MenuState::new();
        menu.update(&press(Key::Down));
        assert_eq!(
            menu.update(&press(Key::Confirm)),
            Some(Transition::Start(MatchKind::TwoPlayer))
        );
    }

    #[test]
    fn test_exit_item_and_quit_key() {
        let mut menu = MenuState::new();
        menu.move_selection(2);
        assert_eq!(menu.update(&press(Key::Confirm)), Some(Transition::Quit));

        let mut menu = MenuState::new();
        assert_eq!(menu.update(&press(Key::Quit)), Some(Transition::Quit));
    }

    #[test]
    fn test_held_keys_do_not_scroll() {
        let mut menu = MenuState::new();
        let held = InputSnapshot::new().with_held(Key::Down);
        assert_eq!(menu.update(&held), None);
        assert_eq!(menu.selected(), MenuItem::Start(MatchKind::SinglePlayer));
    }

    #[test]
    fn test_render_highlights_selection() {
        let config = Config::new();
        let mut menu = MenuState::new();
        menu.move_selection(1);
        let mut frame = DrawList::new();

        menu.render(&config, &mut frame);

        assert!(frame.contains_text(&config.title));
        let highlighted: Vec<_> = frame
            .iter()
            .filter(|cmd| cmd.color == config.palette.highlight)
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert!(matches!(
            &highlighted[0].shape,
            Shape::Text { text, .. } if text == "Two Players"
        ));
    }
}
