use eframe::egui::{InputState, Key};
use facelace_core::Color;

use crate::action::{Action, ActionRequestQueue};

struct Trigger {
    key: Key,
    command: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool) -> Self {
        Self { key, command }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true), action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, false), action)
    }

    const fn color(key: Key, color: Color) -> Self {
        Self::plain(key, Action::SelectColor(color))
    }
}

const SHORTCUTS: [Shortcut; 10] = [
    Shortcut::color(Key::Num1, Color::White),
    Shortcut::color(Key::Num2, Color::Yellow),
    Shortcut::color(Key::Num3, Color::Red),
    Shortcut::color(Key::Num4, Color::Orange),
    Shortcut::color(Key::Num5, Color::Blue),
    Shortcut::color(Key::Num6, Color::Green),
    Shortcut::plain(Key::ArrowLeft, Action::PreviousMove),
    Shortcut::plain(Key::ArrowRight, Action::NextMove),
    Shortcut::command(Key::Enter, Action::Submit),
    Shortcut::command(Key::Comma, Action::ToggleSettings),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        let triggered =
            i.key_pressed(shortcut.trigger.key) && i.modifiers.command == shortcut.trigger.command;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_keys_follow_palette_order() {
        let colors: Vec<Color> = SHORTCUTS
            .iter()
            .filter_map(|shortcut| match shortcut.action {
                Action::SelectColor(color) => Some(color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, Color::ALL.to_vec());
    }
}
