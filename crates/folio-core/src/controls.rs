/// User-triggered scene actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneCommand {
    TogglePause,
    NextAccent,
    SelectAccent(usize),
    Reshuffle,
}

/// Map a `KeyboardEvent.key` value to a command.
#[inline]
pub fn command_for_key(key: &str) -> Option<SceneCommand> {
    match key {
        " " | "Spacebar" => Some(SceneCommand::TogglePause),
        "n" | "N" | "ArrowRight" => Some(SceneCommand::NextAccent),
        "r" | "R" => Some(SceneCommand::Reshuffle),
        "1" => Some(SceneCommand::SelectAccent(0)),
        "2" => Some(SceneCommand::SelectAccent(1)),
        "3" => Some(SceneCommand::SelectAccent(2)),
        "4" => Some(SceneCommand::SelectAccent(3)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_accents() {
        assert_eq!(command_for_key("1"), Some(SceneCommand::SelectAccent(0)));
        assert_eq!(command_for_key("4"), Some(SceneCommand::SelectAccent(3)));
        assert_eq!(command_for_key("5"), None);
    }

    #[test]
    fn letters_ignore_case() {
        assert_eq!(command_for_key("n"), command_for_key("N"));
        assert_eq!(command_for_key("R"), Some(SceneCommand::Reshuffle));
        assert_eq!(command_for_key(" "), Some(SceneCommand::TogglePause));
    }
}
