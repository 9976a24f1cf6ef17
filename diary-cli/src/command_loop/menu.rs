use strum::EnumMessage as _;
use strum_macros::{EnumIter, EnumMessage, FromRepr};

/// The numbered options of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumMessage, FromRepr)]
#[repr(u8)]
pub enum MenuChoice {
    #[strum(message = "Create New Entry")]
    Create = 1,
    #[strum(message = "View Entry")]
    View = 2,
    #[strum(message = "Edit Entry")]
    Edit = 3,
    #[strum(message = "Delete Entry")]
    Delete = 4,
    #[strum(message = "List All Entries")]
    List = 5,
    #[strum(message = "Exit")]
    Exit = 6,
}

impl MenuChoice {
    /// Parses a line typed at the menu prompt. Anything that isn't one of the listed numbers,
    /// including non-numeric text, gives `None`.
    pub fn from_input(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_repr)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

/// What the loop does after handling a choice.
#[derive(Debug, PartialEq, Eq)]
pub enum LoopStep {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn numbers_map_to_choices() {
        assert_eq!(MenuChoice::from_input("1"), Some(MenuChoice::Create));
        assert_eq!(MenuChoice::from_input(" 5 "), Some(MenuChoice::List));
        assert_eq!(MenuChoice::from_input("6"), Some(MenuChoice::Exit));
    }

    #[test]
    fn out_of_range_and_garbage_are_rejected() {
        for input in ["0", "7", "-1", "", "abc", "1.0", "300"] {
            assert_eq!(MenuChoice::from_input(input), None, "{input:?}");
        }
    }

    #[test]
    fn every_choice_has_a_label_and_sequential_number() {
        for (i, choice) in MenuChoice::iter().enumerate() {
            assert_eq!(choice.number() as usize, i + 1);
            assert!(!choice.label().is_empty());
        }
    }
}
