use super::theme::OneDark;
use crate::command_loop::MenuChoice;
use diary_core::EntryKey;
use std::io::{self, Write};
use strum::IntoEnumIterator;
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

/// Writes everything the menu loop shows the user. Output goes to whatever writer the loop
/// was given, so nothing here touches stdout directly.
pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions { use_color: true },
            },
        }
    }

    pub fn print_menu(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        if self.opts.use_color {
            write!(out, "{}", self.skin.term_text("# Personal Diary Application"))?;
        } else {
            writeln!(out, "Personal Diary Application")?;
        }
        for choice in MenuChoice::iter() {
            let number = format!("{}.", choice.number());
            if self.opts.use_color {
                writeln!(out, "{} {}", number.with(OneDark::CYAN), choice.label())?;
            } else {
                writeln!(out, "{} {}", number, choice.label())?;
            }
        }
        Ok(())
    }

    /// Writes a prompt without a trailing newline and flushes it so it shows before input.
    pub fn print_prompt(&self, out: &mut impl Write, prompt: &str) -> io::Result<()> {
        if self.opts.use_color {
            write!(out, "{}", prompt.with(OneDark::BLUE))?;
        } else {
            write!(out, "{prompt}")?;
        }
        out.flush()
    }

    pub fn print_info(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(out, "{message}")
    }

    pub fn print_success(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.opts.use_color {
            writeln!(out, "{}", message.with(OneDark::GREEN))
        } else {
            writeln!(out, "{message}")
        }
    }

    pub fn print_error(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.opts.use_color {
            writeln!(out, "{}", message.with(OneDark::RED))
        } else {
            writeln!(out, "{message}")
        }
    }

    /// Heading plus the entry text, line by line.
    pub fn print_entry(&self, out: &mut impl Write, heading: &str, content: &str) -> io::Result<()> {
        if self.opts.use_color {
            writeln!(out, "{}", heading.with(OneDark::YELLOW).bold())?;
        } else {
            writeln!(out, "{heading}")?;
        }
        for line in content.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    pub fn print_entry_list(&self, out: &mut impl Write, keys: &[EntryKey]) -> io::Result<()> {
        if keys.is_empty() {
            return self.print_info(out, "No diary entries found.");
        }
        if self.opts.use_color {
            writeln!(out, "{}", "All Diary Entries:".with(OneDark::YELLOW).bold())?;
        } else {
            writeln!(out, "All Diary Entries:")?;
        }
        for key in keys {
            if self.opts.use_color {
                writeln!(out, "{}", key.as_str().with(OneDark::CYAN))?;
            } else {
                writeln!(out, "{key}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Renderer {
        Renderer::new(Some(RenderOptions { use_color: false }))
    }

    fn render(f: impl FnOnce(&Renderer, &mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&plain(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn menu_lists_all_six_choices() {
        let text = render(|r, out| r.print_menu(out));
        assert!(text.contains("Personal Diary Application"));
        assert!(text.contains("1. Create New Entry"));
        assert!(text.contains("2. View Entry"));
        assert!(text.contains("3. Edit Entry"));
        assert!(text.contains("4. Delete Entry"));
        assert!(text.contains("5. List All Entries"));
        assert!(text.contains("6. Exit"));
    }

    #[test]
    fn entry_keeps_line_order() {
        let text = render(|r, out| r.print_entry(out, "Diary Entry for 2024-05-01:", "a\nb\nc"));
        assert_eq!(text, "Diary Entry for 2024-05-01:\na\nb\nc\n");
    }

    #[test]
    fn empty_list_says_so() {
        let text = render(|r, out| r.print_entry_list(out, &[]));
        assert_eq!(text, "No diary entries found.\n");
    }

    #[test]
    fn list_prints_one_key_per_line() {
        let keys = vec![
            EntryKey::parse("2024-01-01").unwrap(),
            EntryKey::parse("2024-01-02").unwrap(),
        ];
        let text = render(|r, out| r.print_entry_list(out, &keys));
        assert_eq!(text, "All Diary Entries:\n2024-01-01\n2024-01-02\n");
    }

    #[test]
    fn colored_menu_renders_heading_through_skin() {
        let renderer = Renderer::new(Some(RenderOptions { use_color: true }));
        let mut out = Vec::new();
        renderer.print_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Personal Diary Application"));
        assert!(!text.contains("# Personal"));
        assert!(text.contains("Create New Entry"));
    }

    #[test]
    fn plain_prompt_has_no_newline() {
        let text = render(|r, out| r.print_prompt(out, "Enter your choice: "));
        assert_eq!(text, "Enter your choice: ");
    }
}
