/// Which part of the window currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Typing goes into the document
    Edit,
    /// A drop-down menu is open
    Menu,
    /// The Save / Don't Save / Cancel dialog is open
    Confirm,
    /// The Open or Save As path prompt is open
    Prompt,
    /// An error message is open
    Alert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_variants() {
        assert_eq!(Mode::Edit, Mode::Edit);
        assert_ne!(Mode::Edit, Mode::Menu);
        assert_ne!(Mode::Prompt, Mode::Confirm);
    }
}
