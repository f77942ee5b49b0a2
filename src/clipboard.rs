// clipboard.rs - Cut/copy/paste storage for the editor
use anyhow::Result;

/// Clipboard backed by the system clipboard when available.
///
/// Copied text is always kept in an in-process register as well, so paste keeps working
/// in headless sessions where the system clipboard cannot be opened.
pub struct Clipboard {
    #[cfg(feature = "clipboard")]
    system: Option<arboard::Clipboard>,
    register: String,
    /// Set when the system clipboard rejected the last copy, so it holds older text
    register_is_newer: bool,
}

impl Clipboard {
    /// Register-only clipboard that never touches the system clipboard
    pub fn detached() -> Self {
        Self {
            #[cfg(feature = "clipboard")]
            system: None,
            register: String::new(),
            register_is_newer: false,
        }
    }

    /// Get text content, preferring the system clipboard unless the last copy never reached it
    pub fn get_text(&mut self) -> String {
        if self.register_is_newer {
            return self.register.clone();
        }
        self.system_get().unwrap_or_else(|| self.register.clone())
    }

    /// Set text content. The register is always updated; an error means only the system
    /// clipboard rejected it.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let result = self.system_set(text);
        self.store(text, result)
    }

    fn store(&mut self, text: &str, system_result: Result<()>) -> Result<()> {
        self.register = text.to_string();
        self.register_is_newer = system_result.is_err();
        system_result
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard {
    /// Connect to the system clipboard, falling back to the register on failure
    pub fn new() -> Self {
        let system = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("system clipboard unavailable, using internal register: {}", e);
                None
            }
        };
        Self {
            system,
            register: String::new(),
            register_is_newer: false,
        }
    }

    pub fn is_system(&self) -> bool {
        self.system.is_some()
    }

    fn system_get(&mut self) -> Option<String> {
        match self.system.as_mut()?.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("system clipboard read failed: {}", e);
                None
            }
        }
    }

    fn system_set(&mut self, text: &str) -> Result<()> {
        if let Some(system) = self.system.as_mut() {
            system
                .set_text(text)
                .map_err(|e| anyhow::anyhow!("Failed to set clipboard text: {}", e))?;
        }
        Ok(())
    }
}

#[cfg(not(feature = "clipboard"))]
impl Clipboard {
    pub fn new() -> Self {
        Self::detached()
    }

    pub fn is_system(&self) -> bool {
        false
    }

    fn system_get(&mut self) -> Option<String> {
        None
    }

    fn system_set(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::detached()
    }
}
