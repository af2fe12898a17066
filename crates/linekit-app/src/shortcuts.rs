//! Keyboard shortcut registry and documentation.

use linekit_core::EditMode;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: String,
    pub description: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts: one per mode, then Escape.
    pub fn all() -> Vec<Shortcut> {
        let mut shortcuts: Vec<Shortcut> = EditMode::ALL
            .iter()
            .map(|mode| Shortcut::new(mode.key().to_string(), format!("{} mode", mode.name())))
            .collect();
        shortcuts.push(Shortcut::new("Escape", "Cancel current pick or drag"));
        shortcuts
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:10} {}", shortcut.key, shortcut.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_a_shortcut() {
        let keys: Vec<String> = ShortcutRegistry::all().into_iter().map(|s| s.key).collect();
        assert_eq!(keys, ["p", "l", "m", "i", "Escape"]);
    }
}
