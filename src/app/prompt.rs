//! Synchrone Benutzer-Abfragen (Etagenname, Referenzlänge, Lösch-Bestätigung).
//!
//! Ein abgebrochener Prompt (`None`) wird wie eine leere Eingabe behandelt.

/// Synchrone Abfrage beim Benutzer, bereitgestellt vom UI-Host.
pub trait UserPrompt {
    /// Fragt einen Text ab. `None` = abgebrochen.
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String>;

    /// Fragt eine Ja/Nein-Bestätigung ab.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Prompt ohne UI: bricht jede Abfrage ab und verneint jede Bestätigung.
#[derive(Debug, Default, Clone, Copy)]
pub struct CancelPrompt;

impl UserPrompt for CancelPrompt {
    fn prompt_text(&mut self, message: &str, _default: &str) -> Option<String> {
        log::debug!("Prompt ohne UI abgebrochen: {}", message);
        None
    }

    fn confirm(&mut self, message: &str) -> bool {
        log::debug!("Bestätigung ohne UI verneint: {}", message);
        false
    }
}

/// Liest eine Eingabe und normalisiert Abbruch und Leerstring zu `None`.
pub fn prompt_non_empty(prompt: &mut dyn UserPrompt, message: &str, default: &str) -> Option<String> {
    prompt
        .prompt_text(message, default)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
