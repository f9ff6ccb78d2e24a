use super::form::FormFields;

/// Everything the console shows: form fields, flash area, clipboard slot and
/// the two rendered result areas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsoleState {
    pub form: FormFields,
    pub flash: FlashMessage,
    pub clipboard: Clipboard,
    /// HTML for the item results area.
    pub item_results: String,
    /// HTML `<tr>` rows for the shopcart listing body.
    pub shopcart_rows: String,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blanks every field and result area and clears the flash.
    /// The clipboard survives.
    pub fn clear(&mut self) {
        self.form.clear();
        self.flash.clear();
        self.item_results.clear();
        self.shopcart_rows.clear();
    }
}

/// Single-slot status text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlashMessage(String);

impl FlashMessage {
    pub fn show(&mut self, message: impl Into<String>) {
        self.0 = message.into();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scratch slot for moving a shopcart id between fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clipboard(Option<String>);

impl Clipboard {
    pub fn copy(&mut self, value: impl Into<String>) {
        self.0 = Some(value.into());
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_clipboard_when_cleared() {
        let mut state = ConsoleState::new();
        state.form.shopcart_id = "7".to_string();
        state.flash.show("Success");
        state.clipboard.copy("7");
        state.item_results = "<table></table>".to_string();
        state.shopcart_rows = "<tr></tr>".to_string();

        state.clear();

        assert_eq!(state.form, FormFields::default());
        assert!(state.flash.is_empty());
        assert!(state.item_results.is_empty());
        assert!(state.shopcart_rows.is_empty());
        assert_eq!(state.clipboard.value(), Some("7"));
    }

    #[test]
    fn should_replace_previous_flash() {
        let mut flash = FlashMessage::default();
        flash.show("first");
        flash.show("second");

        assert_eq!(flash.as_str(), "second");
    }

    #[test]
    fn should_start_with_empty_clipboard() {
        assert_eq!(Clipboard::default().value(), None);
    }
}
