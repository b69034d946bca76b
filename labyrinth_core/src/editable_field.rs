//! Headless model of the inline editable text field used for player names.
//!
//! The field renders two text elements, one for the placeholder and one for
//! the committed text, plus an input that is shown while editing.

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ElementKind {
    Placeholder,
    Text,
    Input,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct EditableField {
    placeholder: String,
    text: String,
    input: String,
    editing: bool,
}

impl EditableField {
    pub fn new(placeholder: &str) -> Self {
        EditableField {
            placeholder: placeholder.to_string(),
            text: String::new(),
            input: String::new(),
            editing: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Starts editing with the committed text as input value.
    pub fn click(&mut self) {
        if !self.editing {
            self.input = self.text.clone();
            self.editing = true;
        }
    }

    /// Replaces the input value. Ignored unless editing.
    pub fn set_value(&mut self, value: &str) {
        if self.editing {
            self.input = value.to_string();
        }
    }

    /// Stops editing and commits the input value.
    pub fn blur(&mut self) {
        if self.editing {
            self.text = std::mem::take(&mut self.input);
            self.editing = false;
        }
    }

    pub fn content(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }

    pub fn elements(&self) -> [Element; 3] {
        let show_placeholder = self.text.is_empty();
        [
            Element {
                kind: ElementKind::Placeholder,
                text: self.placeholder.clone(),
                visible: show_placeholder,
            },
            Element {
                kind: ElementKind::Text,
                text: self.text.clone(),
                visible: !show_placeholder,
            },
            Element {
                kind: ElementKind::Input,
                text: self.input.clone(),
                visible: self.editing,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::editable_field::{EditableField, Element, ElementKind};

    static PLACEHOLDER: &str = "XYZ";

    #[test]
    fn content_should_be_placeholder_from_the_start() {
        let field = EditableField::new(PLACEHOLDER);

        assert_eq!(visible_text(&field), PLACEHOLDER);
        assert_eq!(field.content(), PLACEHOLDER);
    }

    #[test]
    fn content_should_be_placeholder_if_empty_text_was_set() {
        let mut field = EditableField::new(PLACEHOLDER);
        given_text_set(&mut field, "");

        field.blur();

        assert_eq!(visible_text(&field), PLACEHOLDER);
    }

    #[test]
    fn content_should_be_set_text() {
        let mut field = EditableField::new(PLACEHOLDER);
        given_text_set(&mut field, "asdf");

        field.blur();

        assert_eq!(visible_text(&field), "asdf");
        assert_eq!(field.text(), "asdf");
    }

    #[test]
    fn clearing_text_should_restore_placeholder() {
        let mut field = EditableField::new(PLACEHOLDER);
        given_text_set(&mut field, "asdf");
        field.blur();

        given_text_set(&mut field, "");
        field.blur();

        assert_eq!(visible_text(&field), PLACEHOLDER);
    }

    #[test]
    fn should_show_only_one_text_when_not_editing() {
        let field = EditableField::new(PLACEHOLDER);

        assert_eq!(visible_texts(&field).len(), 1);
        assert!(!input(&field).visible);
    }

    #[test]
    fn should_show_only_one_text_when_editing() {
        let mut field = EditableField::new(PLACEHOLDER);

        field.click();

        assert_eq!(visible_texts(&field).len(), 1);
        assert!(input(&field).visible);
        assert!(field.is_editing());
    }

    #[test]
    fn click_should_start_with_committed_text() {
        let mut field = EditableField::new(PLACEHOLDER);
        given_text_set(&mut field, "asdf");
        field.blur();

        field.click();

        assert_eq!(input(&field).text, "asdf");
    }

    #[test]
    fn set_value_should_be_ignored_when_not_editing() {
        let mut field = EditableField::new(PLACEHOLDER);

        field.set_value("asdf");
        field.blur();

        assert_eq!(field.content(), PLACEHOLDER);
    }

    // Infra ----------------------------------------------------------------

    fn given_text_set(field: &mut EditableField, text: &str) {
        field.click();
        field.set_value(text);
    }

    fn visible_texts(field: &EditableField) -> Vec<Element> {
        field
            .elements()
            .into_iter()
            .filter(|e| e.kind != ElementKind::Input && e.visible)
            .collect()
    }

    fn visible_text(field: &EditableField) -> String {
        visible_texts(field)[0].text.clone()
    }

    fn input(field: &EditableField) -> Element {
        field
            .elements()
            .into_iter()
            .find(|e| e.kind == ElementKind::Input)
            .unwrap()
    }
}
