//! Actions: small JavaScript snippets attached to element events.
//!
//! An action only has to know how to compile itself to a script. The
//! attribute store keeps the compiled text, so attaching the same action
//! twice to one event is idempotent.

/// Something that runs in the browser in response to an event.
pub trait Action {
    fn compile(&self) -> String;
}

/// The events an element can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Click,
    DoubleClick,
    /// Pointer enters (`mouseover`).
    HoverStart,
    /// Pointer leaves (`mouseout`).
    HoverEnd,
    Change,
    Submit,
}

impl Event {
    /// DOM event name, without the `on` prefix.
    pub fn name(self) -> &'static str {
        match self {
            Event::Click => "click",
            Event::DoubleClick => "dblclick",
            Event::HoverStart => "mouseover",
            Event::HoverEnd => "mouseout",
            Event::Change => "change",
            Event::Submit => "submit",
        }
    }
}

/// Removes `d-none` from the element with the given id.
#[derive(Debug, Clone)]
pub struct ShowElement(pub String);

impl Action for ShowElement {
    fn compile(&self) -> String {
        format!("document.getElementById('{}').classList.remove('d-none')", self.0)
    }
}

/// Adds `d-none` to the element with the given id.
#[derive(Debug, Clone)]
pub struct HideElement(pub String);

impl Action for HideElement {
    fn compile(&self) -> String {
        format!("document.getElementById('{}').classList.add('d-none')", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ToggleElement(pub String);

impl Action for ToggleElement {
    fn compile(&self) -> String {
        format!("document.getElementById('{}').classList.toggle('d-none')", self.0)
    }
}

/// Adds a class to the element with `id`.
#[derive(Debug, Clone)]
pub struct AddClass {
    pub id: String,
    pub class: String,
}

impl Action for AddClass {
    fn compile(&self) -> String {
        format!(
            "document.getElementById('{}').classList.add('{}')",
            self.id, self.class
        )
    }
}

#[derive(Debug, Clone)]
pub struct RemoveClass {
    pub id: String,
    pub class: String,
}

impl Action for RemoveClass {
    fn compile(&self) -> String {
        format!(
            "document.getElementById('{}').classList.remove('{}')",
            self.id, self.class
        )
    }
}

/// Arbitrary script, emitted as-is.
#[derive(Debug, Clone)]
pub struct CustomAction(pub String);

impl Action for CustomAction {
    fn compile(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_and_hide_toggle_d_none() {
        assert_eq!(
            ShowElement("menu".into()).compile(),
            "document.getElementById('menu').classList.remove('d-none')"
        );
        assert_eq!(
            HideElement("menu".into()).compile(),
            "document.getElementById('menu').classList.add('d-none')"
        );
    }

    #[test]
    fn custom_action_is_verbatim() {
        assert_eq!(CustomAction("console.log(1)".into()).compile(), "console.log(1)");
    }

    #[test]
    fn hover_events_map_to_mouse_events() {
        assert_eq!(Event::HoverStart.name(), "mouseover");
        assert_eq!(Event::HoverEnd.name(), "mouseout");
    }
}
