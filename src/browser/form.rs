use select::document::Document;
use select::node::Node;
use select::predicate::{Name, Or};

use crate::error::BrowseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A named form control together with the value that would be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub name: String,
    pub value: String,
    /// Allowed values for a `<select>`, `None` for free text.
    pub options: Option<Vec<String>>,
}

/// An HTML form as the browser would submit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub action: Option<String>,
    pub method: Method,
    pub classes: Vec<String>,
    controls: Vec<Control>,
    /// Pairs added for the clicked submit control.
    clicked: Vec<(String, String)>,
}

impl Form {
    /// All forms of a page in document order.
    #[must_use]
    pub fn parse_all(html: &str) -> Vec<Self> {
        let document = Document::from(html);
        document.find(Name("form")).map(Self::from_node).collect()
    }

    fn from_node(node: Node<'_>) -> Self {
        let method = match node.attr("method") {
            Some(m) if m.eq_ignore_ascii_case("post") => Method::Post,
            _ => Method::Get,
        };
        let mut form = Self {
            action: node
                .attr("action")
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(String::from),
            method,
            classes: node
                .attr("class")
                .map(|c| c.split_whitespace().map(String::from).collect())
                .unwrap_or_default(),
            controls: Vec::new(),
            clicked: Vec::new(),
        };

        let fields = Or(
            Name("input"),
            Or(Name("select"), Or(Name("textarea"), Name("button"))),
        );
        for field in node.find(fields) {
            let Some(name) = field.attr("name") else {
                continue;
            };
            if field.attr("disabled").is_some() {
                continue;
            }
            match field.name() {
                Some("select") => form.push_select(name, field),
                Some("textarea") => form.push(name, field.text(), None),
                Some("button") => {
                    let kind = field.attr("type").unwrap_or("submit");
                    if kind.eq_ignore_ascii_case("submit") {
                        form.offer_submit(name, field.attr("value").unwrap_or_default());
                    }
                }
                _ => form.push_input(name, field),
            }
        }
        form
    }

    fn push_input(&mut self, name: &str, field: Node<'_>) {
        let kind = field.attr("type").unwrap_or("text").to_ascii_lowercase();
        let value = field.attr("value").unwrap_or_default();
        match kind.as_str() {
            "submit" => self.offer_submit(name, value),
            "image" => {
                if self.clicked.is_empty() {
                    self.clicked.push((format!("{name}.x"), "0".into()));
                    self.clicked.push((format!("{name}.y"), "0".into()));
                }
            }
            "button" | "reset" | "file" => {}
            "checkbox" | "radio" => {
                if field.attr("checked").is_some() {
                    let value = if value.is_empty() { "on" } else { value };
                    self.push(name, value.to_string(), None);
                }
            }
            _ => self.push(name, value.to_string(), None),
        }
    }

    fn push_select(&mut self, name: &str, field: Node<'_>) {
        let mut options = Vec::new();
        let mut selected = None;
        for option in field.find(Name("option")) {
            let value = option
                .attr("value")
                .map_or_else(|| option.text().trim().to_string(), String::from);
            if selected.is_none() && option.attr("selected").is_some() {
                selected = Some(value.clone());
            }
            options.push(value);
        }
        let value = selected
            .or_else(|| options.first().cloned())
            .unwrap_or_default();
        self.push(name, value, Some(options));
    }

    fn push(&mut self, name: &str, value: String, options: Option<Vec<String>>) {
        self.controls.push(Control {
            name: name.to_string(),
            value,
            options,
        });
    }

    fn offer_submit(&mut self, name: &str, value: &str) {
        if self.clicked.is_empty() {
            self.clicked.push((name.to_string(), value.to_string()));
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// Set the first control called `name`.
    ///
    /// A `<select>` only accepts one of its option values.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), BrowseError> {
        let control = self
            .controls
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| BrowseError::ControlNotFound(name.to_string()))?;
        if let Some(options) = &control.options {
            if !options.iter().any(|o| o == value) {
                return Err(BrowseError::OptionNotFound {
                    control: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        control.value = value.to_string();
        Ok(())
    }

    /// The name/value pairs sent on submit, clicked button last.
    #[must_use]
    pub fn fields(&self) -> Vec<(String, String)> {
        self.controls
            .iter()
            .map(|c| (c.name.clone(), c.value.clone()))
            .chain(self.clicked.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_boxes_are_not_sent() {
        let forms = Form::parse_all(
            r#"<form><input type="checkbox" name="a"><input type="checkbox" name="b" checked></form>"#,
        );
        assert_eq!(forms[0].fields(), vec![("b".into(), "on".into())]);
    }

    #[test]
    fn first_submit_button_is_clicked() {
        let forms = Form::parse_all(
            r#"<form><input name="q" value="x"><button name="go" value="1">Go</button><input type="submit" name="other" value="2"></form>"#,
        );
        assert_eq!(
            forms[0].fields(),
            vec![("q".into(), "x".into()), ("go".into(), "1".into())]
        );
    }

    #[test]
    fn select_without_selected_uses_first_option() {
        let forms = Form::parse_all(
            r#"<form><select name="type"><option>MX</option><option value="TXT">Text</option></select></form>"#,
        );
        assert_eq!(forms[0].get("type"), Some("MX"));
    }

    #[test]
    fn select_rejects_unknown_option() {
        let mut form = Form::parse_all(
            r#"<form><select name="type"><option value="MX">MX</option><option value="TXT" selected>TXT</option></select></form>"#,
        )
        .remove(0);
        assert_eq!(form.get("type"), Some("TXT"));
        assert!(matches!(
            form.set("type", "NS"),
            Err(BrowseError::OptionNotFound { .. })
        ));
        form.set("type", "MX").unwrap();
        assert_eq!(form.get("type"), Some("MX"));
    }

    #[test]
    fn setting_missing_control_fails() {
        let mut form = Form::parse_all(r#"<form class="form-login"><input name="loginID"></form>"#)
            .remove(0);
        assert!(form.has_class("form-login"));
        assert!(matches!(
            form.set("subDomain", "www"),
            Err(BrowseError::ControlNotFound(n)) if n == "subDomain"
        ));
    }

    #[test]
    fn disabled_controls_are_not_sent() {
        let forms = Form::parse_all(
            r#"<form><input name="a" value="1" disabled><select name="type" disabled><option>MX</option></select><input name="b" value="2"><input type="submit" name="old" value="x" disabled><input type="submit" name="go" value="y"></form>"#,
        );
        assert_eq!(
            forms[0].fields(),
            vec![("b".into(), "2".into()), ("go".into(), "y".into())]
        );
        assert_eq!(forms[0].get("type"), None);
    }

    #[test]
    fn image_input_sends_coordinates() {
        let forms = Form::parse_all(
            r#"<form><input name="q" value="x"><input type="image" name="save" value="ignored" src="s.png"></form>"#,
        );
        assert_eq!(
            forms[0].fields(),
            vec![
                ("q".into(), "x".into()),
                ("save.x".into(), "0".into()),
                ("save.y".into(), "0".into()),
            ]
        );
    }
}
