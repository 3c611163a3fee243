//! Tab selector for the three source buffers.

use crate::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which source buffer is bound to the visible editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    #[serde(rename = "html")]
    Markup,
    #[serde(rename = "css")]
    Style,
    #[serde(rename = "js")]
    Script,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Markup, Tab::Style, Tab::Script];

    /// Stable wire id (`html`, `css`, `js`).
    pub fn id(self) -> &'static str {
        match self {
            Tab::Markup => "html",
            Tab::Style => "css",
            Tab::Script => "js",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Markup => "HTML",
            Tab::Style => "CSS",
            Tab::Script => "JavaScript",
        }
    }

    /// Caption shown above the editor for the active tab.
    pub fn editor_caption(self) -> String {
        format!("{} Code:", self.label())
    }

    /// Hint text shown when the active buffer is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Tab::Markup => {
                "<!-- Write your HTML here -->\n\n<h1>Hello!</h1>\n<p>This is a live preview.</p>"
            }
            Tab::Style => {
                "/* Write your CSS here */\n\nh1 {\n  color: #38bdf8;\n}\np {\n  font-size: 1.1em;\n}"
            }
            Tab::Script => {
                "// Write your JavaScript here\n\nconsole.log('Hello from JS!');\ndocument.body.style.backgroundColor = 'rgba(0,0,0,0.1)';"
            }
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == normalized)
            .ok_or_else(|| AppError::UnknownTab(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn parse_accepts_wire_ids_case_insensitively() {
        assert_eq!("html".parse::<Tab>().expect("html"), Tab::Markup);
        assert_eq!(" CSS ".parse::<Tab>().expect("css"), Tab::Style);
        assert_eq!("Js".parse::<Tab>().expect("js"), Tab::Script);
    }

    #[test]
    fn parse_rejects_values_outside_closed_set() {
        for value in ["", "javascript", "markup", "ts"] {
            let err = value.parse::<Tab>().expect_err("must reject");
            assert!(err.to_string().contains("Unknown tab"), "value: {}", value);
        }
    }

    #[test]
    fn serde_uses_wire_ids() {
        let json = serde_json::to_string(&Tab::Script).expect("serialize");
        assert_eq!(json, "\"js\"");
        let tab: Tab = serde_json::from_str("\"css\"").expect("deserialize");
        assert_eq!(tab, Tab::Style);
    }

    #[test]
    fn markup_is_default_and_captions_follow_labels() {
        assert_eq!(Tab::default(), Tab::Markup);
        assert_eq!(Tab::Script.editor_caption(), "JavaScript Code:");
    }
}
