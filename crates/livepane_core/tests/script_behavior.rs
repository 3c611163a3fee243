//! Executes the guarded `<script>` of rendered documents against a minimal
//! DOM stand-in, so behaviour is checked by running it rather than by
//! reading the template.

use boa_engine::{Context, Source};
use livepane_core::defaults::{DEFAULT_MARKUP, DEFAULT_SCRIPT, DEFAULT_STYLE};
use livepane_core::render_document;

const DOM_PRELUDE: &str = r#"
const __elements = {};
const __documentListeners = {};
const __console = [];
function __element(tag, id) {
  const handlers = {};
  return {
    tagName: tag,
    id,
    textContent: '',
    style: {},
    children: [],
    addEventListener(type, handler) {
      (handlers[type] = handlers[type] || []).push(handler);
    },
    appendChild(child) {
      this.children.push(child);
      return child;
    },
    dispatch(type) {
      (handlers[type] || []).forEach((handler) => handler({ type, target: this }));
    },
  };
}
const document = {
  body: __element('body', ''),
  getElementById(id) {
    return __elements[id] || null;
  },
  createElement(tag) {
    return __element(tag, '');
  },
  addEventListener(type, handler) {
    (__documentListeners[type] = __documentListeners[type] || []).push(handler);
  },
};
const console = {
  log(...args) { __console.push(['log', args.map(String).join(' ')]); },
  error(...args) { __console.push(['error', args.map(String).join(' ')]); },
};
function __fire(type) {
  (__documentListeners[type] || []).forEach((handler) => handler({ type }));
}
"#;

/// Element ids declared by `id="..."` attributes in the markup.
fn element_ids(markup: &str) -> Vec<&str> {
    markup
        .split("id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

/// The body of the single `<script>` element of a rendered document.
fn guarded_script(document: &str) -> &str {
    let start = document.find("<script>").expect("script open") + "<script>".len();
    let end = document.rfind("</script>").expect("script close");
    &document[start..end]
}

/// Runs `document`'s script, then `scenario`; returns the scenario's final
/// expression, which must be a string.
fn run_preview(markup: &str, document: &str, scenario: &str) -> String {
    let mut source = String::from(DOM_PRELUDE);
    for id in element_ids(markup) {
        source.push_str(&format!("__elements['{id}'] = __element('', '{id}');\n"));
    }
    source.push_str(guarded_script(document));
    source.push('\n');
    source.push_str(scenario);

    let mut context = Context::default();
    let value = context
        .eval(Source::from_bytes(source.as_str()))
        .expect("preview script runs");
    value
        .as_string()
        .map(|text| text.to_std_string_escaped())
        .expect("scenario returns a string")
}

#[test]
fn default_counter_counts_each_click() {
    let document = render_document(DEFAULT_MARKUP, DEFAULT_STYLE, DEFAULT_SCRIPT);
    let result = run_preview(
        DEFAULT_MARKUP,
        &document,
        r#"
__fire('DOMContentLoaded');
const text = document.getElementById('dynamic-text');
const button = document.getElementById('myButton');
const seen = [];
button.dispatch('click');
seen.push(text.textContent);
button.dispatch('click');
seen.push(text.textContent);
JSON.stringify({ seen, console: __console, errors: document.body.children.length });
"#,
    );
    let outcome: serde_json::Value = serde_json::from_str(&result).expect("json");

    assert_eq!(outcome["seen"][0], "You clicked the button 1 time(s)!");
    assert_eq!(outcome["seen"][1], "You clicked the button 2 time(s)!");
    assert_eq!(outcome["errors"], 0);
    assert_eq!(outcome["console"][0][1], "Button clicked 1 times.");
    assert_eq!(outcome["console"][1][1], "Button clicked 2 times.");
}

#[test]
fn counter_without_its_elements_logs_instead_of_throwing() {
    let document = render_document("<p>no targets</p>", "", DEFAULT_SCRIPT);
    let result = run_preview(
        "<p>no targets</p>",
        &document,
        r#"
__fire('DOMContentLoaded');
JSON.stringify({ console: __console, errors: document.body.children.length });
"#,
    );
    let outcome: serde_json::Value = serde_json::from_str(&result).expect("json");

    assert_eq!(outcome["errors"], 0);
    assert_eq!(outcome["console"][0][0], "error");
    assert_eq!(
        outcome["console"][0][1],
        "Elements with IDs 'myButton' or 'dynamic-text' not found."
    );
}

#[test]
fn throwing_script_appends_red_error_notice() {
    let document = render_document("", "", "undefinedVariable.explode();");
    let result = run_preview(
        "",
        &document,
        r#"
JSON.stringify({
  notices: document.body.children.map((child) => ({
    tag: child.tagName,
    text: child.textContent,
    color: child.style.color,
  })),
  console: __console,
});
"#,
    );
    let outcome: serde_json::Value = serde_json::from_str(&result).expect("json");

    let notices = outcome["notices"].as_array().expect("notices");
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["tag"], "div");
    assert_eq!(notices[0]["color"], "red");
    let text = notices[0]["text"].as_str().expect("notice text");
    assert!(text.starts_with("JavaScript Error: "));
    assert!(text.contains("undefinedVariable"));
    assert_eq!(outcome["console"][0][0], "error");
    assert!(outcome["console"][0][1]
        .as_str()
        .expect("console text")
        .starts_with("Error in JavaScript:"));
}

#[test]
fn explicit_throw_message_reaches_the_notice() {
    let document = render_document("", "", "throw new Error('boom');");
    let result = run_preview(
        "",
        &document,
        "document.body.children.map((child) => child.textContent).join('|');",
    );

    assert_eq!(result, "JavaScript Error: boom");
}

#[test]
fn working_script_adds_no_notice() {
    let markup = "<p id=\"out\"></p>";
    let document = render_document(markup, "", "document.getElementById('out').textContent = 'ok';");
    let result = run_preview(
        markup,
        &document,
        "document.getElementById('out').textContent + ':' + document.body.children.length;",
    );

    assert_eq!(result, "ok:0");
}
