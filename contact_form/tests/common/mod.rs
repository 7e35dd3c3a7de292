use std::sync::LazyLock;

use contact_form::{build_form, ContactFormImpl};
use contact_form_config::DEFAULT_CONFIG_PATH;
use regex::Regex;

static TEXT_NODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">([^<]+)<").unwrap());
static TEST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<[a-z0-9]+[^>]*\sdata-testid="([^"]+)"[^>]*>([^<]*)<"#).unwrap()
});
static LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<label for="([^"]+)">([^<]*)</label>"#).unwrap());
static BUTTON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<button[\s>]").unwrap());

pub fn render_form() -> ContactFormImpl {
    let config = contact_form_config::load(&[DEFAULT_CONFIG_PATH]).unwrap();
    build_form(&config)
}

/// Queries over rendered markup, restricted to the document body.
pub struct Screen {
    body: String,
}

impl Screen {
    pub fn new(html: &str) -> Self {
        let start = html.find("<body>").map_or(0, |i| i + "<body>".len());
        let end = html.rfind("</body>").unwrap_or(html.len());
        Self {
            body: html[start..end].into(),
        }
    }

    pub fn of(form: &ContactFormImpl) -> Self {
        Self::new(&form.render().unwrap())
    }

    fn texts(&self) -> impl Iterator<Item = String> + '_ {
        TEXT_NODE
            .captures_iter(&self.body)
            .map(|c| unescape(c[1].trim()))
            .filter(|text| !text.is_empty())
    }

    /// Text nodes equal to `text`.
    pub fn query_all_by_text(&self, text: &str) -> Vec<String> {
        self.texts().filter(|t| t == text).collect()
    }

    /// Text nodes matched by `pattern`.
    pub fn query_all_by_text_matching(&self, pattern: &Regex) -> Vec<String> {
        self.texts().filter(|t| pattern.is_match(t)).collect()
    }

    pub fn query_by_text(&self, text: &str) -> Option<String> {
        let mut found = self.query_all_by_text(text);
        assert!(found.len() <= 1, "Found multiple elements with text {text:?}");
        found.pop()
    }

    /// Text content of every element tagged with `data-testid="{id}"`.
    pub fn query_all_by_test_id(&self, id: &str) -> Vec<String> {
        TEST_ID
            .captures_iter(&self.body)
            .filter(|c| &c[1] == id)
            .map(|c| unescape(c[2].trim()))
            .collect()
    }

    pub fn query_by_test_id(&self, id: &str) -> Option<String> {
        let mut found = self.query_all_by_test_id(id);
        assert!(found.len() <= 1, "Found multiple elements with test id {id:?}");
        found.pop()
    }

    /// The id of the input associated with the label matched by `pattern`.
    pub fn get_by_label_text(&self, pattern: &Regex) -> String {
        let mut ids = LABEL
            .captures_iter(&self.body)
            .filter(|c| pattern.is_match(&c[2]))
            .map(|c| c[1].to_owned())
            .collect::<Vec<_>>();
        assert_eq!(ids.len(), 1, "Expected exactly one label matching {pattern}");
        let id = ids.remove(0);
        assert!(
            self.body.contains(&format!(r#"<input id="{id}""#)),
            "Label {id:?} is not associated with an input"
        );
        id
    }

    pub fn query_all_buttons(&self) -> usize {
        BUTTON.find_iter(&self.body).count()
    }
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#x2F;", "/")
        .replace("&amp;", "&")
}
