//! Snapshot tests for the rendered preview text.

use resume_model::default_document;
use resume_render::{plain_text, render};

#[test]
fn default_document_preview() {
    let doc = default_document();
    let text = plain_text(&render(&doc));
    insta::assert_snapshot!(text);
}

#[test]
fn preview_header_json() {
    let doc = default_document();
    let tree = render(&doc);
    insta::assert_json_snapshot!(tree.header, @r#"
    {
      "name": "Takuro Akiyama",
      "contact_line": "Golden Beach, QLD, Australia | +61 405 726 234 | akiyaman0212@gmail.com | linkedin.com/in/takuro-akiyama-46477b221"
    }
    "#);
}
