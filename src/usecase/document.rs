//! Fixed page chrome around the rendered tree.
//!
//! Collapsing is done with sibling selectors on hidden checkboxes: an
//! unchecked folder shows its `[+]` label and hides its list, a checked one
//! shows `[-]` and the list. `#show-all` forces every nested list open.

pub const STYLESHEET: &str = r#"<style>
    * {
        font-family: monospace;
    }
    label {
        font-weight: bold;
    }
    a {
        color: black;
    }
    a:hover {
        background: #dddddd;
    }
    input {
        display: none;
    }
    input~ul {
        display: none;
    }
    input:checked~ul {
        display: block;
    }
    input~.f {
        display: block;
    }
    input:checked~.f {
        display: none;
    }
    .f:hover {
        background: #e6ffed;
    }
    input~.s {
        display: none;
    }
    input:checked~.s {
        display: block;
    }
    .s:hover {
        background: #ffeef0;
    }
    #show-all:checked~ul ul {
        display: block;
    }
    #show-all:checked~ul .f {
        display: none;
    }
    #show-all:checked~ul .s {
        display: block;
    }
</style>
"#;

pub const SHOW_ALL: &str = concat!(
    r#"<input type="checkbox" id="show-all"/><label for="show-all">"#,
    "Show all ! (useful on small screens)",
    "</label><br><br>\n"
);

/// Stylesheet, link count, the show-all toggle, then `body`, newline-terminated.
pub fn assemble_document(body: &str, links: usize) -> String {
    let mut out = String::with_capacity(STYLESHEET.len() + SHOW_ALL.len() + body.len() + 64);
    out.push_str(STYLESHEET);
    out.push_str(&format!("There are {links} links.<br><br>\n"));
    out.push_str(SHOW_ALL);
    out.push_str(body);
    out.push('\n');
    out
}
