//! Server-rendered HTML for the list and edit pages.

use std::fmt::Write as _;

use problem_tracker_core::ProblemRecord;

/// Progress labels offered by the forms. Stored values are free text.
const PROGRESS_OPTIONS: [&str; 3] = ["Not Started", "In Progress", "Done"];

const PRIORITY_OPTIONS: [&str; 3] = ["High", "Medium", "Low"];

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;}\
table{border-collapse:collapse;width:100%;}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left;vertical-align:top;}\
img.thumb{max-width:100px;max-height:75px;}\
form.stack label{display:block;margin:.4rem 0;}";

/// In-place progress update without reloading the page.
const PROGRESS_SCRIPT: &str = r"
document.querySelectorAll('select.progress').forEach(function (sel) {
  sel.addEventListener('change', function () {
    var body = new URLSearchParams({ progress: sel.value });
    fetch('/update_progress/' + sel.dataset.id, { method: 'POST', body: body })
      .then(function (r) { return r.json(); })
      .then(function (data) { sel.title = data.message; });
  });
});
";

pub fn index_page(problems: &[ProblemRecord]) -> String {
    let mut rows = String::new();
    for p in problems {
        let image = p.image.as_deref().map_or_else(String::new, |name| {
            format!(r#"<img class="thumb" src="/uploads/{}" alt="{}">"#, encode_path_segment(name), escape_html(name))
        });
        let _ = write!(
            rows,
            r#"<tr><td>{id}</td><td>{category}</td><td>{description}</td><td>{image}</td><td>{date}</td><td>{comment}</td><td>{progress}</td><td>{priority}</td><td><a href="/edit/{id}">Edit</a> <a href="/delete/{id}">Delete</a></td></tr>"#,
            id = p.id,
            category = escape_html(&p.category),
            description = escape_html(&p.description),
            date = escape_html(&p.date),
            comment = escape_html(p.comment.as_deref().unwrap_or_default()),
            progress = progress_select(p.id, &p.progress),
            priority = escape_html(&p.priority),
        );
    }

    page(
        "Problems",
        &format!(
            r#"<h1>Report a problem</h1>
<form class="stack" method="post" action="/" enctype="multipart/form-data">
{fields}
<button type="submit">Submit</button>
</form>
<p><a href="/export">Export to Excel</a></p>
<h2>Problems</h2>
<table>
<tr><th>ID</th><th>Category</th><th>Description</th><th>Image</th><th>Date</th><th>Comment</th><th>Progress</th><th>Priority</th><th></th></tr>
{rows}
</table>
<script>{PROGRESS_SCRIPT}</script>"#,
            fields = form_fields(None),
        ),
    )
}

pub fn edit_page(problem: &ProblemRecord) -> String {
    let current_image = problem.image.as_deref().map_or_else(String::new, |name| {
        format!("<p>Current image: {}</p>", escape_html(name))
    });
    page(
        "Edit problem",
        &format!(
            r#"<h1>Edit problem #{id}</h1>
<form class="stack" method="post" action="/update/{id}" enctype="multipart/form-data">
{fields}
{current_image}
<button type="submit">Save</button>
</form>
<p><a href="/">Back</a></p>"#,
            id = problem.id,
            fields = form_fields(Some(problem)),
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title><style>{STYLE}</style></head>\n<body>\n{body}\n</body></html>\n",
        escape_html(title)
    )
}

fn form_fields(problem: Option<&ProblemRecord>) -> String {
    let value = |f: fn(&ProblemRecord) -> &str| problem.map_or("", f);
    format!(
        r#"<label>Category <input name="category" required value="{category}"></label>
<label>Description <textarea name="description" required>{description}</textarea></label>
<label>Image <input type="file" name="image" accept="image/*"></label>
<label>Comment <textarea name="comment">{comment}</textarea></label>
<label>Progress <select name="progress">{progress}</select></label>
<label>Priority <select name="priority">{priority}</select></label>"#,
        category = escape_html(value(|p| p.category.as_str())),
        description = escape_html(value(|p| p.description.as_str())),
        comment = escape_html(value(|p| p.comment.as_deref().unwrap_or_default())),
        progress = options(&PROGRESS_OPTIONS, value(|p| p.progress.as_str())),
        priority = options(&PRIORITY_OPTIONS, problem.map_or(problem_tracker_core::DEFAULT_PRIORITY, |p| p.priority.as_str())),
    )
}

fn progress_select(id: i64, current: &str) -> String {
    format!(r#"<select class="progress" data-id="{id}">{}</select>"#, options(&PROGRESS_OPTIONS, current))
}

/// `<option>` list; a current value outside `choices` is kept as an extra option.
fn options(choices: &[&str], current: &str) -> String {
    let mut out = String::new();
    if !current.is_empty() && !choices.contains(&current) {
        let _ = write!(out, r#"<option selected>{}</option>"#, escape_html(current));
    }
    for choice in choices {
        let selected = if *choice == current { " selected" } else { "" };
        let _ = write!(out, "<option{selected}>{}</option>", escape_html(choice));
    }
    out
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a filename for use as a single URL path segment.
fn encode_path_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}
