//! The submission page: form plus the session's registered resources

use shelf_core::ItemKind;
use std::fmt::Write;

const PAGE_TITLE: &str = "Resource Management System";

const STYLE: &str = r#"
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
        .form-group { margin-bottom: 15px; }
        .form-group label { display: block; margin-bottom: 5px; font-weight: bold; }
        .form-group input, .form-group select { width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px; }
        button { background-color: #4CAF50; color: white; padding: 10px 15px; border: none; border-radius: 4px; cursor: pointer; }
        .resource-list { margin-top: 30px; }
        .resource-list li { margin-bottom: 10px; }
"#;

// Shows the size field for digital items and the page count for physical ones
const SCRIPT: &str = r#"
        function updateForm() {
            const type = document.getElementById('itemType').value;
            document.getElementById('sizeGroup').style.display = type === 'digital' ? 'block' : 'none';
            document.getElementById('pagesGroup').style.display = type === 'physical' ? 'block' : 'none';
        }
"#;

/// Render the full page. `entries` are escaped here; callers pass them raw.
pub fn render_page<S: AsRef<str>>(entries: &[S]) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{PAGE_TITLE}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <h1>{PAGE_TITLE}</h1>
"#
    );

    html.push_str(&render_form());

    if !entries.is_empty() {
        html.push_str(
            r#"
    <div class="resource-list">
        <h2>Registered Resources</h2>
        <ul>
"#,
        );
        for entry in entries {
            let _ = writeln!(
                html,
                "            <li>{}</li>",
                html_escape::encode_safe(entry.as_ref())
            );
        }
        html.push_str("        </ul>\n    </div>\n");
    }

    let _ = write!(
        html,
        r#"
    <script>{SCRIPT}    </script>
</body>
</html>
"#
    );

    html
}

fn render_form() -> String {
    let options: String = ItemKind::ALL
        .iter()
        .map(|kind| {
            let label = match kind {
                ItemKind::Digital => "Digital Resource",
                ItemKind::Physical => "Physical Resource",
            };
            format!(
                "\n                <option value=\"{}\">{}</option>",
                kind.tag(),
                label
            )
        })
        .collect();

    format!(
        r#"
    <form method="POST" id="resourceForm">
        <div class="form-group">
            <label for="itemType">Resource Type:</label>
            <select name="itemType" id="itemType" onchange="updateForm()">
                <option value="">Select Type</option>{options}
            </select>
        </div>

        <div class="form-group">
            <label for="title">Title:</label>
            <input type="text" id="title" name="title" required>
        </div>

        <div class="form-group">
            <label for="author">Creator:</label>
            <input type="text" id="author" name="author" required>
        </div>

        <div class="form-group">
            <label for="year">Year:</label>
            <input type="number" id="year" name="year" required>
        </div>

        <div class="form-group" id="sizeGroup" style="display:none">
            <label for="size">File Size (MB):</label>
            <input type="number" id="size" name="size" step="0.1">
        </div>

        <div class="form-group" id="pagesGroup" style="display:none">
            <label for="pages">Page Count:</label>
            <input type="number" id="pages" name="pages">
        </div>

        <button type="submit">Add Resource</button>
    </form>
"#
    )
}
