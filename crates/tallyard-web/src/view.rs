//! HTML views.
//!
//! Pages are rendered as plain strings; nothing here is big enough to
//! warrant a template engine. All interpolated data goes through
//! [`escape`].

use tallyard_core::{Question, TotalsRow};

/// Escapes text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps page content in the shared document shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// The question table with its bulk-update form.
pub fn index_page(questions: &[Question]) -> String {
    let mut rows = String::new();
    for question in questions {
        let mark = question
            .marks
            .map(|m| m.to_string())
            .unwrap_or_default();
        rows.push_str(&format!(
            "<tr>\
             <td>{id}</td>\
             <td>{label}</td>\
             <td>\
             <input type=\"hidden\" name=\"ids[]\" value=\"{id}\">\
             <input type=\"number\" name=\"marks[]\" min=\"1\" max=\"5\" value=\"{mark}\">\
             </td>\
             </tr>\n",
            id = question.id,
            label = escape(&question.label),
            mark = escape(&mark),
        ));
    }

    let body = format!(
        "<h1>Questions</h1>\n\
         <form method=\"post\" action=\"/update-all\">\n\
         <table>\n\
         <tr><th>ID</th><th>Label</th><th>Marks</th></tr>\n\
         {rows}\
         </table>\n\
         <button type=\"submit\">Save all marks</button>\n\
         </form>\n\
         <p><a href=\"/totals\">View totals</a></p>",
    );
    layout("Questions", &body)
}

/// The totals table with the spreadsheet-export form.
pub fn totals_page(totals: &[TotalsRow]) -> String {
    let mut rows = String::new();
    for total in totals {
        rows.push_str(&format!(
            "<tr><td>{label}</td><td>{total}</td><td>{category}</td></tr>\n",
            label = escape(&total.label),
            total = total.total_marks,
            category = total.category_str(),
        ));
    }

    let totals_json = serde_json::to_string(totals).unwrap_or_default();
    let body = format!(
        "<h1>Totals</h1>\n\
         <table>\n\
         <tr><th>Label</th><th>Total marks</th><th>Category</th></tr>\n\
         {rows}\
         </table>\n\
         <form method=\"post\" action=\"/add-to-sheet\">\n\
         <input type=\"hidden\" name=\"totals\" value=\"{totals_json}\">\n\
         <label>Coping: <input type=\"text\" name=\"coping\"></label>\n\
         <button type=\"submit\">Add to sheet</button>\n\
         </form>\n\
         <p><a href=\"/\">Back to questions</a></p>",
        totals_json = escape(&totals_json),
    );
    layout("Totals", &body)
}

/// A short inline error page.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Something went wrong</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>",
        escape(message),
    );
    layout("Error", &body)
}
